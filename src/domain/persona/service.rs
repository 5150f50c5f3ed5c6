use super::{PersonaError, PersonaMode, PersonaRepository};
use std::sync::Arc;

/// Lookup over the persona catalog.
///
/// The catalog is read once at construction and never reloaded.
pub struct PersonaRegistry {
    modes: Arc<Vec<PersonaMode>>,
}

impl PersonaRegistry {
    pub fn new(repository: Arc<dyn PersonaRepository>) -> Self {
        let modes = repository.get_all_modes();
        tracing::info!(persona_count = modes.len(), "Persona catalog loaded");

        Self {
            modes: Arc::new(modes),
        }
    }

    /// Identifiers in catalog order
    pub fn identifiers(&self) -> Vec<String> {
        self.modes.iter().map(|m| m.identifier.clone()).collect()
    }

    /// Exact, case-sensitive lookup
    pub fn find_mode(&self, identifier: &str) -> Result<PersonaMode, PersonaError> {
        self.modes
            .iter()
            .find(|m| m.identifier == identifier)
            .cloned()
            .ok_or_else(|| {
                tracing::warn!(speaker_mode = %identifier, "Unknown speaker mode requested");
                PersonaError::InvalidPersona {
                    requested: identifier.to_string(),
                    available: self.identifiers(),
                }
            })
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
