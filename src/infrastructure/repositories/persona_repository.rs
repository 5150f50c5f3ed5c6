use crate::domain::persona::{PersonaMode, PersonaRepository};
use std::collections::HashSet;
use std::path::Path;

/// Catalog compiled into the binary, used when no file is configured
const BUNDLED_CATALOG: &str = include_str!("../../../config/speaker_modes.json");

#[derive(Debug, thiserror::Error)]
pub enum PersonaCatalogError {
    #[error("failed to read speaker modes from {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed speaker modes catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate speaker mode: {0}")]
    Duplicate(String),
    #[error("speaker mode entry {0} has an empty identifier or description")]
    Incomplete(usize),
}

/// Persona catalog parsed from a JSON array of `{speaker_mode, content}`
pub struct JsonPersonaRepository {
    modes: Vec<PersonaMode>,
}

impl JsonPersonaRepository {
    pub fn bundled() -> Result<Self, PersonaCatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, PersonaCatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PersonaCatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, PersonaCatalogError> {
        let modes: Vec<PersonaMode> = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for (index, mode) in modes.iter().enumerate() {
            if mode.identifier.trim().is_empty() || mode.description.trim().is_empty() {
                return Err(PersonaCatalogError::Incomplete(index));
            }
            if !seen.insert(mode.identifier.as_str()) {
                return Err(PersonaCatalogError::Duplicate(mode.identifier.clone()));
            }
        }

        Ok(Self { modes })
    }
}

impl PersonaRepository for JsonPersonaRepository {
    fn get_all_modes(&self) -> Vec<PersonaMode> {
        self.modes.clone()
    }
}
