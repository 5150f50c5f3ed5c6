use serde::{Deserialize, Serialize};

pub mod error;
pub mod service;

pub use error::PersonaError;
pub use service::PersonaRegistry;

/// A named speaker mode: the persona the script generator has to adopt.
///
/// Serialized with the catalog field names (`speaker_mode`, `content`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonaMode {
    #[serde(rename = "speaker_mode")]
    pub identifier: String,
    #[serde(rename = "content")]
    pub description: String,
}

/// Read-only source of the persona catalog
pub trait PersonaRepository: Send + Sync {
    fn get_all_modes(&self) -> Vec<PersonaMode>;
}
