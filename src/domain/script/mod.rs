pub mod cleaner;
pub mod error;
pub mod prompt;
pub mod service;

pub use cleaner::clean_markdown;
pub use error::ScriptServiceError;
pub use prompt::{GenerationPrompt, PromptBuilder};
pub use service::{ScriptService, ScriptServiceApi};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A cleaned script written to the archive directory
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivedScript {
    pub path: PathBuf,
    pub document_length: usize,
}

/// Request for POST /api/create_script
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateScriptRequest {
    pub document_content: String,
    pub speaker_mode: String,
}

/// Response for POST /api/create_script
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateScriptResponse {
    pub script: String,
}

/// Response for POST /api/upload_and_generate
#[derive(Debug, Serialize, Deserialize)]
pub struct DirectScriptGenerationResponse {
    pub script: String,
    pub status: String,
    pub model: String,
    pub document_length: usize,
    pub speaker_mode: String,
    pub file_path: String,
}
