use crate::domain::script::GenerationPrompt;
use async_trait::async_trait;

/// Sampling parameters shared by every generation provider; not a per-request input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

pub const SCRIPT_SAMPLING: SamplingParams = SamplingParams {
    temperature: 0.7,
    top_p: 0.95,
    top_k: 40,
};

/// Repository for script generation.
/// Abstracts the underlying text model provider (Gemini, OpenAI, etc.)
///
/// Implementations are responsible for:
/// - Holding the provider credential (checked at construction)
/// - Applying `SCRIPT_SAMPLING`
/// - Turning an empty or blocked completion into an error
#[async_trait]
pub trait ScriptGenerationRepository: Send + Sync {
    /// Send the prompt and return the raw generated script
    ///
    /// # Errors
    /// Returns the provider's failure cause; no retry is attempted
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String, String>;

    fn provider(&self) -> &'static str;

    fn model(&self) -> &str;
}
