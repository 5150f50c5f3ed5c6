use super::cleaner::clean_markdown;
use super::error::ScriptServiceError;
use super::prompt::PromptBuilder;
use super::ArchivedScript;
use crate::domain::deadline::with_deadline;
use crate::domain::persona::PersonaRegistry;
use crate::infrastructure::repositories::{ScriptArchiveRepository, ScriptGenerationRepository};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub struct ScriptService {
    prompt_builder: PromptBuilder,
    generation_repo: Arc<dyn ScriptGenerationRepository>,
    archive_repo: Arc<ScriptArchiveRepository>,
}

impl ScriptService {
    pub fn new(
        registry: Arc<PersonaRegistry>,
        generation_repo: Arc<dyn ScriptGenerationRepository>,
        archive_repo: Arc<ScriptArchiveRepository>,
    ) -> Self {
        Self {
            prompt_builder: PromptBuilder::new(registry),
            generation_repo,
            archive_repo,
        }
    }
}

#[async_trait]
pub trait ScriptServiceApi: Send + Sync {
    /// Generate a narrated script for a document
    ///
    /// This operation:
    /// - Resolves the persona and builds the prompt
    /// - Calls the generation provider (bounded by `deadline` when set)
    /// - Strips markdown from the result
    async fn generate_script(
        &self,
        document_text: &str,
        speaker_mode: &str,
        deadline: Option<Duration>,
    ) -> Result<String, ScriptServiceError>;

    /// Persist a cleaned script under a timestamped, persona-keyed name
    async fn archive_script(
        &self,
        script: &str,
        speaker_mode: &str,
        document_length: usize,
    ) -> Result<ArchivedScript, ScriptServiceError>;

    /// Model identifier reported to clients
    fn model(&self) -> String;
}

#[async_trait]
impl ScriptServiceApi for ScriptService {
    async fn generate_script(
        &self,
        document_text: &str,
        speaker_mode: &str,
        deadline: Option<Duration>,
    ) -> Result<String, ScriptServiceError> {
        tracing::info!(
            speaker_mode = %speaker_mode,
            document_length = document_text.len(),
            "Script generation request"
        );

        // 1. Build prompt (fails fast on unknown persona)
        let prompt = self.prompt_builder.build(document_text, speaker_mode)?;

        // 2. Call the provider
        let raw_script = with_deadline(deadline, self.generation_repo.generate(&prompt))
            .await
            .map_err(ScriptServiceError::GenerationFailed)?;

        // 3. Strip whatever markdown the model produced anyway
        let script = clean_markdown(&raw_script);

        tracing::info!(
            speaker_mode = %speaker_mode,
            raw_length = raw_script.len(),
            cleaned_length = script.len(),
            "Script generated and cleaned"
        );

        Ok(script)
    }

    async fn archive_script(
        &self,
        script: &str,
        speaker_mode: &str,
        document_length: usize,
    ) -> Result<ArchivedScript, ScriptServiceError> {
        self.archive_repo
            .archive(script, speaker_mode, document_length)
            .await
            .map_err(ScriptServiceError::Persistence)
    }

    fn model(&self) -> String {
        self.generation_repo.model().to_string()
    }
}
