use super::generation_repository::{ScriptGenerationRepository, SCRIPT_SAMPLING};
use crate::domain::script::{GenerationPrompt, ScriptServiceError};
use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI chat-completions implementation of the generation repository.
///
/// Chat completions have no top-k knob; temperature and top-p still apply.
pub struct OpenAiGenerationRepository {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerationRepository {
    /// Fails with `GenerationUnavailable` when no key is configured
    pub fn new(
        api_key: Option<String>,
        model: String,
        base_url: String,
    ) -> Result<Self, ScriptServiceError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ScriptServiceError::GenerationUnavailable(
                    "OPENAI_API_KEY environment variable is not set".to_string(),
                )
            })?;

        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url.trim_end_matches('/'));

        Ok(Self {
            client: Client::with_config(config),
            model,
        })
    }

    fn build_request(&self, prompt: &GenerationPrompt) -> Result<CreateChatCompletionRequest, String> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt.as_str())
            .build()
            .map_err(|e| format!("Invalid OpenAI message: {}", e))?;

        CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([message.into()])
            .temperature(SCRIPT_SAMPLING.temperature)
            .top_p(SCRIPT_SAMPLING.top_p)
            .build()
            .map_err(|e| format!("Invalid OpenAI request: {}", e))
    }
}

#[async_trait]
impl ScriptGenerationRepository for OpenAiGenerationRepository {
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Calling OpenAI chat completions"
        );

        let request = self.build_request(prompt)?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                "OpenAI chat completion failed"
            );
            format!("OpenAI error: {}", e)
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| "OpenAI returned no choices".to_string())?;

        let script = choice
            .message
            .content
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                format!(
                    "OpenAI response empty. Finish reason: {:?}",
                    choice.finish_reason
                )
            })?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            script_length = script.len(),
            "Script generation completed"
        );

        Ok(script)
    }

    fn provider(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
