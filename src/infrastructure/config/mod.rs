use crate::infrastructure::repositories::elevenlabs_tts_repository::DEFAULT_ELEVENLABS_BASE_URL;
use crate::infrastructure::repositories::gemini_generation_repository::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
use crate::infrastructure::repositories::openai_generation_repository::{
    DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Script generation
    pub generation_provider: GenerationProvider,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    // Voice synthesis
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_base_url: String,
    // Personas and artifacts
    pub speaker_modes_path: Option<PathBuf>,
    pub scripts_dir: PathBuf,
    pub audio_dir: PathBuf,
    // Limits
    pub provider_timeout: Option<Duration>,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenerationProvider {
    Gemini,
    OpenAi,
}

impl GenerationProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationProvider::Gemini => "gemini",
            GenerationProvider::OpenAi => "openai",
        }
    }
}

impl std::str::FromStr for GenerationProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(GenerationProvider::Gemini),
            "openai" => Ok(GenerationProvider::OpenAi),
            other => Err(format!(
                "unknown GENERATION_PROVIDER '{}', expected 'gemini' or 'openai'",
                other
            )),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let provider_timeout_secs: u64 = env::var("PROVIDER_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_PROVIDER_TIMEOUT_SECS.to_string())
            .parse()?;

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })
                .unwrap_or(Environment::Development),
            log_format: env::var("LOG_FORMAT")
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
            generation_provider: env::var("GENERATION_PROVIDER")
                .unwrap_or_else(|_| "gemini".to_string())
                .parse()?,
            gemini_api_key: optional_var("GEMINI_API_KEY"),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            openai_api_key: optional_var("OPENAI_API_KEY"),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            elevenlabs_api_key: optional_var("ELEVENLABS_API_KEY"),
            elevenlabs_base_url: env::var("ELEVENLABS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ELEVENLABS_BASE_URL.to_string()),
            speaker_modes_path: optional_var("SPEAKER_MODES_PATH").map(PathBuf::from),
            scripts_dir: env::var("SCRIPTS_DIR")
                .unwrap_or_else(|_| "generated_scripts".to_string())
                .into(),
            audio_dir: env::var("AUDIO_DIR")
                .unwrap_or_else(|_| "generated_audio".to_string())
                .into(),
            provider_timeout: (provider_timeout_secs > 0)
                .then(|| Duration::from_secs(provider_timeout_secs)),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse()?,
        };

        Ok(config)
    }
}

/// Unset and empty are treated the same
fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
