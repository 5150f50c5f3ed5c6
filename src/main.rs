use scriptcast_backend::controllers::{
    document::DocumentController, health::HealthController, script::ScriptController,
    tts::TtsController,
};
use scriptcast_backend::domain::document::DocumentService;
use scriptcast_backend::domain::persona::PersonaRegistry;
use scriptcast_backend::domain::script::ScriptService;
use scriptcast_backend::domain::tts::TtsService;
use scriptcast_backend::infrastructure::config::{Config, GenerationProvider, LogFormat};
use scriptcast_backend::infrastructure::http::{start_http_server, Controllers};
use scriptcast_backend::infrastructure::repositories::{
    AudioFileRepository, ElevenLabsTtsRepository, GeminiGenerationRepository,
    JsonPersonaRepository, OpenAiGenerationRepository, ScriptArchiveRepository,
    ScriptGenerationRepository, TtsRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting ScriptCast Backend on {}:{}",
        config.host,
        config.port
    );

    // Load persona catalog
    let persona_repo = match &config.speaker_modes_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading speaker modes from file");
            JsonPersonaRepository::from_path(path)?
        }
        None => JsonPersonaRepository::bundled()?,
    };
    let registry = Arc::new(PersonaRegistry::new(Arc::new(persona_repo)));

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate provider repositories (fail fast on missing credentials)
    tracing::info!(
        generation_provider = config.generation_provider.as_str(),
        "Instantiating provider repositories..."
    );
    let generation_repo: Arc<dyn ScriptGenerationRepository> = match config.generation_provider {
        GenerationProvider::Gemini => Arc::new(GeminiGenerationRepository::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
        )?),
        GenerationProvider::OpenAi => Arc::new(OpenAiGenerationRepository::new(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            config.openai_base_url.clone(),
        )?),
    };
    let tts_repo: Arc<dyn TtsRepository> = Arc::new(ElevenLabsTtsRepository::new(
        config.elevenlabs_api_key.clone(),
        config.elevenlabs_base_url.clone(),
    )?);

    // 2. Instantiate file stores
    let archive_repo = Arc::new(ScriptArchiveRepository::new(config.scripts_dir.clone()));
    let audio_repo = Arc::new(AudioFileRepository::new(config.audio_dir.clone()));

    // 3. Instantiate services
    tracing::info!("Instantiating services...");
    let document_service = Arc::new(DocumentService::new());
    let script_service = Arc::new(ScriptService::new(
        registry.clone(),
        generation_repo.clone(),
        archive_repo,
    ));
    let tts_service = Arc::new(TtsService::new(tts_repo.clone(), audio_repo));

    // 4. Instantiate controllers
    tracing::info!("Instantiating controllers...");
    let controllers = Controllers {
        health: Arc::new(HealthController::new(
            registry.clone(),
            generation_repo.provider(),
            generation_repo.model().to_string(),
            tts_repo.provider(),
        )),
        document: Arc::new(DocumentController::new(
            document_service,
            script_service.clone(),
            config.provider_timeout,
        )),
        script: Arc::new(ScriptController::new(
            script_service,
            registry,
            config.provider_timeout,
        )),
        tts: Arc::new(TtsController::new(tts_service, config.provider_timeout)),
    };

    // Start HTTP server with all routes
    start_http_server(config, controllers).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "scriptcast_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
