use anyhow::Result;
use axum::Router;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

use scriptcast_backend::{
    controllers::{
        document::DocumentController, health::HealthController, script::ScriptController,
        tts::TtsController,
    },
    domain::{
        document::DocumentService, persona::PersonaRegistry, script::ScriptService,
        tts::TtsService,
    },
    infrastructure::{
        http::{build_router, Controllers},
        repositories::{
            AudioFileRepository, ElevenLabsTtsRepository, GeminiGenerationRepository,
            JsonPersonaRepository, ScriptArchiveRepository, ScriptGenerationRepository,
            TtsRepository,
        },
    },
};


use api_client::TestClient;
use fake_providers::FakeProviders;

pub const TEST_GEMINI_MODEL: &str = "gemini-test";
pub const TEST_GEMINI_KEY: &str = "test-gemini-key";
pub const TEST_ELEVENLABS_KEY: &str = "test-elevenlabs-key";

/// Provider calls slower than this fail with a gateway error
pub const TEST_PROVIDER_TIMEOUT: Duration = Duration::from_secs(1);

/// Small enough that tests can exceed it cheaply
pub const TEST_MAX_UPLOAD_BYTES: usize = 64 * 1024;

pub struct TestContext {
    pub client: TestClient,
    pub providers: Arc<FakeProviders>,
    pub scripts_dir: PathBuf,
    pub audio_dir: PathBuf,
    _workdir: TempDir,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let workdir = tempfile::tempdir().expect("Failed to create temp dir");
            let scripts_dir = workdir.path().join("generated_scripts");
            let audio_dir = workdir.path().join("generated_audio");

            // Start fake providers
            let (providers, providers_url) = fake_providers::start().await;

            // Create app pointed at the fakes
            let app = create_app(&providers_url, &scripts_dir, &audio_dir)
                .expect("Failed to create app");

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&base_url),
                providers,
                scripts_dir,
                audio_dir,
                _workdir: workdir,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Temp dir is removed when `_workdir` drops
        }
    }
}

impl TestContext {
    /// Files currently in a directory, sorted by name
    pub fn files_in(dir: &Path) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
        files.sort();
        files
    }
}

fn create_app(providers_url: &str, scripts_dir: &Path, audio_dir: &Path) -> Result<Router> {
    let registry = Arc::new(PersonaRegistry::new(Arc::new(
        JsonPersonaRepository::bundled()?,
    )));

    // Provider repositories
    let generation_repo: Arc<dyn ScriptGenerationRepository> =
        Arc::new(GeminiGenerationRepository::new(
            Some(TEST_GEMINI_KEY.to_string()),
            TEST_GEMINI_MODEL.to_string(),
            providers_url.to_string(),
        )?);
    let tts_repo: Arc<dyn TtsRepository> = Arc::new(ElevenLabsTtsRepository::new(
        Some(TEST_ELEVENLABS_KEY.to_string()),
        providers_url.to_string(),
    )?);

    // Services
    let script_service = Arc::new(ScriptService::new(
        registry.clone(),
        generation_repo.clone(),
        Arc::new(ScriptArchiveRepository::new(scripts_dir.to_path_buf())),
    ));
    let tts_service = Arc::new(TtsService::new(
        tts_repo.clone(),
        Arc::new(AudioFileRepository::new(audio_dir.to_path_buf())),
    ));

    // Controllers
    let timeout = Some(TEST_PROVIDER_TIMEOUT);
    let controllers = Controllers {
        health: Arc::new(HealthController::new(
            registry.clone(),
            generation_repo.provider(),
            generation_repo.model().to_string(),
            tts_repo.provider(),
        )),
        document: Arc::new(DocumentController::new(
            Arc::new(DocumentService::new()),
            script_service.clone(),
            timeout,
        )),
        script: Arc::new(ScriptController::new(script_service, registry, timeout)),
        tts: Arc::new(TtsController::new(tts_service, timeout)),
    };

    Ok(build_router(controllers, TEST_MAX_UPLOAD_BYTES))
}
