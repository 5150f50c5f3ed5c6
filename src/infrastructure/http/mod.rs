use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    document::DocumentController, health::HealthController, script::ScriptController,
    tts::TtsController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::request_id_middleware;

/// Controllers wired into the router
pub struct Controllers {
    pub health: Arc<HealthController>,
    pub document: Arc<DocumentController>,
    pub script: Arc<ScriptController>,
    pub tts: Arc<TtsController>,
}

/// Build the application router with all routes configured
pub fn build_router(controllers: Controllers, max_upload_bytes: usize) -> Router {
    // Health routes
    let health_routes = Router::new()
        .route("/", get(HealthController::root))
        .route("/health", get(HealthController::health))
        .route("/health/ready", get(HealthController::health_ready))
        .with_state(controllers.health);

    // Document routes (multipart uploads)
    let document_routes = Router::new()
        .route("/api/upload_document", post(DocumentController::upload_document))
        .route(
            "/api/upload_and_generate",
            post(DocumentController::upload_and_generate),
        )
        .with_state(controllers.document);

    // Script routes
    let script_routes = Router::new()
        .route("/api/create_script", post(ScriptController::create_script))
        .route("/api/speaker_modes", get(ScriptController::speaker_modes))
        .with_state(controllers.script);

    // Speech routes
    let tts_routes = Router::new()
        .route("/api/text_to_speech", post(TtsController::text_to_speech))
        .route("/api/text_to_speech/download", post(TtsController::download))
        .with_state(controllers.tts);

    Router::new()
        .merge(health_routes)
        .merge(document_routes)
        .merge(script_routes)
        .merge(tts_routes)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::very_permissive())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    controllers: Controllers,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(controllers, config.max_upload_bytes);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
