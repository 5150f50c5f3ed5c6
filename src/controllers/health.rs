use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::persona::PersonaRegistry;

/// Serves the liveness and readiness probes
pub struct HealthController {
    registry: Arc<PersonaRegistry>,
    generation_provider: &'static str,
    generation_model: String,
    tts_provider: &'static str,
}

impl HealthController {
    pub fn new(
        registry: Arc<PersonaRegistry>,
        generation_provider: &'static str,
        generation_model: String,
        tts_provider: &'static str,
    ) -> Self {
        Self {
            registry,
            generation_provider,
            generation_model,
            tts_provider,
        }
    }

    /// GET / - Welcome message
    pub async fn root() -> impl IntoResponse {
        Json(json!({
            "message": "Welcome to the ScriptCast API",
            "status": "success"
        }))
    }

    /// GET /health - Liveness
    pub async fn health() -> impl IntoResponse {
        (StatusCode::OK, "OK")
    }

    /// GET /health/ready - Readiness
    ///
    /// Providers are checked at startup, so the only thing that can make the
    /// service unready afterwards is an empty persona catalog.
    pub async fn health_ready(
        State(controller): State<Arc<HealthController>>,
    ) -> impl IntoResponse {
        let persona_count = controller.registry.len();
        let (status_code, status) = if persona_count > 0 {
            (StatusCode::OK, "ready")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
        };

        (
            status_code,
            Json(json!({
                "status": status,
                "generation": {
                    "provider": controller.generation_provider,
                    "model": controller.generation_model
                },
                "tts": {
                    "provider": controller.tts_provider
                },
                "speaker_modes": persona_count
            })),
        )
    }
}
