use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::persona::PersonaRegistry;
use crate::domain::script::{CreateScriptRequest, CreateScriptResponse, ScriptServiceApi};
use crate::error::AppResult;

pub struct ScriptController {
    script_service: Arc<dyn ScriptServiceApi>,
    registry: Arc<PersonaRegistry>,
    provider_timeout: Option<Duration>,
}

impl ScriptController {
    pub fn new(
        script_service: Arc<dyn ScriptServiceApi>,
        registry: Arc<PersonaRegistry>,
        provider_timeout: Option<Duration>,
    ) -> Self {
        Self {
            script_service,
            registry,
            provider_timeout,
        }
    }

    /// POST /api/create_script - Generate a script from already extracted text
    pub async fn create_script(
        State(controller): State<Arc<ScriptController>>,
        Json(request): Json<CreateScriptRequest>,
    ) -> AppResult<Json<CreateScriptResponse>> {
        let script = controller
            .script_service
            .generate_script(
                &request.document_content,
                &request.speaker_mode,
                controller.provider_timeout,
            )
            .await?;

        Ok(Json(CreateScriptResponse { script }))
    }

    /// GET /api/speaker_modes - Persona identifiers in catalog order
    pub async fn speaker_modes(
        State(controller): State<Arc<ScriptController>>,
    ) -> Json<Vec<String>> {
        Json(controller.registry.identifiers())
    }
}
