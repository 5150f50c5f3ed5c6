use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::document::{DocumentResponse, DocumentService, ExtractedDocument};
use crate::domain::script::{DirectScriptGenerationResponse, ScriptServiceApi};
use crate::error::{AppError, AppResult};

const EMPTY_DOCUMENT_DETAIL: &str =
    "Could not extract text from the PDF. The file might be empty or corrupted.";

pub struct DocumentController {
    document_service: Arc<DocumentService>,
    script_service: Arc<dyn ScriptServiceApi>,
    provider_timeout: Option<Duration>,
}

/// Parts of an upload form this controller cares about
#[derive(Default)]
struct UploadForm {
    file: Option<(String, Vec<u8>)>,
    speaker_mode: Option<String>,
}

impl DocumentController {
    pub fn new(
        document_service: Arc<DocumentService>,
        script_service: Arc<dyn ScriptServiceApi>,
        provider_timeout: Option<Duration>,
    ) -> Self {
        Self {
            document_service,
            script_service,
            provider_timeout,
        }
    }

    /// POST /api/upload_document - Extract text from an uploaded PDF
    pub async fn upload_document(
        State(controller): State<Arc<DocumentController>>,
        multipart: Multipart,
    ) -> AppResult<Json<DocumentResponse>> {
        let form = read_upload_form(multipart).await?;
        let pdf = require_pdf(form.file)?;

        let document = controller.extract_non_empty(pdf).await?;

        Ok(Json(DocumentResponse::from(document)))
    }

    /// POST /api/upload_and_generate - Extract, generate, clean and archive in one call
    pub async fn upload_and_generate(
        State(controller): State<Arc<DocumentController>>,
        multipart: Multipart,
    ) -> AppResult<Json<DirectScriptGenerationResponse>> {
        let form = read_upload_form(multipart).await?;
        let pdf = require_pdf(form.file)?;
        let speaker_mode = form
            .speaker_mode
            .ok_or_else(|| AppError::BadRequest("Missing form field: speaker_mode".to_string()))?;

        let document = controller.extract_non_empty(pdf).await?;
        let document_length = document.char_len();

        let script = controller
            .script_service
            .generate_script(&document.text, &speaker_mode, controller.provider_timeout)
            .await?;

        let archived = controller
            .script_service
            .archive_script(&script, &speaker_mode, document_length)
            .await?;

        Ok(Json(DirectScriptGenerationResponse {
            script,
            status: "success".to_string(),
            model: controller.script_service.model(),
            document_length: archived.document_length,
            speaker_mode,
            file_path: archived.path.display().to_string(),
        }))
    }

    async fn extract_non_empty(&self, pdf: Vec<u8>) -> AppResult<ExtractedDocument> {
        let document = self.document_service.extract(pdf).await?;
        if document.is_empty() {
            return Err(AppError::BadRequest(EMPTY_DOCUMENT_DETAIL.to_string()));
        }
        Ok(document)
    }
}

async fn read_upload_form(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                form.file = Some((file_name, bytes.to_vec()));
            }
            Some("speaker_mode") => {
                form.speaker_mode = Some(field.text().await.map_err(multipart_error)?);
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unexpected form field");
            }
        }
    }

    Ok(form)
}

/// Only the file name decides; the bytes are left to the parser
fn require_pdf(file: Option<(String, Vec<u8>)>) -> AppResult<Vec<u8>> {
    let (file_name, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing form field: file".to_string()))?;

    if !file_name.ends_with(".pdf") {
        return Err(AppError::BadRequest("Only PDF files are allowed".to_string()));
    }

    Ok(bytes)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Uploaded file is too large".to_string())
    } else {
        AppError::BadRequest(format!("Invalid upload: {}", e.body_text()))
    }
}
