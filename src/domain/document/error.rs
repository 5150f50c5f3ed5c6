use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Error processing PDF: {0}")]
    Extraction(String),
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Extraction(_) => AppError::BadRequest(err.to_string()),
        }
    }
}
