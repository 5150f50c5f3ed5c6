use crate::domain::persona::PersonaError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ScriptServiceError {
    #[error(transparent)]
    InvalidPersona(#[from] PersonaError),
    #[error("script generation unavailable: {0}")]
    GenerationUnavailable(String),
    #[error("Error generating script: {0}")]
    GenerationFailed(String),
    #[error("Error saving script: {0}")]
    Persistence(String),
}

impl From<ScriptServiceError> for AppError {
    fn from(err: ScriptServiceError) -> Self {
        match err {
            ScriptServiceError::InvalidPersona(e) => e.into(),
            ScriptServiceError::GenerationUnavailable(_) => {
                AppError::ServiceUnavailable(err.to_string())
            }
            ScriptServiceError::GenerationFailed(_) => AppError::ExternalService(err.to_string()),
            ScriptServiceError::Persistence(_) => AppError::Internal(err.to_string()),
        }
    }
}
