use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("speech synthesis unavailable: {0}")]
    SynthesisUnavailable(String),
    #[error("Error generating speech: {0}")]
    SynthesisFailed(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Error saving audio: {0}")]
    Persistence(String),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::InvalidParameter(_) => AppError::BadRequest(err.to_string()),
            TtsServiceError::SynthesisUnavailable(_) => {
                AppError::ServiceUnavailable(err.to_string())
            }
            TtsServiceError::SynthesisFailed(_) => AppError::ExternalService(err.to_string()),
            TtsServiceError::Persistence(_) => AppError::Internal(err.to_string()),
        }
    }
}
