use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PersonaError {
    #[error("Invalid speaker mode: {requested}. Available modes: {}", .available.join(", "))]
    InvalidPersona {
        requested: String,
        available: Vec<String>,
    },
}

impl From<PersonaError> for AppError {
    fn from(err: PersonaError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
