use super::TtsServiceError;
use serde::{Deserialize, Serialize};

/// Voice shaping parameters, both in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

/// A single synthesis call
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_id: String,
    pub model_id: String,
    pub settings: VoiceSettings,
}

impl SpeechRequest {
    /// Reject requests the provider would only bounce back.
    /// Out-of-range settings fail here instead of being passed through.
    pub fn validate(&self) -> Result<(), TtsServiceError> {
        if self.text.trim().is_empty() {
            return Err(TtsServiceError::InvalidParameter(
                "text cannot be empty".to_string(),
            ));
        }
        if self.voice_id.trim().is_empty() {
            return Err(TtsServiceError::InvalidParameter(
                "voice_id cannot be empty".to_string(),
            ));
        }
        if self.model_id.trim().is_empty() {
            return Err(TtsServiceError::InvalidParameter(
                "model_id cannot be empty".to_string(),
            ));
        }
        check_unit_range("stability", self.settings.stability)?;
        check_unit_range("similarity_boost", self.settings.similarity_boost)?;
        Ok(())
    }
}

fn check_unit_range(name: &str, value: f32) -> Result<(), TtsServiceError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TtsServiceError::InvalidParameter(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )))
    }
}
