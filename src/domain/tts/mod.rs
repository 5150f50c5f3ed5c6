pub mod error;
pub mod service;
pub mod voice;

pub use error::TtsServiceError;
pub use service::{SynthesizedAudio, TtsService, TtsServiceApi};
pub use voice::{SpeechRequest, VoiceSettings};

use serde::{Deserialize, Serialize};

pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";
pub const DEFAULT_STABILITY: f32 = 0.5;
pub const DEFAULT_SIMILARITY_BOOST: f32 = 0.5;

/// Request for POST /api/text_to_speech and /api/text_to_speech/download
#[derive(Debug, Serialize, Deserialize)]
pub struct TextToSpeechRequest {
    pub text: String,
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    #[serde(default = "default_model_id")]
    pub model_id: String,
    #[serde(default = "default_stability")]
    pub stability: f32,
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f32,
}

/// Response for POST /api/text_to_speech
#[derive(Debug, Serialize, Deserialize)]
pub struct TextToSpeechResponse {
    pub audio_file_path: String,
    pub status: String,
}

impl From<TextToSpeechRequest> for SpeechRequest {
    fn from(request: TextToSpeechRequest) -> Self {
        SpeechRequest {
            text: request.text,
            voice_id: request.voice_id,
            model_id: request.model_id,
            settings: VoiceSettings {
                stability: request.stability,
                similarity_boost: request.similarity_boost,
            },
        }
    }
}

fn default_voice_id() -> String {
    DEFAULT_VOICE_ID.to_string()
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}

fn default_stability() -> f32 {
    DEFAULT_STABILITY
}

fn default_similarity_boost() -> f32 {
    DEFAULT_SIMILARITY_BOOST
}
