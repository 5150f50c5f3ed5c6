pub mod audio_file_repository;
pub mod elevenlabs_tts_repository;
pub mod gemini_generation_repository;
pub mod generation_repository;
pub mod openai_generation_repository;
pub mod persona_repository;
pub mod script_archive_repository;
pub mod tts_repository;

pub use audio_file_repository::AudioFileRepository;
pub use elevenlabs_tts_repository::ElevenLabsTtsRepository;
pub use gemini_generation_repository::GeminiGenerationRepository;
pub use generation_repository::{ScriptGenerationRepository, SCRIPT_SAMPLING};
pub use openai_generation_repository::OpenAiGenerationRepository;
pub use persona_repository::{JsonPersonaRepository, PersonaCatalogError};
pub use script_archive_repository::ScriptArchiveRepository;
pub use tts_repository::TtsRepository;
