pub mod document;
pub mod health;
pub mod script;
pub mod tts;
