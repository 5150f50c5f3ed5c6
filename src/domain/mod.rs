pub mod deadline;
pub mod document;
pub mod persona;
pub mod script;
pub mod tts;
