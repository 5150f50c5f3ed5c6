use crate::domain::persona::{PersonaError, PersonaRegistry};
use std::fmt;
use std::sync::Arc;

/// Output rules appended to every prompt. The model is asked to follow them;
/// `clean_markdown` handles the cases where it does not.
const OUTPUT_CONSTRAINTS: &[&str] = &[
    "Output ONLY the plain text of the script that will be spoken by the voice agent.",
    "DO NOT include ANY stage directions, music cues, sound effects, or production notes.",
    "DO NOT include special formatting like markdown.",
    "DO NOT use multiple consecutive blank lines.",
    "DO NOT include text in parentheses or brackets.",
    "DO NOT include headers, bullet points, or any other formatting.",
    "DO NOT include intro or outro segments that are not directly related to the content.",
    "Present the content in a natural, conversational way that can be read aloud fluently.",
    "Focus exclusively on the actual words to be spoken.",
    "Use minimal punctuation, only what is necessary for proper reading.",
];

/// Instruction text sent to the generation provider
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPrompt(String);

impl GenerationPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GenerationPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct PromptBuilder {
    registry: Arc<PersonaRegistry>,
}

impl PromptBuilder {
    pub fn new(registry: Arc<PersonaRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve the persona and compose the prompt for `document_text`
    pub fn build(
        &self,
        document_text: &str,
        persona_identifier: &str,
    ) -> Result<GenerationPrompt, PersonaError> {
        let persona = self.registry.find_mode(persona_identifier)?;
        Ok(compose_prompt(&persona.description, document_text))
    }
}

/// Role framing, persona, document, then the numbered constraints.
pub fn compose_prompt(persona_description: &str, document_text: &str) -> GenerationPrompt {
    let constraints = OUTPUT_CONSTRAINTS
        .iter()
        .enumerate()
        .map(|(i, rule)| format!("{}. {}", i + 1, rule))
        .collect::<Vec<_>>()
        .join("\n");

    GenerationPrompt(format!(
        "You are a script generator that will create a script based on the provided document content.\n\
         You should adopt the following speaking style and persona:\n\
         \n\
         {persona_description}\n\
         \n\
         Document Content:\n\
         {document_text}\n\
         \n\
         IMPORTANT INSTRUCTIONS:\n\
         {constraints}\n\
         \n\
         Your output should be clean, plain text that could be fed directly into a text-to-speech system.\n"
    ))
}
