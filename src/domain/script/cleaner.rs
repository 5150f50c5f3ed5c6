use regex::Regex;
use std::sync::LazyLock;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

// Order matters: fences go before inline code, emphasis before list markers,
// and the newline collapse runs last because earlier rules leave blank lines.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Fenced code blocks, content included
        Rule::new(r"```[\s\S]*?```", ""),
        // Inline code
        Rule::new(r"`([^`]+)`", "${1}"),
        // Headings
        Rule::new(r"(?m)^#{1,6}\s+", ""),
        // Bold and italic
        Rule::new(r"\*\*([^*]+)\*\*", "${1}"),
        Rule::new(r"\*([^*]+)\*", "${1}"),
        Rule::new(r"__([^_]+)__", "${1}"),
        Rule::new(r"_([^_]+)_", "${1}"),
        // Bullets
        Rule::new(r"(?m)^\s*[-*+]\s+", ""),
        // Numbered lists
        Rule::new(r"(?m)^\s*\d+\.\s+", ""),
        // Horizontal rules
        Rule::new(r"(?m)^\s*[-*_]{3,}\s*$", ""),
        // Links keep their text
        Rule::new(r"\[([^\]]+)\]\([^)]+\)", "${1}"),
        Rule::new(r"\n{3,}", "\n\n"),
    ]
});

/// Strip markdown left in a generated script.
///
/// Pattern based, not a parser: nested or malformed markup can survive.
///
/// One pass can expose markup to a rule that already ran (`"1. - item"`,
/// `" # Title"`), so passes repeat until the text stops changing. Every rule
/// only removes text, which bounds the loop by the input length.
pub fn clean_markdown(text: &str) -> String {
    let mut current = clean_once(text);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(text: &str) -> String {
    let cleaned = RULES.iter().fold(text.to_string(), |acc, rule| {
        rule.pattern.replace_all(&acc, rule.replacement).into_owned()
    });

    cleaned.trim().to_string()
}
