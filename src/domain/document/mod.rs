pub mod error;
pub mod extractor;

pub use error::DocumentError;
pub use extractor::{extract_pages, DocumentService};

use serde::{Deserialize, Serialize};

/// Plain text pulled out of a PDF.
///
/// `text` is empty when no page carried extractable text (scanned PDFs);
/// that is still a successful extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    pub text: String,
    pub page_count: usize,
}

impl ExtractedDocument {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in characters, as reported back to clients
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Response for POST /api/upload_document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub content: String,
    pub page_count: usize,
    pub status: String,
}

impl From<ExtractedDocument> for DocumentResponse {
    fn from(document: ExtractedDocument) -> Self {
        Self {
            content: document.text,
            page_count: document.page_count,
            status: "success".to_string(),
        }
    }
}
