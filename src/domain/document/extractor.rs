use super::{DocumentError, ExtractedDocument};

const PAGE_SEPARATOR: &str = "\n\n";

/// Extracts text from PDF uploads without holding up the async runtime
#[derive(Debug, Clone, Default)]
pub struct DocumentService;

impl DocumentService {
    pub fn new() -> Self {
        Self
    }

    /// Parse `pdf` on a blocking worker thread.
    ///
    /// The parser can panic on malformed input; a panic is reported as an
    /// extraction failure rather than tearing down the request task.
    pub async fn extract(&self, pdf: Vec<u8>) -> Result<ExtractedDocument, DocumentError> {
        let input_size = pdf.len();
        let start_time = std::time::Instant::now();

        let document = tokio::task::spawn_blocking(move || extract_pages(&pdf))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    DocumentError::Extraction("PDF parser aborted on malformed input".to_string())
                } else {
                    DocumentError::Extraction(format!("extraction task failed: {}", e))
                }
            })??;

        tracing::info!(
            input_size_bytes = input_size,
            page_count = document.page_count,
            text_length = document.text.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "PDF text extracted"
        );

        if document.is_empty() {
            tracing::warn!(
                page_count = document.page_count,
                "PDF has no extractable text"
            );
        }

        Ok(document)
    }
}

/// Synchronous extraction: page texts in document order.
pub fn extract_pages(pdf: &[u8]) -> Result<ExtractedDocument, DocumentError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf)
        .map_err(|e| DocumentError::Extraction(e.to_string()))?;

    Ok(join_pages(pages))
}

/// Join the non-empty (trimmed) pages with a blank line.
/// The page count covers every page, including the ones without text.
fn join_pages(pages: Vec<String>) -> ExtractedDocument {
    let page_count = pages.len();
    let text = pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR);

    ExtractedDocument { text, page_count }
}
