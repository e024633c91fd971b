// Document Text Extractor
// PDF: layout-aware primary, page-stream fallback. DOCX: paragraphs, then tables.
// Extraction is CPU-bound; async callers go through `extract_text_blocking`.

pub mod docx;
pub mod pdf;

use std::time::Duration;

use tokio::task::JoinError;
use tracing::{debug, warn};

use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::models::{FileKind, RawDocument};

pub use docx::extract_docx_text;
pub use pdf::{extract_pdf_text, PdfStrategy};

/// Converts document bytes into plain, newline-preserving text.
pub fn extract_text(bytes: &[u8], kind: FileKind) -> AnalyzerResult<String> {
    let text = match kind {
        FileKind::Pdf => extract_pdf_text(bytes)?,
        FileKind::Docx => extract_docx_text(bytes)?,
    };
    debug!(kind = kind.as_str(), chars = text.chars().count(), "document text extracted");
    Ok(text)
}

/// Same as [`extract_text`] for a caller holding only the declared extension.
/// Unknown extensions fail before any bytes are inspected.
pub fn extract_text_by_extension(bytes: &[u8], extension: &str) -> AnalyzerResult<String> {
    let kind = FileKind::from_extension(extension)?;
    extract_text(bytes, kind)
}

pub fn extract_document(document: &RawDocument) -> AnalyzerResult<String> {
    extract_text(&document.bytes, document.kind)
}

/// Runs extraction on the blocking pool and gives up after `timeout`.
///
/// The blocking task is not killed on timeout; it finishes in the background
/// and its result is dropped.
pub async fn extract_text_blocking(
    document: RawDocument,
    timeout: Duration,
) -> AnalyzerResult<String> {
    let task = tokio::task::spawn_blocking(move || extract_document(&document));
    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(task_failure(join_err)),
        Err(_) => {
            warn!(?timeout, "document extraction timed out");
            Err(AnalyzerError::Timeout(timeout))
        }
    }
}

/// The blocking task itself died; the document was never judged unreadable.
fn task_failure(join_err: JoinError) -> AnalyzerError {
    warn!(error = %join_err, "extraction task failed");
    AnalyzerError::AnalysisInternal(format!("extraction task failed: {join_err}"))
}
