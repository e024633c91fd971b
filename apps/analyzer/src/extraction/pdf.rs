//! PDF text extraction — layout-aware primary strategy with a page-stream fallback.
//!
//! Primary: `pdf-extract` (positions glyphs, keeps reading order per page).
//! Fallback: `lopdf` content-stream text, one page at a time.
//! The fallback is a single alternate attempt, not a retry loop.

use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};
use tracing::{debug, warn};

use crate::errors::{AnalyzerError, AnalyzerResult};

/// One way of turning PDF bytes into text. Swappable so the fallback
/// policy can be exercised without real documents.
pub trait PdfStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// Layout-aware extraction via `pdf-extract`, page by page.
pub struct LayoutStrategy;

impl PdfStrategy for LayoutStrategy {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let pages = guard_panics(|| pdf_extract::extract_text_from_mem_by_pages(bytes))?
            .map_err(|e| anyhow!("pdf-extract could not decode the document: {e}"))?;

        Ok(join_pages(pages))
    }
}

/// Plain content-stream extraction via `lopdf`.
pub struct PageStreamStrategy;

impl PdfStrategy for PageStreamStrategy {
    fn name(&self) -> &'static str {
        "page-stream"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        guard_panics(|| {
            let document = lopdf::Document::load_mem(bytes)
                .map_err(|e| anyhow!("lopdf could not parse the document: {e}"))?;
            let mut pages = Vec::new();
            for page_number in document.get_pages().keys() {
                let page_text = document
                    .extract_text(&[*page_number])
                    .map_err(|e| anyhow!("lopdf could not read page {page_number}: {e}"))?;
                pages.push(page_text);
            }
            Ok(join_pages(pages))
        })?
    }
}

/// Pages in document order, one newline after each; blank pages are dropped.
fn join_pages<S: AsRef<str>>(pages: impl IntoIterator<Item = S>) -> String {
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.trim().is_empty() {
            continue;
        }
        text.push_str(page);
        text.push('\n');
    }
    text
}

/// PDF libraries panic on some malformed inputs; treat that as a strategy failure.
fn guard_panics<T>(f: impl FnOnce() -> T) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        anyhow!("PDF library panicked: {message}")
    })
}

/// Extracts text from PDF bytes with the default primary/fallback pair.
///
/// An empty string is a valid result (image-only scans). An error means both
/// strategies failed.
pub fn extract_pdf_text(bytes: &[u8]) -> AnalyzerResult<String> {
    extract_with_fallback(bytes, &LayoutStrategy, &PageStreamStrategy)
}

pub fn extract_with_fallback(
    bytes: &[u8],
    primary: &dyn PdfStrategy,
    fallback: &dyn PdfStrategy,
) -> AnalyzerResult<String> {
    let primary_err = match primary.extract(bytes) {
        Ok(text) => {
            debug!(strategy = primary.name(), bytes = text.len(), "PDF text extracted");
            return Ok(text);
        }
        Err(e) => e,
    };

    warn!(
        strategy = primary.name(),
        error = %format!("{primary_err:#}"),
        "primary PDF extraction failed, trying {}",
        fallback.name()
    );

    match fallback.extract(bytes) {
        Ok(text) => {
            debug!(strategy = fallback.name(), bytes = text.len(), "PDF text extracted");
            Ok(text)
        }
        Err(fallback_err) => Err(AnalyzerError::extraction(format!(
            "error reading PDF ({}: {primary_err:#}; {}: {fallback_err:#})",
            primary.name(),
            fallback.name()
        ))),
    }
}
