use std::time::Duration;

use thiserror::Error;

/// Analyzer-level error type.
///
/// Field-level misses (no email, no skills section) are never errors; they are
/// encoded as absent keys or empty sequences. Only whole-document failures and
/// caller-side lookups surface here.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {cause}")]
    ExtractionFailure { cause: String },

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Text extraction timed out after {0:?}")]
    Timeout(Duration),

    /// The extraction task died (panicked or was cancelled). Scorers default
    /// locally and never raise this.
    #[error("Internal analysis error: {0}")]
    AnalysisInternal(String),

    #[error("Configuration error: {0:#}")]
    Config(#[from] anyhow::Error),
}

impl AnalyzerError {
    /// Stable machine-readable code for the HTTP layer's error body.
    pub fn code(&self) -> &'static str {
        match self {
            AnalyzerError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            AnalyzerError::ExtractionFailure { .. } => "EXTRACTION_FAILED",
            AnalyzerError::JobNotFound(_) => "JOB_NOT_FOUND",
            AnalyzerError::Timeout(_) => "EXTRACTION_TIMEOUT",
            AnalyzerError::AnalysisInternal(_) => "INTERNAL_ERROR",
            AnalyzerError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// True when the caller should reject the upload or request (4xx) rather
    /// than report a server fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalyzerError::UnsupportedFormat(_)
                | AnalyzerError::ExtractionFailure { .. }
                | AnalyzerError::JobNotFound(_)
        )
    }

    pub(crate) fn extraction(cause: impl std::fmt::Display) -> Self {
        AnalyzerError::ExtractionFailure {
            cause: cause.to_string(),
        }
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            AnalyzerError::UnsupportedFormat("txt".into()).code(),
            "UNSUPPORTED_FORMAT"
        );
        assert_eq!(
            AnalyzerError::extraction("bad xref").code(),
            "EXTRACTION_FAILED"
        );
        assert_eq!(AnalyzerError::JobNotFound("42".into()).code(), "JOB_NOT_FOUND");
        assert_eq!(
            AnalyzerError::Timeout(Duration::from_secs(5)).code(),
            "EXTRACTION_TIMEOUT"
        );
    }

    #[test]
    fn test_client_errors_are_upload_rejections() {
        assert!(AnalyzerError::UnsupportedFormat("txt".into()).is_client_error());
        assert!(AnalyzerError::extraction("empty archive").is_client_error());
        assert!(!AnalyzerError::AnalysisInternal("boom".into()).is_client_error());
        assert!(!AnalyzerError::Timeout(Duration::from_secs(1)).is_client_error());
    }

    #[test]
    fn test_extraction_message_carries_cause() {
        let err = AnalyzerError::extraction("no word/document.xml");
        assert_eq!(
            err.to_string(),
            "Text extraction failed: no word/document.xml"
        );
    }

    #[test]
    fn test_config_error_from_anyhow() {
        let err: AnalyzerError = anyhow::anyhow!("RESUME_KEYWORD_LIMIT must be a number").into();
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("RESUME_KEYWORD_LIMIT"));
    }
}
