use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::{AnalyzerError, AnalyzerResult};

/// Declared type of an uploaded résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    /// Parses a bare extension (`pdf`, `.DOCX`, ...). Anything else is rejected
    /// before extraction is attempted.
    pub fn from_extension(extension: &str) -> AnalyzerResult<Self> {
        let normalized = extension.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "docx" => Ok(FileKind::Docx),
            _ => Err(AnalyzerError::UnsupportedFormat(format!(
                "'{extension}' is not supported; only PDF and DOCX files are allowed"
            ))),
        }
    }

    pub fn from_filename(filename: &str) -> AnalyzerResult<Self> {
        match filename.rsplit_once('.') {
            Some((_, extension)) => Self::from_extension(extension),
            None => Err(AnalyzerError::UnsupportedFormat(format!(
                "'{filename}' has no file extension; only PDF and DOCX files are allowed"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Docx => "docx",
        }
    }
}

/// Uploaded bytes plus their declared kind. Consumed once by the extractor.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Bytes,
    pub kind: FileKind,
}

impl RawDocument {
    pub fn new(bytes: impl Into<Bytes>, kind: FileKind) -> Self {
        Self {
            bytes: bytes.into(),
            kind,
        }
    }

    /// Builds a document from an upload's original filename.
    pub fn from_upload(filename: &str, bytes: impl Into<Bytes>) -> AnalyzerResult<Self> {
        let kind = FileKind::from_filename(filename)?;
        Ok(Self::new(bytes, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(FileKind::from_extension("PDF").unwrap(), FileKind::Pdf);
        assert_eq!(FileKind::from_extension(".docx").unwrap(), FileKind::Docx);
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let err = FileKind::from_extension("txt").unwrap_err();
        assert!(matches!(err, AnalyzerError::UnsupportedFormat(_)));
        assert!(FileKind::from_extension("doc").is_err());
    }

    #[test]
    fn test_from_filename_uses_last_extension() {
        assert_eq!(
            FileKind::from_filename("jane.doe.resume.Docx").unwrap(),
            FileKind::Docx
        );
        assert!(FileKind::from_filename("resume").is_err());
        assert!(FileKind::from_filename("resume.pdf.exe").is_err());
    }

    #[test]
    fn test_from_upload_keeps_bytes() {
        let doc = RawDocument::from_upload("cv.pdf", b"%PDF-1.5".to_vec()).unwrap();
        assert_eq!(doc.kind, FileKind::Pdf);
        assert_eq!(&doc.bytes[..], b"%PDF-1.5");
    }

    #[test]
    fn test_file_kind_serde_lowercase() {
        assert_eq!(serde_json::to_string(&FileKind::Docx).unwrap(), r#""docx""#);
        let kind: FileKind = serde_json::from_str(r#""pdf""#).unwrap();
        assert_eq!(kind, FileKind::Pdf);
    }
}
