// Résumé Parser
// Field recognition, section detection, skill and keyword extraction.
// Every extractor is a pure function over the extracted text.

pub mod catalogue;
pub mod contact;
pub mod keywords;
pub mod sections;
pub mod skills;
pub mod text;
pub mod timeline;

use tracing::debug;

use crate::config::KeywordLimits;
use crate::errors::AnalyzerResult;
use crate::extraction::extract_document;
use crate::models::{ParsedResume, RawDocument};

pub use catalogue::{canonical_name, skill_display_name};
pub use contact::extract_contact_info;
pub use keywords::extract_keywords;
pub use sections::identify_sections;
pub use skills::extract_skills;
pub use timeline::{extract_education, extract_experience};

/// Parses extracted text with the default keyword limits.
pub fn parse_resume_text(text: &str) -> ParsedResume {
    parse_resume_text_with(text, &KeywordLimits::default())
}

pub fn parse_resume_text_with(text: &str, limits: &KeywordLimits) -> ParsedResume {
    let parsed = ParsedResume {
        contact_info: extract_contact_info(text),
        skills: extract_skills(text),
        experience: extract_experience(text),
        education: extract_education(text),
        sections: identify_sections(text),
        keywords: extract_keywords(text, limits),
    };
    debug!(
        skills = parsed.skills.len(),
        experience = parsed.experience.len(),
        education = parsed.education.len(),
        sections = parsed.sections.present_count(),
        keywords = parsed.keywords.len(),
        "resume text parsed"
    );
    parsed
}

/// Extracts and parses one document with the default keyword limits; the
/// text and the record travel together.
pub fn parse_resume(document: &RawDocument) -> AnalyzerResult<(String, ParsedResume)> {
    parse_resume_with(document, &KeywordLimits::default())
}

pub fn parse_resume_with(
    document: &RawDocument,
    limits: &KeywordLimits,
) -> AnalyzerResult<(String, ParsedResume)> {
    let text = extract_document(document)?;
    let parsed = parse_resume_text_with(&text, limits);
    Ok((text, parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::docx::fixtures::{docx_with_body, paragraph};
    use crate::models::{FileKind, SectionName};

    const SAMPLE: &str = "Jane Doe\n\
        jane@example.com | 555-123-4567 | linkedin.com/in/janedoe\n\
        Summary\n\
        Backend engineer building payment systems.\n\
        Experience\n\
        Senior Engineer, Acme 2020 - 2024\n\
        Built payment systems handling payment retries.\n\
        Education\n\
        Bachelor of Science, 2016\n\
        Skills: python, react, aws\n";

    #[test]
    fn test_parse_sample_text() {
        let parsed = parse_resume_text(SAMPLE);
        assert_eq!(parsed.contact_info.email.as_deref(), Some("jane@example.com"));
        assert_eq!(parsed.contact_info.phone.as_deref(), Some("555-123-4567"));
        for skill in ["Python", "React", "AWS"] {
            assert!(parsed.skills.iter().any(|s| s == skill), "{skill} missing: {:?}", parsed.skills);
        }
        assert_eq!(parsed.experience, vec!["Senior Engineer, Acme 2020 - 2024"]);
        assert_eq!(parsed.education, vec!["Bachelor of Science, 2016"]);
        assert!(parsed.sections.is_present(SectionName::Contact));
        assert!(parsed.sections.is_present(SectionName::Summary));
        assert!(!parsed.sections.is_present(SectionName::Projects));
        assert_eq!(parsed.keywords.first().map(String::as_str), Some("payment"));
    }

    #[test]
    fn test_parse_is_idempotent() {
        assert_eq!(parse_resume_text(SAMPLE), parse_resume_text(SAMPLE));
    }

    #[test]
    fn test_empty_text_parses_to_empty_record() {
        let parsed = parse_resume_text("");
        assert!(parsed.contact_info.is_empty());
        assert!(parsed.skills.is_empty());
        assert!(parsed.keywords.is_empty());
        assert_eq!(parsed.sections.present_count(), 0);
    }

    #[test]
    fn test_parse_resume_from_docx() {
        let body = format!(
            "{}{}{}",
            paragraph("Jane Doe"),
            paragraph("jane@example.com"),
            paragraph("Skills: rust, docker")
        );
        let document = RawDocument::new(docx_with_body(&body), FileKind::Docx);
        let (text, parsed) = parse_resume(&document).unwrap();
        assert!(text.starts_with("Jane Doe\n"));
        assert!(parsed.skills.iter().any(|s| s == "Rust"));
        assert!(parsed.skills.iter().any(|s| s == "Docker"));
        assert!(parsed.sections.is_present(SectionName::Contact));
    }

    #[test]
    fn test_parse_resume_with_applies_keyword_limits() {
        let body = format!(
            "{}{}",
            paragraph("payment payment payment ledger ledger"),
            paragraph("invoice invoice")
        );
        let document = RawDocument::new(docx_with_body(&body), FileKind::Docx);

        let (_, defaults) = parse_resume(&document).unwrap();
        assert_eq!(defaults.keywords, vec!["payment", "ledger", "invoice"]);

        let limits = KeywordLimits {
            keep: 1,
            ..KeywordLimits::default()
        };
        let (_, limited) = parse_resume_with(&document, &limits).unwrap();
        assert_eq!(limited.keywords, vec!["payment"]);
    }
}
