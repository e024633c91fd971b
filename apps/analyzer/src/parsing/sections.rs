//! Section Detector — coarse presence test for the seven canonical sections.
//!
//! This only answers "does the text mention it". Line-accurate extraction of
//! experience and education lives in `timeline`.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{SectionMap, SectionName};

static PHONE_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex"));

/// Lower-case synonyms per section. Contact is detected structurally instead.
pub const SECTION_KEYWORDS: &[(SectionName, &[&str])] = &[
    (SectionName::Summary, &["summary", "objective", "profile", "about"]),
    (SectionName::Experience, &["experience", "work history", "employment", "career"]),
    (SectionName::Education, &["education", "academic", "degree", "university", "college"]),
    (SectionName::Skills, &["skills", "technical skills", "competencies", "technologies"]),
    (SectionName::Projects, &["projects", "portfolio", "work samples"]),
    (SectionName::Certifications, &["certifications", "certificates", "licenses"]),
];

pub fn identify_sections(text: &str) -> SectionMap {
    let mut sections = SectionMap::default();

    if text.contains('@') || PHONE_LIKE.is_match(text) {
        sections.set(SectionName::Contact, true);
    }

    let lower = text.to_lowercase();
    for (section, keywords) in SECTION_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            sections.set(*section, true);
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_from_at_sign() {
        let sections = identify_sections("reach me: jane@example.com");
        assert!(sections.is_present(SectionName::Contact));
    }

    #[test]
    fn test_contact_from_phone_pattern() {
        let sections = identify_sections("555.123.4567");
        assert!(sections.is_present(SectionName::Contact));
    }

    #[test]
    fn test_no_at_and_no_phone_means_no_contact() {
        let sections = identify_sections("Jane Doe\nSkills: Python\nBuilt 12 services in 2021");
        assert!(!sections.is_present(SectionName::Contact));
        assert!(sections.is_present(SectionName::Skills));
    }

    #[test]
    fn test_keyword_synonyms_case_insensitive() {
        let text = "OBJECTIVE\nWork History\nUniversity of Somewhere\nPortfolio\nLicenses";
        let sections = identify_sections(text);
        for section in [
            SectionName::Summary,
            SectionName::Experience,
            SectionName::Education,
            SectionName::Projects,
            SectionName::Certifications,
        ] {
            assert!(sections.is_present(section), "{} not detected", section.as_str());
        }
        assert!(!sections.is_present(SectionName::Skills));
    }

    #[test]
    fn test_empty_text_has_no_sections() {
        assert_eq!(identify_sections("").present_count(), 0);
    }
}
