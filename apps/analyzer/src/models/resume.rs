use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Contact fields recognised in the text. Absent fields are omitted on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.linkedin.is_none() && self.github.is_none()
    }
}

/// The seven canonical résumé sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

impl SectionName {
    pub const ALL: [SectionName; 7] = [
        SectionName::Contact,
        SectionName::Summary,
        SectionName::Experience,
        SectionName::Education,
        SectionName::Skills,
        SectionName::Projects,
        SectionName::Certifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Contact => "contact",
            SectionName::Summary => "summary",
            SectionName::Experience => "experience",
            SectionName::Education => "education",
            SectionName::Skills => "skills",
            SectionName::Projects => "projects",
            SectionName::Certifications => "certifications",
        }
    }
}

/// Presence flag for every section. Always holds all seven keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionMap(BTreeMap<SectionName, bool>);

impl Default for SectionMap {
    fn default() -> Self {
        Self(SectionName::ALL.iter().map(|&s| (s, false)).collect())
    }
}

impl SectionMap {
    pub fn is_present(&self, section: SectionName) -> bool {
        self.0.get(&section).copied().unwrap_or(false)
    }

    pub fn set(&mut self, section: SectionName, present: bool) {
        self.0.insert(section, present);
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionName, bool)> + '_ {
        self.0.iter().map(|(&s, &p)| (s, p))
    }

    pub fn present_count(&self) -> usize {
        self.0.values().filter(|&&p| p).count()
    }
}

/// Structured output of parsing one extracted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub contact_info: ContactInfo,
    /// Canonical skill names, deduplicated case-insensitively, sorted.
    pub skills: Vec<String>,
    /// Experience-section lines in source order.
    pub experience: Vec<String>,
    /// Education-section lines in source order.
    pub education: Vec<String>,
    pub sections: SectionMap,
    /// Up to 20 frequent keywords, most frequent first.
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_info_omits_absent_keys() {
        let info = ContactInfo {
            email: Some("jane@example.com".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "jane@example.com" }));
        assert!(!info.is_empty());
        assert!(ContactInfo::default().is_empty());
    }

    #[test]
    fn test_section_map_default_has_all_sections_false() {
        let map = SectionMap::default();
        assert_eq!(map.iter().count(), 7);
        assert_eq!(map.present_count(), 0);
        assert!(SectionName::ALL.iter().all(|&s| !map.is_present(s)));
    }

    #[test]
    fn test_section_map_serializes_snake_case_keys() {
        let mut map = SectionMap::default();
        map.set(SectionName::Certifications, true);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["certifications"], true);
        assert_eq!(json["contact"], false);
    }

    #[test]
    fn test_parsed_resume_round_trips_through_json() {
        let mut sections = SectionMap::default();
        sections.set(SectionName::Skills, true);
        let parsed = ParsedResume {
            skills: vec!["Python".into()],
            sections,
            ..Default::default()
        };
        let json = serde_json::to_string(&parsed).unwrap();
        let back: ParsedResume = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parsed);
    }
}
