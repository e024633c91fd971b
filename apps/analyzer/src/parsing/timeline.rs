//! Experience and education line extraction.
//!
//! A line-by-line state machine: a line mentioning a section keyword switches
//! the state on (and is itself skipped), a line naming another major section
//! ends the scan, and while inside only lines with a year or a role/degree
//! word are kept, trimmed, in source order.

use std::sync::LazyLock;

use regex::Regex;

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").expect("valid regex"));

pub(crate) const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work history",
    "employment",
    "career",
    "professional experience",
];

pub(crate) const EDUCATION_KEYWORDS: &[&str] = &["education", "academic", "degree", "university", "college", "school"];

/// Sections other than education that close the experience block.
const AFTER_EXPERIENCE: &[&str] = &["skills", "projects", "certifications"];

/// Sections that close the education block.
const AFTER_EDUCATION: &[&str] = &["experience", "skills", "projects", "certifications"];

const ROLE_WORDS: &[&str] = &["manager", "developer", "engineer", "analyst", "specialist", "coordinator"];

const DEGREE_WORDS: &[&str] = &["bachelor", "master", "phd", "degree", "university", "college"];

fn mentions_any(line_lower: &str, words: &[&str]) -> bool {
    words.iter().any(|w| line_lower.contains(w))
}

pub fn extract_experience(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut inside = false;

    for line in text.split('\n') {
        let lower = line.trim().to_lowercase();

        if mentions_any(&lower, EXPERIENCE_KEYWORDS) {
            inside = true;
            continue;
        }
        if inside && (mentions_any(&lower, EDUCATION_KEYWORDS) || mentions_any(&lower, AFTER_EXPERIENCE)) {
            break;
        }
        if inside && !lower.is_empty() && (YEAR.is_match(line) || mentions_any(&lower, ROLE_WORDS)) {
            entries.push(line.trim().to_string());
        }
    }

    entries
}

pub fn extract_education(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut inside = false;

    for line in text.split('\n') {
        let lower = line.trim().to_lowercase();

        if mentions_any(&lower, EDUCATION_KEYWORDS) {
            inside = true;
            continue;
        }
        if !inside || lower.is_empty() {
            continue;
        }
        if mentions_any(&lower, AFTER_EDUCATION) {
            break;
        }
        if mentions_any(&lower, DEGREE_WORDS) || YEAR.is_match(line) {
            entries.push(line.trim().to_string());
        }
    }

    entries
}
