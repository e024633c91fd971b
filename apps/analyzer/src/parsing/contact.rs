use std::sync::LazyLock;

use regex::Regex;

use crate::models::ContactInfo;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

/// Tried in order; the first pattern with any match wins.
static PHONE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // country code, optional parenthesised area code, separators
        Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex"),
        // plain separated 3-3-4
        Regex::new(r"(\+?\d{1,3}[-.\s]?)?\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex"),
        // bare ten digits
        Regex::new(r"(\+?\d{1,3}[-.\s]?)?\d{10}").expect("valid regex"),
    ]
});

static LINKEDIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").expect("valid regex"));

static GITHUB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)github\.com/[\w-]+").expect("valid regex"));

/// Recognises email, phone, LinkedIn and GitHub in free text.
/// Only the first match of each field is kept; misses leave the field absent.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: extract_phone(text),
        linkedin: LINKEDIN.find(text).map(|m| format!("https://{}", m.as_str())),
        github: GITHUB.find(text).map(|m| format!("https://{}", m.as_str())),
    }
}

fn extract_phone(text: &str) -> Option<String> {
    PHONE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().trim().to_string())
}
