//! Skill extraction: the union of three discovery paths over the same text.
//!
//! Algorithm:
//! 1. Catalogue match: every catalogue term found in the lower-cased text.
//!    Terms of one or two characters (R, Go, C#) must stand alone as words;
//!    longer terms match as plain substrings.
//! 2. Alias match: any spelling variant found as a whole word records the
//!    canonical skill.
//! 3. Labelled section: the block after a "Skills" / "Technologies" /
//!    "Competencies" heading is split on list delimiters and every token of
//!    three or more characters that is not filler becomes a skill.
//!
//! Results are deduplicated case-insensitively and use the canonical spelling
//! where the term is known, title case otherwise.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::SectionName;
use crate::parsing::catalogue::{catalogue_terms, skill_display_name, SKILL_ALIASES};
use crate::parsing::sections::SECTION_KEYWORDS;
use crate::parsing::text::{contains_word, is_stop_word};
use crate::parsing::timeline::{EDUCATION_KEYWORDS, EXPERIENCE_KEYWORDS};

/// A heading line naming a skills-type section, with up to two words on
/// either side ("Technical Skills:", "Skills & Tools", "Core Competencies").
static SKILLS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:[a-z&/]+[ \t]+){0,2}(?:skills?|technolog(?:y|ies)|competencies)(?:[ \t]+[a-z&/]+){0,2}[ \t\r]*(?:[:\-]|$)",
    )
    .expect("valid regex")
});

/// A capitalised "Label:" line, which starts the next section.
static LABELLED_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[A-Z][^:\n]*:").expect("valid regex"));

static LIST_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;|\n•\-*·]").expect("valid regex"));

const FILLER_WORDS: &[&str] = &["and", "or", "with", "including"];

/// Headings outside the seven canonical sections that still end a skills block.
const OTHER_HEADINGS: &[&str] = &[
    "awards", "publications", "interests", "references", "volunteer", "hobbies", "contact",
];

/// A heading is a short line; anything longer is content.
const MAX_HEADING_WORDS: usize = 5;

const MIN_SECTION_TOKEN_CHARS: usize = 3;

pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: BTreeMap<String, String> = BTreeMap::new();
    let mut record = |name: String| {
        found.entry(name.to_lowercase()).or_insert(name);
    };

    for (_, term) in catalogue_terms() {
        let needle = term.to_lowercase();
        // Bare substrings would find "r" and "go" in almost any résumé.
        let present = if needle.chars().count() <= 2 {
            contains_word(&lower, &needle)
        } else {
            lower.contains(&needle)
        };
        if present {
            record(term.to_string());
        }
    }

    for (canonical, variants) in SKILL_ALIASES {
        if variants.iter().any(|v| contains_word(&lower, v)) {
            record(canonical.to_string());
        }
    }

    for token in skills_section_tokens(text) {
        record(skill_display_name(&token));
    }

    found.into_values().collect()
}

/// Tokens listed under every skills-type heading in the text.
fn skills_section_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for heading in SKILLS_HEADING.find_iter(text) {
        let block = section_block(&text[heading.end()..]);
        for raw in LIST_DELIMITERS.split(&block) {
            let token = raw.trim();
            let lower = token.to_lowercase();
            if token.chars().count() >= MIN_SECTION_TOKEN_CHARS
                && !FILLER_WORDS.contains(&lower.as_str())
                && !is_stop_word(&lower)
            {
                tokens.push(token.to_string());
            }
        }
    }
    tokens
}

/// Lines following a heading, up to a blank line or the next heading.
/// `rest` starts right after the heading; its first line is the remainder of
/// the heading line itself.
fn section_block(rest: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for (index, line) in rest.split('\n').enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }
        if index > 0 && starts_new_section(line) {
            break;
        }
        lines.push(trimmed);
    }
    lines.join("\n")
}

/// A `Label:` line, or a short capitalised line naming any other section
/// ("Employment History", "Professional Summary").
fn starts_new_section(line: &str) -> bool {
    if LABELLED_HEADING.is_match(line) {
        return true;
    }
    let trimmed = line.trim();
    let capitalised = trimmed.chars().next().is_some_and(char::is_uppercase);
    if !capitalised
        || trimmed.contains([',', ';', '|'])
        || trimmed.split_whitespace().count() > MAX_HEADING_WORDS
    {
        return false;
    }
    let lower = trimmed.to_lowercase();
    section_heading_words().any(|keyword| lower.contains(keyword))
}

fn section_heading_words() -> impl Iterator<Item = &'static str> {
    SECTION_KEYWORDS
        .iter()
        .filter(|(section, _)| *section != SectionName::Skills)
        .flat_map(|(_, keywords)| keywords.iter())
        .chain(EXPERIENCE_KEYWORDS)
        .chain(EDUCATION_KEYWORDS)
        .chain(OTHER_HEADINGS)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(skills: &[String], name: &str) -> bool {
        skills.iter().any(|s| s == name)
    }

    #[test]
    fn test_skills_heading_scenario() {
        let skills = extract_skills("Jane Doe\nSkills: python, react, aws\n");
        assert!(has(&skills, "Python"), "{skills:?}");
        assert!(has(&skills, "React"), "{skills:?}");
        assert!(has(&skills, "AWS"), "{skills:?}");
    }

    #[test]
    fn test_catalogue_match_is_case_insensitive_substring() {
        let skills = extract_skills("Deployed services on KUBERNETES with terraform modules");
        assert!(has(&skills, "Kubernetes"));
        assert!(has(&skills, "Terraform"));
    }

    #[test]
    fn test_short_terms_need_word_boundaries() {
        let skills = extract_skills("A good team player");
        assert!(!has(&skills, "Go"));
        assert!(!has(&skills, "R"));

        let skills = extract_skills("Backend in Go and C#");
        assert!(has(&skills, "Go"));
        assert!(has(&skills, "C#"));
    }

    #[test]
    fn test_alias_records_canonical_name() {
        let skills = extract_skills("Ran workloads on k8s and gcp");
        assert!(has(&skills, "Kubernetes"));
        assert!(has(&skills, "Google Cloud"));
    }

    #[test]
    fn test_alias_needs_whole_word() {
        let skills = extract_skills("happy customers");
        assert!(!has(&skills, "Python"));
    }

    #[test]
    fn test_section_tokens_title_cased_and_filtered() {
        let text = "Technical Skills:\ngraphql, and, or, ux research\n\nExperience\nAcme";
        let skills = extract_skills(text);
        assert!(has(&skills, "Graphql"), "{skills:?}");
        assert!(has(&skills, "Ux Research"), "{skills:?}");
        assert!(!has(&skills, "And"));
        assert!(!has(&skills, "Acme"));
    }

    #[test]
    fn test_section_block_stops_at_labelled_heading() {
        let text = "Skills\n• graphql\n• grpc\nEducation: State University\n";
        let skills = extract_skills(text);
        assert!(has(&skills, "Graphql"));
        assert!(has(&skills, "Grpc"));
        assert!(!skills.iter().any(|s| s.contains("State")), "{skills:?}");
    }

    #[test]
    fn test_section_block_stops_at_bare_heading_of_another_section() {
        let text = "Skills\nPython, Rust\nEmployment History\nSenior Engineer at Acme 2020\n";
        let skills = extract_skills(text);
        assert!(has(&skills, "Python"), "{skills:?}");
        assert!(has(&skills, "Rust"), "{skills:?}");
        assert!(!has(&skills, "Employment History"), "{skills:?}");
        assert!(!skills.iter().any(|s| s.contains("Acme")), "{skills:?}");
    }

    #[test]
    fn test_compound_headings_end_the_block() {
        let skills = extract_skills("Skills\ngraphql\nProfessional Summary\nBuilt billing tools\n");
        assert!(has(&skills, "Graphql"), "{skills:?}");
        assert!(!has(&skills, "Professional Summary"), "{skills:?}");
        assert!(!has(&skills, "Built Billing Tools"), "{skills:?}");

        let skills = extract_skills("Core Skills\ngrpc\nWork Experience & Internships\nAcme Corp\n");
        assert!(has(&skills, "Grpc"), "{skills:?}");
        assert!(!skills.iter().any(|s| s.contains("Internships")), "{skills:?}");
        assert!(!has(&skills, "Acme Corp"), "{skills:?}");
    }

    #[test]
    fn test_capitalised_skill_lines_stay_in_the_block() {
        let skills = extract_skills("Skills\nGraphql\nGrpc Tooling\n");
        assert!(has(&skills, "Graphql"), "{skills:?}");
        assert!(has(&skills, "Grpc Tooling"), "{skills:?}");
    }

    #[test]
    fn test_no_duplicates_no_empty_no_stop_words() {
        let text = "Skills: Python, python, PYTHON, the, , py\nPython developer";
        let skills = extract_skills(text);
        assert_eq!(skills.iter().filter(|s| s.eq_ignore_ascii_case("python")).count(), 1);
        assert!(skills.iter().all(|s| !s.trim().is_empty()));
        assert!(skills.iter().all(|s| !is_stop_word(s)));
    }

    #[test]
    fn test_output_is_deterministic() {
        let text = "Skills: rust, docker, aws, python";
        assert_eq!(extract_skills(text), extract_skills(text));
    }
}
