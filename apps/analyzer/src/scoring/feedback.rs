//! Strengths and improvements come from fixed rule tables evaluated in order.
//! Rules are independent; any number may fire.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ParsedResume, SectionName};

static QUANTIFIED_ACHIEVEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+%|\$\d+|\d+\s*(years?|months?)").expect("valid regex"));

/// What the rules look at: the parsed record plus the raw text it came from.
pub struct FeedbackContext<'a> {
    pub parsed: &'a ParsedResume,
    pub text: &'a str,
    text_chars: usize,
}

impl<'a> FeedbackContext<'a> {
    pub fn new(parsed: &'a ParsedResume, text: &'a str) -> Self {
        Self {
            parsed,
            text,
            text_chars: text.chars().count(),
        }
    }

    fn has(&self, section: SectionName) -> bool {
        self.parsed.sections.is_present(section)
    }

    fn skill_count(&self) -> usize {
        self.parsed.skills.len()
    }

    fn has_linkedin(&self) -> bool {
        self.parsed.contact_info.linkedin.is_some()
    }
}

struct FeedbackRule {
    message: &'static str,
    applies: fn(&FeedbackContext<'_>) -> bool,
}

const STRENGTH_RULES: &[FeedbackRule] = &[
    FeedbackRule {
        message: "Complete contact information provided",
        applies: |c| c.has(SectionName::Contact) && !c.parsed.contact_info.is_empty(),
    },
    FeedbackRule {
        message: "Comprehensive technical skills section",
        applies: |c| c.skill_count() >= 10,
    },
    FeedbackRule {
        message: "Good technical skills coverage",
        applies: |c| (5..10).contains(&c.skill_count()),
    },
    FeedbackRule {
        message: "Detailed work experience documented",
        applies: |c| c.has(SectionName::Experience) && c.parsed.experience.len() >= 2,
    },
    FeedbackRule {
        message: "Educational background clearly presented",
        applies: |c| c.has(SectionName::Education),
    },
    FeedbackRule {
        message: "Comprehensive resume content",
        applies: |c| c.text_chars >= 1500,
    },
    FeedbackRule {
        message: "Professional LinkedIn profile included",
        applies: |c| c.has_linkedin(),
    },
    FeedbackRule {
        message: "Project experience highlighted",
        applies: |c| c.has(SectionName::Projects),
    },
    FeedbackRule {
        message: "Professional certifications listed",
        applies: |c| c.has(SectionName::Certifications),
    },
];

const IMPROVEMENT_RULES: &[FeedbackRule] = &[
    FeedbackRule {
        message: "Add a professional summary or objective statement",
        applies: |c| !c.has(SectionName::Summary),
    },
    FeedbackRule {
        message: "Include more relevant technical and soft skills",
        applies: |c| c.skill_count() < 5,
    },
    FeedbackRule {
        message: "Add detailed work experience section",
        applies: |c| !c.has(SectionName::Experience),
    },
    FeedbackRule {
        message: "Expand resume content with more specific details and achievements",
        applies: |c| c.text_chars < 800,
    },
    FeedbackRule {
        message: "Include LinkedIn profile URL",
        applies: |c| !c.has_linkedin(),
    },
    FeedbackRule {
        message: "Consider adding a projects section to showcase your work",
        applies: |c| !c.has(SectionName::Projects),
    },
    FeedbackRule {
        message: "Add relevant certifications or professional development",
        applies: |c| !c.has(SectionName::Certifications),
    },
    FeedbackRule {
        message: "Include quantifiable achievements and metrics",
        applies: |c| !QUANTIFIED_ACHIEVEMENT.is_match(c.text),
    },
];

fn evaluate(rules: &[FeedbackRule], context: &FeedbackContext<'_>) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(context))
        .map(|rule| rule.message.to_string())
        .collect()
}

pub fn identify_strengths(context: &FeedbackContext<'_>) -> Vec<String> {
    evaluate(STRENGTH_RULES, context)
}

pub fn identify_improvements(context: &FeedbackContext<'_>) -> Vec<String> {
    evaluate(IMPROVEMENT_RULES, context)
}

/// The single job-specific recommendation, naming up to three missing terms.
pub fn job_tailoring_improvement(missing_keywords: &[String]) -> Option<String> {
    if missing_keywords.is_empty() {
        return None;
    }
    let named: Vec<&str> = missing_keywords.iter().take(3).map(String::as_str).collect();
    Some(format!(
        "Tailor your resume for this role by addressing: {}",
        named.join(", ")
    ))
}
