use std::collections::HashSet;

use crate::config::KeywordLimits;
use crate::models::JobSkillProfile;
use crate::parsing::catalogue::skill_display_name;
use crate::parsing::keywords::extract_keywords;

/// Job terms that never appear in the résumé text.
///
/// Candidates, in order: the job's listed skills, then the top
/// `limits.job_keywords` keywords of the job description. A term is missing
/// when its lower-case form is not a substring of the lower-cased résumé
/// text. Output uses display spelling, is deduplicated case-insensitively
/// in first-seen order and capped at `limits.missing_keywords`.
pub fn find_missing_keywords(
    resume_text: &str,
    job: &JobSkillProfile,
    limits: &KeywordLimits,
) -> Vec<String> {
    let text = resume_text.to_lowercase();

    let skills = job
        .skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    let description_keywords = extract_keywords(&job.description, limits)
        .into_iter()
        .take(limits.job_keywords);

    let mut seen = HashSet::new();
    skills
        .chain(description_keywords)
        .filter(|term| !text.contains(term.as_str()))
        .map(|term| skill_display_name(&term))
        .filter(|name| seen.insert(name.to_lowercase()))
        .take(limits.missing_keywords)
        .collect()
}
