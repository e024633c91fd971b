use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::learning_paths::{learning_path, LearningPath};
use crate::scoring::skill_match::{calculate_skill_match_score, normalize_skills};

/// Learning paths are produced for at most this many missing skills.
pub const MAX_LEARNING_PATHS: usize = 5;

/// Candidate skills vs one job's required skills. All skill lists are
/// lower-case and deduplicated; `missing_skills` keeps the job's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub current_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_match_score: f64,
    pub learning_paths: Vec<LearningPath>,
}

fn dedup_normalized<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    normalize_skills(skills)
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

pub fn analyze_skill_gap<C, J>(candidate_skills: &[C], job_skills: &[J]) -> SkillGapReport
where
    C: AsRef<str>,
    J: AsRef<str>,
{
    let current_skills = dedup_normalized(candidate_skills);
    let required_skills = dedup_normalized(job_skills);

    let current: HashSet<&str> = current_skills.iter().map(String::as_str).collect();
    let (matching_skills, missing_skills): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .cloned()
        .partition(|skill| current.contains(skill.as_str()));

    let skill_match_score = calculate_skill_match_score(&current_skills, &required_skills);
    let learning_paths = missing_skills
        .iter()
        .take(MAX_LEARNING_PATHS)
        .map(|skill| learning_path(skill))
        .collect();

    debug!(
        matching = matching_skills.len(),
        missing = missing_skills.len(),
        skill_match_score,
        "skill gap analysed"
    );

    SkillGapReport {
        current_skills,
        required_skills,
        matching_skills,
        missing_skills,
        skill_match_score,
        learning_paths,
    }
}
