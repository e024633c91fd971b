//! Skill match — candidate (or résumé) skills vs a job's required skills.
//!
//! Algorithm:
//! 1. Normalise both lists to trimmed lower case, dropping blank entries.
//! 2. exact_ratio   = job skills present verbatim among candidate skills / job skills
//! 3. partial_ratio = job skills where some candidate skill contains it, or is
//!    contained by it / job skills (each job skill counts once)
//! 4. score = 100 × (exact_weight × exact_ratio + partial_weight × partial_ratio),
//!    clamped to [0, 100]
//!
//! Either list empty → 0.0. If the weighted combination is not a finite
//! number, the score falls back to exact_ratio × 100.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::scoring::weights::ScoringWeights;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchBreakdown {
    pub exact_ratio: f64,   // 0.0 – 1.0
    pub partial_ratio: f64, // 0.0 – 1.0
    pub score: f64,         // 0.0 – 100.0
}

pub(crate) fn normalize_skills<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Full breakdown, or `None` when either side has no skills.
pub fn skill_match_breakdown<C, J>(
    candidate_skills: &[C],
    job_skills: &[J],
    weights: &ScoringWeights,
) -> Option<SkillMatchBreakdown>
where
    C: AsRef<str>,
    J: AsRef<str>,
{
    let candidate = normalize_skills(candidate_skills);
    let job = normalize_skills(job_skills);
    if candidate.is_empty() || job.is_empty() {
        return None;
    }

    let total = job.len() as f64;
    let exact = job.iter().filter(|j| candidate.contains(j)).count() as f64;
    let partial = job
        .iter()
        .filter(|j| {
            candidate
                .iter()
                .any(|c| c.contains(j.as_str()) || j.contains(c.as_str()))
        })
        .count() as f64;

    let exact_ratio = exact / total;
    let partial_ratio = partial / total;
    let combined =
        100.0 * (weights.exact_match_weight * exact_ratio + weights.partial_match_weight * partial_ratio);

    let score = if combined.is_finite() {
        combined.clamp(0.0, 100.0)
    } else {
        warn!(
            exact_weight = weights.exact_match_weight,
            partial_weight = weights.partial_match_weight,
            "weighted skill match is not finite, using exact matches only"
        );
        exact_ratio * 100.0
    };

    Some(SkillMatchBreakdown {
        exact_ratio,
        partial_ratio,
        score,
    })
}

pub fn calculate_skill_match_score_with<C, J>(
    candidate_skills: &[C],
    job_skills: &[J],
    weights: &ScoringWeights,
) -> f64
where
    C: AsRef<str>,
    J: AsRef<str>,
{
    skill_match_breakdown(candidate_skills, job_skills, weights)
        .map(|b| b.score)
        .unwrap_or(0.0)
}

/// Skill match score with the default 0.7 / 0.3 weighting.
pub fn calculate_skill_match_score<C, J>(candidate_skills: &[C], job_skills: &[J]) -> f64
where
    C: AsRef<str>,
    J: AsRef<str>,
{
    calculate_skill_match_score_with(candidate_skills, job_skills, &ScoringWeights::default())
}
