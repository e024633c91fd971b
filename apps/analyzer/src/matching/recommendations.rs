use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::scoring::skill_match::{calculate_skill_match_score, normalize_skills};

/// A job the caller can recommend, as read from its own storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub job_id: String,
    pub title: String,
    pub match_score: f64, // 0.0 – 100.0
}

impl JobRecommendation {
    fn new(job: &JobPosting, match_score: f64) -> Self {
        Self {
            job_id: job.id.clone(),
            title: job.title.clone(),
            match_score,
        }
    }
}

/// Ranks `jobs` (in the caller's preferred order, e.g. newest first) for a
/// candidate.
///
/// Without candidate skills nothing can be ranked, so the first `limit` jobs
/// come back unscored. Otherwise only jobs sharing at least one skill
/// (case-insensitive equality) are scored; ties keep the input order.
pub fn recommend_jobs<S: AsRef<str>>(
    candidate_skills: &[S],
    jobs: &[JobPosting],
    limit: usize,
) -> Vec<JobRecommendation> {
    let candidate = normalize_skills(candidate_skills);
    if candidate.is_empty() {
        return jobs
            .iter()
            .take(limit)
            .map(|job| JobRecommendation::new(job, 0.0))
            .collect();
    }

    let owned: HashSet<&str> = candidate.iter().map(String::as_str).collect();
    let mut ranked: Vec<JobRecommendation> = jobs
        .iter()
        .filter(|job| {
            normalize_skills(&job.skills)
                .iter()
                .any(|s| owned.contains(s.as_str()))
        })
        .map(|job| JobRecommendation::new(job, calculate_skill_match_score(&candidate, &job.skills)))
        .collect();

    ranked.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    ranked.truncate(limit);
    ranked
}
