use serde::{Deserialize, Serialize};

use crate::models::resume::SectionMap;

/// Read-only view of a job posting, resolved by the caller from its own storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSkillProfile {
    pub skills: Vec<String>,
    pub description: String,
}

/// Scoring output for one analysis request. Never updated, only superseded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u32, // 0 – 100
    pub ats_score: u32,     // 0 – 100
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    /// Job-scoped only; empty without a job. At most 15, no case-insensitive duplicates.
    pub missing_keywords: Vec<String>,
    pub section_scores: SectionMap,
    /// Résumé skills vs job skills, 0 – 100. `None` without a job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_match_score: Option<f64>,
}
