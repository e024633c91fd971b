//! Orchestrator — composes the scorers into one analysis result.
//!
//! Flow: extract text → parse → overall / ATS score → strengths and
//!       improvements → (job only) missing keywords, match score, tailoring tip.
//!
//! Job lookup belongs to the caller. `JobSource` is the seam for it; this
//! module only reports `JobNotFound` when a lookup through that seam misses.

pub mod analyzer;
pub mod jobs;

use tracing::info;

use crate::config::AnalyzerConfig;
use crate::models::{AnalysisResult, FileKind, JobSkillProfile, ParsedResume};
use crate::scoring::{
    calculate_ats_score, calculate_overall_score, calculate_skill_match_score_with,
    find_missing_keywords, identify_improvements, identify_strengths, job_tailoring_improvement,
    FeedbackContext,
};

pub use analyzer::{DocumentAnalysis, ResumeAnalyzer};
pub use jobs::JobSource;

/// Everything one analysis needs. The text is the one the record was parsed from.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub parsed: &'a ParsedResume,
    pub extracted_text: &'a str,
    /// Declared upload type; `None` when only text is available.
    pub file_kind: Option<FileKind>,
    pub job: Option<&'a JobSkillProfile>,
}

impl<'a> AnalysisInput<'a> {
    pub fn new(parsed: &'a ParsedResume, extracted_text: &'a str) -> Self {
        Self {
            parsed,
            extracted_text,
            file_kind: None,
            job: None,
        }
    }

    pub fn with_file_kind(mut self, kind: FileKind) -> Self {
        self.file_kind = Some(kind);
        self
    }

    pub fn with_job(mut self, job: &'a JobSkillProfile) -> Self {
        self.job = Some(job);
        self
    }
}

/// Scores one parsed résumé. Never fails: every sub-score has a defined
/// value for any input, including empty text.
pub fn analyze(input: AnalysisInput<'_>, config: &AnalyzerConfig) -> AnalysisResult {
    let weights = &config.weights;
    let parsed = input.parsed;
    let text = input.extracted_text;

    let overall_score = calculate_overall_score(parsed, text.chars().count(), weights);
    let ats_score = calculate_ats_score(parsed, text, input.file_kind, weights);

    let feedback = FeedbackContext::new(parsed, text);
    let strengths = identify_strengths(&feedback);
    let mut improvements = identify_improvements(&feedback);

    let mut missing_keywords = Vec::new();
    let mut job_match_score = None;
    if let Some(job) = input.job {
        missing_keywords = find_missing_keywords(text, job, &config.keywords);
        job_match_score = Some(calculate_skill_match_score_with(&parsed.skills, &job.skills, weights));
        improvements.extend(job_tailoring_improvement(&missing_keywords));
    }

    info!(
        overall_score,
        ats_score,
        strengths = strengths.len(),
        improvements = improvements.len(),
        missing_keywords = missing_keywords.len(),
        job_scoped = input.job.is_some(),
        "resume analysis complete"
    );

    AnalysisResult {
        overall_score,
        ats_score,
        strengths,
        improvements,
        missing_keywords,
        section_scores: parsed.sections.clone(),
        job_match_score,
    }
}
