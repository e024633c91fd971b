//! Résumé analysis core: document text extraction, field recognition,
//! section detection, skill and keyword extraction, and job-fit scoring.
//!
//! Everything here is synchronous and stateless except
//! [`extraction::extract_text_blocking`] and
//! [`ResumeAnalyzer::analyze_upload`], which move CPU-bound extraction onto
//! tokio's blocking pool under a timeout.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod matching;
pub mod models;
pub mod parsing;
pub mod scoring;
pub mod telemetry;

pub use analysis::{analyze, AnalysisInput, DocumentAnalysis, JobSource, ResumeAnalyzer};
pub use config::{AnalyzerConfig, KeywordLimits};
pub use errors::{AnalyzerError, AnalyzerResult};
pub use extraction::{extract_text, extract_text_blocking, extract_text_by_extension};
pub use matching::{analyze_skill_gap, recommend_jobs, text_similarity};
pub use models::{
    AnalysisResult, ContactInfo, FileKind, JobSkillProfile, ParsedResume, RawDocument, SectionMap,
    SectionName,
};
pub use parsing::{parse_resume, parse_resume_text, parse_resume_with};
pub use scoring::{calculate_skill_match_score, ScoringWeights};
