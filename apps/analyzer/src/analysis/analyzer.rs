use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::jobs::JobSource;
use crate::analysis::{analyze, AnalysisInput};
use crate::config::AnalyzerConfig;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::extraction::{extract_document, extract_text_blocking};
use crate::models::{AnalysisResult, JobSkillProfile, ParsedResume, RawDocument};
use crate::parsing::{parse_resume_text_with, parse_resume_with};

/// Text, parsed record and scores for one uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub extracted_text: String,
    pub parsed: ParsedResume,
    pub analysis: AnalysisResult,
}

/// Entry point for callers holding an `AnalyzerConfig`. Stateless apart from
/// the configuration; one instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ResumeAnalyzer {
    config: AnalyzerConfig,
}

impl ResumeAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> AnalyzerResult<Self> {
        Ok(Self::new(AnalyzerConfig::from_env()?))
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn parse(&self, text: &str) -> ParsedResume {
        parse_resume_text_with(text, &self.config.keywords)
    }

    /// Extract and parse only, under this analyzer's keyword limits.
    pub fn parse_document(&self, document: &RawDocument) -> AnalyzerResult<(String, ParsedResume)> {
        parse_resume_with(document, &self.config.keywords)
    }

    pub fn analyze(&self, input: AnalysisInput<'_>) -> AnalysisResult {
        analyze(input, &self.config)
    }

    /// Resolves `job_id` through `jobs` first; an unknown id fails with
    /// `JobNotFound` before any scoring runs.
    pub fn analyze_for_job(
        &self,
        input: AnalysisInput<'_>,
        jobs: &dyn JobSource,
        job_id: &str,
    ) -> AnalyzerResult<AnalysisResult> {
        let job = jobs
            .job_skill_profile(job_id)
            .ok_or_else(|| AnalyzerError::JobNotFound(job_id.to_string()))?;
        Ok(self.analyze(input.with_job(&job)))
    }

    /// Synchronous extract → parse → analyze.
    pub fn analyze_document(
        &self,
        document: &RawDocument,
        job: Option<&JobSkillProfile>,
    ) -> AnalyzerResult<DocumentAnalysis> {
        let text = extract_document(document)?;
        Ok(self.finish(document, text, job))
    }

    /// Same as [`analyze_document`](Self::analyze_document), with extraction on
    /// the blocking pool under the configured timeout.
    pub async fn analyze_upload(
        &self,
        document: RawDocument,
        job: Option<&JobSkillProfile>,
    ) -> AnalyzerResult<DocumentAnalysis> {
        let text = extract_text_blocking(document.clone(), self.config.extraction_timeout).await?;
        Ok(self.finish(&document, text, job))
    }

    fn finish(
        &self,
        document: &RawDocument,
        extracted_text: String,
        job: Option<&JobSkillProfile>,
    ) -> DocumentAnalysis {
        let parsed = self.parse(&extracted_text);
        let mut input = AnalysisInput::new(&parsed, &extracted_text).with_file_kind(document.kind);
        if let Some(job) = job {
            input = input.with_job(job);
        }
        let analysis = self.analyze(input);
        info!(
            kind = document.kind.as_str(),
            bytes = document.bytes.len(),
            chars = extracted_text.chars().count(),
            "document analysed"
        );
        DocumentAnalysis {
            extracted_text,
            parsed,
            analysis,
        }
    }
}
