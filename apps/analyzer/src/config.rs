use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::scoring::weights::ScoringWeights;

/// Limits for keyword extraction and missing-keyword reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordLimits {
    /// Most-common candidates considered before the frequency filter.
    pub candidate_pool: usize,
    /// Keywords kept on a parsed résumé.
    pub keep: usize,
    /// Only tokens seen at least this often become keywords.
    pub min_frequency: usize,
    /// Top job-description keywords checked against the résumé.
    pub job_keywords: usize,
    pub missing_keywords: usize,
}

impl Default for KeywordLimits {
    fn default() -> Self {
        Self {
            candidate_pool: 30,
            keep: 20,
            min_frequency: 2,
            job_keywords: 10,
            missing_keywords: 15,
        }
    }
}

/// Analyzer configuration. Every field has a default, so `from_env` only
/// overrides what is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub weights: ScoringWeights,
    pub keywords: KeywordLimits,
    /// Budget for `extract_text_blocking`.
    pub extraction_timeout: Duration,
    pub log_level: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            keywords: KeywordLimits::default(),
            extraction_timeout: Duration::from_secs(30),
            log_level: "info".to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut config = AnalyzerConfig::default();
        if let Some(keep) = optional_env("RESUME_KEYWORD_LIMIT")? {
            config.keywords.keep = keep;
        }
        if let Some(pool) = optional_env("RESUME_KEYWORD_CANDIDATES")? {
            config.keywords.candidate_pool = pool;
        }
        if let Some(job_keywords) = optional_env("RESUME_JOB_KEYWORD_LIMIT")? {
            config.keywords.job_keywords = job_keywords;
        }
        if let Some(missing) = optional_env("RESUME_MISSING_KEYWORD_LIMIT")? {
            config.keywords.missing_keywords = missing;
        }
        if let Some(secs) = optional_env::<u64>("RESUME_EXTRACT_TIMEOUT_SECS")? {
            config.extraction_timeout = Duration::from_secs(secs);
        }
        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = level;
        }
        Ok(config)
    }
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_product_constants() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.keywords.candidate_pool, 30);
        assert_eq!(config.keywords.keep, 20);
        assert_eq!(config.keywords.job_keywords, 10);
        assert_eq!(config.keywords.missing_keywords, 15);
        assert_eq!(config.extraction_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_optional_env_missing_is_none() {
        let value: Option<usize> = optional_env("RESUME_ANALYZER_TEST_UNSET_VAR").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_optional_env_parses_value() {
        std::env::set_var("RESUME_ANALYZER_TEST_GOOD_VAR", " 12 ");
        let value: Option<usize> = optional_env("RESUME_ANALYZER_TEST_GOOD_VAR").unwrap();
        assert_eq!(value, Some(12));
    }

    #[test]
    fn test_optional_env_rejects_garbage() {
        std::env::set_var("RESUME_ANALYZER_TEST_BAD_VAR", "twelve");
        let err = optional_env::<usize>("RESUME_ANALYZER_TEST_BAD_VAR").unwrap_err();
        assert!(err.to_string().contains("RESUME_ANALYZER_TEST_BAD_VAR"));
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_value(AnalyzerConfig::default()).unwrap();
        assert_eq!(json["keywords"]["keep"], 20);
        assert_eq!(json["log_level"], "info");
    }
}
