use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::matching::matcher::DEFAULT_STRICT_THRESHOLD;
use crate::matching::strategy::{StrategyKind, DEFAULT_MIN_SIGNAL_WEIGHT};

/// Defaults applied to a matching run when the request does not override them.
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub strategy: StrategyKind,
    pub strict_mode: bool,
    pub strict_threshold: f64,
    /// Weighted strategy: job weight below which the score is forced to 0.
    pub min_signal_weight: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Weighted,
            strict_mode: false,
            strict_threshold: DEFAULT_STRICT_THRESHOLD,
            min_signal_weight: DEFAULT_MIN_SIGNAL_WEIGHT,
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub jobs_path: PathBuf,
    pub resumes_path: PathBuf,
    pub skill_catalog_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
    pub matching: MatchingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = MatchingConfig::default();
        let matching = MatchingConfig {
            strategy: parse_or(&lookup, "MATCH_STRATEGY", defaults.strategy)?,
            strict_mode: parse_or(&lookup, "MATCH_STRICT_MODE", defaults.strict_mode)?,
            strict_threshold: parse_or(&lookup, "MATCH_STRICT_THRESHOLD", defaults.strict_threshold)?,
            min_signal_weight: parse_or(
                &lookup,
                "MATCH_MIN_SIGNAL_WEIGHT",
                defaults.min_signal_weight,
            )?,
        };
        ensure!(
            matching.strict_threshold.is_finite() && matching.strict_threshold >= 0.0,
            "MATCH_STRICT_THRESHOLD must be a non-negative number"
        );
        ensure!(
            matching.min_signal_weight.is_finite() && matching.min_signal_weight >= 0.0,
            "MATCH_MIN_SIGNAL_WEIGHT must be a non-negative number"
        );

        Ok(Config {
            jobs_path: lookup("JOBS_PATH")
                .unwrap_or_else(|| "job_description.csv".to_string())
                .into(),
            resumes_path: lookup("RESUMES_PATH")
                .unwrap_or_else(|| "resume.csv".to_string())
                .into(),
            skill_catalog_path: lookup("SKILL_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            port: parse_or(&lookup, "PORT", 8080_u16)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            matching,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.jobs_path, PathBuf::from("job_description.csv"));
        assert_eq!(config.resumes_path, PathBuf::from("resume.csv"));
        assert!(config.skill_catalog_path.is_none());
        assert_eq!(config.port, 8080);
        assert_eq!(config.matching.strategy, StrategyKind::Weighted);
        assert!(!config.matching.strict_mode);
        assert_eq!(config.matching.strict_threshold, 4.0);
        assert_eq!(config.matching.min_signal_weight, 5.0);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("JOBS_PATH", "/data/jobs.csv"),
            ("PORT", "9090"),
            ("MATCH_STRATEGY", "keyword"),
            ("MATCH_STRICT_MODE", "true"),
            ("MATCH_STRICT_THRESHOLD", "2.5"),
            ("SKILL_CATALOG_PATH", "/etc/skills.json"),
        ])
        .unwrap();
        assert_eq!(config.jobs_path, PathBuf::from("/data/jobs.csv"));
        assert_eq!(config.port, 9090);
        assert_eq!(config.matching.strategy, StrategyKind::Keyword);
        assert!(config.matching.strict_mode);
        assert_eq!(config.matching.strict_threshold, 2.5);
        assert_eq!(
            config.skill_catalog_path,
            Some(PathBuf::from("/etc/skills.json"))
        );
    }

    #[test]
    fn test_invalid_port_names_variable() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(format!("{err:#}").contains("PORT"));
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(config_from(&[("MATCH_STRATEGY", "cosine")]).is_err());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        assert!(config_from(&[("MATCH_STRICT_THRESHOLD", "-1")]).is_err());
    }

    #[test]
    fn test_blank_catalog_path_ignored() {
        let config = config_from(&[("SKILL_CATALOG_PATH", "  ")]).unwrap();
        assert!(config.skill_catalog_path.is_none());
    }
}
