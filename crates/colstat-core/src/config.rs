//! Run configuration shared by the executor and the CLI.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Upper bound on files parsed at the same time. `None` parses every file
    /// concurrently (one worker per file, all running).
    pub max_parallel_files: Option<usize>,

    /// Field delimiter handed to the CSV reader.
    pub delimiter: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_parallel_files: None,
            delimiter: b',',
        }
    }
}

impl RunConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `COLSTAT_MAX_PARALLEL`: max files parsed concurrently (`0` = unbounded)
    /// - `COLSTAT_DELIMITER`: single ASCII field delimiter
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(s) = lookup("COLSTAT_MAX_PARALLEL") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.max_parallel_files = if v == 0 { None } else { Some(v) };
            }
        }

        if let Some(s) = lookup("COLSTAT_DELIMITER") {
            if let [b] = s.as_bytes() {
                if b.is_ascii() {
                    cfg.delimiter = *b;
                }
            }
        }

        cfg
    }

    /// Reject settings the reader or the scheduler cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.max_parallel_files == Some(0) {
            return Err(Error::Config(
                "max_parallel_files must be at least 1".to_string(),
            ));
        }
        if matches!(self.delimiter, b'"' | b'\n' | b'\r') || !self.delimiter.is_ascii() {
            return Err(Error::Config(format!(
                "unusable delimiter {:?}",
                self.delimiter as char
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let cfg = RunConfig::from_lookup(|_| None);
        assert_eq!(cfg, RunConfig::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let cfg = RunConfig::from_lookup(lookup(&[
            ("COLSTAT_MAX_PARALLEL", "3"),
            ("COLSTAT_DELIMITER", ";"),
        ]));
        assert_eq!(cfg.max_parallel_files, Some(3));
        assert_eq!(cfg.delimiter, b';');
    }

    #[test]
    fn test_zero_parallelism_means_unbounded() {
        let cfg = RunConfig::from_lookup(lookup(&[("COLSTAT_MAX_PARALLEL", "0")]));
        assert_eq!(cfg.max_parallel_files, None);
    }

    #[test]
    fn test_malformed_env_values_fall_back() {
        let cfg = RunConfig::from_lookup(lookup(&[
            ("COLSTAT_MAX_PARALLEL", "many"),
            ("COLSTAT_DELIMITER", "::"),
        ]));
        assert_eq!(cfg, RunConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cfg = RunConfig {
            max_parallel_files: Some(0),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = RunConfig {
            delimiter: b'"',
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("unusable delimiter"));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let cfg = RunConfig {
            max_parallel_files: Some(2),
            delimiter: b'\t',
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: RunConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
