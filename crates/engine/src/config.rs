//! Run configuration for the surrounding layer.
//!
//! Scene parameters are fixed (see `CubeConfig`); only pacing, run length and
//! log destination come from the environment.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::types::FRAME_DELAY_MS;

pub const ENV_FRAME_MS: &str = "TUI_CUBE_FRAME_MS";
pub const ENV_MAX_FRAMES: &str = "TUI_CUBE_MAX_FRAMES";
pub const ENV_LOG: &str = "TUI_CUBE_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: expected {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub frame_delay: Duration,
    /// `None` runs until stopped.
    pub max_frames: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(FRAME_DELAY_MS),
            max_frames: None,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    ///
    /// Empty or whitespace-only values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::default();

        if let Some(raw) = get(ENV_FRAME_MS) {
            let ms: u64 = raw.parse().map_err(|_| ConfigError::Invalid {
                var: ENV_FRAME_MS,
                value: raw.clone(),
                expected: "milliseconds as a non-negative integer",
            })?;
            config.frame_delay = Duration::from_millis(ms);
        }

        if let Some(raw) = get(ENV_MAX_FRAMES) {
            let n: u64 = raw.parse().map_err(|_| ConfigError::Invalid {
                var: ENV_MAX_FRAMES,
                value: raw.clone(),
                expected: "a frame count",
            })?;
            config.max_frames = Some(n);
        }

        config.log_path = get(ENV_LOG).map(PathBuf::from);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    fn parse(pairs: &[(&str, &str)]) -> Result<RunConfig, ConfigError> {
        RunConfig::from_lookup(lookup(pairs))
    }

    #[test]
    fn test_defaults_when_unset() {
        let c = parse(&[]).unwrap();
        assert_eq!(c, RunConfig::default());
        assert_eq!(c.frame_delay, Duration::from_millis(8));
        assert_eq!(c.max_frames, None);
        assert_eq!(c.log_path, None);
    }

    #[test]
    fn test_reads_all_variables() {
        let c = parse(&[
            (ENV_FRAME_MS, "16"),
            (ENV_MAX_FRAMES, " 120 "),
            (ENV_LOG, "/tmp/cube.log"),
        ])
        .unwrap();
        assert_eq!(c.frame_delay, Duration::from_millis(16));
        assert_eq!(c.max_frames, Some(120));
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/cube.log")));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let c = parse(&[(ENV_FRAME_MS, "  "), (ENV_LOG, "")]).unwrap();
        assert_eq!(c, RunConfig::default());
    }

    #[test]
    fn test_garbage_is_an_error() {
        let err = parse(&[(ENV_FRAME_MS, "fast")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: ENV_FRAME_MS,
                value: "fast".to_string(),
                expected: "milliseconds as a non-negative integer",
            }
        );
        assert!(err.to_string().contains(ENV_FRAME_MS));

        assert!(parse(&[(ENV_MAX_FRAMES, "-1")]).is_err());
    }
}
