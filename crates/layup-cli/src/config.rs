//! Optional TOML configuration for the `layup` CLI.
//!
//! Looked up from `--config`, then `LAYUP_CONFIG`. Every key is optional;
//! command-line flags override whatever the file sets.
//!
//! ```toml
//! sizes = [1, 5, 10, 50, 1000]
//! naive_threshold = 50
//! cache = "warm"
//! max_depth = 2000
//! prefill = true
//! max_cache_entries = 100000
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use layup_core::{
    BenchPlan, CacheMode, DEFAULT_SIZES, Limits, MAX_DEPTH_CEILING, NAIVE_THRESHOLD,
};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sizes: Vec<u64>,
    pub naive_threshold: u64,
    pub cache: CacheMode,
    pub max_depth: usize,
    pub prefill: bool,
    pub max_cache_entries: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        let limits = Limits::default();
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            naive_threshold: NAIVE_THRESHOLD,
            cache: CacheMode::default(),
            max_depth: limits.max_depth,
            prefill: limits.prefill,
            max_cache_entries: limits.max_cache_entries,
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("invalid layup config")?;
        ensure!(
            config.max_depth <= MAX_DEPTH_CEILING,
            "invalid layup config: max_depth {} exceeds the ceiling of {MAX_DEPTH_CEILING}",
            config.max_depth
        );
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load from `explicit`, else `LAYUP_CONFIG`, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var("LAYUP_CONFIG")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        });
        match path {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn limits(&self) -> Limits {
        Limits {
            max_depth: self.max_depth,
            prefill: self.prefill,
            max_cache_entries: self.max_cache_entries,
        }
    }

    pub fn plan(&self) -> BenchPlan {
        BenchPlan {
            sizes: self.sizes.clone(),
            naive_threshold: self.naive_threshold,
            cache_mode: self.cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::parse("sizes = [1, 5, 10]\ncache = \"warm\"\n").unwrap();
        assert_eq!(config.sizes, vec![1, 5, 10]);
        assert_eq!(config.cache, CacheMode::Warm);
        assert_eq!(config.naive_threshold, NAIVE_THRESHOLD);
        assert!(config.prefill);
    }

    #[test]
    fn test_limits_from_config() {
        let config =
            Config::parse("max_depth = 64\nprefill = false\nmax_cache_entries = 500\n").unwrap();
        let limits = config.limits();
        assert_eq!(limits.max_depth, 64);
        assert!(!limits.prefill);
        assert_eq!(limits.max_cache_entries, Some(500));
    }

    #[test]
    fn test_max_depth_above_ceiling_rejected() {
        let err = Config::parse("max_depth = 10000000").unwrap_err();
        assert!(err.to_string().contains("exceeds the ceiling"), "{err}");
        assert!(Config::parse(&format!("max_depth = {MAX_DEPTH_CEILING}")).is_ok());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::parse("size = [1]").is_err());
    }

    #[test]
    fn test_bad_cache_mode_rejected() {
        assert!(Config::parse("cache = \"lukewarm\"").is_err());
    }
}
