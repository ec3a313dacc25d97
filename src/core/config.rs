//! Run configuration: trend windows, market limits and screen horizons.
//!
//! Looked up in order: an explicit `--config` path, the
//! `FANTASY_MARKET_CONFIG` environment variable, then
//! `~/.config/fantasy-market/config.json`. Without any file the defaults
//! apply.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{market::AnalysisWindows, CONFIG_ENV_VAR};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub short_window_days: usize,
    pub long_window_days: usize,
    /// Market listings considered per run.
    pub max_market_players: usize,
    pub minimum_momentum: f64,
    pub protection_warning_hours: i64,
    pub low_buyout_horizon_hours: i64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            short_window_days: 5,
            long_window_days: 10,
            max_market_players: 500,
            minimum_momentum: 5.0,
            protection_warning_hours: 72,
            low_buyout_horizon_hours: 48,
        }
    }
}

impl AnalysisConfig {
    pub fn windows(&self) -> AnalysisWindows {
        AnalysisWindows {
            short_days: self.short_window_days,
            long_days: self.long_window_days,
        }
    }

    /// Read a config file. Unknown keys are ignored, missing keys default.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.short_window_days > 0 && self.long_window_days > 0,
            "trend windows must be at least one day"
        );
        anyhow::ensure!(
            self.minimum_momentum.is_finite(),
            "minimum_momentum must be a finite number"
        );
        Ok(())
    }
}

/// Path: ~/.config/fantasy-market/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("fantasy-market").join("config.json"))
}

/// Resolve and load the configuration.
///
/// An explicitly named file (flag or env var) must exist; the default
/// location is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<AnalysisConfig> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

    if let Some(path) = named {
        debug!(path = %path.display(), "loading config");
        return AnalysisConfig::from_file(&path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "loading default config");
            AnalysisConfig::from_file(&path)
        }
        _ => Ok(AnalysisConfig::default()),
    }
}
