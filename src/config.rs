use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::dashboard::SunImage;
use crate::data::model::Table;
use crate::error::SunspotError;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "SUNSPOT_DASH_CONFIG";
/// Environment variable overriding `data_path`.
pub const DATA_ENV: &str = "SUNSPOT_DATA";

// ---------------------------------------------------------------------------
// Static configuration
// ---------------------------------------------------------------------------

/// Startup configuration: where the data lives, slider bounds and defaults.
///
/// Every field is optional in the JSON file:
///
/// ```json
/// { "data_path": "SN_m_tot_V2.0.csv", "initial_years": [1900, 2000] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// Initial `[start, end]` of the year slider, clamped to the data.
    pub initial_years: [i32; 2],
    pub smoothing_window: i64,
    pub max_smoothing_window: i64,
    pub cycle_length: f64,
    pub min_cycle_length: f64,
    pub max_cycle_length: f64,
    pub images: Vec<SunImage>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("monthly_sunspot.csv"),
            initial_years: [1750, 2023],
            smoothing_window: 12,
            max_smoothing_window: 24,
            cycle_length: 11.0,
            min_cycle_length: 1.0,
            max_cycle_length: 14.0,
            images: SunImage::realtime_defaults(),
        }
    }
}

impl DashboardConfig {
    /// Build the config from `SUNSPOT_DASH_CONFIG` and `SUNSPOT_DATA`.
    pub fn from_env() -> Result<Self> {
        let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let data_override = std::env::var_os(DATA_ENV).map(PathBuf::from);
        Self::resolve(config_path.as_deref(), data_override)
    }

    /// Read the optional config file, then apply the data path override.
    pub fn resolve(config_path: Option<&Path>, data_override: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                Self::from_json(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => Self::default(),
        };
        if let Some(path) = data_override {
            config.data_path = path;
        }
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("parsing JSON")?;
        if config.smoothing_window < 1 || config.max_smoothing_window < config.smoothing_window {
            anyhow::bail!(
                "smoothing window {} must lie in 1..={}",
                config.smoothing_window,
                config.max_smoothing_window
            );
        }
        if !(config.min_cycle_length > 0.0
            && config.min_cycle_length <= config.cycle_length
            && config.cycle_length <= config.max_cycle_length)
        {
            anyhow::bail!(
                "cycle length {} must lie in {}..={} and be positive",
                config.cycle_length,
                config.min_cycle_length,
                config.max_cycle_length
            );
        }
        Ok(config)
    }

    /// Initial parameters for a freshly loaded table.
    pub fn initial_params(&self, table: &Table) -> DashboardParams {
        let (lo, hi) = match (table.first_year(), table.last_year()) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => (self.initial_years[0], self.initial_years[1]),
        };
        let start = self.initial_years[0].clamp(lo, hi);
        let end = self.initial_years[1].clamp(start, hi);
        DashboardParams {
            start_year: start,
            end_year: end,
            smoothing_window: self.smoothing_window,
            cycle_length: self.cycle_length,
        }
    }
}

// ---------------------------------------------------------------------------
// Live parameters
// ---------------------------------------------------------------------------

/// The user-controlled inputs of one recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardParams {
    pub start_year: i32,
    pub end_year: i32,
    pub smoothing_window: i64,
    pub cycle_length: f64,
}

impl DashboardParams {
    /// Check every precondition of the transform engine against `table`.
    pub fn validate(&self, table: &Table) -> crate::error::Result<()> {
        if self.start_year > self.end_year {
            return Err(SunspotError::InvertedRange {
                start: self.start_year,
                end: self.end_year,
            });
        }
        for year in [self.start_year, self.end_year] {
            if !table.contains_year(year) {
                return Err(SunspotError::YearNotFound { year });
            }
        }
        if self.smoothing_window < 1 {
            return Err(SunspotError::param("smoothing window", self.smoothing_window));
        }
        if !self.cycle_length.is_finite() || self.cycle_length <= 0.0 {
            return Err(SunspotError::param("cycle length", self.cycle_length));
        }
        Ok(())
    }
}
