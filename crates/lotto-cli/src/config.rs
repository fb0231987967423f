//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config <path>` on the command line
//! 2. `$LOTTO_CONFIG` environment variable
//! 3. `config.toml` in the platform config dir (`~/.config/lotto/` on Linux)
//! 4. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use lotto_core::DEFAULT_SIGNIFICANCE;
use lotto_render::ChartOptions;

use crate::pipeline::AnalysisOptions;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
    pub charts: ChartsConfig,
}

/// Hypothesis test settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// p-values below this reject uniformity.
    pub significance: f64,
}

/// Where artifacts go.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory. Default: the input file's directory.
    pub dir: Option<String>,
}

/// Chart rendering settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    pub enabled: bool,
    pub width: u32,
    pub height: u32,
    pub histogram_buckets: usize,
}

// --- Defaults ---

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        let opts = ChartOptions::default();
        Self {
            enabled: true,
            width: opts.width,
            height: opts.height,
            histogram_buckets: opts.histogram_buckets,
        }
    }
}

impl ChartsConfig {
    pub fn options(&self) -> ChartOptions {
        ChartOptions {
            width: self.width,
            height: self.height,
            histogram_buckets: self.histogram_buckets,
        }
    }
}

impl Config {
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            significance: self.analysis.significance,
            render_charts: self.charts.enabled,
        }
    }

    fn validate(&self) -> Result<()> {
        let alpha = self.analysis.significance;
        if !(alpha > 0.0 && alpha < 1.0) {
            bail!("analysis.significance must be between 0 and 1, got {alpha}");
        }
        if self.charts.width == 0 || self.charts.height == 0 {
            bail!(
                "charts.width and charts.height must be positive, got {}x{}",
                self.charts.width,
                self.charts.height
            );
        }
        if self.charts.histogram_buckets == 0 {
            bail!("charts.histogram_buckets must be at least 1");
        }
        Ok(())
    }
}

/// Load config from disk. Returns defaults if no config file exists.
///
/// An explicitly requested file must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(p) = explicit {
        if !p.exists() {
            bail!("config file {} does not exist", p.display());
        }
    }

    let config = match config_path(explicit) {
        Some(p) if p.exists() => parse_file(&p)?,
        _ => Config::default(),
    };
    config.validate()?;
    Ok(config)
}

fn parse_file(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Resolve the config file path.
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }

    if let Ok(p) = std::env::var("LOTTO_CONFIG") {
        return Some(PathBuf::from(p));
    }

    directories::ProjectDirs::from("dev", "lotto", "lotto")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Show the active config path (for `lotto --show-config`).
pub fn show_config_path(explicit: Option<&Path>) -> String {
    match config_path(explicit) {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}
