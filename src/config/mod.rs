//! Configuration file support for glyphtrace.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/glyphtrace/config.toml`.
//! Settings cover pen classification, brush appearance, completion scoring,
//! and canvas dimensions.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{BrushConfig, CanvasConfig, CompletionConfig, PenConfig};

use crate::draw::BrushStyle;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [pen]
/// timeout_ms = 500
/// epsilon = 1.5
///
/// [brush]
/// min_width = 3.0
/// max_width = 12.0
///
/// [completion]
/// threshold = 0.75
///
/// [canvas]
/// width = 1024
/// height = 768
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pen input classification settings
    #[serde(default)]
    pub pen: PenConfig,

    /// Brush appearance settings
    #[serde(default)]
    pub brush: BrushConfig,

    /// Completion scoring settings
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Canvas dimensions and guide appearance
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// rendering glitches or a scoring setup that can never complete.
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged.
    fn validate_and_clamp(&mut self) {
        // Timeout: 50 - 10000 ms
        if !(50..=10_000).contains(&self.pen.timeout_ms) {
            log::warn!(
                "Invalid pen timeout_ms {}, clamping to 50-10000 range",
                self.pen.timeout_ms
            );
            self.pen.timeout_ms = self.pen.timeout_ms.clamp(50, 10_000);
        }

        // Epsilon: 0.0 - 10.0 px
        if !(0.0..=10.0).contains(&self.pen.epsilon) {
            log::warn!(
                "Invalid pen epsilon {:.1}, clamping to 0.0-10.0 range",
                self.pen.epsilon
            );
            self.pen.epsilon = self.pen.epsilon.clamp(0.0, 10.0);
        }

        // Hysteresis: 0.0 - 0.5 pressure
        if !(0.0..=0.5).contains(&self.pen.hysteresis) {
            log::warn!(
                "Invalid pen hysteresis {:.2}, clamping to 0.0-0.5 range",
                self.pen.hysteresis
            );
            self.pen.hysteresis = self.pen.hysteresis.clamp(0.0, 0.5);
        }

        // Brush widths: 1.0 - 64.0, min <= max
        if !(1.0..=64.0).contains(&self.brush.min_width) {
            log::warn!(
                "Invalid brush min_width {:.1}, clamping to 1.0-64.0 range",
                self.brush.min_width
            );
            self.brush.min_width = self.brush.min_width.clamp(1.0, 64.0);
        }
        if !(1.0..=64.0).contains(&self.brush.max_width) {
            log::warn!(
                "Invalid brush max_width {:.1}, clamping to 1.0-64.0 range",
                self.brush.max_width
            );
            self.brush.max_width = self.brush.max_width.clamp(1.0, 64.0);
        }
        if self.brush.min_width > self.brush.max_width {
            log::warn!(
                "brush min_width {:.1} exceeds max_width {:.1}, swapping",
                self.brush.min_width,
                self.brush.max_width
            );
            std::mem::swap(&mut self.brush.min_width, &mut self.brush.max_width);
        }

        // Brush alphas: 0.0 - 1.0, min <= max
        if !(0.0..=1.0).contains(&self.brush.min_alpha) {
            log::warn!(
                "Invalid brush min_alpha {:.2}, clamping to 0.0-1.0 range",
                self.brush.min_alpha
            );
            self.brush.min_alpha = self.brush.min_alpha.clamp(0.0, 1.0);
        }
        if !(0.0..=1.0).contains(&self.brush.max_alpha) {
            log::warn!(
                "Invalid brush max_alpha {:.2}, clamping to 0.0-1.0 range",
                self.brush.max_alpha
            );
            self.brush.max_alpha = self.brush.max_alpha.clamp(0.0, 1.0);
        }
        if self.brush.min_alpha > self.brush.max_alpha {
            log::warn!(
                "brush min_alpha {:.2} exceeds max_alpha {:.2}, swapping",
                self.brush.min_alpha,
                self.brush.max_alpha
            );
            std::mem::swap(&mut self.brush.min_alpha, &mut self.brush.max_alpha);
        }

        // Step: 0.5 - 10.0 px
        if !(0.5..=10.0).contains(&self.brush.step_px) {
            log::warn!(
                "Invalid brush step_px {:.1}, clamping to 0.5-10.0 range",
                self.brush.step_px
            );
            self.brush.step_px = self.brush.step_px.clamp(0.5, 10.0);
        }

        // Cover threshold must stay below min_alpha so committed ink scores.
        if !(0.0..=0.95).contains(&self.brush.cover_threshold) {
            log::warn!(
                "Invalid cover_threshold {:.2}, clamping to 0.0-0.95 range",
                self.brush.cover_threshold
            );
            self.brush.cover_threshold = self.brush.cover_threshold.clamp(0.0, 0.95);
        }
        if self.brush.cover_threshold >= self.brush.min_alpha {
            log::warn!(
                "cover_threshold {:.2} >= min_alpha {:.2}; light strokes would never score, lowering threshold",
                self.brush.cover_threshold,
                self.brush.min_alpha
            );
            self.brush.cover_threshold = (self.brush.min_alpha - 0.05).max(0.0);
        }

        // Hover appearance
        if !(1.0..=16.0).contains(&self.brush.hover_width) {
            log::warn!(
                "Invalid hover_width {:.1}, clamping to 1.0-16.0 range",
                self.brush.hover_width
            );
            self.brush.hover_width = self.brush.hover_width.clamp(1.0, 16.0);
        }
        if !(0.0..=1.0).contains(&self.brush.hover_alpha) {
            log::warn!(
                "Invalid hover_alpha {:.2}, clamping to 0.0-1.0 range",
                self.brush.hover_alpha
            );
            self.brush.hover_alpha = self.brush.hover_alpha.clamp(0.0, 1.0);
        }

        // Completion threshold: 0.05 - 1.0
        if !(0.05..=1.0).contains(&self.completion.threshold) {
            log::warn!(
                "Invalid completion threshold {:.2}, clamping to 0.05-1.0 range",
                self.completion.threshold
            );
            self.completion.threshold = self.completion.threshold.clamp(0.05, 1.0);
        }

        // Canvas: 64 - 8192 px per side
        if !(64..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 64-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(64, 8192);
        }
        if !(64..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 64-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(64, 8192);
        }

        // Guide width: 2.0 - 64.0 px
        if !(2.0..=64.0).contains(&self.canvas.guide_width) {
            log::warn!(
                "Invalid guide_width {:.1}, clamping to 2.0-64.0 range",
                self.canvas.guide_width
            );
            self.canvas.guide_width = self.canvas.guide_width.clamp(2.0, 64.0);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/glyphtrace/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("glyphtrace");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {config:?}");

        Ok(config)
    }

    /// Parses a configuration from a TOML string, validating and clamping
    /// all values.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(toml_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Brush parameters derived from the `[brush]` section.
    pub fn brush_style(&self) -> BrushStyle {
        BrushStyle {
            min_width: self.brush.min_width,
            max_width: self.brush.max_width,
            min_alpha: self.brush.min_alpha,
            max_alpha: self.brush.max_alpha,
            step_px: self.brush.step_px,
            cover_threshold: self.brush.cover_threshold as f32,
            hover_width: self.brush.hover_width,
            hover_alpha: self.brush.hover_alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.pen.timeout_ms, 500);
        assert_eq!(config.completion.threshold, 0.75);
        assert_eq!(config.canvas.width, 1024);
        assert!(config.brush.cover_threshold < config.brush.min_alpha);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = Config::from_toml_str("[completion]\nthreshold = 0.9\n").unwrap();
        assert_eq!(config.completion.threshold, 0.9);
        assert_eq!(config.pen.timeout_ms, 500);
        assert_eq!(config.brush.max_width, 12.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            "[pen]\ntimeout_ms = 5\n\n[completion]\nthreshold = 2.0\n\n[canvas]\nwidth = 10\n",
        )
        .unwrap();
        assert_eq!(config.pen.timeout_ms, 50);
        assert_eq!(config.completion.threshold, 1.0);
        assert_eq!(config.canvas.width, 64);
    }

    #[test]
    fn cover_threshold_is_forced_below_min_alpha() {
        let config =
            Config::from_toml_str("[brush]\nmin_alpha = 0.3\ncover_threshold = 0.8\n").unwrap();
        assert!(config.brush.cover_threshold < config.brush.min_alpha);
    }

    #[test]
    fn swapped_width_bounds_are_fixed() {
        let config =
            Config::from_toml_str("[brush]\nmin_width = 20.0\nmax_width = 4.0\n").unwrap();
        assert!(config.brush.min_width <= config.brush.max_width);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("not toml at all [").is_err());
    }
}
