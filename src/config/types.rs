//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Pen input settings.
///
/// Controls how raw pen samples are classified by the contact state
/// machine.
#[derive(Debug, Serialize, Deserialize)]
pub struct PenConfig {
    /// How long the pen may stay silent before dropping to Idle, in
    /// milliseconds (valid range: 50 - 10000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Minimum movement in pixels before a stroke point is recorded;
    /// suppresses stationary sensor noise (valid range: 0.0 - 10.0)
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Pressure a sample must exceed to count as touching. 0.0 means any
    /// positive pressure touches; raise on noisy sensors that flicker
    /// between hover and contact (valid range: 0.0 - 0.5)
    #[serde(default = "default_hysteresis")]
    pub hysteresis: f64,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            epsilon: default_epsilon(),
            hysteresis: default_hysteresis(),
        }
    }
}

/// Brush appearance settings.
///
/// Pressure maps linearly from the min to the max of each pair.
#[derive(Debug, Serialize, Deserialize)]
pub struct BrushConfig {
    /// Stamp diameter at zero pressure, in pixels (valid range: 1.0 - 64.0)
    #[serde(default = "default_min_width")]
    pub min_width: f64,

    /// Stamp diameter at full pressure, in pixels (valid range: 1.0 - 64.0)
    #[serde(default = "default_max_width")]
    pub max_width: f64,

    /// Stamp opacity at zero pressure (valid range: 0.0 - 1.0)
    #[serde(default = "default_min_alpha")]
    pub min_alpha: f64,

    /// Stamp opacity at full pressure (valid range: 0.0 - 1.0)
    #[serde(default = "default_max_alpha")]
    pub max_alpha: f64,

    /// Interpolation step along a segment, in pixels; smaller is smoother
    /// but costs more stamps (valid range: 0.5 - 10.0)
    #[serde(default = "default_step_px")]
    pub step_px: f64,

    /// Opacity above which a pixel counts as inked for coverage scoring
    /// (valid range: 0.0 - 0.95, must stay below min_alpha so committed
    /// ink always scores)
    #[serde(default = "default_cover_threshold")]
    pub cover_threshold: f64,

    /// Hover preview stamp diameter, in pixels (valid range: 1.0 - 16.0)
    #[serde(default = "default_hover_width")]
    pub hover_width: f64,

    /// Hover preview opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_hover_alpha")]
    pub hover_alpha: f64,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            min_width: default_min_width(),
            max_width: default_max_width(),
            min_alpha: default_min_alpha(),
            max_alpha: default_max_alpha(),
            step_px: default_step_px(),
            cover_threshold: default_cover_threshold(),
            hover_width: default_hover_width(),
            hover_alpha: default_hover_alpha(),
        }
    }
}

/// Completion scoring settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Coverage ratio at which an attempt completes
    /// (valid range: 0.05 - 1.0)
    #[serde(default = "default_completion_threshold")]
    pub threshold: f64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            threshold: default_completion_threshold(),
        }
    }
}

/// Canvas settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 64 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 64 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Width of the rasterized glyph guide strokes, in pixels
    /// (valid range: 2.0 - 64.0)
    #[serde(default = "default_guide_width")]
    pub guide_width: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            guide_width: default_guide_width(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    500
}

fn default_epsilon() -> f64 {
    1.5
}

fn default_hysteresis() -> f64 {
    0.0
}

fn default_min_width() -> f64 {
    3.0
}

fn default_max_width() -> f64 {
    12.0
}

fn default_min_alpha() -> f64 {
    0.45
}

fn default_max_alpha() -> f64 {
    1.0
}

fn default_step_px() -> f64 {
    2.0
}

fn default_cover_threshold() -> f64 {
    0.25
}

fn default_hover_width() -> f64 {
    2.0
}

fn default_hover_alpha() -> f64 {
    0.15
}

fn default_completion_threshold() -> f64 {
    0.75
}

fn default_canvas_width() -> u32 {
    1024
}

fn default_canvas_height() -> u32 {
    768
}

fn default_guide_width() -> f64 {
    14.0
}
