//! Pressure-weighted brush rendering.
//!
//! Turns newly appended stroke segments into disc stamps on the ink buffer.
//! Segments are subdivided so fast pen motion leaves no gaps, and pressure
//! is carried linearly along each segment to modulate stamp width and
//! opacity.

use super::ink::{InkBuffer, PreviewLayer};
use crate::input::PointSample;
use crate::util::{clamp01, distance, lerp};

/// Numeric brush parameters, normally taken from the `[brush]` config
/// section.
#[derive(Debug, Clone, Copy)]
pub struct BrushStyle {
    /// Stamp diameter at zero pressure, in pixels
    pub min_width: f64,
    /// Stamp diameter at full pressure, in pixels
    pub max_width: f64,
    /// Stamp opacity at zero pressure
    pub min_alpha: f64,
    /// Stamp opacity at full pressure
    pub max_alpha: f64,
    /// Interpolation step along a segment, in pixels
    pub step_px: f64,
    /// Opacity above which a pixel counts as inked for coverage
    pub cover_threshold: f32,
    /// Fixed hover stamp diameter, in pixels
    pub hover_width: f64,
    /// Fixed hover stamp opacity
    pub hover_alpha: f64,
}

impl Default for BrushStyle {
    fn default() -> Self {
        Self {
            min_width: 3.0,
            max_width: 12.0,
            min_alpha: 0.45,
            max_alpha: 1.0,
            step_px: 2.0,
            cover_threshold: 0.25,
            hover_width: 2.0,
            hover_alpha: 0.15,
        }
    }
}

/// Renders stroke segments as pressure-weighted ink.
///
/// The renderer is stateless between calls; determinism comes from the ink
/// buffer's max compositing. Drawing the same segment twice, or a stroke
/// forward and reversed, produces identical buffer content.
#[derive(Debug, Clone)]
pub struct PressureBrushRenderer {
    style: BrushStyle,
}

impl PressureBrushRenderer {
    /// Creates a renderer with the given style.
    pub fn new(style: BrushStyle) -> Self {
        Self { style }
    }

    /// The active style.
    pub fn style(&self) -> &BrushStyle {
        &self.style
    }

    /// Stamp diameter for a pressure value.
    pub fn width_for(&self, pressure: f64) -> f64 {
        lerp(self.style.min_width, self.style.max_width, clamp01(pressure))
    }

    /// Stamp opacity for a pressure value.
    pub fn alpha_for(&self, pressure: f64) -> f64 {
        lerp(self.style.min_alpha, self.style.max_alpha, clamp01(pressure))
    }

    /// Renders one committed segment into the ink buffer.
    ///
    /// Subdivides the segment into `max(1, floor(d / step_px))` steps so no
    /// gap appears regardless of sampling rate. Pressure, width, and opacity
    /// are interpolated from `from` to `to`. Each pixel whose opacity first
    /// crosses the cover threshold is reported through `newly_covered`.
    ///
    /// Both endpoints are stamped. Junction points between consecutive
    /// segments get stamped twice with identical parameters, which is a
    /// no-op under max compositing; in exchange the stamp set of a stroke
    /// is symmetric, so forward and reversed traces produce identical ink.
    pub fn render_segment(
        &self,
        ink: &mut InkBuffer,
        from: &PointSample,
        to: &PointSample,
        mut newly_covered: impl FnMut(u32, u32),
    ) {
        let d = distance(from.x, from.y, to.x, to.y);
        let steps = ((d / self.style.step_px).floor() as usize).max(1);

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = lerp(from.x, to.x, t);
            let y = lerp(from.y, to.y, t);
            let pressure = clamp01(lerp(from.pressure, to.pressure, t));
            ink.stamp_disc(
                x,
                y,
                self.width_for(pressure) / 2.0,
                self.alpha_for(pressure),
                self.style.cover_threshold,
                &mut newly_covered,
            );
        }
    }

    /// Renders a hover segment into the preview layer.
    ///
    /// Same interpolation pipeline with pressure forced to zero: fixed
    /// minimal width and fixed low opacity, never touching the ink buffer.
    pub fn render_hover_segment(&self, preview: &mut PreviewLayer, from: &PointSample, to: &PointSample) {
        let d = distance(from.x, from.y, to.x, to.y);
        let steps = ((d / self.style.step_px).floor() as usize).max(1);

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            preview.stamp_disc(
                lerp(from.x, to.x, t),
                lerp(from.y, to.y, t),
                self.style.hover_width / 2.0,
                self.style.hover_alpha,
            );
        }
    }

    /// Stamps a single hover point (no previous sample to interpolate from).
    pub fn render_hover_point(&self, preview: &mut PreviewLayer, x: f64, y: f64) {
        preview.stamp_disc(x, y, self.style.hover_width / 2.0, self.style.hover_alpha);
    }
}
