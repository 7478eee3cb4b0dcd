//! Pointer sample types tagged at the input boundary.
//!
//! Backends decide once, when a sample arrives, whether it came from a
//! pressure-capable pen or a plain pointer and build the matching
//! [`PointerSample`] variant. Everything downstream matches on the variant
//! instead of probing for optional fields.

/// One raw pointer sample delivered to the core per tick.
///
/// The device class is part of the type: only [`PointerSample::Pen`] samples
/// can ever drive the pen state machine or produce ink. Mouse samples exist
/// so the UI layer can still move cursors and press buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerSample {
    /// Sample from a plain pointer device (mouse, touchpad). Never draws.
    Mouse {
        /// X coordinate in canvas space
        x: f64,
        /// Y coordinate in canvas space
        y: f64,
        /// Capture time in milliseconds
        timestamp_ms: u64,
    },
    /// Sample from a pressure-capable pen/stylus.
    Pen {
        /// X coordinate in canvas space
        x: f64,
        /// Y coordinate in canvas space
        y: f64,
        /// Reported pressure in 0.0-1.0; `None` when the driver dropped it
        pressure: Option<f64>,
        /// Capture time in milliseconds
        timestamp_ms: u64,
    },
}

impl PointerSample {
    /// Returns true when the sample carries usable coordinates.
    ///
    /// Samples with NaN or infinite positions are classified as non-drawing
    /// by the tracker rather than raising an error.
    pub fn is_well_formed(&self) -> bool {
        let (x, y) = match self {
            PointerSample::Mouse { x, y, .. } => (*x, *y),
            PointerSample::Pen { x, y, .. } => (*x, *y),
        };
        x.is_finite() && y.is_finite()
    }
}

/// A captured point on an ink stroke. Append-only while the stroke is
/// open; coordinates are rescaled in place when the canvas resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSample {
    /// X coordinate in canvas space
    pub x: f64,
    /// Y coordinate in canvas space
    pub y: f64,
    /// Smoothed pen pressure in 0.0-1.0
    pub pressure: f64,
    /// Capture time in milliseconds
    pub timestamp_ms: u64,
}

/// Pen contact state tracked by the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenState {
    /// No pen observed recently
    #[default]
    Idle,
    /// Pen hovering near the surface (pressure zero)
    Proximity,
    /// Pen pressed against the surface (pressure above the touch threshold)
    Touching,
}

/// Classified pen sample emitted by the tracker for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenEvent {
    /// Contact state after applying this sample
    pub state: PenState,
    /// X coordinate in canvas space
    pub x: f64,
    /// Y coordinate in canvas space
    pub y: f64,
    /// Clamped pressure in 0.0-1.0 (0.0 while hovering)
    pub pressure: f64,
    /// Capture time in milliseconds
    pub timestamp_ms: u64,
}

/// Live pen readout exposed to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenStatus {
    /// Current contact state
    pub state: PenState,
    /// Current pressure as a whole percentage (0-100)
    pub pressure_percent: u8,
}
