//! Rasterization primitives for pressure-weighted ink.
//!
//! This module defines the drawing half of the tracing pipeline:
//! - [`InkBuffer`]: committed per-attempt ink raster with max compositing
//! - [`PreviewLayer`]: ephemeral hover feedback raster
//! - [`PressureBrushRenderer`]: gap-free segment stamping

pub mod brush;
pub mod ink;

// Re-export commonly used types at module level
pub use brush::{BrushStyle, PressureBrushRenderer};
pub use ink::{InkBuffer, PreviewLayer};
