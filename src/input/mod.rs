//! Input handling and pen state machine.
//!
//! This module turns raw backend pointer samples into drawable strokes.
//! Samples are tagged pen-vs-mouse once at the boundary ([`events`]), fed
//! through the proximity/touch/pressure state machine ([`tracker`]), and
//! grouped into strokes and attempts ([`stroke`]).

pub mod events;
pub mod stroke;
pub mod tracker;

// Re-export commonly used types at module level
pub use events::{PenEvent, PenState, PenStatus, PointSample, PointerSample};
pub use stroke::{Attempt, Stroke, StrokeAccumulator, StrokeUpdate};
pub use tracker::{Classified, PenInputTracker, SessionContext};
