//! Recorded pointer traces for headless replay.
//!
//! A trace is a JSON array of timestamped pointer samples recorded from a
//! live session. Replaying one through [`crate::session::TraceSession`]
//! exercises the full pipeline deterministically, which is how the CLI
//! drives the core without a display backend.

use crate::input::PointerSample;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// One recorded pointer sample.
///
/// The device class is part of the record, mirroring the tagged
/// [`PointerSample`] variants: a `pen` sample may carry pressure, a `mouse`
/// sample never does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "device", rename_all = "lowercase")]
pub enum TraceSample {
    /// Plain pointer sample
    Mouse {
        /// Timestamp in milliseconds from trace start
        t: u64,
        /// X coordinate in canvas space
        x: f64,
        /// Y coordinate in canvas space
        y: f64,
    },
    /// Pressure-capable pen sample
    Pen {
        /// Timestamp in milliseconds from trace start
        t: u64,
        /// X coordinate in canvas space
        x: f64,
        /// Y coordinate in canvas space
        y: f64,
        /// Reported pressure, absent when the recorder dropped it
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pressure: Option<f64>,
    },
}

impl TraceSample {
    /// Timestamp of the sample in milliseconds.
    pub fn timestamp_ms(&self) -> u64 {
        match self {
            TraceSample::Mouse { t, .. } | TraceSample::Pen { t, .. } => *t,
        }
    }

    /// Converts the record into the core's pointer sample type.
    pub fn to_pointer(self) -> PointerSample {
        match self {
            TraceSample::Mouse { t, x, y } => PointerSample::Mouse {
                x,
                y,
                timestamp_ms: t,
            },
            TraceSample::Pen { t, x, y, pressure } => PointerSample::Pen {
                x,
                y,
                pressure,
                timestamp_ms: t,
            },
        }
    }
}

/// Errors that can occur while loading a recorded trace.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Failed to read trace file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse trace JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Trace contains no samples")]
    Empty,

    #[error("Trace timestamps go backwards at sample {index}")]
    NonMonotonic { index: usize },
}

/// A validated sequence of recorded pointer samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    samples: Vec<TraceSample>,
}

impl Trace {
    /// Builds a trace from samples, validating ordering.
    pub fn new(samples: Vec<TraceSample>) -> Result<Self, TraceError> {
        if samples.is_empty() {
            return Err(TraceError::Empty);
        }
        for (index, pair) in samples.windows(2).enumerate() {
            if pair[1].timestamp_ms() < pair[0].timestamp_ms() {
                return Err(TraceError::NonMonotonic { index: index + 1 });
            }
        }
        Ok(Self { samples })
    }

    /// Loads and validates a trace from a JSON file.
    pub fn load(path: &Path) -> Result<Self, TraceError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses and validates a trace from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, TraceError> {
        let samples: Vec<TraceSample> = serde_json::from_str(json)?;
        Self::new(samples)
    }

    /// Recorded samples in capture order.
    pub fn samples(&self) -> &[TraceSample] {
        &self.samples
    }

    /// Timestamp of the last sample (traces are never empty).
    pub fn end_ms(&self) -> u64 {
        self.samples
            .last()
            .map(TraceSample::timestamp_ms)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pen_and_mouse_samples() {
        let trace = Trace::from_json_str(
            r#"[
                {"device": "pen", "t": 0, "x": 1.0, "y": 2.0, "pressure": 0.5},
                {"device": "pen", "t": 10, "x": 3.0, "y": 4.0},
                {"device": "mouse", "t": 20, "x": 5.0, "y": 6.0}
            ]"#,
        )
        .unwrap();

        assert_eq!(trace.samples().len(), 3);
        assert_eq!(trace.end_ms(), 20);
        match trace.samples()[1] {
            TraceSample::Pen { pressure, .. } => assert_eq!(pressure, None),
            TraceSample::Mouse { .. } => panic!("expected pen sample"),
        }
    }

    #[test]
    fn empty_trace_is_rejected() {
        assert!(matches!(
            Trace::from_json_str("[]"),
            Err(TraceError::Empty)
        ));
    }

    #[test]
    fn backwards_timestamps_are_rejected() {
        let result = Trace::from_json_str(
            r#"[
                {"device": "pen", "t": 100, "x": 0.0, "y": 0.0},
                {"device": "pen", "t": 50, "x": 1.0, "y": 1.0}
            ]"#,
        );
        assert!(matches!(
            result,
            Err(TraceError::NonMonotonic { index: 1 })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Trace::from_json_str("{oops"),
            Err(TraceError::Parse(_))
        ));
    }

    #[test]
    fn round_trips_through_pointer_samples() {
        let sample = TraceSample::Pen {
            t: 5,
            x: 1.5,
            y: 2.5,
            pressure: Some(0.75),
        };
        assert_eq!(
            sample.to_pointer(),
            PointerSample::Pen {
                x: 1.5,
                y: 2.5,
                pressure: Some(0.75),
                timestamp_ms: 5,
            }
        );
    }
}
