//! Stroke grouping for classified pen events.
//!
//! The accumulator turns the tracker's event stream into discrete strokes:
//! a stroke opens on the rising Touching edge, collects movement above a
//! small epsilon, and closes atomically on the falling edge into the
//! current [`Attempt`].

use super::events::{PenEvent, PenState, PointSample};
use crate::util::distance;

/// Ordered, append-only point sequence captured while the pen was touching.
///
/// Timestamps are kept monotonic: a sample arriving with an earlier clock
/// than the last appended point is recorded at the last timestamp instead.
#[derive(Debug, Clone, Default)]
pub struct Stroke {
    points: Vec<PointSample>,
}

impl Stroke {
    fn open(first: PointSample) -> Self {
        Self {
            points: vec![first],
        }
    }

    fn push(&mut self, mut point: PointSample) {
        if let Some(last) = self.points.last() {
            point.timestamp_ms = point.timestamp_ms.max(last.timestamp_ms);
        }
        self.points.push(point);
    }

    /// Captured points in append order.
    pub fn points(&self) -> &[PointSample] {
        &self.points
    }

    /// Number of captured points (always at least 1 for a closed stroke).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the stroke has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A tap: fewer than two points, legal but contributes no ink.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    fn rescale(&mut self, sx: f64, sy: f64) {
        for point in &mut self.points {
            point.x *= sx;
            point.y *= sy;
        }
    }
}

/// The strokes drawn for one glyph since the last clear or glyph change.
#[derive(Debug, Clone, Default)]
pub struct Attempt {
    /// Identifier of the glyph target this attempt is bound to
    pub glyph_id: usize,
    strokes: Vec<Stroke>,
}

impl Attempt {
    /// Creates an empty attempt bound to the given glyph.
    pub fn new(glyph_id: usize) -> Self {
        Self {
            glyph_id,
            strokes: Vec::new(),
        }
    }

    /// Closed strokes in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }
}

/// What changed in the stroke set after feeding one pen event.
///
/// `Extended` carries the newly appended point pair so the brush can render
/// exactly the fresh segment instead of re-walking the stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeUpdate {
    /// Nothing to render (stationary noise, or no open stroke to close)
    None,
    /// A stroke opened with its first point
    Opened(PointSample),
    /// The open stroke grew by one point
    Extended {
        /// Previously appended point
        from: PointSample,
        /// Newly appended point
        to: PointSample,
    },
    /// The open stroke closed into the attempt
    Closed {
        /// True when the closed stroke was a tap (fewer than 2 points)
        degenerate: bool,
    },
}

/// Groups classified pen events into strokes and attempts.
///
/// Guarantees exactly one open stroke at a time; closing moves the stroke
/// into the attempt before the update is returned, so the next tick's
/// rendering pass never observes a half-closed state.
#[derive(Debug)]
pub struct StrokeAccumulator {
    attempt: Attempt,
    open: Option<Stroke>,
    epsilon: f64,
}

impl StrokeAccumulator {
    /// Creates an accumulator for the given glyph.
    ///
    /// # Arguments
    /// * `glyph_id` - Glyph target the first attempt is bound to
    /// * `epsilon` - Minimum movement in pixels before a point is appended
    pub fn new(glyph_id: usize, epsilon: f64) -> Self {
        Self {
            attempt: Attempt::new(glyph_id),
            open: None,
            epsilon,
        }
    }

    /// The current attempt (closed strokes only).
    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    /// The stroke currently receiving points, if any.
    pub fn open_stroke(&self) -> Option<&Stroke> {
        self.open.as_ref()
    }

    /// Discards all strokes and starts a fresh attempt for `glyph_id`.
    ///
    /// Any open stroke is dropped, not closed: the caller resets the ink
    /// buffer in the same operation, so the partial stroke has no ink to
    /// keep consistent.
    pub fn begin_attempt(&mut self, glyph_id: usize) {
        self.attempt = Attempt::new(glyph_id);
        self.open = None;
    }

    /// Feeds one classified pen event.
    ///
    /// Opens a stroke on the rising Touching edge, appends points that moved
    /// at least epsilon, and closes the stroke on the falling edge.
    pub fn feed(&mut self, event: &PenEvent) -> StrokeUpdate {
        let point = PointSample {
            x: event.x,
            y: event.y,
            pressure: event.pressure,
            timestamp_ms: event.timestamp_ms,
        };

        if event.state == PenState::Touching {
            match &mut self.open {
                None => {
                    self.open = Some(Stroke::open(point));
                    StrokeUpdate::Opened(point)
                }
                Some(stroke) => {
                    let last = *stroke.points().last().expect("open stroke is never empty");
                    if distance(last.x, last.y, point.x, point.y) < self.epsilon {
                        // Stationary sensor noise; drop the duplicate.
                        return StrokeUpdate::None;
                    }
                    stroke.push(point);
                    let to = *stroke.points().last().expect("just pushed");
                    StrokeUpdate::Extended { from: last, to }
                }
            }
        } else {
            self.close_open()
        }
    }

    /// Rescales all recorded stroke coordinates by per-axis factors.
    ///
    /// Applied when the drawing surface resizes so the stroke records stay
    /// in the same canvas space as the rescaled ink raster.
    pub fn rescale_points(&mut self, sx: f64, sy: f64) {
        for stroke in &mut self.attempt.strokes {
            stroke.rescale(sx, sy);
        }
        if let Some(stroke) = &mut self.open {
            stroke.rescale(sx, sy);
        }
    }

    /// Forcibly closes the open stroke (synthetic lift).
    ///
    /// Used on resize and glyph change so an in-flight stroke is never left
    /// dangling in a stale coordinate space.
    pub fn force_close(&mut self) -> StrokeUpdate {
        self.close_open()
    }

    fn close_open(&mut self) -> StrokeUpdate {
        match self.open.take() {
            Some(stroke) => {
                let degenerate = stroke.is_degenerate();
                if degenerate {
                    log::debug!("Closing degenerate stroke ({} point)", stroke.len());
                }
                self.attempt.strokes.push(stroke);
                StrokeUpdate::Closed { degenerate }
            }
            None => StrokeUpdate::None,
        }
    }
}
