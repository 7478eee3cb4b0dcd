//! Pen contact state machine.
//!
//! Classifies raw pointer samples into [`PenState`] transitions. This state
//! machine is the single source of truth for whether a tick is allowed to
//! draw: only events it emits with [`PenState::Touching`] ever reach the ink
//! buffer.

use super::events::{PenEvent, PenState, PenStatus, PointerSample};
use crate::util::clamp01;

/// Per-session flags threaded explicitly through the input pipeline.
///
/// Replaces ambient globals: the tracker receives a mutable reference on
/// every observation instead of flipping process-wide state.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionContext {
    /// Set once a pressure-capable pen has produced any sample.
    /// UI-only signal; never cleared for the lifetime of the session.
    pub pen_seen: bool,
}

/// Result of classifying one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classified {
    /// Sample came from the pen and advanced the state machine.
    Pen(PenEvent),
    /// Mouse or malformed sample; routed to the control surface, never
    /// mutates pen state.
    NonDrawing,
}

/// Classifies raw pointer samples into a proximity/touch/pressure state
/// machine.
///
/// Transition table (initial state `Idle`):
///
/// | From       | To         | Condition                                   |
/// |------------|------------|---------------------------------------------|
/// | Idle       | Proximity  | pen sample, pressure <= hysteresis          |
/// | Idle       | Touching   | pen sample, pressure > hysteresis           |
/// | Proximity  | Touching   | pressure > hysteresis                       |
/// | Touching   | Proximity  | pressure <= hysteresis                      |
/// | any        | Idle       | no pen sample for `timeout_ms`, or explicit |
/// |            |            | device-removed signal                       |
///
/// The hysteresis threshold defaults to 0.0 (any positive pressure counts
/// as touching); noisy sensors can raise it via the `[pen]` config section.
#[derive(Debug)]
pub struct PenInputTracker {
    state: PenState,
    x: f64,
    y: f64,
    pressure: f64,
    last_pen_ms: Option<u64>,
    timeout_ms: u64,
    hysteresis: f64,
}

impl PenInputTracker {
    /// Creates a tracker in the `Idle` state.
    ///
    /// # Arguments
    /// * `timeout_ms` - How long the pen may stay silent before dropping to Idle
    /// * `hysteresis` - Pressure a sample must exceed to count as touching
    pub fn new(timeout_ms: u64, hysteresis: f64) -> Self {
        Self {
            state: PenState::Idle,
            x: 0.0,
            y: 0.0,
            pressure: 0.0,
            last_pen_ms: None,
            timeout_ms,
            hysteresis,
        }
    }

    /// Current contact state.
    pub fn state(&self) -> PenState {
        self.state
    }

    /// Live readout for the UI layer.
    pub fn status(&self) -> PenStatus {
        PenStatus {
            state: self.state,
            pressure_percent: (self.pressure * 100.0).round() as u8,
        }
    }

    /// Classifies one raw pointer sample.
    ///
    /// Pen samples advance the state machine and return the resulting
    /// [`PenEvent`]; mouse samples and samples with malformed coordinates
    /// are classified as non-drawing without touching any state. A missing
    /// pressure field is treated as hover (pressure 0), never a fault.
    pub fn observe(&mut self, sample: &PointerSample, ctx: &mut SessionContext) -> Classified {
        if !sample.is_well_formed() {
            log::debug!("Dropping malformed pointer sample: {sample:?}");
            return Classified::NonDrawing;
        }

        let PointerSample::Pen {
            x,
            y,
            pressure,
            timestamp_ms,
        } = *sample
        else {
            return Classified::NonDrawing;
        };

        if !ctx.pen_seen {
            ctx.pen_seen = true;
            log::info!("Pressure-capable pen detected");
        }

        let pressure = clamp01(pressure.unwrap_or(0.0).max(0.0));
        let next = if pressure > self.hysteresis {
            PenState::Touching
        } else {
            PenState::Proximity
        };

        if next != self.state {
            log::debug!("Pen state {:?} -> {next:?} (pressure {pressure:.3})", self.state);
        }

        self.state = next;
        self.x = x;
        self.y = y;
        self.pressure = if next == PenState::Touching {
            pressure
        } else {
            0.0
        };
        self.last_pen_ms = Some(timestamp_ms);

        Classified::Pen(PenEvent {
            state: next,
            x,
            y,
            pressure: self.pressure,
            timestamp_ms,
        })
    }

    /// Drops to `Idle` when the pen has been silent for the timeout window.
    ///
    /// Returns a synthetic lift event at the last known position so the
    /// stroke accumulator can close any open stroke.
    pub fn poll_timeout(&mut self, now_ms: u64) -> Option<PenEvent> {
        if self.state == PenState::Idle {
            return None;
        }
        let last = self.last_pen_ms?;
        if now_ms.saturating_sub(last) < self.timeout_ms {
            return None;
        }
        log::debug!("Pen silent for {}ms, dropping to Idle", now_ms.saturating_sub(last));
        Some(self.force_idle(now_ms))
    }

    /// Handles an explicit device-removed signal from the platform.
    ///
    /// Same effect as the timeout: an immediate synthetic lift to `Idle`.
    pub fn device_removed(&mut self, now_ms: u64) -> Option<PenEvent> {
        if self.state == PenState::Idle {
            return None;
        }
        log::info!("Pen device removed");
        Some(self.force_idle(now_ms))
    }

    fn force_idle(&mut self, now_ms: u64) -> PenEvent {
        self.state = PenState::Idle;
        self.pressure = 0.0;
        PenEvent {
            state: PenState::Idle,
            x: self.x,
            y: self.y,
            pressure: 0.0,
            timestamp_ms: now_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen(x: f64, y: f64, pressure: Option<f64>, t: u64) -> PointerSample {
        PointerSample::Pen {
            x,
            y,
            pressure,
            timestamp_ms: t,
        }
    }

    #[test]
    fn first_hover_sample_enters_proximity_and_sets_pen_seen() {
        let mut tracker = PenInputTracker::new(500, 0.0);
        let mut ctx = SessionContext::default();

        let classified = tracker.observe(&pen(10.0, 10.0, Some(0.0), 0), &mut ctx);
        match classified {
            Classified::Pen(ev) => assert_eq!(ev.state, PenState::Proximity),
            Classified::NonDrawing => panic!("pen sample must classify as pen"),
        }
        assert!(ctx.pen_seen);
    }

    #[test]
    fn pressure_crosses_into_touching_and_back() {
        let mut tracker = PenInputTracker::new(500, 0.0);
        let mut ctx = SessionContext::default();

        tracker.observe(&pen(0.0, 0.0, Some(0.0), 0), &mut ctx);
        tracker.observe(&pen(1.0, 1.0, Some(0.6), 10), &mut ctx);
        assert_eq!(tracker.state(), PenState::Touching);
        assert_eq!(tracker.status().pressure_percent, 60);

        tracker.observe(&pen(2.0, 2.0, Some(0.0), 20), &mut ctx);
        assert_eq!(tracker.state(), PenState::Proximity);
        assert_eq!(tracker.status().pressure_percent, 0);
    }

    #[test]
    fn hysteresis_suppresses_light_contact() {
        let mut tracker = PenInputTracker::new(500, 0.1);
        let mut ctx = SessionContext::default();

        tracker.observe(&pen(0.0, 0.0, Some(0.05), 0), &mut ctx);
        assert_eq!(tracker.state(), PenState::Proximity);

        tracker.observe(&pen(0.0, 0.0, Some(0.2), 10), &mut ctx);
        assert_eq!(tracker.state(), PenState::Touching);
    }

    #[test]
    fn mouse_samples_never_mutate_pen_state() {
        let mut tracker = PenInputTracker::new(500, 0.0);
        let mut ctx = SessionContext::default();

        tracker.observe(&pen(0.0, 0.0, Some(0.5), 0), &mut ctx);
        assert_eq!(tracker.state(), PenState::Touching);

        let classified = tracker.observe(
            &PointerSample::Mouse {
                x: 50.0,
                y: 50.0,
                timestamp_ms: 10,
            },
            &mut ctx,
        );
        assert_eq!(classified, Classified::NonDrawing);
        assert_eq!(tracker.state(), PenState::Touching);
    }

    #[test]
    fn malformed_sample_classifies_as_non_drawing() {
        let mut tracker = PenInputTracker::new(500, 0.0);
        let mut ctx = SessionContext::default();

        let classified = tracker.observe(&pen(f64::NAN, 0.0, Some(0.5), 0), &mut ctx);
        assert_eq!(classified, Classified::NonDrawing);
        assert_eq!(tracker.state(), PenState::Idle);
        assert!(!ctx.pen_seen);
    }

    #[test]
    fn missing_pressure_defaults_to_hover() {
        let mut tracker = PenInputTracker::new(500, 0.0);
        let mut ctx = SessionContext::default();

        tracker.observe(&pen(0.0, 0.0, None, 0), &mut ctx);
        assert_eq!(tracker.state(), PenState::Proximity);
    }

    #[test]
    fn timeout_drops_to_idle_with_synthetic_lift() {
        let mut tracker = PenInputTracker::new(500, 0.0);
        let mut ctx = SessionContext::default();

        tracker.observe(&pen(5.0, 6.0, Some(0.7), 0), &mut ctx);
        assert!(tracker.poll_timeout(400).is_none());

        let lift = tracker.poll_timeout(600).expect("timeout should fire");
        assert_eq!(lift.state, PenState::Idle);
        assert_eq!(lift.pressure, 0.0);
        assert_eq!((lift.x, lift.y), (5.0, 6.0));
        assert_eq!(tracker.state(), PenState::Idle);
    }

    #[test]
    fn device_removed_forces_idle_once() {
        let mut tracker = PenInputTracker::new(500, 0.0);
        let mut ctx = SessionContext::default();

        tracker.observe(&pen(0.0, 0.0, Some(0.3), 0), &mut ctx);
        assert!(tracker.device_removed(10).is_some());
        assert!(tracker.device_removed(20).is_none());
    }
}
