//! Per-tick session driver owning all core tracing state.
//!
//! [`TraceSession`] wires the pipeline together: pointer samples flow
//! through the pen tracker into the stroke accumulator, fresh segments are
//! rendered by the brush into the ink buffer, and the completion evaluator
//! scores every mutation. The session is strictly single-threaded; one call
//! to [`TraceSession::tick`] per frame drives everything, and reset
//! operations (clear, glyph change, resize) leave no observable
//! intermediate state behind.

use crate::config::Config;
use crate::draw::{InkBuffer, PressureBrushRenderer, PreviewLayer};
use crate::glyphs::{GlyphCatalog, GlyphTarget};
use crate::input::{
    Attempt, Classified, PenEvent, PenInputTracker, PenState, PenStatus, PointerSample,
    SessionContext, StrokeAccumulator, StrokeUpdate,
};
use crate::score::{CompletionEvaluator, CompletionEvent, CompletionState};

/// What one tick produced, for the UI/audio layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// True when committed ink was mutated this tick
    pub rendered_ink: bool,
    /// The one-shot completion event, on the tick the attempt completes
    pub completed: Option<CompletionEvent>,
    /// Coverage ratio after this tick
    pub coverage: f64,
}

/// The tracing session: one glyph target, one attempt, one tick loop.
pub struct TraceSession {
    catalog: GlyphCatalog,
    glyph_id: usize,
    show_guide: bool,
    tracker: PenInputTracker,
    accumulator: StrokeAccumulator,
    brush: PressureBrushRenderer,
    ink: InkBuffer,
    preview: PreviewLayer,
    evaluator: CompletionEvaluator,
    ctx: SessionContext,
    guide_width: f64,
    last_hover: Option<(f64, f64)>,
}

impl TraceSession {
    /// Creates a session on the first glyph of the catalog.
    pub fn new(config: &Config, catalog: GlyphCatalog) -> Self {
        let width = config.canvas.width;
        let height = config.canvas.height;
        let style = config.brush_style();

        let mut session = Self {
            glyph_id: 0,
            show_guide: true,
            tracker: PenInputTracker::new(config.pen.timeout_ms, config.pen.hysteresis),
            accumulator: StrokeAccumulator::new(0, config.pen.epsilon),
            brush: PressureBrushRenderer::new(style),
            ink: InkBuffer::new(width, height),
            preview: PreviewLayer::new(width, height),
            evaluator: CompletionEvaluator::new(config.completion.threshold),
            ctx: SessionContext::default(),
            guide_width: config.canvas.guide_width,
            last_hover: None,
            catalog,
        };
        session.install_target(0);
        session
    }

    /// Processes one frame's worth of pointer samples.
    ///
    /// Non-drawing samples (mouse, malformed) are ignored here; the control
    /// surface consumes them outside the core. The preview layer is cleared
    /// and fully redrawn from this tick's hover samples.
    pub fn tick(&mut self, samples: &[PointerSample], now_ms: u64) -> TickReport {
        self.preview.clear();
        let mut rendered_ink = false;

        for sample in samples {
            match self.tracker.observe(sample, &mut self.ctx) {
                Classified::Pen(event) => {
                    rendered_ink |= self.apply_pen_event(&event);
                }
                Classified::NonDrawing => {}
            }
        }

        if let Some(lift) = self.tracker.poll_timeout(now_ms) {
            rendered_ink |= self.apply_pen_event(&lift);
        }

        let completed = self.evaluator.update();
        TickReport {
            rendered_ink,
            completed,
            coverage: self.evaluator.coverage_ratio(),
        }
    }

    /// Handles the platform's pen-removed signal (synthetic lift).
    pub fn device_removed(&mut self, now_ms: u64) {
        if let Some(lift) = self.tracker.device_removed(now_ms) {
            self.apply_pen_event(&lift);
        }
    }

    fn apply_pen_event(&mut self, event: &PenEvent) -> bool {
        let mut rendered = false;

        match self.accumulator.feed(event) {
            StrokeUpdate::Extended { from, to } => {
                let evaluator = &mut self.evaluator;
                self.brush
                    .render_segment(&mut self.ink, &from, &to, |x, y| {
                        evaluator.note_covered_pixel(x, y)
                    });
                self.evaluator.note_ink();
                rendered = true;
            }
            StrokeUpdate::Opened(_) | StrokeUpdate::Closed { .. } | StrokeUpdate::None => {}
        }

        if event.state == PenState::Proximity {
            let to = crate::input::PointSample {
                x: event.x,
                y: event.y,
                pressure: 0.0,
                timestamp_ms: event.timestamp_ms,
            };
            match self.last_hover {
                Some((px, py)) => {
                    let from = crate::input::PointSample {
                        x: px,
                        y: py,
                        pressure: 0.0,
                        timestamp_ms: event.timestamp_ms,
                    };
                    self.brush.render_hover_segment(&mut self.preview, &from, &to);
                }
                None => self.brush.render_hover_point(&mut self.preview, event.x, event.y),
            }
            self.last_hover = Some((event.x, event.y));
        } else {
            self.last_hover = None;
        }

        rendered
    }

    /// Clears the current attempt.
    ///
    /// Ink, strokes, and completion state reset together before returning;
    /// the next tick never observes a half-reset state.
    pub fn clear(&mut self) {
        self.accumulator.force_close();
        self.accumulator.begin_attempt(self.glyph_id);
        self.ink.reset();
        self.preview.clear();
        self.evaluator.reset();
        log::debug!("Attempt cleared for glyph {}", self.glyph_id);
    }

    /// Advances to the next glyph (wraps around) and resets the attempt.
    pub fn next_glyph(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let id = (self.glyph_id + 1) % self.catalog.len();
        self.change_glyph(id);
    }

    /// Moves to the previous glyph (wraps around) and resets the attempt.
    pub fn prev_glyph(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let id = (self.glyph_id + self.catalog.len() - 1) % self.catalog.len();
        self.change_glyph(id);
    }

    /// Switches to an arbitrary glyph id and resets the attempt.
    ///
    /// An id outside the catalog is legal: drawing continues against an
    /// empty mask while completion scoring is suspended.
    pub fn change_glyph(&mut self, id: usize) {
        // Force-close any in-flight stroke before the coordinate target
        // changes underneath it.
        self.accumulator.force_close();
        self.glyph_id = id;
        self.install_target(id);
        self.accumulator.begin_attempt(id);
        self.ink.reset();
        self.preview.clear();
        log::info!(
            "Switched to glyph {} ({})",
            id,
            self.current_target().map(|t| t.glyph).unwrap_or("?")
        );
    }

    fn install_target(&mut self, id: usize) {
        let mask =
            self.catalog
                .rasterize_mask(id, self.ink.width(), self.ink.height(), self.guide_width);
        self.evaluator.set_target(id, mask);
    }

    /// Toggles the guide overlay flag; returns the new value.
    ///
    /// Display-only: the guide flag never affects scoring.
    pub fn toggle_guide(&mut self) -> bool {
        self.show_guide = !self.show_guide;
        self.show_guide
    }

    /// Resizes the drawing surface.
    ///
    /// The in-flight stroke is force-closed (synthetic lift) so its
    /// coordinate space stays consistent, committed ink and recorded stroke
    /// coordinates are rescaled proportionally, the mask is re-rasterized
    /// at the new resolution, and coverage is recounted once. Completion
    /// state is untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.ink.width() && height == self.ink.height() {
            return;
        }
        let sx = width as f64 / self.ink.width() as f64;
        let sy = height as f64 / self.ink.height() as f64;
        self.accumulator.force_close();
        self.accumulator.rescale_points(sx, sy);
        self.ink.rescale(width, height);
        self.preview.resize(width, height);
        self.last_hover = None;

        let mask = self
            .catalog
            .rasterize_mask(self.glyph_id, width, height, self.guide_width);
        self.evaluator.replace_mask(mask);
        self.evaluator
            .recount(&self.ink, self.brush.style().cover_threshold);
        log::debug!(
            "Resized canvas to {width}x{height}; coverage recounted at {:.1}%",
            self.evaluator.coverage_ratio() * 100.0
        );
    }

    /// Live pen readout for the UI layer.
    pub fn pen_status(&self) -> PenStatus {
        self.tracker.status()
    }

    /// Completion state of the current attempt.
    pub fn completion_state(&self) -> CompletionState {
        self.evaluator.state()
    }

    /// Fraction of required pixels currently inked.
    pub fn coverage_ratio(&self) -> f64 {
        self.evaluator.coverage_ratio()
    }

    /// Current glyph id.
    pub fn glyph_id(&self) -> usize {
        self.glyph_id
    }

    /// Current glyph target, or `None` for an unknown id.
    pub fn current_target(&self) -> Option<&GlyphTarget> {
        self.catalog.target(self.glyph_id)
    }

    /// Whether the guide overlay is enabled.
    pub fn guide_enabled(&self) -> bool {
        self.show_guide
    }

    /// Whether a pressure-capable pen has been seen this session.
    pub fn pen_seen(&self) -> bool {
        self.ctx.pen_seen
    }

    /// Committed ink raster, for compositing onto a display surface.
    pub fn ink(&self) -> &InkBuffer {
        &self.ink
    }

    /// Hover preview raster, redrawn every tick.
    pub fn preview(&self) -> &PreviewLayer {
        &self.preview
    }

    /// The current attempt's recorded strokes.
    pub fn attempt(&self) -> &Attempt {
        self.accumulator.attempt()
    }

    /// Strokes closed into the current attempt so far.
    pub fn stroke_count(&self) -> usize {
        self.accumulator.attempt().strokes().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> TraceSession {
        let config = Config::from_toml_str(
            "[canvas]\nwidth = 200\nheight = 200\nguide_width = 12.0\n",
        )
        .unwrap();
        TraceSession::new(&config, GlyphCatalog::hiragana())
    }

    fn pen(x: f64, y: f64, pressure: f64, t: u64) -> PointerSample {
        PointerSample::Pen {
            x,
            y,
            pressure: Some(pressure),
            timestamp_ms: t,
        }
    }

    #[test]
    fn hover_only_ticks_never_commit_ink() {
        let mut session = test_session();

        let samples: Vec<PointerSample> =
            (0..20).map(|i| pen(50.0 + i as f64 * 3.0, 100.0, 0.0, i * 10)).collect();
        let report = session.tick(&samples, 200);

        assert!(!report.rendered_ink);
        assert!(session.ink().is_blank());
        assert!(!session.preview().is_blank());
        assert_eq!(report.coverage, 0.0);
    }

    #[test]
    fn touching_commits_ink_and_reports_coverage() {
        let mut session = test_session();

        let samples: Vec<PointerSample> =
            (0..30).map(|i| pen(40.0 + i as f64 * 4.0, 100.0, 0.6, i * 10)).collect();
        let report = session.tick(&samples, 300);

        assert!(report.rendered_ink);
        assert!(!session.ink().is_blank());
        assert_eq!(session.completion_state(), CompletionState::InProgress);
        assert!(report.coverage > 0.0);
    }

    #[test]
    fn preview_is_redrawn_from_scratch_each_tick() {
        let mut session = test_session();

        session.tick(&[pen(50.0, 50.0, 0.0, 0)], 0);
        assert!(!session.preview().is_blank());

        // A tick with no samples leaves the preview empty.
        session.tick(&[], 10);
        assert!(session.preview().is_blank());
    }

    #[test]
    fn clear_resets_ink_strokes_and_state_together() {
        let mut session = test_session();
        let samples: Vec<PointerSample> =
            (0..30).map(|i| pen(40.0 + i as f64 * 4.0, 100.0, 0.6, i * 10)).collect();
        session.tick(&samples, 300);
        session.tick(&[pen(160.0, 100.0, 0.0, 310)], 310);
        assert!(session.stroke_count() > 0);

        session.clear();
        assert!(session.ink().is_blank());
        assert_eq!(session.stroke_count(), 0);
        assert_eq!(session.completion_state(), CompletionState::NotStarted);
        assert_eq!(session.coverage_ratio(), 0.0);
    }

    #[test]
    fn glyph_navigation_wraps_and_resets() {
        let mut session = test_session();
        let len = GlyphCatalog::hiragana().len();

        session.prev_glyph();
        assert_eq!(session.glyph_id(), len - 1);
        session.next_glyph();
        assert_eq!(session.glyph_id(), 0);
        assert_eq!(session.current_target().unwrap().glyph, "あ");
    }

    #[test]
    fn unknown_glyph_suspends_scoring_but_not_drawing() {
        let mut session = test_session();
        session.change_glyph(999);
        assert!(session.current_target().is_none());

        let samples: Vec<PointerSample> =
            (0..20).map(|i| pen(40.0 + i as f64 * 5.0, 100.0, 0.8, i * 10)).collect();
        let report = session.tick(&samples, 200);

        assert!(report.rendered_ink);
        assert!(!session.ink().is_blank());
        assert_eq!(session.completion_state(), CompletionState::NotStarted);
        assert_eq!(report.coverage, 0.0);
    }

    #[test]
    fn pen_timeout_closes_the_open_stroke() {
        let mut session = test_session();
        session.tick(&[pen(50.0, 50.0, 0.7, 0), pen(80.0, 50.0, 0.7, 10)], 10);
        assert_eq!(session.stroke_count(), 0); // still open

        // Long silent gap: tracker drops to Idle, stroke closes.
        session.tick(&[], 1000);
        assert_eq!(session.stroke_count(), 1);
        assert_eq!(session.pen_status().state, PenState::Idle);
    }

    #[test]
    fn resize_preserves_coverage_within_tolerance() {
        let mut session = test_session();
        let samples: Vec<PointerSample> = (0..60)
            .map(|i| pen(30.0 + i as f64 * 2.5, 95.0 + (i % 5) as f64, 0.7, i * 5))
            .collect();
        session.tick(&samples, 400);
        let before = session.coverage_ratio();
        assert!(before > 0.0);

        session.resize(400, 400);
        let after = session.coverage_ratio();
        assert!(
            (before - after).abs() < 0.12,
            "coverage moved too much on resize: {before} -> {after}"
        );
        assert_eq!(session.ink().width(), 400);
    }

    #[test]
    fn resize_mid_stroke_force_closes_it() {
        let mut session = test_session();
        session.tick(&[pen(50.0, 50.0, 0.7, 0), pen(90.0, 50.0, 0.7, 10)], 10);
        assert_eq!(session.stroke_count(), 0);

        session.resize(300, 300);
        assert_eq!(session.stroke_count(), 1);
    }

    #[test]
    fn resize_rescales_recorded_stroke_coordinates() {
        let mut session = test_session();
        session.tick(&[pen(50.0, 50.0, 0.7, 0), pen(90.0, 50.0, 0.7, 10)], 10);
        session.tick(&[pen(90.0, 50.0, 0.0, 20)], 20);
        assert_eq!(session.stroke_count(), 1);

        // Both axes double (200 -> 400); stroke records follow the canvas.
        session.resize(400, 400);
        let points = session.attempt().strokes()[0].points();
        assert_eq!((points[0].x, points[0].y), (100.0, 100.0));
        assert_eq!((points[1].x, points[1].y), (180.0, 100.0));
    }

    #[test]
    fn toggle_guide_flips_flag_only() {
        let mut session = test_session();
        assert!(session.guide_enabled());
        assert!(!session.toggle_guide());
        assert!(session.toggle_guide());
    }

    #[test]
    fn pen_seen_flag_latches() {
        let mut session = test_session();
        assert!(!session.pen_seen());
        session.tick(&[pen(10.0, 10.0, 0.0, 0)], 0);
        assert!(session.pen_seen());
    }
}
