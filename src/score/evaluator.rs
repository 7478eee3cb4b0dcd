//! Coverage scoring and one-shot completion detection.

use super::target::GlyphMask;
use crate::draw::InkBuffer;

/// Progress of the current attempt against its glyph target.
///
/// Monotonic except on clear/glyph change: once `Completed`, the state never
/// falls back to `InProgress` without an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionState {
    /// No ink drawn yet (or evaluation suspended for an unknown glyph)
    #[default]
    NotStarted,
    /// Ink exists but coverage is below the threshold
    InProgress,
    /// Coverage crossed the threshold; sticky until reset
    Completed,
}

/// One-shot event emitted when an attempt first crosses the completion
/// threshold. Consumed by the UI/audio layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionEvent {
    /// Glyph the attempt was bound to
    pub glyph_id: usize,
    /// Coverage ratio at the moment of completion
    pub coverage: f64,
}

/// Scores accumulated ink against the target mask with delta accounting.
///
/// The brush reports each pixel whose opacity first crosses the cover
/// threshold; the evaluator counts the required ones. Cost per tick is
/// proportional to stroke length, never to canvas size. The only full scan
/// is the recount after a resize rescale.
#[derive(Debug)]
pub struct CompletionEvaluator {
    mask: Option<GlyphMask>,
    glyph_id: usize,
    covered: usize,
    any_ink: bool,
    state: CompletionState,
    threshold: f64,
}

impl CompletionEvaluator {
    /// Creates an evaluator with no target.
    ///
    /// # Arguments
    /// * `threshold` - Coverage ratio at which an attempt completes
    pub fn new(threshold: f64) -> Self {
        Self {
            mask: None,
            glyph_id: 0,
            covered: 0,
            any_ink: false,
            state: CompletionState::NotStarted,
            threshold,
        }
    }

    /// Installs a new target and resets all progress.
    ///
    /// Passing `None` models an unknown glyph id ("NoTarget"): drawing still
    /// works, but evaluation stays frozen at `NotStarted` with ratio 0.
    pub fn set_target(&mut self, glyph_id: usize, mask: Option<GlyphMask>) {
        if mask.is_none() {
            log::warn!("No target for glyph {glyph_id}; completion scoring suspended");
        }
        self.mask = mask;
        self.glyph_id = glyph_id;
        self.reset();
    }

    /// Resets progress for a new attempt while keeping the current target.
    pub fn reset(&mut self) {
        self.covered = 0;
        self.any_ink = false;
        self.state = CompletionState::NotStarted;
    }

    /// Current completion state.
    pub fn state(&self) -> CompletionState {
        self.state
    }

    /// Whether a target mask is installed.
    pub fn has_target(&self) -> bool {
        self.mask.is_some()
    }

    /// Fraction of required pixels currently inked (0.0 with no target).
    pub fn coverage_ratio(&self) -> f64 {
        match &self.mask {
            Some(mask) if mask.required_count() > 0 => {
                self.covered as f64 / mask.required_count() as f64
            }
            _ => 0.0,
        }
    }

    /// Records that committed ink was mutated this tick (any opacity, even
    /// below the cover threshold). Drives the NotStarted -> InProgress edge.
    pub fn note_ink(&mut self) {
        self.any_ink = true;
    }

    /// Records one pixel that first crossed the cover threshold.
    ///
    /// Called from the brush's newly-covered callback; because ink is
    /// append-only, every pixel is reported at most once per attempt and the
    /// count stays exact without rescanning.
    pub fn note_covered_pixel(&mut self, x: u32, y: u32) {
        self.any_ink = true;
        if let Some(mask) = &self.mask {
            if mask.is_required(x, y) {
                self.covered += 1;
            }
        }
    }

    /// Advances the completion state after this tick's ink mutations.
    ///
    /// Returns the completion event exactly once, on the tick the coverage
    /// ratio first reaches the threshold. Never re-fires while `Completed`.
    pub fn update(&mut self) -> Option<CompletionEvent> {
        let Some(mask) = &self.mask else {
            // NoTarget: evaluation suspended, state frozen.
            return None;
        };

        match self.state {
            CompletionState::NotStarted => {
                if self.any_ink {
                    self.state = CompletionState::InProgress;
                }
                // Fall through to the threshold check below on the same tick;
                // a single stroke may both start and complete an attempt.
            }
            CompletionState::InProgress => {}
            CompletionState::Completed => return None,
        }

        if self.state == CompletionState::InProgress {
            let ratio = self.coverage_ratio();
            if mask.required_count() > 0 && ratio >= self.threshold {
                self.state = CompletionState::Completed;
                log::info!(
                    "Glyph {} completed at {:.1}% coverage",
                    self.glyph_id,
                    ratio * 100.0
                );
                return Some(CompletionEvent {
                    glyph_id: self.glyph_id,
                    coverage: ratio,
                });
            }
        }

        None
    }

    /// Swaps the target mask for a rescaled one without resetting progress.
    ///
    /// Used on resize: the glyph is unchanged, only its rasterization
    /// resolution moved. The caller follows up with [`Self::recount`].
    pub fn replace_mask(&mut self, mask: Option<GlyphMask>) {
        self.mask = mask;
    }

    /// Recounts coverage from scratch after a resize rescale.
    ///
    /// The mask and ink buffer both change resolution on resize, so the
    /// incremental count is rebuilt once with a full scan. The completion
    /// state itself is untouched: `Completed` stays sticky even if rounding
    /// nudges the ratio below the threshold.
    pub fn recount(&mut self, ink: &InkBuffer, cover_threshold: f32) {
        let Some(mask) = &self.mask else {
            self.covered = 0;
            return;
        };
        let mut covered = 0;
        for y in 0..mask.height() {
            for x in 0..mask.width() {
                if mask.is_required(x, y) && ink.opacity_at(x, y) > cover_threshold {
                    covered += 1;
                }
            }
        }
        self.covered = covered;
    }
}
