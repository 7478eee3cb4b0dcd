//! Raster layers for committed ink and hover preview.
//!
//! Both layers are plain f32 opacity grids addressed `y * width + x`.
//! Committed ink composites by per-pixel maximum, never additively, so the
//! buffer content depends only on the set of stamps, not on their order or
//! on how often a path is retraced.

/// Visits every pixel whose center falls inside the disc, clipped to the
/// raster bounds.
fn for_each_disc_pixel(
    width: u32,
    height: u32,
    cx: f64,
    cy: f64,
    radius: f64,
    mut visit: impl FnMut(u32, u32, usize),
) {
    if width == 0 || height == 0 || radius <= 0.0 {
        return;
    }
    let min_x = ((cx - radius).floor().max(0.0)) as u32;
    let min_y = ((cy - radius).floor().max(0.0)) as u32;
    let max_x = ((cx + radius).ceil() as i64).min(width as i64 - 1);
    let max_y = ((cy + radius).ceil() as i64).min(height as i64 - 1);
    if max_x < min_x as i64 || max_y < min_y as i64 {
        return;
    }

    let r2 = radius * radius;
    for y in min_y..=max_y as u32 {
        let dy = (y as f64 + 0.5) - cy;
        for x in min_x..=max_x as u32 {
            let dx = (x as f64 + 0.5) - cx;
            if dx * dx + dy * dy <= r2 {
                visit(x, y, y as usize * width as usize + x as usize);
            }
        }
    }
}

/// Per-attempt raster accumulator of committed pressure-weighted ink.
///
/// Mutated only by the brush while the pen is touching; append-only between
/// resets (opacity never decreases until [`InkBuffer::reset`]).
#[derive(Debug, Clone)]
pub struct InkBuffer {
    width: u32,
    height: u32,
    alpha: Vec<f32>,
}

impl InkBuffer {
    /// Creates an empty (fully transparent) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0.0; width as usize * height as usize],
        }
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Committed opacity at a pixel, or 0.0 outside the raster.
    pub fn opacity_at(&self, x: u32, y: u32) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.alpha[y as usize * self.width as usize + x as usize]
    }

    /// Raw opacity grid, row-major. Exposed for compositing onto a display
    /// surface and for content comparisons in tests.
    pub fn pixels(&self) -> &[f32] {
        &self.alpha
    }

    /// Returns true if no pixel carries any ink.
    pub fn is_blank(&self) -> bool {
        self.alpha.iter().all(|&a| a == 0.0)
    }

    /// Clears all committed ink.
    pub fn reset(&mut self) {
        self.alpha.fill(0.0);
    }

    /// Stamps a filled disc, compositing by per-pixel maximum.
    ///
    /// Invokes `newly_covered` for each pixel whose opacity first exceeds
    /// `cover_threshold` with this stamp. Because compositing is monotone, a
    /// pixel crosses the threshold at most once per attempt, which is what
    /// makes delta accounting in the evaluator exact.
    ///
    /// # Arguments
    /// * `cx`, `cy` - Disc center in canvas space
    /// * `radius` - Disc radius in pixels
    /// * `opacity` - Stamp opacity in 0.0-1.0
    /// * `cover_threshold` - Opacity above which a pixel counts as inked
    /// * `newly_covered` - Callback receiving (x, y) of each newly inked pixel
    pub fn stamp_disc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        opacity: f64,
        cover_threshold: f32,
        mut newly_covered: impl FnMut(u32, u32),
    ) {
        let opacity = opacity.clamp(0.0, 1.0) as f32;
        let alpha = &mut self.alpha;
        for_each_disc_pixel(self.width, self.height, cx, cy, radius, |x, y, idx| {
            let old = alpha[idx];
            if opacity > old {
                alpha[idx] = opacity;
                if old <= cover_threshold && opacity > cover_threshold {
                    newly_covered(x, y);
                }
            }
        });
    }

    /// Rescales the buffer to a new resolution, preserving existing ink.
    ///
    /// Nearest-neighbor sampling: progress survives a resize instead of
    /// being discarded. The caller recounts coverage afterwards since pixel
    /// counts change with the resolution.
    pub fn rescale(&mut self, new_width: u32, new_height: u32) {
        if new_width == self.width && new_height == self.height {
            return;
        }
        let mut scaled = vec![0.0f32; new_width as usize * new_height as usize];
        if self.width > 0 && self.height > 0 {
            for y in 0..new_height {
                let src_y = (y as u64 * self.height as u64 / new_height.max(1) as u64)
                    .min(self.height as u64 - 1) as usize;
                for x in 0..new_width {
                    let src_x = (x as u64 * self.width as u64 / new_width.max(1) as u64)
                        .min(self.width as u64 - 1) as usize;
                    scaled[y as usize * new_width as usize + x as usize] =
                        self.alpha[src_y * self.width as usize + src_x];
                }
            }
        }
        self.width = new_width;
        self.height = new_height;
        self.alpha = scaled;
    }
}

/// Ephemeral raster for hover feedback.
///
/// Fully cleared and redrawn every tick; never merges into the ink buffer
/// and never participates in completion scoring.
#[derive(Debug, Clone)]
pub struct PreviewLayer {
    width: u32,
    height: u32,
    alpha: Vec<f32>,
}

impl PreviewLayer {
    /// Creates an empty preview layer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0.0; width as usize * height as usize],
        }
    }

    /// Preview opacity at a pixel, or 0.0 outside the raster.
    pub fn opacity_at(&self, x: u32, y: u32) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.alpha[y as usize * self.width as usize + x as usize]
    }

    /// Returns true if the layer holds no preview ink.
    pub fn is_blank(&self) -> bool {
        self.alpha.iter().all(|&a| a == 0.0)
    }

    /// Clears the layer; called at the start of every tick.
    pub fn clear(&mut self) {
        self.alpha.fill(0.0);
    }

    /// Stamps a hover disc with max compositing.
    pub fn stamp_disc(&mut self, cx: f64, cy: f64, radius: f64, opacity: f64) {
        let opacity = opacity.clamp(0.0, 1.0) as f32;
        let alpha = &mut self.alpha;
        for_each_disc_pixel(self.width, self.height, cx, cy, radius, |_, _, idx| {
            if opacity > alpha[idx] {
                alpha[idx] = opacity;
            }
        });
    }

    /// Reallocates the layer for a new resolution (content is ephemeral,
    /// so nothing is preserved).
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        self.width = new_width;
        self.height = new_height;
        self.alpha = vec![0.0; new_width as usize * new_height as usize];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_writes_inside_disc_only() {
        let mut ink = InkBuffer::new(20, 20);
        ink.stamp_disc(10.0, 10.0, 3.0, 0.8, 0.25, |_, _| {});

        assert!(ink.opacity_at(10, 10) > 0.0);
        assert_eq!(ink.opacity_at(0, 0), 0.0);
        assert_eq!(ink.opacity_at(10, 14), 0.0);
    }

    #[test]
    fn max_compositing_never_darkens() {
        let mut ink = InkBuffer::new(10, 10);
        ink.stamp_disc(5.0, 5.0, 2.0, 0.9, 0.25, |_, _| {});
        ink.stamp_disc(5.0, 5.0, 2.0, 0.4, 0.25, |_, _| {});

        assert_eq!(ink.opacity_at(5, 5), 0.9);
    }

    #[test]
    fn newly_covered_fires_once_per_pixel() {
        let mut ink = InkBuffer::new(10, 10);
        let mut first = 0;
        ink.stamp_disc(5.0, 5.0, 2.0, 0.8, 0.25, |_, _| first += 1);
        assert!(first > 0);

        // Retracing the same stamp must not re-report coverage.
        let mut second = 0;
        ink.stamp_disc(5.0, 5.0, 2.0, 0.8, 0.25, |_, _| second += 1);
        assert_eq!(second, 0);
    }

    #[test]
    fn sub_threshold_ink_reports_no_coverage() {
        let mut ink = InkBuffer::new(10, 10);
        let mut covered = 0;
        ink.stamp_disc(5.0, 5.0, 2.0, 0.2, 0.25, |_, _| covered += 1);

        assert_eq!(covered, 0);
        assert!(!ink.is_blank());
    }

    #[test]
    fn stamps_clip_at_raster_edges() {
        let mut ink = InkBuffer::new(8, 8);
        ink.stamp_disc(0.0, 0.0, 3.0, 1.0, 0.25, |_, _| {});
        ink.stamp_disc(7.5, 7.5, 3.0, 1.0, 0.25, |_, _| {});

        assert!(ink.opacity_at(0, 0) > 0.0);
        assert!(ink.opacity_at(7, 7) > 0.0);
    }

    #[test]
    fn rescale_preserves_inked_regions() {
        let mut ink = InkBuffer::new(10, 10);
        ink.stamp_disc(5.0, 5.0, 3.0, 1.0, 0.25, |_, _| {});

        ink.rescale(20, 20);
        assert_eq!(ink.width(), 20);
        assert!(ink.opacity_at(10, 10) > 0.0);
        assert_eq!(ink.opacity_at(1, 1), 0.0);
    }

    #[test]
    fn preview_clear_empties_layer() {
        let mut preview = PreviewLayer::new(10, 10);
        preview.stamp_disc(5.0, 5.0, 2.0, 0.3);
        assert!(!preview.is_blank());

        preview.clear();
        assert!(preview.is_blank());
    }
}
