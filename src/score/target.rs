//! Required-pixel masks for glyph targets.

use crate::draw::InkBuffer;

/// Per-pixel boolean "must be inked" mask for one glyph at one resolution.
///
/// Owned by the catalog side and read-only to the evaluator. The required
/// pixel count is precomputed so the coverage ratio is a single division.
#[derive(Debug, Clone)]
pub struct GlyphMask {
    width: u32,
    height: u32,
    required: Vec<bool>,
    required_count: usize,
}

impl GlyphMask {
    /// Creates a mask with no required pixels.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            required: vec![false; width as usize * height as usize],
            required_count: 0,
        }
    }

    /// Builds a mask from a rasterized guide: every pixel carrying any
    /// opacity becomes required.
    pub fn from_opacity(guide: &InkBuffer) -> Self {
        let required: Vec<bool> = guide.pixels().iter().map(|&a| a > 0.0).collect();
        let required_count = required.iter().filter(|&&r| r).count();
        Self {
            width: guide.width(),
            height: guide.height(),
            required,
            required_count,
        }
    }

    /// Builds a mask from an explicit pixel predicate. Mainly used by tests
    /// to construct targets with exact required counts.
    pub fn from_fn(width: u32, height: u32, mut required: impl FnMut(u32, u32) -> bool) -> Self {
        let mut pixels = vec![false; width as usize * height as usize];
        let mut count = 0;
        for y in 0..height {
            for x in 0..width {
                let r = required(x, y);
                pixels[y as usize * width as usize + x as usize] = r;
                if r {
                    count += 1;
                }
            }
        }
        Self {
            width,
            height,
            required: pixels,
            required_count: count,
        }
    }

    /// Mask width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel must be inked. Out-of-bounds pixels are never
    /// required.
    pub fn is_required(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.required[y as usize * self.width as usize + x as usize]
    }

    /// Total number of required pixels.
    pub fn required_count(&self) -> usize {
        self.required_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_counts_required_pixels() {
        let mask = GlyphMask::from_fn(10, 10, |x, _| x < 3);
        assert_eq!(mask.required_count(), 30);
        assert!(mask.is_required(2, 5));
        assert!(!mask.is_required(3, 5));
    }

    #[test]
    fn out_of_bounds_is_never_required() {
        let mask = GlyphMask::from_fn(4, 4, |_, _| true);
        assert!(!mask.is_required(4, 0));
        assert!(!mask.is_required(0, 100));
    }

    #[test]
    fn from_opacity_requires_any_inked_pixel() {
        let mut guide = InkBuffer::new(10, 10);
        guide.stamp_disc(5.0, 5.0, 2.0, 0.1, 0.25, |_, _| {});

        let mask = GlyphMask::from_opacity(&guide);
        assert!(mask.required_count() > 0);
        assert!(mask.is_required(5, 5));
        assert!(!mask.is_required(0, 0));
    }
}
