//! Built-in glyph catalog for kana tracing practice.
//!
//! Each target carries the display glyph, its romaji reading, and guide
//! polylines in a glyph-relative coordinate space (roughly -60..60 around
//! the character center, as in the stroke-order dataset). Guides are scaled
//! to the canvas and rasterized into the per-pixel required mask with the
//! same disc stamping the brush uses, so the mask matches what a careful
//! trace can actually cover.

use crate::draw::InkBuffer;
use crate::score::GlyphMask;
use crate::util::{distance, lerp};

/// One traceable glyph: display character, reading, and guide strokes.
#[derive(Debug, Clone, Copy)]
pub struct GlyphTarget {
    /// The character to trace
    pub glyph: &'static str,
    /// Romaji reading shown alongside the glyph
    pub romaji: &'static str,
    /// Guide polylines in glyph-relative coordinates, one per stroke
    pub guide: &'static [&'static [(f64, f64)]],
}

/// Read-only catalog of glyph targets.
///
/// Lookup by index; an out-of-range id yields `None` ("NoTarget") and the
/// session suspends completion scoring without blocking drawing.
#[derive(Debug, Clone)]
pub struct GlyphCatalog {
    name: &'static str,
    targets: &'static [GlyphTarget],
}

impl GlyphCatalog {
    /// The 46 basic hiragana (gojuon order).
    pub fn hiragana() -> Self {
        Self {
            name: "hiragana",
            targets: HIRAGANA,
        }
    }

    /// The 46 basic katakana (gojuon order).
    pub fn katakana() -> Self {
        Self {
            name: "katakana",
            targets: KATAKANA,
        }
    }

    /// Catalog name for UI display.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of glyphs in the catalog.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true when the catalog holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Looks up a glyph target by id.
    pub fn target(&self, id: usize) -> Option<&GlyphTarget> {
        self.targets.get(id)
    }

    /// Rasterizes the required mask for a glyph at the given canvas size.
    ///
    /// Guide polylines are scaled to fit the canvas with a margin and
    /// stamped as `guide_width`-wide discs. Returns `None` for an unknown
    /// id.
    pub fn rasterize_mask(
        &self,
        id: usize,
        width: u32,
        height: u32,
        guide_width: f64,
    ) -> Option<GlyphMask> {
        let target = self.target(id)?;
        let mut guide = InkBuffer::new(width, height);

        // Glyph-relative coordinates span roughly -60..60; fit that box
        // into the canvas with a small margin.
        let scale = width.min(height) as f64 / 140.0;
        let cx = width as f64 / 2.0;
        let cy = height as f64 / 2.0;
        let radius = (guide_width / 2.0).max(0.5);

        for stroke in target.guide {
            let mapped: Vec<(f64, f64)> = stroke
                .iter()
                .map(|&(gx, gy)| (cx + gx * scale, cy + gy * scale))
                .collect();

            match mapped.as_slice() {
                [] => {}
                [only] => guide.stamp_disc(only.0, only.1, radius, 1.0, 0.0, |_, _| {}),
                _ => {
                    for pair in mapped.windows(2) {
                        let (x0, y0) = pair[0];
                        let (x1, y1) = pair[1];
                        let steps = (distance(x0, y0, x1, y1).ceil() as usize).max(1);
                        for i in 0..=steps {
                            let t = i as f64 / steps as f64;
                            guide.stamp_disc(
                                lerp(x0, x1, t),
                                lerp(y0, y1, t),
                                radius,
                                1.0,
                                0.0,
                                |_, _| {},
                            );
                        }
                    }
                }
            }
        }

        Some(GlyphMask::from_opacity(&guide))
    }
}

const HIRAGANA: &[GlyphTarget] = &[
    GlyphTarget {
        glyph: "あ",
        romaji: "a",
        guide: &[
            &[(-30.0, -50.0), (-25.0, -30.0), (-20.0, -10.0)],
            &[(20.0, -60.0), (15.0, -40.0), (10.0, 0.0), (5.0, 30.0)],
            &[(-15.0, 0.0), (-5.0, 15.0), (10.0, 25.0), (25.0, 30.0)],
        ],
    },
    GlyphTarget {
        glyph: "い",
        romaji: "i",
        guide: &[
            &[(-5.0, -60.0), (-3.0, -30.0), (0.0, 0.0)],
            &[(5.0, -50.0), (7.0, -20.0), (10.0, 10.0), (12.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "う",
        romaji: "u",
        guide: &[
            &[(-30.0, -40.0), (-20.0, -35.0), (0.0, -30.0), (20.0, -30.0)],
            &[(-20.0, -10.0), (-10.0, 10.0), (5.0, 25.0), (20.0, 35.0)],
        ],
    },
    GlyphTarget {
        glyph: "え",
        romaji: "e",
        guide: &[
            &[(-35.0, -30.0), (-10.0, -25.0), (15.0, -22.0), (35.0, -20.0)],
            &[(-30.0, 15.0), (-15.0, 20.0), (5.0, 25.0), (25.0, 30.0), (15.0, 50.0)],
        ],
    },
    GlyphTarget {
        glyph: "お",
        romaji: "o",
        guide: &[
            &[(-35.0, -50.0), (-25.0, -45.0), (0.0, -40.0), (25.0, -40.0)],
            &[(20.0, -50.0), (20.0, -20.0), (20.0, 10.0)],
            &[(-20.0, 0.0), (-10.0, 15.0), (10.0, 30.0), (30.0, 35.0)],
        ],
    },
    GlyphTarget {
        glyph: "か",
        romaji: "ka",
        guide: &[
            &[(-35.0, -50.0), (-25.0, -45.0), (0.0, -40.0), (20.0, -38.0)],
            &[(15.0, -50.0), (15.0, -20.0), (15.0, 10.0)],
            &[(-25.0, 0.0), (-15.0, 15.0), (5.0, 30.0), (25.0, 35.0)],
        ],
    },
    GlyphTarget {
        glyph: "き",
        romaji: "ki",
        guide: &[
            &[(-15.0, -60.0), (-10.0, -30.0), (-5.0, 0.0), (0.0, 30.0)],
            &[(10.0, -55.0), (15.0, -25.0), (20.0, 5.0)],
            &[(-25.0, -15.0), (0.0, -10.0), (25.0, -5.0)],
            &[(-10.0, 10.0), (5.0, 20.0), (20.0, 30.0)],
        ],
    },
    GlyphTarget {
        glyph: "く",
        romaji: "ku",
        guide: &[&[(0.0, -50.0), (-10.0, -20.0), (-15.0, 10.0), (-10.0, 40.0), (5.0, 50.0)]],
    },
    GlyphTarget {
        glyph: "け",
        romaji: "ke",
        guide: &[
            &[(-35.0, -45.0), (-20.0, -40.0), (0.0, -35.0), (20.0, -32.0)],
            &[(-5.0, -50.0), (-5.0, -20.0), (-5.0, 10.0), (-5.0, 35.0)],
            &[(15.0, 0.0), (20.0, 15.0), (25.0, 30.0), (28.0, 45.0)],
        ],
    },
    GlyphTarget {
        glyph: "こ",
        romaji: "ko",
        guide: &[
            &[(-40.0, -40.0), (-20.0, -35.0), (10.0, -30.0), (30.0, -28.0)],
            &[(-35.0, 10.0), (-15.0, 15.0), (15.0, 20.0), (35.0, 22.0)],
        ],
    },
    GlyphTarget {
        glyph: "さ",
        romaji: "sa",
        guide: &[
            &[(-30.0, -50.0), (-20.0, -45.0), (0.0, -40.0), (20.0, -38.0)],
            &[(10.0, -50.0), (10.0, -20.0), (10.0, 10.0)],
            &[(-25.0, 0.0), (-10.0, 15.0), (10.0, 30.0), (30.0, 35.0)],
        ],
    },
    GlyphTarget {
        glyph: "し",
        romaji: "shi",
        guide: &[&[(0.0, -60.0), (-5.0, -30.0), (-10.0, 0.0), (-5.0, 30.0), (10.0, 50.0)]],
    },
    GlyphTarget {
        glyph: "す",
        romaji: "su",
        guide: &[
            &[(-30.0, -40.0), (-15.0, -35.0), (10.0, -30.0), (25.0, -28.0)],
            &[(0.0, -10.0), (-5.0, 10.0), (0.0, 30.0), (15.0, 45.0), (35.0, 50.0)],
        ],
    },
    GlyphTarget {
        glyph: "せ",
        romaji: "se",
        guide: &[
            &[(-35.0, -40.0), (-15.0, -35.0), (10.0, -32.0), (30.0, -30.0)],
            &[(-5.0, -45.0), (-5.0, -15.0), (-5.0, 15.0), (-5.0, 40.0)],
            &[(0.0, 20.0), (10.0, 30.0), (25.0, 38.0), (35.0, 42.0)],
        ],
    },
    GlyphTarget {
        glyph: "そ",
        romaji: "so",
        guide: &[&[
            (-25.0, -45.0),
            (-15.0, -40.0),
            (5.0, -35.0),
            (15.0, -15.0),
            (10.0, 10.0),
            (0.0, 35.0),
            (-10.0, 50.0),
        ]],
    },
    GlyphTarget {
        glyph: "た",
        romaji: "ta",
        guide: &[
            &[(-30.0, -50.0), (-15.0, -45.0), (10.0, -40.0), (25.0, -38.0)],
            &[(15.0, -50.0), (15.0, -20.0), (15.0, 10.0)],
            &[(-20.0, 0.0), (-5.0, 10.0), (15.0, 20.0)],
            &[(-15.0, 20.0), (0.0, 30.0), (20.0, 35.0), (35.0, 38.0)],
        ],
    },
    GlyphTarget {
        glyph: "ち",
        romaji: "chi",
        guide: &[
            &[(-5.0, -55.0), (-5.0, -25.0), (-5.0, 5.0), (-3.0, 30.0)],
            &[(0.0, 5.0), (10.0, 15.0), (20.0, 30.0), (25.0, 45.0)],
        ],
    },
    GlyphTarget {
        glyph: "つ",
        romaji: "tsu",
        guide: &[&[
            (-30.0, -30.0),
            (-15.0, -25.0),
            (5.0, -20.0),
            (20.0, 0.0),
            (25.0, 25.0),
            (20.0, 45.0),
        ]],
    },
    GlyphTarget {
        glyph: "て",
        romaji: "te",
        guide: &[&[
            (-30.0, -35.0),
            (-15.0, -30.0),
            (5.0, -25.0),
            (20.0, -20.0),
            (20.0, 0.0),
            (15.0, 20.0),
            (5.0, 38.0),
        ]],
    },
    GlyphTarget {
        glyph: "と",
        romaji: "to",
        guide: &[
            &[(-5.0, -55.0), (-5.0, -25.0), (-5.0, 5.0)],
            &[
                (0.0, 5.0),
                (10.0, 0.0),
                (20.0, -10.0),
                (25.0, -25.0),
                (20.0, -40.0),
                (5.0, -50.0),
                (-10.0, -45.0),
                (-20.0, -30.0),
                (-15.0, -10.0),
                (0.0, 5.0),
                (15.0, 20.0),
                (25.0, 38.0),
            ],
        ],
    },
    GlyphTarget {
        glyph: "な",
        romaji: "na",
        guide: &[
            &[(-25.0, -50.0), (-15.0, -45.0), (5.0, -40.0), (20.0, -38.0)],
            &[(15.0, -50.0), (15.0, -20.0), (15.0, 10.0)],
            &[(-30.0, -15.0), (-15.0, -10.0), (5.0, -5.0), (20.0, -3.0)],
            &[(-20.0, 10.0), (-10.0, 20.0), (5.0, 30.0), (20.0, 38.0)],
        ],
    },
    GlyphTarget {
        glyph: "に",
        romaji: "ni",
        guide: &[
            &[(-35.0, -20.0), (-15.0, -15.0), (10.0, -10.0), (30.0, -8.0)],
            &[(-30.0, 15.0), (-10.0, 20.0), (15.0, 25.0), (35.0, 28.0)],
        ],
    },
    GlyphTarget {
        glyph: "ぬ",
        romaji: "nu",
        guide: &[
            &[(-30.0, -40.0), (-15.0, -35.0), (5.0, -30.0), (20.0, -28.0)],
            &[
                (0.0, -30.0),
                (-5.0, -10.0),
                (-10.0, 10.0),
                (-5.0, 30.0),
                (10.0, 45.0),
                (28.0, 50.0),
            ],
        ],
    },
    GlyphTarget {
        glyph: "ね",
        romaji: "ne",
        guide: &[
            &[
                (-25.0, -45.0),
                (-15.0, -40.0),
                (0.0, -35.0),
                (15.0, -15.0),
                (10.0, 10.0),
                (0.0, 30.0),
                (-10.0, 40.0),
            ],
            &[(10.0, 0.0), (20.0, 10.0), (30.0, 25.0), (35.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "の",
        romaji: "no",
        guide: &[&[
            (-10.0, -40.0),
            (0.0, -45.0),
            (15.0, -40.0),
            (30.0, -25.0),
            (35.0, 0.0),
            (30.0, 25.0),
            (15.0, 40.0),
            (-5.0, 45.0),
            (-20.0, 35.0),
            (-25.0, 15.0),
            (-20.0, -5.0),
            (-5.0, -20.0),
        ]],
    },
    GlyphTarget {
        glyph: "は",
        romaji: "ha",
        guide: &[
            &[(-35.0, -45.0), (-20.0, -40.0), (0.0, -35.0), (20.0, -32.0)],
            &[(-5.0, -50.0), (-5.0, -20.0), (-5.0, 10.0)],
            &[(10.0, -45.0), (15.0, -15.0), (20.0, 15.0), (25.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "ひ",
        romaji: "hi",
        guide: &[&[
            (-30.0, -30.0),
            (-20.0, -25.0),
            (-5.0, -20.0),
            (5.0, -10.0),
            (0.0, 10.0),
            (-10.0, 30.0),
            (-15.0, 45.0),
            (-5.0, 50.0),
            (10.0, 45.0),
            (20.0, 30.0),
        ]],
    },
    GlyphTarget {
        glyph: "ふ",
        romaji: "fu",
        guide: &[
            &[(-10.0, -55.0), (-8.0, -30.0), (-5.0, 0.0)],
            &[(5.0, -60.0), (8.0, -35.0), (10.0, -5.0)],
            &[(-30.0, -10.0), (-10.0, -5.0), (15.0, 0.0), (35.0, 3.0)],
            &[(0.0, 5.0), (5.0, 20.0), (10.0, 35.0), (12.0, 50.0)],
        ],
    },
    GlyphTarget {
        glyph: "へ",
        romaji: "he",
        guide: &[&[(-35.0, -10.0), (-15.0, 5.0), (10.0, 15.0), (30.0, 20.0)]],
    },
    GlyphTarget {
        glyph: "ほ",
        romaji: "ho",
        guide: &[
            &[(-30.0, -50.0), (-15.0, -45.0), (5.0, -40.0), (25.0, -38.0)],
            &[(-5.0, -50.0), (-5.0, -20.0), (-5.0, 10.0)],
            &[(10.0, -45.0), (10.0, -15.0), (10.0, 15.0)],
            &[(-10.0, 20.0), (0.0, 30.0), (15.0, 38.0), (30.0, 42.0)],
        ],
    },
    GlyphTarget {
        glyph: "ま",
        romaji: "ma",
        guide: &[
            &[(-5.0, -55.0), (-5.0, -25.0), (-5.0, 5.0)],
            &[(-30.0, -20.0), (-10.0, -15.0), (15.0, -10.0), (35.0, -8.0)],
            &[
                (0.0, 0.0),
                (-5.0, 20.0),
                (-10.0, 35.0),
                (0.0, 48.0),
                (15.0, 50.0),
                (30.0, 45.0),
            ],
        ],
    },
    GlyphTarget {
        glyph: "み",
        romaji: "mi",
        guide: &[
            &[(-25.0, -35.0), (-15.0, -30.0), (0.0, -25.0), (15.0, -22.0)],
            &[
                (0.0, -20.0),
                (-5.0, 0.0),
                (-10.0, 20.0),
                (-5.0, 40.0),
                (10.0, 50.0),
                (28.0, 48.0),
            ],
        ],
    },
    GlyphTarget {
        glyph: "む",
        romaji: "mu",
        guide: &[
            &[(-10.0, -50.0), (-8.0, -25.0), (-5.0, 0.0)],
            &[(-30.0, -15.0), (-10.0, -10.0), (15.0, -5.0), (35.0, -3.0)],
            &[
                (0.0, 0.0),
                (-5.0, 20.0),
                (-10.0, 35.0),
                (0.0, 48.0),
                (15.0, 50.0),
                (30.0, 45.0),
            ],
        ],
    },
    GlyphTarget {
        glyph: "め",
        romaji: "me",
        guide: &[
            &[
                (-20.0, -40.0),
                (-10.0, -35.0),
                (5.0, -30.0),
                (15.0, -10.0),
                (10.0, 10.0),
                (0.0, 30.0),
                (-10.0, 40.0),
            ],
            &[(10.0, -5.0), (20.0, 0.0), (30.0, 15.0), (35.0, 35.0)],
        ],
    },
    GlyphTarget {
        glyph: "も",
        romaji: "mo",
        guide: &[
            &[(-35.0, -35.0), (-15.0, -30.0), (10.0, -25.0), (30.0, -23.0)],
            &[(-5.0, -40.0), (-5.0, -10.0), (-5.0, 20.0)],
            &[(0.0, 20.0), (-5.0, 35.0), (5.0, 48.0), (20.0, 50.0), (35.0, 45.0)],
        ],
    },
    GlyphTarget {
        glyph: "や",
        romaji: "ya",
        guide: &[
            &[(-35.0, -40.0), (-15.0, -35.0), (10.0, -30.0), (30.0, -28.0)],
            &[(-5.0, -45.0), (-5.0, -15.0), (-5.0, 15.0)],
            &[(0.0, 15.0), (-5.0, 30.0), (5.0, 43.0), (20.0, 48.0), (35.0, 45.0)],
        ],
    },
    GlyphTarget {
        glyph: "ゆ",
        romaji: "yu",
        guide: &[
            &[(-30.0, -35.0), (-15.0, -30.0), (5.0, -25.0), (20.0, -23.0)],
            &[
                (0.0, -20.0),
                (-5.0, 0.0),
                (-10.0, 20.0),
                (-5.0, 38.0),
                (10.0, 48.0),
                (28.0, 45.0),
            ],
        ],
    },
    GlyphTarget {
        glyph: "よ",
        romaji: "yo",
        guide: &[
            &[(-35.0, -30.0), (-15.0, -25.0), (10.0, -20.0), (30.0, -18.0)],
            &[(-30.0, 10.0), (-10.0, 15.0), (15.0, 20.0), (35.0, 22.0)],
        ],
    },
    GlyphTarget {
        glyph: "ら",
        romaji: "ra",
        guide: &[
            &[(-5.0, -55.0), (-5.0, -25.0), (-5.0, 5.0)],
            &[(0.0, 5.0), (10.0, 15.0), (20.0, 30.0), (25.0, 45.0)],
        ],
    },
    GlyphTarget {
        glyph: "り",
        romaji: "ri",
        guide: &[
            &[(-5.0, -60.0), (-3.0, -30.0), (0.0, 0.0), (2.0, 25.0)],
            &[(5.0, -5.0), (15.0, 10.0), (25.0, 30.0), (28.0, 50.0)],
        ],
    },
    GlyphTarget {
        glyph: "る",
        romaji: "ru",
        guide: &[&[
            (-25.0, -40.0),
            (-15.0, -35.0),
            (0.0, -30.0),
            (10.0, -10.0),
            (5.0, 10.0),
            (-5.0, 30.0),
            (-15.0, 40.0),
            (-5.0, 48.0),
            (10.0, 45.0),
            (25.0, 35.0),
        ]],
    },
    GlyphTarget {
        glyph: "れ",
        romaji: "re",
        guide: &[
            &[(-30.0, -35.0), (-15.0, -30.0), (5.0, -25.0), (20.0, -23.0)],
            &[(0.0, -20.0), (-5.0, 0.0), (0.0, 20.0), (10.0, 38.0), (25.0, 45.0)],
        ],
    },
    GlyphTarget {
        glyph: "ろ",
        romaji: "ro",
        guide: &[
            &[(-30.0, -40.0), (-15.0, -35.0), (5.0, -30.0), (20.0, -28.0)],
            &[(10.0, -40.0), (10.0, -10.0), (10.0, 20.0)],
            &[(0.0, 20.0), (-5.0, 33.0), (5.0, 45.0), (20.0, 48.0), (35.0, 43.0)],
        ],
    },
    GlyphTarget {
        glyph: "わ",
        romaji: "wa",
        guide: &[
            &[(-35.0, -35.0), (-15.0, -30.0), (10.0, -25.0), (30.0, -23.0)],
            &[
                (0.0, -20.0),
                (-10.0, 0.0),
                (-15.0, 20.0),
                (-10.0, 38.0),
                (5.0, 48.0),
                (25.0, 45.0),
            ],
        ],
    },
    GlyphTarget {
        glyph: "を",
        romaji: "wo",
        guide: &[
            &[(-35.0, -40.0), (-15.0, -35.0), (10.0, -30.0), (30.0, -28.0)],
            &[(-5.0, -45.0), (-5.0, -15.0), (-5.0, 15.0)],
            &[(0.0, 15.0), (-5.0, 30.0), (5.0, 43.0), (20.0, 48.0), (35.0, 45.0)],
        ],
    },
    GlyphTarget {
        glyph: "ん",
        romaji: "n",
        guide: &[&[(0.0, -50.0), (-10.0, -20.0), (-15.0, 10.0), (-5.0, 40.0), (15.0, 50.0)]],
    },
];

const KATAKANA: &[GlyphTarget] = &[
    GlyphTarget {
        glyph: "ア",
        romaji: "a",
        guide: &[
            &[(-10.0, -55.0), (0.0, -15.0), (5.0, 15.0)],
            &[(-35.0, 20.0), (-15.0, 25.0), (15.0, 30.0), (35.0, 32.0)],
            &[(25.0, -10.0), (30.0, 10.0), (32.0, 30.0)],
        ],
    },
    GlyphTarget {
        glyph: "イ",
        romaji: "i",
        guide: &[
            &[(-20.0, -50.0), (-10.0, -30.0), (0.0, 0.0), (5.0, 30.0)],
            &[(10.0, -55.0), (15.0, -25.0), (20.0, 5.0), (22.0, 35.0)],
        ],
    },
    GlyphTarget {
        glyph: "ウ",
        romaji: "u",
        guide: &[
            &[(-30.0, -45.0), (-15.0, -40.0), (10.0, -35.0), (25.0, -33.0)],
            &[(-20.0, -15.0), (0.0, -10.0), (20.0, -8.0)],
            &[(0.0, 5.0), (10.0, 20.0), (20.0, 35.0), (30.0, 45.0)],
        ],
    },
    GlyphTarget {
        glyph: "エ",
        romaji: "e",
        guide: &[
            &[(-35.0, -30.0), (-10.0, -25.0), (15.0, -22.0), (35.0, -20.0)],
            &[(-30.0, 20.0), (-10.0, 25.0), (15.0, 28.0), (35.0, 30.0)],
        ],
    },
    GlyphTarget {
        glyph: "オ",
        romaji: "o",
        guide: &[
            &[(-30.0, -50.0), (-15.0, -45.0), (5.0, -40.0), (20.0, -38.0)],
            &[(10.0, -50.0), (10.0, -20.0), (10.0, 10.0)],
            &[(-35.0, 20.0), (-15.0, 25.0), (15.0, 30.0), (35.0, 32.0)],
        ],
    },
    GlyphTarget {
        glyph: "カ",
        romaji: "ka",
        guide: &[
            &[(-30.0, -50.0), (-15.0, -45.0), (5.0, -40.0), (20.0, -38.0)],
            &[(10.0, -50.0), (10.0, -20.0), (10.0, 10.0), (10.0, 35.0)],
            &[(-30.0, 10.0), (-10.0, 15.0), (15.0, 20.0), (35.0, 22.0)],
        ],
    },
    GlyphTarget {
        glyph: "キ",
        romaji: "ki",
        guide: &[
            &[(-30.0, -35.0), (-10.0, -30.0), (15.0, -25.0), (35.0, -23.0)],
            &[(-25.0, 15.0), (-5.0, 20.0), (20.0, 25.0), (40.0, 27.0)],
            &[(10.0, -50.0), (10.0, -20.0), (10.0, 10.0), (10.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "ク",
        romaji: "ku",
        guide: &[
            &[(-25.0, -45.0), (-10.0, -30.0), (10.0, -10.0), (25.0, 5.0)],
            &[(0.0, 10.0), (10.0, 25.0), (20.0, 38.0), (30.0, 48.0)],
        ],
    },
    GlyphTarget {
        glyph: "ケ",
        romaji: "ke",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -35.0), (15.0, -30.0), (35.0, -28.0)],
            &[(10.0, -45.0), (10.0, -15.0), (10.0, 15.0), (10.0, 40.0)],
            &[(-25.0, 20.0), (-5.0, 25.0), (20.0, 30.0), (40.0, 32.0)],
        ],
    },
    GlyphTarget {
        glyph: "コ",
        romaji: "ko",
        guide: &[
            &[(-35.0, -35.0), (-15.0, -30.0), (10.0, -25.0), (30.0, -23.0)],
            &[(-30.0, 20.0), (-10.0, 25.0), (15.0, 28.0), (35.0, 30.0)],
        ],
    },
    GlyphTarget {
        glyph: "サ",
        romaji: "sa",
        guide: &[
            &[(-30.0, -45.0), (-10.0, -40.0), (15.0, -35.0), (35.0, -33.0)],
            &[(-25.0, -10.0), (-5.0, -5.0), (20.0, 0.0), (40.0, 2.0)],
            &[(-20.0, 25.0), (0.0, 30.0), (25.0, 33.0), (45.0, 35.0)],
        ],
    },
    GlyphTarget {
        glyph: "シ",
        romaji: "shi",
        guide: &[
            &[(-25.0, -30.0), (-15.0, -10.0), (-5.0, 10.0)],
            &[(0.0, -35.0), (5.0, -15.0), (10.0, 5.0)],
            &[(15.0, -40.0), (20.0, -20.0), (25.0, 0.0), (28.0, 20.0)],
        ],
    },
    GlyphTarget {
        glyph: "ス",
        romaji: "su",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -35.0), (15.0, -30.0), (35.0, -28.0)],
            &[(0.0, -5.0), (10.0, 10.0), (20.0, 25.0), (30.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "セ",
        romaji: "se",
        guide: &[
            &[(-35.0, -35.0), (-15.0, -30.0), (10.0, -25.0), (30.0, -23.0)],
            &[(-30.0, 5.0), (-10.0, 10.0), (15.0, 13.0), (35.0, 15.0)],
            &[(10.0, -40.0), (10.0, -10.0), (10.0, 20.0), (10.0, 45.0)],
        ],
    },
    GlyphTarget {
        glyph: "ソ",
        romaji: "so",
        guide: &[
            &[(-20.0, -40.0), (-10.0, -20.0), (0.0, 0.0)],
            &[(10.0, -45.0), (15.0, -25.0), (20.0, -5.0), (23.0, 15.0)],
        ],
    },
    GlyphTarget {
        glyph: "タ",
        romaji: "ta",
        guide: &[
            &[(-30.0, -45.0), (-10.0, -40.0), (15.0, -35.0), (35.0, -33.0)],
            &[(-25.0, 15.0), (-5.0, 20.0), (20.0, 23.0), (40.0, 25.0)],
            &[(10.0, -50.0), (10.0, -20.0), (10.0, 10.0), (10.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "チ",
        romaji: "chi",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -35.0), (15.0, -30.0), (35.0, -28.0)],
            &[(10.0, -45.0), (10.0, -15.0), (10.0, 15.0)],
            &[(0.0, 20.0), (10.0, 30.0), (25.0, 38.0), (40.0, 42.0)],
        ],
    },
    GlyphTarget {
        glyph: "ツ",
        romaji: "tsu",
        guide: &[
            &[(-25.0, -30.0), (-15.0, -10.0), (-5.0, 10.0)],
            &[(0.0, -35.0), (5.0, -15.0), (10.0, 5.0)],
            &[(15.0, -40.0), (20.0, -20.0), (25.0, 0.0)],
        ],
    },
    GlyphTarget {
        glyph: "テ",
        romaji: "te",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -35.0), (15.0, -30.0), (35.0, -28.0)],
            &[(10.0, -45.0), (10.0, -15.0), (10.0, 15.0), (10.0, 40.0)],
            &[(-25.0, 20.0), (-5.0, 25.0), (20.0, 28.0), (40.0, 30.0)],
        ],
    },
    GlyphTarget {
        glyph: "ト",
        romaji: "to",
        guide: &[
            &[(0.0, -55.0), (0.0, -25.0), (0.0, 5.0), (0.0, 30.0)],
            &[(-30.0, 15.0), (-10.0, 20.0), (15.0, 23.0), (35.0, 25.0)],
        ],
    },
    GlyphTarget {
        glyph: "ナ",
        romaji: "na",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -35.0), (15.0, -30.0), (35.0, -28.0)],
            &[(10.0, -45.0), (8.0, -15.0), (5.0, 15.0), (0.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "ニ",
        romaji: "ni",
        guide: &[
            &[(-35.0, -20.0), (-15.0, -15.0), (10.0, -12.0), (30.0, -10.0)],
            &[(-30.0, 20.0), (-10.0, 25.0), (15.0, 28.0), (35.0, 30.0)],
        ],
    },
    GlyphTarget {
        glyph: "ヌ",
        romaji: "nu",
        guide: &[
            &[(-25.0, -40.0), (-10.0, -25.0), (10.0, -5.0), (25.0, 10.0)],
            &[(0.0, 15.0), (5.0, 30.0), (10.0, 43.0), (12.0, 55.0)],
        ],
    },
    GlyphTarget {
        glyph: "ネ",
        romaji: "ne",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -35.0), (15.0, -30.0), (35.0, -28.0)],
            &[(10.0, -45.0), (10.0, -15.0), (10.0, 15.0)],
            &[(-25.0, 5.0), (-5.0, 10.0), (20.0, 13.0), (40.0, 15.0)],
            &[(15.0, 18.0), (20.0, 30.0), (25.0, 42.0), (28.0, 52.0)],
        ],
    },
    GlyphTarget {
        glyph: "ノ",
        romaji: "no",
        guide: &[&[(-15.0, -50.0), (-5.0, -25.0), (5.0, 0.0), (15.0, 30.0), (20.0, 50.0)]],
    },
    GlyphTarget {
        glyph: "ハ",
        romaji: "ha",
        guide: &[
            &[(-20.0, -40.0), (-10.0, -20.0), (0.0, 5.0), (5.0, 30.0)],
            &[(10.0, -45.0), (15.0, -25.0), (20.0, 0.0), (22.0, 35.0)],
        ],
    },
    GlyphTarget {
        glyph: "ヒ",
        romaji: "hi",
        guide: &[
            &[(-30.0, -30.0), (-10.0, -25.0), (15.0, -22.0), (35.0, -20.0)],
            &[(-25.0, 20.0), (-5.0, 25.0), (20.0, 28.0), (40.0, 30.0)],
        ],
    },
    GlyphTarget {
        glyph: "フ",
        romaji: "fu",
        guide: &[
            &[(-35.0, -30.0), (-15.0, -25.0), (10.0, -22.0), (30.0, -20.0)],
            &[(25.0, -25.0), (20.0, 0.0), (15.0, 25.0), (12.0, 45.0)],
        ],
    },
    GlyphTarget {
        glyph: "ヘ",
        romaji: "he",
        guide: &[&[(-35.0, -10.0), (-15.0, 5.0), (10.0, 15.0), (30.0, 20.0)]],
    },
    GlyphTarget {
        glyph: "ホ",
        romaji: "ho",
        guide: &[
            &[(0.0, -55.0), (0.0, -25.0), (0.0, 5.0), (0.0, 35.0)],
            &[(-35.0, -20.0), (-10.0, -15.0), (15.0, -12.0), (35.0, -10.0)],
            &[(-30.0, 20.0), (-10.0, 25.0), (15.0, 28.0), (35.0, 30.0)],
            &[(20.0, -30.0), (20.0, 0.0), (20.0, 30.0)],
        ],
    },
    GlyphTarget {
        glyph: "マ",
        romaji: "ma",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -35.0), (15.0, -30.0), (35.0, -28.0)],
            &[(10.0, -45.0), (8.0, -15.0), (5.0, 15.0), (0.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "ミ",
        romaji: "mi",
        guide: &[
            &[(-30.0, -30.0), (-15.0, -15.0), (0.0, 0.0)],
            &[(-20.0, 5.0), (-5.0, 15.0), (10.0, 25.0)],
            &[(-10.0, 30.0), (5.0, 40.0), (20.0, 48.0)],
        ],
    },
    GlyphTarget {
        glyph: "ム",
        romaji: "mu",
        guide: &[
            &[(0.0, -50.0), (-10.0, -20.0), (-15.0, 10.0), (-10.0, 35.0)],
            &[(0.0, -50.0), (10.0, -20.0), (15.0, 10.0), (10.0, 35.0)],
        ],
    },
    GlyphTarget {
        glyph: "メ",
        romaji: "me",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -15.0), (10.0, 15.0), (25.0, 40.0)],
            &[(30.0, -35.0), (10.0, -10.0), (-10.0, 20.0), (-25.0, 45.0)],
        ],
    },
    GlyphTarget {
        glyph: "モ",
        romaji: "mo",
        guide: &[
            &[(-30.0, -35.0), (-10.0, -30.0), (15.0, -27.0), (35.0, -25.0)],
            &[(-25.0, 5.0), (-5.0, 10.0), (20.0, 13.0), (40.0, 15.0)],
            &[(10.0, -40.0), (10.0, -10.0), (10.0, 20.0), (10.0, 45.0)],
        ],
    },
    GlyphTarget {
        glyph: "ヤ",
        romaji: "ya",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -35.0), (15.0, -30.0), (35.0, -28.0)],
            &[(-25.0, 15.0), (-5.0, 20.0), (20.0, 23.0), (40.0, 25.0)],
            &[(10.0, -45.0), (10.0, -15.0), (10.0, 15.0), (10.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "ユ",
        romaji: "yu",
        guide: &[
            &[(-35.0, -20.0), (-15.0, -15.0), (10.0, -12.0), (30.0, -10.0)],
            &[(0.0, 10.0), (10.0, 25.0), (20.0, 38.0), (30.0, 48.0)],
        ],
    },
    GlyphTarget {
        glyph: "ヨ",
        romaji: "yo",
        guide: &[
            &[(-35.0, -30.0), (-15.0, -25.0), (10.0, -22.0), (30.0, -20.0)],
            &[(-30.0, 5.0), (-10.0, 10.0), (15.0, 13.0), (35.0, 15.0)],
            &[(-25.0, 30.0), (-5.0, 35.0), (20.0, 38.0), (40.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "ラ",
        romaji: "ra",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -35.0), (15.0, -30.0), (35.0, -28.0)],
            &[(10.0, -45.0), (10.0, -15.0), (10.0, 15.0), (10.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "リ",
        romaji: "ri",
        guide: &[
            &[(-10.0, -55.0), (-8.0, -25.0), (-5.0, 5.0), (-3.0, 30.0)],
            &[(10.0, -50.0), (12.0, -20.0), (15.0, 10.0), (17.0, 35.0)],
        ],
    },
    GlyphTarget {
        glyph: "ル",
        romaji: "ru",
        guide: &[
            &[(-25.0, -45.0), (-10.0, -30.0), (10.0, -10.0), (25.0, 5.0)],
            &[(0.0, 10.0), (5.0, 25.0), (10.0, 40.0), (12.0, 52.0)],
        ],
    },
    GlyphTarget {
        glyph: "レ",
        romaji: "re",
        guide: &[&[(-30.0, -40.0), (-10.0, -25.0), (10.0, -5.0), (30.0, 20.0), (35.0, 40.0)]],
    },
    GlyphTarget {
        glyph: "ロ",
        romaji: "ro",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -35.0), (15.0, -32.0), (35.0, -30.0)],
            &[(-35.0, -40.0), (-35.0, -10.0), (-35.0, 20.0), (-35.0, 45.0)],
            &[(35.0, -30.0), (35.0, 0.0), (35.0, 30.0), (35.0, 50.0)],
        ],
    },
    GlyphTarget {
        glyph: "ワ",
        romaji: "wa",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -35.0), (15.0, -30.0), (35.0, -28.0)],
            &[(10.0, -45.0), (8.0, -15.0), (5.0, 15.0), (0.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "ヲ",
        romaji: "wo",
        guide: &[
            &[(-30.0, -40.0), (-10.0, -35.0), (15.0, -30.0), (35.0, -28.0)],
            &[(-25.0, 15.0), (-5.0, 20.0), (20.0, 23.0), (40.0, 25.0)],
            &[(10.0, -45.0), (10.0, -15.0), (10.0, 15.0), (10.0, 40.0)],
        ],
    },
    GlyphTarget {
        glyph: "ン",
        romaji: "n",
        guide: &[
            &[(-25.0, -40.0), (-10.0, -25.0), (10.0, -5.0), (25.0, 10.0)],
            &[(0.0, 15.0), (5.0, 30.0), (10.0, 43.0), (12.0, 55.0)],
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_cover_the_full_basic_syllabary() {
        let hira = GlyphCatalog::hiragana();
        assert_eq!(hira.len(), 46);
        assert_eq!(hira.target(0).unwrap().glyph, "あ");
        assert_eq!(hira.target(0).unwrap().romaji, "a");
        assert_eq!(hira.target(11).unwrap().glyph, "し");
        assert_eq!(hira.target(45).unwrap().glyph, "ん");

        let kata = GlyphCatalog::katakana();
        assert_eq!(kata.len(), 46);
        assert_eq!(kata.target(1).unwrap().glyph, "イ");
        assert_eq!(kata.target(45).unwrap().glyph, "ン");
    }

    #[test]
    fn every_glyph_rasterizes_to_a_nonempty_mask() {
        for catalog in [GlyphCatalog::hiragana(), GlyphCatalog::katakana()] {
            for id in 0..catalog.len() {
                let mask = catalog.rasterize_mask(id, 160, 160, 10.0).unwrap();
                assert!(
                    mask.required_count() > 0,
                    "glyph {} in {} has an empty mask",
                    catalog.target(id).unwrap().glyph,
                    catalog.name()
                );
            }
        }
    }

    #[test]
    fn unknown_id_yields_no_target() {
        let catalog = GlyphCatalog::hiragana();
        assert!(catalog.target(catalog.len()).is_none());
        assert!(catalog.rasterize_mask(catalog.len(), 100, 100, 8.0).is_none());
    }

    #[test]
    fn rasterized_mask_has_required_pixels_inside_canvas() {
        let catalog = GlyphCatalog::hiragana();
        let mask = catalog.rasterize_mask(0, 200, 200, 10.0).unwrap();

        assert!(mask.required_count() > 0);
        // Guides are centered with a margin; corners stay clear.
        assert!(!mask.is_required(0, 0));
        assert!(!mask.is_required(199, 199));
    }

    #[test]
    fn wider_guides_require_more_pixels() {
        let catalog = GlyphCatalog::hiragana();
        let thin = catalog.rasterize_mask(2, 200, 200, 4.0).unwrap();
        let wide = catalog.rasterize_mask(2, 200, 200, 16.0).unwrap();

        assert!(wide.required_count() > thin.required_count());
    }
}
