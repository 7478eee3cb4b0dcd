//! Completion scoring against glyph target masks.

pub mod evaluator;
pub mod target;

// Re-export commonly used types at module level
pub use evaluator::{CompletionEvaluator, CompletionEvent, CompletionState};
pub use target::GlyphMask;
