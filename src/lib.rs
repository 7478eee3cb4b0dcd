//! Library exports for the glyphtrace core.
//!
//! Exposes the stylus-input pipeline (pen state machine, stroke
//! accumulation, pressure brush, completion scoring) together with the
//! session driver and glyph catalog so frontends and tests can share the
//! same deterministic core.

pub mod config;
pub mod draw;
pub mod glyphs;
pub mod input;
pub mod replay;
pub mod score;
pub mod session;
pub mod util;

pub use config::Config;
pub use session::{TickReport, TraceSession};
