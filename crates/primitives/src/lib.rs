//! Core types shared by the command layer: keys, directions and grapheme helpers.

/// Directional types for sequential traversal.
pub mod direction;
/// Async future aliases.
pub mod future;
/// Grapheme cluster boundary detection.
pub mod graphemes;
/// Key event types.
pub mod key;

pub use direction::SeqDirection;
pub use future::BoxFutureLocal;
pub use key::{Key, KeyCode, Modifiers};
pub use ropey::{Rope, RopeSlice};

/// Character index into a rope.
pub type CharIdx = usize;
