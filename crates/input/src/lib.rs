//! Minibuffer input: completion, history and the read-validate-retry loop.
//!
//! The [`Minibuffer`] owns the stack of active input frames, the key source
//! and the display. Callers describe a read with a [`ReadRequest`] and get
//! back `Some(text)` on acceptance or `None` when the user cancelled.

pub mod completion;
pub mod history;
pub mod io;
pub mod line;
pub mod minibuffer;
pub mod path;
pub mod prompts;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use completion::{Completion, CompletionOutcome};
pub use history::{History, HistoryContext, HistoryStore};
pub use io::{ChannelKeySource, KeySource, MinibufferDisplay};
pub use line::{LineEditor, LineKeyResult};
pub use minibuffer::{AcceptFn, Minibuffer, MinibufferOptions, NestedReadFn, ReadRequest};
pub use path::{compact_path, expand_path};
pub use prompts::NumberInput;
