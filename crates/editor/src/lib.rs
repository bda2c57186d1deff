//! Interactive command layer: dispatcher, built-in functions and the
//! [`Editor`] that ties the registry, minibuffer and collaborators together.
//!
//! Key bindings, `M-x` and loaded files all end up in
//! [`Editor::run_invocation`], which resolves a name against the function
//! table, then the keyboard macros, and runs the handler with the numeric
//! argument. Handlers that need input re-enter the minibuffer through
//! [`FunctionEditorOps`](quill_registry::FunctionEditorOps).

pub mod buffer;
pub mod builtins;
pub mod config;
pub mod dispatch;
pub mod editor;
pub mod eval;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod undo;

pub use buffer::{ScratchBuffer, TextBuffer};
pub use config::{ConfigError, EditorConfig};
pub use dispatch::execute_with_repetition;
pub use editor::Editor;
pub use eval::{EvalError, Evaluator, LiteralEvaluator};
pub use undo::{MarkerLog, UndoLog, UndoMark};
