//! Function registry for the command layer.
//!
//! Built-in functions are declared with [`function!`] next to their handlers
//! and collected through `inventory` into the immutable [`FUNCTIONS`] table the
//! first time it is touched. User-defined keyboard macros live behind the
//! [`MacroStore`] trait and share the function namespace: lookups probe the
//! function table first, then the macro store.

pub mod error;
pub mod functions;
pub mod kbd_macro;
pub mod ops;

pub use error::{CommandError, RegistryError};
pub use functions::{
	FUNCTIONS, FunctionContext, FunctionDef, FunctionHandler, FunctionReg, FunctionRegistry,
	FunctionRegistryBuilder, FunctionResult, find,
};
pub use kbd_macro::{KeyboardMacro, MacroStore, MacroTable};
pub use ops::{FunctionEditorOps, UndoBoundary};
pub use quill_invocation::{Invocation, NumericArg};
pub use quill_primitives::BoxFutureLocal;

#[doc(hidden)]
pub use inventory;
#[doc(hidden)]
pub use paste;
