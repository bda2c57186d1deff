//! Function table: built-in, named, repeatable editor functions.

use std::fmt;
use std::sync::{Arc, LazyLock};

use quill_invocation::NumericArg;
use quill_primitives::BoxFutureLocal;

use crate::error::CommandError;
use crate::ops::FunctionEditorOps;

#[macro_use]
mod macros;
mod registry;

pub use registry::{FunctionRegistry, FunctionRegistryBuilder};

/// Tri-state result of running a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionResult {
	/// The function did what it was asked.
	Success,
	/// The function could not complete (e.g. motion hit the buffer edge).
	Failure,
	/// The user aborted the function (`C-g` or a cancelled read).
	Abort,
}

impl FunctionResult {
	/// Maps a plain success flag onto the tri-state result.
	pub fn from_bool(ok: bool) -> Self {
		if ok { Self::Success } else { Self::Failure }
	}

	/// Returns true only for [`FunctionResult::Success`].
	pub fn is_success(self) -> bool {
		matches!(self, Self::Success)
	}
}

impl From<bool> for FunctionResult {
	fn from(ok: bool) -> Self {
		Self::from_bool(ok)
	}
}

/// Function signature for async function handlers.
pub type FunctionHandler =
	for<'a> fn(&'a mut FunctionContext<'a>) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>>;

/// Context provided to function handlers.
pub struct FunctionContext<'a> {
	/// Editor operations interface.
	pub editor: &'a mut dyn FunctionEditorOps,
	/// Numeric argument the function was invoked with.
	pub arg: NumericArg,
	/// Argument list (from `load`ed expressions; empty for interactive calls).
	pub args: &'a [String],
}

impl FunctionContext<'_> {
	/// Repeat count; negative counts reverse direction-sensitive functions.
	pub fn count(&self) -> i64 {
		self.arg.count
	}

	/// Whether the user supplied the count.
	pub fn explicit(&self) -> bool {
		self.arg.explicit
	}
}

/// A registered function definition.
pub struct FunctionDef {
	/// Name used for lookup and completion (e.g. `forward-char`).
	pub name: &'static str,
	/// Whether the function may be called from `M-x`.
	pub interactive: bool,
	/// Documentation string.
	pub doc: &'static str,
	/// Async function implementing the behaviour.
	pub handler: FunctionHandler,
}

impl fmt::Debug for FunctionDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FunctionDef")
			.field("name", &self.name)
			.field("interactive", &self.interactive)
			.finish_non_exhaustive()
	}
}

/// Registry wrapper for function definitions.
pub struct FunctionReg(pub &'static FunctionDef);
inventory::collect!(FunctionReg);

/// All functions linked into the binary, built once on first access.
pub static FUNCTIONS: LazyLock<Arc<FunctionRegistry>> = LazyLock::new(|| {
	Arc::new(
		FunctionRegistry::builder("functions")
			.extend_inventory()
			.build(),
	)
});

/// Finds a linked function by exact name.
pub fn find(name: &str) -> Option<&'static FunctionDef> {
	FUNCTIONS.resolve(name)
}
