//! Built-in functions linked into the function table.
//!
//! Each module declares its functions with `function!` and lists them in a
//! `DEFS` slice; inventory collects them into [`FUNCTIONS`](quill_registry::FUNCTIONS).

use quill_registry::FunctionDef;

mod edit;
mod help;
mod lisp;
mod minibuf;
mod motion;


/// Built-in definitions grouped by module.
pub(crate) static ALL: [&[&FunctionDef]; 5] = [motion::DEFS, edit::DEFS, help::DEFS, lisp::DEFS, minibuf::DEFS];

/// Every built-in definition of this crate.
pub fn definitions() -> impl Iterator<Item = &'static FunctionDef> {
	ALL.iter().flat_map(|defs| defs.iter().copied())
}
