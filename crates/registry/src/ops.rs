//! Editor services available to function handlers.
//!
//! Handlers never see the editor type directly; they go through
//! [`FunctionEditorOps`], which the editor crate implements. Buffer, undo log
//! and evaluator are external collaborators, so the trait only exposes the
//! narrow operations the built-in functions need.

use std::path::PathBuf;

use quill_invocation::NumericArg;
use quill_primitives::BoxFutureLocal;

use crate::error::CommandError;
use crate::functions::FunctionResult;

/// Undo-sequence bracket markers.
///
/// Everything recorded between a start and an end marker is undone as one
/// step. Markers carry the current point so undo can restore it.
pub trait UndoBoundary {
	/// Emits an undo-start marker at the current point.
	fn undo_mark_start(&mut self);
	/// Emits an undo-end marker at the current point.
	fn undo_mark_end(&mut self);
}

/// Editor operations available to function handlers.
pub trait FunctionEditorOps: UndoBoundary {
	/// Shows a transient message in the minibuffer.
	fn message(&mut self, text: &str);
	/// Shows an error in the minibuffer and rings the bell.
	fn error(&mut self, text: &str);

	/// Current point (char offset into the buffer).
	fn point(&self) -> usize;
	/// Moves point one character forward.
	fn forward_char(&mut self) -> bool;
	/// Moves point one character backward.
	fn backward_char(&mut self) -> bool;
	/// Moves point to the next line, keeping the column where possible.
	fn next_line(&mut self) -> bool;
	/// Moves point to the previous line, keeping the column where possible.
	fn previous_line(&mut self) -> bool;
	/// Moves point to the start of a 1-based line, clamped to the buffer.
	fn goto_line(&mut self, line: u64) -> bool;
	/// Deletes the character after point.
	fn delete_char(&mut self) -> bool;
	/// Deletes the character before point.
	fn delete_backward_char(&mut self) -> bool;
	/// Inserts a line break at point.
	fn insert_newline(&mut self) -> bool;

	/// Documentation of a function, if it exists.
	fn function_doc(&self, name: &str) -> Option<&'static str>;

	/// Prompt for `execute-extended-command` under numeric argument `arg`.
	fn extended_command_prompt(&self, arg: NumericArg) -> String;
	/// Reads a function or macro name with completion. `None` when cancelled.
	fn read_function_name<'a>(&'a mut self, prompt: &'a str) -> BoxFutureLocal<'a, Option<String>>;
	/// Reads a non-negative number. `None` when cancelled or left empty.
	fn read_number<'a>(&'a mut self, prompt: &'a str) -> BoxFutureLocal<'a, Option<u64>>;
	/// Reads and expands a file name. `None` when cancelled or unexpandable.
	fn read_filename<'a>(&'a mut self, prompt: &'a str, initial: &'a str) -> BoxFutureLocal<'a, Option<PathBuf>>;

	/// Runs another function (or macro) by name, re-entering the dispatcher.
	fn execute_function<'a>(
		&'a mut self,
		name: &'a str,
		arg: NumericArg,
	) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>>;

	/// Hands an expression to the external evaluator and returns its printed value.
	fn evaluate(&mut self, expression: &str) -> Result<String, CommandError>;
	/// Assigns an already-evaluated value to a variable.
	fn set_variable(&mut self, name: &str, value: &str);
}
