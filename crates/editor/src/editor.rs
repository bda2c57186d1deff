//! The [`Editor`]: registry, minibuffer and collaborators wired together.

use std::path::PathBuf;
use std::sync::Arc;

use quill_input::{Completion, HistoryContext, KeySource, Minibuffer, MinibufferDisplay, NumberInput};
use quill_registry::{
	BoxFutureLocal, CommandError, FUNCTIONS, FunctionEditorOps, FunctionRegistry, FunctionResult, MacroStore,
	MacroTable, NumericArg, UndoBoundary,
};

use crate::buffer::{ScratchBuffer, TextBuffer};
use crate::config::EditorConfig;
use crate::eval::{Evaluator, LiteralEvaluator};
use crate::undo::{MarkerLog, UndoLog};

const NO_FUNCTION_NAME: &str = "No function name given";
const UNDEFINED_FUNCTION: &str = "Undefined function name `%s'";

/// Command-layer state for one editor session.
pub struct Editor {
	pub(crate) registry: Arc<FunctionRegistry>,
	pub(crate) buffer: Box<dyn TextBuffer>,
	pub(crate) undo: Box<dyn UndoLog>,
	pub(crate) macros: Box<dyn MacroStore>,
	pub(crate) evaluator: Box<dyn Evaluator>,
	pub(crate) minibuffer: Minibuffer,
	pub(crate) config: EditorConfig,
}

impl Editor {
	/// Creates an editor over the linked functions with default collaborators.
	pub fn new(keys: Box<dyn KeySource>, display: Box<dyn MinibufferDisplay>, config: EditorConfig) -> Self {
		// Built-ins must stay linked for inventory to see them.
		std::hint::black_box(&crate::builtins::ALL);
		Self {
			registry: FUNCTIONS.clone(),
			buffer: Box::new(ScratchBuffer::default()),
			undo: Box::new(MarkerLog::new()),
			macros: Box::new(MacroTable::new()),
			evaluator: Box::new(LiteralEvaluator::new()),
			minibuffer: Minibuffer::new(keys, display, config.minibuffer_options()),
			config,
		}
	}

	pub fn with_registry(mut self, registry: Arc<FunctionRegistry>) -> Self {
		self.registry = registry;
		self
	}

	pub fn with_buffer(mut self, buffer: Box<dyn TextBuffer>) -> Self {
		self.buffer = buffer;
		self
	}

	pub fn with_undo_log(mut self, undo: Box<dyn UndoLog>) -> Self {
		self.undo = undo;
		self
	}

	pub fn with_macros(mut self, macros: Box<dyn MacroStore>) -> Self {
		self.macros = macros;
		self
	}

	pub fn with_evaluator(mut self, evaluator: Box<dyn Evaluator>) -> Self {
		self.evaluator = evaluator;
		self
	}

	pub fn registry(&self) -> &FunctionRegistry {
		&self.registry
	}

	pub fn buffer(&self) -> &dyn TextBuffer {
		self.buffer.as_ref()
	}

	pub fn evaluator(&self) -> &dyn Evaluator {
		self.evaluator.as_ref()
	}

	pub fn minibuffer(&self) -> &Minibuffer {
		&self.minibuffer
	}

	pub fn minibuffer_mut(&mut self) -> &mut Minibuffer {
		&mut self.minibuffer
	}

	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	/// Candidates for function-name completion: interactive functions plus
	/// macros, duplicates kept.
	pub fn function_name_candidates(&self) -> Vec<String> {
		self.registry.list_interactive_names(self.macros.as_ref())
	}

	/// Reports a cancelled read the way `keyboard-quit` does, if the read was
	/// ended by the interrupt key.
	fn note_cancel(&mut self) {
		if self.minibuffer.last_key().is_some_and(|k| k.is_interrupt()) {
			self.minibuffer.error("Quit");
		}
	}

	/// Reads a function or macro name with completion and history.
	pub async fn read_function_name(&mut self, prompt: &str) -> Option<String> {
		let mut completion = Completion::new(self.function_name_candidates());
		let name = self
			.minibuffer
			.read_completion(
				prompt,
				"",
				&mut completion,
				Some(HistoryContext::FUNCTIONS),
				NO_FUNCTION_NAME,
				UNDEFINED_FUNCTION,
			)
			.await;
		if name.is_none() {
			self.note_cancel();
		}
		name
	}
}

impl UndoBoundary for Editor {
	fn undo_mark_start(&mut self) {
		self.undo.undo_mark_start(self.buffer.point());
	}

	fn undo_mark_end(&mut self) {
		self.undo.undo_mark_end(self.buffer.point());
	}
}

impl FunctionEditorOps for Editor {
	fn message(&mut self, text: &str) {
		self.minibuffer.write(text);
	}

	fn error(&mut self, text: &str) {
		self.minibuffer.error(text);
	}

	fn point(&self) -> usize {
		self.buffer.point()
	}

	fn forward_char(&mut self) -> bool {
		self.buffer.forward_char()
	}

	fn backward_char(&mut self) -> bool {
		self.buffer.backward_char()
	}

	fn next_line(&mut self) -> bool {
		self.buffer.next_line()
	}

	fn previous_line(&mut self) -> bool {
		self.buffer.previous_line()
	}

	fn goto_line(&mut self, line: u64) -> bool {
		self.buffer.goto_line(line)
	}

	fn delete_char(&mut self) -> bool {
		self.buffer.delete_char()
	}

	fn delete_backward_char(&mut self) -> bool {
		self.buffer.delete_backward_char()
	}

	fn insert_newline(&mut self) -> bool {
		self.buffer.insert_newline()
	}

	fn function_doc(&self, name: &str) -> Option<&'static str> {
		self.registry.doc(name)
	}

	fn extended_command_prompt(&self, arg: NumericArg) -> String {
		match arg.prompt_prefix() {
			Some(prefix) if self.config.show_count_in_prompt => format!("{prefix}M-x "),
			_ => "M-x ".to_owned(),
		}
	}

	fn read_function_name<'a>(&'a mut self, prompt: &'a str) -> BoxFutureLocal<'a, Option<String>> {
		Box::pin(Editor::read_function_name(self, prompt))
	}

	fn read_number<'a>(&'a mut self, prompt: &'a str) -> BoxFutureLocal<'a, Option<u64>> {
		Box::pin(async move {
			match self.minibuffer.read_number(prompt).await {
				Some(NumberInput::Number(n)) => Some(n),
				Some(NumberInput::Empty) => None,
				None => {
					self.note_cancel();
					None
				}
			}
		})
	}

	fn read_filename<'a>(&'a mut self, prompt: &'a str, initial: &'a str) -> BoxFutureLocal<'a, Option<PathBuf>> {
		Box::pin(async move {
			let path = self.minibuffer.read_filename(prompt, initial, None).await;
			if path.is_none() {
				self.note_cancel();
			}
			path
		})
	}

	fn execute_function<'a>(
		&'a mut self,
		name: &'a str,
		arg: NumericArg,
	) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
		Box::pin(self.execute_named(name, arg))
	}

	fn evaluate(&mut self, expression: &str) -> Result<String, CommandError> {
		self.evaluator
			.evaluate(expression)
			.map_err(|e| CommandError::Eval(e.to_string()))
	}

	fn set_variable(&mut self, name: &str, value: &str) {
		self.evaluator.set_variable(name, value);
	}
}
