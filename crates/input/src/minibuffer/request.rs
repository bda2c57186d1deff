use quill_primitives::{BoxFutureLocal, CharIdx, Key};

use super::Minibuffer;
use crate::completion::Completion;
use crate::history::HistoryContext;

/// Acceptance test run on submitted text.
pub type AcceptFn<'a> = &'a dyn Fn(&str, Option<&Completion>) -> bool;

/// Read started from inside an active read. Its result is inserted at the
/// outer line's cursor.
pub type NestedReadFn = dyn for<'m> Fn(&'m mut Minibuffer) -> BoxFutureLocal<'m, Option<String>>;

/// Key that opens a nested read while this request is being edited.
#[derive(Clone, Copy)]
pub(crate) struct NestedRead<'a> {
	pub(crate) key: Key,
	pub(crate) read: &'a NestedReadFn,
}

/// Parameters of one [`Minibuffer::read_line`](super::Minibuffer::read_line).
pub struct ReadRequest<'a> {
	pub(crate) prompt: String,
	pub(crate) initial: String,
	pub(crate) cursor: Option<CharIdx>,
	pub(crate) completion: Option<&'a mut Completion>,
	pub(crate) complete_on_submit: bool,
	pub(crate) history: Option<HistoryContext>,
	pub(crate) empty_error: Option<&'a str>,
	pub(crate) accept: Option<AcceptFn<'a>>,
	pub(crate) invalid_error: Option<&'a str>,
	pub(crate) nested: Option<NestedRead<'a>>,
}

impl<'a> ReadRequest<'a> {
	pub fn new(prompt: impl Into<String>) -> Self {
		Self {
			prompt: prompt.into(),
			initial: String::new(),
			cursor: None,
			completion: None,
			complete_on_submit: true,
			history: None,
			empty_error: None,
			accept: None,
			invalid_error: None,
			nested: None,
		}
	}

	/// Text the line starts with.
	pub fn initial(mut self, text: impl Into<String>) -> Self {
		self.initial = text.into();
		self
	}

	/// Starting cursor; `None` puts it at the end.
	pub fn cursor(mut self, cursor: Option<CharIdx>) -> Self {
		self.cursor = cursor;
		self
	}

	pub fn completion(mut self, completion: &'a mut Completion) -> Self {
		self.completion = Some(completion);
		self
	}

	/// Whether submitting runs completion first. TAB always completes.
	pub fn complete_on_submit(mut self, enabled: bool) -> Self {
		self.complete_on_submit = enabled;
		self
	}

	pub fn history(mut self, context: HistoryContext) -> Self {
		self.history = Some(context);
		self
	}

	/// Error shown when the line is submitted empty.
	pub fn empty_error(mut self, message: &'a str) -> Self {
		self.empty_error = Some(message);
		self
	}

	pub fn accept(mut self, predicate: AcceptFn<'a>) -> Self {
		self.accept = Some(predicate);
		self
	}

	/// Error shown when the predicate rejects; `%s` becomes the text.
	pub fn invalid_error(mut self, message: &'a str) -> Self {
		self.invalid_error = Some(message);
		self
	}

	/// Binds `key` to a nested read. The outer frame stays on the stack
	/// underneath and is redrawn once the nested read ends.
	pub fn nested(mut self, key: Key, read: &'a NestedReadFn) -> Self {
		self.nested = Some(NestedRead { key, read });
		self
	}
}
