use quill_primitives::CharIdx;

use crate::history::HistoryContext;
use crate::line::LineEditor;

/// One active read on the minibuffer stack.
#[derive(Debug)]
pub(crate) struct InputFrame {
	pub(crate) prompt: String,
	pub(crate) line: LineEditor,
	pub(crate) history: Option<HistoryContext>,
	/// Text typed before history recall started.
	pub(crate) saved: Option<String>,
}

impl InputFrame {
	pub(crate) fn new(prompt: String, initial: &str, cursor: Option<CharIdx>, history: Option<HistoryContext>) -> Self {
		Self {
			prompt,
			line: LineEditor::new(initial, cursor),
			history,
			saved: None,
		}
	}

	/// Full minibuffer line and the cursor offset within it.
	pub(crate) fn rendered(&self) -> (String, usize) {
		let mut text = self.prompt.clone();
		text.push_str(&self.line.text());
		(text, self.prompt.chars().count() + self.line.cursor())
	}
}
