//! Per-context input history.

use quill_primitives::SeqDirection;
use rustc_hash::FxHashMap;
use tracing::trace;

/// Names an independent history (file names, function names, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryContext(pub &'static str);

impl HistoryContext {
	/// File names read by `find-file`, `load`, ...
	pub const FILES: Self = Self("files");
	/// Function names read by `M-x` and `describe-function`.
	pub const FUNCTIONS: Self = Self("functions");
	/// Answers to yes/no questions.
	pub const YES_NO: Self = Self("yes-no");
}

/// Chronological list of accepted inputs with a recall cursor.
///
/// Entries are never deduplicated or truncated. After an append the cursor
/// rests on the new entry; [`History::reset_cursor`] moves it past the
/// newest entry, which is where every minibuffer read starts recalling from.
#[derive(Debug, Clone, Default)]
pub struct History {
	entries: Vec<String>,
	cursor: Option<usize>,
}

impl History {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `text` and leaves the cursor on it. Empty strings are ignored.
	pub fn append(&mut self, text: &str) {
		if text.is_empty() {
			return;
		}
		self.entries.push(text.to_string());
		self.cursor = Some(self.entries.len() - 1);
	}

	/// Moves the recall cursor and returns the entry under it.
	///
	/// Returns `None` at either boundary. Moving `Prev` from the oldest entry
	/// leaves the cursor there; moving `Next` from the newest entry returns to
	/// the not-recalling position.
	pub fn navigate(&mut self, direction: SeqDirection) -> Option<&str> {
		let next = match (direction, self.cursor) {
			(SeqDirection::Prev, None) => self.entries.len().checked_sub(1),
			(SeqDirection::Prev, Some(idx)) => idx.checked_sub(1),
			(SeqDirection::Next, None) => None,
			(SeqDirection::Next, Some(idx)) => {
				if idx + 1 < self.entries.len() {
					Some(idx + 1)
				} else {
					self.cursor = None;
					None
				}
			}
		};

		let idx = next?;
		self.cursor = Some(idx);
		self.entries.get(idx).map(String::as_str)
	}

	/// Forgets the recall position without touching the entries.
	pub fn reset_cursor(&mut self) {
		self.cursor = None;
	}

	/// Whether the cursor sits on an entry.
	pub fn is_recalling(&self) -> bool {
		self.cursor.is_some()
	}

	/// Entries, oldest first.
	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// All histories, one per [`HistoryContext`].
#[derive(Debug, Default)]
pub struct HistoryStore {
	histories: FxHashMap<HistoryContext, History>,
}

impl HistoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends to one context's history.
	pub fn append(&mut self, context: HistoryContext, text: &str) {
		trace!(context = context.0, text, "history append");
		self.entry(context).append(text);
	}

	/// Navigates one context's history.
	pub fn navigate(&mut self, context: HistoryContext, direction: SeqDirection) -> Option<&str> {
		self.entry(context).navigate(direction)
	}

	/// Read-only view of a context's history.
	pub fn get(&self, context: HistoryContext) -> Option<&History> {
		self.histories.get(&context)
	}

	/// Mutable access, creating the history on first use.
	pub fn entry(&mut self, context: HistoryContext) -> &mut History {
		self.histories.entry(context).or_default()
	}
}

#[cfg(test)]
mod tests;
