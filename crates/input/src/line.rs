//! Single-line text editing for the minibuffer.

use quill_primitives::graphemes::{next_grapheme_boundary, prev_grapheme_boundary};
use quill_primitives::{CharIdx, Key, KeyCode, Rope, SeqDirection};

/// What a key did to the line, for the read loop to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKeyResult {
	/// Text or cursor changed; redraw.
	Edited,
	/// User confirmed the line.
	Submit,
	/// User interrupted the read.
	Cancel,
	/// User asked for completion.
	Complete,
	/// User asked to recall history.
	History(SeqDirection),
	/// Key has no meaning here.
	Ignored,
}

/// Editable line with a grapheme-aware cursor.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
	text: Rope,
	cursor: CharIdx,
}

impl LineEditor {
	/// Creates a line holding `initial` with the cursor at `cursor` (clamped),
	/// or at the end when `None`.
	pub fn new(initial: &str, cursor: Option<CharIdx>) -> Self {
		let text = Rope::from(initial);
		let len = text.len_chars();
		Self {
			text,
			cursor: cursor.map_or(len, |c| c.min(len)),
		}
	}

	/// Current contents.
	pub fn text(&self) -> String {
		self.text.to_string()
	}

	/// Cursor position in chars.
	pub fn cursor(&self) -> CharIdx {
		self.cursor
	}

	pub fn is_empty(&self) -> bool {
		self.text.len_chars() == 0
	}

	/// Replaces the contents and puts the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		self.text = Rope::from(text);
		self.cursor = self.text.len_chars();
	}

	/// Empties the line.
	pub fn clear(&mut self) {
		self.set_text("");
	}

	/// Applies one key.
	pub fn handle_key(&mut self, key: Key) -> LineKeyResult {
		if key.is_interrupt() {
			return LineKeyResult::Cancel;
		}
		if let Some(c) = key.codepoint() {
			self.insert_char(c);
			return LineKeyResult::Edited;
		}

		let m = key.modifiers;
		match key.code {
			KeyCode::Enter => LineKeyResult::Submit,
			KeyCode::Tab => LineKeyResult::Complete,
			KeyCode::Up => LineKeyResult::History(SeqDirection::Prev),
			KeyCode::Down => LineKeyResult::History(SeqDirection::Next),
			KeyCode::Char('p') if m.alt => LineKeyResult::History(SeqDirection::Prev),
			KeyCode::Char('n') if m.alt => LineKeyResult::History(SeqDirection::Next),
			KeyCode::Left => self.edit(Self::move_left),
			KeyCode::Right => self.edit(Self::move_right),
			KeyCode::Home => self.edit(Self::move_home),
			KeyCode::End => self.edit(Self::move_end),
			KeyCode::Backspace => self.edit(Self::delete_backward),
			KeyCode::Delete => self.edit(Self::delete_forward),
			KeyCode::Char(c) if m.ctrl => match c {
				'b' => self.edit(Self::move_left),
				'f' => self.edit(Self::move_right),
				'a' => self.edit(Self::move_home),
				'e' => self.edit(Self::move_end),
				'd' => self.edit(Self::delete_forward),
				'k' => self.edit(Self::kill_to_end),
				_ => LineKeyResult::Ignored,
			},
			_ => LineKeyResult::Ignored,
		}
	}

	fn edit(&mut self, op: fn(&mut Self)) -> LineKeyResult {
		op(self);
		LineKeyResult::Edited
	}

	pub fn insert_char(&mut self, c: char) {
		self.text.insert_char(self.cursor, c);
		self.cursor += 1;
	}

	pub fn move_left(&mut self) {
		self.cursor = prev_grapheme_boundary(self.text.slice(..), self.cursor);
	}

	pub fn move_right(&mut self) {
		self.cursor = next_grapheme_boundary(self.text.slice(..), self.cursor);
	}

	pub fn move_home(&mut self) {
		self.cursor = 0;
	}

	pub fn move_end(&mut self) {
		self.cursor = self.text.len_chars();
	}

	/// Erases the grapheme before the cursor.
	pub fn delete_backward(&mut self) {
		let start = prev_grapheme_boundary(self.text.slice(..), self.cursor);
		self.text.remove(start..self.cursor);
		self.cursor = start;
	}

	/// Erases the grapheme under the cursor.
	pub fn delete_forward(&mut self) {
		let end = next_grapheme_boundary(self.text.slice(..), self.cursor);
		self.text.remove(self.cursor..end);
	}

	/// Erases from the cursor to the end of the line.
	pub fn kill_to_end(&mut self) {
		let len = self.text.len_chars();
		self.text.remove(self.cursor..len);
	}
}
