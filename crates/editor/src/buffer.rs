//! Text buffer collaborator.
//!
//! The command layer only moves point and performs the handful of edits the
//! built-in functions need. [`ScratchBuffer`] is the rope-backed default.

use quill_primitives::graphemes::{next_grapheme_boundary, prev_grapheme_boundary};
use quill_primitives::CharIdx;
use ropey::Rope;

/// Point motion and editing primitives. Each returns false at a buffer edge.
pub trait TextBuffer {
	fn point(&self) -> CharIdx;
	fn text(&self) -> String;
	fn forward_char(&mut self) -> bool;
	fn backward_char(&mut self) -> bool;
	fn next_line(&mut self) -> bool;
	fn previous_line(&mut self) -> bool;
	/// Moves to the start of 1-based `line`, clamped to the last line.
	fn goto_line(&mut self, line: u64) -> bool;
	fn delete_char(&mut self) -> bool;
	fn delete_backward_char(&mut self) -> bool;
	fn insert_newline(&mut self) -> bool;
}

/// In-memory buffer over a rope.
#[derive(Debug, Clone, Default)]
pub struct ScratchBuffer {
	text: Rope,
	point: CharIdx,
}

impl ScratchBuffer {
	pub fn new(text: &str) -> Self {
		Self {
			text: Rope::from(text),
			point: 0,
		}
	}

	/// Sets point, clamped to the buffer.
	pub fn set_point(&mut self, point: CharIdx) {
		self.point = point.min(self.text.len_chars());
	}

	fn line_of(&self, idx: CharIdx) -> usize {
		self.text.char_to_line(idx)
	}

	/// Chars on `line`, not counting its line ending.
	fn line_width(&self, line: usize) -> usize {
		let slice = self.text.line(line);
		let mut width = slice.len_chars();
		if width > 0 && slice.char(width - 1) == '\n' {
			width -= 1;
			if width > 0 && slice.char(width - 1) == '\r' {
				width -= 1;
			}
		}
		width
	}

	fn move_to_line(&mut self, line: usize) {
		let current = self.line_of(self.point);
		let column = self.point - self.text.line_to_char(current);
		self.point = self.text.line_to_char(line) + column.min(self.line_width(line));
	}
}

impl TextBuffer for ScratchBuffer {
	fn point(&self) -> CharIdx {
		self.point
	}

	fn text(&self) -> String {
		self.text.to_string()
	}

	fn forward_char(&mut self) -> bool {
		if self.point >= self.text.len_chars() {
			return false;
		}
		self.point = next_grapheme_boundary(self.text.slice(..), self.point);
		true
	}

	fn backward_char(&mut self) -> bool {
		if self.point == 0 {
			return false;
		}
		self.point = prev_grapheme_boundary(self.text.slice(..), self.point);
		true
	}

	fn next_line(&mut self) -> bool {
		let line = self.line_of(self.point);
		if line + 1 >= self.text.len_lines() {
			return false;
		}
		self.move_to_line(line + 1);
		true
	}

	fn previous_line(&mut self) -> bool {
		let line = self.line_of(self.point);
		if line == 0 {
			return false;
		}
		self.move_to_line(line - 1);
		true
	}

	fn goto_line(&mut self, line: u64) -> bool {
		let last = self.text.len_lines().saturating_sub(1);
		let target = usize::try_from(line.saturating_sub(1)).map_or(last, |l| l.min(last));
		self.point = self.text.line_to_char(target);
		true
	}

	fn delete_char(&mut self) -> bool {
		if self.point >= self.text.len_chars() {
			return false;
		}
		let end = next_grapheme_boundary(self.text.slice(..), self.point);
		self.text.remove(self.point..end);
		true
	}

	fn delete_backward_char(&mut self) -> bool {
		if self.point == 0 {
			return false;
		}
		let start = prev_grapheme_boundary(self.text.slice(..), self.point);
		self.text.remove(start..self.point);
		self.point = start;
		true
	}

	fn insert_newline(&mut self) -> bool {
		self.text.insert_char(self.point, '\n');
		self.point += 1;
		true
	}
}
