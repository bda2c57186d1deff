//! Undo-log collaborator.

use quill_primitives::CharIdx;

/// Marker written into the undo log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoMark {
	Start(CharIdx),
	End(CharIdx),
}

/// Receives undo-sequence markers. Edits between a start and its matching
/// end are undone as one step.
pub trait UndoLog {
	fn undo_mark_start(&mut self, position: CharIdx);
	fn undo_mark_end(&mut self, position: CharIdx);
}

/// Undo log that only keeps the markers, in order.
#[derive(Debug, Clone, Default)]
pub struct MarkerLog {
	marks: Vec<UndoMark>,
}

impl MarkerLog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn marks(&self) -> &[UndoMark] {
		&self.marks
	}

	/// Whether every start has a matching end.
	pub fn is_balanced(&self) -> bool {
		let mut depth = 0usize;
		for mark in &self.marks {
			match mark {
				UndoMark::Start(_) => depth += 1,
				UndoMark::End(_) => match depth.checked_sub(1) {
					Some(d) => depth = d,
					None => return false,
				},
			}
		}
		depth == 0
	}
}

impl UndoLog for MarkerLog {
	fn undo_mark_start(&mut self, position: CharIdx) {
		self.marks.push(UndoMark::Start(position));
	}

	fn undo_mark_end(&mut self, position: CharIdx) {
		self.marks.push(UndoMark::End(position));
	}
}
