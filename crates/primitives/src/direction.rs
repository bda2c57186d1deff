//! Directional types for navigation.

/// Sequential direction for ordered traversal (history entries, repetition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeqDirection {
	Next,
	Prev,
}

impl SeqDirection {
	/// Returns the opposite direction.
	pub fn reverse(self) -> Self {
		match self {
			Self::Next => Self::Prev,
			Self::Prev => Self::Next,
		}
	}
}
