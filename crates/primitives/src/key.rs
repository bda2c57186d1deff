//! Key representation for minibuffer and command input.
//!
//! Keys are produced by an external decoder; the command layer only needs
//! enough structure to tell editing keys, confirmation and interrupts apart.

use std::fmt;

mod modifiers;

pub use modifiers::Modifiers;

/// Logical key code, independent of any terminal encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	Char(char),
	Enter,
	Tab,
	Backspace,
	Delete,
	Left,
	Right,
	Up,
	Down,
	Home,
	End,
	Esc,
}

/// A key with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// Create a key from a character with no modifiers.
	pub const fn char(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::NONE,
		}
	}

	/// Create a key from a key code with no modifiers.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// Create a key with Ctrl modifier.
	pub const fn ctrl(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::CTRL,
		}
	}

	/// Create a key with Alt modifier.
	pub const fn alt(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::ALT,
		}
	}

	/// The user interrupt (`C-g`).
	pub const fn interrupt() -> Self {
		Self::ctrl('g')
	}

	/// Check if this is the user interrupt.
	pub fn is_interrupt(&self) -> bool {
		*self == Self::interrupt()
	}

	/// Check if this is a specific unmodified character.
	pub fn is_char(&self, c: char) -> bool {
		self.modifiers.is_empty() && matches!(self.code, KeyCode::Char(ch) if ch == c)
	}

	/// Get the character if this key inserts text.
	///
	/// Shift is folded into the character itself by the decoder, so a shifted
	/// char still inserts.
	pub fn codepoint(&self) -> Option<char> {
		match self.code {
			KeyCode::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
			_ => None,
		}
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.modifiers.ctrl {
			f.write_str("C-")?;
		}
		if self.modifiers.alt {
			f.write_str("M-")?;
		}
		match self.code {
			KeyCode::Char(' ') => f.write_str("SPC"),
			KeyCode::Char(c) => write!(f, "{c}"),
			KeyCode::Enter => f.write_str("RET"),
			KeyCode::Tab => f.write_str("TAB"),
			KeyCode::Backspace => f.write_str("DEL"),
			KeyCode::Delete => f.write_str("<delete>"),
			KeyCode::Left => f.write_str("<left>"),
			KeyCode::Right => f.write_str("<right>"),
			KeyCode::Up => f.write_str("<up>"),
			KeyCode::Down => f.write_str("<down>"),
			KeyCode::Home => f.write_str("<home>"),
			KeyCode::End => f.write_str("<end>"),
			KeyCode::Esc => f.write_str("ESC"),
		}
	}
}
