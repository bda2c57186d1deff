//! Scripted key source and recording display for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use quill_primitives::{BoxFutureLocal, Key, KeyCode};

use crate::io::{KeySource, MinibufferDisplay};

#[derive(Debug, Default)]
struct Script {
	keys: VecDeque<Key>,
	last: Option<Key>,
	pauses: usize,
	keys_cut_pauses: bool,
}

/// Key source replaying a fixed script.
///
/// Clones share the script so a test can keep a handle after moving one
/// into the minibuffer. Untimed reads return `None` once the script runs out;
/// timed reads count as a pause and return `None` without consuming a key
/// unless [`ScriptedKeys::cut_pauses`] was called.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
	inner: Rc<RefCell<Script>>,
}

impl ScriptedKeys {
	pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
		let script = Self::default();
		script.push(keys);
		script
	}

	/// Script built from typed text followed by Enter.
	pub fn line(text: &str) -> Self {
		let keys = Self::default();
		keys.type_line(text);
		keys
	}

	/// Appends keys to the script.
	pub fn push(&self, keys: impl IntoIterator<Item = Key>) {
		self.inner.borrow_mut().keys.extend(keys);
	}

	/// Appends the characters of `text` and then Enter.
	pub fn type_line(&self, text: &str) {
		self.type_text(text);
		self.push([Key::new(KeyCode::Enter)]);
	}

	/// Appends the characters of `text`.
	pub fn type_text(&self, text: &str) {
		self.push(text.chars().map(Key::char));
	}

	/// Makes timed reads take the next scripted key.
	pub fn cut_pauses(&self) {
		self.inner.borrow_mut().keys_cut_pauses = true;
	}

	/// Timed reads seen so far.
	pub fn pauses(&self) -> usize {
		self.inner.borrow().pauses
	}

	/// Keys not yet delivered.
	pub fn remaining(&self) -> usize {
		self.inner.borrow().keys.len()
	}
}

impl KeySource for ScriptedKeys {
	fn next_key(&mut self, timeout: Option<Duration>) -> BoxFutureLocal<'_, Option<Key>> {
		let mut script = self.inner.borrow_mut();
		let key = match timeout {
			Some(_) => {
				script.pauses += 1;
				if script.keys_cut_pauses {
					script.keys.pop_front()
				} else {
					None
				}
			}
			None => script.keys.pop_front(),
		};
		if key.is_some() {
			script.last = key;
		}
		Box::pin(std::future::ready(key))
	}

	fn last_key(&self) -> Option<Key> {
		self.inner.borrow().last
	}
}

/// Everything a [`RecordingDisplay`] was asked to show.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DisplayLog {
	/// Minibuffer lines with their cursor offsets, oldest first.
	pub lines: Vec<(String, usize)>,
	/// Candidate lists, oldest first.
	pub candidates: Vec<Vec<String>>,
	pub dings: usize,
}

/// Display that records every call. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
	log: Rc<RefCell<DisplayLog>>,
}

impl RecordingDisplay {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn log(&self) -> DisplayLog {
		self.log.borrow().clone()
	}

	/// Last line drawn.
	pub fn last_line(&self) -> Option<String> {
		self.log.borrow().lines.last().map(|(text, _)| text.clone())
	}

	/// Whether any drawn line equals `text`.
	pub fn showed(&self, text: &str) -> bool {
		self.log.borrow().lines.iter().any(|(line, _)| line == text)
	}

	pub fn dings(&self) -> usize {
		self.log.borrow().dings
	}
}

impl MinibufferDisplay for RecordingDisplay {
	fn render_minibuffer(&mut self, text: &str, cursor: usize) {
		self.log.borrow_mut().lines.push((text.to_owned(), cursor));
	}

	fn render_candidate_list(&mut self, candidates: &[String]) {
		self.log.borrow_mut().candidates.push(candidates.to_vec());
	}

	fn ding(&mut self) {
		self.log.borrow_mut().dings += 1;
	}
}
