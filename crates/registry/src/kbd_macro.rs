//! Keyboard macros: user-defined key sequences sharing the function namespace.

use std::collections::VecDeque;
use std::sync::Arc;

use quill_primitives::Key;
use rustc_hash::FxHashMap;

/// A named, recorded key sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardMacro {
	pub name: String,
	pub keys: Arc<[Key]>,
}

impl KeyboardMacro {
	pub fn new(name: impl Into<String>, keys: impl Into<Arc<[Key]>>) -> Self {
		Self {
			name: name.into(),
			keys: keys.into(),
		}
	}
}

/// Storage and playback of keyboard macros.
///
/// Recording belongs to the macro subsystem. The command layer looks macros
/// up, lists their names, asks for playback and feeds the keys playback
/// produced back into its key stream.
pub trait MacroStore {
	/// Looks a macro up by exact name.
	fn lookup(&self, name: &str) -> Option<KeyboardMacro>;
	/// Names of all stored macros, in no particular order.
	fn names(&self) -> Vec<String>;
	/// Plays a macro back.
	fn play(&mut self, mac: &KeyboardMacro);
	/// Drains keys queued by playback, oldest first.
	fn take_pending(&mut self) -> Vec<Key>;
}

/// In-memory macro store.
///
/// Playback queues the macro's keys until [`MacroStore::take_pending`].
#[derive(Debug, Default)]
pub struct MacroTable {
	macros: FxHashMap<String, KeyboardMacro>,
	pending: VecDeque<Key>,
	plays: usize,
}

impl MacroTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores a macro, replacing any previous macro of the same name.
	pub fn insert(&mut self, mac: KeyboardMacro) -> Option<KeyboardMacro> {
		self.macros.insert(mac.name.clone(), mac)
	}

	/// Number of playbacks so far.
	pub fn plays(&self) -> usize {
		self.plays
	}
}

impl MacroStore for MacroTable {
	fn lookup(&self, name: &str) -> Option<KeyboardMacro> {
		self.macros.get(name).cloned()
	}

	fn names(&self) -> Vec<String> {
		self.macros.keys().cloned().collect()
	}

	fn play(&mut self, mac: &KeyboardMacro) {
		self.plays += 1;
		self.pending.extend(mac.keys.iter().copied());
	}

	fn take_pending(&mut self) -> Vec<Key> {
		self.pending.drain(..).collect()
	}
}
