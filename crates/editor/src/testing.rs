//! Fakes for every collaborator, plus a harness wiring them into an [`Editor`].

use std::cell::RefCell;
use std::rc::Rc;

use quill_primitives::{CharIdx, Key};
pub use quill_input::testing::{DisplayLog, RecordingDisplay, ScriptedKeys};
use quill_registry::{KeyboardMacro, MacroStore, MacroTable};

use crate::buffer::ScratchBuffer;
use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::undo::{MarkerLog, UndoLog, UndoMark};

/// Undo log whose clones share one [`MarkerLog`].
#[derive(Debug, Clone, Default)]
pub struct SharedUndo(Rc<RefCell<MarkerLog>>);

impl SharedUndo {
	pub fn marks(&self) -> Vec<UndoMark> {
		self.0.borrow().marks().to_vec()
	}

	pub fn is_balanced(&self) -> bool {
		self.0.borrow().is_balanced()
	}
}

impl UndoLog for SharedUndo {
	fn undo_mark_start(&mut self, position: CharIdx) {
		self.0.borrow_mut().undo_mark_start(position);
	}

	fn undo_mark_end(&mut self, position: CharIdx) {
		self.0.borrow_mut().undo_mark_end(position);
	}
}

/// Macro store whose clones share one [`MacroTable`].
#[derive(Debug, Clone, Default)]
pub struct SharedMacros(Rc<RefCell<MacroTable>>);

impl SharedMacros {
	pub fn insert(&self, mac: KeyboardMacro) {
		self.0.borrow_mut().insert(mac);
	}

	pub fn plays(&self) -> usize {
		self.0.borrow().plays()
	}
}

impl MacroStore for SharedMacros {
	fn lookup(&self, name: &str) -> Option<KeyboardMacro> {
		self.0.borrow().lookup(name)
	}

	fn names(&self) -> Vec<String> {
		self.0.borrow().names()
	}

	fn play(&mut self, mac: &KeyboardMacro) {
		self.0.borrow_mut().play(mac);
	}

	fn take_pending(&mut self) -> Vec<Key> {
		self.0.borrow_mut().take_pending()
	}
}

/// An editor over a scratch buffer with handles to every fake.
pub struct Harness {
	pub editor: Editor,
	pub keys: ScriptedKeys,
	pub display: RecordingDisplay,
	pub undo: SharedUndo,
	pub macros: SharedMacros,
}

impl Harness {
	pub fn new(text: &str) -> Self {
		Self::with_config(text, EditorConfig::default())
	}

	pub fn with_config(text: &str, config: EditorConfig) -> Self {
		let keys = ScriptedKeys::default();
		let display = RecordingDisplay::new();
		let undo = SharedUndo::default();
		let macros = SharedMacros::default();
		let editor = Editor::new(Box::new(keys.clone()), Box::new(display.clone()), config)
			.with_buffer(Box::new(ScratchBuffer::new(text)))
			.with_undo_log(Box::new(undo.clone()))
			.with_macros(Box::new(macros.clone()));
		Self {
			editor,
			keys,
			display,
			undo,
			macros,
		}
	}

	/// Text of the transient message, if any.
	pub fn message(&self) -> Option<String> {
		self.editor.minibuffer().message().map(str::to_owned)
	}
}
