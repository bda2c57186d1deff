//! Common utilities for editor integration tests.

use quill_editor::{Editor, EditorConfig, ScratchBuffer};
use quill_input::testing::{RecordingDisplay, ScriptedKeys};

/// An editor over `text` driven by a key script, with its recording display.
pub fn editor(text: &str) -> (Editor, ScriptedKeys, RecordingDisplay) {
	editor_with_config(text, EditorConfig::default())
}

pub fn editor_with_config(text: &str, config: EditorConfig) -> (Editor, ScriptedKeys, RecordingDisplay) {
	let _ = tracing_subscriber::fmt::try_init();
	let keys = ScriptedKeys::default();
	let display = RecordingDisplay::new();
	let editor = Editor::new(Box::new(keys.clone()), Box::new(display.clone()), config)
		.with_buffer(Box::new(ScratchBuffer::new(text)));
	(editor, keys, display)
}
