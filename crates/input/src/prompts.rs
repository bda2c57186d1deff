//! Typed readers built on [`Minibuffer::read_line`].

use std::path::PathBuf;

use tracing::debug;

use crate::completion::Completion;
use crate::history::HistoryContext;
use crate::minibuffer::{Minibuffer, ReadRequest};
use crate::path::{compact_path, expand_path};

const YES_OR_NO: &str = "Please answer yes or no.";
const Y_OR_N: &str = "Please answer y or n.  ";
const ENTER_NUMBER: &str = "Please enter a number.";

/// Result of [`Minibuffer::read_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberInput {
	Number(u64),
	/// Submitted empty; the caller picks a default.
	Empty,
}

impl Minibuffer {
	/// Plain read with no completion or history.
	pub async fn read_string(&mut self, prompt: &str, initial: &str) -> Option<String> {
		self.read_line(ReadRequest::new(prompt).initial(initial)).await
	}

	/// Reads a non-negative integer, re-prompting until one parses.
	pub async fn read_number(&mut self, prompt: &str) -> Option<NumberInput> {
		let accept = |text: &str, _: Option<&Completion>| text.is_empty() || text.parse::<u64>().is_ok();
		let text = self
			.read_line(ReadRequest::new(prompt).accept(&accept).invalid_error(ENTER_NUMBER))
			.await?;
		if text.is_empty() {
			return Some(NumberInput::Empty);
		}
		text.parse().ok().map(NumberInput::Number)
	}

	/// Single-keystroke y/n question. `None` on `C-g`.
	pub async fn read_yn(&mut self, prompt: &str) -> Option<bool> {
		let mut nag = "";
		loop {
			self.write(format!("{nag}{prompt}"));
			let key = self.next_key().await?;
			if key.is_interrupt() {
				return None;
			}
			if key.is_char('y') {
				return Some(true);
			}
			if key.is_char('n') {
				return Some(false);
			}
			nag = Y_OR_N;
		}
	}

	/// Full-word yes/no question with completion.
	pub async fn read_yesno(&mut self, prompt: &str) -> Option<bool> {
		let mut completion = Completion::new(["no", "yes"]);
		let answer = self
			.read_completion(prompt, "", &mut completion, Some(HistoryContext::YES_NO), YES_OR_NO, YES_OR_NO)
			.await?;
		Some(answer == "yes")
	}

	/// Reads one of the candidates of `completion`.
	pub async fn read_completion(
		&mut self,
		prompt: &str,
		initial: &str,
		completion: &mut Completion,
		history: Option<HistoryContext>,
		empty_error: &str,
		invalid_error: &str,
	) -> Option<String> {
		let accept = |text: &str, completion: Option<&Completion>| completion.is_some_and(|c| c.is_member(text));
		let mut request = ReadRequest::new(prompt)
			.initial(initial)
			.completion(completion)
			.empty_error(empty_error)
			.accept(&accept)
			.invalid_error(invalid_error);
		if let Some(context) = history {
			request = request.history(context);
		}
		self.read_line(request).await
	}

	/// Reads a file name.
	///
	/// `initial` is expanded and shown in home-relative form; when `file` is
	/// given the cursor starts in front of it. Returns the expanded path, or
	/// `None` on cancel or when either path cannot be expanded.
	pub async fn read_filename(&mut self, prompt: &str, initial: &str, file: Option<&str>) -> Option<PathBuf> {
		let Some(expanded) = expand_path(initial) else {
			debug!(initial, "initial path not expandable");
			return None;
		};
		let shown = compact_path(&expanded);
		let cursor = file.map(|f| shown.chars().count().saturating_sub(f.chars().count()));

		let mut completion = Completion::filename();
		let request = ReadRequest::new(prompt)
			.initial(shown)
			.cursor(cursor)
			.completion(&mut completion)
			.complete_on_submit(false)
			.history(HistoryContext::FILES);
		let text = self.read_line(request).await?;
		expand_path(&text)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quill_primitives::Key;

	use super::*;
	use crate::minibuffer::MinibufferOptions;
	use crate::testing::{RecordingDisplay, ScriptedKeys};

	fn minibuffer(keys: &ScriptedKeys) -> (Minibuffer, RecordingDisplay) {
		let display = RecordingDisplay::new();
		let mb = Minibuffer::new(Box::new(keys.clone()), Box::new(display.clone()), MinibufferOptions::default());
		(mb, display)
	}

	#[tokio::test]
	async fn number_retries_until_it_parses() {
		let keys = ScriptedKeys::line("12x");
		keys.push([Key::new(quill_primitives::KeyCode::Backspace), Key::new(quill_primitives::KeyCode::Enter)]);
		let (mut mb, display) = minibuffer(&keys);

		assert_eq!(mb.read_number("Goto line: ").await, Some(NumberInput::Number(12)));
		assert!(display.showed(ENTER_NUMBER));
		assert_eq!(keys.pauses(), 1);
	}

	#[tokio::test]
	async fn empty_number_is_reported_as_empty() {
		let keys = ScriptedKeys::line("");
		let (mut mb, _) = minibuffer(&keys);
		assert_eq!(mb.read_number("Count: ").await, Some(NumberInput::Empty));
	}

	#[tokio::test]
	async fn yn_nags_until_answered() {
		let keys = ScriptedKeys::new([Key::char('x'), Key::char('n')]);
		let (mut mb, display) = minibuffer(&keys);

		assert_eq!(mb.read_yn("Save? (y or n) ").await, Some(false));
		assert!(display.showed("Please answer y or n.  Save? (y or n) "));
	}

	#[tokio::test]
	async fn yn_interrupt_cancels() {
		let keys = ScriptedKeys::new([Key::interrupt()]);
		let (mut mb, _) = minibuffer(&keys);
		assert_eq!(mb.read_yn("Save? ").await, None);
	}

	#[tokio::test]
	async fn yesno_completes_and_records_history() {
		let keys = ScriptedKeys::line("ye");
		let (mut mb, _) = minibuffer(&keys);

		assert_eq!(mb.read_yesno("Really? ").await, Some(true));
		let history = mb.histories().get(HistoryContext::YES_NO).expect("history");
		assert_eq!(history.entries(), ["yes"]);
	}

	#[tokio::test]
	async fn yesno_rejects_other_words() {
		let keys = ScriptedKeys::line("maybe");
		keys.push((0..5).map(|_| Key::new(quill_primitives::KeyCode::Backspace)));
		keys.type_line("no");
		let (mut mb, display) = minibuffer(&keys);

		assert_eq!(mb.read_yesno("Really? ").await, Some(false));
		assert!(display.showed(YES_OR_NO));
	}

	#[tokio::test]
	async fn filename_cursor_sits_before_the_file() {
		let keys = ScriptedKeys::new([Key::new(quill_primitives::KeyCode::Enter)]);
		let (mut mb, display) = minibuffer(&keys);

		let path = mb.read_filename("Find file: ", "/tmp/dir/notes.txt", Some("notes.txt")).await;
		assert_eq!(path, Some(PathBuf::from("/tmp/dir/notes.txt")));

		let log = display.log();
		let (line, cursor) = log.lines.first().expect("prompt drawn");
		assert_eq!(line, "Find file: /tmp/dir/notes.txt");
		assert_eq!(*cursor, "Find file: /tmp/dir/".chars().count());
		assert_eq!(mb.histories().get(HistoryContext::FILES).expect("history").entries(), ["/tmp/dir/notes.txt"]);
	}

	#[tokio::test]
	async fn unexpandable_filename_is_refused() {
		let keys = ScriptedKeys::default();
		let (mut mb, _) = minibuffer(&keys);
		assert_eq!(mb.read_filename("Find file: ", "~nobody/x", None).await, None);
	}
}
