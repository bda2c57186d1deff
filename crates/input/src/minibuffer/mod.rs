//! The minibuffer: message line, input frame stack and the read loop.
//!
//! A read pushes an [`InputFrame`] and runs until the line is accepted or the
//! user cancels. Reads started from inside another read (a command run while
//! a prompt is active) stack on top; the outer frame is redrawn once the
//! inner one is popped.

use std::collections::VecDeque;
use std::time::Duration;

use quill_primitives::{Key, SeqDirection};
use tracing::{debug, trace};

use crate::completion::{Completion, CompletionOutcome};
use crate::history::HistoryStore;
use crate::io::{KeySource, MinibufferDisplay};
use crate::line::{LineEditor, LineKeyResult};

mod frame;
mod request;

use frame::InputFrame;
pub use request::{AcceptFn, NestedReadFn, ReadRequest};

/// Appended to the line when TAB finds nothing.
const NO_MATCH: &str = " [No match]";

/// Tunables for the read loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinibufferOptions {
	/// How long an input error stays up before editing resumes.
	pub error_pause: Duration,
	/// Ring the bell with errors.
	pub bell: bool,
}

impl Default for MinibufferOptions {
	fn default() -> Self {
		Self {
			error_pause: Duration::from_millis(2000),
			bell: true,
		}
	}
}

/// What a submit did.
enum Submit {
	Accepted(String),
	Retry,
}

/// Minibuffer state shared by every read.
pub struct Minibuffer {
	frames: Vec<InputFrame>,
	pending: VecDeque<Key>,
	keys: Box<dyn KeySource>,
	display: Box<dyn MinibufferDisplay>,
	histories: HistoryStore,
	options: MinibufferOptions,
	message: Option<String>,
}

impl Minibuffer {
	pub fn new(keys: Box<dyn KeySource>, display: Box<dyn MinibufferDisplay>, options: MinibufferOptions) -> Self {
		Self {
			frames: Vec::new(),
			pending: VecDeque::new(),
			keys,
			display,
			histories: HistoryStore::new(),
			options,
			message: None,
		}
	}

	pub fn options(&self) -> MinibufferOptions {
		self.options
	}

	pub fn histories(&self) -> &HistoryStore {
		&self.histories
	}

	pub fn histories_mut(&mut self) -> &mut HistoryStore {
		&mut self.histories
	}

	/// Number of reads in progress.
	pub fn depth(&self) -> usize {
		self.frames.len()
	}

	/// Prompt of the innermost read.
	pub fn active_prompt(&self) -> Option<&str> {
		self.frames.last().map(|f| f.prompt.as_str())
	}

	/// The transient message, if one is showing.
	pub fn message(&self) -> Option<&str> {
		self.message.as_deref()
	}

	/// True when no message is showing.
	pub fn no_error(&self) -> bool {
		self.message.is_none()
	}

	/// Shows a transient message.
	pub fn write(&mut self, message: impl Into<String>) {
		let message = message.into();
		self.display.render_minibuffer(&message, message.chars().count());
		self.message = Some(message);
	}

	/// Shows a message and rings the bell.
	pub fn error(&mut self, message: impl Into<String>) {
		self.write(message);
		self.ding();
	}

	/// Clears the message line.
	pub fn clear(&mut self) {
		self.message = None;
		self.display.render_minibuffer("", 0);
	}

	/// Rings the bell unless disabled.
	pub fn ding(&mut self) {
		if self.options.bell {
			self.display.ding();
		}
	}

	/// Next key, taking keys that arrived during a pause first.
	pub async fn next_key(&mut self) -> Option<Key> {
		if let Some(key) = self.pending.pop_front() {
			return Some(key);
		}
		self.keys.next_key(None).await
	}

	/// Queues keys to be read before anything from the key source.
	pub fn unread_keys(&mut self, keys: impl IntoIterator<Item = Key>) {
		self.pending.extend(keys);
	}

	/// Most recent key from the key source.
	pub fn last_key(&self) -> Option<Key> {
		self.keys.last_key()
	}

	/// Waits out the error pause. A key cuts it short and is kept for the
	/// next read.
	pub async fn pause(&mut self) {
		if let Some(key) = self.keys.next_key(Some(self.options.error_pause)).await {
			self.pending.push_back(key);
		}
	}

	/// Reads a line. Returns `None` when the user cancels.
	pub async fn read_line(&mut self, mut request: ReadRequest<'_>) -> Option<String> {
		let initial = std::mem::take(&mut request.initial);
		let prompt = std::mem::take(&mut request.prompt);
		if let Some(context) = request.history {
			self.histories.entry(context).reset_cursor();
		}
		self.frames.push(InputFrame::new(prompt, &initial, request.cursor, request.history));
		trace!(depth = self.frames.len(), "minibuffer.push");

		let result = self.run_top(&mut request).await;

		if let Some(frame) = self.frames.pop()
			&& result.is_none()
		{
			debug!(prompt = %frame.prompt, "minibuffer read cancelled");
		}
		if let Some(context) = request.history {
			self.histories.entry(context).reset_cursor();
		}
		if !self.frames.is_empty() {
			self.render_top();
		}
		result
	}

	async fn run_top(&mut self, request: &mut ReadRequest<'_>) -> Option<String> {
		loop {
			self.render_top();
			let key = self.next_key().await?;
			if let Some(nested) = request.nested
				&& nested.key == key
			{
				self.run_nested(nested.read).await;
				continue;
			}
			let outcome = self.top_line()?.handle_key(key);
			match outcome {
				LineKeyResult::Edited | LineKeyResult::Ignored => {}
				LineKeyResult::Cancel => return None,
				LineKeyResult::Complete => self.complete(request).await,
				LineKeyResult::History(direction) => self.recall(direction),
				LineKeyResult::Submit => {
					if let Submit::Accepted(text) = self.submit(request).await {
						return Some(text);
					}
				}
			}
		}
	}

	async fn run_nested(&mut self, read: &NestedReadFn) {
		let depth = self.frames.len();
		let inserted = read(self).await;
		trace!(depth, inserted = inserted.is_some(), "minibuffer.nested");
		if let Some(text) = inserted
			&& let Some(line) = self.top_line()
		{
			for c in text.chars() {
				line.insert_char(c);
			}
		}
	}

	async fn submit(&mut self, request: &mut ReadRequest<'_>) -> Submit {
		let Some(mut text) = self.top_line().map(|l| l.text()) else {
			return Submit::Retry;
		};

		if text.is_empty()
			&& let Some(message) = request.empty_error
		{
			debug!(error = message, "empty input rejected");
			self.error(message);
			self.pause().await;
			return Submit::Retry;
		}

		if request.complete_on_submit
			&& let Some(completion) = request.completion.as_deref_mut()
		{
			match completion.try_complete(&text) {
				CompletionOutcome::Matched(full) => {
					if let Some(line) = self.top_line() {
						line.set_text(&full);
					}
					text = full;
				}
				CompletionOutcome::Partial(prefix) => {
					let shown = owned_matches(completion, &prefix);
					if let Some(line) = self.top_line() {
						line.set_text(&prefix);
					}
					self.display.render_candidate_list(&shown);
					return Submit::Retry;
				}
				CompletionOutcome::NonUnique => {
					let shown = owned_matches(completion, &text);
					self.display.render_candidate_list(&shown);
					// A name that prefixes a longer one is still a valid answer.
					if !completion.is_member(&text) {
						return Submit::Retry;
					}
				}
				CompletionOutcome::NotMatched => {}
			}
		}

		if let Some(accept) = request.accept
			&& !accept(&text, request.completion.as_deref())
		{
			let message = request.invalid_error.unwrap_or("Invalid input `%s'").replace("%s", &text);
			debug!(%text, "input rejected");
			self.error(message);
			self.pause().await;
			return Submit::Retry;
		}

		if let Some(frame) = self.frames.last()
			&& let Some(context) = frame.history
		{
			self.histories.append(context, &text);
		}
		self.clear();
		Submit::Accepted(text)
	}

	async fn complete(&mut self, request: &mut ReadRequest<'_>) {
		let Some(completion) = request.completion.as_deref_mut() else {
			self.ding();
			return;
		};
		let Some(text) = self.top_line().map(|l| l.text()) else {
			return;
		};

		match completion.try_complete(&text) {
			CompletionOutcome::Matched(full) => {
				if let Some(line) = self.top_line() {
					line.set_text(&full);
				}
			}
			CompletionOutcome::Partial(prefix) => {
				let shown = owned_matches(completion, &prefix);
				if let Some(line) = self.top_line() {
					line.set_text(&prefix);
				}
				self.display.render_candidate_list(&shown);
			}
			CompletionOutcome::NonUnique => {
				let shown = owned_matches(completion, &text);
				self.display.render_candidate_list(&shown);
			}
			CompletionOutcome::NotMatched => {
				if let Some(frame) = self.frames.last() {
					let (mut line, _) = frame.rendered();
					line.push_str(NO_MATCH);
					self.display.render_minibuffer(&line, line.chars().count());
				}
				self.ding();
				self.pause().await;
			}
		}
	}

	fn recall(&mut self, direction: SeqDirection) {
		let Some(frame) = self.frames.last_mut() else {
			return;
		};
		let Some(context) = frame.history else {
			self.ding();
			return;
		};

		let history = self.histories.entry(context);
		let was_recalling = history.is_recalling();
		let entry = history.navigate(direction).map(str::to_owned);
		let moved = match entry {
			Some(entry) => {
				if !was_recalling {
					frame.saved = Some(frame.line.text());
				}
				frame.line.set_text(&entry);
				true
			}
			None if was_recalling && !history.is_recalling() => {
				let typed = frame.saved.take().unwrap_or_default();
				frame.line.set_text(&typed);
				true
			}
			None => false,
		};
		if !moved {
			self.ding();
		}
	}

	fn top_line(&mut self) -> Option<&mut LineEditor> {
		self.frames.last_mut().map(|f| &mut f.line)
	}

	fn render_top(&mut self) {
		if let Some(frame) = self.frames.last() {
			let (text, cursor) = frame.rendered();
			self.display.render_minibuffer(&text, cursor);
		}
	}
}

fn owned_matches(completion: &Completion, typed: &str) -> Vec<String> {
	completion.matches(typed).into_iter().map(str::to_owned).collect()
}
