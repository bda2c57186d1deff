//! Collaborator interfaces for keystrokes and minibuffer rendering.

use std::time::Duration;

use quill_primitives::{BoxFutureLocal, Key};
use tokio::sync::mpsc;

/// Source of keystrokes for the read loop.
pub trait KeySource {
	/// Waits for the next key.
	///
	/// With a timeout, `None` means no key arrived in time. Without one,
	/// `None` means the source is exhausted.
	fn next_key(&mut self, timeout: Option<Duration>) -> BoxFutureLocal<'_, Option<Key>>;

	/// The most recently delivered key.
	fn last_key(&self) -> Option<Key>;
}

/// Rendering surface for the minibuffer line and candidate lists.
pub trait MinibufferDisplay {
	/// Draws the full minibuffer line with the cursor at `cursor` chars.
	fn render_minibuffer(&mut self, text: &str, cursor: usize);

	/// Shows the completion candidates.
	fn render_candidate_list(&mut self, candidates: &[String]);

	/// Rings the bell.
	fn ding(&mut self);
}

/// [`KeySource`] fed by an unbounded channel from the terminal task.
pub struct ChannelKeySource {
	rx: mpsc::UnboundedReceiver<Key>,
	last: Option<Key>,
}

impl ChannelKeySource {
	pub fn new(rx: mpsc::UnboundedReceiver<Key>) -> Self {
		Self { rx, last: None }
	}

	/// Creates a source together with the sender that feeds it.
	pub fn channel() -> (mpsc::UnboundedSender<Key>, Self) {
		let (tx, rx) = mpsc::unbounded_channel();
		(tx, Self::new(rx))
	}
}

impl KeySource for ChannelKeySource {
	fn next_key(&mut self, timeout: Option<Duration>) -> BoxFutureLocal<'_, Option<Key>> {
		Box::pin(async move {
			let key = match timeout {
				Some(limit) => tokio::time::timeout(limit, self.rx.recv()).await.ok().flatten(),
				None => self.rx.recv().await,
			};
			if key.is_some() {
				self.last = key;
			}
			key
		})
	}

	fn last_key(&self) -> Option<Key> {
		self.last
	}
}
