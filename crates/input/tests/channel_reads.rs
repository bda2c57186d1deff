//! Reads driven through a real channel, as the terminal task feeds them.

#![allow(unused_crate_dependencies)]

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use quill_input::{ChannelKeySource, HistoryContext, Minibuffer, MinibufferDisplay, MinibufferOptions, NumberInput};
use quill_primitives::{Key, KeyCode};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Clone, Default)]
struct Screen {
	lines: Rc<RefCell<Vec<String>>>,
	dings: Rc<RefCell<usize>>,
}

impl MinibufferDisplay for Screen {
	fn render_minibuffer(&mut self, text: &str, _cursor: usize) {
		self.lines.borrow_mut().push(text.to_owned());
	}

	fn render_candidate_list(&mut self, _candidates: &[String]) {}

	fn ding(&mut self) {
		*self.dings.borrow_mut() += 1;
	}
}

fn setup() -> (UnboundedSender<Key>, Minibuffer, Screen) {
	let (tx, keys) = ChannelKeySource::channel();
	let screen = Screen::default();
	let mb = Minibuffer::new(Box::new(keys), Box::new(screen.clone()), MinibufferOptions::default());
	(tx, mb, screen)
}

fn send_text(tx: &UnboundedSender<Key>, text: &str) {
	for c in text.chars() {
		tx.send(Key::char(c)).expect("receiver alive");
	}
}

fn send_enter(tx: &UnboundedSender<Key>) {
	tx.send(Key::new(KeyCode::Enter)).expect("receiver alive");
}

#[tokio::test]
async fn yes_no_completes_a_prefix() {
	let (tx, mut mb, _) = setup();
	send_text(&tx, "ye");
	send_enter(&tx);

	assert_eq!(mb.read_yesno("Really? ").await, Some(true));
	let history = mb.histories().get(HistoryContext::YES_NO).expect("history");
	assert_eq!(history.entries(), ["yes"]);
}

#[tokio::test(start_paused = true)]
async fn invalid_number_pauses_then_accepts_the_fix() {
	let (tx, mut mb, screen) = setup();
	send_text(&tx, "x");
	send_enter(&tx);
	tx.send(Key::new(KeyCode::Backspace)).expect("receiver alive");
	send_text(&tx, "42");
	send_enter(&tx);

	assert_eq!(mb.read_number("Count: ").await, Some(NumberInput::Number(42)));
	assert!(screen.lines.borrow().iter().any(|l| l == "Please enter a number."));
	assert_eq!(*screen.dings.borrow(), 1);
}

#[tokio::test(start_paused = true)]
async fn error_pause_expires_without_input() {
	let (tx, mut mb, screen) = setup();
	send_text(&tx, "x");
	send_enter(&tx);

	let read = mb.read_number("Count: ");
	let feeder = async {
		tokio::time::sleep(std::time::Duration::from_secs(5)).await;
		tx.send(Key::interrupt()).expect("receiver alive");
	};
	let (result, ()) = tokio::join!(read, feeder);

	assert_eq!(result, None);
	let lines = screen.lines.borrow();
	let error_at = lines.iter().position(|l| l == "Please enter a number.").expect("error shown");
	assert_eq!(lines.get(error_at + 1).map(String::as_str), Some("Count: x"));
}

#[tokio::test]
async fn closing_the_channel_cancels_the_read() {
	let (tx, mut mb, _) = setup();
	send_text(&tx, "partial");
	drop(tx);

	assert_eq!(mb.read_string("Name: ", "").await, None);
	assert_eq!(mb.depth(), 0);
}
