use pretty_assertions::assert_eq;
use quill_primitives::SeqDirection::{Next, Prev};

use super::*;

#[test]
fn previous_walks_back_then_stops() {
	let mut store = HistoryStore::new();
	store.append(HistoryContext::FILES, "/tmp/a");
	store.append(HistoryContext::FILES, "/tmp/b");

	assert_eq!(store.navigate(HistoryContext::FILES, Prev), Some("/tmp/a"));
	assert_eq!(store.navigate(HistoryContext::FILES, Prev), None);
	// No wraparound: still on the oldest entry.
	assert_eq!(store.navigate(HistoryContext::FILES, Next), Some("/tmp/b"));
}

#[test]
fn reset_cursor_recalls_from_the_newest() {
	let mut h = History::new();
	h.append("one");
	h.append("two");
	h.reset_cursor();

	assert!(!h.is_recalling());
	assert_eq!(h.navigate(Prev), Some("two"));
	assert_eq!(h.navigate(Prev), Some("one"));
}

#[test]
fn next_past_newest_leaves_recall_mode() {
	let mut h = History::new();
	h.append("one");
	h.append("two");
	assert!(h.is_recalling());

	assert_eq!(h.navigate(Next), None);
	assert!(!h.is_recalling());
	assert_eq!(h.navigate(Next), None);
	assert_eq!(h.navigate(Prev), Some("two"));
	assert_eq!(h.navigate(Next), None);
	assert!(!h.is_recalling());
}

#[test]
fn empty_strings_are_ignored() {
	let mut h = History::new();
	h.append("");
	assert!(h.is_empty());
	assert!(!h.is_recalling());
	assert_eq!(h.navigate(Prev), None);
}

#[test]
fn consecutive_repeats_are_kept() {
	let mut h = History::new();
	h.append("same");
	h.append("same");
	assert_eq!(h.entries(), ["same", "same"]);
}

#[test]
fn append_moves_cursor_to_the_new_entry() {
	let mut h = History::new();
	h.append("a");
	h.append("b");
	assert_eq!(h.navigate(Prev), Some("a"));
	h.append("c");
	assert_eq!(h.navigate(Prev), Some("b"));
	assert_eq!(h.navigate(Next), Some("c"));
}

#[test]
fn contexts_do_not_bleed() {
	let mut store = HistoryStore::new();
	store.append(HistoryContext::FILES, "/etc/hosts");
	store.append(HistoryContext::FUNCTIONS, "forward-char");
	store.entry(HistoryContext::FUNCTIONS).reset_cursor();

	assert_eq!(store.navigate(HistoryContext::FUNCTIONS, Prev), Some("forward-char"));
	assert_eq!(store.navigate(HistoryContext::FUNCTIONS, Prev), None);
	assert_eq!(store.get(HistoryContext::FILES).map(History::len), Some(1));
	assert!(store.get(HistoryContext::YES_NO).is_none());
}
