use pretty_assertions::assert_eq;
use quill_input::HistoryContext;
use quill_invocation::{Invocation, NumericArg};
use quill_primitives::{Key, KeyCode};
use quill_registry::FunctionResult;

use crate::common::editor;

fn m_x(arg: NumericArg) -> Invocation {
	Invocation::named_with_arg("execute-extended-command", arg)
}

#[tokio::test]
async fn runs_the_named_function() {
	let (mut ed, keys, display) = editor("hello");
	keys.type_line("forward-char");

	let result = ed.run_invocation(m_x(NumericArg::none())).await;

	assert_eq!(result, FunctionResult::Success);
	assert_eq!(ed.buffer().point(), 1);
	assert_eq!(display.log().lines.first(), Some(&("M-x ".to_owned(), 4)));
	let history = ed.minibuffer().histories().get(HistoryContext::FUNCTIONS).expect("history");
	assert_eq!(history.entries(), ["forward-char"]);
}

#[tokio::test]
async fn passes_the_numeric_argument_through() {
	let (mut ed, keys, display) = editor("hello world");
	keys.type_line("forward-char");

	let result = ed.run_invocation(m_x(NumericArg::count(5))).await;

	assert_eq!(result, FunctionResult::Success);
	assert_eq!(ed.buffer().point(), 5);
	assert!(display.showed("5 M-x "));
}

#[tokio::test]
async fn bare_universal_argument_shows_c_u() {
	let (mut ed, keys, display) = editor("hello world");
	keys.type_line("forward-char");

	ed.run_invocation(m_x(NumericArg::universal())).await;

	assert!(display.showed("C-u M-x "));
	assert_eq!(ed.buffer().point(), NumericArg::UNIVERSAL as usize);
}

#[tokio::test]
async fn completes_a_unique_prefix_on_submit() {
	let (mut ed, keys, _) = editor("a\nb");
	keys.type_line("next-l");

	assert_eq!(ed.run_invocation(m_x(NumericArg::none())).await, FunctionResult::Success);
	assert_eq!(ed.buffer().point(), 2);
}

#[tokio::test]
async fn ambiguous_prefix_lists_candidates_and_waits() {
	let (mut ed, keys, display) = editor("abc");
	keys.type_line("delete-");
	keys.push([Key::ctrl('a'), Key::ctrl('k')]);
	keys.type_line("delete-char");

	let result = ed.run_invocation(m_x(NumericArg::none())).await;

	assert_eq!(result, FunctionResult::Success);
	assert_eq!(ed.buffer().text(), "bc");
	let lists = display.log().candidates;
	assert_eq!(lists.len(), 1);
	assert!(lists[0].contains(&"delete-char".to_owned()));
	assert!(lists[0].contains(&"delete-backward-char".to_owned()));
}

#[tokio::test]
async fn tab_completes_before_submitting() {
	let (mut ed, keys, _) = editor("a\nb\nc");
	keys.type_text("goto-");
	keys.push([Key::new(KeyCode::Tab), Key::new(KeyCode::Enter)]);
	keys.type_line("2");

	let result = ed.run_invocation(m_x(NumericArg::none())).await;

	assert_eq!(result, FunctionResult::Success);
	assert_eq!(ed.buffer().point(), 2);
}

#[tokio::test]
async fn empty_name_is_rejected_and_retried() {
	let (mut ed, keys, display) = editor("ab");
	keys.push([Key::new(KeyCode::Enter)]);
	keys.type_line("forward-char");

	let result = ed.run_invocation(m_x(NumericArg::none())).await;

	assert_eq!(result, FunctionResult::Success);
	assert!(display.showed("No function name given"));
	let history = ed.minibuffer().histories().get(HistoryContext::FUNCTIONS).expect("history");
	assert_eq!(history.entries(), ["forward-char"]);
}

#[tokio::test]
async fn undefined_name_is_reported_and_kept_for_editing() {
	let (mut ed, keys, display) = editor("ab");
	keys.type_line("frob");
	keys.push([Key::ctrl('a'), Key::ctrl('k')]);
	keys.type_line("forward-char");

	let result = ed.run_invocation(m_x(NumericArg::none())).await;

	assert_eq!(result, FunctionResult::Success);
	assert!(display.showed("Undefined function name `frob'"));
	assert!(display.dings() >= 1);
}

#[tokio::test]
async fn cancelling_the_read_fails_quietly() {
	let (mut ed, keys, _) = editor("ab");
	keys.type_text("forw");
	keys.push([Key::interrupt()]);

	let result = ed.run_invocation(m_x(NumericArg::none())).await;

	assert_eq!(result, FunctionResult::Failure);
	assert_eq!(ed.buffer().point(), 0);
	assert_eq!(ed.minibuffer().message(), Some("Quit"));
	assert!(ed.minibuffer().histories().get(HistoryContext::FUNCTIONS).is_none_or(|h| h.is_empty()));
	assert_eq!(ed.minibuffer().depth(), 0);
}

#[tokio::test]
async fn history_recalls_previous_commands() {
	let (mut ed, keys, _) = editor("abcdef");
	keys.type_line("forward-char");
	keys.push([Key::alt('p'), Key::new(KeyCode::Enter)]);

	ed.run_invocation(m_x(NumericArg::none())).await;
	ed.run_invocation(m_x(NumericArg::none())).await;

	assert_eq!(ed.buffer().point(), 2);
	let history = ed.minibuffer().histories().get(HistoryContext::FUNCTIONS).expect("history");
	assert_eq!(history.entries(), ["forward-char", "forward-char"]);
}

#[tokio::test]
async fn follow_up_read_starts_after_the_name_read_ends() {
	let (mut ed, keys, display) = editor("a\nb\nc");
	keys.type_line("goto-line");
	keys.type_line("3");

	let result = ed.run_invocation(m_x(NumericArg::none())).await;

	assert_eq!(result, FunctionResult::Success);
	assert_eq!(ed.buffer().point(), 4);
	assert!(display.showed("Goto line: 3"));
	assert_eq!(ed.minibuffer().depth(), 0);
	assert_eq!(ed.minibuffer().active_prompt(), None);
}
