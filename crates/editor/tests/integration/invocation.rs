use pretty_assertions::assert_eq;
use quill_editor::{EditorConfig, Evaluator, execute_with_repetition};
use quill_invocation::{Invocation, NumericArg};
use quill_registry::{FunctionEditorOps, FunctionResult, KeyboardMacro, MacroTable};

use crate::common::{editor, editor_with_config};

#[tokio::test]
async fn unknown_names_are_reported() {
	let (mut ed, _, display) = editor("abc");

	let result = ed.run_invocation(Invocation::named("frobnicate")).await;

	assert_eq!(result, FunctionResult::Failure);
	assert_eq!(ed.minibuffer().message(), Some("No such command `frobnicate'"));
	assert_eq!(display.dings(), 1);
}

#[tokio::test]
async fn handler_errors_become_messages() {
	let (mut ed, _, _) = editor("");

	let args = vec!["x".to_owned(), "(car nil)".to_owned()];
	let result = ed.run_invocation(Invocation::named_with_args("setq", args)).await;

	assert_eq!(result, FunctionResult::Failure);
	let message = ed.minibuffer().message().expect("error shown");
	assert!(message.starts_with("evaluation failed"));
}

#[tokio::test]
async fn setq_through_invocation_binds_variables() {
	let (mut ed, _, _) = editor("");

	let args = vec!["fill-column".to_owned(), "72".to_owned()];
	let result = ed.run_invocation(Invocation::named_with_args("setq", args)).await;

	assert_eq!(result, FunctionResult::Success);
	assert_eq!(ed.evaluator().variable("fill-column").as_deref(), Some("72"));
}

#[tokio::test]
async fn macro_invocations_play_back() {
	let (ed, _, _) = editor("");
	let mut macros = MacroTable::new();
	macros.insert(KeyboardMacro::new("twice", vec![quill_primitives::Key::char('x')]));
	let mut ed = ed.with_macros(Box::new(macros));

	assert_eq!(ed.run_invocation(Invocation::macro_play("twice")).await, FunctionResult::Success);
	assert_eq!(ed.run_invocation(Invocation::named("twice")).await, FunctionResult::Success);
	assert_eq!(ed.run_invocation(Invocation::macro_play("missing")).await, FunctionResult::Failure);
}

#[test]
fn repetition_drives_the_editor_directly() {
	let (mut ed, _, _) = editor("abc");

	let result = execute_with_repetition(&mut ed, NumericArg::count(2), |e| e.forward_char(), None, true);
	assert_eq!(result, FunctionResult::Success);
	assert_eq!(ed.buffer().point(), 2);

	let result = execute_with_repetition(
		&mut ed,
		NumericArg::count(-5),
		|e| e.forward_char(),
		Some(|e| e.backward_char()),
		false,
	);
	assert_eq!(result, FunctionResult::Failure);
	assert_eq!(ed.buffer().point(), 0);
}

#[tokio::test]
async fn quiet_config_never_rings() {
	let config = EditorConfig::from_toml_str("bell = false").expect("parses");
	let (mut ed, _, display) = editor_with_config("", config);

	ed.run_invocation(Invocation::named("keyboard-quit")).await;
	ed.run_invocation(Invocation::named("nope")).await;

	assert_eq!(display.dings(), 0);
}
