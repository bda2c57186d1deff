use quill_registry::{BoxFutureLocal, CommandError, FunctionContext, FunctionDef, FunctionResult, function};

use crate::dispatch::execute_with_repetition;

function!(delete_char, {
	name: "delete-char",
	doc: "Delete the following N characters (previous if N is negative).",
}, handler: fn_delete_char);

function!(delete_backward_char, {
	name: "delete-backward-char",
	doc: "Delete the previous N characters (following if N is negative).",
}, handler: fn_delete_backward_char);

function!(newline, {
	name: "newline",
	doc: "Insert a newline at the current point position into\nthe current buffer.",
}, handler: fn_newline);

fn fn_delete_char<'a>(ctx: &'a mut FunctionContext<'a>) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		let arg = ctx.arg;
		Ok(execute_with_repetition(
			&mut *ctx.editor,
			arg,
			|e| e.delete_char(),
			Some(|e| e.delete_backward_char()),
			true,
		))
	})
}

fn fn_delete_backward_char<'a>(
	ctx: &'a mut FunctionContext<'a>,
) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		let arg = ctx.arg;
		Ok(execute_with_repetition(
			&mut *ctx.editor,
			arg,
			|e| e.delete_backward_char(),
			Some(|e| e.delete_char()),
			true,
		))
	})
}

fn fn_newline<'a>(ctx: &'a mut FunctionContext<'a>) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		let arg = ctx.arg;
		Ok(execute_with_repetition(&mut *ctx.editor, arg, |e| e.insert_newline(), None, true))
	})
}

pub(super) const DEFS: &[&FunctionDef] = &[&FN_delete_char, &FN_delete_backward_char, &FN_newline];
