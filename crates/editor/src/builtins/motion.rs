use quill_registry::{BoxFutureLocal, CommandError, FunctionContext, FunctionDef, FunctionResult, function};

use crate::dispatch::execute_with_repetition;

function!(forward_char, {
	name: "forward-char",
	doc: "Move point right N characters (left if N is negative).\nOn reaching end of buffer, stop and signal error.",
}, handler: fn_forward_char);

function!(backward_char, {
	name: "backward-char",
	doc: "Move point left N characters (right if N is negative).\nOn attempt to pass beginning or end of buffer, stop and signal error.",
}, handler: fn_backward_char);

function!(next_line, {
	name: "next-line",
	doc: "Move cursor vertically down one line.\nIf there is no character in the target line exactly under the current column,\nthe cursor is positioned after the character in that line which spans this\ncolumn, or at the end of the line if it is not long enough.",
}, handler: fn_next_line);

function!(previous_line, {
	name: "previous-line",
	doc: "Move cursor vertically up one line.\nIf there is no character in the target line exactly over the current column,\nthe cursor is positioned after the character in that line which spans this\ncolumn, or at the end of the line if it is not long enough.",
}, handler: fn_previous_line);

function!(goto_line, {
	name: "goto-line",
	doc: "Goto LINE, counting from line 1 at beginning of buffer.",
}, handler: fn_goto_line);

fn fn_forward_char<'a>(ctx: &'a mut FunctionContext<'a>) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		let arg = ctx.arg;
		Ok(execute_with_repetition(
			&mut *ctx.editor,
			arg,
			|e| e.forward_char(),
			Some(|e| e.backward_char()),
			false,
		))
	})
}

fn fn_backward_char<'a>(ctx: &'a mut FunctionContext<'a>) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		let arg = ctx.arg;
		Ok(execute_with_repetition(
			&mut *ctx.editor,
			arg,
			|e| e.backward_char(),
			Some(|e| e.forward_char()),
			false,
		))
	})
}

fn fn_next_line<'a>(ctx: &'a mut FunctionContext<'a>) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		let arg = ctx.arg;
		Ok(execute_with_repetition(
			&mut *ctx.editor,
			arg,
			|e| e.next_line(),
			Some(|e| e.previous_line()),
			false,
		))
	})
}

fn fn_previous_line<'a>(ctx: &'a mut FunctionContext<'a>) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		let arg = ctx.arg;
		Ok(execute_with_repetition(
			&mut *ctx.editor,
			arg,
			|e| e.previous_line(),
			Some(|e| e.next_line()),
			false,
		))
	})
}

fn fn_goto_line<'a>(ctx: &'a mut FunctionContext<'a>) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		let line = if let Some(text) = ctx.args.first() {
			text.parse::<u64>()
				.map_err(|_| CommandError::InvalidArgument(format!("not a line number: {text}")))?
		} else if ctx.explicit() {
			u64::try_from(ctx.count()).unwrap_or(0)
		} else {
			match ctx.editor.read_number("Goto line: ").await {
				Some(line) => line,
				None => return Ok(FunctionResult::Failure),
			}
		};
		Ok(FunctionResult::from_bool(ctx.editor.goto_line(line)))
	})
}

pub(super) const DEFS: &[&FunctionDef] = &[
	&FN_forward_char,
	&FN_backward_char,
	&FN_next_line,
	&FN_previous_line,
	&FN_goto_line,
];
