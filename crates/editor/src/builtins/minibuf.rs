use quill_registry::{BoxFutureLocal, CommandError, FunctionContext, FunctionDef, FunctionResult, function};

function!(execute_extended_command, {
	name: "execute-extended-command",
	doc: "Read function name, then read its arguments and call it.",
}, handler: fn_execute_extended_command);

function!(keyboard_quit, {
	name: "keyboard-quit",
	doc: "Cancel current command.",
}, handler: fn_keyboard_quit);

fn fn_execute_extended_command<'a>(
	ctx: &'a mut FunctionContext<'a>,
) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		let arg = ctx.arg;
		let prompt = ctx.editor.extended_command_prompt(arg);
		let Some(name) = ctx.editor.read_function_name(&prompt).await else {
			return Ok(FunctionResult::Failure);
		};
		ctx.editor.execute_function(&name, arg).await
	})
}

fn fn_keyboard_quit<'a>(ctx: &'a mut FunctionContext<'a>) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		ctx.editor.error("Quit");
		Ok(FunctionResult::Abort)
	})
}

pub(super) const DEFS: &[&FunctionDef] = &[&FN_execute_extended_command, &FN_keyboard_quit];
