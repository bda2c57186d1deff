use quill_registry::{BoxFutureLocal, CommandError, FunctionContext, FunctionDef, FunctionResult, function};

function!(describe_function, {
	name: "describe-function",
	doc: "Display the full documentation of a function.",
}, handler: fn_describe_function);

fn fn_describe_function<'a>(
	ctx: &'a mut FunctionContext<'a>,
) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		let name = match ctx.args.first() {
			Some(name) => name.clone(),
			None => match ctx.editor.read_function_name("Describe function: ").await {
				Some(name) => name,
				None => return Ok(FunctionResult::Failure),
			},
		};

		match ctx.editor.function_doc(&name) {
			Some(doc) => {
				ctx.editor.message(&format!("{name} is a built-in function.\n\n{doc}"));
				Ok(FunctionResult::Success)
			}
			None => {
				ctx.editor.message(&format!("{name} is a keyboard macro."));
				Ok(FunctionResult::Success)
			}
		}
	})
}

pub(super) const DEFS: &[&FunctionDef] = &[&FN_describe_function];
