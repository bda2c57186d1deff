use std::path::PathBuf;

use quill_registry::{BoxFutureLocal, CommandError, FunctionContext, FunctionDef, FunctionResult, function};
use tracing::debug;

function!(setq, {
	name: "setq",
	interactive: false,
	doc: "(setq [sym val]...)\n\nSet each sym to the value of its val.\nThe symbols sym are variables; they are literal (not evaluated).\nThe values val are expressions; they are evaluated.",
}, handler: fn_setq);

function!(load, {
	name: "load",
	doc: "Execute a file of Lisp code named FILE.",
}, handler: fn_load);

fn fn_setq<'a>(ctx: &'a mut FunctionContext<'a>) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		let mut last = None;
		for pair in ctx.args.chunks_exact(2) {
			let value = ctx.editor.evaluate(&pair[1])?;
			ctx.editor.set_variable(&pair[0], &value);
			last = Some(value);
		}
		let Some(last) = last else {
			return Err(CommandError::MissingArgument("symbol and value"));
		};
		ctx.editor.message(&last);
		Ok(FunctionResult::Success)
	})
}

fn fn_load<'a>(ctx: &'a mut FunctionContext<'a>) -> BoxFutureLocal<'a, Result<FunctionResult, CommandError>> {
	Box::pin(async move {
		let path = match ctx.args.first() {
			Some(file) => PathBuf::from(file),
			None => match ctx.editor.read_filename("Load file: ", "").await {
				Some(path) => path,
				None => return Ok(FunctionResult::Failure),
			},
		};

		let source = std::fs::read_to_string(&path)
			.map_err(|e| CommandError::Io(format!("{}: {e}", path.display())))?;
		debug!(path = %path.display(), bytes = source.len(), "loading");
		ctx.editor.evaluate(&source)?;
		Ok(FunctionResult::Success)
	})
}

pub(super) const DEFS: &[&FunctionDef] = &[&FN_setq, &FN_load];
