//! Name-based dispatch and the repetition protocol.

use quill_invocation::{Invocation, NumericArg};
use quill_registry::{CommandError, FunctionContext, FunctionDef, FunctionResult, KeyboardMacro, UndoBoundary};
use tracing::{Instrument, debug, trace, trace_span};

use crate::editor::Editor;

/// Runs `forward` `arg.count` times, or `backward` `-arg.count` times when the
/// count is negative and a backward action exists.
///
/// With `undo` set the whole run is bracketed by one undo-start and one
/// undo-end marker; the end marker is written even when an action fails.
/// Stops at the first failing action. A zero (or negative, without
/// `backward`) count runs nothing and succeeds.
pub fn execute_with_repetition<C>(
	target: &mut C,
	arg: NumericArg,
	forward: fn(&mut C) -> bool,
	backward: Option<fn(&mut C) -> bool>,
	undo: bool,
) -> FunctionResult
where
	C: UndoBoundary + ?Sized,
{
	let (action, times) = match backward {
		Some(backward) if arg.count < 0 => (backward, arg.count.unsigned_abs()),
		_ => (forward, u64::try_from(arg.count).unwrap_or(0)),
	};

	if undo {
		target.undo_mark_start();
	}
	let mut ran = 0;
	let mut ok = true;
	while ok && ran < times {
		ok = action(target);
		ran += 1;
	}
	if undo {
		target.undo_mark_end();
	}

	trace!(count = arg.count, explicit = arg.explicit, ran, ok, "repetition");
	FunctionResult::from_bool(ok)
}

impl Editor {
	/// Runs a function, or plays the macro of that name.
	///
	/// The function table is consulted first. Macro playback always reports
	/// success. Unknown names fail with [`CommandError::NotFound`] without
	/// running anything.
	pub async fn execute_named(&mut self, name: &str, arg: NumericArg) -> Result<FunctionResult, CommandError> {
		self.execute_named_with_args(name, arg, &[]).await
	}

	/// [`Editor::execute_named`] with an argument list for the handler.
	pub async fn execute_named_with_args(
		&mut self,
		name: &str,
		arg: NumericArg,
		args: &[String],
	) -> Result<FunctionResult, CommandError> {
		if let Some(def) = self.registry.resolve(name) {
			debug!(name, "resolved function");
			let span = trace_span!("function", name, count = arg.count, explicit = arg.explicit);
			return self.call_function(def, arg, args).instrument(span).await;
		}

		if let Some(mac) = self.macros.lookup(name) {
			debug!(name, keys = mac.keys.len(), "resolved macro");
			self.play_macro(&mac);
			return Ok(FunctionResult::Success);
		}

		debug!(name, "unresolved name");
		Err(CommandError::NotFound(name.to_owned()))
	}

	/// Plays a macro and queues the keys it produced for the next reads.
	fn play_macro(&mut self, mac: &KeyboardMacro) {
		self.macros.play(mac);
		let keys = self.macros.take_pending();
		trace!(name = %mac.name, keys = keys.len(), "macro keys queued");
		self.minibuffer.unread_keys(keys);
	}

	async fn call_function(
		&mut self,
		def: &'static FunctionDef,
		arg: NumericArg,
		args: &[String],
	) -> Result<FunctionResult, CommandError> {
		let mut ctx = FunctionContext { editor: self, arg, args };
		(def.handler)(&mut ctx).await
	}

	/// Executes an invocation, reporting errors in the minibuffer.
	///
	/// Returns [`FunctionResult::Failure`] for any error; nothing here is
	/// fatal.
	pub async fn run_invocation(&mut self, invocation: Invocation) -> FunctionResult {
		let span = trace_span!("run_invocation", invocation = %invocation.describe());
		let result = match &invocation {
			Invocation::Named { name, arg, args } => {
				self.execute_named_with_args(name, *arg, args).instrument(span).await
			}
			Invocation::Macro { name } => match self.macros.lookup(name) {
				Some(mac) => {
					self.play_macro(&mac);
					Ok(FunctionResult::Success)
				}
				None => Err(CommandError::NotFound(name.clone())),
			},
		};

		match result {
			Ok(outcome) => outcome,
			Err(error) => {
				debug!(%error, "invocation failed");
				self.minibuffer.error(error.to_string());
				FunctionResult::Failure
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[derive(Debug, Default)]
	struct Counter {
		value: i64,
		calls: usize,
		fail_on: Option<usize>,
		log: Vec<&'static str>,
	}

	impl UndoBoundary for Counter {
		fn undo_mark_start(&mut self) {
			self.log.push("start");
		}

		fn undo_mark_end(&mut self) {
			self.log.push("end");
		}
	}

	fn incr(c: &mut Counter) -> bool {
		c.calls += 1;
		c.log.push("incr");
		if c.fail_on == Some(c.calls) {
			return false;
		}
		c.value += 1;
		true
	}

	fn decr(c: &mut Counter) -> bool {
		c.calls += 1;
		c.log.push("decr");
		c.value -= 1;
		true
	}

	#[test]
	fn repeats_inside_one_undo_bracket() {
		let mut c = Counter::default();
		let result = execute_with_repetition(&mut c, NumericArg::count(3), incr, Some(decr), true);
		assert_eq!(result, FunctionResult::Success);
		assert_eq!(c.log, ["start", "incr", "incr", "incr", "end"]);
		assert_eq!(c.value, 3);
	}

	#[test]
	fn failure_stops_early_and_still_closes_bracket() {
		let mut c = Counter {
			fail_on: Some(3),
			..Counter::default()
		};
		let result = execute_with_repetition(&mut c, NumericArg::count(5), incr, None, true);
		assert_eq!(result, FunctionResult::Failure);
		assert_eq!(c.calls, 3);
		assert_eq!(c.log.last(), Some(&"end"));
		assert_eq!(c.log.iter().filter(|e| **e == "start").count(), 1);
	}

	#[test]
	fn negative_count_uses_backward_action() {
		let mut c = Counter::default();
		let result = execute_with_repetition(&mut c, NumericArg::count(-2), incr, Some(decr), false);
		assert_eq!(result, FunctionResult::Success);
		assert_eq!(c.log, ["decr", "decr"]);
		assert_eq!(c.value, -2);
	}

	#[test]
	fn negative_count_without_backward_runs_nothing() {
		let mut c = Counter::default();
		let result = execute_with_repetition(&mut c, NumericArg::count(-2), incr, None, true);
		assert_eq!(result, FunctionResult::Success);
		assert_eq!(c.log, ["start", "end"]);
	}

	#[test]
	fn zero_count_runs_nothing() {
		let mut c = Counter::default();
		let result = execute_with_repetition(&mut c, NumericArg::count(0), incr, Some(decr), false);
		assert_eq!(result, FunctionResult::Success);
		assert_eq!(c.calls, 0);
	}

	#[test]
	fn default_argument_runs_once() {
		let mut c = Counter::default();
		execute_with_repetition(&mut c, NumericArg::none(), incr, Some(decr), false);
		assert_eq!(c.value, 1);
	}
}
