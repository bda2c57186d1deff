//! Canonical invocation types for name-based dispatch.
//!
//! Every entry point (key bindings, `M-x`, Lisp `load` files) converts its
//! request into an [`Invocation`] before handing it to the dispatcher.

/// Numeric argument ("universal argument") attached to a command.
///
/// `count` is the repeat count handed to the function. `explicit` records
/// whether the user supplied one at all, and `digits` whether it was typed as
/// digits (as opposed to a bare `C-u`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericArg {
	/// Repeat count; negative counts select the backward variant of a motion.
	pub count: i64,
	/// Whether a numeric argument was given.
	pub explicit: bool,
	/// Whether the argument was typed as digits.
	pub digits: bool,
}

impl Default for NumericArg {
	fn default() -> Self {
		Self::none()
	}
}

impl NumericArg {
	/// Count implied by a bare `C-u`.
	pub const UNIVERSAL: i64 = 4;

	/// No numeric argument: count 1, not explicit.
	pub const fn none() -> Self {
		Self {
			count: 1,
			explicit: false,
			digits: false,
		}
	}

	/// A bare `C-u`.
	pub const fn universal() -> Self {
		Self {
			count: Self::UNIVERSAL,
			explicit: true,
			digits: false,
		}
	}

	/// A digit argument such as `C-u 5` or `M-5`.
	pub const fn count(count: i64) -> Self {
		Self {
			count,
			explicit: true,
			digits: true,
		}
	}

	/// Prefix shown in front of an `M-x` prompt, if any.
	pub fn prompt_prefix(&self) -> Option<String> {
		match (self.explicit, self.digits) {
			(false, _) => None,
			(true, false) => Some("C-u ".to_string()),
			(true, true) => Some(format!("{} ", self.count)),
		}
	}
}

/// A user-invoked operation routed through the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Invocation {
	/// Execute a function by name, falling back to a macro of that name.
	Named {
		/// Function or macro name.
		name: String,
		/// Numeric argument.
		arg: NumericArg,
		/// Extra arguments (from `load`ed expressions).
		args: Vec<String>,
	},
	/// Play back a named keyboard macro without consulting the function table.
	Macro {
		/// Macro name.
		name: String,
	},
}

impl Invocation {
	/// Creates a named invocation with no numeric argument.
	pub fn named(name: impl Into<String>) -> Self {
		Self::Named {
			name: name.into(),
			arg: NumericArg::none(),
			args: Vec::new(),
		}
	}

	/// Creates a named invocation with a numeric argument.
	pub fn named_with_arg(name: impl Into<String>, arg: NumericArg) -> Self {
		Self::Named {
			name: name.into(),
			arg,
			args: Vec::new(),
		}
	}

	/// Creates a named invocation carrying an argument list.
	pub fn named_with_args(name: impl Into<String>, args: Vec<String>) -> Self {
		Self::Named {
			name: name.into(),
			arg: NumericArg::none(),
			args,
		}
	}

	/// Creates a macro playback invocation.
	pub fn macro_play(name: impl Into<String>) -> Self {
		Self::Macro { name: name.into() }
	}

	/// Name of the function or macro this invocation targets.
	pub fn name(&self) -> &str {
		match self {
			Self::Named { name, .. } | Self::Macro { name } => name,
		}
	}

	/// Short description for tracing/logging.
	pub fn describe(&self) -> String {
		match self {
			Self::Named { name, arg, args } if args.is_empty() && arg.explicit => format!("{name}x{}", arg.count),
			Self::Named { name, args, .. } if args.is_empty() => name.clone(),
			Self::Named { name, args, .. } => format!("({name} {})", args.join(" ")),
			Self::Macro { name } => format!("macro:{name}"),
		}
	}
}
