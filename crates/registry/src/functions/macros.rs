/// Defines a named function and links it into [`FUNCTIONS`](crate::FUNCTIONS).
///
/// Functions are interactive unless `interactive: false` is given.
///
/// ```ignore
/// function!(forward_char, {
///     name: "forward-char",
///     doc: "Move point right N characters (left if N is negative).",
/// }, handler: fn_forward_char);
/// ```
#[macro_export]
macro_rules! function {
	($id:ident, {
		name: $name:expr,
		$(interactive: $interactive:expr,)?
		doc: $doc:expr
		$(,)?
	}, handler: $handler:expr) => {
		$crate::paste::paste! {
			#[allow(non_upper_case_globals)]
			pub static [<FN_ $id>]: $crate::FunctionDef = $crate::FunctionDef {
				name: $name,
				interactive: $crate::__fn_opt!($({$interactive})?, true),
				doc: $doc,
				handler: $handler,
			};

			$crate::inventory::submit! { $crate::FunctionReg(&[<FN_ $id>]) }
		}
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fn_opt {
	({$value:expr}, $default:expr) => {
		$value
	};
	(, $default:expr) => {
		$default
	};
}
