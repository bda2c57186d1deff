//! Expression evaluator collaborator.
//!
//! `setq` and `load` hand expressions to an [`Evaluator`]; the dispatcher has
//! no interpreter of its own. [`LiteralEvaluator`] understands just enough
//! (literals and variable references) to make those functions usable without
//! a full Lisp.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors reported by an evaluator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
	/// The expression could not be parsed.
	#[error("invalid expression: {0}")]
	Syntax(String),
	/// A symbol has no value.
	#[error("symbol's value as variable is void: {0}")]
	Unbound(String),
}

/// Evaluates expressions and owns variable bindings.
pub trait Evaluator {
	/// Evaluates `expression` and returns its printed value.
	fn evaluate(&mut self, expression: &str) -> Result<String, EvalError>;
	/// Binds `name` to an already-evaluated value.
	fn set_variable(&mut self, name: &str, value: &str);
	/// Current value of `name`.
	fn variable(&self, name: &str) -> Option<String>;
}

/// Evaluator for integers, strings, `t`/`nil` and variable references.
///
/// Multi-line input (a loaded file) is evaluated form by form, one per
/// non-blank line not starting with `;`; the last value is returned.
#[derive(Debug, Clone, Default)]
pub struct LiteralEvaluator {
	variables: FxHashMap<String, String>,
}

impl LiteralEvaluator {
	pub fn new() -> Self {
		Self::default()
	}

	fn evaluate_form(&self, form: &str) -> Result<String, EvalError> {
		if form.starts_with('"') {
			return match form.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
				Some(_) if form.len() >= 2 => Ok(form.to_owned()),
				_ => Err(EvalError::Syntax(form.to_owned())),
			};
		}
		if form == "t" || form == "nil" || form.parse::<i64>().is_ok() {
			return Ok(form.to_owned());
		}
		if form.chars().any(|c| c.is_whitespace() || c == '(' || c == ')') {
			return Err(EvalError::Syntax(form.to_owned()));
		}
		self.variables.get(form).cloned().ok_or_else(|| EvalError::Unbound(form.to_owned()))
	}
}

impl Evaluator for LiteralEvaluator {
	fn evaluate(&mut self, expression: &str) -> Result<String, EvalError> {
		let mut last = "nil".to_owned();
		for form in expression.lines().map(str::trim).filter(|l| !l.is_empty() && !l.starts_with(';')) {
			last = self.evaluate_form(form)?;
		}
		Ok(last)
	}

	fn set_variable(&mut self, name: &str, value: &str) {
		self.variables.insert(name.to_owned(), value.to_owned());
	}

	fn variable(&self, name: &str) -> Option<String> {
		self.variables.get(name).cloned()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn literals_evaluate_to_themselves() {
		let mut eval = LiteralEvaluator::new();
		assert_eq!(eval.evaluate("42").as_deref(), Ok("42"));
		assert_eq!(eval.evaluate("\"hi there\"").as_deref(), Ok("\"hi there\""));
		assert_eq!(eval.evaluate("nil").as_deref(), Ok("nil"));
	}

	#[test]
	fn symbols_read_variables() {
		let mut eval = LiteralEvaluator::new();
		assert_eq!(eval.evaluate("fill-column"), Err(EvalError::Unbound("fill-column".into())));
		eval.set_variable("fill-column", "70");
		assert_eq!(eval.evaluate("fill-column").as_deref(), Ok("70"));
	}

	#[test]
	fn malformed_forms_are_rejected() {
		let mut eval = LiteralEvaluator::new();
		assert!(matches!(eval.evaluate("(car x)"), Err(EvalError::Syntax(_))));
		assert!(matches!(eval.evaluate("\""), Err(EvalError::Syntax(_))));
	}

	#[test]
	fn multi_line_input_returns_last_value() {
		let mut eval = LiteralEvaluator::new();
		assert_eq!(eval.evaluate("; comment\n1\n\n2\n").as_deref(), Ok("2"));
		assert_eq!(eval.evaluate("").as_deref(), Ok("nil"));
	}
}
