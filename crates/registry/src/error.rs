use thiserror::Error;

/// Errors that can occur while executing a function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
	/// Neither a function nor a macro answers to this name.
	#[error("No such command `{0}'")]
	NotFound(String),
	/// General failure with message.
	#[error("{0}")]
	Failed(String),
	/// A required argument was not provided.
	#[error("missing argument: {0}")]
	MissingArgument(&'static str),
	/// An argument was provided but invalid.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// File I/O failed.
	#[error("I/O error: {0}")]
	Io(String),
	/// The expression evaluator rejected an expression.
	#[error("evaluation failed: {0}")]
	Eval(String),
}

/// Errors raised while building a function registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// Two definitions claim the same name.
	#[error("duplicate function name `{name}'")]
	DuplicateName {
		/// The contested name.
		name: &'static str,
	},
}
