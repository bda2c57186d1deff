//! Editor configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use quill_input::MinibufferOptions;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
	/// The file is not valid TOML or has fields of the wrong type.
	#[error("parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Tunables of the command layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
	/// Milliseconds an invalid-input error stays up before editing resumes.
	pub error_pause_ms: u64,
	/// Ring the bell with minibuffer errors.
	pub bell: bool,
	/// Prefix the `M-x` prompt with the active numeric argument.
	pub show_count_in_prompt: bool,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			error_pause_ms: 2000,
			bell: true,
			show_count_in_prompt: true,
		}
	}
}

impl EditorConfig {
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&text)
	}

	/// Read-loop options derived from this config.
	pub fn minibuffer_options(&self) -> MinibufferOptions {
		MinibufferOptions {
			error_pause: Duration::from_millis(self.error_pause_ms),
			bell: self.bell,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn empty_document_gives_defaults() {
		assert_eq!(EditorConfig::from_toml_str("").expect("parses"), EditorConfig::default());
	}

	#[test]
	fn fields_override_defaults() {
		let config = EditorConfig::from_toml_str("error_pause_ms = 250\nbell = false\n").expect("parses");
		assert_eq!(config.error_pause_ms, 250);
		assert!(!config.bell);
		assert!(config.show_count_in_prompt);
		assert_eq!(config.minibuffer_options().error_pause, Duration::from_millis(250));
	}

	#[test]
	fn unknown_and_mistyped_fields_are_errors() {
		assert!(matches!(EditorConfig::from_toml_str("colour = 1"), Err(ConfigError::Parse(_))));
		assert!(matches!(EditorConfig::from_toml_str("bell = \"yes\""), Err(ConfigError::Parse(_))));
	}

	#[test]
	fn load_reads_file() {
		let mut file = tempfile::NamedTempFile::new().expect("temp file");
		writeln!(file, "show_count_in_prompt = false").expect("write");
		let config = EditorConfig::load(file.path()).expect("loads");
		assert!(!config.show_count_in_prompt);
	}

	#[test]
	fn missing_file_reports_path() {
		let err = EditorConfig::load(Path::new("/nonexistent/quill.toml")).expect_err("missing");
		assert!(matches!(err, ConfigError::Io { ref path, .. } if path == Path::new("/nonexistent/quill.toml")));
	}
}
