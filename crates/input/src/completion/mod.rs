//! Prefix completion over a candidate list.
//!
//! A [`Completion`] is created per read and dropped with it. In filename mode
//! the candidates are the entries of the directory named by the typed text,
//! and only the last path segment takes part in matching.

use std::path::Path;

use tracing::trace;

use crate::path::expand_path;

/// Result of [`Completion::try_complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
	/// Exactly one candidate matches; carries its full text.
	Matched(String),
	/// Several candidates match and share a longer prefix than was typed;
	/// carries that prefix.
	Partial(String),
	/// Several candidates match and nothing can be added to the typed text.
	NonUnique,
	/// No candidate starts with the typed text.
	NotMatched,
}

/// Candidate set for one minibuffer read.
#[derive(Debug, Clone, Default)]
pub struct Completion {
	candidates: Vec<String>,
	filename: bool,
}

impl Completion {
	/// Creates a completion over `candidates`, kept sorted.
	///
	/// Equal candidates coming from different sources are all kept so the
	/// candidate list shows them; matching treats them as one.
	pub fn new<I, S>(candidates: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
		candidates.sort();
		Self {
			candidates,
			filename: false,
		}
	}

	/// Creates an empty completion in filename mode.
	pub fn filename() -> Self {
		Self {
			candidates: Vec::new(),
			filename: true,
		}
	}

	/// Whether candidates are directory entries.
	pub fn is_filename(&self) -> bool {
		self.filename
	}

	/// All current candidates, sorted.
	pub fn candidates(&self) -> &[String] {
		&self.candidates
	}

	/// Candidates starting with the completable part of `typed`.
	pub fn matches(&self, typed: &str) -> Vec<&str> {
		let (_, stem) = self.split(typed);
		self.candidates
			.iter()
			.map(String::as_str)
			.filter(|c| c.starts_with(stem))
			.collect()
	}

	/// Exact membership test on the full candidate text.
	pub fn is_member(&self, text: &str) -> bool {
		self.candidates.iter().any(|c| c == text)
	}

	/// Completes `typed` against the candidates.
	///
	/// In filename mode the directory part of `typed` is listed first.
	pub fn try_complete(&mut self, typed: &str) -> CompletionOutcome {
		if self.filename {
			self.candidates = list_directory(self.split(typed).0);
		}

		let (dir, stem) = self.split(typed);
		let mut hits: Vec<&str> = self
			.candidates
			.iter()
			.map(String::as_str)
			.filter(|c| c.starts_with(stem))
			.collect();
		hits.dedup();

		let outcome = match hits.as_slice() {
			[] => CompletionOutcome::NotMatched,
			[only] => CompletionOutcome::Matched(format!("{dir}{only}")),
			many => {
				let common = longest_common_prefix(many);
				if common.len() > stem.len() {
					CompletionOutcome::Partial(format!("{dir}{common}"))
				} else {
					CompletionOutcome::NonUnique
				}
			}
		};
		trace!(typed, ?outcome, "completion");
		outcome
	}

	/// Splits `typed` into the fixed directory part and the completable stem.
	fn split<'t>(&self, typed: &'t str) -> (&'t str, &'t str) {
		if !self.filename {
			return ("", typed);
		}
		match typed.rfind('/') {
			Some(idx) => typed.split_at(idx + 1),
			None => ("", typed),
		}
	}
}

/// Longest prefix shared by every string in `items`.
pub fn longest_common_prefix<'s>(items: &[&'s str]) -> &'s str {
	let Some((first, rest)) = items.split_first() else {
		return "";
	};
	let mut end = first.len();
	for item in rest {
		end = first
			.char_indices()
			.zip(item.chars())
			.take_while(|((_, a), b)| a == b)
			.last()
			.map_or(0, |((idx, a), _)| idx + a.len_utf8())
			.min(end);
	}
	&first[..end]
}

/// Entry names of `dir` (the typed directory prefix), directories suffixed with `/`.
fn list_directory(dir: &str) -> Vec<String> {
	let target = if dir.is_empty() { "." } else { dir };
	let Some(path) = expand_path(target) else {
		return Vec::new();
	};
	let Ok(read) = std::fs::read_dir(Path::new(&path)) else {
		return Vec::new();
	};

	let mut names: Vec<String> = read
		.filter_map(Result::ok)
		.filter_map(|entry| {
			let mut name = entry.file_name().into_string().ok()?;
			if entry.file_type().is_ok_and(|t| t.is_dir()) {
				name.push('/');
			}
			Some(name)
		})
		.collect();
	names.sort();
	names
}
