//! Path expansion and compaction for file name prompts.

use std::path::{Path, PathBuf};

/// Expands `~` and makes `path` absolute, folding `.`, `..` and doubled
/// slashes. A `//` starts over from the root.
///
/// Returns `None` for `~user` forms and when the home or working directory is
/// unknown. A trailing slash is kept so directory prompts keep completing
/// inside the directory.
pub fn expand_path(path: &str) -> Option<PathBuf> {
	let joined = if path == "~" || path.starts_with("~/") {
		let home = dirs::home_dir()?;
		format!("{}{}", home.to_str()?, &path[1..])
	} else if path.starts_with('~') {
		return None;
	} else if path.starts_with('/') {
		path.to_owned()
	} else {
		let cwd = std::env::current_dir().ok()?;
		format!("{}/{}", cwd.to_str()?, path)
	};

	let restart = joined.rfind("//").map_or(0, |i| i + 1);
	let tail = &joined[restart..];

	let mut parts: Vec<&str> = Vec::new();
	for segment in tail.split('/') {
		match segment {
			"" | "." => {}
			".." => {
				parts.pop();
			}
			s => parts.push(s),
		}
	}

	let mut out = String::from("/");
	out.push_str(&parts.join("/"));
	if tail.ends_with('/') && !parts.is_empty() {
		out.push('/');
	}
	Some(PathBuf::from(out))
}

/// Replaces a leading home directory with `~/`.
pub fn compact_path(path: &Path) -> String {
	let text = path.to_string_lossy();
	if let Some(home) = dirs::home_dir()
		&& let Some(home) = home.to_str()
		&& let Some(rest) = text.strip_prefix(home)
		&& let Some(rest) = rest.strip_prefix('/')
	{
		return format!("~/{rest}");
	}
	text.into_owned()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn expanded(path: &str) -> String {
		expand_path(path).expect("expandable").to_string_lossy().into_owned()
	}

	#[test]
	fn absolute_paths_are_normalised() {
		assert_eq!(expanded("/usr/./lib/../bin"), "/usr/bin");
		assert_eq!(expanded("/a/b/../../.."), "/");
		assert_eq!(expanded("/tmp/dir/"), "/tmp/dir/");
	}

	#[test]
	fn double_slash_restarts_at_root() {
		assert_eq!(expanded("/home/me//etc/passwd"), "/etc/passwd");
	}

	#[test]
	fn relative_paths_use_working_directory() {
		let cwd = std::env::current_dir().expect("cwd");
		assert_eq!(expand_path("x.txt"), Some(cwd.join("x.txt")));
	}

	#[test]
	fn other_users_home_is_not_expanded() {
		assert_eq!(expand_path("~root/file"), None);
	}

	#[test]
	fn home_round_trips_through_compaction() {
		let Some(home) = dirs::home_dir() else {
			return;
		};
		if home == Path::new("/") {
			return;
		}
		let path = expand_path("~/notes.txt").expect("home expands");
		assert_eq!(path, home.join("notes.txt"));
		assert_eq!(compact_path(&path), "~/notes.txt");
	}

	#[test]
	fn paths_outside_home_stay_as_is() {
		assert_eq!(compact_path(Path::new("/definitely/not/home")), "/definitely/not/home");
	}
}
