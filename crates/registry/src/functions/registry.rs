use rustc_hash::FxHashMap;
use tracing::warn;

use super::{FunctionDef, FunctionReg};
use crate::error::RegistryError;
use crate::kbd_macro::MacroStore;

/// Immutable name → function table.
///
/// Lookup is exact and case-sensitive. Entries are kept sorted by name so
/// iteration order (and therefore completion order) is deterministic.
#[derive(Debug)]
pub struct FunctionRegistry {
	label: &'static str,
	entries: Vec<&'static FunctionDef>,
	by_name: FxHashMap<&'static str, usize>,
}

impl FunctionRegistry {
	/// Starts building a registry.
	pub fn builder(label: &'static str) -> FunctionRegistryBuilder {
		FunctionRegistryBuilder::new(label)
	}

	/// Looks a function up by exact name.
	pub fn resolve(&self, name: &str) -> Option<&'static FunctionDef> {
		self.by_name.get(name).map(|&idx| self.entries[idx])
	}

	/// Returns the documentation string of a function.
	pub fn doc(&self, name: &str) -> Option<&'static str> {
		self.resolve(name).map(|def| def.doc)
	}

	/// Reverse lookup: the name under which `def` is registered.
	pub fn name_of(&self, def: &FunctionDef) -> Option<&'static str> {
		self.entries
			.iter()
			.find(|entry| std::ptr::eq(**entry, def))
			.map(|entry| entry.name)
	}

	/// All functions, sorted by name.
	pub fn iter(&self) -> impl Iterator<Item = &'static FunctionDef> + '_ {
		self.entries.iter().copied()
	}

	/// Names of functions callable from `M-x`, sorted.
	pub fn interactive_names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.iter().filter(|def| def.interactive).map(|def| def.name)
	}

	/// Candidate names for extended-command completion.
	///
	/// Interactive function names merged with the current macro names into one
	/// sorted list. A macro that shares a function's name shows up twice.
	pub fn list_interactive_names(&self, macros: &dyn MacroStore) -> Vec<String> {
		let mut names: Vec<String> = self.interactive_names().map(str::to_string).collect();
		names.extend(macros.names());
		names.sort();
		names
	}

	/// Number of registered functions.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true when no function is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Collects definitions and freezes them into a [`FunctionRegistry`].
pub struct FunctionRegistryBuilder {
	label: &'static str,
	defs: Vec<&'static FunctionDef>,
}

impl FunctionRegistryBuilder {
	/// Creates an empty builder.
	pub fn new(label: &'static str) -> Self {
		Self { label, defs: Vec::new() }
	}

	/// Adds one definition.
	pub fn register(mut self, def: &'static FunctionDef) -> Self {
		self.defs.push(def);
		self
	}

	/// Adds every definition submitted through [`function!`](crate::function).
	pub fn extend_inventory(mut self) -> Self {
		self.defs.extend(inventory::iter::<FunctionReg>.into_iter().map(|reg| reg.0));
		self
	}

	/// Builds the registry, failing on the first duplicate name.
	pub fn try_build(self) -> Result<FunctionRegistry, RegistryError> {
		let (registry, duplicates) = self.freeze();
		match duplicates.first() {
			Some(&name) => Err(RegistryError::DuplicateName { name }),
			None => Ok(registry),
		}
	}

	/// Builds the registry, keeping the first definition of a duplicated name.
	pub fn build(self) -> FunctionRegistry {
		let (registry, duplicates) = self.freeze();
		for name in duplicates {
			warn!(registry = registry.label, name, "duplicate function name; keeping first definition");
		}
		registry
	}

	fn freeze(mut self) -> (FunctionRegistry, Vec<&'static str>) {
		// Stable sort keeps registration order among equal names.
		self.defs.sort_by(|a, b| a.name.cmp(b.name));

		let mut entries: Vec<&'static FunctionDef> = Vec::with_capacity(self.defs.len());
		let mut by_name = FxHashMap::default();
		let mut duplicates = Vec::new();
		for def in self.defs {
			if by_name.contains_key(def.name) {
				duplicates.push(def.name);
				continue;
			}
			by_name.insert(def.name, entries.len());
			entries.push(def);
		}

		let registry = FunctionRegistry {
			label: self.label,
			entries,
			by_name,
		};
		(registry, duplicates)
	}
}
