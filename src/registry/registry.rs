//---------------------------------------------------------------------------------------------------- Use
use std::{
	collections::HashMap,
	sync::{Arc,Weak},
};

//---------------------------------------------------------------------------------------------------- Handle
/// An opaque identity for an externally-owned object.
///
/// Items that wrap some foreign identity (a row id, a native
/// pointer value, a server-side id hash) use this as their
/// interning key. Relations between items — e.g. child to parent
/// container — should be stored as a `Handle` and resolved through
/// a [`Registry`], never as a raw reference, keeping the relation
/// non-owning.
#[derive(Copy,Clone,Debug,PartialEq,Eq,PartialOrd,Ord,Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Handle(u64);

impl Handle {
	#[must_use]
	/// Create a handle from a raw id.
	pub const fn new(id: u64) -> Self {
		Self(id)
	}

	#[must_use]
	/// The raw id.
	pub const fn inner(self) -> u64 {
		self.0
	}
}

impl From<u64> for Handle {
	fn from(id: u64) -> Self {
		Self(id)
	}
}

impl std::fmt::Display for Handle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

//---------------------------------------------------------------------------------------------------- Registry
/// A lookup-or-create cache mapping a [`Handle`] to one shared wrapper.
///
/// At most one live `Arc<T>` exists per handle: repeated
/// [`get_or_insert`](Registry::get_or_insert) calls for the same
/// handle return clones of the same allocation for as long as any
/// clone is alive. The registry itself only holds [`Weak`]
/// references, so it never keeps a wrapper alive by itself — a
/// single-owner registry, not implicit global uniquing.
#[derive(Debug)]
pub struct Registry<T> {
	map: HashMap<Handle, Weak<T>>,
}

//---------------------------------------------------------------------------------------------------- Registry Impl
impl<T> Registry<T> {
	#[must_use]
	/// Create an empty registry.
	pub fn new() -> Self {
		Self { map: HashMap::new() }
	}

	/// Look up the wrapper for `handle`, creating it
	/// with `init` if it doesn't exist (or has died).
	pub fn get_or_insert<F>(&mut self, handle: Handle, init: F) -> Arc<T>
	where
		F: FnOnce() -> T,
	{
		if let Some(alive) = self.map.get(&handle).and_then(Weak::upgrade) {
			return alive;
		}

		let created = Arc::new(init());
		self.map.insert(handle, Arc::downgrade(&created));
		created
	}

	#[must_use]
	/// The live wrapper for `handle`, if any.
	pub fn get(&self, handle: Handle) -> Option<Arc<T>> {
		self.map.get(&handle).and_then(Weak::upgrade)
	}

	/// Forget `handle` entirely.
	///
	/// Live `Arc<T>` clones elsewhere are unaffected;
	/// they just can't be looked up anymore.
	pub fn remove(&mut self, handle: Handle) {
		self.map.remove(&handle);
	}

	/// Drop every entry whose wrapper has died.
	///
	/// Returns how many entries were removed.
	pub fn prune(&mut self) -> usize {
		let before = self.map.len();
		self.map.retain(|_, weak| weak.strong_count() > 0);
		before - self.map.len()
	}

	#[must_use]
	/// How many entries exist, dead or alive.
	pub fn len(&self) -> usize {
		self.map.len()
	}

	#[must_use]
	/// `len() == 0`.
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}
}

impl<T> Default for Registry<T> {
	fn default() -> Self {
		Self::new()
	}
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn get_or_insert_uniques() {
		let mut registry = Registry::<String>::new();

		let a = registry.get_or_insert(Handle::new(1), || "one".into());
		let b = registry.get_or_insert(Handle::new(1), || "unreached".into());

		// Same allocation, `init` not re-run.
		assert!(Arc::ptr_eq(&a, &b));
		assert_eq!(*b, "one");
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn dead_entries_recreate_and_prune() {
		let mut registry = Registry::<String>::new();

		let a = registry.get_or_insert(Handle::new(7), || "first".into());
		drop(a);

		// The registry holds only a weak ref, so the
		// wrapper died and lookup misses.
		assert!(registry.get(Handle::new(7)).is_none());
		assert_eq!(registry.len(), 1);

		// Lookup-or-create builds a fresh one.
		let b = registry.get_or_insert(Handle::new(7), || "second".into());
		assert_eq!(*b, "second");

		// Pruning only removes dead entries.
		assert_eq!(registry.prune(), 0);
		drop(b);
		assert_eq!(registry.prune(), 1);
		assert!(registry.is_empty());
	}

	#[test]
	fn non_owning_parent_relation() {
		struct Child {
			parent: Handle,
		}

		let mut parents  = Registry::<String>::new();
		let parent       = parents.get_or_insert(Handle::new(3), || "container".into());
		let child        = Child { parent: Handle::new(3) };

		// Resolving the key finds the parent while it's alive...
		assert_eq!(parents.get(child.parent).as_deref(), Some(&"container".to_string()));

		// ...and simply misses once it's gone, no dangling anything.
		drop(parent);
		assert!(parents.get(child.parent).is_none());
	}
}
