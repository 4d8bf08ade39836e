//! Persistent pane → decoration mapping.
//!
//! Pure storage. The synchronizer in [`crate::sync`] is the only mutator and
//! owns the policy for when entries are created or dropped.

use rustc_hash::FxHashMap as HashMap;
use veil_primitives::{DecorationId, Extent, PaneId, Style};

#[cfg(test)]
mod tests;

/// A decoration veil created and still owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
	/// Host handle for the decoration.
	pub id: DecorationId,
	/// Pane the decoration is bound to.
	pub pane: PaneId,
	/// Extent as of the last reconciliation.
	pub extent: Extent,
	/// Style as of the last reconciliation.
	pub style: Style,
}

/// Registry of decorations keyed by pane. Holds at most one entry per pane.
#[derive(Debug, Default)]
pub struct DecorationRegistry {
	entries: HashMap<PaneId, Decoration>,
}

impl DecorationRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, pane: PaneId) -> Option<&Decoration> {
		self.entries.get(&pane)
	}

	pub(crate) fn get_mut(&mut self, pane: PaneId) -> Option<&mut Decoration> {
		self.entries.get_mut(&pane)
	}

	/// Stores `decoration` under its pane, returning any entry it replaced.
	pub(crate) fn put(&mut self, decoration: Decoration) -> Option<Decoration> {
		self.entries.insert(decoration.pane, decoration)
	}

	pub(crate) fn remove(&mut self, pane: PaneId) -> Option<Decoration> {
		self.entries.remove(&pane)
	}

	pub fn contains(&self, pane: PaneId) -> bool {
		self.entries.contains_key(&pane)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates entries in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = &Decoration> {
		self.entries.values()
	}

	/// Calls `f` for every `(pane, decoration)` pair.
	pub fn for_each(&self, mut f: impl FnMut(PaneId, &Decoration)) {
		for (pane, decoration) in &self.entries {
			f(*pane, decoration);
		}
	}

	/// Returns the panes with an entry, sorted by id.
	pub fn panes(&self) -> Vec<PaneId> {
		let mut panes: Vec<_> = self.entries.keys().copied().collect();
		panes.sort_unstable();
		panes
	}

	/// Removes and returns every entry.
	pub(crate) fn drain(&mut self) -> impl Iterator<Item = Decoration> + '_ {
		self.entries.drain().map(|(_, d)| d)
	}

	/// Removes and returns the entries whose pane fails `is_live`.
	pub(crate) fn take_stale(&mut self, mut is_live: impl FnMut(PaneId) -> bool) -> Vec<Decoration> {
		let stale: Vec<PaneId> = self
			.entries
			.keys()
			.copied()
			.filter(|pane| !is_live(*pane))
			.collect();
		stale
			.into_iter()
			.filter_map(|pane| self.entries.remove(&pane))
			.collect()
	}
}
