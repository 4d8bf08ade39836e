//! In-memory host for exercising veil without an editor.
//!
//! Enabled for unit tests and, for downstream crates, via the `test-support`
//! feature.

use std::collections::{BTreeMap, BTreeSet};

use veil_primitives::{BufferId, Color, DecorationId, Extent, PaneId, Style, SurfaceId};

use crate::host::{DecorationBackend, PaneHost};

/// Pane state tracked by [`MockHost`].
#[derive(Debug, Clone)]
pub struct MockPane {
	pub surface: SurfaceId,
	pub buffer: Option<BufferId>,
	pub extent: Extent,
	pub live: bool,
	pub transient: bool,
	pub background: Option<Color>,
}

/// A decoration as the host sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDecoration {
	pub pane: PaneId,
	pub extent: Extent,
	pub style: Option<Style>,
}

/// Backend call recorded by [`MockHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationOp {
	Create(DecorationId, PaneId),
	Move(DecorationId),
	Style(DecorationId),
	Delete(DecorationId),
}

#[derive(Debug, Default)]
pub struct MockHost {
	panes: BTreeMap<PaneId, MockPane>,
	hidden_surfaces: BTreeSet<SurfaceId>,
	decorations: BTreeMap<DecorationId, MockDecoration>,
	next_decoration: u64,
	ops: Vec<DecorationOp>,
}

impl MockHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a live pane on surface 1 showing buffer `id` with 100 characters.
	pub fn add_pane(&mut self, id: u64) -> PaneId {
		self.add_pane_on(id, 1)
	}

	/// Adds a live pane on the given surface.
	pub fn add_pane_on(&mut self, id: u64, surface: u64) -> PaneId {
		let pane = PaneId(id);
		self.panes.insert(
			pane,
			MockPane {
				surface: SurfaceId(surface),
				buffer: Some(BufferId(id)),
				extent: Extent::whole(100),
				live: true,
				transient: false,
				background: None,
			},
		);
		pane
	}

	/// Adds a transient prompt pane. Never enumerated as a visible pane.
	pub fn add_transient(&mut self, id: u64) -> PaneId {
		let pane = self.add_pane(id);
		if let Some(p) = self.panes.get_mut(&pane) {
			p.transient = true;
			p.buffer = None;
		}
		pane
	}

	/// Marks a pane destroyed without telling veil.
	pub fn kill(&mut self, pane: PaneId) {
		if let Some(p) = self.panes.get_mut(&pane) {
			p.live = false;
		}
	}

	pub fn hide_surface(&mut self, surface: u64) {
		self.hidden_surfaces.insert(SurfaceId(surface));
	}

	pub fn show_surface(&mut self, surface: u64) {
		self.hidden_surfaces.remove(&SurfaceId(surface));
	}

	pub fn set_extent(&mut self, pane: PaneId, extent: Extent) {
		if let Some(p) = self.panes.get_mut(&pane) {
			p.extent = extent;
		}
	}

	pub fn set_background(&mut self, pane: PaneId, color: Option<Color>) {
		if let Some(p) = self.panes.get_mut(&pane) {
			p.background = color;
		}
	}

	pub fn pane(&self, pane: PaneId) -> Option<&MockPane> {
		self.panes.get(&pane)
	}

	/// Returns the single host decoration bound to `pane`.
	///
	/// # Panics
	///
	/// Panics if more than one decoration is bound to `pane`.
	pub fn decoration(&self, pane: PaneId) -> Option<&MockDecoration> {
		let mut found = self.decorations.values().filter(|d| d.pane == pane);
		let first = found.next();
		assert!(found.next().is_none(), "multiple decorations bound to {pane}");
		first
	}

	/// Style of the decoration on `pane`, if decorated.
	pub fn style_of(&self, pane: PaneId) -> Option<Style> {
		self.decoration(pane).and_then(|d| d.style)
	}

	/// Panes currently carrying a decoration, in id order.
	pub fn decorated_panes(&self) -> Vec<PaneId> {
		let set: BTreeSet<PaneId> = self.decorations.values().map(|d| d.pane).collect();
		set.into_iter().collect()
	}

	pub fn decoration_count(&self) -> usize {
		self.decorations.len()
	}

	pub fn ops(&self) -> &[DecorationOp] {
		&self.ops
	}

	pub fn clear_ops(&mut self) {
		self.ops.clear();
	}

	pub fn created_count(&self) -> usize {
		self.ops
			.iter()
			.filter(|op| matches!(op, DecorationOp::Create(..)))
			.count()
	}

	pub fn deleted_count(&self) -> usize {
		self.ops
			.iter()
			.filter(|op| matches!(op, DecorationOp::Delete(..)))
			.count()
	}

	fn surface_visible(&self, pane: &MockPane) -> bool {
		!self.hidden_surfaces.contains(&pane.surface)
	}
}

impl PaneHost for MockHost {
	fn visible_panes(&self) -> Vec<PaneId> {
		self.panes
			.iter()
			.filter(|(_, p)| p.live && !p.transient && self.surface_visible(p))
			.map(|(id, _)| *id)
			.collect()
	}

	fn is_live(&self, pane: PaneId) -> bool {
		self.panes.get(&pane).is_some_and(|p| p.live)
	}

	fn is_visible(&self, pane: PaneId) -> bool {
		self.panes
			.get(&pane)
			.is_some_and(|p| self.surface_visible(p))
	}

	fn is_transient(&self, pane: PaneId) -> bool {
		self.panes.get(&pane).is_some_and(|p| p.transient)
	}

	fn content_extent(&self, pane: PaneId) -> Extent {
		self.panes.get(&pane).map_or(Extent::EMPTY, |p| p.extent)
	}

	fn buffer(&self, pane: PaneId) -> Option<BufferId> {
		self.panes.get(&pane).and_then(|p| p.buffer)
	}

	fn base_background(&self, pane: PaneId) -> Option<Color> {
		self.panes.get(&pane).and_then(|p| p.background)
	}
}

impl DecorationBackend for MockHost {
	fn create_decoration(&mut self, pane: PaneId, extent: Extent) -> DecorationId {
		self.next_decoration += 1;
		let id = DecorationId(self.next_decoration);
		self.decorations.insert(
			id,
			MockDecoration {
				pane,
				extent,
				style: None,
			},
		);
		self.ops.push(DecorationOp::Create(id, pane));
		id
	}

	fn move_decoration(&mut self, id: DecorationId, extent: Extent) {
		if let Some(d) = self.decorations.get_mut(&id) {
			d.extent = extent;
		}
		self.ops.push(DecorationOp::Move(id));
	}

	fn style_decoration(&mut self, id: DecorationId, style: &Style) {
		if let Some(d) = self.decorations.get_mut(&id) {
			d.style = Some(*style);
		}
		self.ops.push(DecorationOp::Style(id));
	}

	fn delete_decoration(&mut self, id: DecorationId) {
		self.decorations.remove(&id);
		self.ops.push(DecorationOp::Delete(id));
	}
}
