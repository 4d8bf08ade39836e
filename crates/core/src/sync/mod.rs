//! Reconciliation of the decoration registry against the current focus.
//!
//! For every pane the host enumerates, [`Veil::desired_style`] decides whether
//! the pane should carry a decoration and with which style. The registry is
//! then mutated to match:
//!
//! | desired | registry | action                                  |
//! |---------|----------|-----------------------------------------|
//! | none    | none     | nothing                                 |
//! | none    | some     | destroy decoration, drop entry          |
//! | style   | none     | create over full extent, apply style    |
//! | style   | some     | re-span to current extent, apply style  |
//!
//! Decorations are never recreated for a style change, which would flicker.
//! After the per-pane pass, entries for panes the host has destroyed are
//! purged.

use veil_primitives::{PaneId, Style};

use crate::decorations::Decoration;
use crate::host::{DecorationBackend, Host, PaneHost};
use crate::style_source::{Highlight, StyleContext};
use crate::veil::Veil;


/// What a reconciliation pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
	/// Decorations created for newly qualifying panes.
	pub created: usize,
	/// Existing decorations re-spanned and restyled in place.
	pub updated: usize,
	/// Decorations destroyed because their pane stopped qualifying, or by a reset.
	pub destroyed: usize,
	/// Entries dropped because their pane is no longer live.
	pub purged: usize,
}

impl ReconcileStats {
	/// Returns true if the pass created or destroyed anything.
	pub fn changed_membership(&self) -> bool {
		self.created > 0 || self.destroyed > 0 || self.purged > 0
	}
}

impl Veil {
	/// Recomputes desired state for every visible pane and reconciles.
	///
	/// Panes that still hold an entry but are no longer enumerated (e.g. their
	/// surface was hidden) are reconciled too, so their decorations go away
	/// instead of lingering until the surface returns.
	pub fn reconcile_all<H: Host>(&mut self, host: &mut H) -> ReconcileStats {
		let mut stats = ReconcileStats::default();

		let mut panes = host.visible_panes();
		for pane in self.registry.panes() {
			if host.is_live(pane) && !panes.contains(&pane) {
				panes.push(pane);
			}
		}

		for pane in panes {
			let desired = self.desired_style(&*host, pane);
			self.apply(host, pane, desired, &mut stats);
		}

		let stale = self.registry.take_stale(|pane| host.is_live(pane));
		for decoration in stale {
			tracing::trace!(pane = %decoration.pane, id = %decoration.id, "decoration.purge");
			host.delete_decoration(decoration.id);
			stats.purged += 1;
		}

		if stats.changed_membership() {
			tracing::debug!(
				created = stats.created,
				updated = stats.updated,
				destroyed = stats.destroyed,
				purged = stats.purged,
				decorations = self.registry.len(),
				active = ?self.tracker.active_pane(),
				"veil.reconcile"
			);
		}

		stats
	}

	/// Destroys every decoration, then reconciles from scratch.
	///
	/// Use after anything that invalidates previously computed styles, such as
	/// a theme change.
	pub fn reset_all<H: Host>(&mut self, host: &mut H) -> ReconcileStats {
		let destroyed = self.destroy_all(host);
		let mut stats = self.reconcile_all(host);
		stats.destroyed += destroyed;
		stats
	}

	/// Style `pane` should carry right now, or `None` for no decoration.
	///
	/// Also usable outside reconciliation, e.g. to reuse the focus-appropriate
	/// style for a status line.
	pub fn desired_style(&self, host: &dyn PaneHost, pane: PaneId) -> Option<Style> {
		if !self.enabled || !host.is_live(pane) || !host.is_visible(pane) {
			return None;
		}

		let focused = self.tracker.is_active(pane);
		let overlay_active_pane = self.options.overlay_active_pane;
		if !Highlight::for_pane(focused).applies(overlay_active_pane) {
			return None;
		}

		let ctx = StyleContext::new(host, pane, focused, overlay_active_pane);
		match self.options.style.resolve(&ctx) {
			Ok(style) => style,
			Err(error) => {
				tracing::warn!(pane = %pane, %error, "style provider failed; leaving pane undecorated");
				None
			}
		}
	}

	/// Drains the registry, destroying every decoration. Returns the count.
	pub(crate) fn destroy_all<H: DecorationBackend + ?Sized>(&mut self, host: &mut H) -> usize {
		let mut destroyed = 0;
		for decoration in self.registry.drain() {
			tracing::trace!(pane = %decoration.pane, id = %decoration.id, "decoration.destroy");
			host.delete_decoration(decoration.id);
			destroyed += 1;
		}
		destroyed
	}

	fn apply<H: Host>(&mut self, host: &mut H, pane: PaneId, desired: Option<Style>, stats: &mut ReconcileStats) {
		let Some(style) = desired else {
			if let Some(decoration) = self.registry.remove(pane) {
				tracing::trace!(pane = %pane, id = %decoration.id, "decoration.destroy");
				host.delete_decoration(decoration.id);
				stats.destroyed += 1;
			}
			return;
		};

		let extent = host.content_extent(pane);

		if let Some(existing) = self.registry.get_mut(pane) {
			host.move_decoration(existing.id, extent);
			host.style_decoration(existing.id, &style);
			existing.extent = extent;
			existing.style = style;
			stats.updated += 1;
			return;
		}

		let id = host.create_decoration(pane, extent);
		host.style_decoration(id, &style);
		self.registry.put(Decoration {
			id,
			pane,
			extent,
			style,
		});
		tracing::trace!(pane = %pane, id = %id, "decoration.create");
		stats.created += 1;
	}
}
