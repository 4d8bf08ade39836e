//! The [`Veil`] context: all process-wide focus and decoration state.

use veil_primitives::PaneId;

use crate::decorations::DecorationRegistry;
use crate::focus::{FocusChange, FocusTracker, ListenerId};
use crate::host::Host;
use crate::style_source::StyleSource;

mod lifecycle;

/// User-facing settings read by the synchronizer.
#[derive(Debug, Clone, Default)]
pub struct VeilOptions {
	/// Decorate the focused pane instead of every unfocused pane.
	pub overlay_active_pane: bool,
	/// Style applied to decorated panes.
	pub style: StyleSource,
}

/// Owns the focus state and decoration registry.
///
/// A single instance is expected per host. It starts disabled; call
/// [`Veil::enable`] to begin decorating.
#[derive(Debug)]
pub struct Veil {
	pub(crate) options: VeilOptions,
	pub(crate) tracker: FocusTracker,
	pub(crate) registry: DecorationRegistry,
	pub(crate) enabled: bool,
}

impl Veil {
	pub fn new(options: VeilOptions) -> Self {
		Self {
			options,
			tracker: FocusTracker::new(),
			registry: DecorationRegistry::new(),
			enabled: false,
		}
	}

	/// Redraw hook. Call once per redraw cycle, before rendering.
	///
	/// On a focus transition the registry is reconciled before this returns,
	/// so the frame rendered next already reflects the new focus.
	pub fn on_redraw<H: Host>(&mut self, host: &mut H, selected: Option<PaneId>) -> Option<FocusChange> {
		let change = self.tracker.on_redraw(&*host, selected)?;
		if self.enabled {
			self.reconcile_all(host);
		}
		Some(change)
	}

	pub fn options(&self) -> &VeilOptions {
		&self.options
	}

	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	pub fn tracker(&self) -> &FocusTracker {
		&self.tracker
	}

	pub fn registry(&self) -> &DecorationRegistry {
		&self.registry
	}

	pub fn active_pane(&self) -> Option<PaneId> {
		self.tracker.active_pane()
	}

	pub fn is_active(&self, pane: PaneId) -> bool {
		self.tracker.is_active(pane)
	}

	pub fn previous_active_pane(&self) -> Option<PaneId> {
		self.tracker.previous_active_pane()
	}

	/// Registers a focus-change listener; see [`FocusTracker::subscribe`].
	pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
	where
		F: FnMut(&FocusChange) + 'static,
	{
		self.tracker.subscribe(listener)
	}

	pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
		self.tracker.unsubscribe(id)
	}
}

impl Default for Veil {
	fn default() -> Self {
		Self::new(VeilOptions::default())
	}
}
