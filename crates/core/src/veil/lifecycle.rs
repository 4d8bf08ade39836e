//! Mode activation, teardown and option changes.

use crate::host::{DecorationBackend, Host};
use crate::style_source::StyleSource;
use crate::sync::ReconcileStats;
use crate::veil::{Veil, VeilOptions};

impl Veil {
	/// Turns decorating on and fully resynchronizes.
	pub fn enable<H: Host>(&mut self, host: &mut H) -> ReconcileStats {
		self.enabled = true;
		let stats = self.reset_all(host);
		tracing::info!(
			decorations = self.registry.len(),
			overlay_active_pane = self.options.overlay_active_pane,
			"veil.enable"
		);
		stats
	}

	/// Turns decorating off and destroys every decoration.
	///
	/// Focus keeps being tracked so a later [`enable`](Self::enable) starts
	/// from the correct pane.
	pub fn disable<H: DecorationBackend + ?Sized>(&mut self, host: &mut H) -> usize {
		self.enabled = false;
		let destroyed = self.destroy_all(host);
		tracing::info!(destroyed, "veil.disable");
		destroyed
	}

	/// Flips the mode. Returns the new state.
	pub fn toggle<H: Host>(&mut self, host: &mut H) -> bool {
		if self.enabled {
			self.disable(host);
		} else {
			self.enable(host);
		}
		self.enabled
	}

	/// Replaces the options. Previously computed styles are stale, so an
	/// enabled veil is fully reset.
	pub fn set_options<H: Host>(&mut self, options: VeilOptions, host: &mut H) -> Option<ReconcileStats> {
		self.options = options;
		self.enabled.then(|| self.reset_all(host))
	}

	pub fn set_overlay_active_pane<H: Host>(&mut self, overlay_active_pane: bool, host: &mut H) -> Option<ReconcileStats> {
		self.options.overlay_active_pane = overlay_active_pane;
		self.enabled.then(|| self.reset_all(host))
	}

	pub fn set_style<H: Host>(&mut self, style: StyleSource, host: &mut H) -> Option<ReconcileStats> {
		self.options.style = style;
		self.enabled.then(|| self.reset_all(host))
	}
}
