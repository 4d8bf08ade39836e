//! Collaborator traits implemented by the embedding application.
//!
//! Veil observes panes and drives decorations only through these traits. The
//! host owns pane lifecycle and rendering; veil owns the decoration registry.

use veil_primitives::{BufferId, Color, DecorationId, Extent, PaneId, Style};

/// Read access to the host's pane tree.
pub trait PaneHost {
	/// Returns the live panes on every visible surface, in display order.
	///
	/// Transient prompt panes should not be included. Called fresh on every
	/// reconciliation; veil does not cache the result.
	fn visible_panes(&self) -> Vec<PaneId>;

	/// Returns true if the host has not destroyed `pane`.
	fn is_live(&self, pane: PaneId) -> bool;

	/// Returns true if the surface containing `pane` is shown to the user.
	fn is_visible(&self, pane: PaneId) -> bool;

	/// Returns true for short-lived focus targets such as a command prompt.
	fn is_transient(&self, pane: PaneId) -> bool;

	/// Returns the full extent of the content currently displayed in `pane`.
	fn content_extent(&self, pane: PaneId) -> Extent;

	/// Returns the buffer displayed in `pane`, if any.
	fn buffer(&self, pane: PaneId) -> Option<BufferId>;

	/// Returns the resolved background color of `pane`'s content.
	///
	/// Computed style providers use this to derive shades relative to the
	/// pane's theme. Hosts without per-pane theming may keep the default.
	fn base_background(&self, pane: PaneId) -> Option<Color> {
		let _ = pane;
		None
	}
}

/// Host-side decoration operations.
///
/// Every handle returned by [`create_decoration`](Self::create_decoration) is
/// eventually passed to [`delete_decoration`](Self::delete_decoration) exactly
/// once.
pub trait DecorationBackend {
	/// Creates a decoration bound to `pane` covering `extent`.
	fn create_decoration(&mut self, pane: PaneId, extent: Extent) -> DecorationId;

	/// Moves an existing decoration to cover `extent`.
	fn move_decoration(&mut self, id: DecorationId, extent: Extent);

	/// Applies `style` to an existing decoration. Must be idempotent.
	fn style_decoration(&mut self, id: DecorationId, style: &Style);

	/// Destroys a decoration.
	fn delete_decoration(&mut self, id: DecorationId);
}

/// Everything the synchronizer needs from the embedding application.
pub trait Host: PaneHost + DecorationBackend {}

impl<T: PaneHost + DecorationBackend + ?Sized> Host for T {}
