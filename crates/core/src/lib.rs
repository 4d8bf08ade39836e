//! Focus tracking and per-pane decoration reconciliation.
//!
//! Veil mirrors the host's focused pane and keeps one decoration per pane in
//! sync with it, so a host can tell the focused pane apart from the rest
//! without native focus highlighting.
//!
//! # Flow
//!
//! ```text
//! host redraw ─► FocusTracker::on_redraw ─► (transition) ─► Veil::reconcile_all
//!                                                              │
//!                                     DecorationRegistry ◄─────┘
//! ```
//!
//! Everything runs synchronously inside [`Veil::on_redraw`]; when it returns,
//! the registry and the host's decorations already reflect the new focus.
//!
//! # Example
//!
//! ```ignore
//! let mut veil = Veil::new(VeilOptions::default());
//! veil.enable(&mut host);
//!
//! // Once per redraw, before rendering:
//! veil.on_redraw(&mut host, host.selected_pane());
//! ```

pub mod decorations;
pub mod focus;
pub mod host;
pub mod style_source;
pub mod sync;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod veil;

#[cfg(test)]
mod invariants;

pub use decorations::{Decoration, DecorationRegistry};
pub use focus::{FocusChange, FocusListener, FocusTracker, ListenerId};
pub use host::{DecorationBackend, Host, PaneHost};
pub use style_source::{Highlight, StyleContext, StyleError, StyleFn, StyleSource};
pub use sync::ReconcileStats;
pub use veil::{Veil, VeilOptions};
pub use veil_primitives::{BufferId, Color, DecorationId, Extent, Modifier, PaneId, Style, SurfaceId};
