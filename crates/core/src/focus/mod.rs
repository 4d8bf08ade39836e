//! Focus tracking driven by the host's redraw cycle.
//!
//! The host reports the pane it considers selected once per redraw. The
//! [`FocusTracker`] filters out transient prompt panes and repeated reports,
//! records the transition and notifies listeners synchronously, before
//! [`FocusTracker::on_redraw`] returns.

use std::fmt;

use veil_primitives::PaneId;

use crate::host::PaneHost;


/// A recorded focus transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
	/// The newly focused pane.
	pub current: PaneId,
	/// The pane that held focus before, if any.
	pub previous: Option<PaneId>,
}

/// Handle returned by [`FocusTracker::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback invoked on every focus transition.
pub type FocusListener = Box<dyn FnMut(&FocusChange)>;

/// Mirrors the host's notion of the focused pane.
#[derive(Default)]
pub struct FocusTracker {
	current: Option<PaneId>,
	previous: Option<PaneId>,
	listeners: Vec<(ListenerId, FocusListener)>,
	next_listener: u64,
	/// Number of transitions recorded since creation.
	transitions: u64,
}

impl FocusTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Observes one redraw cycle.
	///
	/// Records a transition when `reported` is a live, non-transient pane that
	/// differs from the current one. A missing or dead pane counts as "no
	/// pane" and never clears the recorded focus.
	pub fn on_redraw<H>(&mut self, host: &H, reported: Option<PaneId>) -> Option<FocusChange>
	where
		H: PaneHost + ?Sized,
	{
		let pane = reported?;
		if self.current == Some(pane) {
			return None;
		}
		if !host.is_live(pane) {
			tracing::trace!(pane = %pane, "focus.ignore_dead");
			return None;
		}
		if host.is_transient(pane) {
			tracing::trace!(pane = %pane, "focus.ignore_transient");
			return None;
		}

		self.previous = self.current.replace(pane);
		self.transitions += 1;
		let change = FocusChange {
			current: pane,
			previous: self.previous,
		};

		tracing::debug!(
			pane = %pane,
			previous = ?change.previous,
			transitions = self.transitions,
			"focus.changed"
		);

		for (_, listener) in &mut self.listeners {
			listener(&change);
		}

		Some(change)
	}

	/// Returns the focused pane, if one has been recorded.
	///
	/// The recorded pane is kept when the host destroys it and only changes
	/// on the next live report, so it may no longer be live. Reconciliation
	/// checks liveness per pane and never decorates a dead one.
	#[inline]
	pub fn active_pane(&self) -> Option<PaneId> {
		self.current
	}

	/// Returns true if `pane` is the focused pane.
	#[inline]
	pub fn is_active(&self, pane: PaneId) -> bool {
		self.current == Some(pane)
	}

	/// Returns the pane focused before the current one.
	#[inline]
	pub fn previous_active_pane(&self) -> Option<PaneId> {
		self.previous
	}

	/// Number of transitions recorded since creation.
	pub fn transition_count(&self) -> u64 {
		self.transitions
	}

	/// Registers a listener. Listeners run in registration order.
	pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
	where
		F: FnMut(&FocusChange) + 'static,
	{
		let id = ListenerId(self.next_listener);
		self.next_listener += 1;
		self.listeners.push((id, Box::new(listener)));
		id
	}

	/// Removes a listener. Returns false if `id` was not registered.
	pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
		let before = self.listeners.len();
		self.listeners.retain(|(lid, _)| *lid != id);
		self.listeners.len() != before
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}
}

impl fmt::Debug for FocusTracker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FocusTracker")
			.field("current", &self.current)
			.field("previous", &self.previous)
			.field("listeners", &self.listeners.len())
			.field("transitions", &self.transitions)
			.finish()
	}
}
