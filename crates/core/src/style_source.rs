//! Style providers: where a decoration's style comes from.

use std::fmt;
use std::sync::Arc;

use veil_primitives::{BufferId, Color, Extent, Modifier, PaneId, Style};

use crate::host::PaneHost;

/// Failure raised by a computed style provider.
///
/// Never aborts a reconciliation pass; the affected pane is left undecorated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
	/// The provider needs the pane's base background and the host has none.
	#[error("no base background color for {pane}")]
	MissingBaseColor { pane: PaneId },
	/// Any other provider-specific failure.
	#[error("style provider failed for {pane}: {reason}")]
	Provider { pane: PaneId, reason: String },
}

/// Signature of a computed style provider.
pub type StyleFn = dyn Fn(&StyleContext<'_>) -> Result<Option<Style>, StyleError> + Send + Sync;

/// The configured style, either fixed or computed per pane at render time.
#[derive(Clone)]
pub enum StyleSource {
	/// Used verbatim for every decorated pane.
	Fixed(Style),
	/// Invoked with the target pane's content as context.
	Computed(Arc<StyleFn>),
}

impl StyleSource {
	pub fn computed<F>(f: F) -> Self
	where
		F: Fn(&StyleContext<'_>) -> Result<Option<Style>, StyleError> + Send + Sync + 'static,
	{
		Self::Computed(Arc::new(f))
	}

	/// Resolves to a concrete style. Empty styles count as "no decoration".
	pub fn resolve(&self, ctx: &StyleContext<'_>) -> Result<Option<Style>, StyleError> {
		let style = match self {
			StyleSource::Fixed(style) => Some(*style),
			StyleSource::Computed(f) => f(ctx)?,
		};
		Ok(style.filter(|s| !s.is_empty()))
	}
}

impl Default for StyleSource {
	fn default() -> Self {
		StyleSource::Fixed(Style::new().add_modifier(Modifier::DIM))
	}
}

impl From<Style> for StyleSource {
	fn from(style: Style) -> Self {
		StyleSource::Fixed(style)
	}
}

impl fmt::Debug for StyleSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			StyleSource::Fixed(style) => f.debug_tuple("Fixed").field(style).finish(),
			StyleSource::Computed(_) => f.write_str("Computed(..)"),
		}
	}
}

/// Which highlight branch a pane falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
	/// The focused pane.
	Active,
	/// Every other visible pane.
	Inactive,
}

impl Highlight {
	pub fn for_pane(focused: bool) -> Self {
		if focused {
			Highlight::Active
		} else {
			Highlight::Inactive
		}
	}

	/// Returns true if this branch yields the configured style.
	///
	/// With `overlay_active_pane` only the focused pane is decorated;
	/// without it every unfocused pane is.
	pub fn applies(self, overlay_active_pane: bool) -> bool {
		match self {
			Highlight::Active => overlay_active_pane,
			Highlight::Inactive => !overlay_active_pane,
		}
	}
}

/// Context handed to computed style providers.
///
/// Stands in for "the pane's content made current": everything a provider
/// may want to know about the target pane is reachable from here.
pub struct StyleContext<'a> {
	host: &'a dyn PaneHost,
	pub pane: PaneId,
	pub buffer: Option<BufferId>,
	pub focused: bool,
	pub overlay_active_pane: bool,
}

impl<'a> StyleContext<'a> {
	pub fn new(host: &'a dyn PaneHost, pane: PaneId, focused: bool, overlay_active_pane: bool) -> Self {
		Self {
			host,
			pane,
			buffer: host.buffer(pane),
			focused,
			overlay_active_pane,
		}
	}

	pub fn host(&self) -> &'a dyn PaneHost {
		self.host
	}

	/// Background color of the pane's content, as reported by the host.
	pub fn base_background(&self) -> Option<Color> {
		self.host.base_background(self.pane)
	}

	pub fn extent(&self) -> Extent {
		self.host.content_extent(self.pane)
	}

	/// Convenience for providers that fail on a missing base color.
	pub fn require_base_background(&self) -> Result<Color, StyleError> {
		self.base_background()
			.ok_or(StyleError::MissingBaseColor { pane: self.pane })
	}
}
