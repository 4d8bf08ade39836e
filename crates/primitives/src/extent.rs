use std::ops::Range;

/// A position in pane content, measured in characters (not bytes).
pub type CharIdx = usize;

/// Half-open character span `[start, end)` of pane content.
///
/// Decorations always span the full visible content of their pane, so the
/// extent is re-read from the host on every reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
	/// First covered character (inclusive).
	pub start: CharIdx,
	/// End of the span (exclusive).
	pub end: CharIdx,
}

impl Extent {
	/// Zero-width extent at the start of the content.
	pub const EMPTY: Self = Self { start: 0, end: 0 };

	/// Creates an extent, swapping the bounds if they are reversed.
	pub fn new(start: CharIdx, end: CharIdx) -> Self {
		if start <= end {
			Self { start, end }
		} else {
			Self {
				start: end,
				end: start,
			}
		}
	}

	/// Extent covering `[0, len)`.
	pub const fn whole(len: usize) -> Self {
		Self { start: 0, end: len }
	}

	/// Zero for extents built with reversed bounds by struct literal.
	#[inline]
	pub const fn len(&self) -> usize {
		self.end.saturating_sub(self.start)
	}

	#[inline]
	pub const fn is_empty(&self) -> bool {
		self.start >= self.end
	}

	/// Returns true if `pos` falls inside the span.
	#[inline]
	pub const fn contains(&self, pos: CharIdx) -> bool {
		pos >= self.start && pos < self.end
	}
}

impl From<Range<CharIdx>> for Extent {
	fn from(range: Range<CharIdx>) -> Self {
		Self::new(range.start, range.end)
	}
}

impl From<Extent> for Range<CharIdx> {
	fn from(extent: Extent) -> Self {
		extent.start..extent.end
	}
}
