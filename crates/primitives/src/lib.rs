//! Core types shared across veil: host identifiers, content extents and styles.

/// Character extents covered by a decoration.
pub mod extent;
/// Identifier types for host-issued entities.
pub mod ids;
/// Colors, modifiers and decoration styles.
pub mod style;

pub use extent::{CharIdx, Extent};
pub use ids::{BufferId, DecorationId, PaneId, SurfaceId};
pub use style::{Color, ColorParseError, Modifier, Style};
