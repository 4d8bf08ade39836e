//! Value parsing shared by the config schema.

use veil_primitives::{Color, Modifier};

use crate::error::{ConfigError, Result};

/// Parse a color value from a string.
///
/// Supports hex (`#RGB`, `#RRGGBB`), a few named colors, and `reset`/`default`.
pub fn parse_color(value: &str) -> Result<Color> {
	value
		.parse::<Color>()
		.map_err(|e| ConfigError::InvalidColor(e.0))
}

/// Parse a list of modifier names into a combined [`Modifier`].
pub fn parse_modifiers<S: AsRef<str>>(names: &[S]) -> Result<Modifier> {
	let mut modifiers = Modifier::empty();

	for name in names {
		let name = name.as_ref();
		let normalized = name.to_lowercase().replace(['-', '_'], "");
		modifiers |= match normalized.as_str() {
			"bold" => Modifier::BOLD,
			"dim" => Modifier::DIM,
			"italic" => Modifier::ITALIC,
			"underlined" | "underline" => Modifier::UNDERLINED,
			"reversed" | "reverse" => Modifier::REVERSED,
			"crossedout" | "strikethrough" => Modifier::CROSSED_OUT,
			_ => return Err(ConfigError::InvalidModifier(name.to_string())),
		};
	}

	Ok(modifiers)
}
