//! Colors, text modifiers and the style applied to a decoration.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;


/// A terminal or GUI color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
	/// The host's default color for the slot.
	#[default]
	Reset,
	/// A 24-bit color.
	Rgb(u8, u8, u8),
}

impl Color {
	pub const BLACK: Self = Self::Rgb(0, 0, 0);
	pub const WHITE: Self = Self::Rgb(255, 255, 255);

	/// Returns the RGB components, or `None` for [`Color::Reset`].
	pub const fn to_rgb(self) -> Option<(u8, u8, u8)> {
		match self {
			Self::Reset => None,
			Self::Rgb(r, g, b) => Some((r, g, b)),
		}
	}

	/// Blends `self` over `other` (0.0 = `other`, 1.0 = `self`).
	///
	/// `Reset` has no components to mix, so blending with it picks whichever
	/// side dominates.
	pub fn blend(self, other: Color, alpha: f32) -> Color {
		let alpha = alpha.clamp(0.0, 1.0);
		match (self.to_rgb(), other.to_rgb()) {
			(Some((r1, g1, b1)), Some((r2, g2, b2))) => Color::Rgb(
				lerp_u8(r2, r1, alpha),
				lerp_u8(g2, g1, alpha),
				lerp_u8(b2, b1, alpha),
			),
			_ if alpha >= 0.5 => self,
			_ => other,
		}
	}

	/// Moves the color `amount` of the way toward white.
	pub fn lighten(self, amount: f32) -> Color {
		Color::WHITE.blend(self, amount)
	}

	/// Moves the color `amount` of the way toward black.
	pub fn darken(self, amount: f32) -> Color {
		Color::BLACK.blend(self, amount)
	}

	/// Lightens for positive `amount`, darkens for negative.
	pub fn shade(self, amount: f32) -> Color {
		if amount >= 0.0 {
			self.lighten(amount)
		} else {
			self.darken(-amount)
		}
	}
}

fn is_hex(s: &str) -> bool {
	s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn lerp_u8(from: u8, to: u8, t: f32) -> u8 {
	let v = from as f32 + (to as f32 - from as f32) * t;
	v.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Color::Reset => f.write_str("reset"),
			Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
		}
	}
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color: {0}")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
	type Err = ColorParseError;

	/// Parses `#RGB`, `#RRGGBB`, a small set of named colors, or `reset`/`default`.
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let value = value.trim();
		let err = || ColorParseError(value.to_string());

		if let Some(hex) = value.strip_prefix('#') {
			let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
			return match hex.len() {
				3 if is_hex(hex) => Ok(Color::Rgb(
					channel(&hex[0..1].repeat(2))?,
					channel(&hex[1..2].repeat(2))?,
					channel(&hex[2..3].repeat(2))?,
				)),
				6 if is_hex(hex) => Ok(Color::Rgb(
					channel(&hex[0..2])?,
					channel(&hex[2..4])?,
					channel(&hex[4..6])?,
				)),
				_ => Err(err()),
			};
		}

		let normalized = value.to_lowercase().replace(['-', '_'], "");
		match normalized.as_str() {
			"reset" | "default" => Ok(Color::Reset),
			"black" => Ok(Color::BLACK),
			"white" => Ok(Color::WHITE),
			"gray" | "grey" => Ok(Color::Rgb(128, 128, 128)),
			"darkgray" | "darkgrey" => Ok(Color::Rgb(64, 64, 64)),
			_ => Err(err()),
		}
	}
}

bitflags! {
	/// Text modifiers carried by a decoration style.
	#[derive(Default, Clone, Copy, Debug, Eq, PartialEq, Hash)]
	pub struct Modifier: u16 {
		const BOLD        = 0b0000_0001;
		const DIM         = 0b0000_0010;
		const ITALIC      = 0b0000_0100;
		const UNDERLINED  = 0b0000_1000;
		const REVERSED    = 0b0001_0000;
		const CROSSED_OUT = 0b0010_0000;
	}
}

/// Visual attributes applied to a decoration.
///
/// Unset fields leave the host's underlying face untouched. A style with no
/// fields set is considered empty and never produces a decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
	pub fg: Option<Color>,
	pub bg: Option<Color>,
	pub add_modifier: Modifier,
}

impl Style {
	pub const fn new() -> Self {
		Self {
			fg: None,
			bg: None,
			add_modifier: Modifier::empty(),
		}
	}

	pub const fn fg(mut self, color: Color) -> Self {
		self.fg = Some(color);
		self
	}

	pub const fn bg(mut self, color: Color) -> Self {
		self.bg = Some(color);
		self
	}

	pub const fn add_modifier(mut self, modifier: Modifier) -> Self {
		self.add_modifier = self.add_modifier.union(modifier);
		self
	}

	/// Returns true if applying this style would change nothing.
	pub fn is_empty(&self) -> bool {
		self.fg.is_none() && self.bg.is_none() && self.add_modifier.is_empty()
	}

	/// Overlays `other` on top of `self`; fields set in `other` win.
	pub fn patch(mut self, other: Style) -> Style {
		self.fg = other.fg.or(self.fg);
		self.bg = other.bg.or(self.bg);
		self.add_modifier |= other.add_modifier;
		self
	}
}
