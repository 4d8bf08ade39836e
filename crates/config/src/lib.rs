//! Configuration for veil.
//!
//! Configuration is written in TOML:
//!
//! ```toml
//! enabled = true
//! overlay_active_pane = false
//!
//! [style]
//! kind = "shade"
//! amount = -0.08
//! fallback = "#202020"
//! ```
//!
//! Files are layered by [`load_user_config_from_dir`]: `veil.toml` first,
//! then `veil.local.toml`, with later layers overriding earlier ones.

use std::path::Path;

use serde::Deserialize;
use veil_core::{StyleError, StyleSource, VeilOptions};
use veil_primitives::{Color, Modifier, Style};

pub mod error;
pub mod load;
pub mod parse;


pub use error::{ConfigError, ConfigWarning, Result};
pub use load::{ConfigLoadReport, load_user_config_from_dir};
pub use parse::{parse_color, parse_modifiers};

/// Parsed configuration. Every field is optional so layers can be merged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Whether the mode starts enabled. Defaults to `true`.
	pub enabled: Option<bool>,
	/// Decorate the focused pane instead of the unfocused ones.
	pub overlay_active_pane: Option<bool>,
	/// Style applied to decorated panes.
	pub style: Option<StyleConfig>,
	/// Non-fatal issues found while parsing.
	#[serde(skip)]
	pub warnings: Vec<ConfigWarning>,
}

/// The `[style]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum StyleConfig {
	/// The same style for every decorated pane.
	Fixed {
		#[serde(default)]
		background: Option<String>,
		#[serde(default)]
		foreground: Option<String>,
		#[serde(default)]
		modifiers: Vec<String>,
	},
	/// Background derived from each pane's own base background.
	Shade {
		/// Negative darkens, positive lightens.
		amount: f32,
		/// Used when the host reports no base background.
		#[serde(default)]
		fallback: Option<String>,
		#[serde(default)]
		modifiers: Vec<String>,
	},
}

impl Config {
	/// Parse a TOML configuration string.
	///
	/// Colors and modifiers are validated eagerly, so a config that parses
	/// always converts with [`to_options`](Self::to_options).
	pub fn parse(input: &str) -> Result<Self> {
		let mut config: Config = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Merge another config into this one. Values set in `other` win.
	pub fn merge(&mut self, mut other: Config) {
		if other.enabled.is_some() {
			self.enabled = other.enabled;
		}
		if other.overlay_active_pane.is_some() {
			self.overlay_active_pane = other.overlay_active_pane;
		}
		if other.style.is_some() {
			self.style = other.style;
		}
		self.warnings.append(&mut other.warnings);
	}

	pub fn enabled(&self) -> bool {
		self.enabled.unwrap_or(true)
	}

	/// Builds the core options. Unset values fall back to [`VeilOptions::default`].
	pub fn to_options(&self) -> Result<VeilOptions> {
		let defaults = VeilOptions::default();
		let style = match &self.style {
			Some(style) => style.to_source()?,
			None => defaults.style,
		};
		Ok(VeilOptions {
			overlay_active_pane: self.overlay_active_pane.unwrap_or(defaults.overlay_active_pane),
			style,
		})
	}

	fn validate(&mut self) -> Result<()> {
		let Some(style) = &mut self.style else {
			return Ok(());
		};
		match style {
			StyleConfig::Shade { amount, .. } if !(-1.0..=1.0).contains(&*amount) => {
				self.warnings.push(ConfigWarning::ShadeOutOfRange { amount: *amount });
				*amount = if amount.is_nan() { 0.0 } else { amount.clamp(-1.0, 1.0) };
			}
			_ => {}
		}
		if let StyleSource::Fixed(fixed) = style.to_source()?
			&& fixed.is_empty()
		{
			self.warnings.push(ConfigWarning::EmptyStyle);
		}
		Ok(())
	}
}

impl StyleConfig {
	/// Converts into a core style source.
	///
	/// A `shade` style resolves per pane: the pane's base background (or the
	/// fallback) shaded by `amount`. Panes with neither are left undecorated.
	pub fn to_source(&self) -> Result<StyleSource> {
		match self {
			StyleConfig::Fixed {
				background,
				foreground,
				modifiers,
			} => {
				let mut style = Style::new().add_modifier(parse_modifiers(modifiers)?);
				if let Some(bg) = background {
					style = style.bg(parse_color(bg)?);
				}
				if let Some(fg) = foreground {
					style = style.fg(parse_color(fg)?);
				}
				Ok(StyleSource::Fixed(style))
			}
			StyleConfig::Shade {
				amount,
				fallback,
				modifiers,
			} => {
				let amount = amount.clamp(-1.0, 1.0);
				let fallback = fallback.as_deref().map(parse_color).transpose()?;
				let modifiers: Modifier = parse_modifiers(modifiers)?;
				Ok(StyleSource::computed(move |ctx| {
					let base = ctx
						.base_background()
						.filter(|c| *c != Color::Reset)
						.or(fallback)
						.ok_or(StyleError::MissingBaseColor { pane: ctx.pane })?;
					Ok(Some(Style::new().bg(base.shade(amount)).add_modifier(modifiers)))
				}))
			}
		}
	}
}
