//! Error and warning types for configuration parsing.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A color value could not be parsed.
	#[error("invalid color format: {0}")]
	InvalidColor(String),

	/// A style modifier could not be parsed.
	#[error("invalid modifier: {0}")]
	InvalidModifier(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal issue found while parsing.
///
/// Collected in [`Config::warnings`](crate::Config::warnings) and reported to
/// the user; the configuration still loads.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
	/// A shade amount outside `[-1, 1]` was clamped.
	ShadeOutOfRange {
		/// The value as written.
		amount: f32,
	},
	/// A fixed style sets nothing, so no pane will ever be decorated.
	EmptyStyle,
}

impl fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigWarning::ShadeOutOfRange { amount } => {
				write!(f, "shade amount {amount} is outside [-1, 1] and was clamped")
			}
			ConfigWarning::EmptyStyle => {
				f.write_str("fixed style sets no colors or modifiers; panes will not be decorated")
			}
		}
	}
}
