//! Reads `veil.toml` and `veil.local.toml` from a config directory.

use std::path::{Path, PathBuf};

use crate::{Config, ConfigWarning};

/// Layers read by [`load_user_config_from_dir`], lowest precedence first.
pub const CONFIG_LAYERS: [&str; 2] = ["veil.toml", "veil.local.toml"];

/// Outcome of reading every layer in a config directory.
///
/// Problems are collected per file rather than aborting the load, so a
/// broken `veil.local.toml` still leaves the settings from `veil.toml` in
/// effect.
#[derive(Debug, Default)]
pub struct ConfigLoadReport {
	/// `None` when no layer exists or none parsed.
	pub config: Option<Config>,
	/// Clamped or suspicious values, with the file they came from.
	pub warnings: Vec<(PathBuf, ConfigWarning)>,
	/// Layers that could not be read or parsed, with the rendered error.
	pub errors: Vec<(PathBuf, String)>,
}

/// Builds the effective config from the layers in `config_dir`.
///
/// `veil.local.toml` overrides whatever `veil.toml` sets; keys it leaves
/// out keep the base value. An absent file is not an error.
pub fn load_user_config_from_dir(config_dir: &Path) -> ConfigLoadReport {
	let mut report = ConfigLoadReport::default();
	let mut merged = Config::default();
	let mut found_any = false;

	for filename in CONFIG_LAYERS {
		let path = config_dir.join(filename);
		if let Some(layer) = read_layer(&mut report, &path) {
			found_any |= fold_layer(&mut report, &mut merged, &path, layer);
		}
	}

	if found_any {
		report.config = Some(merged);
	}

	tracing::debug!(
		dir = %config_dir.display(),
		loaded = found_any,
		warnings = report.warnings.len(),
		errors = report.errors.len(),
		"config.load"
	);
	report
}

/// Parses one layer. Returns `None` if the file is absent or unreadable.
fn read_layer(report: &mut ConfigLoadReport, path: &Path) -> Option<crate::Result<Config>> {
	if !path.exists() {
		return None;
	}
	match std::fs::read_to_string(path) {
		Ok(content) => Some(Config::parse(&content)),
		Err(error) => {
			tracing::warn!(path = %path.display(), %error, "config.read_failed");
			report.errors.push((path.to_path_buf(), error.to_string()));
			None
		}
	}
}

/// Merges a parsed layer over `merged`. Returns false if the layer failed.
fn fold_layer(report: &mut ConfigLoadReport, merged: &mut Config, path: &Path, layer: crate::Result<Config>) -> bool {
	let mut config = match layer {
		Ok(config) => config,
		Err(error) => {
			tracing::warn!(path = %path.display(), %error, "config.error");
			report.errors.push((path.to_path_buf(), error.to_string()));
			return false;
		}
	};
	for warning in config.warnings.drain(..) {
		tracing::warn!(path = %path.display(), %warning, "config.warning");
		report.warnings.push((path.to_path_buf(), warning));
	}
	merged.merge(config);
	true
}
