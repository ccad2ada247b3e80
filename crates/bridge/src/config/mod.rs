//! Bridge configuration, loaded from TOML.
//!
//! ```toml
//! click_suppression = "per_button"
//! standard_mode_key = "Num1"
//! vim_mode_key = "Num2"
//! ```

mod error;

use std::path::Path;

pub use error::{ConfigError, Result};
use serde::Deserialize;

use crate::host::HostKey;
use crate::tables;

/// Which host flags a consumed mouse button event clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickSuppression {
	/// Every consumed press or release, on either button, clears the left
	/// button's click flag.
	#[default]
	Legacy,
	/// A consumed press clears that button's click flag; a consumed release
	/// clears that button's release flag.
	PerButton,
}

/// Host keys that switch the global mode when chorded with Ctrl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeKeys {
	pub standard: HostKey,
	pub vim: HostKey,
}

impl Default for ModeKeys {
	fn default() -> Self {
		Self {
			standard: HostKey::Num1,
			vim: HostKey::Num2,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
	pub click_suppression: ClickSuppression,
	pub standard_mode_key: HostKey,
	pub vim_mode_key: HostKey,
}

impl Default for BridgeConfig {
	fn default() -> Self {
		let keys = ModeKeys::default();
		Self {
			click_suppression: ClickSuppression::default(),
			standard_mode_key: keys.standard,
			vim_mode_key: keys.vim,
		}
	}
}

impl BridgeConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates the file at `path`.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}

	pub fn validate(&self) -> Result<()> {
		if self.standard_mode_key == self.vim_mode_key {
			return Err(ConfigError::ConflictingModeKeys(self.vim_mode_key));
		}
		for key in [self.standard_mode_key, self.vim_mode_key] {
			if !tables::is_alphanumeric(key) {
				return Err(ConfigError::ModeKeyNotAlphanumeric(key));
			}
		}
		Ok(())
	}

	pub fn mode_keys(&self) -> ModeKeys {
		ModeKeys {
			standard: self.standard_mode_key,
			vim: self.vim_mode_key,
		}
	}
}
