//! Error types for bridge configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::host::HostKey;

/// Errors that can occur when loading a [`BridgeConfig`](super::BridgeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unknown field.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Both mode-switch chords name the same key.
	#[error("standard and vim mode keys are both {0:?}")]
	ConflictingModeKeys(HostKey),

	/// Mode-switch chords must use a key from the alphanumeric table.
	#[error("mode key {0:?} is not an alphanumeric key")]
	ModeKeyNotAlphanumeric(HostKey),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
