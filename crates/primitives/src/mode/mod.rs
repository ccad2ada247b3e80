//! Editor mode state.
//!
//! The engine owns exactly one [`ModeCell`]. The input bridge is its only
//! writer, through the two reserved mode-switch chords.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Editing modes the engine can run buffers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
	/// Conventional non-modal editing.
	#[default]
	Standard,
	/// Vim-like modal editing.
	Vim,
}

impl EditorMode {
	/// Registered name of the mode.
	pub const fn name(self) -> &'static str {
		match self {
			EditorMode::Standard => "Standard",
			EditorMode::Vim => "Vim",
		}
	}
}

impl fmt::Display for EditorMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown editor mode: {0} (expected 'standard' or 'vim')")]
pub struct ModeParseError(pub String);

impl FromStr for EditorMode {
	type Err = ModeParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("standard") {
			Ok(EditorMode::Standard)
		} else if s.eq_ignore_ascii_case("vim") {
			Ok(EditorMode::Vim)
		} else {
			Err(ModeParseError(s.to_string()))
		}
	}
}

/// Holds the single active editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeCell {
	active: EditorMode,
}

impl ModeCell {
	pub const fn new(active: EditorMode) -> Self {
		Self { active }
	}

	pub const fn get(&self) -> EditorMode {
		self.active
	}

	/// Overwrites the active mode. Returns true if the mode changed.
	pub fn set(&mut self, mode: EditorMode) -> bool {
		let changed = self.active != mode;
		self.active = mode;
		changed
	}
}
