//! Frame scripts.
//!
//! A script is a TOML document with one `[[frame]]` table per host frame:
//!
//! ```toml
//! [[frame]]
//! key_ctrl = true
//! keys = ["Num2"]
//!
//! [[frame]]
//! chars = "ihello"
//! mouse_clicked = { left = true }
//! ```

use std::path::Path;

use anyhow::Context;
use quire_bridge::HostInput;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameScript {
	#[serde(default, rename = "frame")]
	pub frames: Vec<HostInput>,
}

impl FrameScript {
	pub fn parse(input: &str) -> anyhow::Result<Self> {
		toml::from_str(input).context("invalid frame script")
	}

	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let input = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
		Self::parse(&input).with_context(|| format!("in {}", path.display()))
	}
}
