//! Pointer geometry in host logical pixels.

use serde::{Deserialize, Serialize};

/// A 2D vector of logical pixels.
///
/// Used both for absolute pointer positions and for per-frame deltas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
	pub x: f32,
	pub y: f32,
}

impl Vec2 {
	pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}

	/// Returns true unless both components are exactly zero.
	///
	/// NaN components count as non-zero.
	pub fn is_nonzero(self) -> bool {
		self.x != 0.0 || self.y != 0.0
	}
}

impl From<(f32, f32)> for Vec2 {
	fn from((x, y): (f32, f32)) -> Self {
		Self::new(x, y)
	}
}

impl From<[f32; 2]> for Vec2 {
	fn from([x, y]: [f32; 2]) -> Self {
		Self::new(x, y)
	}
}

#[cfg(test)]
mod tests;
