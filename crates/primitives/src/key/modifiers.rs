//! Key modifier set (Ctrl, Alt, Shift).

use std::fmt;

bitflags::bitflags! {
	/// Modifier keys held while a key press was produced.
	///
	/// Bit values are part of the engine's key-press contract.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct Modifiers: u32 {
		/// Ctrl is held.
		const CTRL = 1 << 0;
		/// Alt is held.
		const ALT = 1 << 1;
		/// Shift is held.
		const SHIFT = 1 << 2;
	}
}

impl Modifiers {
	/// No modifiers held.
	pub const NONE: Self = Self::empty();

	/// Returns true if Ctrl is part of the set.
	pub const fn ctrl(self) -> bool {
		self.contains(Self::CTRL)
	}

	/// Returns true if Alt is part of the set.
	pub const fn alt(self) -> bool {
		self.contains(Self::ALT)
	}

	/// Returns true if Shift is part of the set.
	pub const fn shift(self) -> bool {
		self.contains(Self::SHIFT)
	}
}

/// Writes the key-notation prefix, e.g. `C-S-` for Ctrl+Shift.
impl fmt::Display for Modifiers {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.ctrl() {
			f.write_str("C-")?;
		}
		if self.alt() {
			f.write_str("A-")?;
		}
		if self.shift() {
			f.write_str("S-")?;
		}
		Ok(())
	}
}
