//! Normalized key codes.
//!
//! A [`KeyCode`] is either a raw character or an [`ExtKey`]. Extended keys
//! live in their own numeric range starting at [`EXT_KEY_BASE`], above every
//! Unicode scalar value, so [`KeyCode::value`] never aliases a character.

use std::fmt;

mod modifiers;

pub use modifiers::Modifiers;

/// First numeric code used by [`ExtKey`].
pub const EXT_KEY_BASE: u32 = 0x11_0000;

/// Named keys that have no character representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExtKey {
	F1 = EXT_KEY_BASE,
	F2,
	F3,
	F4,
	F5,
	F6,
	F7,
	F8,
	F9,
	F10,
	F11,
	F12,
	Tab,
	Escape,
	Return,
	Del,
	Home,
	End,
	Backspace,
	Right,
	Left,
	Up,
	Down,
	PageDown,
	PageUp,
}

impl ExtKey {
	/// Stable numeric code of this key.
	pub const fn code(self) -> u32 {
		self as u32
	}

	/// Short lowercase name used in key notation.
	pub const fn name(self) -> &'static str {
		match self {
			Self::F1 => "f1",
			Self::F2 => "f2",
			Self::F3 => "f3",
			Self::F4 => "f4",
			Self::F5 => "f5",
			Self::F6 => "f6",
			Self::F7 => "f7",
			Self::F8 => "f8",
			Self::F9 => "f9",
			Self::F10 => "f10",
			Self::F11 => "f11",
			Self::F12 => "f12",
			Self::Tab => "tab",
			Self::Escape => "esc",
			Self::Return => "ret",
			Self::Del => "del",
			Self::Home => "home",
			Self::End => "end",
			Self::Backspace => "backspace",
			Self::Right => "right",
			Self::Left => "left",
			Self::Up => "up",
			Self::Down => "down",
			Self::PageDown => "pagedown",
			Self::PageUp => "pageup",
		}
	}
}

/// Code carried by a key press: a character or an extended key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	Char(char),
	Ext(ExtKey),
}

impl KeyCode {
	/// Numeric code as seen by the engine's mode handler.
	pub const fn value(self) -> u32 {
		match self {
			Self::Char(c) => c as u32,
			Self::Ext(key) => key.code(),
		}
	}

	/// Returns the character if this is a character code.
	pub const fn as_char(self) -> Option<char> {
		match self {
			Self::Char(c) => Some(c),
			Self::Ext(_) => None,
		}
	}
}

impl From<char> for KeyCode {
	fn from(c: char) -> Self {
		Self::Char(c)
	}
}

impl From<ExtKey> for KeyCode {
	fn from(key: ExtKey) -> Self {
		Self::Ext(key)
	}
}

impl fmt::Display for KeyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Char(' ') => f.write_str("<space>"),
			Self::Char(c) => write!(f, "{c}"),
			Self::Ext(key) => write!(f, "<{}>", key.name()),
		}
	}
}

/// A normalized key press handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl KeyPress {
	pub fn new(code: impl Into<KeyCode>, modifiers: Modifiers) -> Self {
		Self {
			code: code.into(),
			modifiers,
		}
	}

	/// A character press with no modifiers.
	pub const fn char(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::NONE,
		}
	}
}

impl fmt::Display for KeyPress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.modifiers, self.code)
	}
}
