//! Static host-key lookup tables.
//!
//! Each table scans in [`HostKey`] order, which defines first-match
//! tie-breaks. No host key appears in more than one table.

use quire_primitives::ExtKey;

use crate::host::{HostKey, KeyboardQuery};

/// One host key and the normalized code it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTableEntry<T> {
	pub host: HostKey,
	pub code: T,
}

const fn entry<T>(host: HostKey, code: T) -> KeyTableEntry<T> {
	KeyTableEntry { host, code }
}

/// Function, navigation and editing keys. Honoured with or without Ctrl.
pub static SPECIAL_KEYS: [KeyTableEntry<ExtKey>; 25] = [
	entry(HostKey::Tab, ExtKey::Tab),
	entry(HostKey::LeftArrow, ExtKey::Left),
	entry(HostKey::RightArrow, ExtKey::Right),
	entry(HostKey::UpArrow, ExtKey::Up),
	entry(HostKey::DownArrow, ExtKey::Down),
	entry(HostKey::PageUp, ExtKey::PageUp),
	entry(HostKey::PageDown, ExtKey::PageDown),
	entry(HostKey::Home, ExtKey::Home),
	entry(HostKey::End, ExtKey::End),
	entry(HostKey::Delete, ExtKey::Del),
	entry(HostKey::Backspace, ExtKey::Backspace),
	entry(HostKey::Enter, ExtKey::Return),
	entry(HostKey::Escape, ExtKey::Escape),
	entry(HostKey::F1, ExtKey::F1),
	entry(HostKey::F2, ExtKey::F2),
	entry(HostKey::F3, ExtKey::F3),
	entry(HostKey::F4, ExtKey::F4),
	entry(HostKey::F5, ExtKey::F5),
	entry(HostKey::F6, ExtKey::F6),
	entry(HostKey::F7, ExtKey::F7),
	entry(HostKey::F8, ExtKey::F8),
	entry(HostKey::F9, ExtKey::F9),
	entry(HostKey::F10, ExtKey::F10),
	entry(HostKey::F11, ExtKey::F11),
	entry(HostKey::F12, ExtKey::F12),
];

/// Punctuation keys, mapped to their unshifted character.
///
/// Only consulted while Ctrl is held. Without Ctrl these keys reach the editor
/// through the character queue so shifted variants arrive correctly.
pub static SHIFTABLE_KEYS: [KeyTableEntry<char>; 11] = [
	entry(HostKey::Apostrophe, '\''),
	entry(HostKey::Comma, ','),
	entry(HostKey::Minus, '-'),
	entry(HostKey::Period, '.'),
	entry(HostKey::Slash, '/'),
	entry(HostKey::Semicolon, ';'),
	entry(HostKey::Equal, '='),
	entry(HostKey::LeftBracket, '['),
	entry(HostKey::Backslash, '\\'),
	entry(HostKey::RightBracket, ']'),
	entry(HostKey::GraveAccent, '`'),
];

/// Digits, lowercase letters and space. Only consulted while Ctrl is held.
pub static ALPHANUMERIC_KEYS: [KeyTableEntry<char>; 37] = [
	entry(HostKey::Space, ' '),
	entry(HostKey::Num0, '0'),
	entry(HostKey::Num1, '1'),
	entry(HostKey::Num2, '2'),
	entry(HostKey::Num3, '3'),
	entry(HostKey::Num4, '4'),
	entry(HostKey::Num5, '5'),
	entry(HostKey::Num6, '6'),
	entry(HostKey::Num7, '7'),
	entry(HostKey::Num8, '8'),
	entry(HostKey::Num9, '9'),
	entry(HostKey::A, 'a'),
	entry(HostKey::B, 'b'),
	entry(HostKey::C, 'c'),
	entry(HostKey::D, 'd'),
	entry(HostKey::E, 'e'),
	entry(HostKey::F, 'f'),
	entry(HostKey::G, 'g'),
	entry(HostKey::H, 'h'),
	entry(HostKey::I, 'i'),
	entry(HostKey::J, 'j'),
	entry(HostKey::K, 'k'),
	entry(HostKey::L, 'l'),
	entry(HostKey::M, 'm'),
	entry(HostKey::N, 'n'),
	entry(HostKey::O, 'o'),
	entry(HostKey::P, 'p'),
	entry(HostKey::Q, 'q'),
	entry(HostKey::R, 'r'),
	entry(HostKey::S, 's'),
	entry(HostKey::T, 't'),
	entry(HostKey::U, 'u'),
	entry(HostKey::V, 'v'),
	entry(HostKey::W, 'w'),
	entry(HostKey::X, 'x'),
	entry(HostKey::Y, 'y'),
	entry(HostKey::Z, 'z'),
];

/// Code of the first entry in `table` whose host key is pressed.
pub fn first_pressed<T: Copy, K: KeyboardQuery + ?Sized>(table: &[KeyTableEntry<T>], keys: &K) -> Option<T> {
	table.iter().find(|e| keys.is_key_pressed(e.host)).map(|e| e.code)
}

/// Codes of every entry in `table` whose host key is pressed, in table order.
pub fn all_pressed<'a, T: Copy, K: KeyboardQuery + ?Sized>(
	table: &'a [KeyTableEntry<T>],
	keys: &'a K,
) -> impl Iterator<Item = T> + 'a {
	table.iter().filter(|e| keys.is_key_pressed(e.host)).map(|e| e.code)
}

/// Returns true if `key` is in the alphanumeric table.
pub fn is_alphanumeric(key: HostKey) -> bool {
	ALPHANUMERIC_KEYS.iter().any(|e| e.host == key)
}
