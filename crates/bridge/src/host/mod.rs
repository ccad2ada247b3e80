//! Host GUI input snapshot.
//!
//! [`HostInput`] mirrors what an immediate-mode GUI exposes once per frame:
//! pointer state, per-button click/release edges, the wheel, modifier flags,
//! the keys reported pressed this frame and the decoded character queue.
//! The bridge reads it and clears the click/wheel fields the editor consumed.

use quire_primitives::{MouseButton, Vec2};
use serde::Deserialize;
use smallvec::SmallVec;

/// Maximum number of decoded characters the host queues per frame.
pub const INPUT_QUEUE_CAPACITY: usize = 64;

/// Host key identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum HostKey {
	Tab,
	LeftArrow,
	RightArrow,
	UpArrow,
	DownArrow,
	PageUp,
	PageDown,
	Home,
	End,
	Insert,
	Delete,
	Backspace,
	Space,
	Enter,
	Escape,
	LeftCtrl,
	LeftShift,
	LeftAlt,
	LeftSuper,
	RightCtrl,
	RightShift,
	RightAlt,
	RightSuper,
	Menu,
	Num0,
	Num1,
	Num2,
	Num3,
	Num4,
	Num5,
	Num6,
	Num7,
	Num8,
	Num9,
	A,
	B,
	C,
	D,
	E,
	F,
	G,
	H,
	I,
	J,
	K,
	L,
	M,
	N,
	O,
	P,
	Q,
	R,
	S,
	T,
	U,
	V,
	W,
	X,
	Y,
	Z,
	F1,
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
	Apostrophe,
	Comma,
	Minus,
	Period,
	Slash,
	Semicolon,
	Equal,
	LeftBracket,
	Backslash,
	RightBracket,
	GraveAccent,
	CapsLock,
	ScrollLock,
	NumLock,
	PrintScreen,
	Pause,
	Keypad0,
	Keypad1,
	Keypad2,
	Keypad3,
	Keypad4,
	Keypad5,
	Keypad6,
	Keypad7,
	Keypad8,
	Keypad9,
	KeypadDecimal,
	KeypadEnter,
}

/// Per-frame keyboard query the dispatcher runs against.
pub trait KeyboardQuery {
	/// Whether the host reports `key` pressed this frame.
	fn is_key_pressed(&self, key: HostKey) -> bool;

	/// Decoded characters queued this frame, in arrival order.
	fn input_characters(&self) -> &[char];
}

/// Keys reported pressed this frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<HostKey>")]
pub struct HostKeySet {
	keys: SmallVec<[HostKey; 8]>,
}

impl HostKeySet {
	pub fn insert(&mut self, key: HostKey) {
		if !self.contains(key) {
			self.keys.push(key);
		}
	}

	pub fn contains(&self, key: HostKey) -> bool {
		self.keys.contains(&key)
	}

	pub fn clear(&mut self) {
		self.keys.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = HostKey> + '_ {
		self.keys.iter().copied()
	}
}

impl From<Vec<HostKey>> for HostKeySet {
	fn from(keys: Vec<HostKey>) -> Self {
		keys.into_iter().collect()
	}
}

impl FromIterator<HostKey> for HostKeySet {
	fn from_iter<I: IntoIterator<Item = HostKey>>(iter: I) -> Self {
		let mut set = Self::default();
		for key in iter {
			set.insert(key);
		}
		set
	}
}

/// Bounded queue of decoded characters.
///
/// Characters past [`INPUT_QUEUE_CAPACITY`] are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct InputQueue {
	chars: SmallVec<[char; 16]>,
}

impl InputQueue {
	/// Appends `ch`. Returns false if the queue is full.
	pub fn push(&mut self, ch: char) -> bool {
		if self.chars.len() >= INPUT_QUEUE_CAPACITY {
			return false;
		}
		self.chars.push(ch);
		true
	}

	pub fn as_slice(&self) -> &[char] {
		&self.chars
	}

	pub fn clear(&mut self) {
		self.chars.clear();
	}
}

impl From<String> for InputQueue {
	fn from(text: String) -> Self {
		Self::from(text.as_str())
	}
}

impl From<&str> for InputQueue {
	fn from(text: &str) -> Self {
		let mut queue = Self::default();
		for ch in text.chars() {
			if !queue.push(ch) {
				break;
			}
		}
		queue
	}
}

/// One boolean per mouse button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonFlags {
	pub left: bool,
	pub right: bool,
}

impl ButtonFlags {
	pub const fn get(self, button: MouseButton) -> bool {
		match button {
			MouseButton::Left => self.left,
			MouseButton::Right => self.right,
		}
	}

	pub fn set(&mut self, button: MouseButton, value: bool) {
		match button {
			MouseButton::Left => self.left = value,
			MouseButton::Right => self.right = value,
		}
	}
}

/// The host's input state for one frame.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostInput {
	/// Pointer position in logical pixels.
	pub mouse_pos: Vec2,
	/// Pointer movement since the previous frame.
	pub mouse_delta: Vec2,
	/// Buttons that went down this frame.
	pub mouse_clicked: ButtonFlags,
	/// Buttons that went up this frame.
	pub mouse_released: ButtonFlags,
	/// Wheel movement this frame; zero when idle.
	pub mouse_wheel: f32,
	pub key_ctrl: bool,
	pub key_alt: bool,
	pub key_shift: bool,
	#[serde(rename = "keys")]
	keys_pressed: HostKeySet,
	#[serde(rename = "chars")]
	input_queue: InputQueue,
}

impl HostInput {
	pub fn new() -> Self {
		Self::default()
	}

	/// Clears per-frame edges and queues, keeping pointer position and held
	/// modifiers.
	pub fn new_frame(&mut self) {
		self.mouse_delta = Vec2::ZERO;
		self.mouse_clicked = ButtonFlags::default();
		self.mouse_released = ButtonFlags::default();
		self.mouse_wheel = 0.0;
		self.keys_pressed.clear();
		self.input_queue.clear();
	}

	/// Reports `key` as pressed this frame.
	pub fn press(&mut self, key: HostKey) {
		self.keys_pressed.insert(key);
	}

	/// Queues a decoded character. Returns false if the queue is full.
	pub fn push_char(&mut self, ch: char) -> bool {
		self.input_queue.push(ch)
	}

	/// Queues every character of `text` until the queue is full.
	pub fn push_str(&mut self, text: &str) {
		for ch in text.chars() {
			if !self.push_char(ch) {
				break;
			}
		}
	}

	pub fn keys_pressed(&self) -> &HostKeySet {
		&self.keys_pressed
	}
}

impl KeyboardQuery for HostInput {
	fn is_key_pressed(&self, key: HostKey) -> bool {
		self.keys_pressed.contains(key)
	}

	fn input_characters(&self) -> &[char] {
		self.input_queue.as_slice()
	}
}

#[cfg(test)]
mod tests;
