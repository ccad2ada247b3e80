//! Per-frame keyboard decision.
//!
//! Tiers are tried in order and the first one that fires decides the frame:
//!
//! 1. special keys (first pressed entry only)
//! 2. with Ctrl held: shiftable punctuation (first entry), then the two
//!    mode-switch keys, then every pressed alphanumeric key
//! 3. queued decoded characters

mod fallback;

pub use fallback::character_presses;
use quire_primitives::{EditorMode, KeyPress, Modifiers};
use smallvec::SmallVec;

use crate::config::ModeKeys;
use crate::host::KeyboardQuery;
use crate::tables::{self, ALPHANUMERIC_KEYS, SHIFTABLE_KEYS, SPECIAL_KEYS};

/// What the keyboard state of one frame resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyDecision {
	/// A special key press.
	Special(KeyPress),
	/// Ctrl with a punctuation key.
	Punctuation(KeyPress),
	/// A reserved mode-switch chord.
	SwitchMode(EditorMode),
	/// Ctrl with one or more alphanumeric keys, in table order.
	Chord(SmallVec<[KeyPress; 2]>),
	/// Decoded characters from the host queue.
	Text(SmallVec<[KeyPress; 16]>),
	/// Nothing to deliver.
	Idle,
}

impl KeyDecision {
	/// Key presses to hand to the mode handler, in delivery order.
	pub fn key_presses(&self) -> &[KeyPress] {
		match self {
			KeyDecision::Special(press) | KeyDecision::Punctuation(press) => std::slice::from_ref(press),
			KeyDecision::Chord(presses) => presses.as_slice(),
			KeyDecision::Text(presses) => presses.as_slice(),
			KeyDecision::SwitchMode(_) | KeyDecision::Idle => &[],
		}
	}
}

/// Decides which interpretation of the frame's keyboard state wins.
pub fn decide<K: KeyboardQuery + ?Sized>(keys: &K, modifiers: Modifiers, mode_keys: ModeKeys) -> KeyDecision {
	if let Some(key) = tables::first_pressed(&SPECIAL_KEYS, keys) {
		return KeyDecision::Special(KeyPress::new(key, modifiers));
	}

	if modifiers.ctrl()
		&& let Some(decision) = ctrl_chord(keys, modifiers, mode_keys)
	{
		return decision;
	}

	let text = character_presses(keys.input_characters(), modifiers);
	if text.is_empty() {
		KeyDecision::Idle
	} else {
		KeyDecision::Text(text)
	}
}

fn ctrl_chord<K: KeyboardQuery + ?Sized>(keys: &K, modifiers: Modifiers, mode_keys: ModeKeys) -> Option<KeyDecision> {
	if let Some(ch) = tables::first_pressed(&SHIFTABLE_KEYS, keys) {
		return Some(KeyDecision::Punctuation(KeyPress::new(ch, modifiers)));
	}

	if keys.is_key_pressed(mode_keys.standard) {
		return Some(KeyDecision::SwitchMode(EditorMode::Standard));
	}
	if keys.is_key_pressed(mode_keys.vim) {
		return Some(KeyDecision::SwitchMode(EditorMode::Vim));
	}

	// Every pressed key is reported, not just the first.
	let chord: SmallVec<[KeyPress; 2]> = tables::all_pressed(&ALPHANUMERIC_KEYS, keys)
		.map(|ch| KeyPress::new(ch, modifiers))
		.collect();
	(!chord.is_empty()).then_some(KeyDecision::Chord(chord))
}

#[cfg(test)]
mod tests;
