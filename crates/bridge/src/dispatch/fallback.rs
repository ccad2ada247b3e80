//! Decoded-character fallback.

use quire_primitives::{KeyPress, Modifiers};
use smallvec::SmallVec;

/// Key presses for queued characters, in arrival order.
///
/// `\r` is dropped; hosts emit it alongside Enter. A NUL terminates the queue.
pub fn character_presses(chars: &[char], modifiers: Modifiers) -> SmallVec<[KeyPress; 16]> {
	chars
		.iter()
		.copied()
		.take_while(|&ch| ch != '\0')
		.filter(|&ch| ch != '\r')
		.map(|ch| KeyPress::new(ch, modifiers))
		.collect()
}
