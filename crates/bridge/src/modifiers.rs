//! Modifier resolution.

use quire_primitives::Modifiers;

use crate::host::HostInput;

/// Composes the modifier set from the host's held-modifier flags.
pub fn resolve(host: &HostInput) -> Modifiers {
	let mut modifiers = Modifiers::NONE;
	if host.key_ctrl {
		modifiers |= Modifiers::CTRL;
	}
	if host.key_alt {
		modifiers |= Modifiers::ALT;
	}
	if host.key_shift {
		modifiers |= Modifiers::SHIFT;
	}
	modifiers
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_flags_yield_empty_set() {
		assert_eq!(resolve(&HostInput::new()), Modifiers::NONE);
	}

	#[test]
	fn each_flag_contributes_its_bit() {
		let mut host = HostInput::new();
		host.key_ctrl = true;
		host.key_shift = true;
		assert_eq!(resolve(&host), Modifiers::CTRL | Modifiers::SHIFT);

		host.key_ctrl = false;
		host.key_alt = true;
		assert_eq!(resolve(&host), Modifiers::ALT | Modifiers::SHIFT);
	}
}
