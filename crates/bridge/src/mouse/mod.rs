//! Mouse forwarding with consumption feedback.
//!
//! [`forward`] reports which events the editor consumed; [`suppress`] then
//! clears the matching host flags so the host does not act on them again.

use quire_primitives::{MouseButton, MouseEvent};

use crate::config::ClickSuppression;
use crate::host::HostInput;
use crate::sink::MouseSink;

bitflags::bitflags! {
	/// Mouse events the editor consumed this frame.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
	pub struct MouseConsumption: u8 {
		const LEFT_PRESS = 1 << 0;
		const RIGHT_PRESS = 1 << 1;
		const LEFT_RELEASE = 1 << 2;
		const RIGHT_RELEASE = 1 << 3;
		const WHEEL = 1 << 4;
	}
}

impl MouseConsumption {
	pub const fn press(button: MouseButton) -> Self {
		match button {
			MouseButton::Left => Self::LEFT_PRESS,
			MouseButton::Right => Self::RIGHT_PRESS,
		}
	}

	pub const fn release(button: MouseButton) -> Self {
		match button {
			MouseButton::Left => Self::LEFT_RELEASE,
			MouseButton::Right => Self::RIGHT_RELEASE,
		}
	}
}

const BUTTONS: [MouseButton; 2] = [MouseButton::Left, MouseButton::Right];

/// Forwards this frame's mouse activity to `sink`.
///
/// Checks run in a fixed order (move, presses, releases, wheel) and are
/// independent of each other. Moves are never consumable.
pub fn forward<S: MouseSink + ?Sized>(host: &HostInput, sink: &mut S) -> MouseConsumption {
	let pos = host.mouse_pos;
	let mut consumed = MouseConsumption::empty();

	if host.mouse_delta.is_nonzero() {
		send(
			sink,
			MouseEvent::Move {
				pos,
				delta: host.mouse_delta,
			},
		);
	}

	for button in BUTTONS {
		if host.mouse_clicked.get(button) && send(sink, MouseEvent::Press { pos, button }) {
			consumed |= MouseConsumption::press(button);
		}
	}

	for button in BUTTONS {
		if host.mouse_released.get(button) && send(sink, MouseEvent::Release { pos, button }) {
			consumed |= MouseConsumption::release(button);
		}
	}

	if host.mouse_wheel != 0.0
		&& send(
			sink,
			MouseEvent::Wheel {
				pos,
				delta: host.mouse_wheel,
			},
		) {
		consumed |= MouseConsumption::WHEEL;
	}

	consumed
}

fn send<S: MouseSink + ?Sized>(sink: &mut S, event: MouseEvent) -> bool {
	let handled = sink.handle_mouse(event);
	tracing::trace!(%event, handled, "mouse event forwarded");
	handled
}

/// Hides consumed events from the host.
pub fn suppress(host: &mut HostInput, consumed: MouseConsumption, policy: ClickSuppression) {
	if consumed.contains(MouseConsumption::WHEEL) {
		host.mouse_wheel = 0.0;
	}

	match policy {
		ClickSuppression::Legacy => {
			let buttons = MouseConsumption::LEFT_PRESS
				| MouseConsumption::RIGHT_PRESS
				| MouseConsumption::LEFT_RELEASE
				| MouseConsumption::RIGHT_RELEASE;
			if consumed.intersects(buttons) {
				host.mouse_clicked.left = false;
			}
		}
		ClickSuppression::PerButton => {
			for button in BUTTONS {
				if consumed.contains(MouseConsumption::press(button)) {
					host.mouse_clicked.set(button, false);
				}
				if consumed.contains(MouseConsumption::release(button)) {
					host.mouse_released.set(button, false);
				}
			}
		}
	}
}
