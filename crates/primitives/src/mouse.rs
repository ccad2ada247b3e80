//! Normalized mouse events.

use std::fmt;

use crate::Vec2;

/// Mouse buttons the engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
	Left,
	Right,
}

/// Mouse event types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
	Move { pos: Vec2, delta: Vec2 },
	Press { pos: Vec2, button: MouseButton },
	Release { pos: Vec2, button: MouseButton },
	Wheel { pos: Vec2, delta: f32 },
}

impl MouseEvent {
	pub fn pos(&self) -> Vec2 {
		match self {
			MouseEvent::Move { pos, .. }
			| MouseEvent::Press { pos, .. }
			| MouseEvent::Release { pos, .. }
			| MouseEvent::Wheel { pos, .. } => *pos,
		}
	}
}

impl fmt::Display for MouseEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let pos = self.pos();
		match self {
			MouseEvent::Move { delta, .. } => write!(f, "move ({}, {}) delta ({}, {})", pos.x, pos.y, delta.x, delta.y),
			MouseEvent::Press { button, .. } => write!(f, "press {button:?} ({}, {})", pos.x, pos.y),
			MouseEvent::Release { button, .. } => write!(f, "release {button:?} ({}, {})", pos.x, pos.y),
			MouseEvent::Wheel { delta, .. } => write!(f, "wheel {delta} ({}, {})", pos.x, pos.y),
		}
	}
}
