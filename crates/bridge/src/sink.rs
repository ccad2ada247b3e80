//! Editor-side seams the bridge drives.

use quire_primitives::{EditorMode, KeyCode, Modifiers, MouseButton, MouseEvent, Vec2};

/// The active buffer's modal command interpreter.
pub trait ModeHandler {
	fn add_key_press(&mut self, code: KeyCode, modifiers: Modifiers);
}

/// A focused, editable buffer.
pub trait EditorBuffer {
	fn mode_handler(&mut self) -> &mut dyn ModeHandler;
}

/// Mouse entry points of the editor. Each returns true if the editor
/// consumed the event.
pub trait MouseSink {
	fn on_mouse_move(&mut self, pos: Vec2, delta: Vec2) -> bool;

	fn on_mouse_down(&mut self, pos: Vec2, button: MouseButton) -> bool;

	fn on_mouse_up(&mut self, pos: Vec2, button: MouseButton) -> bool;

	fn on_mouse_wheel(&mut self, pos: Vec2, delta: f32) -> bool;

	/// Routes a normalized event to the matching entry point.
	fn handle_mouse(&mut self, event: MouseEvent) -> bool {
		match event {
			MouseEvent::Move { pos, delta } => self.on_mouse_move(pos, delta),
			MouseEvent::Press { pos, button } => self.on_mouse_down(pos, button),
			MouseEvent::Release { pos, button } => self.on_mouse_up(pos, button),
			MouseEvent::Wheel { pos, delta } => self.on_mouse_wheel(pos, delta),
		}
	}
}

/// Everything the bridge needs from the editing engine.
pub trait EditorSink: MouseSink {
	/// The currently focused buffer, if any. Looked up fresh every frame.
	fn active_buffer(&mut self) -> Option<&mut dyn EditorBuffer>;

	/// Switches the process-wide editing mode.
	fn set_global_mode(&mut self, mode: EditorMode);
}
