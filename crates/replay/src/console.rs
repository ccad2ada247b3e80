//! Editor stand-in that records what it receives as transcript lines.

use quire_bridge::{EditorBuffer, EditorSink, ModeHandler, MouseSink};
use quire_primitives::{EditorMode, KeyCode, KeyPress, ModeCell, Modifiers, MouseButton, MouseEvent, Vec2};

#[derive(Debug, Default)]
struct ConsoleHandler {
	lines: Vec<String>,
}

impl ModeHandler for ConsoleHandler {
	fn add_key_press(&mut self, code: KeyCode, modifiers: Modifiers) {
		self.lines.push(format!("key {}", KeyPress { code, modifiers }));
	}
}

#[derive(Debug, Default)]
struct ConsoleBuffer {
	handler: ConsoleHandler,
}

impl EditorBuffer for ConsoleBuffer {
	fn mode_handler(&mut self) -> &mut dyn ModeHandler {
		&mut self.handler
	}
}

#[derive(Debug)]
pub struct ConsoleEditor {
	buffer: Option<ConsoleBuffer>,
	consume_mouse: bool,
	mode: ModeCell,
	lines: Vec<String>,
}

impl ConsoleEditor {
	pub fn new(with_buffer: bool, consume_mouse: bool, mode: EditorMode) -> Self {
		Self {
			buffer: with_buffer.then(ConsoleBuffer::default),
			consume_mouse,
			mode: ModeCell::new(mode),
			lines: Vec::new(),
		}
	}

	pub fn mode(&self) -> EditorMode {
		self.mode.get()
	}

	/// Drains the lines recorded since the previous call.
	///
	/// Mouse lines always precede key or mode lines of the same frame.
	pub fn take_lines(&mut self) -> Vec<String> {
		let mut lines = std::mem::take(&mut self.lines);
		if let Some(buffer) = &mut self.buffer {
			lines.append(&mut buffer.handler.lines);
		}
		lines
	}

	fn mouse(&mut self, event: MouseEvent) -> bool {
		let consumed = self.consume_mouse && !matches!(event, MouseEvent::Move { .. });
		let suffix = if consumed { " [consumed]" } else { "" };
		self.lines.push(format!("mouse {event}{suffix}"));
		consumed
	}
}

impl MouseSink for ConsoleEditor {
	fn on_mouse_move(&mut self, pos: Vec2, delta: Vec2) -> bool {
		self.mouse(MouseEvent::Move { pos, delta })
	}

	fn on_mouse_down(&mut self, pos: Vec2, button: MouseButton) -> bool {
		self.mouse(MouseEvent::Press { pos, button })
	}

	fn on_mouse_up(&mut self, pos: Vec2, button: MouseButton) -> bool {
		self.mouse(MouseEvent::Release { pos, button })
	}

	fn on_mouse_wheel(&mut self, pos: Vec2, delta: f32) -> bool {
		self.mouse(MouseEvent::Wheel { pos, delta })
	}

	fn handle_mouse(&mut self, event: MouseEvent) -> bool {
		self.mouse(event)
	}
}

impl EditorSink for ConsoleEditor {
	fn active_buffer(&mut self) -> Option<&mut dyn EditorBuffer> {
		self.buffer.as_mut().map(|b| b as &mut dyn EditorBuffer)
	}

	fn set_global_mode(&mut self, mode: EditorMode) {
		self.mode.set(mode);
		self.lines.push(format!("mode {mode}"));
	}
}
