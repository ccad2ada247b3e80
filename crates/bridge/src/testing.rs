//! Recording editor double for exercising the bridge.

use quire_primitives::{EditorMode, KeyCode, KeyPress, ModeCell, Modifiers, MouseButton, MouseEvent, Vec2};

use crate::mouse::MouseConsumption;
use crate::sink::{EditorBuffer, EditorSink, ModeHandler, MouseSink};

/// Mode handler that records every key press.
#[derive(Debug, Default)]
pub struct RecordingHandler {
	presses: Vec<KeyPress>,
}

impl ModeHandler for RecordingHandler {
	fn add_key_press(&mut self, code: KeyCode, modifiers: Modifiers) {
		self.presses.push(KeyPress { code, modifiers });
	}
}

#[derive(Debug, Default)]
pub struct RecordingBuffer {
	handler: RecordingHandler,
}

impl EditorBuffer for RecordingBuffer {
	fn mode_handler(&mut self) -> &mut dyn ModeHandler {
		&mut self.handler
	}
}

/// Editor double that records mouse events, key presses and mode switches.
///
/// Mouse events are consumed according to the configured
/// [`MouseConsumption`] set; nothing is consumed by default.
#[derive(Debug)]
pub struct RecordingEditor {
	buffer: Option<RecordingBuffer>,
	mouse: Vec<MouseEvent>,
	consume: MouseConsumption,
	mode: ModeCell,
	mode_switches: Vec<EditorMode>,
}

impl RecordingEditor {
	/// An editor with one focused buffer.
	pub fn new() -> Self {
		Self {
			buffer: Some(RecordingBuffer::default()),
			mouse: Vec::new(),
			consume: MouseConsumption::empty(),
			mode: ModeCell::default(),
			mode_switches: Vec::new(),
		}
	}

	/// An editor with no focused buffer.
	pub fn without_buffer() -> Self {
		Self {
			buffer: None,
			..Self::new()
		}
	}

	pub fn consuming(mut self, consume: MouseConsumption) -> Self {
		self.consume = consume;
		self
	}

	pub fn in_mode(mut self, mode: EditorMode) -> Self {
		self.mode = ModeCell::new(mode);
		self
	}

	pub fn key_presses(&self) -> &[KeyPress] {
		match &self.buffer {
			Some(buffer) => &buffer.handler.presses,
			None => &[],
		}
	}

	pub fn mouse_events(&self) -> &[MouseEvent] {
		&self.mouse
	}

	pub fn mode(&self) -> EditorMode {
		self.mode.get()
	}

	pub fn mode_switches(&self) -> &[EditorMode] {
		&self.mode_switches
	}

	fn consumes(&self, event: &MouseEvent) -> bool {
		match *event {
			MouseEvent::Move { .. } => false,
			MouseEvent::Press { button, .. } => self.consume.contains(MouseConsumption::press(button)),
			MouseEvent::Release { button, .. } => self.consume.contains(MouseConsumption::release(button)),
			MouseEvent::Wheel { .. } => self.consume.contains(MouseConsumption::WHEEL),
		}
	}
}

impl Default for RecordingEditor {
	fn default() -> Self {
		Self::new()
	}
}

impl MouseSink for RecordingEditor {
	fn on_mouse_move(&mut self, pos: Vec2, delta: Vec2) -> bool {
		self.handle_mouse(MouseEvent::Move { pos, delta })
	}

	fn on_mouse_down(&mut self, pos: Vec2, button: MouseButton) -> bool {
		self.handle_mouse(MouseEvent::Press { pos, button })
	}

	fn on_mouse_up(&mut self, pos: Vec2, button: MouseButton) -> bool {
		self.handle_mouse(MouseEvent::Release { pos, button })
	}

	fn on_mouse_wheel(&mut self, pos: Vec2, delta: f32) -> bool {
		self.handle_mouse(MouseEvent::Wheel { pos, delta })
	}

	fn handle_mouse(&mut self, event: MouseEvent) -> bool {
		self.mouse.push(event);
		self.consumes(&event)
	}
}

impl EditorSink for RecordingEditor {
	fn active_buffer(&mut self) -> Option<&mut dyn EditorBuffer> {
		self.buffer.as_mut().map(|b| b as &mut dyn EditorBuffer)
	}

	fn set_global_mode(&mut self, mode: EditorMode) {
		self.mode.set(mode);
		self.mode_switches.push(mode);
	}
}
