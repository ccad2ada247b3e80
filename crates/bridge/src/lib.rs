//! Immediate-mode GUI input bridge for a modal editor.
//!
//! Once per host frame, [`InputBridge::handle_input`] reads the host's
//! [`HostInput`] snapshot, forwards mouse activity to the editor (hiding
//! consumed clicks and wheel motion from the host), then resolves the frame's
//! keyboard state into key presses or a global mode switch.
//!
//! * [`tables`]: static host-key tables
//! * [`mouse`]: mouse forwarding and consumption
//! * [`dispatch`]: tiered keyboard decision and character fallback
//! * [`sink`]: editor traits the bridge drives

pub mod config;
pub mod dispatch;
pub mod host;
pub mod modifiers;
pub mod mouse;
pub mod sink;
pub mod tables;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use config::{BridgeConfig, ClickSuppression, ConfigError, ModeKeys};
pub use dispatch::KeyDecision;
pub use host::{HostInput, HostKey, KeyboardQuery};
pub use mouse::MouseConsumption;
pub use sink::{EditorBuffer, EditorSink, ModeHandler, MouseSink};

/// Translates host frames into editor events.
#[derive(Debug, Clone, Default)]
pub struct InputBridge {
	config: BridgeConfig,
}

impl InputBridge {
	pub fn new(config: BridgeConfig) -> Self {
		Self { config }
	}

	/// Runs one frame of input translation.
	///
	/// Mouse events are always forwarded. Keyboard processing is skipped when
	/// the editor has no active buffer.
	pub fn handle_input<E: EditorSink + ?Sized>(&self, host: &mut HostInput, editor: &mut E) {
		let consumed = mouse::forward(host, editor);
		mouse::suppress(host, consumed, self.config.click_suppression);

		let modifiers = modifiers::resolve(host);

		if editor.active_buffer().is_none() {
			tracing::debug!("no active buffer; skipping keyboard input");
			return;
		}

		let decision = dispatch::decide(&*host, modifiers, self.config.mode_keys());
		deliver(decision, editor);
	}
}

fn deliver<E: EditorSink + ?Sized>(decision: KeyDecision, editor: &mut E) {
	match decision {
		KeyDecision::Idle => {}
		KeyDecision::SwitchMode(mode) => {
			tracing::debug!(%mode, "switching global mode");
			editor.set_global_mode(mode);
		}
		decision => {
			let Some(buffer) = editor.active_buffer() else {
				return;
			};
			let handler = buffer.mode_handler();
			for press in decision.key_presses() {
				tracing::trace!(%press, "key press");
				handler.add_key_press(press.code, press.modifiers);
			}
		}
	}
}

/// An editor paired with the host snapshot it is fed from.
///
/// The host refreshes the snapshot through [`host_mut`](Self::host_mut) and
/// then calls [`handle_input`](Self::handle_input) once per tick.
#[derive(Debug)]
pub struct BridgedEditor<E> {
	bridge: InputBridge,
	host: HostInput,
	editor: E,
}

impl<E: EditorSink> BridgedEditor<E> {
	pub fn new(editor: E, config: BridgeConfig) -> Self {
		Self {
			bridge: InputBridge::new(config),
			host: HostInput::default(),
			editor,
		}
	}

	pub fn host(&self) -> &HostInput {
		&self.host
	}

	pub fn host_mut(&mut self) -> &mut HostInput {
		&mut self.host
	}

	pub fn editor(&self) -> &E {
		&self.editor
	}

	pub fn editor_mut(&mut self) -> &mut E {
		&mut self.editor
	}

	pub fn into_editor(self) -> E {
		self.editor
	}

	/// Translates the current host snapshot.
	pub fn handle_input(&mut self) {
		self.bridge.handle_input(&mut self.host, &mut self.editor);
	}
}
