use quire_primitives::{MouseButton, Vec2};

use super::*;

#[test]
fn key_set_ignores_duplicates() {
	let mut set = HostKeySet::default();
	set.insert(HostKey::A);
	set.insert(HostKey::A);
	set.insert(HostKey::Escape);
	assert_eq!(set.iter().collect::<Vec<_>>(), vec![HostKey::A, HostKey::Escape]);
}

#[test]
fn input_queue_is_bounded() {
	let mut host = HostInput::new();
	for _ in 0..INPUT_QUEUE_CAPACITY {
		assert!(host.push_char('x'));
	}
	assert!(!host.push_char('y'));
	assert_eq!(host.input_characters().len(), INPUT_QUEUE_CAPACITY);
	assert!(host.input_characters().iter().all(|&c| c == 'x'));
}

#[test]
fn new_frame_keeps_position_and_modifiers() {
	let mut host = HostInput::new();
	host.mouse_pos = Vec2::new(40.0, 12.0);
	host.mouse_delta = Vec2::new(1.0, 1.0);
	host.mouse_clicked.set(MouseButton::Right, true);
	host.mouse_released.set(MouseButton::Left, true);
	host.mouse_wheel = -1.0;
	host.key_ctrl = true;
	host.press(HostKey::Tab);
	host.push_str("ab");

	host.new_frame();

	assert_eq!(host.mouse_pos, Vec2::new(40.0, 12.0));
	assert!(host.key_ctrl);
	assert!(!host.mouse_delta.is_nonzero());
	assert_eq!(host.mouse_clicked, ButtonFlags::default());
	assert_eq!(host.mouse_released, ButtonFlags::default());
	assert_eq!(host.mouse_wheel, 0.0);
	assert!(host.keys_pressed().is_empty());
	assert!(host.input_characters().is_empty());
}

#[test]
fn button_flags_index_by_button() {
	let mut flags = ButtonFlags::default();
	flags.set(MouseButton::Right, true);
	assert!(flags.get(MouseButton::Right));
	assert!(!flags.get(MouseButton::Left));
}

#[test]
fn deserializes_frame_from_toml() {
	let host: HostInput = toml::from_str(
		r#"
		mouse_pos = { x = 3.0, y = 4.0 }
		mouse_clicked = { left = true }
		key_ctrl = true
		keys = ["Escape", "A"]
		chars = "hi"
		"#,
	)
	.unwrap();

	assert_eq!(host.mouse_pos, Vec2::new(3.0, 4.0));
	assert!(host.mouse_clicked.left);
	assert!(!host.mouse_clicked.right);
	assert!(host.key_ctrl);
	assert!(host.is_key_pressed(HostKey::Escape));
	assert!(host.is_key_pressed(HostKey::A));
	assert!(!host.is_key_pressed(HostKey::B));
	assert_eq!(host.input_characters(), ['h', 'i']);
}

#[test]
fn rejects_unknown_frame_fields() {
	assert!(toml::from_str::<HostInput>("mouse_speed = 2.0").is_err());
}
