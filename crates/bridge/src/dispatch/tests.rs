use pretty_assertions::assert_eq;
use quire_primitives::{EditorMode, ExtKey, KeyPress, Modifiers};
use rstest::rstest;
use smallvec::smallvec;

use super::*;
use crate::host::{HostInput, HostKey};
use crate::tables::{SHIFTABLE_KEYS, SPECIAL_KEYS};

fn frame(keys: &[HostKey], chars: &str) -> HostInput {
	let mut host = HostInput::new();
	for &key in keys {
		host.press(key);
	}
	host.push_str(chars);
	host
}

fn decide_default(host: &HostInput, modifiers: Modifiers) -> KeyDecision {
	decide(host, modifiers, ModeKeys::default())
}

#[test]
fn every_special_key_maps_alone() {
	for entry in &SPECIAL_KEYS {
		let host = frame(&[entry.host], "");
		assert_eq!(
			decide_default(&host, Modifiers::ALT),
			KeyDecision::Special(KeyPress::new(entry.code, Modifiers::ALT)),
			"{:?}",
			entry.host
		);
	}
}

#[test]
fn only_first_special_key_is_honoured() {
	let host = frame(&[HostKey::F12, HostKey::PageUp, HostKey::Tab], "");
	assert_eq!(
		decide_default(&host, Modifiers::NONE),
		KeyDecision::Special(KeyPress::new(ExtKey::Tab, Modifiers::NONE))
	);
}

#[test]
fn navigation_keys_win_over_function_keys() {
	let host = frame(&[HostKey::F1, HostKey::Escape], "");
	assert_eq!(
		decide_default(&host, Modifiers::NONE),
		KeyDecision::Special(KeyPress::new(ExtKey::Escape, Modifiers::NONE))
	);
}

#[test]
fn special_key_beats_queued_characters() {
	let host = frame(&[HostKey::Escape], "x");
	let decision = decide_default(&host, Modifiers::NONE);
	assert_eq!(decision.key_presses(), &[KeyPress::new(ExtKey::Escape, Modifiers::NONE)]);
}

#[test]
fn special_key_beats_ctrl_chords() {
	let host = frame(&[HostKey::Comma, HostKey::Num2, HostKey::A, HostKey::Enter], "");
	assert_eq!(
		decide_default(&host, Modifiers::CTRL),
		KeyDecision::Special(KeyPress::new(ExtKey::Return, Modifiers::CTRL))
	);
}

#[rstest]
#[case(Modifiers::CTRL)]
#[case(Modifiers::CTRL | Modifiers::SHIFT)]
#[case(Modifiers::CTRL | Modifiers::ALT | Modifiers::SHIFT)]
fn ctrl_punctuation_is_unshifted(#[case] modifiers: Modifiers) {
	for entry in &SHIFTABLE_KEYS {
		let host = frame(&[entry.host], "");
		assert_eq!(
			decide_default(&host, modifiers),
			KeyDecision::Punctuation(KeyPress::new(entry.code, modifiers))
		);
	}
}

#[test]
fn punctuation_without_ctrl_falls_through_to_characters() {
	let host = frame(&[HostKey::Slash], "?");
	assert_eq!(
		decide_default(&host, Modifiers::SHIFT),
		KeyDecision::Text(smallvec![KeyPress::new('?', Modifiers::SHIFT)])
	);
}

#[test]
fn punctuation_beats_mode_switch() {
	let host = frame(&[HostKey::Num1, HostKey::Semicolon], "");
	assert_eq!(
		decide_default(&host, Modifiers::CTRL),
		KeyDecision::Punctuation(KeyPress::new(';', Modifiers::CTRL))
	);
}

#[test]
fn ctrl_one_switches_to_standard() {
	let host = frame(&[HostKey::Num1], "1");
	assert_eq!(decide_default(&host, Modifiers::CTRL), KeyDecision::SwitchMode(EditorMode::Standard));
}

#[test]
fn ctrl_two_switches_to_vim() {
	let host = frame(&[HostKey::Num2], "");
	let decision = decide_default(&host, Modifiers::CTRL);
	assert_eq!(decision, KeyDecision::SwitchMode(EditorMode::Vim));
	assert!(decision.key_presses().is_empty());
}

#[test]
fn standard_switch_wins_when_both_mode_keys_pressed() {
	let host = frame(&[HostKey::Num2, HostKey::Num1], "");
	assert_eq!(decide_default(&host, Modifiers::CTRL), KeyDecision::SwitchMode(EditorMode::Standard));
}

#[test]
fn mode_keys_follow_configuration() {
	let keys = ModeKeys {
		standard: HostKey::S,
		vim: HostKey::V,
	};
	let host = frame(&[HostKey::V], "");
	assert_eq!(decide(&host, Modifiers::CTRL, keys), KeyDecision::SwitchMode(EditorMode::Vim));

	let host = frame(&[HostKey::Num2], "");
	assert_eq!(
		decide(&host, Modifiers::CTRL, keys),
		KeyDecision::Chord(smallvec![KeyPress::new('2', Modifiers::CTRL)])
	);
}

#[test]
fn mode_keys_without_ctrl_are_plain_text() {
	let host = frame(&[HostKey::Num1], "1");
	assert_eq!(
		decide_default(&host, Modifiers::NONE),
		KeyDecision::Text(smallvec![KeyPress::char('1')])
	);
}

#[test]
fn ctrl_letter_emits_single_chord() {
	let host = frame(&[HostKey::S], "");
	assert_eq!(
		decide_default(&host, Modifiers::CTRL),
		KeyDecision::Chord(smallvec![KeyPress::new('s', Modifiers::CTRL)])
	);
}

#[test]
fn ctrl_chord_reports_every_pressed_alphanumeric() {
	let host = frame(&[HostKey::Space, HostKey::X, HostKey::Num7], "");
	let decision = decide_default(&host, Modifiers::CTRL);
	assert_eq!(decision.key_presses(), &[
		KeyPress::new(' ', Modifiers::CTRL),
		KeyPress::new('7', Modifiers::CTRL),
		KeyPress::new('x', Modifiers::CTRL),
	]);
}

#[test]
fn ctrl_space_precedes_letters() {
	let host = frame(&[HostKey::A, HostKey::Space], "");
	assert_eq!(
		decide_default(&host, Modifiers::CTRL),
		KeyDecision::Chord(smallvec![KeyPress::new(' ', Modifiers::CTRL), KeyPress::new('a', Modifiers::CTRL)])
	);
}

#[test]
fn chord_suppresses_character_queue() {
	let host = frame(&[HostKey::C], "c");
	let decision = decide_default(&host, Modifiers::CTRL);
	assert_eq!(decision.key_presses(), &[KeyPress::new('c', Modifiers::CTRL)]);
}

#[test]
fn ctrl_without_table_match_falls_back_to_characters() {
	let host = frame(&[HostKey::Keypad3], "3");
	assert_eq!(
		decide_default(&host, Modifiers::CTRL),
		KeyDecision::Text(smallvec![KeyPress::new('3', Modifiers::CTRL)])
	);
}

#[test]
fn carriage_return_is_dropped_from_text() {
	let host = frame(&[], "a\rb");
	assert_eq!(
		decide_default(&host, Modifiers::NONE),
		KeyDecision::Text(smallvec![KeyPress::char('a'), KeyPress::char('b')])
	);
}

#[test]
fn nul_terminates_character_queue() {
	let host = frame(&[], "ab\0cd");
	assert_eq!(decide_default(&host, Modifiers::NONE).key_presses(), &[
		KeyPress::char('a'),
		KeyPress::char('b'),
	]);
}

#[test]
fn text_carries_current_modifiers() {
	let host = frame(&[], "\u{e9}");
	assert_eq!(
		decide_default(&host, Modifiers::ALT),
		KeyDecision::Text(smallvec![KeyPress::new('\u{e9}', Modifiers::ALT)])
	);
}

#[test]
fn quiet_frame_is_idle() {
	assert_eq!(decide_default(&HostInput::new(), Modifiers::CTRL), KeyDecision::Idle);
	assert_eq!(decide_default(&frame(&[], "\r"), Modifiers::NONE), KeyDecision::Idle);
	assert_eq!(decide_default(&frame(&[HostKey::Insert], ""), Modifiers::NONE), KeyDecision::Idle);
}
