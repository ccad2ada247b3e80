//! Replays scripted host frames through the input bridge.
//!
//! Each line of output names the frame and one event the editor received,
//! followed by the host flags left after consumption.

mod console;
mod script;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use console::ConsoleEditor;
use quire_bridge::{BridgeConfig, BridgedEditor, HostInput};
use quire_primitives::EditorMode;
use script::FrameScript;
use tracing::info;

/// Replay command line arguments.
#[derive(Parser, Debug)]
#[command(name = "quire-replay")]
#[command(about = "Replay scripted GUI input frames through the quire input bridge")]
struct Args {
	/// TOML frame script
	#[arg(value_name = "SCRIPT")]
	script: PathBuf,

	/// Bridge configuration file
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Report every button and wheel event as consumed by the editor
	#[arg(long)]
	consume_mouse: bool,

	/// Run with no focused buffer
	#[arg(long)]
	no_buffer: bool,

	/// Mode the editor starts in
	#[arg(long, default_value = "standard")]
	mode: EditorMode,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let config = match &args.config {
		Some(path) => BridgeConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
		None => BridgeConfig::default(),
	};
	let script = FrameScript::load(&args.script)?;
	info!(frames = script.frames.len(), script = %args.script.display(), "replaying");

	let editor = ConsoleEditor::new(!args.no_buffer, args.consume_mouse, args.mode);
	for line in replay(&script, config, editor) {
		println!("{line}");
	}

	Ok(())
}

/// Runs every frame of `script` and returns the transcript.
fn replay(script: &FrameScript, config: BridgeConfig, editor: ConsoleEditor) -> Vec<String> {
	let mut bridged = BridgedEditor::new(editor, config);
	let mut transcript = Vec::new();

	for (index, frame) in script.frames.iter().enumerate() {
		tracing::trace!(frame = index, keys = ?frame.keys_pressed().iter().collect::<Vec<_>>(), "replaying frame");
		*bridged.host_mut() = frame.clone();
		bridged.handle_input();

		for line in bridged.editor_mut().take_lines() {
			transcript.push(format!("frame {index}: {line}"));
		}
		transcript.push(format!("frame {index}: host {}", host_flags(bridged.host())));
	}

	transcript.push(format!("active mode: {}", bridged.editor().mode()));
	transcript
}

fn host_flags(host: &HostInput) -> String {
	format!(
		"clicked=[{}, {}] released=[{}, {}] wheel={}",
		host.mouse_clicked.left, host.mouse_clicked.right, host.mouse_released.left, host.mouse_released.right, host.mouse_wheel
	)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("quire_bridge=trace,quire_replay=debug")
		} else {
			EnvFilter::new("quire_bridge=info,quire_replay=info")
		}
	});

	let layer = tracing_subscriber::fmt::layer()
		.with_writer(std::io::stderr)
		.with_target(true);

	tracing_subscriber::registry().with(filter).with(layer).init();
}
