//! Normalized input vocabulary consumed by the editing engine.
//!
//! Nothing in here knows about a host GUI. Hosts translate their own key and
//! mouse identifiers into these types at the bridge boundary.

/// Plain 2D geometry for pointer positions and deltas.
pub mod geometry;
/// Key codes, extended keys and modifier sets.
pub mod key;
/// Editor mode names and the process-wide mode cell.
pub mod mode;
/// Normalized mouse events.
pub mod mouse;

pub use geometry::Vec2;
pub use key::{EXT_KEY_BASE, ExtKey, KeyCode, KeyPress, Modifiers};
pub use mode::{EditorMode, ModeCell, ModeParseError};
pub use mouse::{MouseButton, MouseEvent};
