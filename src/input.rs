//! Input subsystem.
//!
//! Translates crossterm terminal events into the small event vocabulary painters and control
//! actions consume, and provides the non-blocking collector used by the terminal host.

pub mod event;
pub mod raw;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::input` rather than reaching into submodules.
pub use event::{InputEvent, KeyBinding};
pub use raw::InputCollector;
