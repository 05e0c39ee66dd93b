//! Application orchestration layer
//!
//! The drive loop owns the region tree and the host, maps input to control intents, and
//! renders the tree on a fixed cadence from one dedicated thread.

pub mod actions;
pub mod drive;
pub mod state;

pub use actions::{default_intent, Action, ActionTable};
pub use drive::DriveLoop;
pub use state::{DrivePhase, Intent, LoopState};
