//! # splitpane - Terminal Screen-Region Layout Engine
//!
//! A rectangular terminal screen is recursively partitioned into a binary tree of regions.
//! Each leaf is drawn by its own painter, and the whole tree is redrawn on a fixed
//! input/render cadence by a loop running on one dedicated thread.
//!
//! ## Features
//!
//! - **Exact tiling**: every split partitions its parent with no lost row or column
//! - **Clipped painters**: painters draw through a pane that cannot write outside its leaf
//! - **Failure isolation**: a failing painter blanks its own leaf, not the screen
//! - **Bounded cadence**: the tick interval is adjustable at runtime within fixed limits
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`layout`] - Region tree and split geometry
//! - [`render`] - Surfaces, painters, render dispatch, and the terminal host
//! - [`input`] - Input events, key bindings, and non-blocking collection
//! - [`app`] - The drive loop and its control actions
//! - [`config`] - Loop cadence and exit key settings

// Core modules
pub mod config;
pub mod error;

// Subsystems
pub mod input;
pub mod layout;
pub mod render;

// Scheduling
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, SplitpaneError};

// Public API surface for external usage
pub use app::{DriveLoop, Intent, LoopState};
pub use config::DriveConfig;
pub use input::{InputEvent, KeyBinding};
pub use layout::{Region, SplitAxis, SplitSpec};
pub use render::{painter, Pane, Painter, ScreenHost, Surface, TerminalHost};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
