//! Error types and handling infrastructure for splitpane.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary layers `anyhow` on top for context.
//!
//! ## Design Principles
//!
//! - **Structural errors are synchronous**: split misuse is reported to the caller of `split`
//! - **Host errors are classified**: a torn-down surface stops the loop, anything else is
//!   survivable for the next tick
//! - **Consistency**: Standardized Result type across all modules

use crate::app::DrivePhase;
use ratatui::layout::Rect;
use thiserror::Error;

/// The main error type for splitpane operations.
#[derive(Error, Debug)]
pub enum SplitpaneError {
    /// `split` (or painter assignment) was attempted on a region that already has children
    #[error("Region {bounds} is already split")]
    AlreadySplit { bounds: Rect },

    /// The split request cannot be satisfied by the region's geometry
    #[error("Invalid split: {message}")]
    InvalidSplitSpec { message: String },

    /// A painter returned an error or panicked while drawing its leaf
    #[error("Painter failed in region {bounds}: {message}")]
    PainterFailure { bounds: Rect, message: String },

    /// The host surface failed for the current iteration
    #[error("Surface operation failed: {message}")]
    Surface {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The host surface is gone; nothing further can be drawn
    #[error("Surface has been torn down")]
    SurfaceClosed,

    /// Illegal drive loop state change
    #[error("Cannot move drive loop from {from:?} to {to:?}")]
    InvalidTransition { from: DrivePhase, to: DrivePhase },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

/// Standard Result type for splitpane operations.
pub type Result<T> = std::result::Result<T, SplitpaneError>;

impl SplitpaneError {
    /// Create an InvalidSplitSpec error with a descriptive message
    pub fn invalid_split(message: impl Into<String>) -> Self {
        Self::InvalidSplitSpec {
            message: message.into(),
        }
    }

    /// Create a PainterFailure for the given leaf bounds
    pub fn painter(bounds: Rect, message: impl Into<String>) -> Self {
        Self::PainterFailure {
            bounds,
            message: message.into(),
        }
    }

    /// Create a Surface error from an io::Error with additional context
    pub fn surface(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Surface {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Whether the error means the host surface can no longer be used.
    pub fn is_fatal_to_surface(&self) -> bool {
        matches!(self, Self::SurfaceClosed)
    }
}

// Automatic conversion from io::Error: a vanished terminal is a teardown, the rest is transient
impl From<std::io::Error> for SplitpaneError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::BrokenPipe
            | std::io::ErrorKind::UnexpectedEof
            | std::io::ErrorKind::NotConnected => Self::SurfaceClosed,
            _ => Self::Surface {
                message: "terminal I/O failed".to_string(),
                source: err,
            },
        }
    }
}
