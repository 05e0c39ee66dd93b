//! Host surface driver boundary.
//!
//! The drive loop talks to the screen only through [`ScreenHost`]: lifecycle hooks, the
//! non-blocking input source, and a draw call that lends the loop a [`Surface`] for one frame.

use crate::error::Result;
use crate::input::InputEvent;
use crate::render::surface::Surface;
use ratatui::layout::Rect;

/// Core trait for the terminal (or test double) the drive loop renders to.
pub trait ScreenHost {
    /// Prepare the screen (raw mode, alternate screen, hidden cursor).
    fn initialize(&mut self) -> Result<()>;

    /// Restore the screen to the state it had before `initialize`.
    fn cleanup(&mut self) -> Result<()>;

    /// Current drawable area.
    fn bounds(&self) -> Result<Rect>;

    /// Return the next queued input without blocking, or `InputEvent::NoInput`.
    fn poll_input(&mut self) -> Result<InputEvent>;

    /// Drop all input queued since the last poll. Returns the number of events dropped.
    fn discard_input(&mut self) -> Result<usize>;

    /// Run one frame: `frame` draws into the surface, then the host presents it.
    fn draw(&mut self, frame: &mut dyn FnMut(&mut dyn Surface)) -> Result<()>;
}
