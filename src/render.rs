//! Rendering subsystem.
//!
//! Surfaces and panes, the painter capability, the recursive dispatcher, and the host
//! boundary the drive loop draws through.

pub mod dispatch;
pub mod host;
pub mod painter;
pub mod panic_hook;
pub mod surface;
pub mod terminal;

pub use dispatch::{render, RenderReport};
pub use host::ScreenHost;
pub use painter::{painter, PaintResult, Painter};
pub use panic_hook::{install_panic_hook, PanicHookGuard};
pub use surface::{Pane, Surface};
pub use terminal::TerminalHost;

#[cfg(test)]
pub use host::tests::MockHost;
