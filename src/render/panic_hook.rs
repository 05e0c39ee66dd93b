//! Process panic hook for the lifetime of a screen session.
//!
//! Painter panics are caught by the dispatcher, but the panic hook runs before unwinding
//! starts. Left alone, the default hook prints the panic message straight onto the alternate
//! screen. While a session hook is installed, panics raised inside a painter are routed to
//! `log` only. Any other panic first restores the terminal and then reaches the previous hook,
//! so its message lands on a usable screen.

use std::cell::Cell;
use std::panic;
use std::sync::Arc;

thread_local! {
    static PAINTING: Cell<bool> = const { Cell::new(false) };
}

/// Resets the painting flag even when the painter unwinds.
struct PaintingScope {
    outer: bool,
}

impl Drop for PaintingScope {
    fn drop(&mut self) {
        PAINTING.with(|flag| flag.set(self.outer));
    }
}

/// Run `paint` with the current thread marked as painting.
pub(crate) fn painting<R>(paint: impl FnOnce() -> R) -> R {
    let outer = PAINTING.with(|flag| flag.replace(true));
    let _scope = PaintingScope { outer };
    paint()
}

fn is_painting() -> bool {
    PAINTING.with(Cell::get)
}

/// Installed session hook. Dropping it (or calling [`PanicHookGuard::restore`]) puts the
/// previous hook back.
pub struct PanicHookGuard {
    restore: Option<Box<dyn FnOnce() + Send>>,
}

impl PanicHookGuard {
    pub fn restore(mut self) {
        self.restore_previous();
    }

    fn restore_previous(&mut self) {
        // Swapping hooks while panicking aborts the process.
        if std::thread::panicking() {
            return;
        }
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        self.restore_previous();
    }
}

/// Install the session hook. `restore_screen` runs before any panic that did not come from
/// a painter is handed to the previous hook.
pub fn install_panic_hook(restore_screen: fn()) -> PanicHookGuard {
    let previous: Arc<dyn Fn(&panic::PanicHookInfo<'_>) + Send + Sync + 'static> =
        Arc::from(panic::take_hook());
    let chained = Arc::clone(&previous);
    panic::set_hook(Box::new(move |info| {
        if is_painting() {
            log::debug!("painter {info}");
            return;
        }
        restore_screen();
        chained(info);
    }));

    PanicHookGuard {
        restore: Some(Box::new(move || {
            let _ = panic::take_hook();
            panic::set_hook(Box::new(move |info| previous(info)));
        })),
    }
}
