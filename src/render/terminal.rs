//! Terminal host implementation using ratatui
//!
//! This module provides the concrete implementation of [`ScreenHost`] on top of ratatui's
//! crossterm backend. Each frame is drawn into ratatui's buffer and flushed as a diff.

use crate::error::{Result, SplitpaneError};
use crate::input::{InputCollector, InputEvent};
use crate::render::host::ScreenHost;
use crate::render::panic_hook::{install_panic_hook, PanicHookGuard};
use crate::render::surface::Surface;
use ratatui::crossterm::{
    cursor, execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Screen host backed by the process's controlling terminal.
pub struct TerminalHost {
    terminal: Option<CrosstermTerminal>,
    input: InputCollector,
    panic_hook: Option<PanicHookGuard>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self {
            terminal: None,
            input: InputCollector::new(),
            panic_hook: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.terminal.is_some()
    }
}

impl Default for TerminalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenHost for TerminalHost {
    fn initialize(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            return Ok(());
        }
        enable_raw_mode()?;
        let terminal = undo_on_error(open_alternate_screen, restore_screen)?;
        self.terminal = Some(terminal);
        self.panic_hook = Some(install_panic_hook(restore_screen));
        log::debug!("terminal initialized");

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if let Some(hook) = self.panic_hook.take() {
            hook.restore();
        }
        if let Some(mut terminal) = self.terminal.take() {
            terminal.show_cursor()?;
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)?;
            log::debug!(
                "terminal restored after discarding {} queued events",
                self.input.discarded()
            );
        }
        Ok(())
    }

    fn bounds(&self) -> Result<Rect> {
        match &self.terminal {
            Some(terminal) => Ok(terminal.size()?),
            None => {
                let (width, height) = terminal::size()?;
                Ok(Rect {
                    x: 0,
                    y: 0,
                    width,
                    height,
                })
            }
        }
    }

    fn poll_input(&mut self) -> Result<InputEvent> {
        self.input.poll_event()
    }

    fn discard_input(&mut self) -> Result<usize> {
        self.input.discard_pending()
    }

    fn draw(&mut self, frame: &mut dyn FnMut(&mut dyn Surface)) -> Result<()> {
        let terminal = self
            .terminal
            .as_mut()
            .ok_or(SplitpaneError::SurfaceClosed)?;
        terminal.draw(|f| {
            let surface: &mut dyn Surface = f.buffer_mut();
            frame(surface);
        })?;
        Ok(())
    }
}

fn open_alternate_screen() -> Result<CrosstermTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

/// Run `setup`; if it fails, run `undo` before returning the error.
fn undo_on_error<T>(setup: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    let outcome = setup();
    if outcome.is_err() {
        undo();
    }
    outcome
}

/// Best-effort restore used when the normal cleanup path cannot run.
fn restore_screen() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

impl Drop for TerminalHost {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
