//! Low-level input collection: non-blocking crossterm polling and translation into
//! [`InputEvent`]s.

use crate::error::Result;
use crate::input::InputEvent;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

/// Upper bound on events dropped by a single `discard_pending` call, so a flooding input
/// source cannot pin the loop.
const MAX_DISCARD_PER_CALL: usize = 1024;

/// Translate a crossterm event into the loop's input vocabulary.
///
/// Only key presses carry through. Releases, repeats reported as separate kinds, mouse, focus,
/// paste and resize events all become [`InputEvent::NoInput`].
pub fn translate(event: Event) -> InputEvent {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => InputEvent::Key(key),
        Event::Resize(width, height) => {
            log::debug!("terminal resized to {width}x{height}; layout is not re-flowed");
            InputEvent::NoInput
        }
        _ => InputEvent::NoInput,
    }
}

/// Collector that polls crossterm without blocking.
#[derive(Debug, Default)]
pub struct InputCollector {
    discarded: u64,
}

impl InputCollector {
    pub fn new() -> Self {
        Self { discarded: 0 }
    }

    /// Read at most one event. Returns `NoInput` immediately when nothing is queued.
    pub fn poll_event(&mut self) -> Result<InputEvent> {
        if !event::poll(Duration::ZERO)? {
            return Ok(InputEvent::NoInput);
        }
        Ok(translate(event::read()?))
    }

    /// Drop everything queued since the last poll, returning how many events were dropped.
    pub fn discard_pending(&mut self) -> Result<usize> {
        let mut dropped = 0;
        while dropped < MAX_DISCARD_PER_CALL && event::poll(Duration::ZERO)? {
            event::read()?;
            dropped += 1;
        }
        if dropped > 0 {
            self.discarded += dropped as u64;
            log::trace!("discarded {dropped} queued input events");
        }
        Ok(dropped)
    }

    /// Total number of events dropped over the collector's lifetime.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
}
