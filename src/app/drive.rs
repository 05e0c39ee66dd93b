//! The drive loop: poll one input, apply control intents, render the tree, drop queued
//! input, sleep. Repeat until stopped.

use crate::app::actions::{default_intent, ActionTable};
use crate::app::state::{DrivePhase, Intent, LoopState};
use crate::config::DriveConfig;
use crate::error::{Result, SplitpaneError};
use crate::input::KeyBinding;
use crate::layout::Region;
use crate::render::{render, RenderReport, ScreenHost, Surface};
use ratatui::crossterm::event::KeyCode;
use std::thread;

/// Scheduler that owns a region tree and renders it through a host at a fixed cadence.
pub struct DriveLoop<H: ScreenHost> {
    host: H,
    root: Region,
    actions: ActionTable,
    state: LoopState,
    exit_key: KeyCode,
    last_report: RenderReport,
}

impl<H: ScreenHost> DriveLoop<H> {
    pub fn new(host: H, root: Region, config: &DriveConfig) -> Self {
        Self {
            host,
            root,
            actions: ActionTable::new(),
            state: LoopState::new(config),
            exit_key: config.exit_key,
            last_report: RenderReport::default(),
        }
    }

    /// Register a control action (builder style).
    pub fn on<F>(mut self, binding: impl Into<KeyBinding>, action: F) -> Self
    where
        F: FnMut(&LoopState) -> Intent + Send + 'static,
    {
        self.actions.bind(binding, action);
        self
    }

    pub fn actions_mut(&mut self) -> &mut ActionTable {
        &mut self.actions
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    pub fn root(&self) -> &Region {
        &self.root
    }

    /// Mutable access to the tree, only before the loop starts.
    pub fn root_mut(&mut self) -> Result<&mut Region> {
        match self.state.phase() {
            DrivePhase::Idle => Ok(&mut self.root),
            from => Err(SplitpaneError::InvalidTransition {
                from,
                to: DrivePhase::Idle,
            }),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Report of the most recent successful render pass.
    pub fn last_report(&self) -> RenderReport {
        self.last_report
    }

    pub fn into_parts(self) -> (H, Region) {
        (self.host, self.root)
    }

    /// `Idle -> Running`: prepare the host and allow iterations.
    pub fn start(&mut self) -> Result<()> {
        if self.state.phase() != DrivePhase::Idle {
            return Err(SplitpaneError::InvalidTransition {
                from: self.state.phase(),
                to: DrivePhase::Running,
            });
        }
        self.host.initialize()?;
        self.state.transition(DrivePhase::Running)
    }

    /// Run one iteration without sleeping.
    pub fn step(&mut self) -> Result<()> {
        if !self.state.is_running() {
            return Err(SplitpaneError::InvalidTransition {
                from: self.state.phase(),
                to: DrivePhase::Running,
            });
        }
        if let Err(err) = self.iterate() {
            self.host_failure(err);
        }
        // Input queued during this iteration is dropped even when it was abandoned.
        if let Err(err) = self.host.discard_input() {
            self.host_failure(err);
        }
        self.state.record_iteration();
        Ok(())
    }

    /// Start, iterate until a stop is requested or the surface goes away, then restore the
    /// host. Blocks the calling thread.
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        while self.state.is_running() {
            self.step()?;
            thread::sleep(self.state.tick());
        }
        log::info!(
            "drive loop finished after {} iterations",
            self.state.iterations()
        );
        match self.host.cleanup() {
            Err(SplitpaneError::SurfaceClosed) => Ok(()),
            other => other,
        }
    }

    fn iterate(&mut self) -> Result<()> {
        let event = self.host.poll_input()?;

        let intent = match self.actions.resolve(&event, &self.state) {
            Some(intent) => intent,
            None => default_intent(&event, self.exit_key),
        };
        self.state.apply(intent);

        let mut report = RenderReport::default();
        let root = &mut self.root;
        self.host.draw(&mut |surface: &mut dyn Surface| {
            report = render(root, surface, &event);
        })?;
        if report.failures > 0 {
            log::debug!("{} of {} painters failed", report.failures, report.painted);
        }
        self.last_report = report;
        Ok(())
    }

    fn host_failure(&mut self, err: SplitpaneError) {
        if err.is_fatal_to_surface() {
            log::warn!("{err}; stopping drive loop");
            self.state.apply(Intent::Stop);
        } else {
            log::warn!("iteration abandoned: {err}");
        }
    }
}

impl<H: ScreenHost + Send + 'static> DriveLoop<H> {
    /// Run the loop on a dedicated blocking thread of the current tokio runtime and hand it
    /// back once it stops.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn(self) -> tokio::task::JoinHandle<Result<Self>> {
        tokio::task::spawn_blocking(move || {
            let mut drive = self;
            drive.run().map(|()| drive)
        })
    }
}
