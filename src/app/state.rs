//! Loop state and the intents actions use to change it.

use crate::config::DriveConfig;
use crate::error::{Result, SplitpaneError};
use std::time::Duration;

/// Lifecycle of a drive loop. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrivePhase {
    Idle,
    Running,
    Stopped,
}

/// What a control action asks the loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Leave the loop state alone.
    Continue,
    /// Finish the current iteration and exit.
    Stop,
    /// Lengthen the tick by one step.
    Slower,
    /// Shorten the tick by one step.
    Faster,
    /// Replace the tick; the value is clamped to the configured limits.
    SetTick(Duration),
}

/// State owned by the drive loop and lent read-only to actions.
#[derive(Debug, Clone)]
pub struct LoopState {
    phase: DrivePhase,
    tick: Duration,
    step: Duration,
    min_tick: Duration,
    max_tick: Duration,
    iterations: u64,
}

impl LoopState {
    pub fn new(config: &DriveConfig) -> Self {
        // Guard against unvalidated configs; the floor must stay positive.
        let min_tick = config.min_tick.max(Duration::from_millis(1));
        let max_tick = config.max_tick.max(min_tick);
        Self {
            phase: DrivePhase::Idle,
            tick: config.tick.clamp(min_tick, max_tick),
            step: config.tick_step,
            min_tick,
            max_tick,
            iterations: 0,
        }
    }

    pub fn phase(&self) -> DrivePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == DrivePhase::Running
    }

    /// Current sleep between iterations.
    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn tick_limits(&self) -> (Duration, Duration) {
        (self.min_tick, self.max_tick)
    }

    /// Completed iterations since `start`.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub(crate) fn transition(&mut self, to: DrivePhase) -> Result<()> {
        match (self.phase, to) {
            (DrivePhase::Idle, DrivePhase::Running) | (DrivePhase::Running, DrivePhase::Stopped) => {
                log::info!("drive loop {:?} -> {:?}", self.phase, to);
                self.phase = to;
                Ok(())
            }
            (from, to) => Err(SplitpaneError::InvalidTransition { from, to }),
        }
    }

    pub(crate) fn apply(&mut self, intent: Intent) {
        let tick = match intent {
            Intent::Continue => return,
            Intent::Stop => {
                if self.is_running() {
                    self.phase = DrivePhase::Stopped;
                    log::info!("drive loop stop requested");
                }
                return;
            }
            Intent::Slower => self.tick.saturating_add(self.step),
            Intent::Faster => self.tick.saturating_sub(self.step),
            Intent::SetTick(tick) => tick,
        };
        let clamped = tick.clamp(self.min_tick, self.max_tick);
        if clamped != self.tick {
            log::debug!("tick interval {:?} -> {:?}", self.tick, clamped);
            self.tick = clamped;
        }
    }

    pub(crate) fn record_iteration(&mut self) {
        self.iterations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> LoopState {
        LoopState::new(
            &DriveConfig::default()
                .with_tick(Duration::from_millis(30))
                .with_tick_step(Duration::from_millis(10))
                .with_limits(Duration::from_millis(5), Duration::from_millis(60)),
        )
    }

    #[test]
    fn starts_idle_with_configured_tick() {
        let state = state();
        assert_eq!(state.phase(), DrivePhase::Idle);
        assert_eq!(state.tick(), Duration::from_millis(30));
        assert_eq!(state.iterations(), 0);
    }

    #[test]
    fn faster_never_reaches_zero() {
        let mut state = state();
        for _ in 0..20 {
            state.apply(Intent::Faster);
            assert!(state.tick() >= Duration::from_millis(5));
        }
        assert_eq!(state.tick(), Duration::from_millis(5));
    }

    #[test]
    fn slower_stops_at_ceiling() {
        let mut state = state();
        for _ in 0..20 {
            state.apply(Intent::Slower);
        }
        assert_eq!(state.tick(), Duration::from_millis(60));
    }

    #[test]
    fn set_tick_is_clamped() {
        let mut state = state();
        state.apply(Intent::SetTick(Duration::ZERO));
        assert_eq!(state.tick(), Duration::from_millis(5));
        state.apply(Intent::SetTick(Duration::from_millis(42)));
        assert_eq!(state.tick(), Duration::from_millis(42));
    }

    #[test]
    fn transitions_follow_the_lifecycle() {
        let mut state = state();
        assert!(state.transition(DrivePhase::Stopped).is_err());
        state.transition(DrivePhase::Running).unwrap();
        assert!(state.transition(DrivePhase::Running).is_err());
        state.transition(DrivePhase::Stopped).unwrap();
        assert!(state.transition(DrivePhase::Running).is_err());
    }

    #[test]
    fn stop_only_applies_while_running() {
        let mut state = state();
        state.apply(Intent::Stop);
        assert_eq!(state.phase(), DrivePhase::Idle);

        state.transition(DrivePhase::Running).unwrap();
        state.apply(Intent::Stop);
        assert_eq!(state.phase(), DrivePhase::Stopped);
    }

    #[test]
    fn zero_floor_in_config_is_raised() {
        let state = LoopState::new(
            &DriveConfig::default().with_limits(Duration::ZERO, Duration::from_millis(10)),
        );
        assert!(state.tick_limits().0 > Duration::ZERO);
    }
}
