//! Drive loop configuration.
//!
//! Defaults match the classic cadence of the engine: a 37 ms tick adjusted in 10 ms steps,
//! with Delete as the exit key. With the `config` feature the same values can be read from a
//! TOML file:
//!
//! ```toml
//! tick_ms = 50
//! tick_step_ms = 5
//! min_tick_ms = 10
//! max_tick_ms = 500
//! exit_key = "q"
//! ```

use crate::error::{Result, SplitpaneError};
use ratatui::crossterm::event::KeyCode;
use std::time::Duration;

pub const DEFAULT_TICK: Duration = Duration::from_millis(37);
pub const DEFAULT_TICK_STEP: Duration = Duration::from_millis(10);
pub const DEFAULT_MIN_TICK: Duration = Duration::from_millis(5);
pub const DEFAULT_MAX_TICK: Duration = Duration::from_millis(1000);

/// Settings for the drive loop cadence and its built-in bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveConfig {
    /// Initial sleep between iterations.
    pub tick: Duration,
    /// Amount PageUp/PageDown add to or remove from the tick.
    pub tick_step: Duration,
    pub min_tick: Duration,
    pub max_tick: Duration,
    /// Key that stops the loop when no action is registered for it.
    pub exit_key: KeyCode,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            tick: DEFAULT_TICK,
            tick_step: DEFAULT_TICK_STEP,
            min_tick: DEFAULT_MIN_TICK,
            max_tick: DEFAULT_MAX_TICK,
            exit_key: KeyCode::Delete,
        }
    }
}

impl DriveConfig {
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_limits(mut self, min_tick: Duration, max_tick: Duration) -> Self {
        self.min_tick = min_tick;
        self.max_tick = max_tick;
        self
    }

    pub fn with_tick_step(mut self, step: Duration) -> Self {
        self.tick_step = step;
        self
    }

    pub fn with_exit_key(mut self, key: KeyCode) -> Self {
        self.exit_key = key;
        self
    }

    /// Check the limits and pull `tick` into `[min_tick, max_tick]`.
    pub fn validate(mut self) -> Result<Self> {
        if self.min_tick.is_zero() {
            return Err(SplitpaneError::config("min tick must be greater than zero"));
        }
        if self.min_tick > self.max_tick {
            return Err(SplitpaneError::config(format!(
                "min tick {:?} is larger than max tick {:?}",
                self.min_tick, self.max_tick
            )));
        }
        if self.tick_step.is_zero() {
            return Err(SplitpaneError::config("tick step must be greater than zero"));
        }
        self.tick = self.tick.clamp(self.min_tick, self.max_tick);
        Ok(self)
    }
}

/// Parse a key name such as `q`, `delete`, `esc` or `f5`.
pub fn parse_key(name: &str) -> Result<KeyCode> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(ch));
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "delete" | "del" => KeyCode::Delete,
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        other => match other.strip_prefix('f').map(str::parse::<u8>) {
            Some(Ok(n)) if (1..=12).contains(&n) => KeyCode::F(n),
            _ => return Err(SplitpaneError::config(format!("unknown key name '{name}'"))),
        },
    };
    Ok(code)
}

#[cfg(feature = "config")]
mod file {
    use super::{parse_key, DriveConfig};
    use crate::error::{Result, SplitpaneError};
    use serde::Deserialize;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct ConfigFile {
        tick_ms: Option<u64>,
        tick_step_ms: Option<u64>,
        min_tick_ms: Option<u64>,
        max_tick_ms: Option<u64>,
        exit_key: Option<String>,
    }

    impl DriveConfig {
        /// Parse TOML, filling unset keys from the defaults.
        pub fn from_toml_str(source: &str) -> Result<Self> {
            let file: ConfigFile =
                toml::from_str(source).map_err(|err| SplitpaneError::config(err.to_string()))?;
            let mut config = DriveConfig::default();
            if let Some(ms) = file.tick_ms {
                config.tick = Duration::from_millis(ms);
            }
            if let Some(ms) = file.tick_step_ms {
                config.tick_step = Duration::from_millis(ms);
            }
            if let Some(ms) = file.min_tick_ms {
                config.min_tick = Duration::from_millis(ms);
            }
            if let Some(ms) = file.max_tick_ms {
                config.max_tick = Duration::from_millis(ms);
            }
            if let Some(key) = file.exit_key {
                config.exit_key = parse_key(&key)?;
            }
            config.validate()
        }

        pub fn load(path: &Path) -> Result<Self> {
            let source = std::fs::read_to_string(path).map_err(|err| {
                SplitpaneError::config(format!("cannot read {}: {err}", path.display()))
            })?;
            Self::from_toml_str(&source)
        }

        /// `<config dir>/splitpane/config.toml`, when the platform has a config dir.
        pub fn default_path() -> Option<PathBuf> {
            dirs::config_dir().map(|dir| dir.join("splitpane").join("config.toml"))
        }
    }

}
