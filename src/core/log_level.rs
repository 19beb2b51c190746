//! Log level definitions and level enablers

use super::error::LoggerError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Severity of a log entry, ordered from least to most severe.
///
/// `DPanic`, `Panic` and `Fatal` carry side effects when logged through the
/// dedicated [`Logger`](crate::Logger) methods: a development-mode panic, an
/// unconditional panic and process termination respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    DPanic = 4,
    Panic = 5,
    Fatal = 6,
}

impl Level {
    /// All levels in ascending severity.
    pub const ALL: [Level; 7] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::DPanic,
        Level::Panic,
        Level::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::DPanic => "DPANIC",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        }
    }

    /// Whether `self` is active for the given threshold.
    #[inline]
    pub fn enabled_at(&self, threshold: Level) -> bool {
        *self >= threshold
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
            Level::DPanic | Level::Panic | Level::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "DPANIC" => Ok(Level::DPanic),
            "PANIC" => Ok(Level::Panic),
            "FATAL" => Ok(Level::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        Level::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| LoggerError::invalid_level(value.to_string()))
    }
}

/// Decides whether a level is active.
///
/// Implemented by [`Level`] itself (a fixed threshold) and by
/// [`AtomicLevel`] (a threshold that can be changed at runtime).
pub trait LevelEnabler: Send + Sync {
    fn enabled(&self, level: Level) -> bool;
}

impl LevelEnabler for Level {
    #[inline]
    fn enabled(&self, level: Level) -> bool {
        level.enabled_at(*self)
    }
}

impl<E: LevelEnabler + ?Sized> LevelEnabler for Arc<E> {
    #[inline]
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }
}

/// A threshold shared between clones and adjustable while loggers are live.
///
/// # Example
///
/// ```
/// use rust_facility_logger::{AtomicLevel, Level, LevelEnabler};
///
/// let level = AtomicLevel::new(Level::Info);
/// assert!(!level.enabled(Level::Debug));
///
/// level.set_level(Level::Debug);
/// assert!(level.enabled(Level::Debug));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AtomicLevel {
    level: Arc<RwLock<Level>>,
}

impl AtomicLevel {
    pub fn new(level: Level) -> Self {
        Self {
            level: Arc::new(RwLock::new(level)),
        }
    }

    pub fn level(&self) -> Level {
        *self.level.read()
    }

    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }
}

impl LevelEnabler for AtomicLevel {
    #[inline]
    fn enabled(&self, level: Level) -> bool {
        level.enabled_at(*self.level.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_enabled_is_at_or_above_threshold() {
        assert!(Level::Warn.enabled_at(Level::Warn));
        assert!(Level::Error.enabled_at(Level::Warn));
        assert!(!Level::Info.enabled_at(Level::Warn));
        assert!(LevelEnabler::enabled(&Level::Info, Level::Fatal));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("dpanic".parse::<Level>().unwrap(), Level::DPanic);
        assert_eq!("FATAL".parse::<Level>().unwrap(), Level::Fatal);
        assert!("trace".parse::<Level>().is_err());
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(Level::try_from(0).unwrap(), Level::Debug);
        assert_eq!(Level::try_from(6).unwrap(), Level::Fatal);
        assert!(matches!(
            Level::try_from(7),
            Err(LoggerError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Level::DPanic).unwrap();
        assert_eq!(json, "\"dpanic\"");
        let level: Level = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(level, Level::Warn);
    }

    #[test]
    fn test_atomic_level_shared_between_clones() {
        let level = AtomicLevel::new(Level::Error);
        let clone = level.clone();
        assert!(!clone.enabled(Level::Warn));

        level.set_level(Level::Warn);
        assert!(clone.enabled(Level::Warn));
        assert_eq!(clone.level(), Level::Warn);
    }
}
