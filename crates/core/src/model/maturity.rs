use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("maturity level must be between 0 and 4, got {0}")]
pub struct MaturityError(pub i64);

/// How fully a control is implemented, from 0 (not at all) to 4 (fully).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MaturityLevel(u8);

impl MaturityLevel {
    pub const MIN: MaturityLevel = MaturityLevel(0);
    pub const MAX: MaturityLevel = MaturityLevel(4);

    /// All five levels, lowest first.
    pub const ALL: [MaturityLevel; 5] = [
        MaturityLevel(0),
        MaturityLevel(1),
        MaturityLevel(2),
        MaturityLevel(3),
        MaturityLevel(4),
    ];

    /// # Errors
    ///
    /// Returns `MaturityError` when `value` is outside `0..=4`.
    pub fn new(value: u8) -> Result<Self, MaturityError> {
        if value > Self::MAX.0 {
            return Err(MaturityError(i64::from(value)));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "Not Implemented",
            1 => "Ad-hoc",
            2 => "Partially",
            3 => "Mostly",
            _ => "Fully Implemented",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self.0 {
            0 => "No formal processes or controls in place",
            1 => "Informal processes, inconsistent implementation",
            2 => "Defined processes, partially implemented",
            3 => "Comprehensive processes, mostly implemented",
            _ => "Fully implemented, monitored, and optimized",
        }
    }
}

impl TryFrom<u8> for MaturityLevel {
    type Error = MaturityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for MaturityLevel {
    type Error = MaturityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| MaturityError(value))
            .and_then(Self::new)
            .map_err(|_| MaturityError(value))
    }
}

impl From<MaturityLevel> for u8 {
    fn from(level: MaturityLevel) -> Self {
        level.0
    }
}
