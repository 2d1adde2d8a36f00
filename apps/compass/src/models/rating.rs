#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A self-assessed skill rating on the fixed 1-5 scale.
///
/// Construction validates the range, so a `Rating` in hand is always valid.
/// Deserialization re-validates via `try_from`, so a serialized `7` is
/// rejected the same way console input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validates and wraps a raw value.
    ///
    /// Takes `i64` so already-parsed console input like `7` or `-2` reports
    /// a range error instead of failing earlier as an integer overflow.
    pub fn new(value: i64) -> Result<Self, AppError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(AppError::Validation(format!(
                "rating {value} is outside the 1-5 scale"
            )))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(i64::from(value)).map_err(|e| e.to_string())
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
