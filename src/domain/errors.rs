// Domain-level errors for player state changes.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerError {
    // Bearing must be finite; speed must be finite and non-negative.
    InvalidVelocity { bearing: f64, kph: f64 },
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::InvalidVelocity { bearing, kph } => write!(
                f,
                "invalid velocity (bearing {bearing}, kph {kph}): bearing must be finite and kph must be a finite value >= 0"
            ),
        }
    }
}

impl std::error::Error for PlayerError {}
