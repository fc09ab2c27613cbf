//! Error types
//!
//! The tick itself never fails. These cover construction-time preconditions
//! and host configuration.

use std::fmt;

/// Invalid simulation setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Brick grid is not the fixed rows x columns layout
    MalformedGrid { expected: usize, found: usize },
    /// A row is not on one line, left to right, below the previous row,
    /// with its row index as tier
    MalformedRow { row: usize },
    /// A round must start with at least one life
    InvalidLives,
    /// An entity was placed outside the playfield
    OutOfBounds { entity: &'static str, x: i32, y: i32 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::MalformedGrid { expected, found } => {
                write!(f, "malformed brick grid: expected {expected} bricks, found {found}")
            }
            SimError::MalformedRow { row } => write!(f, "malformed brick grid: row {row} is out of shape"),
            SimError::InvalidLives => write!(f, "a round needs at least one life"),
            SimError::OutOfBounds { entity, x, y } => {
                write!(f, "{entity} at ({x}, {y}) lies outside the playfield")
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Failure loading or saving host settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings I/O error: {e}"),
            SettingsError::Json(e) => write!(f, "settings JSON error: {e}"),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Json(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}
