use std::fmt;
use std::io;

use thiserror::Error;

/// Why the position feed stopped delivering samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorErrorKind {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl SensorErrorKind {
    /// What the user can do about it.
    pub fn guidance(&self) -> &str {
        match self {
            SensorErrorKind::PermissionDenied => {
                "Location permission was denied. Allow location access in the app settings."
            }
            SensorErrorKind::PositionUnavailable => {
                "Location is unavailable. Check the GPS signal and try restarting the device."
            }
            SensorErrorKind::Timeout => {
                "Timed out waiting for a location. Check the connection and retry somewhere with good GPS reception."
            }
            SensorErrorKind::Unknown => "An unknown error occurred. Try restarting the app.",
        }
    }
}

impl fmt::Display for SensorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SensorErrorKind::PermissionDenied => "permission denied",
            SensorErrorKind::PositionUnavailable => "position unavailable",
            SensorErrorKind::Timeout => "timeout",
            SensorErrorKind::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Failure reported by the position feed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("sensor {kind}: {message}")]
pub struct SensorError {
    pub kind: SensorErrorKind,
    pub message: String,
}

impl SensorError {
    pub fn new(kind: SensorErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<io::Error> for SensorError {
    fn from(err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::PermissionDenied => SensorErrorKind::PermissionDenied,
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => SensorErrorKind::Timeout,
            io::ErrorKind::NotFound
            | io::ErrorKind::UnexpectedEof
            | io::ErrorKind::BrokenPipe => SensorErrorKind::PositionUnavailable,
            _ => SensorErrorKind::Unknown,
        };
        Self::new(kind, err.to_string())
    }
}

/// Transition not allowed from the session's current status.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("tracking is already running")]
    AlreadyTracking,
    #[error("tracking is not running")]
    NotTracking,
}
