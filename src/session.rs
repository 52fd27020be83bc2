//! One tracking session: the accumulated path plus the Idle/Tracking state
//! that gates which samples are accepted.
//!
//! Every transition hands back a [`StatusMessage`] for the host to show.

use std::fmt;

use tracing::{debug, info, warn};

use crate::error::{SensorError, SessionError};
use crate::path::PathAccumulator;
use crate::position::GeoPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Tracking,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// User-facing banner text for the last transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub severity: Severity,
    pub text: String,
}

impl StatusMessage {
    fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Debug)]
pub struct TrackingSession {
    path: PathAccumulator,
    status: Status,
}

impl Default for TrackingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackingSession {
    pub fn new() -> Self {
        Self {
            path: PathAccumulator::new(),
            status: Status::Idle,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_tracking(&self) -> bool {
        self.status == Status::Tracking
    }

    /// Read-only view for renderers.
    pub fn path(&self) -> &PathAccumulator {
        &self.path
    }

    pub fn total_distance(&self) -> f64 {
        self.path.total_distance()
    }

    /// Idle -> Tracking. The existing path is kept, so a stopped session can
    /// be resumed.
    pub fn start(&mut self) -> Result<StatusMessage, SessionError> {
        if self.is_tracking() {
            return Err(SessionError::AlreadyTracking);
        }
        self.status = Status::Tracking;
        info!("tracking started with {} points", self.path.len());
        Ok(StatusMessage::new(
            Severity::Success,
            "GPS tracking started.",
        ))
    }

    /// Tracking -> Idle. Returns `None` when there was nothing to stop.
    pub fn stop(&mut self) -> Option<StatusMessage> {
        if !self.is_tracking() {
            return None;
        }
        self.status = Status::Idle;
        info!(
            "tracking stopped at {:.2}m over {} points",
            self.path.total_distance(),
            self.path.len()
        );
        Some(StatusMessage::new(Severity::Info, "GPS tracking stopped."))
    }

    /// Stop if needed, then discard the path and distance.
    pub fn clear(&mut self) -> StatusMessage {
        self.stop();
        self.path.reset();
        info!("path cleared");
        StatusMessage::new(Severity::Info, "Path and distance cleared.")
    }

    /// Integrate one sample. Rejected unless tracking.
    pub fn record(&mut self, point: GeoPoint) -> Result<StatusMessage, SessionError> {
        if !self.is_tracking() {
            debug!("dropping sample {} while idle", point);
            return Err(SessionError::NotTracking);
        }
        self.path.add_sample(point);
        Ok(StatusMessage::new(
            Severity::Info,
            format!(
                "New position: lat {:.5}, lon {:.5}",
                point.latitude, point.longitude
            ),
        ))
    }

    /// A feed failure ends acquisition but keeps what was already walked.
    pub fn fail(&mut self, error: &SensorError) -> StatusMessage {
        warn!("sensor failure: {}", error);
        self.status = Status::Idle;
        StatusMessage::new(
            Severity::Error,
            format!("Error: {}", error.kind.guidance()),
        )
    }

    /// Route one feed event to [`Self::record`] or [`Self::fail`].
    pub fn handle(
        &mut self,
        event: Result<GeoPoint, SensorError>,
    ) -> Result<StatusMessage, SessionError> {
        match event {
            Ok(point) => self.record(point),
            Err(error) => Ok(self.fail(&error)),
        }
    }
}
