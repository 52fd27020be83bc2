// This file is only compiled during tests

use std::collections::VecDeque;

use crate::error::{SensorError, SensorErrorKind};
use crate::position::GeoPoint;

/// Scripted position feed: yields its events in the order they were added.
#[derive(Debug, Default)]
pub struct MockFeed {
    events: VecDeque<Result<GeoPoint, SensorError>>,
}

impl MockFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fix(mut self, latitude: f64, longitude: f64) -> Self {
        self.events
            .push_back(Ok(GeoPoint::new(latitude, longitude)));
        self
    }

    pub fn failure(mut self, kind: SensorErrorKind) -> Self {
        self.events
            .push_back(Err(SensorError::new(kind, "mock failure")));
        self
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl Iterator for MockFeed {
    type Item = Result<GeoPoint, SensorError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.events.pop_front()
    }
}
