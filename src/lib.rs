pub mod config;
pub mod error;
pub mod feed;
pub mod path;
pub mod position;
pub mod projection;
pub mod render;
pub mod session;
pub mod svg;

// Re-export commonly used types
pub use error::{SensorError, SensorErrorKind, SessionError};
pub use feed::NmeaFeed;
pub use path::PathAccumulator;
pub use position::{GeoPoint, distance};
pub use render::{DrawSink, render};
pub use session::TrackingSession;

#[cfg(test)]
pub(crate) mod mocks;
