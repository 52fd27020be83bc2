use tracing::debug;

use crate::position::{GeoPoint, distance};

/// Ordered, append-only record of every sample since the last reset, plus the
/// running distance walked along it.
///
/// `total_distance` is a cache of [`crate::position::path_length`] over
/// `points`; both are only ever changed together.
#[derive(Debug, Default)]
pub struct PathAccumulator {
    points: Vec<GeoPoint>,
    total_distance: f64,
    version: u64,
}

impl PathAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Integrate one sample. The first point contributes no distance;
    /// repeats and jitter are kept as-is.
    pub fn add_sample(&mut self, point: GeoPoint) {
        if let Some(last) = self.points.last() {
            let segment = distance(last, &point);
            self.total_distance += segment;
            debug!(
                "segment {:.2}m to {}, total {:.2}m",
                segment, point, self.total_distance
            );
        } else {
            self.total_distance = 0.0;
            debug!("first point {}", point);
        }
        self.points.push(point);
        self.version += 1;
    }

    /// Drop every point and zero the distance.
    pub fn reset(&mut self) {
        if self.points.is_empty() {
            return;
        }
        self.points.clear();
        self.total_distance = 0.0;
        self.version += 1;
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Meters walked along the path.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn last_point(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bumped on every change to the path. Hosts compare it against the value
    /// they last rendered to decide whether a redraw is due.
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::path_length;
    use proptest::prelude::*;

    #[test]
    fn test_accumulator_initialization() {
        let path = PathAccumulator::new();
        assert!(path.is_empty());
        assert_eq!(path.total_distance(), 0.0);
        assert_eq!(path.version(), 0);
        assert!(path.last_point().is_none());
    }

    #[test]
    fn test_first_sample_adds_no_distance() {
        let mut path = PathAccumulator::new();
        path.add_sample(GeoPoint::new(48.0, -123.0));

        assert_eq!(path.len(), 1);
        assert_eq!(path.total_distance(), 0.0);
        assert_eq!(path.version(), 1);
    }

    #[test]
    fn test_samples_accumulate_distance() {
        let mut path = PathAccumulator::new();
        path.add_sample(GeoPoint::new(0.0, 0.0));
        path.add_sample(GeoPoint::new(0.0, 0.001));
        path.add_sample(GeoPoint::new(0.001, 0.001));

        assert_eq!(path.len(), 3);
        assert_eq!(path.last_point(), Some(&GeoPoint::new(0.001, 0.001)));
        assert!((path.total_distance() - 222.4).abs() < 1.0);
    }

    #[test]
    fn test_repeated_point_is_kept() {
        let mut path = PathAccumulator::new();
        let p = GeoPoint::new(37.5665, 126.9780);
        path.add_sample(p);
        path.add_sample(p);
        path.add_sample(p);

        assert_eq!(path.len(), 3);
        assert_eq!(path.total_distance(), 0.0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut path = PathAccumulator::new();
        path.add_sample(GeoPoint::new(0.0, 0.0));
        path.add_sample(GeoPoint::new(0.0, 1.0));

        path.reset();
        assert!(path.is_empty());
        assert_eq!(path.total_distance(), 0.0);
        let version = path.version();

        // A second reset has nothing to discard.
        path.reset();
        assert!(path.is_empty());
        assert_eq!(path.total_distance(), 0.0);
        assert_eq!(path.version(), version);
    }

    #[test]
    fn test_distance_restarts_after_reset() {
        let mut path = PathAccumulator::new();
        path.add_sample(GeoPoint::new(0.0, 0.0));
        path.add_sample(GeoPoint::new(0.0, 1.0));
        path.reset();

        path.add_sample(GeoPoint::new(10.0, 10.0));
        assert_eq!(path.total_distance(), 0.0);
        assert_eq!(path.points(), &[GeoPoint::new(10.0, 10.0)]);
    }

    proptest! {
        #[test]
        fn total_matches_fold_and_never_decreases(
            samples in prop::collection::vec((-80.0f64..80.0, -170.0f64..170.0), 0..40)
        ) {
            let mut path = PathAccumulator::new();
            let mut previous = 0.0;
            for (lat, lon) in samples {
                path.add_sample(GeoPoint::new(lat, lon));
                prop_assert!(path.total_distance() >= previous);
                previous = path.total_distance();
            }
            let expected = path_length(path.points());
            prop_assert!((path.total_distance() - expected).abs() <= 1e-6 * expected.max(1.0));
        }
    }
}
