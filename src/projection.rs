//! Scale-to-fit mapping from latitude/longitude onto a drawing surface.
//!
//! Everything here is recomputed per render: the bounding box moves with every
//! sample and the surface may be resized between calls.

use kurbo::{Point, Size, Vec2};

use crate::config::{FIT_MARGIN, MIN_EFFECTIVE_RANGE_DEG};
use crate::position::GeoPoint;

/// Lat/lon-aligned rectangle enclosing a set of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Single pass over `points`. `None` when there is nothing to enclose.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
        };
        for p in rest {
            bbox.min_lat = bbox.min_lat.min(p.latitude);
            bbox.max_lat = bbox.max_lat.max(p.latitude);
            bbox.min_lon = bbox.min_lon.min(p.longitude);
            bbox.max_lon = bbox.max_lon.max(p.longitude);
        }
        Some(bbox)
    }

    pub fn lat_range(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_range(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// True when every point shares the same coordinates.
    pub fn is_point(&self) -> bool {
        self.lat_range() == 0.0 && self.lon_range() == 0.0
    }
}

/// Uniform scale and centering offset for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionFrame {
    /// Pixels per degree, same on both axes.
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ProjectionFrame {
    /// Fit `bbox` inside `FIT_MARGIN` of `surface`, centered. Ranges below
    /// `MIN_EFFECTIVE_RANGE_DEG` are widened to it.
    pub fn fit(bbox: &BoundingBox, surface: Size) -> Self {
        let lat_range = bbox.lat_range().max(MIN_EFFECTIVE_RANGE_DEG);
        let lon_range = bbox.lon_range().max(MIN_EFFECTIVE_RANGE_DEG);

        let scale_x = FIT_MARGIN * surface.width / lon_range;
        let scale_y = FIT_MARGIN * surface.height / lat_range;
        let scale = scale_x.min(scale_y);

        let rendered_width = lon_range * scale;
        let rendered_height = lat_range * scale;

        Self {
            scale,
            offset_x: (surface.width - rendered_width) / 2.0,
            offset_y: (surface.height - rendered_height) / 2.0,
        }
    }
}

/// How points of one path land on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Single fix or zero-extent path: everything sits at the surface center.
    Centered(Point),
    Fitted {
        bbox: BoundingBox,
        frame: ProjectionFrame,
    },
}

impl Projection {
    /// Build the projection for `points` on a surface of `surface` pixels.
    /// Non-positive dimensions are treated as zero.
    pub fn new(points: &[GeoPoint], surface: Size) -> Option<Self> {
        let bbox = BoundingBox::from_points(points)?;
        let surface = Size::new(surface.width.max(0.0), surface.height.max(0.0));

        if points.len() < 2 || bbox.is_point() {
            let center = Point::new(surface.width / 2.0, surface.height / 2.0);
            return Some(Self::Centered(center));
        }

        Some(Self::Fitted {
            bbox,
            frame: ProjectionFrame::fit(&bbox, surface),
        })
    }

    /// Map a point to surface pixels. Latitude grows upward, pixel rows grow
    /// downward, hence the flip.
    pub fn project(&self, point: &GeoPoint) -> Point {
        match self {
            Self::Centered(center) => *center,
            Self::Fitted { bbox, frame } => {
                let x = (point.longitude - bbox.min_lon) * frame.scale;
                let y = (bbox.max_lat - point.latitude) * frame.scale;
                Point::new(x, y) + Vec2::new(frame.offset_x, frame.offset_y)
            }
        }
    }

    pub fn frame(&self) -> Option<&ProjectionFrame> {
        match self {
            Self::Centered(_) => None,
            Self::Fitted { frame, .. } => Some(frame),
        }
    }
}
