use peniko::Color;

// ** GEODESY ** //

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// ** PROJECTION ** //

/// Share of the surface the fitted path may occupy on each axis.
pub const FIT_MARGIN: f64 = 0.95;
/// Smallest lat/lon range (degrees) used when fitting, roughly 10-20 m.
/// Applied regardless of latitude, so longitude is stretched near the poles.
pub const MIN_EFFECTIVE_RANGE_DEG: f64 = 0.0001;

// ** STYLE ** //

/// Path stroke (#007bff).
pub const PATH_COLOR: Color = Color::from_rgb8(0x00, 0x7b, 0xff);
pub const PATH_LINE_WIDTH: f64 = 4.0;
/// Start marker fill (#28a745).
pub const START_MARKER_COLOR: Color = Color::from_rgb8(0x28, 0xa7, 0x45);
/// End marker fill (#dc3545).
pub const END_MARKER_COLOR: Color = Color::from_rgb8(0xdc, 0x35, 0x45);
pub const MARKER_RADIUS: f64 = 6.0;

// ** HOST ** //

/// Drawing surface used when the host does not supply one.
pub const DEFAULT_SURFACE_WIDTH: f64 = 800.0;
pub const DEFAULT_SURFACE_HEIGHT: f64 = 400.0;
