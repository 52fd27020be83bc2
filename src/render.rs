//! Replays a path as draw calls against a [`DrawSink`].

use kurbo::{Circle, Point, Rect, Size};
use peniko::Color;
use peniko::color::Rgba8;
use tracing::debug;

use crate::config::{
    END_MARKER_COLOR, MARKER_RADIUS, PATH_COLOR, PATH_LINE_WIDTH, START_MARKER_COLOR,
};
use crate::position::GeoPoint;
use crate::projection::Projection;

/// Line paint for the path stroke.
#[derive(Clone, Copy, Debug)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: PATH_COLOR,
            width: PATH_LINE_WIDTH,
        }
    }
}

/// Primitive drawing operations, in the same pixel space as the surface size
/// handed to [`render`].
pub trait DrawSink {
    /// Wipe `area` back to the background.
    fn clear(&mut self, area: Rect);
    /// Start a new, empty shape.
    fn begin_shape(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    /// Stroke the current shape.
    fn stroke(&mut self, style: &StrokeStyle);
    fn fill_circle(&mut self, circle: Circle, color: Color);
}

/// Clear the surface and draw `path` scaled to fit it, with a start marker on
/// the first point and an end marker on the last one.
///
/// Holds no state between calls; identical inputs give identical draw calls.
pub fn render(path: &[GeoPoint], surface: Size, sink: &mut dyn DrawSink) {
    // Non-positive dimensions draw into a zero-sized surface.
    let surface = Size::new(surface.width.max(0.0), surface.height.max(0.0));
    sink.clear(surface.to_rect());

    let Some(projection) = Projection::new(path, surface) else {
        return;
    };
    debug!("rendering {} points with {:?}", path.len(), projection);

    let mut projected = path.iter().map(|p| projection.project(p));
    let Some(start) = projected.next() else {
        return;
    };

    sink.begin_shape();
    sink.move_to(start);
    let mut end = start;
    for point in projected {
        sink.line_to(point);
        end = point;
    }
    sink.stroke(&StrokeStyle::default());

    sink.begin_shape();
    sink.fill_circle(Circle::new(start, MARKER_RADIUS), START_MARKER_COLOR);

    if path.len() > 1 {
        sink.begin_shape();
        sink.fill_circle(Circle::new(end, MARKER_RADIUS), END_MARKER_COLOR);
    }
}

/// One recorded call on a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    BeginShape,
    MoveTo(Point),
    LineTo(Point),
    Stroke { color: Rgba8, width: f64 },
    FillCircle { circle: Circle, color: Rgba8 },
}

/// Sink that keeps every call, for tests and for diffing consecutive renders.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    commands: Vec<DrawCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Centers of the filled circles, in draw order.
    pub fn markers(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { circle, .. } => Some(circle.center),
                _ => None,
            })
            .collect()
    }

    /// Every vertex passed to `move_to` or `line_to`, in draw order.
    pub fn vertices(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSink for RecordingSink {
    fn clear(&mut self, area: Rect) {
        self.commands.push(DrawCommand::Clear(area));
    }

    fn begin_shape(&mut self) {
        self.commands.push(DrawCommand::BeginShape);
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Stroke {
            color: style.color.to_rgba8(),
            width: style.width,
        });
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            circle,
            color: color.to_rgba8(),
        });
    }
}
