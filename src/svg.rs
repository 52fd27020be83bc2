//! Minimal SVG drawing sink.

use std::fmt::Write;

use kurbo::{BezPath, Circle, Point, Rect};
use peniko::Color;

use crate::render::{DrawSink, StrokeStyle};

/// Collects draw calls into SVG elements. Clearing starts a fresh document
/// sized to the cleared area.
#[derive(Debug, Default)]
pub struct SvgSink {
    view_box: Rect,
    elements: Vec<String>,
    current: BezPath,
}

impl SvgSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            self.view_box.x0,
            self.view_box.y0,
            self.view_box.width(),
            self.view_box.height(),
            self.view_box.width(),
            self.view_box.height()
        ));
        out.push('\n');
        for element in &self.elements {
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

impl DrawSink for SvgSink {
    fn clear(&mut self, area: Rect) {
        self.view_box = area;
        self.elements.clear();
        self.current = BezPath::new();
    }

    fn begin_shape(&mut self) {
        self.current = BezPath::new();
    }

    fn move_to(&mut self, point: Point) {
        self.current.move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        self.current.line_to(point);
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        let mut element = format!(r#"<path d="{}" fill="none""#, self.current.to_svg());
        write_paint_attr(&mut element, "stroke", style.color);
        let _ = write!(
            element,
            r#" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round"/>"#,
            style.width
        );
        self.elements.push(element);
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        let mut element = format!(
            r#"<circle cx="{}" cy="{}" r="{}""#,
            circle.center.x, circle.center.y, circle.radius
        );
        write_paint_attr(&mut element, "fill", color);
        element.push_str("/>");
        self.elements.push(element);
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    let _ = write!(
        out,
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    );
    if rgba.a != 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0);
    }
}
