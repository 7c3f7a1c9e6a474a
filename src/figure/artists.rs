//! Concrete drawable objects

use crate::canvas::{Circle, FillRect, Line, Point};
use crate::color::ColorValue;

use super::artist::{Drawable, RenderContext};

/// Polyline through data points; single unified color
#[derive(Debug, Clone)]
pub struct Line2D {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub color: ColorValue,
    /// Width in points
    pub linewidth: f64,
}

impl Line2D {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, color: impl Into<ColorValue>) -> Self {
        Self {
            xs,
            ys,
            color: color.into(),
            linewidth: 1.5,
        }
    }
}

impl Drawable for Line2D {
    fn kind(&self) -> &'static str {
        "Line2D"
    }

    fn try_color(&self) -> Option<ColorValue> {
        Some(self.color.clone())
    }

    fn try_set_color(&mut self, color: ColorValue) -> bool {
        self.color = color;
        true
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        let Some(color) = ctx.resolve(&self.color, "line color") else {
            return;
        };
        let width = ctx.points_to_pixels(self.linewidth);
        let points: Vec<Point> = self
            .xs
            .iter()
            .zip(&self.ys)
            .map(|(x, y)| ctx.transform.apply(*x, *y))
            .collect();
        for pair in points.windows(2) {
            ctx.canvas.draw(&Line::new(pair[0], pair[1], color).with_width(width));
        }
    }
}

/// Filled rectangle with an outline
///
/// A rectangle flagged as `background` is the face of a figure or an axes and
/// is not filled when rendering with a transparent background.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub face: ColorValue,
    pub edge: ColorValue,
    pub linewidth: f64,
    pub background: bool,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64, face: impl Into<ColorValue>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            face: face.into(),
            edge: ColorValue::None,
            linewidth: 1.0,
            background: false,
        }
    }

    /// Figure background patch covering the whole figure
    pub fn figure_patch() -> Self {
        Self {
            edge: "white".into(),
            linewidth: 0.0,
            background: true,
            ..Self::new(0.0, 0.0, 1.0, 1.0, "white")
        }
    }

    pub fn with_edge(mut self, edge: impl Into<ColorValue>) -> Self {
        self.edge = edge.into();
        self
    }
}

impl Drawable for Rectangle {
    fn kind(&self) -> &'static str {
        "Rectangle"
    }

    fn try_edge_color(&self) -> Option<ColorValue> {
        Some(self.edge.clone())
    }

    fn try_set_edge_color(&mut self, color: ColorValue) -> bool {
        self.edge = color;
        true
    }

    fn try_face_color(&self) -> Option<ColorValue> {
        Some(self.face.clone())
    }

    fn try_set_face_color(&mut self, color: ColorValue) -> bool {
        self.face = color;
        true
    }

    /// Patches accept a unified color (setting face and edge) but have no
    /// single color to report back
    fn try_set_color(&mut self, color: ColorValue) -> bool {
        self.face = color.clone();
        self.edge = color;
        true
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        let rect = ctx
            .transform
            .apply_rect(self.x, self.y, self.width, self.height);

        if !(self.background && ctx.transparent) {
            if let Some(face) = ctx.resolve(&self.face, "rectangle face") {
                ctx.canvas.draw(&FillRect::new(rect, face));
            }
        }

        let width = ctx.points_to_pixels(self.linewidth);
        if width <= 0.0 {
            return;
        }
        if let Some(edge) = ctx.resolve(&self.edge, "rectangle edge") {
            let corners = [
                Point::new(rect.x, rect.y),
                Point::new(rect.right(), rect.y),
                Point::new(rect.right(), rect.bottom()),
                Point::new(rect.x, rect.bottom()),
            ];
            for i in 0..4 {
                let line = Line::new(corners[i], corners[(i + 1) % 4], edge).with_width(width);
                ctx.canvas.draw(&line);
            }
        }
    }
}

/// Circular markers at data positions with per-marker colors
#[derive(Debug, Clone)]
pub struct Scatter {
    pub offsets: Vec<(f64, f64)>,
    /// Marker area in points squared
    pub size: f64,
    /// One color per marker, cycled when shorter than `offsets`
    pub face: ColorValue,
    pub edge: ColorValue,
}

impl Scatter {
    pub fn new(offsets: Vec<(f64, f64)>, face: impl Into<ColorValue>) -> Self {
        Self {
            offsets,
            size: 36.0,
            face: face.into(),
            edge: "face".into(),
        }
    }

    fn edge_is_face(&self) -> bool {
        matches!(&self.edge, ColorValue::Name(n) if n == "face")
    }
}

impl Drawable for Scatter {
    fn kind(&self) -> &'static str {
        "PathCollection"
    }

    fn try_edge_color(&self) -> Option<ColorValue> {
        if self.edge_is_face() {
            return Some(self.face.clone());
        }
        Some(self.edge.clone())
    }

    fn try_set_edge_color(&mut self, color: ColorValue) -> bool {
        self.edge = color;
        true
    }

    fn try_face_color(&self) -> Option<ColorValue> {
        Some(self.face.clone())
    }

    fn try_set_face_color(&mut self, color: ColorValue) -> bool {
        self.face = color;
        true
    }

    fn try_set_color(&mut self, color: ColorValue) -> bool {
        self.face = color.clone();
        self.edge = color;
        true
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        let faces = ctx.resolve_all(&self.face, "marker faces");
        let edges = if self.edge_is_face() {
            faces.clone()
        } else {
            ctx.resolve_all(&self.edge, "marker edges")
        };
        let radius = ctx.points_to_pixels(self.size.max(0.0).sqrt() / 2.0);

        for (i, (x, y)) in self.offsets.iter().enumerate() {
            let center = ctx.transform.apply(*x, *y);
            if !faces.is_empty() {
                let face = faces[i % faces.len()];
                ctx.canvas.draw(&Circle::new(center, radius, face).filled());
            }
            if !edges.is_empty() {
                let edge = edges[i % edges.len()];
                ctx.canvas.draw(&Circle::new(center, radius, edge));
            }
        }
    }
}

/// Which side of the axes frame a spine runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpineSide {
    Left,
    Right,
    Bottom,
    Top,
}

/// Axes frame line
#[derive(Debug, Clone)]
pub struct Spine {
    pub side: SpineSide,
    pub edge: ColorValue,
    pub face: ColorValue,
    pub linewidth: f64,
}

impl Spine {
    pub fn new(side: SpineSide) -> Self {
        Self {
            side,
            edge: "black".into(),
            face: ColorValue::None,
            linewidth: 0.8,
        }
    }
}

impl Drawable for Spine {
    fn kind(&self) -> &'static str {
        "Spine"
    }

    fn try_edge_color(&self) -> Option<ColorValue> {
        Some(self.edge.clone())
    }

    fn try_set_edge_color(&mut self, color: ColorValue) -> bool {
        self.edge = color;
        true
    }

    fn try_face_color(&self) -> Option<ColorValue> {
        Some(self.face.clone())
    }

    fn try_set_face_color(&mut self, color: ColorValue) -> bool {
        self.face = color;
        true
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        let Some(edge) = ctx.resolve(&self.edge, "spine") else {
            return;
        };
        let frame = ctx.transform.frame();
        let (start, end) = match self.side {
            SpineSide::Left => (Point::new(frame.x, frame.y), Point::new(frame.x, frame.bottom())),
            SpineSide::Right => (
                Point::new(frame.right(), frame.y),
                Point::new(frame.right(), frame.bottom()),
            ),
            SpineSide::Top => (Point::new(frame.x, frame.y), Point::new(frame.right(), frame.y)),
            SpineSide::Bottom => (
                Point::new(frame.x, frame.bottom()),
                Point::new(frame.right(), frame.bottom()),
            ),
        };
        let width = ctx.points_to_pixels(self.linewidth);
        ctx.canvas.draw(&Line::new(start, end, edge).with_width(width));
    }
}
