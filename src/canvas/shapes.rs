//! Primitives the figure artists are drawn with
//!
//! Pixel (x, y) covers the unit square starting at (x, y), so its center sits
//! at (x + 0.5, y + 0.5). Coverage is sampled at pixel centers, with a one
//! pixel soft edge on curved and slanted outlines.

use super::{Canvas, Color};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned box, `y` growing downwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box spanning two opposite corners given in any order
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    fn grow(&self, margin: f64) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }
}

/// Something that can paint itself onto a [`Canvas`]
pub trait Shape {
    fn rasterize(&self, canvas: &mut Canvas);
}

/// Paint every pixel whose center lies in `bounds` with `color` scaled by
/// `coverage(center)`
fn sweep(canvas: &mut Canvas, bounds: Rect, color: Color, coverage: impl Fn(Point) -> f64) {
    let clip = |v: f64, max: u32| v.clamp(0.0, f64::from(max)) as i64;
    let x0 = clip(bounds.x.floor(), canvas.width);
    let x1 = clip(bounds.right().ceil(), canvas.width);
    let y0 = clip(bounds.y.floor(), canvas.height);
    let y1 = clip(bounds.bottom().ceil(), canvas.height);

    for y in y0..y1 {
        for x in x0..x1 {
            let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let cov = coverage(center);
            if cov > 0.0 {
                canvas.paint(x, y, color.with_coverage(cov as f32));
            }
        }
    }
}

/// Straight stroke with round caps
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub color: Color,
    /// Stroke width in pixels
    pub width: f64,
}

impl Line {
    pub fn new(start: Point, end: Point, color: Color) -> Self {
        Self {
            start,
            end,
            color,
            width: 1.0,
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    fn distance_to(&self, p: Point) -> f64 {
        let (dx, dy) = (self.end.x - self.start.x, self.end.y - self.start.y);
        let len2 = dx * dx + dy * dy;
        let t = if len2 > 0.0 {
            (((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len2).clamp(0.0, 1.0)
        } else {
            0.0
        };
        p.distance(Point::new(self.start.x + t * dx, self.start.y + t * dy))
    }
}

impl Shape for Line {
    fn rasterize(&self, canvas: &mut Canvas) {
        let half = self.width.max(0.0) / 2.0;
        let bounds = Rect::from_corners(self.start, self.end).grow(half + 1.0);
        sweep(canvas, bounds, self.color, |p| {
            (half + 0.5 - self.distance_to(p)).clamp(0.0, 1.0)
        });
    }
}

/// Disc or ring
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    pub filled: bool,
}

impl Circle {
    /// One pixel wide ring; see [`Circle::filled`]
    pub fn new(center: Point, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
            filled: false,
        }
    }

    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }
}

impl Shape for Circle {
    fn rasterize(&self, canvas: &mut Canvas) {
        let r = self.radius.max(0.0);
        let bounds = Rect::new(self.center.x - r, self.center.y - r, 2.0 * r, 2.0 * r).grow(1.0);
        sweep(canvas, bounds, self.color, |p| {
            let d = p.distance(self.center);
            let cov = if self.filled {
                r + 0.5 - d
            } else {
                1.0 - (d - r).abs()
            };
            cov.clamp(0.0, 1.0)
        });
    }
}

/// Hard-edged solid box
#[derive(Debug, Clone, Copy)]
pub struct FillRect {
    pub rect: Rect,
    pub color: Color,
}

impl FillRect {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

impl Shape for FillRect {
    fn rasterize(&self, canvas: &mut Canvas) {
        let r = self.rect;
        sweep(canvas, r, self.color, |p| {
            let inside = p.x >= r.x && p.x < r.right() && p.y >= r.y && p.y < r.bottom();
            if inside {
                1.0
            } else {
                0.0
            }
        });
    }
}
