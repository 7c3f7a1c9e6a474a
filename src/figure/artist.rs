//! Drawable object interface

use std::fmt;

use tracing::warn;

use crate::canvas::{Canvas, Color, Point, Rect};
use crate::color::ColorValue;

use super::axes::Axes;

/// Stable identity of an object inside its figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Maps data coordinates into a pixel frame on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    frame: Rect,
    xlim: (f64, f64),
    ylim: (f64, f64),
}

impl Transform {
    /// Figure-fraction coordinates: (0, 0) bottom-left, (1, 1) top-right
    pub fn figure(width_px: u32, height_px: u32) -> Self {
        Self {
            frame: Rect::new(0.0, 0.0, f64::from(width_px), f64::from(height_px)),
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
        }
    }

    /// Data limits mapped onto `frame`
    pub fn new(frame: Rect, xlim: (f64, f64), ylim: (f64, f64)) -> Self {
        Self { frame, xlim, ylim }
    }

    /// Pixel box this transform maps onto
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn apply(&self, x: f64, y: f64) -> Point {
        let fx = fraction(x, self.xlim);
        let fy = fraction(y, self.ylim);
        Point::new(
            self.frame.x + fx * self.frame.width,
            self.frame.bottom() - fy * self.frame.height,
        )
    }

    /// Pixel rectangle of the data-space box at (x, y) with the given extent
    pub fn apply_rect(&self, x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect::from_corners(self.apply(x, y), self.apply(x + width, y + height))
    }
}

fn fraction(v: f64, (lo, hi): (f64, f64)) -> f64 {
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        0.5
    } else {
        (v - lo) / span
    }
}

/// State handed to [`Drawable::draw`]
pub struct RenderContext<'a> {
    pub canvas: &'a mut Canvas,
    pub transform: Transform,
    /// Background faces (figure and axes patches) are left unpainted
    pub transparent: bool,
    pub dpi: f64,
}

impl RenderContext<'_> {
    /// Points to pixels at the figure resolution
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }

    /// Resolve a single color for painting; `None` means skip
    pub fn resolve(&self, color: &ColorValue, what: &str) -> Option<Color> {
        match color.to_pixel() {
            Ok(pixel) => pixel,
            Err(e) => {
                warn!("skipping {}: {}", what, e);
                None
            }
        }
    }

    /// Resolve the per-element colors of a collection
    pub fn resolve_all(&self, color: &ColorValue, what: &str) -> Vec<Color> {
        match color.to_rgba_list() {
            Ok(list) => list.into_iter().map(Color::from_unit).collect(),
            Err(e) => {
                warn!("skipping {}: {}", what, e);
                Vec::new()
            }
        }
    }
}

/// A renderable element of a figure
///
/// The color accessors are capabilities: an object that has no edge color
/// returns `None` from [`try_edge_color`](Drawable::try_edge_color) and
/// `false` from [`try_set_edge_color`](Drawable::try_set_edge_color). The
/// defaults describe an object with no color capabilities at all.
pub trait Drawable: fmt::Debug {
    /// Short type name used in logs
    fn kind(&self) -> &'static str;

    /// Objects directly below this one in the figure graph
    fn children(&self) -> &[ObjectId] {
        &[]
    }

    /// Attach a child; `false` if this object cannot hold children
    fn add_child(&mut self, _child: ObjectId) -> bool {
        false
    }

    /// Coordinate system for this object's children, if it defines one
    fn child_transform(&self, _parent: &Transform) -> Option<Transform> {
        None
    }

    /// Whether this object is a plotting surface (an axes)
    fn is_plotting_surface(&self) -> bool {
        false
    }

    /// Downcast hook for the built-in [`Axes`]
    fn as_axes_mut(&mut self) -> Option<&mut Axes> {
        None
    }

    fn try_edge_color(&self) -> Option<ColorValue> {
        None
    }

    fn try_set_edge_color(&mut self, _color: ColorValue) -> bool {
        false
    }

    fn try_face_color(&self) -> Option<ColorValue> {
        None
    }

    fn try_set_face_color(&mut self, _color: ColorValue) -> bool {
        false
    }

    fn try_color(&self) -> Option<ColorValue> {
        None
    }

    fn try_set_color(&mut self, _color: ColorValue) -> bool {
        false
    }

    /// Paint onto the canvas using `ctx.transform`
    fn draw(&self, ctx: &mut RenderContext<'_>);
}
