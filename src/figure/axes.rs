//! Plotting surface

use crate::canvas::FillRect;
use crate::color::ColorValue;

use super::artist::{Drawable, ObjectId, RenderContext, Transform};

/// Rectangular plotting area with its own data coordinate system
#[derive(Debug, Clone)]
pub struct Axes {
    /// `[left, bottom, width, height]` in figure fractions
    pub rect: [f64; 4],
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
    pub face: ColorValue,
    children: Vec<ObjectId>,
}

impl Axes {
    pub fn new(rect: [f64; 4]) -> Self {
        Self {
            rect,
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
            face: "white".into(),
            children: Vec::new(),
        }
    }

    /// Widen the data limits to include the given points
    pub fn update_limits(&mut self, xs: &[f64], ys: &[f64], fresh: bool) {
        let span = |values: &[f64], current: (f64, f64)| {
            values
                .iter()
                .filter(|v| v.is_finite())
                .fold(if fresh { None } else { Some(current) }, |acc, v| match acc {
                    None => Some((*v, *v)),
                    Some((lo, hi)) => Some((lo.min(*v), hi.max(*v))),
                })
        };
        if let Some(x) = span(xs, self.xlim) {
            self.xlim = x;
        }
        if let Some(y) = span(ys, self.ylim) {
            self.ylim = y;
        }
    }

    /// Pad the data limits by a fraction of their span on every side
    pub fn pad_limits(&mut self, margin: f64) {
        let pad = |(lo, hi): (f64, f64)| {
            let d = (hi - lo).abs().max(f64::EPSILON) * margin;
            (lo - d, hi + d)
        };
        self.xlim = pad(self.xlim);
        self.ylim = pad(self.ylim);
    }
}

impl Drawable for Axes {
    fn kind(&self) -> &'static str {
        "Axes"
    }

    fn children(&self) -> &[ObjectId] {
        &self.children
    }

    fn add_child(&mut self, child: ObjectId) -> bool {
        self.children.push(child);
        true
    }

    fn child_transform(&self, parent: &Transform) -> Option<Transform> {
        let [left, bottom, width, height] = self.rect;
        let frame = parent.apply_rect(left, bottom, width, height);
        Some(Transform::new(frame, self.xlim, self.ylim))
    }

    fn is_plotting_surface(&self) -> bool {
        true
    }

    fn as_axes_mut(&mut self) -> Option<&mut Axes> {
        Some(self)
    }

    fn try_face_color(&self) -> Option<ColorValue> {
        Some(self.face.clone())
    }

    fn try_set_face_color(&mut self, color: ColorValue) -> bool {
        self.face = color;
        true
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        if ctx.transparent {
            return;
        }
        let [left, bottom, width, height] = self.rect;
        let frame = ctx.transform.apply_rect(left, bottom, width, height);
        if let Some(face) = ctx.resolve(&self.face, "axes face") {
            ctx.canvas.draw(&FillRect::new(frame, face));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Rect;

    #[test]
    fn test_limits_grow() {
        let mut axes = Axes::new([0.1, 0.1, 0.8, 0.8]);
        axes.update_limits(&[1.0, 3.0], &[-2.0, 2.0], true);
        assert_eq!(axes.xlim, (1.0, 3.0));
        axes.update_limits(&[0.0], &[5.0], false);
        assert_eq!(axes.xlim, (0.0, 3.0));
        assert_eq!(axes.ylim, (-2.0, 5.0));
    }

    #[test]
    fn test_limits_ignore_non_finite() {
        let mut axes = Axes::new([0.0, 0.0, 1.0, 1.0]);
        axes.update_limits(&[f64::NAN], &[], true);
        assert_eq!(axes.xlim, (0.0, 1.0));
    }

    #[test]
    fn test_child_transform_uses_rect() {
        let axes = Axes::new([0.5, 0.0, 0.5, 0.5]);
        let t = axes.child_transform(&Transform::figure(100, 100)).unwrap();
        assert_eq!(t.frame(), Rect::new(50.0, 50.0, 50.0, 50.0));
    }

    #[test]
    fn test_face_only_capability() {
        let axes = Axes::new([0.0, 0.0, 1.0, 1.0]);
        assert!(axes.try_edge_color().is_none());
        assert!(axes.try_color().is_none());
        assert_eq!(axes.try_face_color(), Some("white".into()));
    }
}
