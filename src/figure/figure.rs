//! Figure: object arena plus physical size

use std::collections::HashSet;

use tracing::debug;

use crate::canvas::Canvas;
use crate::color::ColorValue;
use crate::errors::{BackendError, Result};

use super::artist::{Drawable, ObjectId, RenderContext, Transform};
use super::artists::{Line2D, Rectangle, Scatter, Spine, SpineSide};
use super::axes::Axes;

pub const DEFAULT_SIZE_INCHES: (f64, f64) = (6.4, 4.8);
pub const DEFAULT_DPI: f64 = 100.0;

/// Largest raster a figure renders to, 8192 x 8192
pub const MAX_PIXELS: usize = 1 << 26;

/// A figure and every drawable object it owns
#[derive(Debug)]
pub struct Figure {
    width: f64,
    height: f64,
    dpi: f64,
    objects: Vec<Box<dyn Drawable>>,
    /// Top-level objects: the background patch, then each axes
    roots: Vec<ObjectId>,
    axes: Vec<ObjectId>,
    patch: ObjectId,
}

impl Default for Figure {
    fn default() -> Self {
        let mut figure = Self {
            width: DEFAULT_SIZE_INCHES.0,
            height: DEFAULT_SIZE_INCHES.1,
            dpi: DEFAULT_DPI,
            objects: Vec::new(),
            roots: Vec::new(),
            axes: Vec::new(),
            patch: ObjectId(0),
        };
        figure.patch = figure.insert(Box::new(Rectangle::figure_patch()));
        figure.roots.push(figure.patch);
        figure
    }
}

impl Figure {
    pub fn new(width: f64, height: f64, dpi: f64) -> Result<Self> {
        let mut figure = Self::default();
        figure.set_size_inches(width, height)?;
        figure.set_dpi(dpi)?;
        Ok(figure)
    }

    pub fn size_inches(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Resize the figure; both dimensions must be positive and finite
    pub fn set_size_inches(&mut self, width: f64, height: f64) -> Result<()> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(BackendError::InvalidFigureSize { width, height });
        }
        debug!("figure resized to {:.3}x{:.3} in", width, height);
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    pub fn set_dpi(&mut self, dpi: f64) -> Result<()> {
        if !(dpi.is_finite() && dpi > 0.0) {
            return Err(BackendError::Configuration(
                format!("dpi must be positive, got {dpi}").into(),
            ));
        }
        self.dpi = dpi;
        Ok(())
    }

    /// Raster size in whole pixels (at least 1x1)
    ///
    /// Fails with `InvalidFigureSize` when the raster would exceed
    /// [`MAX_PIXELS`].
    pub fn pixel_size(&self) -> Result<(u32, u32)> {
        let too_large = || BackendError::InvalidFigureSize {
            width: self.width,
            height: self.height,
        };
        let px = |inches: f64| u32::try_from((inches * self.dpi).round().max(1.0) as u64).ok();
        let (Some(width), Some(height)) = (px(self.width), px(self.height)) else {
            return Err(too_large());
        };
        match (width as usize).checked_mul(height as usize) {
            Some(count) if count <= MAX_PIXELS => Ok((width, height)),
            _ => Err(too_large()),
        }
    }

    /// Background patch of the figure
    pub fn patch(&self) -> ObjectId {
        self.patch
    }

    /// Plotting surfaces, in creation order
    pub fn axes(&self) -> &[ObjectId] {
        &self.axes
    }

    /// Number of objects in the arena
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&dyn Drawable> {
        self.objects.get(id.0).map(|obj| obj.as_ref())
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut (dyn Drawable + 'static)> {
        self.objects.get_mut(id.0).map(|obj| obj.as_mut())
    }

    fn insert(&mut self, object: Box<dyn Drawable>) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    /// Add an axes at `[left, bottom, width, height]` (figure fractions),
    /// together with its four spines
    pub fn add_axes(&mut self, rect: [f64; 4]) -> ObjectId {
        let mut axes = Axes::new(rect);
        for side in [SpineSide::Left, SpineSide::Right, SpineSide::Bottom, SpineSide::Top] {
            let spine = self.insert(Box::new(Spine::new(side)));
            axes.add_child(spine);
        }
        let id = self.insert(Box::new(axes));
        self.roots.push(id);
        self.axes.push(id);
        id
    }

    /// Add a single axes filling the usual subplot area
    pub fn add_subplot(&mut self) -> ObjectId {
        self.add_axes([0.125, 0.11, 0.775, 0.77])
    }

    /// Store `object` and attach it under `parent`
    pub fn add_artist(&mut self, parent: ObjectId, object: Box<dyn Drawable>) -> Result<ObjectId> {
        if self.get(parent).is_none() {
            return Err(BackendError::UnknownObject(parent.0));
        }
        let id = self.insert(object);
        self.link(parent, id)?;
        Ok(id)
    }

    /// Reference an existing object from another parent as well
    ///
    /// The graph may end up with shared nodes or cycles; enumeration and
    /// rendering both tolerate that.
    pub fn link(&mut self, parent: ObjectId, child: ObjectId) -> Result<()> {
        if self.get(child).is_none() {
            return Err(BackendError::UnknownObject(child.0));
        }
        let holder = self
            .get_mut(parent)
            .ok_or(BackendError::UnknownObject(parent.0))?;
        if holder.add_child(child) {
            Ok(())
        } else {
            Err(BackendError::Configuration(
                format!("{} {} cannot hold children", holder.kind(), parent).into(),
            ))
        }
    }

    fn axes_mut(&mut self, id: ObjectId) -> Result<&mut Axes> {
        if !self.axes.contains(&id) {
            return Err(BackendError::UnknownObject(id.0));
        }
        self.objects
            .get_mut(id.0)
            .and_then(|object| object.as_axes_mut())
            .ok_or(BackendError::UnknownObject(id.0))
    }

    /// Line plot on `axes`; data limits grow to fit
    pub fn plot(
        &mut self,
        axes: ObjectId,
        xs: Vec<f64>,
        ys: Vec<f64>,
        color: impl Into<ColorValue>,
    ) -> Result<ObjectId> {
        let fresh = self.axes_is_empty(axes)?;
        let target = self.axes_mut(axes)?;
        target.update_limits(&xs, &ys, fresh);
        self.add_artist(axes, Box::new(Line2D::new(xs, ys, color)))
    }

    /// Scatter plot on `axes`
    pub fn scatter(
        &mut self,
        axes: ObjectId,
        offsets: Vec<(f64, f64)>,
        colors: impl Into<ColorValue>,
    ) -> Result<ObjectId> {
        let fresh = self.axes_is_empty(axes)?;
        let (xs, ys): (Vec<f64>, Vec<f64>) = offsets.iter().copied().unzip();
        self.axes_mut(axes)?.update_limits(&xs, &ys, fresh);
        self.add_artist(axes, Box::new(Scatter::new(offsets, colors)))
    }

    /// Bar chart on `axes`, one rectangle per value, bars centered on `0..n`
    pub fn bar(
        &mut self,
        axes: ObjectId,
        heights: &[f64],
        color: impl Into<ColorValue>,
    ) -> Result<Vec<ObjectId>> {
        let color = color.into();
        let fresh = self.axes_is_empty(axes)?;
        let xs: Vec<f64> = (0..heights.len())
            .flat_map(|i| [i as f64 - 0.4, i as f64 + 0.4])
            .collect();
        let mut ys = heights.to_vec();
        ys.push(0.0);
        self.axes_mut(axes)?.update_limits(&xs, &ys, fresh);

        heights
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let bar = Rectangle::new(i as f64 - 0.4, 0.0, 0.8, *h, color.clone());
                self.add_artist(axes, Box::new(bar))
            })
            .collect()
    }

    /// Pad the data limits of `axes` so markers at the extremes stay visible
    pub fn autoscale(&mut self, axes: ObjectId) -> Result<()> {
        self.axes_mut(axes)?.pad_limits(0.05);
        Ok(())
    }

    fn axes_is_empty(&self, axes: ObjectId) -> Result<bool> {
        let object = self.get(axes).ok_or(BackendError::UnknownObject(axes.0))?;
        // Spines do not count as data
        Ok(object
            .children()
            .iter()
            .all(|c| self.get(*c).is_some_and(|o| o.kind() == "Spine")))
    }

    /// Every object reachable from the figure, depth first
    ///
    /// An object referenced from several parents is listed once per
    /// reference; its children are only expanded the first time, so cycles
    /// terminate.
    pub fn find_objects(&self) -> Vec<ObjectId> {
        let mut found = Vec::new();
        let mut expanded = HashSet::new();
        let mut stack: Vec<ObjectId> = self.roots.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            found.push(id);
            if !expanded.insert(id) {
                continue;
            }
            if let Some(object) = self.get(id) {
                stack.extend(object.children().iter().rev().copied());
            }
        }
        found
    }

    /// Rasterize the figure at its current size and resolution
    pub fn render(&self, transparent: bool) -> Result<Canvas> {
        let (width, height) = self.pixel_size()?;
        let mut canvas = Canvas::new(width, height);
        let mut drawn = HashSet::new();
        let mut ctx = RenderContext {
            canvas: &mut canvas,
            transform: Transform::figure(width, height),
            transparent,
            dpi: self.dpi,
        };
        for root in &self.roots {
            self.render_node(*root, &mut ctx, &mut drawn);
        }
        debug!("rendered {} objects at {}x{} px", drawn.len(), width, height);
        Ok(canvas)
    }

    fn render_node(
        &self,
        id: ObjectId,
        ctx: &mut RenderContext<'_>,
        drawn: &mut HashSet<ObjectId>,
    ) {
        if !drawn.insert(id) {
            return;
        }
        let Some(object) = self.get(id) else {
            return;
        };
        object.draw(ctx);

        let saved = ctx.transform;
        if let Some(inner) = object.child_transform(&saved) {
            ctx.transform = inner;
        }
        for child in object.children() {
            self.render_node(*child, ctx, drawn);
        }
        ctx.transform = saved;
    }
}
