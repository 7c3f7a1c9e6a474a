//! Per-figure display session

use tracing::{debug, info};

use super::reverse::{reverse_objects, ReverseStats};
use crate::config::SizingMode;
use crate::errors::Result;
use crate::export::{render_png, ImageSink};
use crate::figure::Figure;
use crate::terminal::{resize_for_terminal, GeometryProbe};

/// A figure plus the display state attached to it
#[derive(Debug)]
pub struct FigureManager {
    num: usize,
    figure: Figure,
    /// Set once the figure's colors have been inverted; never cleared
    reversed: bool,
}

impl FigureManager {
    pub fn new(num: usize, figure: Figure) -> Self {
        Self {
            num,
            figure,
            reversed: false,
        }
    }

    pub fn num(&self) -> usize {
        self.num
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn figure_mut(&mut self) -> &mut Figure {
        &mut self.figure
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Reverse-video the figure unless that already happened
    ///
    /// Returns `None` on repeat calls.
    pub fn reverse(&mut self) -> Option<ReverseStats> {
        if self.reversed {
            debug!("figure {} already reversed", self.num);
            return None;
        }
        let stats = reverse_objects(&mut self.figure);
        self.reversed = true;
        Some(stats)
    }

    /// Fit, invert, render and deliver the figure
    ///
    /// Blocks until the sink has consumed the image. A failure stops the
    /// display but leaves resizing and inversion already applied in place.
    pub fn show(
        &mut self,
        sizing: SizingMode,
        probe: &mut dyn GeometryProbe,
        sink: &mut dyn ImageSink,
    ) -> Result<()> {
        resize_for_terminal(&mut self.figure, sizing, probe)?;
        self.reverse();

        let png = render_png(&self.figure)?;
        let (width, height) = self.figure.pixel_size()?;
        info!("showing figure {} at {}x{} px", self.num, width, height);
        sink.display(&png)
    }
}
