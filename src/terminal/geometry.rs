//! Fitting figures to the terminal window

use std::sync::Arc;

use tracing::{debug, info};

use super::command::GeometryProbe;
use crate::config::SizingMode;
use crate::errors::{BackendError, Result};
use crate::figure::Figure;

/// Lines the terminal prints after the image: the newline ending the image,
/// the value echoed by the REPL, and the next prompt
pub const TRAILING_LINES: u64 = 3;

/// Terminal size as reported at display time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    pub rows: u32,
    pub width_px: u32,
    pub height_px: u32,
}

impl TerminalGeometry {
    /// Pixel height left once the trailing lines have scrolled the image up
    ///
    /// `height - floor(3 * height / rows)`
    pub fn corrected_height(&self) -> Result<u32> {
        if self.rows == 0 {
            return Err(BackendError::ZeroRows);
        }
        let height = u64::from(self.height_px);
        let shift = TRAILING_LINES * height / u64::from(self.rows);
        // shift <= height whenever rows >= 3; saturate for tinier terminals
        Ok(height.saturating_sub(shift) as u32)
    }

    /// Figure size in inches that renders to the usable window at `dpi`
    pub fn figure_size_inches(&self, dpi: f64) -> Result<(f64, f64)> {
        let height = self.corrected_height()?;
        Ok((f64::from(self.width_px) / dpi, f64::from(height) / dpi))
    }
}

/// Parse the output of the row-count query
pub fn parse_rows(output: &str) -> Result<u32> {
    output
        .trim()
        .parse()
        .map_err(|_| BackendError::RowCountParse(Arc::new(output.to_string())))
}

/// Parse a `<width>x<height>` window size
pub fn parse_window_size(output: &str) -> Result<(u32, u32)> {
    let malformed = || BackendError::WindowSizeParse(Arc::new(output.to_string()));
    let (width, height) = output.trim().split_once('x').ok_or_else(malformed)?;
    let width = width.parse().map_err(|_| malformed())?;
    let height = height.parse().map_err(|_| malformed())?;
    Ok((width, height))
}

/// Resize `figure` to fill the usable part of the terminal window
pub fn fit_figure(figure: &mut Figure, geometry: &TerminalGeometry) -> Result<()> {
    let (width, height) = geometry.figure_size_inches(figure.dpi())?;
    debug!(
        "terminal {} rows, {}x{} px -> figure {:.2}x{:.2} in",
        geometry.rows, geometry.width_px, geometry.height_px, width, height
    );
    figure.set_size_inches(width, height)
}

/// Apply the sizing policy: query the terminal and fit the figure in
/// automatic mode, leave it alone in manual mode
///
/// Returns the geometry used, if any.
pub fn resize_for_terminal(
    figure: &mut Figure,
    mode: SizingMode,
    probe: &mut dyn GeometryProbe,
) -> Result<Option<TerminalGeometry>> {
    match mode {
        SizingMode::Manual => {
            info!("manual sizing, keeping figure at {:?} in", figure.size_inches());
            Ok(None)
        }
        SizingMode::Automatic => {
            let geometry = probe.geometry()?;
            fit_figure(figure, &geometry)?;
            Ok(Some(geometry))
        }
    }
}
