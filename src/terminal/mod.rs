//! Terminal discovery and geometry
//!
//! Works out which inline-image command to talk to, asks the terminal how
//! large its window is, and resizes a figure so the rendered image fits the
//! visible area.

mod caps;
mod command;
mod geometry;

pub use caps::TerminalKind;
pub use command::{CommandProbe, GeometryProbe, ToolCommand};
pub use geometry::{
    fit_figure, parse_rows, parse_window_size, resize_for_terminal, TerminalGeometry,
    TRAILING_LINES,
};
