//! Raster export and delivery
//!
//! Figures are encoded to PNG in memory and handed to an [`ImageSink`],
//! normally the terminal's inline-image command. Nothing touches the disk.

mod png;
mod stream;

pub use png::{encode_png, render_png, PNG_SIGNATURE};
pub use stream::{CommandSink, ImageSink, WriterSink};
