//! Software raster target for figures
//!
//! ```text
//!   Figure objects ──draw──▶ Canvas (float coords, RGBA f32)
//!                                │
//!                                ▼
//!                       RGBA8 bytes ──▶ PNG encoder
//! ```
//!
//! Coordinates are pixels with the origin at the top-left corner.

mod canvas;
mod color;
mod shapes;

pub use canvas::Canvas;
pub use color::Color;
pub use shapes::{Circle, FillRect, Line, Point, Rect, Shape};
