//! Minimal figure model
//!
//! A [`Figure`] owns an arena of [`Drawable`] objects addressed by
//! [`ObjectId`]. Objects expose their colors through optional capabilities
//! (edge, face, unified color), so code that recolors a figure can probe what
//! each object supports instead of knowing its concrete type.

mod artist;
mod artists;
mod axes;
mod figure;

pub use artist::{Drawable, ObjectId, RenderContext, Transform};
pub use artists::{Line2D, Rectangle, Scatter, Spine, SpineSide};
pub use axes::Axes;
pub use figure::{Figure, DEFAULT_DPI, DEFAULT_SIZE_INCHES, MAX_PIXELS};
