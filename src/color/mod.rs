//! Figure color values
//!
//! Colors attached to drawable objects are kept in the form the caller gave
//! them (a name, a tuple, or a sequence of either) and only resolved to RGBA
//! when needed. [`invert`] implements the reverse-video transform applied
//! before a figure is shown on a dark terminal.

mod invert;
mod names;
mod value;

pub use invert::{invert, try_invert};
pub use names::lookup_name;
pub use value::ColorValue;
