//! Figure display sessions
//!
//! ```text
//!   draw_if_interactive / show
//!            │
//!            ▼
//!   resize_for_terminal ──▶ reverse video ──▶ render_png ──▶ ImageSink
//! ```
//!
//! Every open figure has a [`FigureManager`]. Showing renders each of them
//! once and then forgets all of them.

mod display;
mod manager;
mod registry;
mod reverse;
mod trigger;

pub use display::Backend;
pub use manager::FigureManager;
pub use registry::FigureRegistry;
pub use reverse::{reverse_objects, ReverseStats};
pub use trigger::{detect_interactive, figure_ready, TriggerState};
