#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

//! # Kitty Backend
//!
//! Inline-image plotting backend for terminals that speak the kitty graphics
//! protocol (kitty, WezTerm, Ghostty).
//!
//! Figures are fitted to the terminal window, re-colored for dark
//! backgrounds, encoded as PNG and piped into the terminal's image command
//! (`kitty +kitten icat` or `wezterm imgcat`).
//!
//! ```no_run
//! use kitty_backend::Backend;
//!
//! let mut backend = Backend::from_env()?;
//! let num = backend.new_figure();
//! let figure = backend.figure_mut(num).expect("just created");
//! let ax = figure.add_subplot();
//! figure.plot(ax, vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0], "C0")?;
//! backend.show()?;
//! # Ok::<(), kitty_backend::BackendError>(())
//! ```

pub mod backend;
pub mod canvas;
pub mod color;
pub mod config;
pub mod errors;
pub mod export;
pub mod figure;
pub mod terminal;

pub use backend::{Backend, FigureManager, FigureRegistry};
pub use color::{invert, ColorValue};
pub use config::{BackendConfig, SizingMode};
pub use errors::{BackendError, ColorError, Result};
pub use figure::Figure;
