//! When to render

use std::io::{self, IsTerminal};

use crate::figure::Figure;

/// Display pipeline state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Idle,
    Rendering,
}

/// Whether an auto-redraw should render `figure` now
///
/// Redraw requests arrive while a figure is still being built. A figure
/// without any axes is assumed to be mid-construction and skipped; this is a
/// heuristic, a figure with axes may still be incomplete.
pub fn figure_ready(interactive: bool, figure: &Figure) -> bool {
    interactive && !figure.axes().is_empty()
}

/// Startup guess for interactive mode: both stdin and stdout are terminals
pub fn detect_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}
