//! The backend entry points: auto-redraw and explicit show

use tracing::{debug, info, instrument, warn};

use super::manager::FigureManager;
use super::registry::FigureRegistry;
use super::trigger::{detect_interactive, figure_ready, TriggerState};
use crate::config::BackendConfig;
use crate::errors::{BackendError, Result};
use crate::export::{CommandSink, ImageSink};
use crate::figure::Figure;
use crate::terminal::{CommandProbe, GeometryProbe};

/// Inline-image plotting backend
///
/// Owns the open figures together with the means to size them (`P`) and to
/// put them on screen (`S`).
#[derive(Debug)]
pub struct Backend<P, S> {
    config: BackendConfig,
    probe: P,
    sink: S,
    figures: FigureRegistry,
    interactive: bool,
    state: TriggerState,
}

impl Backend<CommandProbe, CommandSink> {
    /// Backend that talks to the real terminal through its image command
    pub fn from_config(config: BackendConfig) -> Result<Self> {
        let image = config.image_command()?;
        debug!("image command: `{}`", image);
        let probe = CommandProbe::new(image.clone());
        let sink = CommandSink::new(image);
        Ok(Self::new(config, probe, sink))
    }

    /// Same as [`Backend::from_config`] with settings from the environment
    pub fn from_env() -> Result<Self> {
        Self::from_config(BackendConfig::from_env())
    }
}

impl<P: GeometryProbe, S: ImageSink> Backend<P, S> {
    pub fn new(config: BackendConfig, probe: P, sink: S) -> Self {
        Self {
            config,
            probe,
            sink,
            figures: FigureRegistry::new(),
            interactive: detect_interactive(),
            state: TriggerState::Idle,
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn figures(&self) -> &FigureRegistry {
        &self.figures
    }

    pub fn figures_mut(&mut self) -> &mut FigureRegistry {
        &mut self.figures
    }

    /// Open an empty figure and make it active
    pub fn new_figure(&mut self) -> usize {
        self.add_figure(Figure::default())
    }

    /// Take ownership of a prepared figure and make it active
    pub fn add_figure(&mut self, figure: Figure) -> usize {
        self.figures.add(figure)
    }

    pub fn figure_mut(&mut self, num: usize) -> Option<&mut Figure> {
        self.figures.get_mut(num).map(FigureManager::figure_mut)
    }

    pub fn active_figure_mut(&mut self) -> Option<&mut Figure> {
        self.figures.active_mut().map(FigureManager::figure_mut)
    }

    /// Redraw hook called after plotting commands
    ///
    /// Shows every figure when running interactively and the active figure
    /// has at least one axes. Returns whether anything was shown.
    pub fn draw_if_interactive(&mut self) -> Result<bool> {
        let ready = match self.figures.active() {
            Some(manager) => figure_ready(self.interactive, manager.figure()),
            None => false,
        };
        if !ready {
            debug!("redraw skipped (interactive: {})", self.interactive);
            return Ok(false);
        }
        self.show()?;
        Ok(true)
    }

    /// Display every open figure, then close them all
    ///
    /// Stops at the first failing figure; nothing is closed in that case.
    /// Returns the number of figures shown.
    #[instrument(skip(self), fields(figures = self.figures.len()))]
    pub fn show(&mut self) -> Result<usize> {
        self.state = TriggerState::Rendering;
        let result = self.show_all();
        self.state = TriggerState::Idle;

        let shown = result?;
        self.figures.destroy_all();
        info!("showed {} figures", shown);
        Ok(shown)
    }

    fn show_all(&mut self) -> Result<usize> {
        let sizing = self.config.sizing;
        let mut shown = 0;
        for manager in self.figures.iter_mut() {
            manager
                .show(sizing, &mut self.probe, &mut self.sink)
                .inspect_err(|e| log_failure(manager.num(), e))?;
            shown += 1;
        }
        Ok(shown)
    }
}

fn log_failure(num: usize, error: &BackendError) {
    if error.is_terminal_failure() {
        warn!("figure {}: terminal unavailable: {}", num, error);
    } else {
        warn!("figure {}: {}", num, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizingMode;
    use crate::export::WriterSink;
    use std::sync::Arc;

    struct NoTerminal;

    impl GeometryProbe for NoTerminal {
        fn rows(&mut self) -> Result<u32> {
            Err(BackendError::query("tput lines", "not a terminal"))
        }

        fn window_size(&mut self) -> Result<(u32, u32)> {
            Err(BackendError::WindowSizeParse(Arc::new(String::new())))
        }
    }

    fn manual_backend() -> Backend<NoTerminal, WriterSink<Vec<u8>>> {
        let config = BackendConfig {
            sizing: SizingMode::Manual,
            icat: None,
        };
        let mut backend = Backend::new(config, NoTerminal, WriterSink::new(Vec::new()));
        backend.set_interactive(true);
        backend
    }

    #[test]
    fn test_redraw_needs_axes() {
        let mut backend = manual_backend();
        assert!(!backend.draw_if_interactive().unwrap());

        backend.new_figure();
        assert!(!backend.draw_if_interactive().unwrap());
        assert!(backend.sink().get_ref().is_empty());

        backend.active_figure_mut().unwrap().add_subplot();
        assert!(backend.draw_if_interactive().unwrap());
        assert!(backend.figures().is_empty());
    }

    #[test]
    fn test_failed_show_keeps_figures() {
        let mut backend = manual_backend();
        let mut config = backend.config().clone();
        config.sizing = SizingMode::Automatic;
        backend.config = config;

        backend.new_figure();
        let err = backend.show().unwrap_err();
        assert!(err.is_terminal_failure());
        assert_eq!(backend.state(), TriggerState::Idle);
        assert_eq!(backend.figures().len(), 1);
    }
}
