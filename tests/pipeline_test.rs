//! End-to-end display pipeline with a scripted terminal.

use std::sync::Arc;

use kitty_backend::backend::TriggerState;
use kitty_backend::color::ColorValue;
use kitty_backend::errors::{BackendError, Result};
use kitty_backend::export::{ImageSink, PNG_SIGNATURE};
use kitty_backend::figure::DEFAULT_SIZE_INCHES;
use kitty_backend::terminal::GeometryProbe;
use kitty_backend::{Backend, BackendConfig, SizingMode};

/// Terminal with a fixed size that counts how often it is asked
#[derive(Debug)]
struct ScriptedTerminal {
    rows: u32,
    size: (u32, u32),
    queries: usize,
}

impl ScriptedTerminal {
    fn new(rows: u32, width: u32, height: u32) -> Self {
        Self {
            rows,
            size: (width, height),
            queries: 0,
        }
    }
}

impl GeometryProbe for ScriptedTerminal {
    fn rows(&mut self) -> Result<u32> {
        self.queries += 1;
        Ok(self.rows)
    }

    fn window_size(&mut self) -> Result<(u32, u32)> {
        self.queries += 1;
        Ok(self.size)
    }
}

/// Reports its rows but answers the size query with garbage
#[derive(Debug)]
struct GarbledTerminal;

impl GeometryProbe for GarbledTerminal {
    fn rows(&mut self) -> Result<u32> {
        Ok(50)
    }

    fn window_size(&mut self) -> Result<(u32, u32)> {
        kitty_backend::terminal::parse_window_size("800 by 500")
    }
}

/// Keeps every image it is handed
#[derive(Debug, Default)]
struct Screen {
    images: Vec<Vec<u8>>,
    broken: bool,
}

impl ImageSink for Screen {
    fn display(&mut self, png: &[u8]) -> Result<()> {
        if self.broken {
            return Err(BackendError::ToolFailed {
                command: Arc::new("kitty +kitten icat".into()),
                status: Arc::new("exit status: 1".into()),
            });
        }
        self.images.push(png.to_vec());
        Ok(())
    }
}

fn png_size(png: &[u8]) -> (u32, u32) {
    assert_eq!(png[..8], PNG_SIGNATURE);
    let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    (width, height)
}

fn backend(sizing: SizingMode) -> Backend<ScriptedTerminal, Screen> {
    let config = BackendConfig { sizing, icat: None };
    let mut backend = Backend::new(config, ScriptedTerminal::new(50, 800, 500), Screen::default());
    backend.set_interactive(true);
    backend
}

#[test]
fn test_automatic_sizing_fills_terminal() {
    let mut backend = backend(SizingMode::Automatic);
    let num = backend.new_figure();
    let figure = backend.figure_mut(num).unwrap();
    let ax = figure.add_subplot();
    figure.plot(ax, vec![0.0, 1.0], vec![1.0, 0.0], "C0").unwrap();

    assert_eq!(backend.show().unwrap(), 1);

    // 500 - floor(3 * 500 / 50) = 470
    assert_eq!(backend.sink().images.len(), 1);
    assert_eq!(png_size(&backend.sink().images[0]), (800, 470));
    assert_eq!(backend.probe().queries, 2);
    assert!(backend.figures().is_empty());
}

#[test]
fn test_manual_sizing_keeps_figure_size() {
    let mut backend = backend(SizingMode::Manual);
    let num = backend.new_figure();
    let figure = backend.figure_mut(num).unwrap();
    figure.set_size_inches(3.0, 2.0).unwrap();
    figure.add_subplot();

    backend.show().unwrap();

    assert_eq!(backend.probe().queries, 0);
    assert_eq!(png_size(&backend.sink().images[0]), (300, 200));
}

#[test]
fn test_redraw_waits_for_axes() {
    let mut backend = backend(SizingMode::Automatic);
    backend.new_figure();

    assert!(!backend.draw_if_interactive().unwrap());
    assert!(backend.sink().images.is_empty());

    backend.active_figure_mut().unwrap().add_subplot();
    assert!(backend.draw_if_interactive().unwrap());
    assert_eq!(backend.sink().images.len(), 1);

    // everything was closed by the first show
    assert!(!backend.draw_if_interactive().unwrap());
    assert_eq!(backend.sink().images.len(), 1);
}

#[test]
fn test_redraw_disabled_when_not_interactive() {
    let mut backend = backend(SizingMode::Automatic);
    backend.set_interactive(false);
    backend.new_figure();
    backend.active_figure_mut().unwrap().add_subplot();

    assert!(!backend.draw_if_interactive().unwrap());
    assert!(backend.sink().images.is_empty());
    assert_eq!(backend.figures().len(), 1);
}

#[test]
fn test_show_renders_every_figure_once() {
    let mut backend = backend(SizingMode::Manual);
    for _ in 0..3 {
        let num = backend.new_figure();
        backend.figure_mut(num).unwrap().add_subplot();
    }

    assert_eq!(backend.show().unwrap(), 3);
    assert_eq!(backend.sink().images.len(), 3);
    assert_eq!(backend.show().unwrap(), 0);
    assert_eq!(backend.sink().images.len(), 3);
}

#[test]
fn test_colors_inverted_once_per_display() {
    let mut backend = backend(SizingMode::Manual);
    let num = backend.new_figure();
    let figure = backend.figure_mut(num).unwrap();
    let ax = figure.add_subplot();
    let line = figure
        .plot(ax, vec![0.0, 1.0], vec![0.0, 1.0], ColorValue::rgb(0.2, 0.2, 0.2))
        .unwrap();
    // the same line reachable from a second parent
    let inset = figure.add_axes([0.6, 0.6, 0.3, 0.3]);
    figure.link(inset, line).unwrap();

    let manager = backend.figures_mut().get_mut(num).unwrap();
    assert!(manager.reverse().is_some());
    assert!(manager.reverse().is_none());
    assert_eq!(
        manager.figure().get(line).unwrap().try_color(),
        Some(ColorValue::rgba(0.8, 0.8, 0.8, 1.0))
    );
}

#[test]
fn test_sink_failure_keeps_figures_and_resets_state() {
    let mut backend = backend(SizingMode::Automatic);
    backend.sink_mut().broken = true;
    backend.new_figure();
    backend.active_figure_mut().unwrap().add_subplot();

    let err = backend.show().unwrap_err();
    assert!(err.is_terminal_failure());
    assert_eq!(backend.state(), TriggerState::Idle);
    assert_eq!(backend.figures().len(), 1);

    // the retry must not flip the colors back
    backend.sink_mut().broken = false;
    assert!(backend.figures().get(1).unwrap().is_reversed());
    assert_eq!(backend.show().unwrap(), 1);
    assert!(backend.figures().get(1).is_none());
}

#[test]
fn test_bad_window_size_aborts_display() {
    let config = BackendConfig {
        sizing: SizingMode::Automatic,
        icat: None,
    };
    let mut backend = Backend::new(config, GarbledTerminal, Screen::default());
    let num = backend.new_figure();
    backend.figure_mut(num).unwrap().add_subplot();

    let err = backend.show().unwrap_err();
    assert!(matches!(err, BackendError::WindowSizeParse(_)));
    assert!(backend.sink().images.is_empty());

    let manager = backend.figures().get(num).unwrap();
    assert_eq!(manager.figure().size_inches(), DEFAULT_SIZE_INCHES);
    assert!(!manager.is_reversed());
}

#[test]
fn test_huge_terminal_is_an_error_not_a_crash() {
    let mut backend = Backend::new(
        BackendConfig::default(),
        ScriptedTerminal::new(50, 4_000_000_000, 4_000_000_000),
        Screen::default(),
    );
    let num = backend.new_figure();
    backend.figure_mut(num).unwrap().add_subplot();

    let err = backend.show().unwrap_err();
    assert!(matches!(err, BackendError::InvalidFigureSize { .. }));
    assert!(backend.sink().images.is_empty());
    assert_eq!(backend.figures().len(), 1);
}
