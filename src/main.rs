use std::f64::consts::TAU;
use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use kitty_backend::color::ColorValue;
use kitty_backend::export::WriterSink;
use kitty_backend::terminal::{CommandProbe, TerminalKind};
use kitty_backend::{Backend, BackendConfig, Figure, SizingMode};

/// Draw a demo plot inline in a kitty-protocol terminal
#[derive(Debug, Parser)]
#[command(name = "kitty-plot", version, about)]
struct Cli {
    /// Which demo figure to draw
    #[arg(value_enum, default_value_t = Demo::Line)]
    demo: Demo,

    /// Keep the figure's own size instead of fitting the terminal
    #[arg(long)]
    manual: bool,

    /// Figure resolution in dots per inch
    #[arg(long, default_value_t = 100.0)]
    dpi: f64,

    /// Figure width and height in inches (manual sizing)
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    size: Option<Vec<f64>>,

    /// Backend settings as TOML, e.g. `sizing = "manual"`
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the PNG to stdout instead of running the image command
    #[arg(long)]
    stdout: bool,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,

    /// Log everything
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    Line,
    Scatter,
    Bars,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // stdout may carry image data, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("kitty-plot {}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            BackendConfig::from_toml_str(&text)?
        }
        None => BackendConfig::from_env(),
    };
    if cli.manual || cli.stdout {
        config.sizing = SizingMode::Manual;
    }

    let figure = build_demo(&cli)?;

    if cli.stdout {
        let image = config.image_command_for(TerminalKind::detect())?;
        let sink = WriterSink::new(io::stdout().lock());
        let mut backend = Backend::new(config, CommandProbe::new(image), sink);
        backend.add_figure(figure);
        backend.show()?;
    } else {
        let mut backend = Backend::from_config(config)?;
        backend.add_figure(figure);
        backend
            .show()
            .context("could not display the figure in this terminal")?;
    }
    Ok(())
}

fn build_demo(cli: &Cli) -> anyhow::Result<Figure> {
    let (width, height) = match cli.size.as_deref() {
        Some([width, height]) => (*width, *height),
        _ => kitty_backend::figure::DEFAULT_SIZE_INCHES,
    };
    let mut figure = Figure::new(width, height, cli.dpi)?;
    let ax = figure.add_subplot();

    match cli.demo {
        Demo::Line => {
            let xs: Vec<f64> = (0..=200).map(|i| f64::from(i) * TAU / 200.0).collect();
            let sin = xs.iter().map(|x| x.sin()).collect();
            let cos = xs.iter().map(|x| x.cos()).collect();
            figure.plot(ax, xs.clone(), sin, "C0")?;
            figure.plot(ax, xs, cos, "C1")?;
        }
        Demo::Scatter => {
            let points: Vec<(f64, f64)> = (0..40)
                .map(|i| {
                    let t = f64::from(i) * 0.37;
                    (t.cos() * t, t.sin() * t)
                })
                .collect();
            let colors = ColorValue::Seq(vec!["C0".into(), "C2".into(), "C3".into()]);
            figure.scatter(ax, points, colors)?;
        }
        Demo::Bars => {
            figure.bar(ax, &[3.0, 5.0, 2.0, 6.0, 4.0], "tab:green")?;
        }
    }
    figure.autoscale(ax)?;
    Ok(figure)
}
