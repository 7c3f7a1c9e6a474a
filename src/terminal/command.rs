//! External terminal tools

use std::fmt;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::sync::Arc;

use tracing::debug;

use super::geometry::{parse_rows, parse_window_size, TerminalGeometry};
use crate::errors::{BackendError, Result};

/// A program plus leading arguments, e.g. `kitty +kitten icat`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a whitespace-separated command line
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| BackendError::Configuration(Arc::new("empty command line".into())))?;
        Ok(Self::new(program, words))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn command(&self, extra: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).args(extra);
        cmd
    }

    /// Run with extra arguments and return stdout with trailing whitespace
    /// removed; stderr stays attached to the terminal
    pub fn output(&self, extra: &[&str]) -> Result<String> {
        let line = self.with_extra(extra);
        debug!("running `{}`", line);

        let output = self
            .command(extra)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| BackendError::query(&line, e.to_string()))?;

        if !output.status.success() {
            return Err(BackendError::query(&line, format!("exited with {}", output.status)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }

    /// Run with `input` on stdin and wait for the tool to exit
    ///
    /// The tool's stdout and stderr go straight to the terminal.
    pub fn feed(&self, input: &[u8]) -> Result<()> {
        let line = self.to_string();
        debug!("streaming {} bytes to `{}`", input.len(), line);

        let mut child = self
            .command(&[])
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => BackendError::ToolMissing(Arc::new(line.clone())),
                _ => BackendError::stream(&line, e.to_string()),
            })?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(input).and_then(|()| stdin.flush()),
            None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin not captured")),
        };
        // stdin is dropped above, so the tool sees EOF before we wait on it
        let status = child.wait()?;

        if let Err(e) = written {
            return Err(BackendError::stream(&line, e.to_string()));
        }
        if !status.success() {
            return Err(BackendError::ToolFailed {
                command: Arc::new(line),
                status: Arc::new(status.to_string()),
            });
        }
        Ok(())
    }

    fn with_extra(&self, extra: &[&str]) -> String {
        let mut line = self.to_string();
        for arg in extra {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Source of terminal geometry
pub trait GeometryProbe {
    /// Number of text rows in the terminal
    fn rows(&mut self) -> Result<u32>;

    /// Drawable window size in device pixels
    fn window_size(&mut self) -> Result<(u32, u32)>;

    /// Query both, rows first
    fn geometry(&mut self) -> Result<TerminalGeometry> {
        let rows = self.rows()?;
        let (width_px, height_px) = self.window_size()?;
        Ok(TerminalGeometry {
            rows,
            width_px,
            height_px,
        })
    }
}

/// Queries geometry by running `tput lines` and `<icat> --print-window-size`
#[derive(Debug, Clone)]
pub struct CommandProbe {
    rows: ToolCommand,
    image: ToolCommand,
}

impl CommandProbe {
    pub fn new(image: ToolCommand) -> Self {
        Self {
            rows: ToolCommand::new("tput", ["lines"]),
            image,
        }
    }

    /// Override the row-count command
    pub fn with_rows_command(mut self, rows: ToolCommand) -> Self {
        self.rows = rows;
        self
    }
}

impl GeometryProbe for CommandProbe {
    fn rows(&mut self) -> Result<u32> {
        parse_rows(&self.rows.output(&[])?)
    }

    fn window_size(&mut self) -> Result<(u32, u32)> {
        parse_window_size(&self.image.output(&["--print-window-size"])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_line() {
        let cmd = ToolCommand::parse("  kitty +kitten   icat ").unwrap();
        assert_eq!(cmd.program(), "kitty");
        assert_eq!(cmd.args(), ["+kitten", "icat"]);
        assert_eq!(cmd.to_string(), "kitty +kitten icat");
        assert!(ToolCommand::parse("   ").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_output_trims_trailing_newline() {
        let cmd = ToolCommand::new("echo", ["800x600"]);
        assert_eq!(cmd.output(&[]).unwrap(), "800x600");
    }

    #[cfg(unix)]
    #[test]
    fn test_output_failure_is_query_error() {
        let cmd = ToolCommand::new("false", Vec::<String>::new());
        assert!(matches!(cmd.output(&[]), Err(BackendError::TerminalQuery { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_feed_reaches_stdin() {
        let cmd = ToolCommand::new("sh", ["-c", "test \"$(cat)\" = hello"]);
        cmd.feed(b"hello").unwrap();
        assert!(matches!(cmd.feed(b"bye"), Err(BackendError::ToolFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_feed_to_tool_that_stops_reading() {
        // exits without reading, so the write side sees a broken pipe
        let cmd = ToolCommand::new("sh", ["-c", "exit 0"]);
        let err = cmd.feed(&vec![0u8; 1 << 20]).unwrap_err();
        assert!(matches!(err, BackendError::Stream { .. }), "{err:?}");
        assert!(err.is_terminal_failure());
    }

    #[test]
    fn test_feed_missing_tool() {
        let cmd = ToolCommand::new("definitely-not-an-image-tool-1f3a", Vec::<String>::new());
        assert!(matches!(cmd.feed(b"x"), Err(BackendError::ToolMissing(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_probe_with_fake_tools() {
        // `$0` is "icat"; the --print-window-size flag arrives as `$1`
        let image = ToolCommand::new("sh", ["-c", "echo 1024x768", "icat"]);
        let mut probe =
            CommandProbe::new(image).with_rows_command(ToolCommand::new("echo", ["40"]));
        let geometry = probe.geometry().unwrap();
        assert_eq!(geometry.rows, 40);
        assert_eq!((geometry.width_px, geometry.height_px), (1024, 768));
    }
}
