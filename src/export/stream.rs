//! Delivering encoded images

use std::io::Write;

use tracing::info;

use crate::errors::Result;
use crate::terminal::ToolCommand;

/// Destination for an encoded image
pub trait ImageSink {
    /// Deliver `png`, returning once the receiver has consumed it
    fn display(&mut self, png: &[u8]) -> Result<()>;
}

/// Pipes images into the terminal's image command, one process per image
#[derive(Debug, Clone)]
pub struct CommandSink {
    command: ToolCommand,
}

impl CommandSink {
    pub fn new(command: ToolCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &ToolCommand {
        &self.command
    }
}

impl ImageSink for CommandSink {
    fn display(&mut self, png: &[u8]) -> Result<()> {
        self.command.feed(png)?;
        info!("displayed {} byte image via `{}`", png.len(), self.command);
        Ok(())
    }
}

/// Writes raw PNG bytes to any writer
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ImageSink for WriterSink<W> {
    fn display(&mut self, png: &[u8]) -> Result<()> {
        self.writer.write_all(png)?;
        self.writer.flush()?;
        Ok(())
    }
}
