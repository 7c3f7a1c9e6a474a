//! Backend configuration
//!
//! Settings come from the environment (`MPLBACKEND_KITTY_*`) or from a TOML
//! table handed over by an embedding application.

use std::env;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{BackendError, Result};
use crate::terminal::{TerminalKind, ToolCommand};

/// Selects the sizing mode
pub const SIZING_ENV: &str = "MPLBACKEND_KITTY_SIZING";

/// Overrides the image command line, e.g. `wezterm imgcat`
pub const ICAT_ENV: &str = "MPLBACKEND_KITTY_ICAT";

/// Whether figures are fitted to the terminal before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingMode {
    /// Query the terminal and resize on every display
    #[default]
    Automatic,
    /// Keep the size the figure was created with
    Manual,
}

impl SizingMode {
    /// Interpret a raw setting; anything but `manual` means automatic
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("automatic") => SizingMode::Automatic,
            Some("manual") => SizingMode::Manual,
            Some(other) => {
                warn!("unrecognized {}={:?}, using automatic sizing", SIZING_ENV, other);
                SizingMode::Automatic
            }
        }
    }
}

/// Backend settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Sizing policy
    #[serde(default)]
    pub sizing: SizingMode,

    /// Image command line; detected from the terminal when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icat: Option<String>,
}

impl BackendConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            sizing: SizingMode::from_setting(lookup(SIZING_ENV).as_deref()),
            icat: lookup(ICAT_ENV).filter(|line| !line.trim().is_empty()),
        }
    }

    /// Parse settings from TOML, e.g. `sizing = "manual"`
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| BackendError::Configuration(Arc::new(e.to_string())))
    }

    /// Image command to use, falling back to the detected terminal's
    pub fn image_command(&self) -> Result<ToolCommand> {
        self.image_command_for(TerminalKind::detect())
    }

    /// Image command to use when running inside `terminal`
    pub fn image_command_for(&self, terminal: TerminalKind) -> Result<ToolCommand> {
        match &self.icat {
            Some(line) => ToolCommand::parse(line),
            None => {
                let words = terminal.image_command();
                Ok(ToolCommand::new(words[0], words[1..].iter().copied()))
            }
        }
    }
}
