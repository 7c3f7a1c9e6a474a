//! Terminal detection
//!
//! Picks the inline-image command for the terminal we are running in.

use std::env;

/// Terminal emulators with an inline image command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalKind {
    /// kitty, images through `kitty +kitten icat`
    #[default]
    Kitty,
    /// WezTerm, images through `wezterm imgcat`
    WezTerm,
    /// Ghostty speaks the kitty protocol; `kitty +kitten icat` works there
    Ghostty,
    /// Nothing recognizable in the environment
    Unknown,
}

impl TerminalKind {
    /// Detect the terminal from the process environment
    pub fn detect() -> Self {
        Self::detect_from(|key| env::var(key).ok())
    }

    /// Detect the terminal from an arbitrary variable lookup
    pub fn detect_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        if lookup("KITTY_WINDOW_ID").is_some() {
            return TerminalKind::Kitty;
        }

        if lookup("WEZTERM_PANE").is_some() {
            return TerminalKind::WezTerm;
        }

        if let Some(prog) = lookup("TERM_PROGRAM") {
            match prog.as_str() {
                "WezTerm" => return TerminalKind::WezTerm,
                "ghostty" | "Ghostty" => return TerminalKind::Ghostty,
                _ => {}
            }
        }

        if let Some(term) = lookup("TERM") {
            if term.contains("kitty") {
                return TerminalKind::Kitty;
            }
            if term.contains("ghostty") {
                return TerminalKind::Ghostty;
            }
        }

        TerminalKind::Unknown
    }

    /// Command line of the image tool for this terminal
    pub fn image_command(self) -> &'static [&'static str] {
        match self {
            TerminalKind::WezTerm => &["wezterm", "imgcat"],
            TerminalKind::Kitty | TerminalKind::Ghostty | TerminalKind::Unknown => {
                &["kitty", "+kitten", "icat"]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn detect(vars: &[(&str, &str)]) -> TerminalKind {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TerminalKind::detect_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_detect_kitty() {
        assert_eq!(detect(&[("KITTY_WINDOW_ID", "1")]), TerminalKind::Kitty);
        assert_eq!(detect(&[("TERM", "xterm-kitty")]), TerminalKind::Kitty);
    }

    #[test]
    fn test_detect_wezterm() {
        assert_eq!(detect(&[("WEZTERM_PANE", "0")]), TerminalKind::WezTerm);
        assert_eq!(detect(&[("TERM_PROGRAM", "WezTerm")]), TerminalKind::WezTerm);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect(&[("TERM", "xterm-256color")]), TerminalKind::Unknown);
        assert_eq!(detect(&[]), TerminalKind::Unknown);
    }

    #[test]
    fn test_image_command() {
        assert_eq!(TerminalKind::WezTerm.image_command(), ["wezterm", "imgcat"]);
        assert_eq!(TerminalKind::Unknown.image_command(), ["kitty", "+kitten", "icat"]);
    }
}
