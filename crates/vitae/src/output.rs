//! How rendered output is encoded.

use std::fmt;
use std::str::FromStr;

/// Output encoding for a rendered page.
///
/// `Auto` styles only when stdout supports color. `Term` always styles,
/// `Text` never does, and `TermDebug` replaces styling with `[name]…[/name]`
/// tags. `Json` skips templates and serializes the data, `Html` renders the
/// standalone web page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    TermDebug,
    Json,
    Html,
}

impl OutputMode {
    pub const NAMES: &'static [&'static str] = &["auto", "term", "text", "term-debug", "json", "html"];

    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug | OutputMode::Json | OutputMode::Html => false,
        }
    }

    pub fn is_debug(self) -> bool {
        self == OutputMode::TermDebug
    }

    /// Whether the page goes through the terminal template.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OutputMode::Auto | OutputMode::Term | OutputMode::Text | OutputMode::TermDebug
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::TermDebug => "term-debug",
            OutputMode::Json => "json",
            OutputMode::Html => "html",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output mode {0:?} (expected one of: auto, term, text, term-debug, json, html)")]
pub struct ParseOutputModeError(pub String);

impl FromStr for OutputMode {
    type Err = ParseOutputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "term-debug" => Ok(OutputMode::TermDebug),
            "json" => Ok(OutputMode::Json),
            "html" => Ok(OutputMode::Html),
            _ => Err(ParseOutputModeError(s.to_string())),
        }
    }
}
