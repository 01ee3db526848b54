//! Turns backend answer text into dashboard markup.

use askama::filters::{Html, escape};
use std::fmt;
use std::str::FromStr;

/// How server-provided text is placed into HTML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Escape markup characters, then convert newlines. The default.
    #[default]
    Escaped,
    /// Only convert newlines; the backend text is trusted as HTML.
    RawHtml,
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "escaped" => Ok(Self::Escaped),
            "raw" => Ok(Self::RawHtml),
            other => Err(format!(
                "render mode must be 'escaped' or 'raw', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Escaped => f.write_str("escaped"),
            Self::RawHtml => f.write_str("raw"),
        }
    }
}

/// Formats an answer for the response panel: every `\n` becomes `<br>`.
pub fn format_response(text: &str, mode: RenderMode) -> String {
    let body = match mode {
        RenderMode::Escaped => escape_html(text),
        RenderMode::RawHtml => text.to_string(),
    };
    body.replace('\n', "<br>")
}

fn escape_html(text: &str) -> String {
    let Ok(escaped) = escape(text, Html);
    escaped.to_string()
}
