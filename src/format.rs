//! Output formats for a rendered flag.
//!
//! The renderer produces structured lines; this module turns them into text
//! for the terminal (with or without color escapes) or into JSON.

use serde::Deserialize;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

use crate::palette::RESET;
use crate::render::Flag;

pub const ANSI: &str = "ansi";
pub const PLAIN: &str = "plain";
pub const JSON: &str = "json";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),

    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 24-bit ANSI colored text
    #[default]
    Ansi,
    /// The same characters without any escape sequences
    Plain,
    /// The structured lines as a JSON array
    Json,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Ansi => ANSI,
            OutputFormat::Plain => PLAIN,
            OutputFormat::Json => JSON,
        }
    }

    /// Returns a vector of all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        OutputFormat::iter().map(|format| format.name()).collect()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        let normalized_format = format_str.to_lowercase();
        OutputFormat::iter()
            .find(|format| format.name() == normalized_format)
            .ok_or(FormattingError::UnsupportedOutputFormat(normalized_format))
    }
}

pub trait Formattable {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError>;
}

impl Formattable for Flag {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Ansi => {
                let mut output = String::new();
                for line in &self.lines {
                    output.push_str(&" ".repeat(line.indent));
                    for segment in &line.segments {
                        output.push_str(&segment.color.escape());
                        output.push_str(&segment.text);
                    }
                    output.push_str(RESET);
                    output.push('\n');
                }
                Ok(output)
            }
            OutputFormat::Plain => {
                let mut output = String::new();
                for line in &self.lines {
                    output.push_str(&" ".repeat(line.indent));
                    output.push_str(&line.text());
                    output.push('\n');
                }
                Ok(output)
            }
            OutputFormat::Json => {
                let mut output = serde_json::to_string_pretty(self)?;
                output.push('\n');
                Ok(output)
            }
        }
    }
}
