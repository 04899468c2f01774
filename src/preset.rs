//! Named flag sizes.

use serde::Deserialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::terminal::TerminalSize;

/// Width used by the terminal-wide presets when the terminal cannot be queried.
pub const FALLBACK_WIDTH: usize = 80;

/// Size shorthand selected with a positional argument.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Tiny,
    #[default]
    Small,
    Medium,
    Big,
    /// Spans the terminal and is tall enough to need a confirmation on small screens.
    Huge,
    /// Spans the terminal.
    Banner,
}

impl Preset {
    /// All preset names in declaration order.
    pub fn names() -> Vec<String> {
        Preset::iter().map(|preset| preset.to_string()).collect()
    }

    /// Default width in columns. `border_columns` is subtracted from the
    /// terminal width for the presets that span the whole terminal.
    pub fn default_width(&self, terminal: Option<TerminalSize>, border_columns: usize) -> usize {
        match self {
            Preset::Tiny => 20,
            Preset::Small => 39,
            Preset::Medium => 42,
            Preset::Big => 48,
            Preset::Huge | Preset::Banner => match terminal {
                Some(terminal) => terminal.columns.saturating_sub(border_columns),
                None => FALLBACK_WIDTH,
            },
        }
    }

    /// Default height in rows.
    pub fn default_height(&self) -> usize {
        match self {
            Preset::Tiny => 5,
            Preset::Small => 12,
            Preset::Medium => 15,
            Preset::Big => 17,
            Preset::Huge => 34,
            Preset::Banner => 15,
        }
    }

    /// Whether the preset's default height warrants asking before drawing on a short terminal.
    pub fn checks_height(&self) -> bool {
        matches!(self, Preset::Huge)
    }
}
