//! Resolved rendering options.
//!
//! A [`RenderConfig`] is assembled once from built-in defaults, the
//! configuration file and the command line, then handed to the renderer
//! unchanged.

use tracing::debug;

use crate::clock::DEFAULT_DATE_FORMAT;
use crate::configuration::Configuration;
use crate::format::OutputFormat;
use crate::palette::{Color, DEFAULT_BORDER_COLOR, DEFAULT_MESSAGE_COLOR};
use crate::preset::Preset;
use crate::sanitize::{
    capped, MAX_COLOR_LEN, MAX_FORMAT_LEN, MAX_GLYPH_LEN, MAX_MESSAGE_LEN,
};
use crate::stripes::MIN_EXTENT;
use crate::terminal::TerminalSize;

pub const DEFAULT_FILL_CHAR: &str = "█";
pub const DEFAULT_BORDER_CHAR: &str = "*";

/// Everything the renderer needs to know about the requested flag.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub preset: Preset,
    pub fill_char: String,
    pub requested_width: Option<usize>,
    pub requested_height: Option<usize>,
    pub center: bool,
    pub border_enabled: bool,
    pub border_char: String,
    pub border_color: Color,
    pub message: String,
    pub message_color: Color,
    pub date_enabled: bool,
    pub date_format: String,
    pub vertical: bool,
    pub format: OutputFormat,
    pub assume_yes: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            fill_char: DEFAULT_FILL_CHAR.to_string(),
            requested_width: None,
            requested_height: None,
            center: false,
            border_enabled: false,
            border_char: DEFAULT_BORDER_CHAR.to_string(),
            border_color: DEFAULT_BORDER_COLOR,
            message: String::new(),
            message_color: DEFAULT_MESSAGE_COLOR,
            date_enabled: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            vertical: false,
            format: OutputFormat::default(),
            assume_yes: false,
        }
    }
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }

    /// Cells the border adds to each dimension, zero or two.
    pub fn border_thickness(&self) -> usize {
        if self.border_enabled {
            2
        } else {
            0
        }
    }
}

/// Builds a [`RenderConfig`], enforcing the text limits on every string.
#[derive(Debug, Clone, Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    fn new() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Starts from the built-in defaults overlaid with the configuration file.
    pub fn from_configuration(configuration: &Configuration) -> RenderConfigBuilder {
        let mut builder = RenderConfigBuilder::new();
        if let Some(preset) = configuration.preset() {
            builder.preset(preset);
        }
        if let Some(fill_char) = configuration.fill_char() {
            builder.fill_char(fill_char);
        }
        if let Some(center) = configuration.center() {
            builder.center(center);
        }
        if let Some(border) = configuration.border() {
            builder.border(border);
        }
        if let Some(border_char) = configuration.border_char() {
            builder.config.border_char = capped(border_char, MAX_GLYPH_LEN, "border character");
        }
        if let Some(border_color) = configuration.border_color() {
            builder.config.border_color = parse_color(border_color, "border color");
        }
        if let Some(message_color) = configuration.message_color() {
            builder.message_color(message_color);
        }
        if let Some(date_format) = configuration.date_format() {
            builder.config.date_format = capped(date_format, MAX_FORMAT_LEN, "date format");
        }
        if let Some(vertical) = configuration.vertical() {
            builder.vertical(vertical);
        }
        if let Some(format) = configuration.format() {
            builder.format(format);
        }
        builder
    }

    pub fn preset(&mut self, preset: Preset) -> &mut RenderConfigBuilder {
        self.config.preset = preset;
        self
    }

    pub fn fill_char(&mut self, fill_char: &str) -> &mut RenderConfigBuilder {
        self.config.fill_char = capped(fill_char, MAX_GLYPH_LEN, "fill character");
        self
    }

    pub fn width(&mut self, width: Option<usize>) -> &mut RenderConfigBuilder {
        self.config.requested_width = width;
        self
    }

    pub fn height(&mut self, height: Option<usize>) -> &mut RenderConfigBuilder {
        self.config.requested_height = height;
        self
    }

    pub fn center(&mut self, center: bool) -> &mut RenderConfigBuilder {
        self.config.center = center;
        self
    }

    pub fn border(&mut self, enabled: bool) -> &mut RenderConfigBuilder {
        self.config.border_enabled = enabled;
        self
    }

    /// Sets the border glyph and turns the border on.
    pub fn border_char(&mut self, border_char: &str) -> &mut RenderConfigBuilder {
        self.config.border_char = capped(border_char, MAX_GLYPH_LEN, "border character");
        self.config.border_enabled = true;
        self
    }

    /// Sets the border color and turns the border on.
    pub fn border_color(&mut self, border_color: &str) -> &mut RenderConfigBuilder {
        self.config.border_color = parse_color(border_color, "border color");
        self.config.border_enabled = true;
        self
    }

    pub fn message(&mut self, message: &str) -> &mut RenderConfigBuilder {
        self.config.message = capped(message, MAX_MESSAGE_LEN, "message");
        self
    }

    pub fn message_color(&mut self, message_color: &str) -> &mut RenderConfigBuilder {
        self.config.message_color = parse_color(message_color, "message color");
        self
    }

    /// Turns the date stamp on, optionally replacing the format.
    pub fn date(&mut self, format: Option<&str>) -> &mut RenderConfigBuilder {
        self.config.date_enabled = true;
        if let Some(format) = format.filter(|format| !format.is_empty()) {
            self.config.date_format = capped(format, MAX_FORMAT_LEN, "date format");
        }
        self
    }

    pub fn vertical(&mut self, vertical: bool) -> &mut RenderConfigBuilder {
        self.config.vertical = vertical;
        self
    }

    pub fn format(&mut self, format: OutputFormat) -> &mut RenderConfigBuilder {
        self.config.format = format;
        self
    }

    pub fn assume_yes(&mut self, assume_yes: bool) -> &mut RenderConfigBuilder {
        self.config.assume_yes = assume_yes;
        self
    }

    pub fn build(&self) -> RenderConfig {
        self.config.clone()
    }
}

fn parse_color(value: &str, what: &str) -> Color {
    Color::parse(&capped(value, MAX_COLOR_LEN, what))
}

/// Final flag size in character cells, before any border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
    /// Ask before drawing when the flag is taller than the terminal.
    pub check_height: bool,
}

impl Dimensions {
    pub fn effective_width(&self, config: &RenderConfig) -> usize {
        self.width + config.border_thickness()
    }

    pub fn effective_height(&self, config: &RenderConfig) -> usize {
        self.height + config.border_thickness()
    }
}

/// Resolves the flag size from explicit requests, falling back to the preset.
///
/// `terminal` is `None` when the terminal size is unknown; the presets that
/// span the terminal then use a fixed width.
pub fn resolve_dimensions(config: &RenderConfig, terminal: Option<TerminalSize>) -> Dimensions {
    let width = config.requested_width.unwrap_or_else(|| {
        config
            .preset
            .default_width(terminal, config.border_thickness())
    });

    let (height, check_height) = match config.requested_height {
        Some(height) => (height, false),
        None => (
            config.preset.default_height(),
            config.preset.checks_height(),
        ),
    };

    let mut width = width.max(1);
    let height = height.max(MIN_EXTENT);
    if config.vertical {
        width = width.max(MIN_EXTENT);
    }

    debug!(
        "Resolved {} flag to {}x{}",
        config.preset, width, height
    );

    Dimensions {
        width,
        height,
        check_height,
    }
}
