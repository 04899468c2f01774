//! Flag geometry and placement.
//!
//! Rendering is pure: it turns a [`RenderConfig`] and resolved [`Dimensions`]
//! into a [`Flag`], an ordered list of colored lines. Writing the lines to a
//! terminal is left to [`crate::format`].

use serde::Serialize;
use tracing::trace;

use crate::options::{Dimensions, RenderConfig};
use crate::palette::{Color, DATE_TEXT_COLOR};
use crate::stripes::allocate;
use crate::terminal::TerminalSize;

/// A run of text drawn in a single color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub color: Color,
    pub text: String,
}

/// One output row: `indent` spaces followed by colored segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub indent: usize,
    pub segments: Vec<Segment>,
}

impl Line {
    pub fn new(indent: usize) -> Self {
        Self {
            indent,
            segments: Vec::new(),
        }
    }

    /// Appends `text` in `color`, extending the last segment when the color
    /// is unchanged. Empty text is ignored.
    pub fn push(&mut self, color: &Color, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.color == *color => last.text.push_str(text),
            _ => self.segments.push(Segment {
                color: color.clone(),
                text: text.to_string(),
            }),
        }
    }

    pub fn push_char(&mut self, color: &Color, c: char) {
        let mut buffer = [0; 4];
        self.push(color, c.encode_utf8(&mut buffer));
    }

    /// The line's characters without indent or colors.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect()
    }
}

/// A rendered flag, top row first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Flag {
    pub lines: Vec<Line>,
}

/// Facts about the surroundings that the renderer does not compute itself.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub terminal: TerminalSize,
    /// Already formatted date stamp, when the date is enabled.
    pub date_text: Option<String>,
}

/// Renders the flag in the orientation selected by `config.vertical`.
pub fn render(config: &RenderConfig, dimensions: &Dimensions, context: &RenderContext) -> Flag {
    let indent = left_padding(config, dimensions, context.terminal);
    let date = context
        .date_text
        .as_deref()
        .filter(|date| config.date_enabled && !date.is_empty());

    trace!(
        "Rendering {}x{} flag, vertical: {}, indent: {}",
        dimensions.width,
        dimensions.height,
        config.vertical,
        indent
    );

    let body = if config.vertical {
        render_vertical(config, dimensions, date)
    } else {
        render_horizontal(config, dimensions, date)
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    if config.border_enabled {
        lines.push(border_row(config, dimensions, indent));
    }
    for row in body {
        let mut line = Line::new(indent);
        if config.border_enabled {
            line.push(&config.border_color, &config.border_char);
        }
        for segment in row.segments {
            line.push(&segment.color, &segment.text);
        }
        if config.border_enabled {
            line.push(&config.border_color, &config.border_char);
        }
        lines.push(line);
    }
    if config.border_enabled {
        lines.push(border_row(config, dimensions, indent));
    }

    Flag { lines }
}

/// Spaces that center the flag, zero unless centering is on and the
/// terminal is wider than the flag.
fn left_padding(config: &RenderConfig, dimensions: &Dimensions, terminal: TerminalSize) -> usize {
    let effective_width = dimensions.effective_width(config);
    if config.center && terminal.columns > effective_width {
        (terminal.columns - effective_width) / 2
    } else {
        0
    }
}

fn border_row(config: &RenderConfig, dimensions: &Dimensions, indent: usize) -> Line {
    let mut line = Line::new(indent);
    line.push(
        &config.border_color,
        &config.border_char.repeat(dimensions.effective_width(config)),
    );
    line
}

fn render_horizontal(config: &RenderConfig, dimensions: &Dimensions, date: Option<&str>) -> Vec<Line> {
    let width = dimensions.width;
    let stripes = allocate(dimensions.height);
    let fill = |count: usize| config.fill_char.repeat(count);

    let message_len = config.message.chars().count();
    let message_line = (message_len > 0 && stripes.white > 0).then(|| stripes.white_center());

    let mut lines = Vec::with_capacity(dimensions.height);
    let mut line_index = 0;
    for (size, color) in stripes.bands() {
        for _ in 0..size {
            let mut line = Line::new(0);
            match date {
                Some(date) if line_index == 0 => {
                    let prefix = width.saturating_sub(date.chars().count());
                    line.push(&color, &fill(prefix));
                    line.push(&DATE_TEXT_COLOR, date);
                }
                _ if message_line == Some(line_index) => {
                    let padding = width.saturating_sub(message_len) / 2;
                    line.push(&color, &fill(padding));
                    line.push(&config.message_color, &config.message);
                    line.push(&color, &fill(width.saturating_sub(padding + message_len)));
                }
                _ => line.push(&color, &fill(width)),
            }
            lines.push(line);
            line_index += 1;
        }
    }
    lines
}

fn render_vertical(config: &RenderConfig, dimensions: &Dimensions, date: Option<&str>) -> Vec<Line> {
    let stripes = allocate(dimensions.width);

    let message: Vec<char> = config.message.chars().collect();
    let message_row = (!message.is_empty()).then_some(dimensions.height / 2);
    // Signed: a message wider than the flag starts left of the first column.
    let message_start = (dimensions.width as i64 - message.len() as i64) / 2;
    let date: Vec<char> = date.map(|date| date.chars().collect()).unwrap_or_default();

    let message_cell = |row: usize, column: usize| -> Option<char> {
        if message_row != Some(row) {
            return None;
        }
        let offset = column as i64 - message_start;
        usize::try_from(offset)
            .ok()
            .and_then(|offset| message.get(offset).copied())
    };

    let mut lines = Vec::with_capacity(dimensions.height);
    for row in 0..dimensions.height {
        let mut line = Line::new(0);
        let mut column = 0;
        for (size, color) in stripes.bands() {
            for _ in 0..size {
                if let Some(c) = message_cell(row, column) {
                    line.push_char(&config.message_color, c);
                } else if row == 0 && column < date.len() {
                    line.push_char(&DATE_TEXT_COLOR, date[column]);
                } else {
                    line.push(&color, &config.fill_char);
                }
                column += 1;
            }
        }
        lines.push(line);
    }
    lines
}
