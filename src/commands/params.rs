//! Command line parameters.
//!
//! Parameter names are shared between the command definition and the code
//! that reads the parsed matches.

use crate::format::OutputFormat;
use clap::{Arg, ArgAction};
use std::path::PathBuf;

pub const PARAMETER_PRESET: &str = "preset";
pub const PARAMETER_WIDTH: &str = "width";
pub const PARAMETER_HEIGHT: &str = "height";
pub const PARAMETER_CHAR: &str = "char";
pub const PARAMETER_CENTER: &str = "center";
pub const PARAMETER_BORDER: &str = "border";
pub const PARAMETER_BORDER_CHAR: &str = "border-char";
pub const PARAMETER_BORDER_COLOR: &str = "border-color-esc";
pub const PARAMETER_MESSAGE: &str = "message";
pub const PARAMETER_MESSAGE_COLOR: &str = "message-color-esc";
pub const PARAMETER_DATE: &str = "date";
pub const PARAMETER_VERTICAL: &str = "vertical";
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_YES: &str = "yes";
pub const PARAMETER_CONFIG: &str = "config";
pub const PARAMETER_VERBOSE: &str = "verbose";

/// Legacy spelling of `--height`, rewritten before parsing.
pub const LEGACY_HEIGHT_FLAG: &str = "-he";

/// Size presets given as bare words. Unknown words are tolerated.
pub fn preset_parameter() -> Arg {
    Arg::new(PARAMETER_PRESET)
        .num_args(1..)
        .action(ArgAction::Append)
        .value_name("PRESET")
        .help("Size preset; the last recognized one wins")
}

pub fn width_parameter() -> Arg {
    Arg::new(PARAMETER_WIDTH)
        .short('w')
        .long(PARAMETER_WIDTH)
        .num_args(1)
        .allow_hyphen_values(true)
        .value_name("W")
        .help("Flag width in characters")
}

pub fn height_parameter() -> Arg {
    Arg::new(PARAMETER_HEIGHT)
        .short('H')
        .long(PARAMETER_HEIGHT)
        .num_args(1)
        .allow_hyphen_values(true)
        .value_name("H")
        .help("Flag height in lines (also -he)")
}

pub fn char_parameter() -> Arg {
    Arg::new(PARAMETER_CHAR)
        .short('c')
        .long(PARAMETER_CHAR)
        .num_args(1)
        .value_name("C")
        .help("Fill character")
}

pub fn center_parameter() -> Arg {
    Arg::new(PARAMETER_CENTER)
        .short('C')
        .long(PARAMETER_CENTER)
        .action(ArgAction::SetTrue)
        .help("Center the flag horizontally in the terminal")
}

pub fn border_parameter() -> Arg {
    Arg::new(PARAMETER_BORDER)
        .long(PARAMETER_BORDER)
        .action(ArgAction::SetTrue)
        .help("Draw a border around the flag")
}

pub fn border_char_parameter() -> Arg {
    Arg::new(PARAMETER_BORDER_CHAR)
        .long(PARAMETER_BORDER_CHAR)
        .num_args(1)
        .value_name("CH")
        .help("Border character (enables the border)")
}

pub fn border_color_parameter() -> Arg {
    Arg::new(PARAMETER_BORDER_COLOR)
        .long(PARAMETER_BORDER_COLOR)
        .num_args(1)
        .allow_hyphen_values(true)
        .value_name("ESC")
        .help("Border color as an escape sequence or #RRGGBB (enables the border)")
}

pub fn message_parameter() -> Arg {
    Arg::new(PARAMETER_MESSAGE)
        .short('m')
        .long(PARAMETER_MESSAGE)
        .num_args(1)
        .allow_hyphen_values(true)
        .value_name("TEXT")
        .help("Message drawn across the middle of the flag")
}

pub fn message_color_parameter() -> Arg {
    Arg::new(PARAMETER_MESSAGE_COLOR)
        .long(PARAMETER_MESSAGE_COLOR)
        .num_args(1)
        .allow_hyphen_values(true)
        .value_name("ESC")
        .help("Message color as an escape sequence or #RRGGBB")
}

pub fn date_parameter() -> Arg {
    Arg::new(PARAMETER_DATE)
        .long(PARAMETER_DATE)
        .num_args(0..=1)
        .default_missing_value("")
        .value_name("FORMAT")
        .help("Stamp the current date on the first line, optionally with a strftime format")
}

pub fn vertical_parameter() -> Arg {
    Arg::new(PARAMETER_VERTICAL)
        .long(PARAMETER_VERTICAL)
        .action(ArgAction::SetTrue)
        .help("Draw the stripes vertically")
}

pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .short('f')
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .required(false)
        .value_name("FORMAT")
        .help(format!("Output format [{}]", OutputFormat::names().join(", ")))
}

pub fn yes_parameter() -> Arg {
    Arg::new(PARAMETER_YES)
        .short('y')
        .long(PARAMETER_YES)
        .action(ArgAction::SetTrue)
        .help("Draw oversized flags without asking")
}

pub fn config_parameter() -> Arg {
    Arg::new(PARAMETER_CONFIG)
        .long(PARAMETER_CONFIG)
        .num_args(1)
        .value_name("PATH")
        .help("Read defaults from this configuration file")
        .value_parser(clap::value_parser!(PathBuf))
}

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .help("Enable verbose output for debugging")
}
