//! Command line definition and argument parsing.
//!
//! The command is built with the clap builder API from the parameter
//! functions in [`params`].

use clap::{Arg, ArgMatches, Command};
use std::ffi::OsString;

use crate::preset::Preset;

pub mod params;

pub use params::{
    LEGACY_HEIGHT_FLAG, PARAMETER_BORDER, PARAMETER_BORDER_CHAR, PARAMETER_BORDER_COLOR,
    PARAMETER_CENTER, PARAMETER_CHAR, PARAMETER_CONFIG, PARAMETER_DATE, PARAMETER_FORMAT,
    PARAMETER_HEIGHT, PARAMETER_MESSAGE, PARAMETER_MESSAGE_COLOR, PARAMETER_PRESET,
    PARAMETER_VERBOSE, PARAMETER_VERTICAL, PARAMETER_WIDTH, PARAMETER_YES,
};

/// Create the `transflag` command with all of its arguments.
pub fn create_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .args_override_self(true)
        .after_help(format!("Presets: {}", Preset::names().join(", ")))
        .arg(params::preset_parameter())
        .arg(params::width_parameter())
        .arg(params::height_parameter())
        .arg(params::char_parameter())
        .arg(params::center_parameter())
        .arg(params::border_parameter())
        .arg(params::border_char_parameter())
        .arg(params::border_color_parameter())
        .arg(params::message_parameter())
        .arg(params::message_color_parameter())
        .arg(params::date_parameter())
        .arg(params::vertical_parameter())
        .arg(params::format_parameter())
        .arg(params::yes_parameter())
        .arg(params::config_parameter())
        .arg(params::verbose_parameter())
}

/// Arguments prepared for clap, together with the tokens that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedArgs {
    pub args: Vec<OsString>,
    /// Human readable description of every dropped token.
    pub ignored: Vec<String>,
}

/// Prepares a raw argument vector, program name included, for clap.
///
/// - `-he` is rewritten to `--height`.
/// - Unknown options are dropped.
/// - An option that needs a value but ends the line is dropped.
/// - Option values are attached with `=`, so a value may start with `-`.
///
/// Short options can be clustered (`-Cy`, `-w10`).
pub fn normalize_args<I, T>(args: I) -> NormalizedArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut command = create_command();
    command.build();

    let mut args = args.into_iter().map(Into::<OsString>::into);
    let mut normalized = NormalizedArgs {
        args: args.next().into_iter().collect(),
        ignored: Vec::new(),
    };

    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            normalized.args.push(arg);
            continue;
        };
        if text == "--" {
            normalized.args.push(arg);
            normalized.args.extend(args.by_ref());
            break;
        }

        let text = if text == LEGACY_HEIGHT_FLAG {
            format!("--{}", PARAMETER_HEIGHT)
        } else {
            text.to_string()
        };

        if let Some(long) = text.strip_prefix("--") {
            let (name, attached) = match long.split_once('=') {
                Some((name, value)) => (name, Some(OsString::from(value))),
                None => (long, None),
            };
            match command.get_arguments().find(|a| a.get_long() == Some(name)) {
                Some(option) => push_option(&mut normalized, option, attached, &mut args),
                None => normalized.ignored.push(format!("unknown option --{}", name)),
            }
            continue;
        }

        let Some(mut cluster) = text.strip_prefix('-').filter(|rest| !rest.is_empty()) else {
            // positional, or a lone `-`
            normalized.args.push(arg);
            continue;
        };
        while let Some(short) = cluster.chars().next() {
            cluster = &cluster[short.len_utf8()..];
            match command.get_arguments().find(|a| a.get_short() == Some(short)) {
                Some(option) if option.get_action().takes_values() => {
                    let attached = (!cluster.is_empty()).then(|| OsString::from(cluster));
                    push_option(&mut normalized, option, attached, &mut args);
                    break;
                }
                Some(option) => push_option(&mut normalized, option, None, &mut args),
                None => normalized.ignored.push(format!("unknown option -{}", short)),
            }
        }
    }

    normalized
}

/// Pushes `option` in its long form, taking its value from `attached` or,
/// when a value is required, from the next argument.
fn push_option<I>(
    normalized: &mut NormalizedArgs,
    option: &Arg,
    attached: Option<OsString>,
    rest: &mut I,
) where
    I: Iterator<Item = OsString>,
{
    let name = option.get_long().unwrap_or(option.get_id().as_str());
    let flag = format!("--{}", name);

    if !option.get_action().takes_values() {
        if attached.is_some() {
            normalized
                .ignored
                .push(format!("value given to {}, which takes none", flag));
        }
        normalized.args.push(OsString::from(flag));
        return;
    }

    let value_optional = option
        .get_num_args()
        .is_some_and(|range| range.min_values() == 0);
    let value = match attached {
        Some(value) => Some(value),
        // clap decides whether the next argument belongs to the option
        None if value_optional => {
            normalized.args.push(OsString::from(flag));
            return;
        }
        None => rest.next(),
    };

    match value {
        Some(value) => {
            let mut joined = OsString::from(format!("{}=", flag));
            joined.push(value);
            normalized.args.push(joined);
        }
        None => normalized.ignored.push(format!("{} without a value", flag)),
    }
}

/// Parses a full argument vector, program name included.
///
/// Returns the matches and the descriptions of the tokens that were dropped.
pub fn parse_arguments<I, T>(args: I) -> Result<(ArgMatches, Vec<String>), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let NormalizedArgs { args, ignored } = normalize_args(args);
    let matches = create_command().try_get_matches_from(args)?;
    Ok((matches, ignored))
}
