use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::ArgMatches;
use tracing::{debug, trace, warn};

use transflag::clock;
use transflag::commands::{
    PARAMETER_BORDER, PARAMETER_BORDER_CHAR, PARAMETER_BORDER_COLOR, PARAMETER_CENTER,
    PARAMETER_CHAR, PARAMETER_CONFIG, PARAMETER_DATE, PARAMETER_FORMAT, PARAMETER_HEIGHT,
    PARAMETER_MESSAGE, PARAMETER_MESSAGE_COLOR, PARAMETER_PRESET, PARAMETER_VERTICAL,
    PARAMETER_WIDTH, PARAMETER_YES,
};
use transflag::configuration::Configuration;
use transflag::confirm::{confirm_oversized, CANCELLED};
use transflag::error::CliError;
use transflag::format::{Formattable, OutputFormat};
use transflag::options::{resolve_dimensions, RenderConfig, RenderConfigBuilder};
use transflag::preset::Preset;
use transflag::render::{render, RenderContext};
use transflag::sanitize::parse_dimension;
use transflag::terminal::TerminalSize;

fn load_configuration(matches: &ArgMatches) -> Result<Configuration, CliError> {
    let configuration = match matches.get_one::<PathBuf>(PARAMETER_CONFIG) {
        Some(path) => {
            debug!("Loading configuration from {}...", path.display());
            Configuration::load_from_file(path)?
        }
        None => Configuration::load_default()?,
    };
    trace!("Configuration: {:?}", configuration);
    Ok(configuration)
}

/// The last recognized preset word, warning about the others.
fn selected_preset(matches: &ArgMatches) -> Option<Preset> {
    let mut selected = None;
    for name in matches
        .get_many::<String>(PARAMETER_PRESET)
        .into_iter()
        .flatten()
    {
        match Preset::from_str(name) {
            Ok(preset) => selected = Some(preset),
            Err(_) => warn!(
                "Ignoring unknown preset {:?}, expected one of: {}",
                name,
                Preset::names().join(", ")
            ),
        }
    }
    selected
}

/// Overlays the command line on top of the configuration file.
pub fn render_config_from_matches(
    matches: &ArgMatches,
    configuration: &Configuration,
) -> Result<RenderConfig, CliError> {
    let mut builder = RenderConfigBuilder::from_configuration(configuration);

    if let Some(preset) = selected_preset(matches) {
        builder.preset(preset);
    }
    if let Some(width) = matches.get_one::<String>(PARAMETER_WIDTH) {
        builder.width(parse_dimension(width, "width"));
    }
    if let Some(height) = matches.get_one::<String>(PARAMETER_HEIGHT) {
        builder.height(parse_dimension(height, "height"));
    }
    if let Some(fill_char) = matches.get_one::<String>(PARAMETER_CHAR) {
        builder.fill_char(fill_char);
    }
    if matches.get_flag(PARAMETER_CENTER) {
        builder.center(true);
    }
    if matches.get_flag(PARAMETER_BORDER) {
        builder.border(true);
    }
    if let Some(border_char) = matches.get_one::<String>(PARAMETER_BORDER_CHAR) {
        builder.border_char(border_char);
    }
    if let Some(border_color) = matches.get_one::<String>(PARAMETER_BORDER_COLOR) {
        builder.border_color(border_color);
    }
    if let Some(message) = matches.get_one::<String>(PARAMETER_MESSAGE) {
        builder.message(message);
    }
    if let Some(message_color) = matches.get_one::<String>(PARAMETER_MESSAGE_COLOR) {
        builder.message_color(message_color);
    }
    if let Some(date_format) = matches.get_one::<String>(PARAMETER_DATE) {
        builder.date(Some(date_format));
    }
    if matches.get_flag(PARAMETER_VERTICAL) {
        builder.vertical(true);
    }
    if let Some(format) = matches.get_one::<String>(PARAMETER_FORMAT) {
        match OutputFormat::from_str(format) {
            Ok(format) => {
                builder.format(format);
            }
            Err(e) => warn!("Ignoring {}", e),
        }
    }
    builder.assume_yes(matches.get_flag(PARAMETER_YES));

    Ok(builder.build())
}

pub fn execute_command(matches: &ArgMatches) -> Result<(), CliError> {
    let configuration = load_configuration(matches)?;
    let config = render_config_from_matches(matches, &configuration)?;
    trace!("Render configuration: {:?}", config);

    let terminal = TerminalSize::detect();
    let dimensions = resolve_dimensions(&config, terminal);
    let terminal = terminal.unwrap_or_default();

    let flag_height = dimensions.effective_height(&config);
    if dimensions.check_height
        && !config.assume_yes
        && terminal.rows < flag_height
        && !confirm_oversized(terminal.rows, flag_height)?
    {
        println!("{}", CANCELLED);
        return Ok(());
    }

    let context = RenderContext {
        terminal,
        date_text: config
            .date_enabled
            .then(|| clock::stamp(&config.date_format)),
    };
    let flag = render(&config, &dimensions, &context);

    let output = flag.format(&config.format)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
