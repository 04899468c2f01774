use tracing::{trace, warn};
use tracing_subscriber::EnvFilter;
use transflag::commands::{parse_arguments, PARAMETER_VERBOSE};
use transflag::error::CliError;

mod cli;
use cli::execute_command;

fn exit_with(e: CliError) -> ! {
    let code = e.exit_code();
    eprintln!("ERROR: {}", e);
    trace!("Exiting with {} ({})", code.code(), code.message());
    ::std::process::exit(code.code());
}

/// Main entry point for the program
fn main() {
    let (matches, ignored) = match parse_arguments(std::env::args_os()) {
        Ok(parsed) => parsed,
        // help and version are reported as errors by clap but go to stdout
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let message = e.to_string();
            let message = message.trim_start_matches("error: ").trim_end();
            exit_with(CliError::UsageError(message.to_string()))
        }
    };

    // Initialize the logging subsystem
    let default_level = if matches.get_flag(PARAMETER_VERBOSE) {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    for token in &ignored {
        warn!("Ignoring {}", token);
    }
    trace!("Arguments: {:?}", matches);

    if let Err(e) = execute_command(&matches) {
        exit_with(e);
    }
}
