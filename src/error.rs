use thiserror::Error;

use crate::exit_codes::TransflagExitCode;

/// Error types that stop the program
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when the command line cannot be parsed
    #[error("{0}")]
    UsageError(String),
    /// Error related to configuration loading
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] crate::configuration::ConfigurationError),
    /// Error related to output formatting
    #[error("Formatting error: {0}")]
    FormattingError(#[from] crate::format::FormattingError),
    /// Error writing to the terminal or reading the confirmation answer
    #[error("Input/Output error: {0}")]
    InputOutputError(#[from] std::io::Error),
    /// Error raised by the interactive prompt
    #[error("Prompt error: {0}")]
    PromptError(#[from] inquire::InquireError),
}

impl CliError {
    /// Get the appropriate exit code for this error
    ///
    /// - `UsageError` for command line errors
    /// - `ConfigError` for configuration errors
    /// - `DataError` for formatting errors
    /// - `OSError` for I/O errors
    /// - `SoftwareError` for prompt failures
    pub fn exit_code(&self) -> TransflagExitCode {
        match self {
            CliError::UsageError(_) => TransflagExitCode::UsageError,
            CliError::ConfigurationError(_) => TransflagExitCode::ConfigError,
            CliError::FormattingError(_) => TransflagExitCode::DataError,
            CliError::InputOutputError(_) => TransflagExitCode::OSError,
            CliError::PromptError(_) => TransflagExitCode::SoftwareError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::ConfigurationError;
    use crate::format::FormattingError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CliError::UsageError("bad".to_string()).exit_code(),
            TransflagExitCode::UsageError
        );
        assert_eq!(
            CliError::from(ConfigurationError::FailedToFindConfigurationDirectory).exit_code(),
            TransflagExitCode::ConfigError
        );
        assert_eq!(
            CliError::from(FormattingError::UnsupportedOutputFormat("xml".to_string()))
                .exit_code(),
            TransflagExitCode::DataError
        );
        assert_eq!(
            CliError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe)).exit_code(),
            TransflagExitCode::OSError
        );
        assert_eq!(
            CliError::from(inquire::InquireError::NotTTY).exit_code(),
            TransflagExitCode::SoftwareError
        );
    }
}
