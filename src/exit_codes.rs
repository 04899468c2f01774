//! Exit codes for the transflag application
//!
//! The values follow the BSD sysexits.h conventions so that scripts can tell
//! a bad invocation apart from a broken configuration file.

/// Process exit codes used by transflag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TransflagExitCode {
    /// Success (0) - The flag was drawn, or drawing was declined
    Success = exitcode::OK,

    /// Command line usage error (64) - Arguments clap cannot read, such as non-UTF-8 text
    UsageError = exitcode::USAGE,

    /// Data format error (65) - The flag could not be serialized
    DataError = exitcode::DATAERR,

    /// Internal software error (70) - The confirmation prompt failed
    SoftwareError = exitcode::SOFTWARE,

    /// System error (71) - Writing to the terminal failed
    OSError = exitcode::OSERR,

    /// Configuration error (78) - The configuration file is unreadable or malformed
    ConfigError = exitcode::CONFIG,
}

impl TransflagExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Get descriptive message for the exit code
    pub fn message(&self) -> &'static str {
        match self {
            TransflagExitCode::Success => "Success",
            TransflagExitCode::UsageError => "Command line usage error",
            TransflagExitCode::DataError => "Data format error",
            TransflagExitCode::SoftwareError => "Internal software error",
            TransflagExitCode::OSError => "Operating system error",
            TransflagExitCode::ConfigError => "Configuration error",
        }
    }
}

impl From<TransflagExitCode> for i32 {
    fn from(code: TransflagExitCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(TransflagExitCode::Success.code(), 0);
        assert_eq!(TransflagExitCode::UsageError.code(), 64);
        assert_eq!(TransflagExitCode::DataError.code(), 65);
        assert_eq!(TransflagExitCode::SoftwareError.code(), 70);
        assert_eq!(TransflagExitCode::OSError.code(), 71);
        assert_eq!(i32::from(TransflagExitCode::ConfigError), 78);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            TransflagExitCode::ConfigError.message(),
            "Configuration error"
        );
    }
}
