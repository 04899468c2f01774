use crate::{format::OutputFormat, preset::Preset};
use dirs::config_dir;
use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};
use tracing::debug;

pub const DEFAULT_APPLICATION_ID: &str = "transflag";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";
pub const CONFIGURATION_DIRECTORY_VARIABLE: &str = "TRANSFLAG_CONFIG_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data from {path:?}, because of: {cause}")]
    FailedToLoadData {
        path: PathBuf,
        cause: Box<dyn std::error::Error>,
    },
}

/// User defaults read from the configuration file.
///
/// Every key is optional; anything left out keeps the built-in default and
/// command-line flags override whatever is set here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    preset: Option<Preset>,
    fill_char: Option<String>,
    center: Option<bool>,
    border: Option<bool>,
    border_char: Option<String>,
    border_color: Option<String>,
    message_color: Option<String>,
    date_format: Option<String>,
    vertical: Option<bool>,
    format: Option<OutputFormat>,
}

impl Configuration {
    pub fn preset(&self) -> Option<Preset> {
        self.preset
    }

    pub fn fill_char(&self) -> Option<&str> {
        self.fill_char.as_deref()
    }

    pub fn center(&self) -> Option<bool> {
        self.center
    }

    pub fn border(&self) -> Option<bool> {
        self.border
    }

    pub fn border_char(&self) -> Option<&str> {
        self.border_char.as_deref()
    }

    pub fn border_color(&self) -> Option<&str> {
        self.border_color.as_deref()
    }

    pub fn message_color(&self) -> Option<&str> {
        self.message_color.as_deref()
    }

    pub fn date_format(&self) -> Option<&str> {
        self.date_format.as_deref()
    }

    pub fn vertical(&self) -> Option<bool> {
        self.vertical
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.format
    }

    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        // Check for TRANSFLAG_CONFIG_DIR environment variable first
        if let Ok(config_dir_str) = std::env::var(CONFIGURATION_DIRECTORY_VARIABLE) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(configuration_directory) => {
                let mut default_config_file_path = configuration_directory;
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);

                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    /// Loads the default configuration file, falling back to built-in
    /// defaults when there is no such file.
    pub fn load_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = match Configuration::get_default_configuration_file_path() {
            Ok(path) => path,
            Err(e) => {
                debug!("{}, using built-in defaults", e);
                return Ok(Configuration::default());
            }
        };

        if !default_file_path.exists() {
            debug!(
                "No configuration at {}, using built-in defaults",
                default_file_path.display()
            );
            return Ok(Configuration::default());
        }

        debug!(
            "Loading configuration from {}...",
            default_file_path.display()
        );
        Configuration::load_from_file(&default_file_path)
    }

    pub fn load_from_file(path: &Path) -> Result<Configuration, ConfigurationError> {
        let failed = |cause: Box<dyn std::error::Error>| ConfigurationError::FailedToLoadData {
            path: path.to_path_buf(),
            cause,
        };

        let configuration = fs::read_to_string(path).map_err(|e: io::Error| failed(Box::new(e)))?;
        Configuration::from_yaml(&configuration).map_err(|e| failed(Box::new(e)))
    }

    pub fn from_yaml(text: &str) -> Result<Configuration, serde_yaml::Error> {
        // An empty file deserializes to unit, not to an empty mapping.
        if text.trim().is_empty() {
            return Ok(Configuration::default());
        }
        serde_yaml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_yaml_full() {
        let yaml = r##"
preset: tiny
fill_char: "#"
center: true
border: true
border_char: "+"
border_color: "#808080"
message_color: "#ffffff"
date_format: "%H:%M"
vertical: false
format: plain
"##;
        let configuration = Configuration::from_yaml(yaml).unwrap();
        assert_eq!(configuration.preset(), Some(Preset::Tiny));
        assert_eq!(configuration.fill_char(), Some("#"));
        assert_eq!(configuration.center(), Some(true));
        assert_eq!(configuration.border(), Some(true));
        assert_eq!(configuration.border_char(), Some("+"));
        assert_eq!(configuration.border_color(), Some("#808080"));
        assert_eq!(configuration.message_color(), Some("#ffffff"));
        assert_eq!(configuration.date_format(), Some("%H:%M"));
        assert_eq!(configuration.vertical(), Some(false));
        assert_eq!(configuration.format(), Some(OutputFormat::Plain));
    }

    #[test]
    fn test_from_yaml_partial() {
        let configuration = Configuration::from_yaml("vertical: true\n").unwrap();
        assert_eq!(configuration.vertical(), Some(true));
        assert_eq!(configuration.preset(), None);
        assert_eq!(configuration.fill_char(), None);
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(Configuration::from_yaml("").unwrap(), Configuration::default());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_keys() {
        assert!(Configuration::from_yaml("colour: red\n").is_err());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_preset() {
        assert!(Configuration::from_yaml("preset: enormous\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "preset: big").unwrap();
        writeln!(file, "center: true").unwrap();

        let configuration = Configuration::load_from_file(file.path()).unwrap();
        assert_eq!(configuration.preset(), Some(Preset::Big));
        assert_eq!(configuration.center(), Some(true));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Configuration::load_from_file(&dir.path().join("missing.yml"));
        assert!(matches!(
            result,
            Err(ConfigurationError::FailedToLoadData { .. })
        ));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "center: [not, a, bool]").unwrap();

        let result = Configuration::load_from_file(file.path());
        assert!(matches!(
            result,
            Err(ConfigurationError::FailedToLoadData { .. })
        ));
    }
}
