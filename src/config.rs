use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};
use crate::picker::PickerConfig;

const CONFIG_PATH_ENV_VAR: &str = "DATEPICK_CONFIG_FILE";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    pub theme: ThemeConfig,
}

/// Colour names as written in the configuration file, resolved by
/// `ui::Theme::from_config`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub header: String,
    pub pale: String,
    pub selected: String,
    pub focus_char: Option<char>,
    pub today_char: Option<char>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            header: "yellow".to_owned(),
            pale: "cyan".to_owned(),
            selected: "blue".to_owned(),
            focus_char: None,
            today_char: Some('*'),
        }
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            Error::from(err).with_msg(&format!("could not read '{}'", path.display()))
        })?;

        content.parse().map_err(|err: Error| {
            let msg = format!(
                "{}: {}",
                path.display(),
                err.message.as_deref().unwrap_or_default()
            );
            err.with_msg(&msg)
        })
    }
}

pub fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    let config_dir = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .ok()
        .or_else(dirs::config_dir);
    if let Some(dir) = config_dir {
        locations.push(dir.join("datepick").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".datepick.toml"));
    }

    locations
}

/// Loads the explicitly requested file, else the first existing default
/// location, else the built-in defaults.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(Error::new(
                ErrorKind::ConfigMissing,
                &path.display().to_string(),
            ));
        }
        return Config::load(path);
    }

    match find_configfile_locations()
        .into_iter()
        .find(|location| location.is_file())
    {
        Some(location) => {
            log::info!("loading config from '{}'", location.display());
            Config::load(&location)
        }
        None => {
            log::info!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.picker.use_capture_phase);
        assert_eq!(config.picker.placeholder.as_deref(), Some("YYYY-MM-DD"));
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = Config::from_str(
            r#"
            [picker]
            use_capture_phase = false

            [theme]
            selected = "red"
            focus_char = ">"
            "#,
        )
        .unwrap();

        assert!(!config.picker.use_capture_phase);
        assert_eq!(config.picker.placeholder.as_deref(), Some("YYYY-MM-DD"));
        assert_eq!(config.theme.selected, "red");
        assert_eq!(config.theme.header, "yellow");
        assert_eq!(config.theme.focus_char, Some('>'));
        assert_eq!(config.theme.today_char, Some('*'));
    }

    #[test]
    fn placeholder_can_be_changed() {
        let config = Config::from_str("[picker]\nplaceholder = \"pick a date\"").unwrap();
        assert_eq!(config.picker.placeholder.as_deref(), Some("pick a date"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = Config::from_str("[picker\nplaceholder = 1").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_suitable_config(Some(Path::new("/nonexistent/datepick.toml"))).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigMissing));
    }
}
