//! Configuration file support for picklab.
//!
//! Configuration is loaded from `~/.config/picklab/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/picklab/config.toml
//! animation_ms = 350
//! frame_ms = 16
//! row_height = 1
//! trailing_spacer = true
//! language = "en"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::i18n::Language;
use crate::picker::DEFAULT_ANIMATION;

const DEFAULT_FRAME_MS: u64 = 16;

pub const USAGE: &str = "\
Usage: picklab [OPTIONS]

Options:
  --animation-ms <ms>  Length of the selection transition
  --frame-ms <ms>      Redraw interval while running
  --no-spacer          Drop the trailing checkmark spacer
  --lang <code>        Interface language (en, zh)
  --config <path>      Read configuration from <path>
  -h, --help           Print this help";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Length of the ease-in transition between a tap and dismissal
    pub animation_ms: Option<u64>,

    /// Redraw interval
    pub frame_ms: Option<u64>,

    /// Height of each picker row in cells
    pub row_height: Option<u16>,

    /// Reserve a hidden checkmark's width after each row
    pub trailing_spacer: Option<bool>,

    /// Interface language
    pub language: Option<Language>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if the file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load `path`, falling back to defaults when it is missing or malformed.
    fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                crate::log::log(&format!("Warning: {}", e));
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("picklab")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if overrides.animation_ms.is_some() {
            self.animation_ms = overrides.animation_ms;
        }
        if overrides.frame_ms.is_some() {
            self.frame_ms = overrides.frame_ms;
        }
        if overrides.trailing_spacer.is_some() {
            self.trailing_spacer = overrides.trailing_spacer;
        }
        if overrides.language.is_some() {
            self.language = overrides.language;
        }
        self
    }

    pub fn animation(&self) -> Duration {
        self.animation_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_ANIMATION)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.unwrap_or(DEFAULT_FRAME_MS).max(1))
    }

    pub fn row_height(&self) -> u16 {
        self.row_height.unwrap_or(1).max(1)
    }

    pub fn trailing_spacer(&self) -> bool {
        self.trailing_spacer.unwrap_or(true)
    }

    /// Configured language, falling back to `LANG`, then English.
    pub fn language(&self) -> Language {
        self.language
            .or_else(|| {
                std::env::var("LANG")
                    .ok()
                    .and_then(|lang| Language::from_code(&lang))
            })
            .unwrap_or_default()
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub animation_ms: Option<u64>,
    pub frame_ms: Option<u64>,
    pub trailing_spacer: Option<bool>,
    pub language: Option<Language>,
    pub config_path: Option<PathBuf>,
    pub help: bool,
}

impl Overrides {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> ConfigResult<Self> {
        let mut overrides = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--animation-ms" => {
                    overrides.animation_ms = Some(parse_millis("--animation-ms", args.next())?);
                }
                "--frame-ms" => {
                    overrides.frame_ms = Some(parse_millis("--frame-ms", args.next())?);
                }
                "--no-spacer" => overrides.trailing_spacer = Some(false),
                "--lang" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--lang"))?;
                    let language = Language::from_code(&value).ok_or(ConfigError::InvalidValue {
                        flag: "--lang",
                        value,
                    })?;
                    overrides.language = Some(language);
                }
                "--config" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--config"))?;
                    overrides.config_path = Some(PathBuf::from(value));
                }
                "--help" | "-h" => overrides.help = true,
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(overrides)
    }
}

fn parse_millis(flag: &'static str, value: Option<String>) -> ConfigResult<u64> {
    let value = value.ok_or(ConfigError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { flag, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.animation(), DEFAULT_ANIMATION);
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.row_height(), 1);
        assert!(config.trailing_spacer());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            animation_ms = 120
            row_height = 2
            trailing_spacer = false
            language = "zh"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.animation(), Duration::from_millis(120));
        assert_eq!(config.row_height(), 2);
        assert!(!config.trailing_spacer());
        assert_eq!(config.language(), Language::Chinese);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("picklab-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "animation_ms = \"fast\"").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
        let config = Config::load_or_default(&path);
        assert_eq!(config.animation(), DEFAULT_ANIMATION);
        assert!(config.trailing_spacer());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("picklab-does-not-exist.toml");
        let config = Config::load_or_default(&path);
        assert_eq!(config.animation_ms, None);
    }

    #[test]
    fn test_zero_row_height_clamped() {
        let config: Config = toml::from_str("row_height = 0").unwrap();
        assert_eq!(config.row_height(), 1);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file: Config = toml::from_str("animation_ms = 500\nframe_ms = 40").unwrap();
        let overrides = Overrides::parse(args(&["--animation-ms", "0", "--no-spacer"])).unwrap();
        let config = file.with_overrides(&overrides);
        assert_eq!(config.animation(), Duration::ZERO);
        assert_eq!(config.frame_interval(), Duration::from_millis(40));
        assert!(!config.trailing_spacer());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Overrides::parse(args(&["--frame-ms"])),
            Err(ConfigError::MissingValue("--frame-ms"))
        ));
        assert!(matches!(
            Overrides::parse(args(&["--animation-ms", "soon"])),
            Err(ConfigError::InvalidValue { flag: "--animation-ms", .. })
        ));
        assert!(matches!(
            Overrides::parse(args(&["--lang", "xx"])),
            Err(ConfigError::InvalidValue { flag: "--lang", .. })
        ));
        assert!(matches!(
            Overrides::parse(args(&["--bogus"])),
            Err(ConfigError::UnknownArgument(_))
        ));
    }

    #[test]
    fn test_parse_lang_and_config_path() {
        let overrides =
            Overrides::parse(args(&["--lang", "zh", "--config", "/tmp/p.toml", "-h"])).unwrap();
        assert_eq!(overrides.language, Some(Language::Chinese));
        assert_eq!(overrides.config_path, Some(PathBuf::from("/tmp/p.toml")));
        assert!(overrides.help);
    }

    #[test]
    fn test_load_from_reports_parse_error() {
        let path = std::env::temp_dir().join(format!("picklab_bad_{}.toml", std::process::id()));
        std::fs::write(&path, "animation_ms = \"slow\"").unwrap();
        let result = Config::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = Path::new("/nonexistent/picklab/config.toml");
        assert!(matches!(
            Config::load_from(path),
            Err(ConfigError::Read { .. })
        ));
    }
}
