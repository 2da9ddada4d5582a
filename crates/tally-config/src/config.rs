use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tally_models::SplitMode;
use thiserror::Error;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Lines,
    Words,
    Column,
}

/// How input files are split into items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    #[serde(default = "default_mode")]
    pub mode: InputMode,
    /// Zero-based field index, only used in column mode
    #[serde(default)]
    pub column: usize,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
    #[serde(default = "default_true")]
    pub trim: bool,
    #[serde(default = "default_true")]
    pub skip_empty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    #[serde(default = "default_min_count")]
    pub min_count: usize,
    #[serde(default)]
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Write logs to this file (rotated daily) instead of stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(String),
    #[error("min_count must be at least 1")]
    ZeroMinCount,
    #[error("top must be greater than 0 when set")]
    ZeroTop,
}

fn default_mode() -> InputMode {
    InputMode::Lines
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_true() -> bool {
    true
}

fn default_min_count() -> usize {
    1
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            column: 0,
            delimiter: default_delimiter(),
            case_sensitive: default_true(),
            trim: default_true(),
            skip_empty: default_true(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            min_count: default_min_count(),
            top: None,
        }
    }
}

impl InputConfig {
    /// The delimiter as a single byte, if it is one ASCII character
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => Ok(c as u8),
            _ => Err(ConfigError::InvalidDelimiter(self.delimiter.clone())),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.delimiter_byte()?;

        if self.report.min_count == 0 {
            return Err(ConfigError::ZeroMinCount);
        }

        if self.report.top == Some(0) {
            return Err(ConfigError::ZeroTop);
        }

        Ok(())
    }

    pub fn split_mode(&self) -> Result<SplitMode, ConfigError> {
        Ok(match self.input.mode {
            InputMode::Lines => SplitMode::Lines,
            InputMode::Words => SplitMode::Words,
            InputMode::Column => SplitMode::Column {
                index: self.input.column,
                delimiter: self.input.delimiter_byte()? as char,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            input: InputConfig {
                mode: InputMode::Column,
                column: 2,
                delimiter: "\t".to_string(),
                case_sensitive: false,
                ..InputConfig::default()
            },
            report: ReportConfig {
                min_count: 3,
                top: Some(10),
            },
            logging: LoggingConfig {
                file: Some(PathBuf::from("/var/log/tally.log")),
            },
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.input.delimiter, "\t");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "").unwrap();

        let loaded = Config::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, Config::default());
        assert_eq!(loaded.input.mode, InputMode::Lines);
        assert_eq!(loaded.report.min_count, 1);
        assert!(loaded.input.case_sensitive);
    }

    #[test]
    fn test_partial_section() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[input]\nmode = \"words\"\n\n[report]\ntop = 5\n").unwrap();

        let loaded = Config::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.input.mode, InputMode::Words);
        assert_eq!(loaded.input.delimiter, ",");
        assert_eq!(loaded.report.top, Some(5));
        assert_eq!(loaded.report.min_count, 1);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[input\nmode = ").unwrap();
        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("parsing "));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load_from_file(&path).unwrap_err();
        assert_eq!(err.to_string(), format!("reading {}", path.display()));
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.input.delimiter = "::".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDelimiter("::".to_string()))
        );

        config.input.delimiter = ";".to_string();
        config.report.min_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroMinCount));

        config.report.min_count = 2;
        config.report.top = Some(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTop));
    }

    #[test]
    fn test_split_mode() {
        let mut config = Config::default();
        assert_eq!(config.split_mode().unwrap(), SplitMode::Lines);

        config.input.mode = InputMode::Column;
        config.input.column = 1;
        config.input.delimiter = "|".to_string();
        assert_eq!(
            config.split_mode().unwrap(),
            SplitMode::Column { index: 1, delimiter: '|' }
        );

        config.input.delimiter = "é".to_string();
        assert!(config.split_mode().is_err());
    }
}
