use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{MASTER_GAIN, UI_FPS};
use crate::error::ConfigError;

/// Configuration loaded from a TOML file. Every section and field is
/// optional; missing values fall back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub ambience: AmbienceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_fps")]
    pub fps: u64,

    #[serde(default)]
    pub theme: ThemeMode,

    #[serde(default = "default_true")]
    pub show_intro: bool,
}

fn default_fps() -> u64 {
    UI_FPS
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            theme: ThemeMode::default(),
            show_intro: default_true(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AmbienceConfig {
    /// Start with sound on
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_master_gain")]
    pub master_gain: f32,
}

fn default_master_gain() -> f32 {
    MASTER_GAIN
}

impl Default for AmbienceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            master_gain: default_master_gain(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; defaults to the user cache directory
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("datapulse")
                .join("datapulse.log")
        })
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("datapulse").join("config.toml"))
    }

    /// Loads the file at the default location if one exists
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Frame budget derived from `display.fps`
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / self.display.fps.clamp(1, 240))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Config, ConfigError> {
        Config::parse(s, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.display.fps, UI_FPS);
        assert_eq!(config.display.theme, ThemeMode::Dark);
        assert!(config.display.show_intro);
        assert!(!config.ambience.enabled);
        assert_eq!(config.ambience.master_gain, MASTER_GAIN);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse(
            r#"
            [display]
            theme = "light"

            [ambience]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.display.theme, ThemeMode::Light);
        assert_eq!(config.display.fps, UI_FPS);
        assert!(config.ambience.enabled);
        assert_eq!(config.ambience.master_gain, MASTER_GAIN);
    }

    #[test]
    fn bad_value_reports_path() {
        let err = parse("[display]\nfps = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("test.toml"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load(Path::new("/nonexistent/datapulse.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn frame_duration_is_clamped() {
        let mut config = Config::default();
        config.display.fps = 0;
        assert_eq!(config.frame_duration().as_millis(), 1000);
        config.display.fps = 50;
        assert_eq!(config.frame_duration().as_millis(), 20);
    }

    #[test]
    fn explicit_log_file_wins() {
        let logging = LoggingConfig {
            level: "debug".into(),
            file: Some(PathBuf::from("/tmp/x.log")),
        };
        assert_eq!(logging.file_path(), PathBuf::from("/tmp/x.log"));
    }
}
