use crate::consts;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Where and how much to log
    #[serde(default)]
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("wrapsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Gameplay settings
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Number of food items on the field at once
    pub(crate) food: usize,

    /// Number of body segments the snake starts with
    pub(crate) body_length: usize,

    /// Time between ticks
    pub(crate) tick_period: Duration,

    /// Time between ticks in fast mode
    pub(crate) fast_tick_period: Duration,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            food: consts::FOOD_COUNT,
            body_length: consts::INITIAL_BODY_LENGTH,
            tick_period: consts::TICK_PERIOD,
            fast_tick_period: consts::FAST_TICK_PERIOD,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    food: usize,
    body_length: usize,
    tick_ms: u64,
    fast_tick_ms: u64,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        let defaults = GameConfig::default();
        RawGameConfig {
            food: defaults.food,
            body_length: defaults.body_length,
            tick_ms: duration_millis(defaults.tick_period),
            fast_tick_ms: duration_millis(defaults.fast_tick_period),
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = InvalidSetting;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, InvalidSetting> {
        for (name, zero) in [
            ("food", value.food == 0),
            ("body-length", value.body_length == 0),
            ("tick-ms", value.tick_ms == 0),
            ("fast-tick-ms", value.fast_tick_ms == 0),
        ] {
            if zero {
                return Err(InvalidSetting(name));
            }
        }
        Ok(GameConfig {
            food: value.food,
            body_length: value.body_length,
            tick_period: Duration::from_millis(value.tick_ms),
            fast_tick_period: Duration::from_millis(value.fast_tick_ms),
        })
    }
}

fn duration_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("setting {0:?} must be greater than zero")]
pub(crate) struct InvalidSetting(&'static str);

/// Logging settings
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawLoggingConfig")]
pub(crate) struct LoggingConfig {
    /// File to write log messages to.  If not set, nothing is logged.
    pub(crate) file: Option<PathBuf>,

    /// Most verbose level of message to log
    pub(crate) level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawLoggingConfig {
    file: Option<String>,
    level: LevelFilter,
}

impl Default for RawLoggingConfig {
    fn default() -> RawLoggingConfig {
        RawLoggingConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

impl TryFrom<RawLoggingConfig> for LoggingConfig {
    type Error = std::io::Error;

    fn try_from(value: RawLoggingConfig) -> Result<LoggingConfig, std::io::Error> {
        Ok(LoggingConfig {
            file: value.file.map(expanduser::expanduser).transpose()?,
            level: value.level,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_str(src: &str) -> Result<Config, ConfigError> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(src.as_bytes()).unwrap();
        file.flush().unwrap();
        Config::load(file.path(), false)
    }

    #[test]
    fn empty_file() {
        assert_eq!(load_str("").unwrap(), Config::default());
    }

    #[test]
    fn full_file() {
        let cfg = load_str(concat!(
            "[game]\n",
            "food = 5\n",
            "body-length = 3\n",
            "tick-ms = 200\n",
            "fast-tick-ms = 50\n",
            "\n",
            "[logging]\n",
            "file = \"/tmp/wrapsnake.log\"\n",
            "level = \"debug\"\n",
        ))
        .unwrap();
        assert_eq!(
            cfg,
            Config {
                game: GameConfig {
                    food: 5,
                    body_length: 3,
                    tick_period: Duration::from_millis(200),
                    fast_tick_period: Duration::from_millis(50),
                },
                logging: LoggingConfig {
                    file: Some(PathBuf::from("/tmp/wrapsnake.log")),
                    level: LevelFilter::Debug,
                },
            }
        );
    }

    #[test]
    fn partial_game_section() {
        let cfg = load_str("[game]\nfood = 1\n").unwrap();
        assert_eq!(
            cfg.game,
            GameConfig {
                food: 1,
                ..GameConfig::default()
            }
        );
    }

    #[test]
    fn zero_setting() {
        let e = load_str("[game]\ntick-ms = 0\n").unwrap_err();
        assert!(matches!(e, ConfigError::Parse(_)));
        let msg = std::error::Error::source(&e).unwrap().to_string();
        assert!(msg.contains("\"tick-ms\" must be greater than zero"), "{msg}");
    }

    #[test]
    fn unknown_level() {
        let e = load_str("[logging]\nlevel = \"chatty\"\n").unwrap_err();
        assert!(matches!(e, ConfigError::Parse(_)));
    }

    #[test]
    fn log_file_tilde_expanded() {
        let cfg = load_str("[logging]\nfile = \"~/wrapsnake.log\"\n").unwrap();
        let home = dirs::home_dir().unwrap();
        assert_eq!(cfg.logging.file, Some(home.join("wrapsnake.log")));
        assert_eq!(cfg.logging.level, LevelFilter::Info);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }
}
