use crate::consts;
use crate::game::{Pacing, Rules};
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Highest frame rate accepted for smooth pacing
const MAX_FRAME_RATE: u16 = 240;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawConfig")]
pub(crate) struct Config {
    /// Length of each side of the board, in cells
    pub(crate) board_size: u16,

    /// Milliseconds between steps at the start of a game
    pub(crate) initial_speed: u64,

    /// Milliseconds taken off the time between steps each time food is eaten
    pub(crate) speed_step: u64,

    /// Smallest number of milliseconds between steps
    pub(crate) min_speed: u64,

    /// Points scored per piece of food
    pub(crate) food_reward: u32,

    pub(crate) pacing: Pacing,

    /// Frames per second to draw with smooth pacing
    pub(crate) frame_rate: u16,

    /// Whether to draw food as emoji
    pub(crate) emoji: bool,

    /// File to write log messages to.  If not set, nothing is logged.
    pub(crate) log_file: Option<PathBuf>,

    pub(crate) log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            board_size: consts::BOARD_SIZE,
            initial_speed: millis(consts::INITIAL_SPEED),
            speed_step: millis(consts::SPEED_STEP),
            min_speed: millis(consts::MIN_SPEED),
            food_reward: consts::FOOD_REWARD,
            pacing: Pacing::default(),
            frame_rate: consts::FRAME_RATE,
            emoji: true,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("tuisnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if any setting is out of range.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        Config::parse(&content)
    }

    fn parse(content: &str) -> Result<Config, ConfigError> {
        toml::from_str::<Config>(content)?.validate()
    }

    /// Check that all settings are within their allowed ranges
    pub(crate) fn validate(self) -> Result<Config, ConfigError> {
        if !(2..=consts::MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::invalid(
                "board-size",
                format!("must be between 2 and {}", consts::MAX_BOARD_SIZE),
            ));
        }
        if !(1..=MAX_FRAME_RATE).contains(&self.frame_rate) {
            return Err(ConfigError::invalid(
                "frame-rate",
                format!("must be between 1 and {MAX_FRAME_RATE}"),
            ));
        }
        if self.min_speed == 0 {
            return Err(ConfigError::invalid("min-speed", "must be positive"));
        }
        if self.initial_speed < self.min_speed {
            return Err(ConfigError::invalid(
                "initial-speed",
                "must not be less than min-speed",
            ));
        }
        Ok(self)
    }

    pub(crate) fn rules(&self) -> Rules {
        Rules {
            board_size: self.board_size,
            initial_speed: Duration::from_millis(self.initial_speed),
            speed_step: Duration::from_millis(self.speed_step),
            min_speed: Duration::from_millis(self.min_speed),
            food_reward: self.food_reward,
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawConfig {
    board_size: u16,
    initial_speed: u64,
    speed_step: u64,
    min_speed: u64,
    food_reward: u32,
    pacing: Pacing,
    frame_rate: u16,
    emoji: bool,
    log_file: Option<String>,
    log_level: LevelFilter,
}

impl Default for RawConfig {
    fn default() -> RawConfig {
        let config = Config::default();
        RawConfig {
            board_size: config.board_size,
            initial_speed: config.initial_speed,
            speed_step: config.speed_step,
            min_speed: config.min_speed,
            food_reward: config.food_reward,
            pacing: config.pacing,
            frame_rate: config.frame_rate,
            emoji: config.emoji,
            log_file: None,
            log_level: config.log_level,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = std::io::Error;

    fn try_from(value: RawConfig) -> Result<Config, std::io::Error> {
        Ok(Config {
            board_size: value.board_size,
            initial_speed: value.initial_speed,
            speed_step: value.speed_step,
            min_speed: value.min_speed,
            food_reward: value.food_reward,
            pacing: value.pacing,
            frame_rate: value.frame_rate,
            emoji: value.emoji,
            log_file: value.log_file.map(expanduser::expanduser).transpose()?,
            log_level: value.log_level,
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
    #[error("invalid {key} setting: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    fn invalid<S: Into<String>>(key: &'static str, reason: S) -> ConfigError {
        ConfigError::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn default_rules() {
        assert_eq!(Config::default().rules(), Rules::default());
    }

    #[test]
    fn full() {
        let config = Config::parse(concat!(
            "board-size = 12\n",
            "initial-speed = 300\n",
            "speed-step = 10\n",
            "min-speed = 80\n",
            "food-reward = 5\n",
            "pacing = \"fixed\"\n",
            "frame-rate = 30\n",
            "emoji = false\n",
            "log-file = \"/tmp/tuisnake.log\"\n",
            "log-level = \"debug\"\n",
        ))
        .unwrap();
        assert_eq!(
            config,
            Config {
                board_size: 12,
                initial_speed: 300,
                speed_step: 10,
                min_speed: 80,
                food_reward: 5,
                pacing: Pacing::Fixed,
                frame_rate: 30,
                emoji: false,
                log_file: Some(PathBuf::from("/tmp/tuisnake.log")),
                log_level: LevelFilter::Debug,
            }
        );
        assert_eq!(
            config.rules(),
            Rules {
                board_size: 12,
                initial_speed: Duration::from_millis(300),
                speed_step: Duration::from_millis(10),
                min_speed: Duration::from_millis(80),
                food_reward: 5,
            }
        );
    }

    #[test]
    fn expand_log_file() {
        let config = Config::parse("log-file = \"~/snake.log\"\n").unwrap();
        let home = dirs::home_dir().unwrap();
        assert_eq!(config.log_file, Some(home.join("snake.log")));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn expand_other_users_log_file() {
        let config = Config::parse("log-file = \"~root/snake.log\"\n").unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/root/snake.log")));
    }

    #[test]
    fn plain_log_file_untouched() {
        let config = Config::parse("log-file = \"logs/snake~1.log\"\n").unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("logs/snake~1.log")));
    }

    #[rstest]
    #[case("board-size = 1\n", "board-size")]
    #[case("board-size = 23\n", "board-size")]
    #[case("frame-rate = 0\n", "frame-rate")]
    #[case("frame-rate = 500\n", "frame-rate")]
    #[case("min-speed = 0\n", "min-speed")]
    #[case("initial-speed = 40\n", "initial-speed")]
    fn out_of_range(#[case] src: &str, #[case] bad_key: &str) {
        match Config::parse(src) {
            Err(ConfigError::Invalid { key, .. }) => assert_eq!(key, bad_key),
            r => panic!("expected Invalid error, got {r:?}"),
        }
    }

    #[rstest]
    #[case("board_size = 10\n")]
    #[case("pacing = \"jerky\"\n")]
    #[case("emoji = \"yes\"\n")]
    fn unparseable(#[case] src: &str) {
        assert!(matches!(Config::parse(src), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board-size = 10").unwrap();
        writeln!(file, "pacing = \"fixed\"").unwrap();
        file.flush().unwrap();
        let config = Config::load(file.path(), false).unwrap();
        assert_eq!(config.board_size, 10);
        assert_eq!(config.pacing, Pacing::Fixed);
        assert!(config.emoji);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }
}
