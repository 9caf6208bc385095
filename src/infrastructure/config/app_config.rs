//! Application configuration.

use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{IMAGE_CACHE_SIZE, SEQUENCE_CACHE_SIZE};

use super::args::CliArgs;

const APP_NAME: &str = "emotedex";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Name of the metadata index file inside the pack directory.
pub const INDEX_FILE: &str = "emotes.json";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Optional settings read from the TOML configuration file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    /// Emote pack directory.
    #[serde(default)]
    pub pack_dir: Option<PathBuf>,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: Option<LogLevel>,

    /// Maximum number of still images kept in memory.
    #[serde(default)]
    pub image_cache_size: Option<usize>,

    /// Maximum number of animation sequences kept in memory.
    #[serde(default)]
    pub animation_cache_size: Option<usize>,
}

/// Resolved application configuration.
///
/// Precedence: CLI arguments over configuration file over defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Emote pack directory.
    pub pack_dir: PathBuf,
    /// Log file path; no file logging when absent.
    pub log_path: Option<PathBuf>,
    /// Log verbosity level.
    pub log_level: LogLevel,
    /// Maximum number of still images kept in memory.
    pub image_cache_size: usize,
    /// Maximum number of animation sequences kept in memory.
    pub animation_cache_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pack_dir: default_pack_dir(),
            log_path: None,
            log_level: LogLevel::default(),
            image_cache_size: IMAGE_CACHE_SIZE,
            animation_cache_size: SEQUENCE_CACHE_SIZE,
        }
    }
}

impl AppConfig {
    /// Loads configuration, merging the TOML file (if any) with CLI overrides.
    ///
    /// # Errors
    /// Returns an error if an explicitly given configuration file cannot be
    /// read or parsed. The default-location file is tolerated when malformed.
    pub fn load(args: &CliArgs) -> Result<Self> {
        let file = if let Some(path) = &args.config {
            let content = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
            Some(
                toml::from_str(&content)
                    .wrap_err_with(|| format!("failed to parse config file {}", path.display()))?,
            )
        } else {
            default_config_path()
                .filter(|path| path.exists())
                .and_then(|path| {
                    let content = std::fs::read_to_string(&path).ok()?;
                    match toml::from_str(&content) {
                        Ok(file) => Some(file),
                        Err(err) => {
                            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed config file");
                            None
                        }
                    }
                })
        };

        Ok(Self::from_sources(args, file))
    }

    /// Merges CLI arguments over file settings over defaults.
    #[must_use]
    pub fn from_sources(args: &CliArgs, file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            pack_dir: args
                .pack_dir
                .clone()
                .or(file.pack_dir)
                .unwrap_or(defaults.pack_dir),
            log_path: args.log_path.clone().or(file.log_path),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
            image_cache_size: args
                .image_cache_size
                .or(file.image_cache_size)
                .unwrap_or(defaults.image_cache_size),
            animation_cache_size: args
                .animation_cache_size
                .or(file.animation_cache_size)
                .unwrap_or(defaults.animation_cache_size),
        }
    }

    /// Returns the path of the metadata index inside the pack directory.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.pack_dir.join(INDEX_FILE)
    }
}

fn default_pack_dir() -> PathBuf {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME).map_or_else(
        || PathBuf::from("."),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once(&"emotedex").chain(argv))
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = AppConfig::from_sources(&args(&[]), None);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.image_cache_size, IMAGE_CACHE_SIZE);
        assert_eq!(config.animation_cache_size, SEQUENCE_CACHE_SIZE);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            pack_dir = "/packs/berry"
            log_level = "debug"
            image_cache_size = 5
            "#,
        )
        .unwrap();

        let config = AppConfig::from_sources(&args(&[]), Some(file));
        assert_eq!(config.pack_dir, PathBuf::from("/packs/berry"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.image_cache_size, 5);
        // Untouched fields keep their defaults.
        assert_eq!(config.animation_cache_size, SEQUENCE_CACHE_SIZE);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file: FileConfig = toml::from_str(r#"pack_dir = "/packs/berry""#).unwrap();
        let config = AppConfig::from_sources(
            &args(&["--pack-dir", "/packs/other", "--log-level", "warn"]),
            Some(file),
        );
        assert_eq!(config.pack_dir, PathBuf::from("/packs/other"));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_index_path() {
        let config = AppConfig::from_sources(&args(&["--pack-dir", "/packs/berry"]), None);
        assert_eq!(config.index_path(), PathBuf::from("/packs/berry/emotes.json"));
    }
}
