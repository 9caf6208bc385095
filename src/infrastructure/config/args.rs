use std::path::PathBuf;

use clap::Parser;

use super::app_config::LogLevel;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "emotedex",
    version,
    about = "Resolves textual emote tokens to renderable images from a local emote pack",
    long_about = None
)]
pub struct CliArgs {
    /// Text to scan for `:emote:` tokens; reads stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emote pack directory (holds emotes.json and the frame images).
    #[arg(short, long, value_name = "DIR", env = "EMOTEDEX_PACK_DIR")]
    pub pack_dir: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Maximum number of still images kept in memory.
    #[arg(long, value_name = "N")]
    pub image_cache_size: Option<usize>,

    /// Maximum number of animation sequences kept in memory.
    #[arg(long, value_name = "N")]
    pub animation_cache_size: Option<usize>,
}
