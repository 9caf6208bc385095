//! Infrastructure layer with on-disk emote pack adapters.

/// Directory-backed asset source.
pub mod assets;
/// Application configuration.
pub mod config;
/// Stock image loader.
pub mod loader;
/// JSON-index-backed metadata store.
pub mod store;

pub use assets::DirAssetSource;
pub use config::{AppConfig, CliArgs, LogLevel};
pub use loader::BasicEmoteLoader;
pub use store::JsonEmoteStore;
