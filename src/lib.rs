//! Emotedex - local emote pack resolution.
//!
//! This crate resolves textual emote tokens (`:smile:`) embedded in rich text
//! to renderable images sourced from an emote pack on disk, with LRU caching,
//! negative-result memoization and multi-frame (animated) emote support.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the resolver and text-scanning services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for on-disk emote packs.
pub mod infrastructure;

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "emotedex";
