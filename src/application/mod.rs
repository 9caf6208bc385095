//! Application layer with resolution and text-scanning services.

/// Service implementations.
pub mod services;

pub use services::{EmoteResolver, TokenExtractor};
