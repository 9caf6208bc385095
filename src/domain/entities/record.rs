//! Emote metadata records.

use serde::{Deserialize, Serialize};

/// One metadata row describing a single frame of an emote.
///
/// Non-animated emotes have exactly one record. Animated emotes have one
/// record per frame, all sharing the same name, ordered by `frame_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoteRecord {
    /// Emote name this frame belongs to.
    pub name: String,
    /// Whether the emote is flagged as animated.
    #[serde(default)]
    pub animated: bool,
    /// Display duration of this frame in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u32,
    /// Position of this frame within the animation, ascending from zero.
    #[serde(default)]
    pub frame_index: u32,
}

const fn default_delay_ms() -> u32 {
    100
}

impl EmoteRecord {
    /// Creates a record for a non-animated single-frame emote.
    #[must_use]
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            animated: false,
            delay_ms: default_delay_ms(),
            frame_index: 0,
        }
    }

    /// Creates one frame record of an animated emote.
    #[must_use]
    pub fn frame(name: impl Into<String>, frame_index: u32, delay_ms: u32) -> Self {
        Self {
            name: name.into(),
            animated: true,
            delay_ms,
            frame_index,
        }
    }
}
