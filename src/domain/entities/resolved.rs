//! Resolution results returned to rendering callers.

use std::sync::Arc;

use image::DynamicImage;

use super::frame::Animation;

/// Intrinsic display bounds of a resolved emote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
}

impl Bounds {
    /// Bounds matching an image's intrinsic dimensions.
    #[must_use]
    pub fn of_image(image: &DynamicImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A renderable emote produced by the resolver.
///
/// Static emotes share the cached image across callers (read-only contract);
/// animated emotes carry a freshly minted [`Animation`] handle per call.
#[derive(Debug)]
pub enum ResolvedEmote {
    /// Single still image.
    Static {
        /// The decoded image, shared with the cache.
        image: Arc<DynamicImage>,
        /// Intrinsic display bounds.
        bounds: Bounds,
    },
    /// Looping multi-frame animation.
    Animated {
        /// Caller-owned playback handle.
        animation: Animation,
        /// Intrinsic display bounds (first frame).
        bounds: Bounds,
    },
}

impl ResolvedEmote {
    /// Returns the intrinsic display bounds.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        match self {
            Self::Static { bounds, .. } | Self::Animated { bounds, .. } => *bounds,
        }
    }

    /// Returns true for animated results.
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        matches!(self, Self::Animated { .. })
    }
}
