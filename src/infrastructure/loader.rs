//! Stock emote loader backed by the `image` crate.

use std::io::Read;
use std::path::Path;

use image::DynamicImage;

use crate::domain::errors::ResolveError;
use crate::domain::ports::EmoteLoaderPort;

/// Loads emote files as-is, delegating all decoding to the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEmoteLoader;

impl BasicEmoteLoader {
    /// Creates a new loader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn decode(bytes: &[u8], context: &str) -> Result<DynamicImage, ResolveError> {
        image::load_from_memory(bytes).map_err(|err| match err {
            image::ImageError::Limits(limit) => {
                tracing::debug!(context, error = %limit, "decode hit resource limits");
                ResolveError::exhausted(context)
            }
            other => ResolveError::decode(context, other.to_string()),
        })
    }
}

impl EmoteLoaderPort for BasicEmoteLoader {
    fn load_path(&self, path: &Path) -> Result<DynamicImage, ResolveError> {
        let context = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ResolveError::not_found(&context)
            } else {
                ResolveError::decode(&context, err.to_string())
            }
        })?;
        Self::decode(&bytes, &context)
    }

    fn load_reader(&self, reader: &mut dyn Read) -> Result<DynamicImage, ResolveError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|err| ResolveError::decode("stream", err.to_string()))?;
        Self::decode(&bytes, "stream")
    }
}
