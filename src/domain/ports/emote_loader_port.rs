//! Image loader port definition.

use std::io::Read;
use std::path::Path;

use image::DynamicImage;

use crate::domain::errors::ResolveError;

/// Port for decoding raw emote bytes into displayable images.
///
/// Implementations never panic on malformed input: a decode failure is
/// [`ResolveError::DecodeFailed`], an allocation failure
/// [`ResolveError::ResourceExhausted`].
pub trait EmoteLoaderPort: Send + Sync {
    /// Decodes the image file at `path`.
    fn load_path(&self, path: &Path) -> Result<DynamicImage, ResolveError>;

    /// Decodes an image from an open readable handle.
    fn load_reader(&self, reader: &mut dyn Read) -> Result<DynamicImage, ResolveError>;
}
