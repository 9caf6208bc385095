//! Directory-backed emote asset source.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use tracing::trace;

use crate::domain::errors::ResolveError;
use crate::domain::ports::AssetSourcePort;

/// Resolves frame assets to files under a pack directory.
///
/// Frame `n` of emote `name` lives at `<root>/<name>-<n>.png`; a
/// non-animated emote may also be stored as plain `<root>/<name>.png`.
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    /// Creates an asset source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the pack directory.
    #[must_use]
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn candidates(&self, name: &str, frame_index: u32) -> Vec<PathBuf> {
        let mut paths = vec![self.root.join(format!("{name}-{frame_index}.png"))];
        if frame_index == 0 {
            paths.push(self.root.join(format!("{name}.png")));
        }
        paths
    }
}

impl AssetSourcePort for DirAssetSource {
    fn open(&self, name: &str, frame_index: u32) -> Result<Box<dyn Read + Send>, ResolveError> {
        // Names come straight out of user-visible text; never let one climb
        // out of the pack directory.
        if name.contains(['/', '\\']) || name.contains("..") {
            return Err(ResolveError::not_found(name));
        }

        for path in self.candidates(name, frame_index) {
            if let Ok(file) = File::open(&path) {
                trace!(path = %path.display(), "opened emote asset");
                return Ok(Box::new(file));
            }
        }
        Err(ResolveError::not_found(name))
    }
}
