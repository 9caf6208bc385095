//! Backing asset source port definition.

use std::io::Read;

use crate::domain::errors::ResolveError;

/// Port for resolving one frame's backing file to a readable handle.
///
/// A missing file is [`ResolveError::NotFound`]; it is a distinct failure
/// from a decode error but the resolver treats both as a missing asset.
pub trait AssetSourcePort: Send + Sync {
    /// Opens the backing file for frame `frame_index` of emote `name`.
    fn open(&self, name: &str, frame_index: u32) -> Result<Box<dyn Read + Send>, ResolveError>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::io::Cursor;

    use parking_lot::Mutex;

    use super::*;

    /// Mock asset source serving in-memory byte blobs.
    pub struct MockAssetSource {
        assets: Mutex<HashMap<(String, u32), Vec<u8>>>,
    }

    impl MockAssetSource {
        /// Creates an empty mock source.
        pub fn new() -> Self {
            Self {
                assets: Mutex::new(HashMap::new()),
            }
        }

        /// Registers the bytes backing one frame.
        pub fn insert(&self, name: &str, frame_index: u32, bytes: Vec<u8>) {
            self.assets.lock().insert((name.to_owned(), frame_index), bytes);
        }
    }

    impl Default for MockAssetSource {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AssetSourcePort for MockAssetSource {
        fn open(&self, name: &str, frame_index: u32) -> Result<Box<dyn Read + Send>, ResolveError> {
            self.assets
                .lock()
                .get(&(name.to_owned(), frame_index))
                .cloned()
                .map(|bytes| Box::new(Cursor::new(bytes)) as Box<dyn Read + Send>)
                .ok_or_else(|| ResolveError::not_found(name))
        }
    }
}
