//! Emote token resolution.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{
    AnimationSequence, Bounds, EmoteCache, EmoteRecord, EmoteToken, ResolvedEmote,
};
use crate::domain::errors::ResolveError;
use crate::domain::ports::{AssetSourcePort, EmoteLoaderPort, EmoteStorePort};

/// Resolves emote tokens to renderable images.
///
/// The resolver consults the cache tiers first, then the metadata store,
/// loading frames through the injected [`EmoteLoaderPort`] on a miss.
/// Resolution is synchronous and runs on the calling thread; a shared
/// resolver may be used from any number of threads.
///
/// No failure crosses this boundary: every miss, decode error, or resource
/// exhaustion surfaces as `None`. Permanent failures (missing metadata,
/// missing asset, undecodable asset) are memoized in the blacklist so
/// repeated lookups short-circuit; transient exhaustion is not, so the next
/// call retries full resolution.
pub struct EmoteResolver {
    cache: Arc<EmoteCache>,
    store: Arc<dyn EmoteStorePort>,
    assets: Arc<dyn AssetSourcePort>,
    loader: Arc<dyn EmoteLoaderPort>,
}

impl EmoteResolver {
    /// Creates a resolver over an explicitly constructed cache and the three
    /// injected collaborator ports.
    #[must_use]
    pub fn new(
        cache: Arc<EmoteCache>,
        store: Arc<dyn EmoteStorePort>,
        assets: Arc<dyn AssetSourcePort>,
        loader: Arc<dyn EmoteLoaderPort>,
    ) -> Self {
        Self {
            cache,
            store,
            assets,
            loader,
        }
    }

    /// Resolves a token to a renderable emote, or `None` if the token has no
    /// usable asset.
    ///
    /// Static results share the cached image across callers; animated results
    /// carry a freshly minted playback handle per call.
    #[must_use]
    pub fn resolve(&self, token: &EmoteToken) -> Option<ResolvedEmote> {
        if self.cache.is_blacklisted(token) {
            return None;
        }

        if let Some(image) = self.cache.get_image(token) {
            let bounds = Bounds::of_image(&image);
            return Some(ResolvedEmote::Static { image, bounds });
        }

        if let Some(sequence) = self.cache.get_animation(token) {
            return match Self::mint_animation(&sequence) {
                Ok(resolved) => Some(resolved),
                // Transient: not blacklisted, the next call retries.
                Err(err) => {
                    debug!(token = %token, error = %err, "animation handle mint failed");
                    None
                }
            };
        }

        let mut records = match self.store.records(token.as_str()) {
            Ok(records) => records,
            Err(err) => {
                warn!(token = %token, error = %err, "metadata query failed");
                self.cache.blacklist(token.clone());
                return None;
            }
        };

        if records.is_empty() {
            debug!(token = %token, "no metadata records");
            self.cache.blacklist(token.clone());
            return None;
        }

        records.sort_by_key(|record| record.frame_index);

        // A single record is always a still image, even when flagged
        // animated; animation requires at least two frames.
        let loaded = if records.len() > 1 && records[0].animated {
            self.load_animated(token, &records)
        } else {
            self.load_static(token, &records[0])
        };

        match loaded {
            Ok(resolved) => Some(resolved),
            Err(err) => {
                warn!(token = %token, error = %err, "failed to load emote");
                self.cache.blacklist(token.clone());
                None
            }
        }
    }

    fn load_static(
        &self,
        token: &EmoteToken,
        record: &EmoteRecord,
    ) -> Result<ResolvedEmote, ResolveError> {
        let mut reader = self.assets.open(&record.name, record.frame_index)?;
        let image = Arc::new(self.loader.load_reader(reader.as_mut())?);
        let bounds = Bounds::of_image(&image);
        self.cache.put_image(token.clone(), image.clone());
        Ok(ResolvedEmote::Static { image, bounds })
    }

    fn load_animated(
        &self,
        token: &EmoteToken,
        records: &[EmoteRecord],
    ) -> Result<ResolvedEmote, ResolveError> {
        let mut sequence = AnimationSequence::new();

        for record in records {
            let mut reader = self.assets.open(&record.name, record.frame_index)?;
            match self.loader.load_reader(reader.as_mut()) {
                Ok(image) => sequence.push_frame(Arc::new(image), record.delay_ms),
                Err(err @ ResolveError::ResourceExhausted { .. }) => return Err(err),
                // A frame that fails to decode is dropped from the sequence.
                Err(err) => {
                    debug!(token = %token, frame = record.frame_index, error = %err, "skipping frame");
                }
            }
        }

        if sequence.is_empty() {
            return Err(ResolveError::decode(token.as_str(), "no frame decoded"));
        }

        let sequence = Arc::new(sequence);
        let resolved = Self::mint_animation(&sequence)?;
        self.cache.put_animation(token.clone(), sequence);
        Ok(resolved)
    }

    fn mint_animation(sequence: &AnimationSequence) -> Result<ResolvedEmote, ResolveError> {
        let animation = sequence.new_animation()?;
        let bounds = sequence
            .frames()
            .first()
            .map_or(Bounds { width: 0, height: 0 }, |frame| {
                Bounds::of_image(frame.image())
            });
        Ok(ResolvedEmote::Animated { animation, bounds })
    }
}

impl std::fmt::Debug for EmoteResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmoteResolver")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
