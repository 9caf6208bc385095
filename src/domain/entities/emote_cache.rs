//! In-memory emote cache tiers.

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use image::DynamicImage;
use lru::LruCache;
use parking_lot::Mutex;
use tracing::{debug, trace};

use super::frame::AnimationSequence;
use super::token::EmoteToken;

/// Default maximum number of still images to cache.
pub const IMAGE_CACHE_SIZE: usize = 50;

/// Default maximum number of animation sequences to cache.
///
/// Smaller than the image tier; a sequence holds every frame of an emote.
pub const SEQUENCE_CACHE_SIZE: usize = 10;

/// Two bounded LRU tiers (still images, animation sequences) plus an
/// unbounded negative-result set.
///
/// Explicitly constructed and shared as `Arc<EmoteCache>`; the crate never
/// keeps process-wide cache state. Each tier locks independently; the
/// blacklist serializes all membership checks and inserts under one mutex.
/// No operation spans more than one tier.
pub struct EmoteCache {
    images: Mutex<LruCache<EmoteToken, Arc<DynamicImage>>>,
    sequences: Mutex<LruCache<EmoteToken, Arc<AnimationSequence>>>,
    blacklist: Mutex<HashSet<EmoteToken>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl EmoteCache {
    /// Creates a cache with the given tier capacities.
    #[must_use]
    pub fn new(image_capacity: usize, sequence_capacity: usize) -> Self {
        let images = NonZeroUsize::new(image_capacity).unwrap_or(NonZeroUsize::MIN);
        let sequences = NonZeroUsize::new(sequence_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            images: Mutex::new(LruCache::new(images)),
            sequences: Mutex::new(LruCache::new(sequences)),
            blacklist: Mutex::new(HashSet::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Creates a cache with the default capacities.
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(IMAGE_CACHE_SIZE, SEQUENCE_CACHE_SIZE)
    }

    /// Gets a cached still image, promoting it in the LRU order.
    pub fn get_image(&self, token: &EmoteToken) -> Option<Arc<DynamicImage>> {
        let mut images = self.images.lock();
        if let Some(image) = images.get(token) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(token = %token, "image cache hit");
            Some(image.clone())
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    /// Stores a still image, evicting the least-recently-used entry when the
    /// tier is full.
    pub fn put_image(&self, token: EmoteToken, image: Arc<DynamicImage>) {
        debug!(token = %token, "caching still image");
        self.images.lock().put(token, image);
    }

    /// Gets a cached animation sequence, promoting it in the LRU order.
    pub fn get_animation(&self, token: &EmoteToken) -> Option<Arc<AnimationSequence>> {
        let mut sequences = self.sequences.lock();
        if let Some(sequence) = sequences.get(token) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(token = %token, "animation cache hit");
            Some(sequence.clone())
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    /// Stores an animation sequence, evicting the least-recently-used entry
    /// when the tier is full.
    pub fn put_animation(&self, token: EmoteToken, sequence: Arc<AnimationSequence>) {
        debug!(token = %token, frames = sequence.len(), "caching animation sequence");
        self.sequences.lock().put(token, sequence);
    }

    /// Returns true if the token is known to have no resolvable asset.
    pub fn is_blacklisted(&self, token: &EmoteToken) -> bool {
        self.blacklist.lock().contains(token)
    }

    /// Memoizes the token as unresolvable. Idempotent; entries live until the
    /// cache is dropped.
    pub fn blacklist(&self, token: EmoteToken) {
        let mut blacklist = self.blacklist.lock();
        if !blacklist.contains(&token) {
            trace!(token = %token, "token blacklisted");
            blacklist.insert(token);
        }
    }

    /// Returns the current number of cached still images.
    #[must_use]
    pub fn len_images(&self) -> usize {
        self.images.lock().len()
    }

    /// Returns the current number of cached animation sequences.
    #[must_use]
    pub fn len_animations(&self) -> usize {
        self.sequences.lock().len()
    }

    /// Returns the current number of blacklisted tokens.
    #[must_use]
    pub fn len_blacklist(&self) -> usize {
        self.blacklist.lock().len()
    }

    /// Returns cache statistics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            hit_rate,
            images: self.len_images(),
            animations: self.len_animations(),
            blacklisted: self.len_blacklist(),
        }
    }
}

impl Default for EmoteCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl std::fmt::Debug for EmoteCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmoteCache")
            .field("images", &self.len_images())
            .field("animations", &self.len_animations())
            .field("blacklisted", &self.len_blacklist())
            .finish()
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of cache hits across both tiers.
    pub hits: u64,
    /// Number of cache misses across both tiers.
    pub misses: u64,
    /// Hit rate as a percentage.
    pub hit_rate: f64,
    /// Current number of cached still images.
    pub images: usize,
    /// Current number of cached animation sequences.
    pub animations: usize,
    /// Current number of blacklisted tokens.
    pub blacklisted: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {} images, {} animations, {} blacklisted, {:.1}% hit rate ({} hits, {} misses)",
            self.images, self.animations, self.blacklisted, self.hit_rate, self.hits, self.misses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> Arc<DynamicImage> {
        Arc::new(DynamicImage::new_rgba8(10, 10))
    }

    #[test]
    fn test_cache_put_and_get() {
        let cache = EmoteCache::new(10, 10);
        let token = EmoteToken::from("smile");

        cache.put_image(token.clone(), test_image());
        let cached = cache.get_image(&token);

        assert!(cached.is_some());
        assert_eq!(cached.unwrap().width(), 10);
    }

    #[test]
    fn test_cache_miss() {
        let cache = EmoteCache::new(10, 10);
        assert!(cache.get_image(&EmoteToken::from("nonexistent")).is_none());
    }

    #[test]
    fn test_image_tier_eviction() {
        let cache = EmoteCache::new(2, 10);

        cache.put_image(EmoteToken::from("a"), test_image());
        cache.put_image(EmoteToken::from("b"), test_image());
        cache.put_image(EmoteToken::from("c"), test_image());

        // "a" is the least recently used entry.
        assert!(cache.get_image(&EmoteToken::from("a")).is_none());
        assert!(cache.get_image(&EmoteToken::from("b")).is_some());
        assert!(cache.get_image(&EmoteToken::from("c")).is_some());
        assert_eq!(cache.len_images(), 2);
    }

    #[test]
    fn test_animation_tier_eviction() {
        let cache = EmoteCache::new(10, 1);

        cache.put_animation(EmoteToken::from("a"), Arc::new(AnimationSequence::new()));
        cache.put_animation(EmoteToken::from("b"), Arc::new(AnimationSequence::new()));

        assert!(cache.get_animation(&EmoteToken::from("a")).is_none());
        assert!(cache.get_animation(&EmoteToken::from("b")).is_some());
        assert_eq!(cache.len_animations(), 1);
    }

    #[test]
    fn test_blacklist_idempotent() {
        let cache = EmoteCache::with_default_capacity();
        let token = EmoteToken::from("missing");

        assert!(!cache.is_blacklisted(&token));
        cache.blacklist(token.clone());
        cache.blacklist(token.clone());

        assert!(cache.is_blacklisted(&token));
        assert_eq!(cache.len_blacklist(), 1);
    }

    #[test]
    fn test_zero_capacity_clamps_to_one() {
        let cache = EmoteCache::new(0, 0);
        cache.put_image(EmoteToken::from("a"), test_image());
        assert_eq!(cache.len_images(), 1);
    }

    #[test]
    fn test_cache_stats() {
        let cache = EmoteCache::new(10, 10);
        let token = EmoteToken::from("smile");

        cache.put_image(token.clone(), test_image());
        let _ = cache.get_image(&token);
        let _ = cache.get_image(&EmoteToken::from("missing"));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.images, 1);
    }

    #[test]
    fn test_concurrent_puts_stay_within_bound() {
        use std::thread;

        let cache = Arc::new(EmoteCache::new(8, 4));
        let mut handles = Vec::new();

        for worker in 0..4 {
            let cache = cache.clone();
            handles.push(thread::spawn(move || {
                for i in 0..100 {
                    let token = EmoteToken::new(format!("emote-{worker}-{i}"));
                    cache.put_image(token.clone(), test_image());
                    let _ = cache.get_image(&token);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len_images() <= 8);
    }
}
