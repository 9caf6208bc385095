//! Metadata store port definition.

use crate::domain::entities::EmoteRecord;
use crate::domain::errors::ResolveError;

/// Port for the read-only emote metadata store.
///
/// Queries are synchronous and may block on I/O. Implementations must be
/// thread-safe.
pub trait EmoteStorePort: Send + Sync {
    /// Returns all records whose name equals `name`, ordered by frame index
    /// ascending. An unknown name yields an empty vector, not an error.
    fn records(&self, name: &str) -> Result<Vec<EmoteRecord>, ResolveError>;
}
