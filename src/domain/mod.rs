//! Domain layer with core emote entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{
    Animation, AnimationSequence, Bounds, EmoteCache, EmoteRecord, EmoteToken, Frame,
    ResolvedEmote,
};
pub use errors::ResolveError;
pub use ports::{AssetSourcePort, EmoteLoaderPort, EmoteStorePort};
