//! Emote token type.

/// Short textual identifier for an emote (`smile` in `:smile:`).
///
/// Used both as the lookup key into the metadata store and as the key for
/// every cache tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmoteToken(String);

impl EmoteToken {
    /// Creates a new `EmoteToken` from any string-like input.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the inner name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmoteToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EmoteToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EmoteToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for EmoteToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
