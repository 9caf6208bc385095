//! Emote token extraction from rich text.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::EmoteToken;

/// Scans rich text for `:name:` emote tokens.
pub struct TokenExtractor;

impl TokenExtractor {
    /// Returns the tokens embedded in `content`, deduplicated, in first
    /// appearance order.
    #[must_use]
    pub fn extract_tokens(content: &str) -> Vec<EmoteToken> {
        static TOKEN_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r":([A-Za-z0-9][A-Za-z0-9_]{0,63}):").unwrap());

        if !content.contains(':') {
            return Vec::new();
        }

        let mut tokens: Vec<EmoteToken> = Vec::new();

        for cap in TOKEN_RE.captures_iter(content) {
            if let Some(name) = cap.get(1) {
                let token = EmoteToken::from(name.as_str());
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
            }
        }

        tokens
    }
}
