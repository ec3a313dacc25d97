//! ID types for the fantasy market.

use crate::error::{MarketError, Result};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player IDs.
///
/// The game API is inconsistent about whether IDs are sent as JSON strings or
/// numbers, so both are accepted on input. IDs are always serialized back as
/// strings.
///
/// # Examples
///
/// ```rust
/// use fantasy_market::PlayerId;
///
/// let id = PlayerId::new("4821");
/// assert_eq!(id.as_str(), "4821");
/// assert_eq!(id.to_string(), "4821");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MarketError::InvalidPlayerId { id: s.to_string() });
        }
        Ok(Self(trimmed.to_string()))
    }
}

struct PlayerIdVisitor;

impl de::Visitor<'_> for PlayerIdVisitor {
    type Value = PlayerId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a player id as string or integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<PlayerId, E> {
        Ok(PlayerId(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<PlayerId, E> {
        Ok(PlayerId(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<PlayerId, E> {
        Ok(PlayerId(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(PlayerIdVisitor)
    }
}
