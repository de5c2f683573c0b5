//! Player identity and the player record submitted for matchmaking.
//!
//! [`PlayerId`] is a newtype over the caller-supplied identity string so
//! that identities cannot be confused with other strings (roles, connection
//! ids) when they are used as registry keys.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caller-supplied player identity.
///
/// Unique per submission, not across time: the same identity may queue
/// again after its previous match was formed. Used as the lookup key in
/// [`super::ConnectionRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wraps a raw identity string.
    ///
    /// No validation happens here; the HTTP and WebSocket boundaries reject
    /// empty identities before they reach the domain.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identity is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A player waiting for, or assigned to, a match.
///
/// Immutable once submitted. Serialized field names (`id`, `rating`,
/// `role`) are part of the match payload pushed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Player {
    /// Player identity.
    pub id: PlayerId,
    /// Skill rating. Any sign or magnitude is accepted.
    pub rating: i64,
    /// Free-form role tag (position, class, ...).
    pub role: String,
}

impl Player {
    /// Creates a new player record.
    #[must_use]
    pub fn new(id: impl Into<PlayerId>, rating: i64, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rating,
            role: role.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn player_serializes_with_wire_field_names() {
        let player = Player::new("p1", 1500, "support");
        let Ok(json) = serde_json::to_value(&player) else {
            panic!("serialization failed");
        };
        assert_eq!(
            json,
            serde_json::json!({"id": "p1", "rating": 1500, "role": "support"})
        );
    }

    #[test]
    fn player_id_is_transparent_string() {
        let Ok(id) = serde_json::from_str::<PlayerId>("\"alice\"") else {
            panic!("deserialization failed");
        };
        assert_eq!(id.as_str(), "alice");
        assert_eq!(id.to_string(), "alice");
    }

    #[test]
    fn blank_detection() {
        assert!(PlayerId::new("").is_blank());
        assert!(PlayerId::new("  \t").is_blank());
        assert!(!PlayerId::new("p0").is_blank());
    }

    #[test]
    fn negative_and_zero_ratings_are_representable() {
        let a = Player::new("a", -25, "");
        let b = Player::new("b", 0, "");
        assert_eq!(a.rating, -25);
        assert_eq!(b.rating, 0);
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(PlayerId::new("p9"), 9);
        assert_eq!(map.get(&PlayerId::from("p9")), Some(&9));
    }
}
