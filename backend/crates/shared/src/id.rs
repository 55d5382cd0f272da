//! Common ID Types
//!
//! Type-safe wrappers around the `bigserial` primary keys of the domain
//! tables.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Serialize, Serializer};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
///
/// let id = UserId::new(7);
/// assert_eq!(id.value(), 7);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a raw database id
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying integer
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Parse an id taken from a URL path segment
    ///
    /// Only plain decimal integers >= 1 are accepted; anything else yields
    /// `None` so the caller can answer 404.
    ///
    /// ```
    /// use kernel::id::LotId;
    ///
    /// assert_eq!(LotId::parse_path("42").map(|id| id.value()), Some(42));
    /// assert!(LotId::parse_path("0").is_none());
    /// assert!(LotId::parse_path("abc").is_none());
    /// ```
    pub fn parse_path(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match raw.parse::<i64>() {
            Ok(value) if value >= 1 => Some(Self::new(value)),
            _ => None,
        }
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct User;
    pub struct Lot;
    pub struct Bid;
}

pub type UserId = Id<markers::User>;
pub type LotId = Id<markers::Lot>;
pub type BidId = Id<markers::Bid>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_accepts_positive_integers() {
        assert_eq!(UserId::parse_path("1"), Some(UserId::new(1)));
        assert_eq!(LotId::parse_path("9001"), Some(LotId::new(9001)));
    }

    #[test]
    fn test_parse_path_rejects_invalid() {
        for raw in ["", "0", "-1", "+3", "1.5", "abc", " 4", "99999999999999999999"] {
            assert!(BidId::parse_path(raw).is_none(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&LotId::new(12)).unwrap();
        assert_eq!(json, "12");
    }

    #[test]
    fn test_id_conversions() {
        let id: UserId = 5_i64.into();
        let raw: i64 = id.into();
        assert_eq!(raw, 5);
        assert_eq!(id.to_string(), "5");
    }
}
