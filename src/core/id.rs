//! Card identity.
//!
//! Every generated card gets a `CardId` from an injected `IdSource`. Ids
//! exist for the presentation layer (stable widget keys across re-renders)
//! and for conservation checks; gameplay never looks at them.
//!
//! ## Usage
//!
//! ```
//! use card_arith::core::{CardId, IdSource, SequentialIds};
//!
//! let mut ids = SequentialIds::new();
//! assert_eq!(ids.next_id(), CardId(1));
//! assert_eq!(ids.next_id(), CardId(2));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Opaque identifier of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Source of fresh card identifiers.
///
/// Implementations must never hand out the same id twice. A source whose id
/// space is used up must stop rather than reuse an id.
pub trait IdSource {
    /// Allocate the next unused id.
    fn next_id(&mut self) -> CardId;
}

/// Monotonic counter starting at 1.
#[derive(Clone, Debug)]
pub struct SequentialIds {
    /// `None` once `u32::MAX` has been issued.
    next: Option<u32>,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialIds {
    /// Create a counter whose first id is `CardId(1)`.
    #[must_use]
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Create a counter whose first id is `first`.
    #[must_use]
    pub fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }
}

impl IdSource for SequentialIds {
    /// # Panics
    ///
    /// Panics once every id up to `u32::MAX` has been issued.
    fn next_id(&mut self) -> CardId {
        let raw = self
            .next
            .unwrap_or_else(|| panic!("sequential card ids exhausted after {}", u32::MAX));
        self.next = raw.checked_add(1);
        CardId(raw)
    }
}

/// Random five-digit ids, re-drawn on collision.
///
/// Matches the look of hand-typed card numbers while staying unique within
/// one source. Once every five-digit id is taken it continues above the range.
#[derive(Clone, Debug)]
pub struct RandomIds {
    rng: GameRng,
    issued: FxHashSet<u32>,
    overflow: u32,
}

impl RandomIds {
    /// Smallest id handed out.
    pub const MIN: u32 = 10_000;
    /// Largest id handed out while the range has room.
    pub const MAX: u32 = 99_999;

    /// Create a source drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            issued: FxHashSet::default(),
            overflow: Self::MAX,
        }
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn issued(&self) -> usize {
        self.issued.len()
    }
}

impl IdSource for RandomIds {
    fn next_id(&mut self) -> CardId {
        let capacity = (Self::MAX - Self::MIN + 1) as usize;
        if self.issued.len() >= capacity {
            self.overflow = self
                .overflow
                .checked_add(1)
                .unwrap_or_else(|| panic!("random card ids exhausted"));
            self.issued.insert(self.overflow);
            return CardId(self.overflow);
        }

        loop {
            let candidate = self.rng.gen_range_u32(Self::MIN..=Self::MAX);
            if self.issued.insert(candidate) {
                return CardId(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new();

        assert_eq!(ids.next_id(), CardId(1));
        assert_eq!(ids.next_id(), CardId(2));
        assert_eq!(ids.next_id(), CardId(3));
    }

    #[test]
    fn test_sequential_ids_starting_at() {
        let mut ids = SequentialIds::starting_at(100);

        assert_eq!(ids.next_id().raw(), 100);
        assert_eq!(ids.next_id().raw(), 101);
    }

    #[test]
    fn test_sequential_ids_issue_max_once() {
        let mut ids = SequentialIds::starting_at(u32::MAX - 1);

        assert_eq!(ids.next_id().raw(), u32::MAX - 1);
        assert_eq!(ids.next_id().raw(), u32::MAX);
    }

    #[test]
    #[should_panic(expected = "sequential card ids exhausted")]
    fn test_sequential_ids_never_wrap() {
        let mut ids = SequentialIds::starting_at(u32::MAX);
        ids.next_id();
        ids.next_id();
    }

    #[test]
    fn test_random_ids_unique_and_in_range() {
        let mut ids = RandomIds::new(GameRng::new(42));
        let mut seen = FxHashSet::default();

        for _ in 0..2_000 {
            let id = ids.next_id().raw();
            assert!((RandomIds::MIN..=RandomIds::MAX).contains(&id));
            assert!(seen.insert(id), "duplicate id {}", id);
        }
        assert_eq!(ids.issued(), 2_000);
    }

    #[test]
    fn test_random_ids_deterministic() {
        let mut a = RandomIds::new(GameRng::new(9));
        let mut b = RandomIds::new(GameRng::new(9));

        for _ in 0..20 {
            assert_eq!(a.next_id(), b.next_id());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
