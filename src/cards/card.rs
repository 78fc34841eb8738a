//! The card entity shared by both engines.
//!
//! A `Card<F>` pairs an identity with an immutable face. The face decides
//! what the card does (add a fraction, multiply or divide by a factor); the
//! id only tells cards apart.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// What is printed on a card.
pub trait Face: Clone + Debug + Display + PartialEq + Eq + Hash {
    /// Does this card push the running value the "negative" way?
    fn is_negative(&self) -> bool;
}

/// One card in a hand or in the play history.
///
/// Fields are private: a card never changes after generation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card<F> {
    id: CardId,
    face: F,
}

impl<F: Face> Card<F> {
    /// Create a card.
    #[must_use]
    pub fn new(id: CardId, face: F) -> Self {
        Self { id, face }
    }

    /// The card's identity.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The card's face.
    #[must_use]
    pub fn face(&self) -> &F {
        &self.face
    }

    /// Shorthand for `face().is_negative()`.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.face.is_negative()
    }
}

impl<F: Face> Display for Card<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.face, f)
    }
}
