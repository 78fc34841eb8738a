//! Rules trait for engine variants.
//!
//! A variant defines:
//! - The value type the puzzle runs on
//! - How a card face combines with that value
//! - Whether a position is an unrecoverable overshoot
//! - What advice to give while the attempt continues
//!
//! Rules are stateless: every method is an associated function, and the
//! implementing types are zero-sized markers.

use std::fmt::{Debug, Display};

use im::Vector;
use serde::Serialize;

use super::feedback::Feedback;
use super::status::Status;
use crate::cards::{Card, Face};

/// Arithmetic rules of one engine variant.
///
/// ## Implementation Notes
///
/// - `combine`: Must be pure; `current` is recomputed from history with it
/// - `is_overshoot`: Return false for variants with no overshoot concept
/// - `advise`: Only called for positions that stay in progress
pub trait Rules: Clone + Debug + 'static {
    /// Numeric value a puzzle runs on.
    type Value: Clone + Debug + Display + PartialEq + Serialize;

    /// Card face for this variant.
    type Face: Face + Serialize;

    /// Human-readable variant name (for logs).
    const NAME: &'static str;

    /// Apply one card to a value.
    fn combine(value: &Self::Value, face: &Self::Face) -> Self::Value;

    /// Is `current` past `target` with no way back using `hand`?
    fn is_overshoot(
        _current: &Self::Value,
        _target: &Self::Value,
        _hand: &Vector<Card<Self::Face>>,
    ) -> bool {
        false
    }

    /// Advice for a position that is still in progress.
    fn advise(
        current: &Self::Value,
        target: &Self::Value,
        hand: &Vector<Card<Self::Face>>,
    ) -> Feedback<Self::Value>;

    // === Convenience Methods ===

    /// Fold a sequence of cards into `start`.
    fn fold<'a, I>(start: &Self::Value, cards: I) -> Self::Value
    where
        I: IntoIterator<Item = &'a Card<Self::Face>>,
        Self::Face: 'a,
    {
        cards
            .into_iter()
            .fold(start.clone(), |value, card| Self::combine(&value, card.face()))
    }

    /// Status after a card was played, in priority order:
    /// exact hit, overshoot, empty hand, otherwise still in progress.
    fn evaluate(
        current: &Self::Value,
        target: &Self::Value,
        hand: &Vector<Card<Self::Face>>,
    ) -> Status {
        if current == target {
            Status::Won
        } else if Self::is_overshoot(current, target, hand) {
            Status::LostOvershoot
        } else if hand.is_empty() {
            Status::LostExhausted
        } else {
            Status::InProgress
        }
    }
}
