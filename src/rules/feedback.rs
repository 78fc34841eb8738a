//! Player-facing feedback for the last puzzle event.
//!
//! Feedback is advisory only: it is computed after a transition and never
//! feeds back into one.

use std::fmt::Display;

use serde::Serialize;

/// Message describing what just happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feedback<V> {
    /// A fresh level was dealt.
    LevelStarted { level: u32, title: String },
    /// Nothing notable; keep going.
    Calculating,
    /// Past the target, but a negative card can still pull it back.
    Overshoot { excess: V },
    /// Magnitude is below the target's.
    ScaleUp,
    /// Magnitude is above the target's.
    ScaleDown,
    /// Current value and target have opposite signs.
    WrongSign,
    /// The last card went back to the hand.
    Undone,
    Won,
    Busted,
    OutOfCards,
}

impl<V> Feedback<V> {
    /// Short verdict shown next to the solution once an attempt ends.
    #[must_use]
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            Feedback::Won => Some("Perfect balance!"),
            Feedback::Busted => Some("Over the target with no way back."),
            Feedback::OutOfCards => Some("Resources exhausted."),
            _ => None,
        }
    }
}

impl<V: Display> Display for Feedback<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feedback::LevelStarted { level, title } => write!(f, "Level {}: {}", level, title),
            Feedback::Calculating => f.write_str("Calculating..."),
            Feedback::Overshoot { excess } => {
                write!(f, "Over by {}! Use a negative card to correct it.", excess)
            }
            Feedback::ScaleUp => f.write_str("Too small: scale up."),
            Feedback::ScaleDown => f.write_str("Too big: scale down."),
            Feedback::WrongSign => f.write_str("Wrong sign: flip it with a negative card."),
            Feedback::Undone => f.write_str("Undid the last move."),
            Feedback::Won => f.write_str("Challenge complete!"),
            Feedback::Busted => f.write_str("Busted!"),
            Feedback::OutOfCards => f.write_str("Out of cards!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let started: Feedback<i64> = Feedback::LevelStarted { level: 3, title: "Mixed".into() };
        assert_eq!(started.to_string(), "Level 3: Mixed");

        let over = Feedback::Overshoot { excess: 2 };
        assert_eq!(over.to_string(), "Over by 2! Use a negative card to correct it.");
    }

    #[test]
    fn test_headlines_only_for_endings() {
        assert_eq!(Feedback::<i64>::Won.headline(), Some("Perfect balance!"));
        assert_eq!(Feedback::<i64>::OutOfCards.headline(), Some("Resources exhausted."));
        assert_eq!(Feedback::<i64>::Calculating.headline(), None);
        assert_eq!(Feedback::<i64>::Undone.headline(), None);
    }

    #[test]
    fn test_serialization_is_tagged() {
        let json = serde_json::to_string(&Feedback::Overshoot { excess: 5i64 }).unwrap();
        assert_eq!(json, r#"{"kind":"overshoot","excess":5}"#);
    }
}
