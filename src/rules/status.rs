//! Puzzle status.

use serde::{Deserialize, Serialize};

/// Where a puzzle attempt stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Still playable.
    #[default]
    InProgress,
    /// Current value equals the target.
    Won,
    /// Additive only: past the target with no negative card left.
    LostOvershoot,
    /// Hand is empty and the target was not reached.
    LostExhausted,
}

impl Status {
    /// Is the attempt over (until an undo revives it)?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }

    #[must_use]
    pub fn is_won(self) -> bool {
        matches!(self, Status::Won)
    }

    #[must_use]
    pub fn is_lost(self) -> bool {
        matches!(self, Status::LostOvershoot | Status::LostExhausted)
    }

    /// Stable snake_case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Status::InProgress => "in_progress",
            Status::Won => "won",
            Status::LostOvershoot => "lost_overshoot",
            Status::LostExhausted => "lost_exhausted",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
