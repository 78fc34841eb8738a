//! Level generator trait and generated puzzle data.
//!
//! Generators build a puzzle forward: they draw the correct path first and
//! compute the target from it, so every generated puzzle is solvable by
//! construction. A generator may still reject an attempt (for example a
//! target that is not positive); `generate` retries a bounded number of
//! times and then accepts the last attempt.

use log::{debug, warn};
use serde::Serialize;
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{GameRng, IdSource};
use crate::error::Result;
use crate::rules::Rules;

/// Default bound on generation attempts for generators that reject puzzles.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Inline capacity for the correct path; the longest built-in path is 4.
pub type SolutionCards<F> = SmallVec<[Card<F>; 4]>;

/// Everything needed to start one puzzle attempt.
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct PuzzleData<R: Rules> {
    /// Requested level number.
    pub level: u32,
    /// Title of the level entry used.
    pub title: String,
    /// Starting value.
    pub start: R::Value,
    /// Value to reach.
    pub target: R::Value,
    /// Correct path plus distractors, shuffled.
    pub hand: Vec<Card<R::Face>>,
    /// Correct path in generation order.
    pub solution: SolutionCards<R::Face>,
    /// Attempts used (1-based).
    pub attempts: usize,
    /// True when no attempt was accepted and the last one was kept.
    pub fallback: bool,
    /// True when the level was past the end of the table.
    pub clamped: bool,
}

/// Builds puzzles for one engine variant.
///
/// ## Implementation Notes
///
/// - `generate_once`: One attempt; must be solvable by construction
/// - `accepts`: Reject attempts that are solvable but undesirable
/// - `max_attempts`: Only matters when `accepts` can return false
pub trait LevelGenerator {
    /// Rules the generated puzzles are played under.
    type Rules: Rules;

    /// Build one attempt for `level`.
    ///
    /// # Errors
    ///
    /// Returns an error only when the level lookup fails.
    fn generate_once(
        &self,
        level: u32,
        rng: &mut GameRng,
        ids: &mut dyn IdSource,
    ) -> Result<PuzzleData<Self::Rules>>;

    /// Is this attempt good enough to play?
    fn accepts(&self, _data: &PuzzleData<Self::Rules>) -> bool {
        true
    }

    /// Upper bound on attempts before falling back to the last one.
    fn max_attempts(&self) -> usize {
        MAX_GENERATION_ATTEMPTS
    }

    /// Build a puzzle for `level`, retrying rejected attempts.
    ///
    /// Never loops forever: after `max_attempts` rejections the last attempt
    /// is returned with `fallback` set.
    ///
    /// # Errors
    ///
    /// Returns an error only when the level lookup fails.
    fn generate(
        &self,
        level: u32,
        rng: &mut GameRng,
        ids: &mut dyn IdSource,
    ) -> Result<PuzzleData<Self::Rules>> {
        let name = <Self::Rules as Rules>::NAME;
        let max_attempts = self.max_attempts().max(1);
        let mut attempt = 1;

        loop {
            let mut data = self.generate_once(level, rng, ids)?;
            data.attempts = attempt;

            if self.accepts(&data) {
                debug!(
                    "{} level {} generated: start {} target {} ({} cards, attempt {})",
                    name,
                    level,
                    data.start,
                    data.target,
                    data.hand.len(),
                    attempt
                );
                return Ok(data);
            }

            if attempt >= max_attempts {
                warn!(
                    "{} level {}: no acceptable puzzle in {} attempts, keeping target {}",
                    name,
                    level,
                    attempt,
                    data.target
                );
                data.fallback = true;
                return Ok(data);
            }

            debug!(
                "{} level {}: rejected target {} on attempt {}",
                name,
                level,
                data.target,
                attempt
            );
            attempt += 1;
        }
    }
}
