//! Puzzle state machine: one attempt at one level.
//!
//! ## Transitions
//!
//! - `apply(i)`: hand[i] → history, then re-evaluate status
//! - `undo()`: history top → end of hand, status back to in-progress
//!
//! ## Invariants
//!
//! - Every generated card is in exactly one of hand / history
//! - `current()` is always `start` folded with `history`; it is never stored
//! - Rejected actions leave the puzzle untouched

use im::Vector;
use log::{debug, info};
use serde::Serialize;

use super::solution::Solution;
use crate::cards::Card;
use crate::error::{PuzzleError, Result};
use crate::levels::{PuzzleData, SolutionCards};
use crate::rules::{Feedback, Rules, Status};

/// One attempt at a generated level.
///
/// Uses `im` persistent vectors so `view()` snapshots are O(1).
#[derive(Clone, Debug)]
pub struct Puzzle<R: Rules> {
    level: u32,
    title: String,
    start: R::Value,
    target: R::Value,
    /// Unplayed cards, display order only.
    hand: Vector<Card<R::Face>>,
    /// Played cards in play order; the undo stack.
    history: Vector<Card<R::Face>>,
    status: Status,
    solution: SolutionCards<R::Face>,
    feedback: Feedback<R::Value>,
}

impl<R: Rules> Puzzle<R> {
    /// Start an attempt from generated data.
    #[must_use]
    pub fn new(data: PuzzleData<R>) -> Self {
        let feedback = Feedback::LevelStarted {
            level: data.level,
            title: data.title.clone(),
        };
        Self {
            level: data.level,
            title: data.title,
            start: data.start,
            target: data.target,
            hand: data.hand.into_iter().collect(),
            history: Vector::new(),
            status: Status::InProgress,
            solution: data.solution,
            feedback,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn start(&self) -> &R::Value {
        &self.start
    }

    #[must_use]
    pub fn target(&self) -> &R::Value {
        &self.target
    }

    /// Running value: `start` combined with every played card, in order.
    #[must_use]
    pub fn current(&self) -> R::Value {
        R::fold(&self.start, &self.history)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Unplayed cards.
    #[must_use]
    pub fn hand(&self) -> &Vector<Card<R::Face>> {
        &self.hand
    }

    /// Played cards, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Card<R::Face>> {
        &self.history
    }

    /// Feedback for the last event.
    #[must_use]
    pub fn feedback(&self) -> &Feedback<R::Value> {
        &self.feedback
    }

    /// The generated correct path, revealed or not.
    #[must_use]
    pub fn solution(&self) -> Solution<'_, R> {
        Solution::new(&self.start, &self.target, &self.solution)
    }

    /// The correct path, only once the attempt has ended.
    #[must_use]
    pub fn revealed_solution(&self) -> Option<Solution<'_, R>> {
        self.status.is_terminal().then(|| self.solution())
    }

    // === Transitions ===

    /// Play the card at `index` in the hand.
    ///
    /// # Errors
    ///
    /// - `PuzzleFinished` if the attempt has already ended
    /// - `InvalidCardIndex` if `index` is outside the hand
    ///
    /// Either way the puzzle is unchanged.
    pub fn apply(&mut self, index: usize) -> Result<Status> {
        if self.status.is_terminal() {
            debug!("level {}: apply({}) rejected, puzzle is {}", self.level, index, self.status);
            return Err(PuzzleError::PuzzleFinished(self.status));
        }
        if index >= self.hand.len() {
            debug!("level {}: apply({}) rejected, hand has {} cards", self.level, index, self.hand.len());
            return Err(PuzzleError::InvalidCardIndex {
                index,
                hand_size: self.hand.len(),
            });
        }

        let card = self.hand.remove(index);
        debug!("level {}: played {}", self.level, card);
        self.history.push_back(card);

        let current = self.current();
        self.status = R::evaluate(&current, &self.target, &self.hand);
        self.feedback = match self.status {
            Status::Won => Feedback::Won,
            Status::LostOvershoot => Feedback::Busted,
            Status::LostExhausted => Feedback::OutOfCards,
            Status::InProgress => R::advise(&current, &self.target, &self.hand),
        };

        if self.status.is_terminal() {
            info!(
                "level {} ended {}: current {} target {} after {} cards",
                self.level,
                self.status,
                current,
                self.target,
                self.history.len()
            );
        }

        Ok(self.status)
    }

    /// Take back the most recent play.
    ///
    /// The card goes to the end of the hand and the status returns to
    /// in-progress, even from a won or lost position.
    ///
    /// # Errors
    ///
    /// Returns `EmptyHistoryUndo` if nothing has been played.
    pub fn undo(&mut self) -> Result<()> {
        let card = self.history.pop_back().ok_or(PuzzleError::EmptyHistoryUndo)?;
        debug!("level {}: undid {}", self.level, card);
        self.hand.push_back(card);
        self.status = Status::InProgress;
        self.feedback = Feedback::Undone;
        Ok(())
    }

    // === Snapshots ===

    /// Immutable snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> PuzzleView<R> {
        PuzzleView {
            level: self.level,
            title: self.title.clone(),
            start: self.start.clone(),
            target: self.target.clone(),
            current: self.current(),
            hand: self.hand.clone(),
            history: self.history.clone(),
            status: self.status,
            message: self.feedback.to_string(),
            headline: self.feedback.headline(),
            feedback: self.feedback.clone(),
            solution: self
                .revealed_solution()
                .map(|solution| solution.steps().to_vec()),
        }
    }
}

/// Everything a renderer needs after a mutation.
///
/// Taken fresh after every `apply`/`undo`, so it can never show a stale
/// position.
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct PuzzleView<R: Rules> {
    pub level: u32,
    pub title: String,
    pub start: R::Value,
    pub target: R::Value,
    pub current: R::Value,
    pub hand: Vector<Card<R::Face>>,
    pub history: Vector<Card<R::Face>>,
    pub status: Status,
    pub feedback: Feedback<R::Value>,
    /// `feedback` rendered as text.
    pub message: String,
    /// Verdict line for ended attempts.
    pub headline: Option<&'static str>,
    /// Correct path, present once the attempt has ended.
    pub solution: Option<Vec<Card<R::Face>>>,
}
