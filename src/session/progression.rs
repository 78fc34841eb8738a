//! Progression controller: one player's run through levels 1..=max.
//!
//! A `GameSession` owns everything a play session needs (generator, RNG,
//! id source, the live puzzle) and is passed explicitly to whatever drives
//! it. There is no global state.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::config::SessionConfig;
use crate::core::{GameRng, IdSource, RandomIds, SequentialIds};
use crate::error::{PuzzleError, Result};
use crate::levels::LevelGenerator;
use crate::puzzle::{Puzzle, PuzzleView};
use crate::rules::Status;

/// Where the campaign as a whole stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    Playing,
    /// Advanced past the last level.
    Completed,
}

/// A play session over one engine variant.
///
/// ## Usage
///
/// ```
/// use card_arith::levels::FractionGenerator;
/// use card_arith::session::{GameSession, SessionConfig};
///
/// let mut session = GameSession::new(
///     FractionGenerator::new(),
///     SessionConfig::new().with_seed(42).with_max_level(3),
/// ).unwrap();
///
/// assert_eq!(session.level(), 1);
/// let status = session.apply(0).unwrap();
/// assert!(!status.is_won() || session.levels_won() == 1);
/// ```
pub struct GameSession<G: LevelGenerator> {
    generator: G,
    config: SessionConfig,
    rng: GameRng,
    ids: Box<dyn IdSource>,
    level: u32,
    campaign: CampaignStatus,
    levels_won: u32,
    /// Set once the current attempt's win has been counted.
    win_counted: bool,
    puzzle: Puzzle<G::Rules>,
}

impl<G: LevelGenerator> GameSession<G> {
    /// Start a session at level 1.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLevel(0)` when `max_level` is 0, or any error from
    /// generating level 1.
    pub fn new(generator: G, config: SessionConfig) -> Result<Self> {
        if config.max_level == 0 {
            return Err(PuzzleError::InvalidLevel(0));
        }

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut ids: Box<dyn IdSource> = if config.random_ids {
            Box::new(RandomIds::new(rng.fork()))
        } else {
            Box::new(SequentialIds::new())
        };

        let data = generator.generate(1, &mut rng, ids.as_mut())?;
        info!("session started (seed {}, {} levels)", rng.seed(), config.max_level);

        Ok(Self {
            generator,
            config,
            rng,
            ids,
            level: 1,
            campaign: CampaignStatus::Playing,
            levels_won: 0,
            win_counted: false,
            puzzle: Puzzle::new(data),
        })
    }

    // === Accessors ===

    /// Current level number.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn max_level(&self) -> u32 {
        self.config.max_level
    }

    #[must_use]
    pub fn campaign(&self) -> CampaignStatus {
        self.campaign
    }

    /// Puzzles won since the last reset.
    #[must_use]
    pub fn levels_won(&self) -> u32 {
        self.levels_won
    }

    /// Campaign progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (f64::from(self.level) / f64::from(self.config.max_level)).min(1.0)
    }

    /// The live puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle<G::Rules> {
        &self.puzzle
    }

    /// Snapshot of the live puzzle.
    #[must_use]
    pub fn view(&self) -> PuzzleView<G::Rules> {
        self.puzzle.view()
    }

    #[must_use]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    // === Player Actions ===

    /// Play a card in the live puzzle.
    ///
    /// # Errors
    ///
    /// Propagates `Puzzle::apply` rejections; the session is unchanged.
    pub fn apply(&mut self, index: usize) -> Result<Status> {
        let status = self.puzzle.apply(index)?;
        if status.is_won() && !self.win_counted {
            self.win_counted = true;
            self.levels_won += 1;
        }
        Ok(status)
    }

    /// Undo the last play in the live puzzle.
    ///
    /// # Errors
    ///
    /// Returns `EmptyHistoryUndo` if nothing has been played.
    pub fn undo(&mut self) -> Result<()> {
        self.puzzle.undo()
    }

    // === Progression ===

    /// Deal a fresh puzzle for `level`, discarding the current one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLevel` for 0 or levels past `max_level`, or a
    /// generation error. On error the current puzzle is kept.
    pub fn start_level(&mut self, level: u32) -> Result<()> {
        if level == 0 || level > self.config.max_level {
            return Err(PuzzleError::InvalidLevel(level));
        }

        let data = self.generator.generate(level, &mut self.rng, self.ids.as_mut())?;
        if data.clamped {
            debug!("level {} uses the last table entry ({})", level, data.title);
        }
        info!("starting level {}: {}", level, data.title);

        self.puzzle = Puzzle::new(data);
        self.level = level;
        self.win_counted = false;
        Ok(())
    }

    /// Deal the current level again.
    ///
    /// # Errors
    ///
    /// Returns a generation error; the current puzzle is kept.
    pub fn retry(&mut self) -> Result<()> {
        self.start_level(self.level)
    }

    /// Move to the next level, or complete the campaign from the last one.
    ///
    /// Once completed, further calls do nothing.
    ///
    /// # Errors
    ///
    /// Returns a generation error; the current puzzle is kept.
    pub fn next_level(&mut self) -> Result<CampaignStatus> {
        if self.campaign == CampaignStatus::Completed {
            return Ok(self.campaign);
        }
        if self.level >= self.config.max_level {
            info!("campaign completed at level {} ({} won)", self.level, self.levels_won);
            self.campaign = CampaignStatus::Completed;
            return Ok(self.campaign);
        }
        self.start_level(self.level + 1)?;
        Ok(self.campaign)
    }

    /// Back to level 1 with a clean campaign.
    ///
    /// # Errors
    ///
    /// Returns a generation error for level 1.
    pub fn reset(&mut self) -> Result<()> {
        self.start_level(1)?;
        self.campaign = CampaignStatus::Playing;
        self.levels_won = 0;
        Ok(())
    }
}
