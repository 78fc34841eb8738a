//! Fraction levels: the additive difficulty curve and its generator.
//!
//! Levels 1-3 stay positive and widen the denominators (halves, then
//! quarters, then common multiples). Level 4 introduces negative cards, and
//! everything past level 6 plays the master entry.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::generator::{LevelGenerator, PuzzleData, MAX_GENERATION_ATTEMPTS};
use super::table::{check_pool, check_probability, LevelConfig, LevelTable};
use crate::cards::{Card, Fraction};
use crate::core::{GameRng, IdSource};
use crate::error::{PuzzleError, Result};
use crate::rules::{Additive, Rules};

/// Numerators drawn for correct-path cards (1 is twice as likely as 2).
pub const PATH_NUMERATORS: [i64; 3] = [1, 1, 2];

/// Numerators drawn for distractor cards.
pub const DISTRACTOR_NUMERATORS: [i64; 2] = [1, 2];

/// Chance a distractor is negative on levels with negative cards.
pub const DISTRACTOR_NEGATIVE_PROBABILITY: f64 = 0.4;

/// One additive level entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractionLevel {
    pub title: String,
    /// Denominators cards are drawn with.
    pub denominators: Vec<i64>,
    /// Numerator magnitudes for the correct path.
    pub numerators: Vec<i64>,
    /// Cards in the correct path.
    pub steps: usize,
    /// Chance each correct-path card is negative.
    pub negative_probability: f64,
    /// Extra cards not on the correct path.
    pub distractors: usize,
    /// Numerator magnitudes for distractors.
    pub distractor_numerators: Vec<i64>,
    /// Chance each distractor is negative.
    pub distractor_negative_probability: f64,
}

impl FractionLevel {
    /// Positive-only level with two distractors.
    pub fn new(title: impl Into<String>, denominators: &[i64], steps: usize) -> Self {
        Self {
            title: title.into(),
            denominators: denominators.to_vec(),
            numerators: PATH_NUMERATORS.to_vec(),
            steps,
            negative_probability: 0.0,
            distractors: 2,
            distractor_numerators: DISTRACTOR_NUMERATORS.to_vec(),
            distractor_negative_probability: 0.0,
        }
    }

    /// Enable negative cards: path cards flip with `probability`,
    /// distractors with `DISTRACTOR_NEGATIVE_PROBABILITY`.
    #[must_use]
    pub fn with_negatives(mut self, probability: f64) -> Self {
        self.negative_probability = probability;
        self.distractor_negative_probability = DISTRACTOR_NEGATIVE_PROBABILITY;
        self
    }

    /// Set the distractor count.
    #[must_use]
    pub fn with_distractors(mut self, count: usize) -> Self {
        self.distractors = count;
        self
    }

    /// Set the correct-path numerator pool.
    #[must_use]
    pub fn with_numerators(mut self, numerators: &[i64]) -> Self {
        self.numerators = numerators.to_vec();
        self
    }

    /// Does this level deal negative cards at all?
    #[must_use]
    pub fn allows_negatives(&self) -> bool {
        self.negative_probability > 0.0 || self.distractor_negative_probability > 0.0
    }
}

impl LevelConfig for FractionLevel {
    fn title(&self) -> &str {
        &self.title
    }

    fn validate(&self, level: u32) -> Result<()> {
        check_pool(level, &self.denominators, "empty denominator pool", "zero denominator")?;
        check_pool(level, &self.numerators, "empty numerator pool", "zero numerator")?;
        if self.distractors > 0 {
            check_pool(
                level,
                &self.distractor_numerators,
                "empty distractor numerator pool",
                "zero distractor numerator",
            )?;
        }
        if self.steps == 0 {
            return Err(PuzzleError::InvalidLevelConfig { level, reason: "no correct-path steps" });
        }
        check_probability(level, self.negative_probability)?;
        check_probability(level, self.distractor_negative_probability)
    }
}

/// The built-in additive difficulty curve.
#[must_use]
pub fn default_fraction_levels() -> LevelTable<FractionLevel> {
    LevelTable::builtin(vec![
        FractionLevel::new("Warm-up: a world of halves", &[2], 2),
        FractionLevel::new("Step up: cutting the cake (2 and 4)", &[2, 4], 2),
        FractionLevel::new("Challenge: find the common multiple", &[2, 3, 4, 6], 3),
        FractionLevel::new("Reversal: negative cards appear", &[2, 4], 3).with_negatives(0.5),
        FractionLevel::new("Mixed: decimal intuition", &[2, 5, 10], 3).with_negatives(0.5),
        FractionLevel::new("Master: extreme arithmetic", &[3, 4, 5, 6, 8], 4)
            .with_negatives(0.5)
            .with_distractors(3),
    ])
}

/// Generator for the additive engine.
///
/// Starts every puzzle at zero and rejects targets that are not positive,
/// so the target can always be approached by moving forward.
#[derive(Clone, Debug)]
pub struct FractionGenerator {
    table: LevelTable<FractionLevel>,
    max_attempts: usize,
}

impl Default for FractionGenerator {
    fn default() -> Self {
        Self {
            table: default_fraction_levels(),
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }
}

impl FractionGenerator {
    /// Generator over the built-in table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the level table.
    #[must_use]
    pub fn with_table(mut self, table: LevelTable<FractionLevel>) -> Self {
        self.table = table;
        self
    }

    /// Replace the retry bound.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// The level table in use.
    #[must_use]
    pub fn table(&self) -> &LevelTable<FractionLevel> {
        &self.table
    }
}

/// Draw one fraction card from the given pools.
fn draw_fraction(
    level: u32,
    numerators: &[i64],
    denominators: &[i64],
    negative_probability: f64,
    rng: &mut GameRng,
    ids: &mut dyn IdSource,
) -> Result<Card<Fraction>> {
    let denominator = *rng
        .choose(denominators)
        .ok_or(PuzzleError::InvalidLevelConfig { level, reason: "empty denominator pool" })?;
    let mut numerator = *rng
        .choose(numerators)
        .ok_or(PuzzleError::InvalidLevelConfig { level, reason: "empty numerator pool" })?;
    if rng.gen_bool(negative_probability) {
        numerator = -numerator;
    }
    Ok(Card::new(ids.next_id(), Fraction::new(numerator, denominator)?))
}

impl LevelGenerator for FractionGenerator {
    type Rules = Additive;

    fn generate_once(
        &self,
        level: u32,
        rng: &mut GameRng,
        ids: &mut dyn IdSource,
    ) -> Result<PuzzleData<Additive>> {
        let lookup = self.table.lookup(level)?;
        let config = lookup.config;

        let start = Rational64::from_integer(0);
        let mut target = start;
        let mut solution = SmallVec::new();

        for _ in 0..config.steps {
            let card = draw_fraction(
                level,
                &config.numerators,
                &config.denominators,
                config.negative_probability,
                rng,
                ids,
            )?;
            target = Additive::combine(&target, card.face());
            solution.push(card);
        }

        let mut hand: Vec<_> = solution.iter().cloned().collect();
        for _ in 0..config.distractors {
            hand.push(draw_fraction(
                level,
                &config.distractor_numerators,
                &config.denominators,
                config.distractor_negative_probability,
                rng,
                ids,
            )?);
        }
        rng.shuffle(&mut hand);

        Ok(PuzzleData {
            level,
            title: config.title.clone(),
            start,
            target,
            hand,
            solution,
            attempts: 1,
            fallback: false,
            clamped: lookup.clamped,
        })
    }

    fn accepts(&self, data: &PuzzleData<Additive>) -> bool {
        data.target > Rational64::from_integer(0)
    }

    fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}
