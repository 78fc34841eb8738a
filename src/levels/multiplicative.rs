//! Factor levels: the multiplicative difficulty curve and its generator.
//!
//! Every correct-path division is checked against the running value; a
//! divisor that would leave a remainder is turned into a multiplier of the
//! same magnitude, so the correct path never leaves the integers. The last
//! step is re-drawn if it would bring the value back to where it started, so
//! a puzzle never opens already solved.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::generator::{LevelGenerator, PuzzleData, MAX_GENERATION_ATTEMPTS};
use super::table::{check_pool, check_probability, LevelConfig, LevelTable};
use crate::cards::{Card, Factor, Operation};
use crate::core::{GameRng, IdSource};
use crate::error::{PuzzleError, Result};
use crate::rules::{Multiplicative, Rules};

/// One multiplicative level entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactorLevel {
    pub title: String,
    /// Operations cards may carry.
    pub operations: Vec<Operation>,
    /// Factor magnitudes.
    pub factors: Vec<i64>,
    /// Candidate starting values.
    pub starts: Vec<i64>,
    /// Cards in the correct path.
    pub steps: usize,
    /// Chance each card's magnitude is negated.
    pub negative_probability: f64,
    /// Extra cards not on the correct path.
    pub distractors: usize,
}

impl FactorLevel {
    /// Multiply-and-divide level, positive only, two distractors.
    pub fn new(title: impl Into<String>, factors: &[i64], starts: &[i64], steps: usize) -> Self {
        Self {
            title: title.into(),
            operations: vec![Operation::Multiply, Operation::Divide],
            factors: factors.to_vec(),
            starts: starts.to_vec(),
            steps,
            negative_probability: 0.0,
            distractors: 2,
        }
    }

    /// Restrict the level to multiplication.
    #[must_use]
    pub fn multiply_only(mut self) -> Self {
        self.operations = vec![Operation::Multiply];
        self
    }

    /// Set the chance of negative magnitudes.
    #[must_use]
    pub fn with_negatives(mut self, probability: f64) -> Self {
        self.negative_probability = probability;
        self
    }

    /// Set the distractor count.
    #[must_use]
    pub fn with_distractors(mut self, count: usize) -> Self {
        self.distractors = count;
        self
    }
}

impl LevelConfig for FactorLevel {
    fn title(&self) -> &str {
        &self.title
    }

    fn validate(&self, level: u32) -> Result<()> {
        if self.operations.is_empty() {
            return Err(PuzzleError::InvalidLevelConfig { level, reason: "no operations allowed" });
        }
        check_pool(level, &self.factors, "empty factor pool", "zero factor")?;
        check_pool(level, &self.starts, "empty start pool", "zero start value")?;
        if self.steps == 0 {
            return Err(PuzzleError::InvalidLevelConfig { level, reason: "no correct-path steps" });
        }
        check_probability(level, self.negative_probability)
    }
}

/// The built-in multiplicative difficulty curve.
#[must_use]
pub fn default_factor_levels() -> LevelTable<FactorLevel> {
    LevelTable::builtin(vec![
        FactorLevel::new("Warm-up: doubling and tripling", &[2, 3], &[1, 2, 3], 2).multiply_only(),
        FactorLevel::new("Step up: halving", &[2], &[4, 8, 16], 2),
        FactorLevel::new("Challenge: mixed factors", &[2, 3], &[6, 12, 18], 2),
        FactorLevel::new("Reversal: sign flips", &[2, 3, 4], &[12, 24], 2).with_negatives(0.25),
        FactorLevel::new("Mixed: long chains", &[2, 3, 4, 5], &[12, 30, 60], 3)
            .with_negatives(0.3)
            .with_distractors(3),
        FactorLevel::new("Master: extreme scaling", &[2, 3, 4, 5, 6], &[12, 24, 36, 60], 4)
            .with_negatives(0.4)
            .with_distractors(3),
    ])
}

/// Generator for the multiplicative engine.
#[derive(Clone, Debug)]
pub struct FactorGenerator {
    table: LevelTable<FactorLevel>,
}

impl Default for FactorGenerator {
    fn default() -> Self {
        Self {
            table: default_factor_levels(),
        }
    }
}

impl FactorGenerator {
    /// Generator over the built-in table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the level table.
    #[must_use]
    pub fn with_table(mut self, table: LevelTable<FactorLevel>) -> Self {
        self.table = table;
        self
    }

    /// The level table in use.
    #[must_use]
    pub fn table(&self) -> &LevelTable<FactorLevel> {
        &self.table
    }
}

/// Draw an operation and a signed magnitude.
fn draw_factor(level: u32, config: &FactorLevel, rng: &mut GameRng) -> Result<(Operation, i64)> {
    let operation = *rng
        .choose(&config.operations)
        .ok_or(PuzzleError::InvalidLevelConfig { level, reason: "no operations allowed" })?;
    let mut magnitude = *rng
        .choose(&config.factors)
        .ok_or(PuzzleError::InvalidLevelConfig { level, reason: "empty factor pool" })?;
    if rng.gen_bool(config.negative_probability) {
        magnitude = -magnitude;
    }
    Ok((operation, magnitude))
}

/// Build a factor, turning a division that leaves a remainder on `value`
/// into a multiplication by the same magnitude.
fn guarded_factor(operation: Operation, magnitude: i64, value: i64) -> Result<Factor> {
    let face = Factor::new(operation, magnitude)?;
    if operation == Operation::Divide && !face.divides_evenly(value) {
        return Factor::multiply(magnitude);
    }
    Ok(face)
}

/// Last correct-path step: must not land back on `start`.
///
/// Draws up to `MAX_GENERATION_ATTEMPTS` times, then scans the level's
/// operations and factors in order. Only a table whose every factor is ±1
/// can fail both; the last draw is kept then.
fn closing_factor(
    level: u32,
    config: &FactorLevel,
    start: i64,
    value: i64,
    rng: &mut GameRng,
) -> Result<Factor> {
    let lands_on_start = |face: &Factor| Multiplicative::combine(&value, face) == start;

    let mut last = None;
    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let (operation, magnitude) = draw_factor(level, config, rng)?;
        let face = guarded_factor(operation, magnitude, value)?;
        if !lands_on_start(&face) {
            return Ok(face);
        }
        last = Some(face);
    }

    for &operation in &config.operations {
        for &magnitude in &config.factors {
            let face = guarded_factor(operation, magnitude, value)?;
            if !lands_on_start(&face) {
                return Ok(face);
            }
        }
    }

    debug!("factor level {}: every closing step returns to {}", level, start);
    last.ok_or(PuzzleError::InvalidLevelConfig { level, reason: "no correct-path steps" })
}

impl LevelGenerator for FactorGenerator {
    type Rules = Multiplicative;

    fn generate_once(
        &self,
        level: u32,
        rng: &mut GameRng,
        ids: &mut dyn IdSource,
    ) -> Result<PuzzleData<Multiplicative>> {
        let lookup = self.table.lookup(level)?;
        let config = lookup.config;

        let start = *rng
            .choose(&config.starts)
            .ok_or(PuzzleError::InvalidLevelConfig { level, reason: "empty start pool" })?;
        let mut target = start;
        let mut solution = SmallVec::new();

        for _ in 1..config.steps {
            let (operation, magnitude) = draw_factor(level, config, rng)?;
            let face = guarded_factor(operation, magnitude, target)?;
            target = Multiplicative::combine(&target, &face);
            solution.push(Card::new(ids.next_id(), face));
        }
        let face = closing_factor(level, config, start, target, rng)?;
        target = Multiplicative::combine(&target, &face);
        solution.push(Card::new(ids.next_id(), face));

        let mut hand: Vec<_> = solution.iter().cloned().collect();
        for _ in 0..config.distractors {
            let (operation, magnitude) = draw_factor(level, config, rng)?;
            hand.push(Card::new(ids.next_id(), Factor::new(operation, magnitude)?));
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
}
