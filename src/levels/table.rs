//! Per-level configuration tables.
//!
//! A table maps level numbers (starting at 1) to configuration entries.
//! Levels past the end clamp to the last entry and are reported as clamped;
//! level 0 is an error rather than a silent alias for level 1.

use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};

/// Common surface of a level entry.
pub trait LevelConfig {
    /// Human-readable title shown with the level.
    fn title(&self) -> &str;

    /// Check the entry can produce a puzzle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLevelConfig` naming `level` and the problem.
    fn validate(&self, level: u32) -> Result<()>;
}

/// Result of a level lookup.
#[derive(Clone, Copy, Debug)]
pub struct LevelLookup<'a, C> {
    /// Entry to build the level from.
    pub config: &'a C,
    /// True when the requested level was past the end of the table.
    pub clamped: bool,
}

/// Ordered level entries, level 1 first.
///
/// Deserializing goes through `LevelTable::new`, so a loaded table is
/// validated the same way as one built in code.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    try_from = "LevelTableRepr<C>",
    bound(deserialize = "C: LevelConfig + Deserialize<'de>")
)]
pub struct LevelTable<C> {
    entries: Vec<C>,
}

#[derive(Deserialize)]
struct LevelTableRepr<C> {
    entries: Vec<C>,
}

impl<C: LevelConfig> TryFrom<LevelTableRepr<C>> for LevelTable<C> {
    type Error = PuzzleError;

    fn try_from(repr: LevelTableRepr<C>) -> Result<Self> {
        Self::new(repr.entries)
    }
}

impl<C: LevelConfig> LevelTable<C> {
    /// Build a table, validating every entry.
    ///
    /// # Errors
    ///
    /// Returns `EmptyLevelTable` for no entries, or the first entry's
    /// validation error.
    pub fn new(entries: Vec<C>) -> Result<Self> {
        if entries.is_empty() {
            return Err(PuzzleError::EmptyLevelTable);
        }
        for (level, entry) in (1u32..).zip(&entries) {
            entry.validate(level)?;
        }
        Ok(Self { entries })
    }

    /// Built-in tables skip validation; unit tests cover them.
    pub(crate) fn builtin(entries: Vec<C>) -> Self {
        debug_assert!(!entries.is_empty());
        Self { entries }
    }

    /// Look up the entry for `level`, clamping past the end.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLevel(0)` for level 0 and `EmptyLevelTable` if the
    /// table somehow has no entries.
    pub fn lookup(&self, level: u32) -> Result<LevelLookup<'_, C>> {
        if level == 0 {
            return Err(PuzzleError::InvalidLevel(level));
        }
        let defined = self.entries.len();
        let index = (level as usize).min(defined).saturating_sub(1);
        let config = self.entries.get(index).ok_or(PuzzleError::EmptyLevelTable)?;
        Ok(LevelLookup {
            config,
            clamped: level as usize > defined,
        })
    }

    /// Entry defined for exactly `level`, without clamping.
    #[must_use]
    pub fn get(&self, level: u32) -> Option<&C> {
        (level as usize).checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Number of explicitly defined levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries, level 1 first.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.entries.iter()
    }
}

/// Shared pool checks used by both engines' level entries.
pub(crate) fn check_pool(level: u32, pool: &[i64], empty: &'static str, zero: &'static str) -> Result<()> {
    if pool.is_empty() {
        return Err(PuzzleError::InvalidLevelConfig { level, reason: empty });
    }
    if pool.contains(&0) {
        return Err(PuzzleError::InvalidLevelConfig { level, reason: zero });
    }
    Ok(())
}

/// Probabilities must be in `[0, 1]`.
pub(crate) fn check_probability(level: u32, p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(PuzzleError::InvalidLevelConfig {
            level,
            reason: "probability outside [0, 1]",
        })
    }
}
