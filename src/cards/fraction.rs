//! Fraction faces for the additive engine.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};

use super::card::Face;
use crate::error::{PuzzleError, Result};

/// A signed fraction as printed on the card.
///
/// The numerator and denominator are kept as generated (`2/4` is not reduced
/// to `1/2`) so the card reads the way it was dealt. The sign always lives on
/// the numerator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FractionRepr")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Create a fraction face.
    ///
    /// # Errors
    ///
    /// Returns `ZeroDenominator` when `denominator == 0`, and
    /// `FractionOutOfRange` when a negative denominator cannot be flipped
    /// onto the numerator (either part is `i64::MIN`).
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            return Err(PuzzleError::ZeroDenominator);
        }
        if denominator > 0 {
            return Ok(Self { numerator, denominator });
        }
        match (numerator.checked_neg(), denominator.checked_neg()) {
            (Some(numerator), Some(denominator)) => Ok(Self { numerator, denominator }),
            _ => Err(PuzzleError::FractionOutOfRange { numerator, denominator }),
        }
    }

    /// Numerator as printed (carries the sign).
    #[must_use]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Denominator as printed (always positive).
    #[must_use]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Exact value of the card.
    #[must_use]
    pub fn value(&self) -> Rational64 {
        Rational64::new(self.numerator, self.denominator)
    }
}

impl Face for Fraction {
    fn is_negative(&self) -> bool {
        self.numerator < 0
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[derive(Deserialize)]
struct FractionRepr {
    numerator: i64,
    denominator: i64,
}

impl TryFrom<FractionRepr> for Fraction {
    type Error = PuzzleError;

    fn try_from(repr: FractionRepr) -> Result<Self> {
        Self::new(repr.numerator, repr.denominator)
    }
}
