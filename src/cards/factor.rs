//! Factor faces for the multiplicative engine.

use serde::{Deserialize, Serialize};

use super::card::Face;
use crate::error::{PuzzleError, Result};

/// Multiply or divide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Multiply,
    Divide,
}

impl Operation {
    /// Symbol printed on the card.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }
}

/// A signed integer multiplier or divisor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FactorRepr")]
pub struct Factor {
    operation: Operation,
    magnitude: i64,
}

impl Factor {
    /// Create a factor face.
    ///
    /// # Errors
    ///
    /// Returns `ZeroFactor` when `magnitude == 0`.
    pub fn new(operation: Operation, magnitude: i64) -> Result<Self> {
        if magnitude == 0 {
            return Err(PuzzleError::ZeroFactor);
        }
        Ok(Self { operation, magnitude })
    }

    /// `×magnitude`.
    ///
    /// # Errors
    ///
    /// Returns `ZeroFactor` when `magnitude == 0`.
    pub fn multiply(magnitude: i64) -> Result<Self> {
        Self::new(Operation::Multiply, magnitude)
    }

    /// `÷magnitude`.
    ///
    /// # Errors
    ///
    /// Returns `ZeroFactor` when `magnitude == 0`.
    pub fn divide(magnitude: i64) -> Result<Self> {
        Self::new(Operation::Divide, magnitude)
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn magnitude(&self) -> i64 {
        self.magnitude
    }

    /// Would dividing `value` by this factor leave no remainder?
    #[must_use]
    pub fn divides_evenly(&self, value: i64) -> bool {
        value.checked_rem(self.magnitude) == Some(0)
    }

    /// Apply the factor to `value`.
    ///
    /// Multiplication saturates. Division truncates toward zero; a division
    /// that cannot be performed (zero divisor, `i64::MIN / -1`) is skipped
    /// and returns `value` unchanged.
    #[must_use]
    pub fn apply(&self, value: i64) -> i64 {
        match self.operation {
            Operation::Multiply => value.saturating_mul(self.magnitude),
            Operation::Divide => value.checked_div(self.magnitude).unwrap_or(value),
        }
    }
}

impl Face for Factor {
    fn is_negative(&self) -> bool {
        self.magnitude < 0
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.magnitude < 0 {
            write!(f, "{}({})", self.operation.symbol(), self.magnitude)
        } else {
            write!(f, "{}{}", self.operation.symbol(), self.magnitude)
        }
    }
}

#[derive(Deserialize)]
struct FactorRepr {
    operation: Operation,
    magnitude: i64,
}

impl TryFrom<FactorRepr> for Factor {
    type Error = PuzzleError;

    fn try_from(repr: FactorRepr) -> Result<Self> {
        Self::new(repr.operation, repr.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_multiply_and_divide() {
        assert_eq!(Factor::multiply(3).unwrap().apply(4), 12);
        assert_eq!(Factor::divide(3).unwrap().apply(12), 4);
        assert_eq!(Factor::multiply(-2).unwrap().apply(5), -10);
        assert_eq!(Factor::divide(-4).unwrap().apply(12), -3);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(Factor::divide(2).unwrap().apply(7), 3);
        assert_eq!(Factor::divide(2).unwrap().apply(-7), -3);
    }

    #[test]
    fn test_unperformable_division_is_skipped() {
        assert_eq!(Factor::divide(-1).unwrap().apply(i64::MIN), i64::MIN);
    }

    #[test]
    fn test_multiply_saturates() {
        assert_eq!(Factor::multiply(2).unwrap().apply(i64::MAX), i64::MAX);
    }

    #[test]
    fn test_divides_evenly() {
        let three = Factor::divide(3).unwrap();
        assert!(three.divides_evenly(12));
        assert!(three.divides_evenly(-12));
        assert!(!three.divides_evenly(10));
        assert!(!Factor::divide(-1).unwrap().divides_evenly(i64::MIN));
    }

    #[test]
    fn test_zero_factor_rejected() {
        assert_eq!(Factor::multiply(0), Err(PuzzleError::ZeroFactor));
        assert_eq!(Factor::divide(0), Err(PuzzleError::ZeroFactor));
    }

    #[test]
    fn test_display() {
        assert_eq!(Factor::multiply(3).unwrap().to_string(), "×3");
        assert_eq!(Factor::divide(2).unwrap().to_string(), "÷2");
        assert_eq!(Factor::divide(-2).unwrap().to_string(), "÷(-2)");
    }

    #[test]
    fn test_negative_flag() {
        assert!(Factor::multiply(-3).unwrap().is_negative());
        assert!(!Factor::divide(3).unwrap().is_negative());
    }

    #[test]
    fn test_serialization() {
        let factor = Factor::divide(4).unwrap();
        let json = serde_json::to_string(&factor).unwrap();
        assert_eq!(json, r#"{"operation":"divide","magnitude":4}"#);

        let back: Factor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, factor);
        assert!(serde_json::from_str::<Factor>(r#"{"operation":"divide","magnitude":0}"#).is_err());
    }
}
