//! The canonical solution of a puzzle and its step-by-step breakdown.

use std::fmt;

use crate::cards::Card;
use crate::rules::Rules;

/// Borrowed view of the generated correct path.
///
/// Rendered with `Display` as a numbered list of cards followed by the total
/// they reach, for showing the answer after an attempt ends.
pub struct Solution<'a, R: Rules> {
    start: &'a R::Value,
    target: &'a R::Value,
    steps: &'a [Card<R::Face>],
}

impl<'a, R: Rules> Solution<'a, R> {
    pub(crate) fn new(start: &'a R::Value, target: &'a R::Value, steps: &'a [Card<R::Face>]) -> Self {
        Self { start, target, steps }
    }

    /// Cards of the correct path, in the order they were generated.
    #[must_use]
    pub fn steps(&self) -> &'a [Card<R::Face>] {
        self.steps
    }

    /// Value reached by playing every step from the start.
    #[must_use]
    pub fn total(&self) -> R::Value {
        R::fold(self.start, self.steps)
    }

    /// Does the path actually land on the target?
    #[must_use]
    pub fn is_exact(&self) -> bool {
        &self.total() == self.target
    }
}

impl<R: Rules> fmt::Display for Solution<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Target: {}", self.target)?;
        writeln!(f, "Start: {}", self.start)?;
        for (i, card) in self.steps.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, card)?;
        }
        write!(f, "Total: {}", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Factor, Fraction};
    use crate::core::CardId;
    use crate::rules::{Additive, Multiplicative};
    use num_rational::Rational64;

    #[test]
    fn test_additive_breakdown() {
        let steps = vec![
            Card::new(CardId(1), Fraction::new(1, 2).unwrap()),
            Card::new(CardId(2), Fraction::new(-1, 4).unwrap()),
        ];
        let start = Rational64::from_integer(0);
        let target = Rational64::new(1, 4);
        let solution = Solution::<Additive>::new(&start, &target, &steps);

        assert!(solution.is_exact());
        assert_eq!(solution.total(), target);
        assert_eq!(
            solution.to_string(),
            "Target: 1/4\nStart: 0\n  1. 1/2\n  2. -1/4\nTotal: 1/4"
        );
    }

    #[test]
    fn test_multiplicative_breakdown() {
        let steps = vec![Card::new(CardId(1), Factor::divide(3).unwrap())];
        let solution = Solution::<Multiplicative>::new(&12, &4, &steps);

        assert!(solution.is_exact());
        assert_eq!(solution.to_string(), "Target: 4\nStart: 12\n  1. ÷3\nTotal: 4");
    }

    #[test]
    fn test_inexact_path_is_reported() {
        let steps = vec![Card::new(CardId(1), Factor::multiply(2).unwrap())];
        let solution = Solution::<Multiplicative>::new(&3, &5, &steps);
        assert!(!solution.is_exact());
    }
}
