//! Additive rules: fractions summed toward a target.

use im::Vector;
use num_rational::Rational64;

use super::engine::Rules;
use super::feedback::Feedback;
use crate::cards::{Card, Fraction};

/// Sum of signed fractions, starting from zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Additive;

impl Rules for Additive {
    type Value = Rational64;
    type Face = Fraction;

    const NAME: &'static str = "additive";

    fn combine(value: &Rational64, face: &Fraction) -> Rational64 {
        value + face.value()
    }

    /// Past the target and no negative card in hand.
    ///
    /// Only the presence of a negative card is checked, not whether some
    /// combination of the remaining cards could still land on the target.
    fn is_overshoot(current: &Rational64, target: &Rational64, hand: &Vector<Card<Fraction>>) -> bool {
        current > target && !hand.iter().any(Card::is_negative)
    }

    fn advise(current: &Rational64, target: &Rational64, _hand: &Vector<Card<Fraction>>) -> Feedback<Rational64> {
        if current > target {
            Feedback::Overshoot { excess: current - target }
        } else {
            Feedback::Calculating
        }
    }
}
