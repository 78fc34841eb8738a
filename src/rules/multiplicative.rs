//! Multiplicative rules: integer factors scaling toward a target.

use im::Vector;

use super::engine::Rules;
use super::feedback::Feedback;
use crate::cards::{Card, Factor};

/// Products and exact quotients of signed integers.
///
/// There is no overshoot here: scaling is not monotonic, so the only loss is
/// running out of cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Multiplicative;

impl Rules for Multiplicative {
    type Value = i64;
    type Face = Factor;

    const NAME: &'static str = "multiplicative";

    fn combine(value: &i64, face: &Factor) -> i64 {
        face.apply(*value)
    }

    fn advise(current: &i64, target: &i64, _hand: &Vector<Card<Factor>>) -> Feedback<i64> {
        if current.signum() * target.signum() < 0 {
            Feedback::WrongSign
        } else if current.unsigned_abs() < target.unsigned_abs() {
            Feedback::ScaleUp
        } else {
            Feedback::ScaleDown
        }
    }
}
