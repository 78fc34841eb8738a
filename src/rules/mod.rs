//! Rules for the two engine variants.
//!
//! Variants implement `Rules` to define:
//! - The value a puzzle runs on and how cards combine with it
//! - Win/loss evaluation after each play
//! - Advisory feedback while an attempt continues
//!
//! `Puzzle` calls into `Rules` but never does arithmetic itself.

pub mod additive;
pub mod engine;
pub mod feedback;
pub mod multiplicative;
pub mod status;

pub use additive::Additive;
pub use engine::Rules;
pub use feedback::Feedback;
pub use multiplicative::Multiplicative;
pub use status::Status;
