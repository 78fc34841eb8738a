//! Cards: identity plus an immutable face.
//!
//! ## Key Types
//!
//! - `Card<F>`: a face with a `CardId`
//! - `Face`: trait every face implements
//! - `Fraction`: signed fraction (additive engine)
//! - `Factor`: signed multiplier or divisor (multiplicative engine)

pub mod card;
pub mod factor;
pub mod fraction;

pub use card::{Card, Face};
pub use factor::{Factor, Operation};
pub use fraction::Fraction;
