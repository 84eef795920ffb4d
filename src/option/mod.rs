//! A module containing [`Optional`], a slot holding zero or one value, along with the [`NONE`]
//! marker and the [`some`] and [`none`] constructors.

mod optional;
mod tests;

pub use optional::*;
