//! A module containing [`Outcome`], a slot holding either a success value or an error value.
//!
//! Outcomes are built from the [`Success`] and [`Failure`] wrappers returned by [`ok`] and
//! [`err`], or with [`ok_if`]. They convert to and from the standard library's [`Result`] so they
//! can take part in `?` propagation.

mod outcome;
mod wrap;

pub use outcome::*;
pub use wrap::*;
