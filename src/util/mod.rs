//! Helpers shared by the unit tests.

pub mod observe;
pub mod panic;
