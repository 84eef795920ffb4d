//! Contract checks for unchecked accessors.
//!
//! The unchecked accessors on [`Optional`](crate::option::Optional) and
//! [`Outcome`](crate::result::Outcome) have preconditions that the caller is responsible for.
//! When checks are enabled (debug builds, or any build with the `debug-checks` feature) a
//! violated precondition panics with [`unreachable!`]. Otherwise the violation is undefined
//! behaviour and the branch is removed with [`hint::unreachable_unchecked`].

#[cfg(any(feature = "option", feature = "result"))]
use std::hint;

/// Whether contract violations are detected at runtime in this build.
pub const CHECKS_ENABLED: bool = cfg!(any(debug_assertions, feature = "debug-checks"));

#[cfg(any(feature = "option", feature = "result"))]
pub(crate) trait Unchecked<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch when
    /// checks are enabled and [`unreachable_unchecked`](hint::unreachable_unchecked) otherwise.
    ///
    /// This function does panic if used incorrectly, but no panics annotaions are used to allow it
    /// to pass the clippy lint. Calling it states that the missing case is impossible.
    unsafe fn unreachable(self, contract: &'static str) -> T;
}

#[cfg(any(feature = "option", feature = "result"))]
impl<T> Unchecked<T> for Option<T> {
    unsafe fn unreachable(self, contract: &'static str) -> T {
        match self {
            Some(val) => val,
            None if CHECKS_ENABLED => unreachable!("contract violated: {}", contract),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible when
            // invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
