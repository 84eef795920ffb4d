use std::mem;
use std::ops::{Deref, DerefMut};

use derive_more::IsVariant;

use super::wrap::{Failure, Success};
use crate::debug::Unchecked;
use crate::error::{UnexpectedVariant, Variant};

/// A value slot that always holds exactly one of a success value `T` or an error value `E`.
///
/// An Outcome is built from the wrappers returned by [`ok`](super::ok) and [`err`](super::err)
/// and can only change variant by whole-object assignment ([`Outcome::set`] or `=`) or by
/// [`Outcome::swap`]. The live variant is dropped whenever it is replaced.
///
/// Reading the side that isn't held is a contract violation. Checked accessors panic on it, the
/// unchecked ones leave it undefined outside of debug builds. Callers are expected to check
/// [`is_ok`](Outcome::is_ok) or [`is_error`](Outcome::is_error) first, or to go through
/// [`try_value`](Outcome::try_value) and [`try_error`](Outcome::try_error).
///
/// # Examples
/// ```
/// # use vv::result::{err, ok, Outcome};
/// fn parse(s: &str) -> Outcome<u8, String> {
///     match s.parse::<u8>() {
///         Ok(val) => ok(val).into(),
///         Err(_) => err(format!("not a byte: {s}")).into(),
///     }
/// }
///
/// assert_eq!(*parse("12"), 12);
/// assert_eq!(parse("1200").error(), "not a byte: 1200");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Outcome<T, E> {
    Ok(T),
    Error(E),
}

impl<T, E> Outcome<T, E> {
    /// Explicit boolean conversion, `true` unless the error variant is held.
    pub const fn as_bool(&self) -> bool {
        self.is_ok()
    }

    /// Returns the variant currently held.
    pub const fn variant(&self) -> Variant {
        match self {
            Outcome::Ok(_) => Variant::Ok,
            Outcome::Error(_) => Variant::Error,
        }
    }

    /// Returns a reference to the success value.
    ///
    /// # Panics
    /// Panics if the error variant is held.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Outcome::Ok(val) => val,
            Outcome::Error(_) => panic!("{}", UnexpectedVariant { expected: Variant::Ok }),
        }
    }

    /// Returns a mutable reference to the success value.
    ///
    /// # Panics
    /// Panics if the error variant is held.
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match self {
            Outcome::Ok(val) => val,
            Outcome::Error(_) => panic!("{}", UnexpectedVariant { expected: Variant::Ok }),
        }
    }

    /// Consumes the Outcome and returns the success value.
    ///
    /// # Panics
    /// Panics if the error variant is held.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Outcome::Ok(val) => val,
            Outcome::Error(_) => panic!("{}", UnexpectedVariant { expected: Variant::Ok }),
        }
    }

    /// Returns a reference to the error value.
    ///
    /// # Panics
    /// Panics if the success variant is held.
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            Outcome::Error(error) => error,
            Outcome::Ok(_) => panic!("{}", UnexpectedVariant { expected: Variant::Error }),
        }
    }

    /// Returns a mutable reference to the error value.
    ///
    /// # Panics
    /// Panics if the success variant is held.
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        match self {
            Outcome::Error(error) => error,
            Outcome::Ok(_) => panic!("{}", UnexpectedVariant { expected: Variant::Error }),
        }
    }

    /// Consumes the Outcome and returns the error value.
    ///
    /// # Panics
    /// Panics if the success variant is held.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Outcome::Error(error) => error,
            Outcome::Ok(_) => panic!("{}", UnexpectedVariant { expected: Variant::Error }),
        }
    }

    /// Returns a reference to the success value without checking the variant in release builds.
    ///
    /// # Safety
    /// The success variant must be held.
    pub unsafe fn value_unchecked(&self) -> &T {
        // SAFETY: The caller guarantees that the success variant is held.
        unsafe { self.as_ref().ok().unreachable("Outcome holds a value") }
    }

    /// Returns a reference to the error value without checking the variant in release builds.
    ///
    /// # Safety
    /// The error variant must be held.
    pub unsafe fn error_unchecked(&self) -> &E {
        // SAFETY: The caller guarantees that the error variant is held.
        unsafe { self.as_ref().err().unreachable("Outcome holds an error") }
    }

    /// Returns a reference to the success value, or [`UnexpectedVariant`] if an error is held.
    pub const fn try_value(&self) -> Result<&T, UnexpectedVariant> {
        match self {
            Outcome::Ok(val) => Ok(val),
            Outcome::Error(_) => Err(UnexpectedVariant { expected: Variant::Ok }),
        }
    }

    /// Returns a reference to the error value, or [`UnexpectedVariant`] if a value is held.
    pub const fn try_error(&self) -> Result<&E, UnexpectedVariant> {
        match self {
            Outcome::Error(error) => Ok(error),
            Outcome::Ok(_) => Err(UnexpectedVariant { expected: Variant::Error }),
        }
    }

    /// Replaces the contents with a [`Success`] or [`Failure`] (or anything else that converts
    /// into an Outcome), dropping the variant that was held before.
    ///
    /// # Examples
    /// ```
    /// # use vv::result::{err, ok, Outcome};
    /// let mut res: Outcome<u8, &str> = ok(1).into();
    /// res.set(err("gone"));
    /// assert!(res.is_error());
    /// res.set(ok(2));
    /// assert_eq!(*res, 2);
    /// ```
    pub fn set<W: Into<Outcome<T, E>>>(&mut self, outcome: W) {
        *self = outcome.into();
    }

    /// Swaps the contents of two Outcomes, exchanging both their variants and their payloads.
    ///
    /// When both hold the same variant the payloads are swapped directly. Otherwise each payload
    /// is moved out of its slot before the other is moved in, so the two never overlap.
    pub const fn swap(&mut self, other: &mut Outcome<T, E>) {
        match (self, other) {
            (Outcome::Ok(a), Outcome::Ok(b)) => mem::swap(a, b),
            (Outcome::Error(a), Outcome::Error(b)) => mem::swap(a, b),
            (this, other) => mem::swap(this, other),
        }
    }

    /// Borrows whichever payload is held.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(val) => Outcome::Ok(val),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Mutably borrows whichever payload is held.
    pub const fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Ok(val) => Outcome::Ok(val),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Returns the success value as an [`Option`], discarding any error.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(val) => Some(val),
            Outcome::Error(_) => None,
        }
    }

    /// Returns the error value as an [`Option`], discarding any success value.
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Error(error) => Some(error),
            Outcome::Ok(_) => None,
        }
    }

    /// Transforms the success value with `f`, leaving an error untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Outcome::Ok(val) => Outcome::Ok(f(val)),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Transforms the error value with `f`, leaving a success value untouched.
    pub fn map_error<U, F: FnOnce(E) -> U>(self, f: F) -> Outcome<T, U> {
        match self {
            Outcome::Ok(val) => Outcome::Ok(val),
            Outcome::Error(error) => Outcome::Error(f(error)),
        }
    }

    /// Converts into the standard library's [`Result`], allowing `?` propagation.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

/// Builds a success Outcome from `value` if `condition` holds, otherwise an error Outcome from
/// `error`.
///
/// Both payloads are evaluated by the caller before the condition is looked at, and the unused
/// one is dropped. Use an `if` with [`ok`](super::ok) and [`err`](super::err) when building the
/// error is expensive.
///
/// # Examples
/// ```
/// # use vv::result::ok_if;
/// assert_eq!(*ok_if(true, 5, "err"), 5);
/// assert_eq!(ok_if(false, 5, "err").error(), &"err");
/// ```
pub fn ok_if<T, E>(condition: bool, value: T, error: E) -> Outcome<T, E> {
    if condition {
        Success(value).into()
    } else {
        Failure(error).into()
    }
}

impl<T, E> Deref for Outcome<T, E> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &Self::Target {
        self.value()
    }
}

impl<T, E> DerefMut for Outcome<T, E> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value_mut()
    }
}

impl<T, E> From<Success<T>> for Outcome<T, E> {
    fn from(value: Success<T>) -> Self {
        Outcome::Ok(value.0)
    }
}

impl<T, E> From<Failure<E>> for Outcome<T, E> {
    fn from(value: Failure<E>) -> Self {
        Outcome::Error(value.0)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(val) => Outcome::Ok(val),
            Err(error) => Outcome::Error(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Ok(val) => Ok(val),
            Outcome::Error(error) => Err(error),
        }
    }
}
