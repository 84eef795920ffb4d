use std::mem;
use std::ops::{Deref, DerefMut};

use derive_more::IsVariant;

use crate::debug::Unchecked;
use crate::error::EmptyOptional;

/// A marker for "no value", converted into an empty [`Optional`] of any type.
///
/// The only instance is [`NONE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Nothing;

/// The "no value" marker.
///
/// # Examples
/// ```
/// # use vv::option::{Optional, NONE};
/// let opt: Optional<u8> = NONE.into();
/// assert!(opt.is_none());
/// ```
pub const NONE: Nothing = Nothing;

/// A value slot that is either empty or holds exactly one `T`.
///
/// The contained value is dropped when the Optional is dropped, reset or reassigned. Cloning
/// clones the contained value, if any, through `T`'s own [`Clone`].
///
/// Accessing the value of an empty Optional is a contract violation. The checked accessors
/// ([`value`](Optional::value), [`Deref`], ...) panic on it, the unchecked ones
/// ([`value_unchecked`](Optional::value_unchecked), ...) leave it undefined outside of debug
/// builds.
///
/// # Time Complexity
/// Every operation is `O(1)`, excluding the cost of constructing, cloning or dropping `T`.
///
/// # Examples
/// ```
/// # use vv::option::{some, Optional, NONE};
/// let mut opt = some(1);
/// assert!(opt.is_some());
/// assert_eq!(*opt, 1);
///
/// opt = NONE.into();
/// assert!(opt.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Optional<T> {
    None,
    Some(T),
}

/// Creates an engaged [`Optional`] holding `value`.
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Creates an empty [`Optional`].
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

impl<T> Optional<T> {
    /// Creates an engaged Optional whose value is constructed in place by `construct`.
    ///
    /// # Examples
    /// ```
    /// # use vv::option::Optional;
    /// let opt = Optional::some_with(|| String::from("built"));
    /// assert_eq!(opt.value(), "built");
    /// ```
    pub fn some_with<F: FnOnce() -> T>(construct: F) -> Optional<T> {
        Optional::Some(construct())
    }

    /// Explicit boolean conversion, `true` if a value is held.
    pub const fn as_bool(&self) -> bool {
        self.is_some()
    }

    /// Returns a reference to the held value.
    ///
    /// # Panics
    /// Panics if the Optional is empty.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Optional::Some(val) => val,
            Optional::None => panic!("{}", EmptyOptional),
        }
    }

    /// Returns a mutable reference to the held value.
    ///
    /// # Panics
    /// Panics if the Optional is empty.
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match self {
            Optional::Some(val) => val,
            Optional::None => panic!("{}", EmptyOptional),
        }
    }

    /// Consumes the Optional and returns the held value.
    ///
    /// # Panics
    /// Panics if the Optional is empty.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Optional::Some(val) => val,
            Optional::None => panic!("{}", EmptyOptional),
        }
    }

    /// Returns a reference to the held value without checking for emptiness in release builds.
    ///
    /// # Safety
    /// The Optional must be engaged.
    pub unsafe fn value_unchecked(&self) -> &T {
        // SAFETY: The caller guarantees that a value is held.
        unsafe { self.as_ref().into_option().unreachable("Optional is engaged") }
    }

    /// Returns a mutable reference to the held value without checking for emptiness in release
    /// builds.
    ///
    /// # Safety
    /// The Optional must be engaged.
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        // SAFETY: The caller guarantees that a value is held.
        unsafe { self.as_mut().into_option().unreachable("Optional is engaged") }
    }

    /// Returns a reference to the held value, or [`EmptyOptional`] if there is none.
    pub const fn try_value(&self) -> Result<&T, EmptyOptional> {
        match self {
            Optional::Some(val) => Ok(val),
            Optional::None => Err(EmptyOptional),
        }
    }

    /// Drops the held value, if any, leaving the Optional empty. Resetting an empty Optional does
    /// nothing.
    pub fn reset(&mut self) {
        if self.is_some() {
            *self = Optional::None;
        }
    }

    /// Replaces the contents with `value`. Any previously held value is dropped.
    pub fn set(&mut self, value: T) {
        *self = Optional::Some(value);
    }

    /// Drops any previously held value, then constructs a new one in place with `construct` and
    /// returns a mutable reference to it.
    ///
    /// Unlike [`Optional::set`], the old value is gone before the new one exists. If `construct`
    /// panics the Optional is left empty.
    ///
    /// # Examples
    /// ```
    /// # use vv::option::some;
    /// let mut opt = some(vec![1]);
    /// opt.emplace(|| vec![2, 3]).push(4);
    /// assert_eq!(opt.value(), &[2, 3, 4]);
    /// ```
    pub fn emplace<F: FnOnce() -> T>(&mut self, construct: F) -> &mut T {
        self.reset();
        *self = Optional::Some(construct());

        // SAFETY: self was engaged on the line above.
        unsafe { self.value_unchecked_mut() }
    }

    /// Moves the held value out, leaving the Optional empty.
    pub const fn take(&mut self) -> Optional<T> {
        mem::replace(self, Optional::None)
    }

    /// Swaps the contents of two Optionals.
    ///
    /// When both are engaged the values themselves are swapped. When only one is engaged its
    /// value is moved across and the engagement moves with it. Two empty Optionals are left
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// # use vv::option::{none, some};
    /// let mut a = some('a');
    /// let mut b = none();
    /// a.swap(&mut b);
    /// assert!(a.is_none());
    /// assert_eq!(b.value(), &'a');
    /// ```
    pub fn swap(&mut self, other: &mut Optional<T>) {
        match (self.is_some(), other.is_some()) {
            (true, true) => {
                if let (Optional::Some(a), Optional::Some(b)) = (self, other) {
                    mem::swap(a, b);
                }
            }
            (true, false) => *other = self.take(),
            (false, true) => *self = other.take(),
            (false, false) => (),
        }
    }

    /// Borrows the held value, if any, as an `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(val) => Optional::Some(val),
            Optional::None => Optional::None,
        }
    }

    /// Mutably borrows the held value, if any, as an `Optional<&mut T>`.
    pub const fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Some(val) => Optional::Some(val),
            Optional::None => Optional::None,
        }
    }

    /// Converts into the standard library's [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Deref for Optional<T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &Self::Target {
        self.value()
    }
}

impl<T> DerefMut for Optional<T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value_mut()
    }
}

impl<T> From<Nothing> for Optional<T> {
    fn from(_: Nothing) -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(val) => Optional::Some(val),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(val) => Some(val),
            Optional::None => None,
        }
    }
}
