/// A success payload on its way into an [`Outcome`](super::Outcome). Created with [`ok`].
///
/// A Success has no use of its own, it only tells the conversion into an Outcome which variant
/// to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a Success does nothing until converted into an Outcome"]
pub struct Success<T>(pub(super) T);

/// An error payload on its way into an [`Outcome`](super::Outcome). Created with [`err`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a Failure does nothing until converted into an Outcome"]
pub struct Failure<E>(pub(super) E);

/// Wraps `value` as the success variant of an [`Outcome`](super::Outcome).
///
/// # Examples
/// ```
/// # use vv::result::{ok, Outcome};
/// let res: Outcome<u8, &str> = ok(1).into();
/// assert!(res.is_ok());
/// ```
pub const fn ok<T>(value: T) -> Success<T> {
    Success(value)
}

/// Wraps `error` as the error variant of an [`Outcome`](super::Outcome).
///
/// # Examples
/// ```
/// # use vv::result::{err, Outcome};
/// let res: Outcome<u8, &str> = err("failed").into();
/// assert!(res.is_error());
/// assert_eq!(res.error(), &"failed");
/// ```
pub const fn err<E>(error: E) -> Failure<E> {
    Failure(error)
}
