//! Scope-exit actions.
//!
//! A [`Defer`] guard holds a closure and runs it exactly once when the guard is dropped, whether
//! the scope is left normally or by unwinding. There is deliberately no way to cancel a guard
//! once it is armed.

use std::fmt::{self, Debug, Formatter};
use std::mem::ManuallyDrop;

/// A guard that runs an action when it goes out of scope.
///
/// # Examples
/// ```
/// # use vv::defer::Defer;
/// # use std::cell::Cell;
/// let ran = Cell::new(false);
/// {
///     let _guard = Defer::new(|| ran.set(true));
///     assert!(!ran.get());
/// }
/// assert!(ran.get());
/// ```
#[must_use = "the action runs immediately if the guard is not bound to a variable"]
pub struct Defer<F: FnOnce()> {
    action: ManuallyDrop<F>,
}

impl<F: FnOnce()> Defer<F> {
    /// Arms a new guard that will run `action` when dropped.
    pub const fn new(action: F) -> Defer<F> {
        Defer {
            action: ManuallyDrop::new(action),
        }
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        // SAFETY: The action is only taken here, and drop runs at most once for a value.
        let action = unsafe { ManuallyDrop::take(&mut self.action) };
        action();
    }
}

impl<F: FnOnce()> Debug for Defer<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defer").finish_non_exhaustive()
    }
}

/// Runs the provided statements when the enclosing scope ends.
///
/// Multiple uses within one scope run in reverse order of declaration, like any other locals.
///
/// # Examples
/// ```
/// # use vv::defer;
/// # use std::cell::RefCell;
/// let log = RefCell::new(Vec::new());
/// {
///     defer!(log.borrow_mut().push("first"));
///     defer!(log.borrow_mut().push("second"));
/// }
/// assert_eq!(*log.borrow(), ["second", "first"]);
/// ```
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _defer_guard = $crate::defer::Defer::new(|| { $($body)*; });
    };
}
