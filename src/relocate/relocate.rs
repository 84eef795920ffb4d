use std::mem::{self, MaybeUninit};
use std::ptr;

use crate::defer::Defer;

/// Returns whether relocating a `T` is a plain bitwise copy that leaves nothing behind to clean
/// up, i.e. whether `T` has no drop glue.
///
/// This is evaluated at compile time, so branches on it are removed entirely. Like
/// [`mem::needs_drop`] it may be conservative and report `false` for some types that could be
/// copied safely.
///
/// # Examples
/// ```
/// # use vv::relocate::is_trivially_relocatable;
/// assert!(is_trivially_relocatable::<u64>());
/// assert!(is_trivially_relocatable::<(u8, char)>());
/// assert!(!is_trivially_relocatable::<String>());
/// ```
pub const fn is_trivially_relocatable<T>() -> bool {
    !mem::needs_drop::<T>()
}

/// Relocates the value in `src` into a new `To`, converting it with [`From`].
///
/// The value is built in a fresh buffer that is suitably sized and aligned for `To` and returned
/// by value.
///
/// # Safety
/// `src` must be initialized. After this call it is logically uninitialized: the caller must not
/// read from it or drop it again until it has been written to.
///
/// # Examples
/// ```
/// # use vv::relocate::relocate;
/// # use std::mem::MaybeUninit;
/// let mut slot = MaybeUninit::new(7_u16);
/// // SAFETY: slot is initialized and never read again.
/// let wide: u64 = unsafe { relocate(&mut slot) };
/// assert_eq!(wide, 7);
/// ```
pub unsafe fn relocate<To, Src>(src: &mut MaybeUninit<Src>) -> To
where
    To: From<Src>,
{
    let mut dest = MaybeUninit::<To>::uninit();

    // SAFETY: The caller guarantees that src is initialized. relocate_at initializes dest.
    unsafe {
        relocate_at(&mut dest, src);
        dest.assume_init()
    }
}

/// Relocates the value in `src` into the uninitialized storage `dest`, converting it with
/// [`From`], and returns a reference to the new value.
///
/// Any value already in `dest` is overwritten without being dropped.
///
/// # Safety
/// `src` must be initialized. After this call it is logically uninitialized.
pub unsafe fn relocate_at<'a, To, Src>(
    dest: &'a mut MaybeUninit<To>,
    src: &mut MaybeUninit<Src>,
) -> &'a mut To
where
    To: From<Src>,
{
    // SAFETY: The caller guarantees that src is initialized and treats it as vacated afterwards,
    // so ownership of the value moves into the conversion.
    let value = unsafe { src.assume_init_read() };
    dest.write(To::from(value))
}

/// Relocates the value in `src` by constructing a `To` from a mutable borrow of it, then dropping
/// the source in place.
///
/// # Safety
/// `src` must be initialized. After this call it is logically uninitialized. This holds even if
/// `construct` panics: the source has already been dropped by the time the panic leaves this
/// function.
pub unsafe fn relocate_with<To, Src, F>(src: &mut MaybeUninit<Src>, construct: F) -> To
where
    F: FnOnce(&mut Src) -> To,
{
    let mut dest = MaybeUninit::<To>::uninit();

    // SAFETY: The caller guarantees that src is initialized. relocate_at_with initializes dest.
    unsafe {
        relocate_at_with(&mut dest, src, construct);
        dest.assume_init()
    }
}

/// Relocates the value in `src` into the uninitialized storage `dest` by constructing a `To` from
/// a mutable borrow of it, then dropping the source in place. Returns a reference to the new
/// value.
///
/// The source is dropped exactly once, after `construct` returns or while it unwinds. For
/// [trivially relocatable](is_trivially_relocatable) sources nothing is dropped.
///
/// Any value already in `dest` is overwritten without being dropped.
///
/// # Safety
/// `src` must be initialized. After this call it is logically uninitialized, whether or not
/// `construct` panics.
///
/// # Examples
/// ```
/// # use vv::relocate::relocate_at_with;
/// # use std::mem::{self, MaybeUninit};
/// let mut src = MaybeUninit::new(vec![1, 2, 3]);
/// let mut dest = MaybeUninit::<Box<[i32]>>::uninit();
///
/// // SAFETY: src is initialized and never read again.
/// let moved = unsafe {
///     relocate_at_with(&mut dest, &mut src, |v| mem::take(v).into_boxed_slice())
/// };
/// assert_eq!(&**moved, &[1, 2, 3]);
/// # unsafe { dest.assume_init_drop() };
/// ```
pub unsafe fn relocate_at_with<'a, To, Src, F>(
    dest: &'a mut MaybeUninit<To>,
    src: &mut MaybeUninit<Src>,
    construct: F,
) -> &'a mut To
where
    F: FnOnce(&mut Src) -> To,
{
    let src = src.as_mut_ptr();

    if is_trivially_relocatable::<Src>() {
        // SAFETY: The caller guarantees that src is initialized, and there is nothing to drop.
        return dest.write(construct(unsafe { &mut *src }));
    }

    let _destroy = Defer::new(move || {
        // SAFETY: The guard owns a copy of the pointer. The borrow handed to construct has ended
        // by the time the guard runs, and the caller treats src as vacated from here on, so it is
        // dropped exactly once.
        unsafe { ptr::drop_in_place(src) }
    });

    // SAFETY: The caller guarantees that src is initialized.
    dest.write(construct(unsafe { &mut *src }))
}
