//! Relocation of values between storage slots.
//!
//! Relocating a value moves it out of a source slot into a destination and leaves the source
//! vacated, so it must not be read or dropped again. Slots are represented as [`MaybeUninit`]
//! storage, the same way contiguous buffers keep their spare capacity.
//!
//! Two flavours are provided:
//! - [`relocate`] and [`relocate_at`] convert the source value with [`From`]. Ownership of the
//!   value passes to the conversion, so the source's destructor is the conversion's concern.
//! - [`relocate_with`] and [`relocate_at_with`] construct the target from a borrow of the source
//!   and then drop the source in place. A [`Defer`](crate::defer::Defer) guard drops the source
//!   exactly once even if construction panics. Types that are
//!   [trivially relocatable](is_trivially_relocatable) skip the guard because there is nothing to
//!   drop.
//!
//! [`MaybeUninit`]: std::mem::MaybeUninit

mod relocate;

pub use relocate::*;
