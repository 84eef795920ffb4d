//! This crate provides two small value containers, [`Optional`](option::Optional) and
//! [`Outcome`](result::Outcome), along with the low-level helpers that sit underneath that kind of
//! type: relocating values between storage slots and running actions at scope exit.
//!
//! # Purpose
//! An optional and a result are the first two types anyone writes when putting together their own
//! library of basics. Writing them helps me to understand what the standard library's [`Option`]
//! and [`Result`] are really promising, especially around when values are dropped and what happens
//! to a slot after its contents have been moved out.
//!
//! # Method
//! Both containers are plain enums, so the compiler keeps track of which variant is alive and
//! drops exactly that one. The interesting parts are the places where the order of construction
//! and destruction is visible to the caller:
//! - [`Optional::emplace`](option::Optional::emplace) drops the old value before building the new
//!   one.
//! - [`Optional::swap`](option::Optional::swap) and [`Outcome::swap`](result::Outcome::swap) move
//!   values across when the two sides don't hold the same kind of thing.
//! - The [`relocate`] module does by hand what enums do automatically, for code that manages its
//!   own [`MaybeUninit`](std::mem::MaybeUninit) storage.
//!
//! # Error Handling
//! There are two kinds of failure here. Reading a value that isn't there is a bug in the caller:
//! the checked accessors panic and the `unsafe` unchecked accessors only check in debug builds (or
//! with the `debug-checks` feature, see [`debug`]). Everything else is a represented failure, and
//! [`Outcome`](result::Outcome) is the way to return one. For callers who would rather not panic,
//! the `try_*` accessors return strongly typed errors from [`error`].
//!
//! # Features
//! - `option`: the [`option`] module. Enabled by default.
//! - `result`: the [`result`] module. Enabled by default.
//! - `debug-checks`: keep contract checks on in release builds.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod debug;
pub mod defer;
pub mod error;
#[cfg(feature = "option")]
pub mod option;
pub mod relocate;
#[cfg(feature = "result")]
pub mod result;

#[cfg(test)]
pub(crate) mod util;
