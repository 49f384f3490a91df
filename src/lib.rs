//! This crate is my attempt at a fixed-capacity string type, one that never allocates.
//!
//! # Purpose
//! [`BoundedString`](collections::string::BoundedString) holds up to `N` bytes of text inline,
//! where `N` is a const generic. There is no heap allocation and the capacity never changes, which
//! makes it handy for short messages and identifiers with a known upper bound.
//!
//! # Error Handling
//! Overflowing the capacity is an error that the caller should usually see, so the primary methods
//! return a [`Result`] with a [`CapacityExceeded`](collections::string::CapacityExceeded) error
//! rather than panicking. The error is a plain struct that implements
//! [`Error`](std::error::Error), derived with `derive_more`. For the cases where overflowing is
//! definitely a bug, the `+=` operator is provided and panics with the same message instead.
//!
//! Failed operations never leave a half-written string behind. The capacity check always happens
//! before any bytes are copied.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
