//! Collection types with a fixed, compile-time capacity.
//!
//! # Method
//! Applicable types here implement [`Deref`](std::ops::Deref) to their borrowed counterpart, which
//! saves me from writing some of the more repetitive functionality.

#[cfg(feature = "string")]
pub mod string;
