//! A module containing [`BoundedString`] and associated types.
//!
//! Currently, the only other included type is [`CapacityExceeded`], the error returned when an
//! operation would grow a BoundedString past its capacity.

mod error;
mod string;

pub use error::*;
pub use string::*;
