use derive_more::{Display, Error};

/// The error produced when constructing or appending to a
/// [`BoundedString`](super::BoundedString) would require more than its capacity.
///
/// `requested` is the total length the string would have had, not the length of the input alone.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("requested length {requested} exceeds capacity {cap}")]
pub struct CapacityExceeded {
    pub requested: usize,
    pub cap: usize,
}
