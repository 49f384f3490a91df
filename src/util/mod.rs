pub mod panic;
#[cfg(feature = "string")]
pub mod result;
