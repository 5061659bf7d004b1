//! Core traits.

mod caller;

pub use caller::Caller;
