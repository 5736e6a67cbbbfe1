#![warn(missing_docs)]

#[cfg(test)]
pub mod drop;
pub mod error;
pub mod panic;
pub mod result;
