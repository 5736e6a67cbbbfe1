//! A pair of values with a manually managed "assigned" flag, for slots in fixed-size tables where
//! a default placeholder needs to be told apart from a real entry.

mod pair;

pub use pair::*;
