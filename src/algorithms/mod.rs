//! Small standalone algorithms, mostly operating over slices or the collections in this crate.

#[cfg(feature = "graph")]
pub mod graph;
#[cfg(feature = "numeric")]
pub mod numeric;
#[cfg(feature = "search")]
pub mod search;
