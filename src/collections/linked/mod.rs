//! Linked collection types. Currently this is only [`SinglyLinkedList`], a list with links in one
//! direction that can act as a stack or a queue.

pub mod list;

#[doc(inline)]
pub use list::SinglyLinkedList;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
