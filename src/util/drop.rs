//! Helper types for tests that need to observe drops or exercise zero-sized elements.

use std::cell::Cell;
use std::rc::Rc;

/// A zero-sized element type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Unit;

/// An element which increments a shared counter when dropped. Clones share the counter, so the
/// counter ends up holding the total number of drops across all clones.
#[derive(Debug, Clone)]
pub struct DropCounter(pub Rc<Cell<usize>>);

impl DropCounter {
    /// Creates a new counter starting at zero.
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far.
    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl PartialEq for DropCounter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
