use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A copyable pointer to a heap allocated [`Node`], owned by exactly one list.
///
/// Nodes are allocated through [`Box`], so that [`take_node`](NodePtr::take_node) can move the
/// value back off the heap. The lifetimes of returned references aren't tied to the pointer, it is
/// up to the list to only hand them out while it is borrowed accordingly.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims ownership of the node, deallocating it.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak and each node is only taken once, because the
        // list forgets about a node before or while taking it.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is allocated and initialized for as long as it is part of a list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As for value, with the list's mutable borrow preventing aliasing.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is allocated and initialized for as long as it is part of a list.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Links are only modified through a mutable borrow of the owning list.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
