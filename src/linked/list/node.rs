use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box so that take_node can move the value back out of the
// heap when a node is unlinked.

#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Releases the node's allocation, moving the node out to the caller.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: Every NodePtr originates from from_node's Box allocation, and the owning list
        // never hands the same node to take_node twice.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is kept alive by its owning list, which outlives 'a at every call
        // site.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value, and the caller holds the list mutably.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev(&self) -> Link<T> {
        // SAFETY: The node is kept alive by its owning list.
        unsafe { (*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is kept alive by its owning list, which is borrowed mutably at every
        // call site.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next(&self) -> Link<T> {
        // SAFETY: The node is kept alive by its owning list.
        unsafe { (*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is kept alive by its owning list, which is borrowed mutably at every
        // call site.
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

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
