use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

/// A copyable handle to a heap-allocated [`Node`]. Nodes are created and destroyed through
/// [`Box`], which permits moving the value back out of the heap when a node is unlinked.
///
/// The handle itself makes no aliasing promises; the list is responsible for never holding a
/// reference into a node while relinking it.
pub(crate) struct NodeRef<T>(NonNull<Node<T>>);

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

impl<T> NodeRef<T> {
    /// Allocates the node on the heap and returns a handle to it.
    pub fn alloc(node: Node<T>) -> NodeRef<T> {
        NodeRef(Box::into_non_null(Box::new(node)))
    }

    /// Frees the node, returning it by value.
    ///
    /// # Safety
    /// The handle (and every copy of it) must never be used again.
    pub unsafe fn dealloc(self) -> Node<T> {
        // SAFETY: The pointer came from Box::into_non_null and, per the caller's promise, no other
        // handle will touch it after this.
        unsafe { *Box::from_non_null(self.0) }
    }

    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is alive for as long as the list holds this handle.
        unsafe { &self.0.as_ref().value }
    }

    pub const fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: The node is alive, and the list only hands out one mutable reference at a time.
        unsafe { &mut self.0.as_mut().value }
    }

    pub const fn prev(&self) -> Link<T> {
        // SAFETY: The node is alive for as long as the list holds this handle.
        unsafe { self.0.as_ref().prev }
    }

    pub const fn next(&self) -> Link<T> {
        // SAFETY: The node is alive for as long as the list holds this handle.
        unsafe { self.0.as_ref().next }
    }

    pub const fn set_prev(&mut self, link: Link<T>) {
        // SAFETY: The node is alive; links are plain data, so overwriting one is always sound.
        unsafe { self.0.as_mut().prev = link; }
    }

    pub const fn set_next(&mut self, link: Link<T>) {
        // SAFETY: The node is alive; links are plain data, so overwriting one is always sound.
        unsafe { self.0.as_mut().next = link; }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
