//! A first-in first-out adapter over the list's node representation.

use std::fmt::{Debug, Formatter};
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::list::Node;

/// The `Queue` is a first-in first-out container. It reuses the list's
/// node shape and maintains the links the same way the list does:
/// `front` owns the chain, `back` is a lookup-only reference to the
/// last node, and every node's back-reference points at its
/// predecessor.
///
/// # Examples
///
/// ```
/// use listkit::Queue;
///
/// let mut queue = Queue::new();
/// queue.push(100);
/// queue.push(200);
/// queue.push(300);
///
/// assert_eq!(queue.pop(), Ok(100));
/// assert_eq!(queue.pop(), Ok(200));
/// assert_eq!(queue.pop(), Ok(300));
/// assert!(queue.pop().is_err());
/// ```
pub struct Queue<T> {
    front: Option<Box<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    len: usize,
}

impl<T> Queue<T> {
    /// Create an empty `Queue`.
    #[inline]
    pub fn new() -> Self {
        Self {
            front: None,
            back: None,
            len: 0,
        }
    }

    /// Returns `true` if the `Queue` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the `Queue`. An empty queue
    /// has length 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Appends an element at the back of the queue.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push(&mut self, element: T) {
        let mut node = Node::new(element);
        let node_ptr = NonNull::from(node.as_mut());
        match self.back {
            Some(mut back) => {
                node.prev = Some(back);
                // SAFETY: `back` points at the last node of the chain the
                // queue exclusively owns through `front`.
                unsafe { back.as_mut().next = Some(node) };
            }
            None => self.front = Some(node),
        }
        self.back = Some(node_ptr);
        self.len += 1;
    }

    /// Removes the front element and returns it, or
    /// `Err(EmptyContainer)` if the queue is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop(&mut self) -> Result<T> {
        let mut node = self.front.take().ok_or(Error::EmptyContainer)?;
        self.front = node.next.take();
        match self.front.as_deref_mut() {
            Some(front) => front.prev = None,
            None => self.back = None,
        }
        self.len -= 1;
        Ok(Node::into_element(node))
    }

    /// Provides a reference to the front element, or
    /// `Err(EmptyContainer)` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::{Error, Queue};
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.front(), Err(Error::EmptyContainer));
    ///
    /// queue.push(1);
    /// assert_eq!(queue.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.front
            .as_deref()
            .map(|node| &node.element)
            .ok_or(Error::EmptyContainer)
    }

    /// Provides a mutable reference to the front element, or
    /// `Err(EmptyContainer)` if the queue is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.front
            .as_deref_mut()
            .map(|node| &mut node.element)
            .ok_or(Error::EmptyContainer)
    }

    /// Provides a reference to the back element, or
    /// `Err(EmptyContainer)` if the queue is empty.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        let back = self.back.ok_or(Error::EmptyContainer)?;
        // SAFETY: `back` points at the last node of the chain, which
        // stays alive for as long as the queue owns its front.
        Ok(unsafe { &back.as_ref().element })
    }

    /// Provides a mutable reference to the back element, or
    /// `Err(EmptyContainer)` if the queue is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        let mut back = self.back.ok_or(Error::EmptyContainer)?;
        // SAFETY: `back` points at the last node of the chain, and the
        // exclusive borrow of `self` makes this the only live reference.
        Ok(unsafe { &mut back.as_mut().element })
    }

    /// Removes all elements from the `Queue`.
    #[inline]
    pub fn clear(&mut self) {
        // Release nodes one at a time so a long chain cannot overflow the
        // stack through recursive `Box` drops.
        while self.pop().is_ok() {}
    }
}

impl<T: Debug> Debug for Queue<T> {
    /// Renders front first.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        let mut node = self.front.as_deref();
        while let Some(current) = node {
            list.entry(&current.element);
            node = current.next.as_deref();
        }
        list.finish()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push(item));
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

// `back` and the node back-references are plain lookups into the chain
// the queue exclusively owns through `front`.
unsafe impl<T: Send> Send for Queue<T> {}

unsafe impl<T: Sync> Sync for Queue<T> {}
