//! A last-in first-out adapter over the list's node representation.

use std::fmt::{Debug, Formatter};

use crate::error::{Error, Result};
use crate::list::Node;

/// The `Stack` is a last-in first-out container. It reuses the list's
/// node shape but keeps its own chain: `top` owns the most recently
/// pushed node, whose `next` owns the one below it, and so on. The
/// back-reference of the shared node type stays unused here.
///
/// # Examples
///
/// ```
/// use listkit::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(10);
/// stack.push(20);
/// stack.push(30);
///
/// assert_eq!(stack.pop(), Ok(30));
/// assert_eq!(stack.pop(), Ok(20));
/// assert_eq!(stack.pop(), Ok(10));
/// assert!(stack.pop().is_err());
/// ```
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    /// Create an empty `Stack`.
    #[inline]
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Returns `true` if the `Stack` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements on the `Stack`. An empty stack
    /// has length 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Pushes an element on top of the stack.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push(&mut self, element: T) {
        let mut node = Node::new(element);
        node.next = self.top.take();
        self.top = Some(node);
        self.len += 1;
    }

    /// Removes the top element and returns it, or `Err(EmptyContainer)`
    /// if the stack is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop(&mut self) -> Result<T> {
        let mut node = self.top.take().ok_or(Error::EmptyContainer)?;
        self.top = node.next.take();
        self.len -= 1;
        Ok(Node::into_element(node))
    }

    /// Provides a reference to the top element, or
    /// `Err(EmptyContainer)` if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::{Error, Stack};
    ///
    /// let mut stack = Stack::new();
    /// assert_eq!(stack.top(), Err(Error::EmptyContainer));
    ///
    /// stack.push(1);
    /// assert_eq!(stack.top(), Ok(&1));
    /// ```
    #[inline]
    pub fn top(&self) -> Result<&T> {
        self.top
            .as_deref()
            .map(|node| &node.element)
            .ok_or(Error::EmptyContainer)
    }

    /// Provides a mutable reference to the top element, or
    /// `Err(EmptyContainer)` if the stack is empty.
    #[inline]
    pub fn top_mut(&mut self) -> Result<&mut T> {
        self.top
            .as_deref_mut()
            .map(|node| &mut node.element)
            .ok_or(Error::EmptyContainer)
    }

    /// Removes all elements from the `Stack`.
    #[inline]
    pub fn clear(&mut self) {
        // Release nodes one at a time so a long chain cannot overflow the
        // stack through recursive `Box` drops.
        while self.pop().is_ok() {}
    }
}

impl<T: Debug> Debug for Stack<T> {
    /// Renders top first.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        let mut node = self.top.as_deref();
        while let Some(current) = node {
            list.entry(&current.element);
            node = current.next.as_deref();
        }
        list.finish()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for Stack<T> {
    /// Pushes the elements in iteration order, so the last one ends up
    /// on top.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push(item));
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

// The shared node type carries a raw back-reference; the stack never
// links it, and the chain is exclusively owned through `top`.
unsafe impl<T: Send> Send for Stack<T> {}

unsafe impl<T: Sync> Sync for Stack<T> {}
