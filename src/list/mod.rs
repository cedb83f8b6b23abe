use std::fmt::{Debug, Formatter};
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::{IntoIter, Iter, IterMut};

pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list with owned nodes. It provides *O*(1)
/// access to both ends and *O*(*n*) positional access, with bidirectional
/// links maintained internally.
///
/// The `List` contains:
/// - a `head` that owns the first node (and, transitively, the whole chain);
/// - a `tail` back-reference to the last node, used for lookups only;
/// - a length counter `len`.
///
/// Fallible operations return [`Result`] and leave the list untouched on
/// failure; see [`Error`] for the failure kinds.
pub struct List<T> {
    head: Option<Box<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
}

/// A single element slot in the chain.
///
/// `next` owns the successor node; `prev` is a lookup-only back-reference
/// and is never used to free memory (freeing always happens through the
/// forward-owning chain). The stack and queue adapters reuse this node
/// shape with their own storage.
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: Option<Box<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    /// Create an unlinked node holding `element`.
    pub(crate) fn new(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            next: None,
            prev: None,
        })
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

// private methods
impl<T> List<T> {
    /// Walk `index` steps from the head, or return `None` when the walk
    /// falls off the end of the chain.
    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref();
        for _ in 0..index {
            node = node?.next.as_deref();
        }
        node
    }

    /// Like [`List::node_at`], but yields a mutable node.
    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut();
        for _ in 0..index {
            node = node?.next.as_deref_mut();
        }
        node
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use listkit::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`. An empty list has length 0.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.len(), 0);
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`. Calling it on an already
    /// empty list is a no-op.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// list.clear();
    /// assert!(list.is_empty());
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        // Release nodes one at a time so a long chain cannot overflow the
        // stack through recursive `Box` drops.
        while self.pop_front().is_ok() {}
    }

    /// Provides a reference to the front element, or
    /// `Err(EmptyContainer)` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), Err(Error::EmptyContainer));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.head
            .as_deref()
            .map(|node| &node.element)
            .ok_or(Error::EmptyContainer)
    }

    /// Provides a mutable reference to the front element, or
    /// `Err(EmptyContainer)` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([1, 2]);
    ///
    /// *list.front_mut().unwrap() = 5;
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.head
            .as_deref_mut()
            .map(|node| &mut node.element)
            .ok_or(Error::EmptyContainer)
    }

    /// Provides a reference to the back element, or
    /// `Err(EmptyContainer)` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), Err(Error::EmptyContainer));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T> {
        let tail = self.tail.ok_or(Error::EmptyContainer)?;
        // SAFETY: `tail` points at the last node of the chain, which stays
        // alive for as long as the list owns its head.
        Ok(unsafe { &tail.as_ref().element })
    }

    /// Provides a mutable reference to the back element, or
    /// `Err(EmptyContainer)` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([1, 2]);
    ///
    /// *list.back_mut().unwrap() = 5;
    /// assert_eq!(list.back(), Ok(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        let mut tail = self.tail.ok_or(Error::EmptyContainer)?;
        // SAFETY: `tail` points at the last node of the chain, and the
        // exclusive borrow of `self` makes this the only live reference.
        Ok(unsafe { &mut tail.as_mut().element })
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, element: T) {
        let mut node = Node::new(element);
        match self.head.take() {
            Some(mut head) => {
                head.prev = Some(NonNull::from(node.as_mut()));
                node.next = Some(head);
            }
            None => self.tail = Some(NonNull::from(node.as_mut())),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes the first element and returns it, or `Err(EmptyContainer)`
    /// if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let mut node = self.head.take().ok_or(Error::EmptyContainer)?;
        self.head = node.next.take();
        match self.head.as_deref_mut() {
            Some(front) => front.prev = None,
            None => self.tail = None,
        }
        self.len -= 1;
        Ok(Node::into_element(node))
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, element: T) {
        let mut node = Node::new(element);
        let node_ptr = NonNull::from(node.as_mut());
        match self.tail {
            Some(mut tail) => {
                node.prev = Some(tail);
                // SAFETY: `tail` points at the last node of the owned
                // chain, and the exclusive borrow of `self` makes this the
                // only live reference to it.
                unsafe { tail.as_mut().next = Some(node) };
            }
            None => self.head = Some(node),
        }
        self.tail = Some(node_ptr);
        self.len += 1;
    }

    /// Removes the last element from the list and returns it, or
    /// `Err(EmptyContainer)` if it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), Err(Error::EmptyContainer));
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::EmptyContainer)?;
        // SAFETY: `tail` points at the last node of the owned chain.
        let node = match unsafe { tail.as_ref().prev } {
            Some(mut prev) => {
                self.tail = Some(prev);
                // SAFETY: `prev` is the old tail's back-reference, so it
                // points at a live node of this chain whose `next` owns
                // the old tail.
                unsafe { prev.as_mut().next.take() }
            }
            None => {
                self.tail = None;
                self.head.take()
            }
        };
        self.len -= 1;
        let node = node.expect("tail must be reachable through the owning chain");
        Ok(Node::into_element(node))
    }

    /// Adds an element at the given index in the list. Inserting at
    /// `index == len` appends; anything beyond that is
    /// `Err(IndexOutOfRange)`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([1, 2, 4, 5]);
    ///
    /// list.insert_at(2, 99).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 99, 4, 5]);
    ///
    /// list.insert_at(5, 6).unwrap(); // append
    /// assert_eq!(list.back(), Ok(&6));
    ///
    /// assert!(list.insert_at(42, 0).is_err());
    /// ```
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        if index == 0 {
            self.push_front(element);
            return Ok(());
        }
        if index == self.len {
            self.push_back(element);
            return Ok(());
        }
        let mut node = Node::new(element);
        let node_ptr = NonNull::from(node.as_mut());
        // `0 < index < len`, so the predecessor and the displaced node
        // both exist.
        let prev = self
            .node_at_mut(index - 1)
            .expect("predecessor exists after the bounds check");
        node.prev = Some(NonNull::from(&mut *prev));
        node.next = prev.next.take();
        if let Some(next) = node.next.as_deref_mut() {
            next.prev = Some(node_ptr);
        }
        prev.next = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Removes the element at the given index and returns it, or
    /// `Err(IndexOutOfRange)` when `index >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(list.remove(2), Ok(3));
    /// assert_eq!(list.to_vec(), vec![1, 2, 4, 5]);
    ///
    /// assert!(list.remove(4).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }
        if index == 0 {
            return self.pop_front();
        }
        if index == self.len - 1 {
            return self.pop_back();
        }
        // `0 < index < len - 1`, so the target sits between two live nodes.
        let prev = self
            .node_at_mut(index - 1)
            .expect("predecessor exists after the bounds check");
        let prev_ptr = NonNull::from(&mut *prev);
        let mut node = prev
            .next
            .take()
            .expect("target node exists after the bounds check");
        prev.next = node.next.take();
        if let Some(next) = prev.next.as_deref_mut() {
            next.prev = Some(prev_ptr);
        }
        self.len -= 1;
        Ok(Node::into_element(node))
    }

    /// Provides a reference to the element at the given index, or
    /// `Err(IndexOutOfRange)` when `index >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.get(1), Ok(&2));
    /// assert!(list.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.node_at(index)
            .map(|node| &node.element)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Provides a mutable reference to the element at the given index, or
    /// `Err(IndexOutOfRange)` when `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// *list.get_mut(1).unwrap() *= 5;
    /// assert_eq!(list.get(1), Ok(&10));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.node_at_mut(index)
            .map(|node| &mut node.element)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Overwrites the element at the given index, or returns
    /// `Err(IndexOutOfRange)` when `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.set(0, 9).unwrap();
    /// assert_eq!(list.to_vec(), vec![9, 2, 3]);
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<()> {
        *self.get_mut(index)? = element;
        Ok(())
    }

    /// Swaps the element values (not the nodes) at the two positions, or
    /// returns `Err(IndexOutOfRange)` if either index is invalid. A no-op
    /// when `i == j`.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.swap(0, 2).unwrap();
    /// assert_eq!(list.to_vec(), vec![3, 2, 1]);
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        if i >= self.len {
            return Err(self.out_of_range(i));
        }
        if j >= self.len {
            return Err(self.out_of_range(j));
        }
        if i == j {
            return Ok(());
        }
        // Both pointers come from one walk; a second walk from the head
        // would reborrow the nodes already passed and invalidate the
        // first pointer.
        let (first, second) = if i < j { (i, j) } else { (j, i) };
        let mut a = NonNull::from(
            self.node_at_mut(first)
                .expect("node exists after the bounds checks"),
        );
        let mut b = a;
        for _ in first..second {
            // SAFETY: `second < len`, so every node on this walk has a
            // successor in the owning chain.
            b = unsafe {
                NonNull::from(
                    b.as_mut()
                        .next
                        .as_deref_mut()
                        .expect("node exists after the bounds checks"),
                )
            };
        }
        // SAFETY: `i != j`, so `a` and `b` point at two distinct nodes
        // of the chain and their elements do not overlap.
        unsafe { std::ptr::swap(&mut a.as_mut().element, &mut b.as_mut().element) };
        Ok(())
    }

    /// Reverses the list in place, flipping every node's links and
    /// swapping head and tail. No allocation is performed.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![3, 2, 1]);
    ///
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let mut chain = self.head.take();
        // The old head becomes the new tail.
        self.tail = chain.as_deref_mut().map(NonNull::from);
        let mut reversed: Option<Box<Node<T>>> = None;
        while let Some(mut node) = chain {
            chain = node.next.take();
            let node_ptr = NonNull::from(node.as_mut());
            if let Some(front) = reversed.as_deref_mut() {
                front.prev = Some(node_ptr);
            }
            node.next = reversed.take();
            node.prev = None;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Provides a forward iterator. Each call starts fresh at the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list.to_vec(), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    pub(crate) fn front_node(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub(crate) fn front_node_mut(&mut self) -> Option<&mut Node<T>> {
        self.head.as_deref_mut()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// `tail` and the node back-references are plain lookups into the chain the
// list exclusively owns, so the list is as thread-compatible as `T` itself.
unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::List;
    use std::cell::RefCell;
    use std::fmt::Debug;

    fn assert_links<T>(list: &List<T>) {
        // Walk the owning chain and check every back-reference, the tail
        // lookup and the length counter against it.
        let mut count = 0;
        let mut prev: Option<&super::Node<T>> = None;
        let mut node = list.head.as_deref();
        while let Some(current) = node {
            match prev {
                Some(prev) => assert_eq!(
                    current.prev.map(|p| p.as_ptr() as *const _),
                    Some(prev as *const _)
                ),
                None => assert!(current.prev.is_none()),
            }
            count += 1;
            prev = Some(current);
            node = current.next.as_deref();
        }
        assert_eq!(list.len(), count);
        match prev {
            Some(last) => {
                assert!(last.next.is_none());
                assert_eq!(
                    list.tail.map(|t| t.as_ptr() as *const _),
                    Some(last as *const _)
                );
            }
            None => assert!(list.tail.is_none()),
        }
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), Err(Error::EmptyContainer));
        assert_eq!(list.back(), Err(Error::EmptyContainer));
        assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
        assert_eq!(list.pop_back(), Err(Error::EmptyContainer));

        list.push_back(1);
        assert_links(&list);
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(Error::EmptyContainer));
        assert!(list.is_empty());
        assert_links(&list);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_links(&list);
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.front(), Ok(&2));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_back(), Ok(3));
        assert_links(&list);

        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.front(), Err(Error::EmptyContainer));
        assert_eq!(list.back(), Err(Error::EmptyContainer));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_size_tracks_net_pushes() {
        let mut list = List::new();
        for i in 0..10 {
            if i % 2 == 0 {
                list.push_front(i);
            } else {
                list.push_back(i);
            }
        }
        assert_eq!(list.len(), 10);
        for _ in 0..4 {
            list.pop_front().unwrap();
            list.pop_back().unwrap();
        }
        assert_eq!(list.len(), 2);
        assert_links(&list);
        list.pop_front().unwrap();
        list.pop_front().unwrap();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_links(&list);
    }

    #[test]
    fn list_insert_and_remove() {
        fn list_eq<T, I>(list: &List<T>, expected: I)
        where
            T: Debug + Clone + Eq,
            I: IntoIterator<Item = T>,
        {
            assert_eq!(
                Vec::from_iter(list.iter().cloned()),
                Vec::from_iter(expected)
            );
        }

        let mut list = List::from_iter(0..10);
        list.insert_at(5, 10).unwrap();
        assert_links(&list);
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove(10), Ok(9));
        assert_eq!(list.back(), Ok(&8));
        assert_links(&list);
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert_at(0, 11).unwrap();
        assert_eq!(list.front(), Ok(&11));
        list_eq(&list, (11..=11).chain((0..5).chain(Some(10)).chain(5..9)));

        assert_eq!(list.remove(0), Ok(11));
        assert_eq!(list.front(), Ok(&0));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert_at(10, 12).unwrap();
        assert_eq!(list.back(), Ok(&12));
        assert_links(&list);
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9).chain(Some(12)));
    }

    #[test]
    fn list_insert_remove_round_trip() {
        let original = List::from_iter(0..6);
        for index in 0..original.len() {
            let mut list = original.clone();
            list.insert_at(index, 99).unwrap();
            assert_eq!(list.len(), original.len() + 1);
            assert_eq!(list.remove(index), Ok(99));
            assert_eq!(list, original);
            assert_links(&list);
        }
    }

    #[test]
    fn list_index_bounds() {
        let mut list = List::from([1, 2, 3]);

        assert_eq!(list.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(
            list.set(3, 0),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            list.remove(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            list.swap(0, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );

        // `index == len` is valid for insertion (append semantics).
        list.insert_at(3, 4).unwrap();
        assert_eq!(list.back(), Ok(&4));
        assert_eq!(
            list.insert_at(6, 5),
            Err(Error::IndexOutOfRange { index: 6, len: 4 })
        );
    }

    #[test]
    fn list_swap() {
        let mut list = List::from([1, 2, 3, 4]);
        list.swap(1, 3).unwrap();
        assert_eq!(list.to_vec(), vec![1, 4, 3, 2]);
        list.swap(2, 2).unwrap();
        assert_eq!(list.to_vec(), vec![1, 4, 3, 2]);
        assert_links(&list);
    }

    #[test]
    fn list_swap_any_positions() {
        // Walks that pass over the first node, in both argument orders,
        // at the ends and between neighbors.
        let mut list = List::from([1, 2, 3, 4, 5]);
        list.swap(1, 3).unwrap();
        assert_eq!(list.to_vec(), vec![1, 4, 3, 2, 5]);
        list.swap(3, 1).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
        list.swap(0, 4).unwrap();
        assert_eq!(list.to_vec(), vec![5, 2, 3, 4, 1]);
        list.swap(2, 3).unwrap();
        assert_eq!(list.to_vec(), vec![5, 2, 4, 3, 1]);
        assert_links(&list);

        let mut pair = List::from(["a", "b"]);
        pair.swap(0, 1).unwrap();
        assert_eq!(pair.to_vec(), vec!["b", "a"]);
        assert_links(&pair);
    }

    #[test]
    fn list_reverse() {
        let mut list = List::from_iter(0..7);
        let original = list.clone();

        list.reverse();
        assert_eq!(list.to_vec(), (0..7).rev().collect::<Vec<_>>());
        assert_links(&list);

        list.reverse();
        assert_eq!(list, original);
        assert_links(&list);

        let mut single = List::from([1]);
        single.reverse();
        assert_eq!(single.to_vec(), vec![1]);

        let mut empty = List::<i32>::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn list_clear_is_idempotent() {
        let mut list = List::from([1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_links(&list);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_failed_call_leaves_state_untouched() {
        let mut list = List::from([1, 2, 3]);
        let snapshot = list.clone();
        assert!(list.remove(7).is_err());
        assert!(list.insert_at(7, 0).is_err());
        assert!(list.set(7, 0).is_err());
        assert!(list.swap(0, 7).is_err());
        assert_eq!(list, snapshot);
        assert_links(&list);
    }
}
