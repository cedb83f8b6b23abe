//! The error taxonomy shared by [`List`], [`Stack`] and [`Queue`].
//!
//! Every fallible container operation signals its failure synchronously
//! through [`Error`] and leaves the container exactly as it was before the
//! call.
//!
//! [`List`]: crate::List
//! [`Stack`]: crate::Stack
//! [`Queue`]: crate::Queue

use std::fmt;

/// A convenience alias used by all fallible container operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The ways a container operation can fail.
///
/// # Examples
///
/// ```
/// use listkit::{Error, List};
///
/// let mut list: List<i32> = List::new();
/// assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
///
/// list.push_back(1);
/// assert_eq!(list.get(3), Err(Error::IndexOutOfRange { index: 3, len: 1 }));
/// assert_eq!(list.index_of(&2), Err(Error::ElementNotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation requires at least one element but the container has
    /// none.
    EmptyContainer,
    /// A supplied position falls outside the valid range of the container.
    ///
    /// For removal and element access the valid range is `0..len`; for
    /// insertion it is `0..=len` (inserting at `len` appends).
    IndexOutOfRange {
        /// The offending position.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },
    /// A search found no element equal to the one supplied.
    ElementNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyContainer => write!(f, "operation on an empty container"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            Error::ElementNotFound => write!(f, "element not found"),
        }
    }
}

impl std::error::Error for Error {}
