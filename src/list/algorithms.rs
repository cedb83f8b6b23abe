use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::Rng;

use crate::error::{Error, Result};
use crate::list::List;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    /// Lexicographic comparison, element by element from the front.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// Builds an independent deep copy; mutations of the clone never
    /// touch the original.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: Display> Display for List<T> {
    /// Renders the elements left to right, space-separated, with no
    /// trailing separator. An empty list renders as the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.to_string(), "1 2 3");
    ///
    /// let empty: List<i32> = List::new();
    /// assert_eq!(empty.to_string(), "");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for element in iter {
                write!(f, " {}", element)?;
            }
        }
        Ok(())
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    /// Panics on an out-of-range index; the fallible surface is
    /// [`List::get`].
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    /// Panics on an out-of-range index; the fallible surface is
    /// [`List::get_mut`].
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the list contains an element equal to the given
    /// value.
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
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&9));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Returns the number of elements equal to the given value.
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
    /// let list = List::from([1, 2, 3, 2, 4, 2, 5]);
    /// assert_eq!(list.count(&2), 3);
    /// assert_eq!(list.count(&9), 0);
    /// ```
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|element| *element == value).count()
    }

    /// Returns the position of the first element equal to the given
    /// value, or `Err(ElementNotFound)` when no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::{Error, List};
    ///
    /// let list = List::from([1, 2, 3, 2, 4, 2, 5]);
    /// assert_eq!(list.index_of(&4), Ok(4));
    /// assert_eq!(list.index_of(&99), Err(Error::ElementNotFound));
    /// ```
    pub fn index_of(&self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        self.iter()
            .position(|element| element == value)
            .ok_or(Error::ElementNotFound)
    }

    /// Appends a value-copy of every element of `other`, which is left
    /// unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m*) time, where *m* is the
    /// length of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// let other = List::from([3, 4]);
    ///
    /// list.concatenate(&other);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    /// assert_eq!(other.to_vec(), vec![3, 4]);
    /// ```
    pub fn concatenate(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.extend(other.iter().cloned());
    }

    /// Returns a new list holding copies of the elements at positions
    /// `start, start + step, …` while the position stays below both
    /// `end` and the list length. An out-of-range `end` clips; a
    /// `start` past the end or a `step` of zero yields an empty list,
    /// not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let list = List::from([0, 1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(list.slice(1, 5, 2).to_vec(), vec![1, 3]);
    /// assert_eq!(list.slice(0, 100, 1).to_vec(), vec![0, 1, 2, 3, 4, 5]);
    /// assert!(list.slice(6, 10, 1).is_empty());
    /// assert!(list.slice(0, 6, 0).is_empty());
    /// ```
    pub fn slice(&self, start: usize, end: usize, step: usize) -> Self
    where
        T: Clone,
    {
        let mut result = List::new();
        if step == 0 {
            return result;
        }
        result.extend(
            self.iter()
                .enumerate()
                .take(end)
                .skip(start)
                .filter(|(position, _)| (position - start) % step == 0)
                .map(|(_, element)| element.clone()),
        );
        result
    }

    /// Sorts the list in ascending order under the natural ordering.
    ///
    /// The elements are extracted into a `Vec`, comparison-sorted there
    /// and written back in order, so the sort costs *O*(*n* log *n*)
    /// comparisons and *O*(*n*) extra space.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([5, 2, 8, 1, 9, 3]);
    /// list.sort();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 5, 8, 9]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sorts the list with a caller-supplied comparison function.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from(["hello", "hi", "hey"]);
    /// list.sort_by(|a, b| a.len().cmp(&b.len()));
    /// assert_eq!(list.to_vec(), vec!["hi", "hey", "hello"]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut elements = std::mem::take(self).into_vec();
        elements.sort_by(compare);
        self.extend(elements);
    }

    /// Sorts ascending or descending under the natural ordering,
    /// selected by the flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::from([5, 2, 8, 1, 9, 3]);
    /// list.sort_ordered(true);
    /// assert_eq!(list.to_vec(), vec![9, 8, 5, 3, 2, 1]);
    /// ```
    pub fn sort_ordered(&mut self, descending: bool)
    where
        T: Ord,
    {
        if descending {
            self.sort_by(|a, b| b.cmp(a));
        } else {
            self.sort();
        }
    }

    /// Copies the elements into a `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the list and moves the elements into a `Vec`, front to
    /// back.
    pub fn into_vec(self) -> Vec<T> {
        Vec::from_iter(self)
    }

    /// Appends `count` elements drawn uniformly at random from `range`.
    /// Duplicates are allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use listkit::List;
    ///
    /// let mut list = List::new();
    /// list.random_extend(10, 0..100);
    /// assert_eq!(list.len(), 10);
    /// assert!(list.iter().all(|v| (0..100).contains(v)));
    /// ```
    pub fn random_extend<R>(&mut self, count: usize, range: R)
    where
        T: SampleUniform,
        R: SampleRange<T> + Clone,
    {
        let mut rng = rand::rng();
        for _ in 0..count {
            self.push_back(rng.random_range(range.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::List;
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[test]
    fn list_equality() {
        assert_eq!(List::from([1, 2, 3]), List::from([1, 2, 3]));
        assert_ne!(List::from([1, 2, 3]), List::from([1, 2, 4]));
        assert_ne!(List::from([1, 2, 3]), List::from([1, 2]));
        assert_eq!(List::<i32>::new(), List::new());
    }

    #[test]
    fn list_lexicographic_order() {
        assert!(List::from([1, 2, 3]) < List::from([1, 2, 4]));
        assert!(List::from([1, 2]) < List::from([1, 2, 0]));
        assert!(List::<i32>::new() < List::from([0]));
        assert_eq!(
            List::from([1, 2]).cmp(&List::from([1, 2])),
            Ordering::Equal
        );
    }

    #[test]
    fn list_clone_is_independent() {
        let original = List::from([1, 2, 3]);
        let mut copy = original.clone();
        copy.push_back(4);
        *copy.front_mut().unwrap() = 9;
        assert_eq!(original.to_vec(), vec![1, 2, 3]);
        assert_eq!(copy.to_vec(), vec![9, 2, 3, 4]);
    }

    #[test]
    fn list_hash_agrees_with_equality() {
        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        let a = List::from([1, 2, 3]);
        let b = List::from([1, 2, 3]);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_display() {
        assert_eq!(List::from([1, 2, 3]).to_string(), "1 2 3");
        assert_eq!(List::from([7]).to_string(), "7");
        assert_eq!(List::<i32>::new().to_string(), "");
    }

    #[test]
    fn list_index_operator() {
        let mut list = List::from([1, 2, 3]);
        assert_eq!(list[0], 1);
        list[2] = 9;
        assert_eq!(list.to_vec(), vec![1, 2, 9]);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for length 3")]
    fn list_index_operator_out_of_range() {
        let list = List::from([1, 2, 3]);
        let _ = list[3];
    }

    #[test]
    fn list_search() {
        let list = List::from([1, 2, 3, 2, 4, 2, 5]);
        assert!(list.contains(&4));
        assert!(!list.contains(&9));
        assert_eq!(list.count(&2), 3);
        assert_eq!(list.count(&9), 0);
        assert_eq!(list.index_of(&2), Ok(1));
        assert_eq!(list.index_of(&99), Err(Error::ElementNotFound));
    }

    #[test]
    fn list_concatenate() {
        let mut list = List::from([1, 2]);
        let other = List::from([3, 4]);
        list.concatenate(&other);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(other.to_vec(), vec![3, 4]);

        let empty = List::new();
        list.concatenate(&empty);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn list_slice() {
        let list = List::from([0, 1, 2, 3, 4, 5]);
        assert_eq!(list.slice(0, 6, 1), list);
        assert_eq!(list.slice(1, 5, 2).to_vec(), vec![1, 3]);
        assert_eq!(list.slice(0, 6, 3).to_vec(), vec![0, 3]);
        assert_eq!(list.slice(2, 100, 2).to_vec(), vec![2, 4]);
        assert!(list.slice(6, 10, 1).is_empty());
        assert!(list.slice(0, 6, 0).is_empty());
        assert!(list.slice(3, 3, 1).is_empty());
    }

    #[test]
    fn list_sort() {
        let mut list = List::from([5, 2, 8, 1, 9, 3]);
        list.sort();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 5, 8, 9]);

        list.sort_ordered(true);
        assert_eq!(list.to_vec(), vec![9, 8, 5, 3, 2, 1]);

        list.sort_ordered(false);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 5, 8, 9]);

        let mut empty = List::<i32>::new();
        empty.sort();
        assert!(empty.is_empty());
    }

    #[test]
    fn list_sort_by() {
        let mut list = List::<i32>::from([-3, 1, -2, 4]);
        list.sort_by(|a, b| a.abs().cmp(&b.abs()));
        assert_eq!(list.to_vec(), vec![1, -2, -3, 4]);
    }

    #[test]
    fn list_sort_preserves_multiset() {
        let mut list = List::new();
        list.random_extend(200, 0..10);
        let before: Vec<usize> = (0..10).map(|v| list.count(&v)).collect();
        list.sort();
        let after: Vec<usize> = (0..10).map(|v| list.count(&v)).collect();
        assert_eq!(before, after);
        assert_eq!(list.len(), 200);
        assert!(list.iter().zip(list.iter().skip(1)).all(|(a, b)| a <= b));
    }

    #[test]
    fn list_random_extend() {
        let mut list = List::from([42]);
        list.random_extend(50, 0..5);
        assert_eq!(list.len(), 51);
        assert_eq!(list.front(), Ok(&42));
        assert!(list.iter().skip(1).all(|v| (0..5).contains(v)));
    }

    #[test]
    fn list_to_and_into_vec() {
        let list = List::from([1, 2, 3]);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.into_vec(), vec![1, 2, 3]);
    }
}
