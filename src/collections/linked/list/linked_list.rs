use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use super::{last_link, Iter, IterMut, Link, Node};
use crate::util::fmt::{write_joined, DebugList};

/// A list with links in one direction, from the front to the back. New elements are added at the
/// front, making it behave like a stack unless reversed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `k`: The group size given to a grouped reversal.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `reverse_recursive` | `O(n)`, `n` stack frames |
/// | `reverse_k_group` | `O(n)` |
/// | `reverse_k_group_recursive` | `O(n)`, `n / k` stack frames |
///
/// None of the reversal methods allocate or move the stored values, they only rewire links.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    ///
    /// # Examples
    /// ```
    /// # use ds_algo::collections::linked::LinkedList;
    /// let list: LinkedList<u8> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Inserts the provided element at the front of the LinkedList.
    ///
    /// # Examples
    /// ```
    /// # use ds_algo::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.to_string(), "(1) -> (2)");
    /// ```
    #[doc(alias = "insert")]
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Node::boxed(value, self.head.take()));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, or [`None`] if the list is empty.
    /// An empty list is left untouched.
    #[doc(alias = "delete")]
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Appends the provided element after the last node. This has to walk the whole list.
    pub fn push_back(&mut self, value: T) {
        *last_link(&mut self.head) = Some(Node::boxed(value, None));
        self.len += 1;
    }

    /// Calls `f` on every element, from the front of the list to the back.
    pub fn traverse<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f)
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        let mut curr = self.head.take();
        // Unlink nodes one at a time so that dropping a long chain can't recurse.
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the position of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = last_link(&mut self.head);
        for value in iter {
            let node = tail.insert(Node::boxed(value, None));
            tail = &mut node.next;
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    /// Collects the items into a list, keeping their order: the first item becomes the front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugList(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_joined(f, self.iter(), ") -> (")?;
        write!(f, ")")
    }
}
