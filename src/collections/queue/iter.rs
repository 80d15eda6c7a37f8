use std::collections::vec_deque;

use super::Queue;

/// A type for owned iteration over a [`Queue`], in dequeue order.
pub type IntoIter<T> = vec_deque::IntoIter<T>;

/// A type for borrowed iteration over a [`Queue`], in dequeue order.
pub type Iter<'a, T> = vec_deque::Iter<'a, T>;

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
