use std::collections::VecDeque;
use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::util::fmt::{write_joined, DebugList};

/// A first-in-first-out queue. Items are enqueued at the rear and dequeued from the front.
///
/// Backed by a growable ring buffer, so both ends are `O(1)` and dequeuing never shifts the
/// remaining items.
///
/// Operations on an empty queue aren't errors: [`dequeue`](Queue::dequeue) and
/// [`peek`](Queue::peek) return [`None`], or the default value through their `_or_default`
/// counterparts.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    pub(crate) items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Creates a new, empty Queue with room for at least `cap` items before reallocating.
    pub fn with_cap(cap: usize) -> Queue<T> {
        Queue {
            items: VecDeque::with_capacity(cap),
        }
    }

    /// Adds an item to the rear of the queue.
    ///
    /// # Examples
    /// ```
    /// # use ds_algo::collections::queue::Queue;
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.dequeue(), Some(2));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the front of the queue, if there is one.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the item at the front of the queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns a mutable reference to the item at the front of the queue.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }

    /// Returns a reference to the item at the rear of the queue, the most recently enqueued one.
    pub fn peek_back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the queue.
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Removes all items from the queue.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Default> Queue<T> {
    /// Removes and returns the front item, or `T::default()` if the queue is empty.
    pub fn dequeue_or_default(&mut self) -> T {
        self.dequeue().unwrap_or_default()
    }
}

impl<T: Default + Clone> Queue<T> {
    /// Returns a copy of the front item, or `T::default()` if the queue is empty.
    pub fn peek_or_default(&self) -> T {
        self.peek().cloned().unwrap_or_default()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Enqueues every item in order, so the first item is the first to be dequeued.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &DebugList(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        write_joined(f, self.iter(), ", ")?;
        write!(f, "]")
    }
}
