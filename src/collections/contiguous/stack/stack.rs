use std::fmt::{self, Debug, Display, Formatter};
use std::iter;

use log::warn;

use super::Iter;
#[doc(inline)]
pub use crate::util::error::StackFull;
use crate::util::fmt::{write_joined, DebugList};

/// The number of slots in a Stack created with [`Stack::new`].
pub const DEFAULT_CAP: usize = 10;

/// A last-in-first-out stack with a fixed number of slots.
///
/// The capacity is chosen on construction and never changes. Pushing onto a full stack or popping
/// from an empty one isn't an error: the operation does nothing and a warning is logged through
/// [`log`]. [`try_push`](Stack::try_push) can be used to get the rejected value back instead.
///
/// # Examples
/// ```
/// # use ds_algo::collections::contiguous::Stack;
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.pop();
/// stack.push(3);
/// assert_eq!(stack.peek(), Some(&3));
/// assert_eq!(stack.to_string(), "1 3");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    // Slots below top are always Some and slots at or above it are always None.
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) top: usize,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack with [`DEFAULT_CAP`] slots.
    pub fn new() -> Stack<T> {
        Stack::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty Stack with exactly `cap` slots.
    pub fn with_cap(cap: usize) -> Stack<T> {
        Stack {
            slots: iter::repeat_with(|| None).take(cap).collect(),
            top: 0,
        }
    }

    /// Returns the number of items on the stack.
    pub const fn len(&self) -> usize {
        self.top
    }

    /// Returns the total number of slots, used or not.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.top == 0
    }

    pub fn is_full(&self) -> bool {
        self.top == self.slots.len()
    }

    /// Pushes `value` onto the top of the stack. If the stack is full, a warning is logged and
    /// `value` is dropped.
    pub fn push(&mut self, value: T) {
        if self.try_push(value).is_err() {
            warn!("stack overflow, all {} slots are in use", self.cap());
        }
    }

    /// Pushes `value` onto the top of the stack, or hands it back inside [`StackFull`] if there is
    /// no free slot.
    pub fn try_push(&mut self, value: T) -> Result<(), StackFull<T>> {
        match self.slots.get_mut(self.top) {
            Some(slot) => {
                *slot = Some(value);
                self.top += 1;
                Ok(())
            },
            None => Err(StackFull(value)),
        }
    }

    /// Removes and returns the top item. If the stack is empty, a warning is logged and [`None`] is
    /// returned.
    pub fn pop(&mut self) -> Option<T> {
        let Some(new_top) = self.top.checked_sub(1) else {
            warn!("stack underflow, nothing to pop");
            return None;
        };

        self.top = new_top;
        self.slots[new_top].take()
    }

    /// Returns a reference to the top item without removing it. If the stack is empty, a warning
    /// is logged and [`None`] is returned.
    pub fn peek(&self) -> Option<&T> {
        let Some(index) = self.top.checked_sub(1) else {
            warn!("stack underflow, nothing to peek");
            return None;
        };

        self.slots[index].as_ref()
    }

    /// Returns a mutable reference to the top item. Logs the same warning as
    /// [`peek`](Stack::peek) if the stack is empty.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        let Some(index) = self.top.checked_sub(1) else {
            warn!("stack underflow, nothing to peek");
            return None;
        };

        self.slots[index].as_mut()
    }

    /// Removes every item, keeping all slots.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.top] {
            *slot = None;
        }
        self.top = 0;
    }

    /// Returns an iterator over the items from the bottom of the stack to the top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &DebugList(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Stack is empty");
        }
        write_joined(f, self.iter(), " ")
    }
}
