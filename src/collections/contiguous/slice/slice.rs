use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::{write_joined, DebugList};
use crate::util::result::ResultExtension;

/// A growable contiguous collection with checked, index-based editing.
///
/// Slice dereferences to `[T]`, so all of the read-only slice methods (`iter`, `first`,
/// `contains`, sorting, ...) are available without being redefined here.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Slice.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` / `set` | `O(1)` |
/// | `append` | `O(1)`* |
/// | `prepend` | `O(n)` |
/// | `delete` | `O(n-i)` |
/// | `delete_first` | `O(n)` |
/// | `delete_last` | `O(1)` |
/// | `delete_all` | `O(n)` |
/// | `reverse` | `O(n)` |
///
/// \* Amortized, growing the buffer is `O(n)`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slice<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Slice<T> {
    /// Creates a new, empty Slice. Memory is allocated once the first item is added.
    pub const fn new() -> Slice<T> {
        Slice {
            items: Vec::new(),
        }
    }

    /// Creates a Slice holding exactly one item.
    ///
    /// # Examples
    /// ```
    /// # use ds_algo::collections::contiguous::Slice;
    /// let slice = Slice::single(1);
    /// assert_eq!(&*slice, &[1]);
    /// ```
    pub fn single(value: T) -> Slice<T> {
        Slice {
            items: vec![value],
        }
    }

    /// Creates a new, empty Slice with room for at least `cap` items before reallocating.
    pub fn with_cap(cap: usize) -> Slice<T> {
        Slice {
            items: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of items in the Slice.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.items.capacity()
    }

    /// Adds `value` after the last item.
    #[doc(alias = "push")]
    pub fn append(&mut self, value: T) {
        self.items.push(value);
    }

    /// Adds `value` before the first item, moving every other item back by one.
    ///
    /// # Examples
    /// ```
    /// # use ds_algo::collections::contiguous::Slice;
    /// let mut slice = Slice::single(1);
    /// slice.append(2);
    /// slice.prepend(0);
    /// assert_eq!(&*slice, &[0, 1, 2]);
    /// ```
    pub fn prepend(&mut self, value: T) {
        self.items.insert(0, value);
    }

    /// Returns a reference to the item at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Slice.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the item at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len();
        self.items.get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the item at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Slice.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len();
        self.items.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Replaces the item at `index` with `value`, returning the old item.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Slice.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Replaces the item at `index` with `value`, returning the old item or an [`Err`] if `index`
    /// is out of bounds. On a failure, `value` is dropped and the Slice is unchanged.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Removes and returns the item at `index`, moving all following items forward.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Slice.
    #[track_caller]
    pub fn delete(&mut self, index: usize) -> T {
        self.try_delete(index).throw()
    }

    pub fn try_delete(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Removes and returns the first item, if there is one.
    pub fn delete_first(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Removes and returns the last item, if there is one.
    pub fn delete_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes every item, keeping the allocated capacity.
    #[doc(alias = "clear")]
    pub fn delete_all(&mut self) {
        self.items.clear();
    }

    /// Reverses the order of the items in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Consumes the Slice, returning the underlying [`Vec`].
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len() {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Slice<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for Slice<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> AsRef<[T]> for Slice<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Slice<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Slice<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Slice<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> From<Vec<T>> for Slice<T> {
    fn from(items: Vec<T>) -> Self {
        Slice { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Slice<T> {
    fn from(items: [T; N]) -> Self {
        Slice {
            items: Vec::from(items),
        }
    }
}

impl<T> From<Slice<T>> for Vec<T> {
    fn from(value: Slice<T>) -> Self {
        value.items
    }
}

impl<T> Extend<T> for Slice<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Slice {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Debug for Slice<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("contents", &DebugList(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for Slice<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        write_joined(f, self.iter(), ", ")?;
        write!(f, "]")
    }
}
