use std::collections::hash_map::{IntoKeys, Keys};
use std::hash::{BuildHasher, Hash};
use std::iter::{Chain, FusedIterator};

use super::HashSet;

impl<T, S> IntoIterator for HashSet<T, S> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_keys())
    }
}

/// A type for owned iteration over a [`HashSet`]. Produces values of type `T` in no particular
/// order.
pub struct IntoIter<T>(pub(crate) IntoKeys<T, ()>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.keys())
    }
}

/// A type for borrowed iteration over a [`HashSet`]. Produces values of type `&T`.
///
/// See [`HashSet::iter`].
pub struct Iter<'a, T>(pub(crate) Keys<'a, T, ()>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

/// A lazy iterator over all items that are in one set but not another. (`self \ other`)
///
/// See [`HashSet::difference`].
pub struct Difference<'a, T, S> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) other: &'a HashSet<T, S>,
}

impl<'a, T: Hash + Eq, S: BuildHasher> Iterator for Difference<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| !other.contains(*item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T: Hash + Eq, S: BuildHasher> FusedIterator for Difference<'_, T, S> {}

impl<T, S> Clone for Difference<'_, T, S> {
    fn clone(&self) -> Self {
        Difference {
            inner: self.inner.clone(),
            other: self.other,
        }
    }
}

/// A lazy iterator over all items that are in both of two sets. (`self ∩ other`)
///
/// See [`HashSet::intersection`].
pub struct Intersection<'a, T, S> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) other: &'a HashSet<T, S>,
}

impl<'a, T: Hash + Eq, S: BuildHasher> Iterator for Intersection<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| other.contains(*item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T: Hash + Eq, S: BuildHasher> FusedIterator for Intersection<'_, T, S> {}

/// A lazy iterator over all items that are in exactly one of two sets. (`self △ other`)
///
/// See [`HashSet::symmetric_difference`].
pub struct SymmetricDifference<'a, T, S> {
    pub(crate) inner: Chain<Difference<'a, T, S>, Difference<'a, T, S>>,
}

impl<'a, T: Hash + Eq, S: BuildHasher> Iterator for SymmetricDifference<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Hash + Eq, S: BuildHasher> FusedIterator for SymmetricDifference<'_, T, S> {}

/// A lazy iterator over all items that are in either of two sets, yielding each item once.
/// (`self ∪ other`)
///
/// See [`HashSet::union`].
pub struct Union<'a, T, S> {
    pub(crate) inner: Chain<Iter<'a, T>, Difference<'a, T, S>>,
}

impl<'a, T: Hash + Eq, S: BuildHasher> Iterator for Union<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Hash + Eq, S: BuildHasher> FusedIterator for Union<'_, T, S> {}
