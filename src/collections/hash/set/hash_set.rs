use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::{Difference, Intersection, Iter, SymmetricDifference, Union};
use crate::util::fmt::{write_joined, DebugSet};

/// A set of unique values, backed by a hash table.
///
/// Set operations come in two forms: lazy borrowed iterators ([`union`](HashSet::union),
/// [`intersection`](HashSet::intersection), [`difference`](HashSet::difference) and
/// [`symmetric_difference`](HashSet::symmetric_difference)) and operators on references
/// (`|`, `&`, `-` and `^`) which build a new owned set.
///
/// Iteration order is unspecified and may differ between two equal sets.
#[derive(Clone)]
pub struct HashSet<T, S = RandomState> {
    // Every entry maps to (), which takes no space, so the map's keys are the set.
    pub(crate) inner: HashMap<T, (), S>,
}

impl<T> HashSet<T> {
    /// Creates a new, empty HashSet.
    ///
    /// # Examples
    /// ```
    /// # use ds_algo::collections::hash::HashSet;
    /// let set: HashSet<u8> = HashSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> HashSet<T> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new, empty HashSet with room for at least `cap` values before reallocating.
    pub fn with_cap(cap: usize) -> HashSet<T> {
        HashSet {
            inner: HashMap::with_capacity(cap),
        }
    }
}

impl<T, S> HashSet<T, S> {
    pub const fn with_hasher(hasher: S) -> HashSet<T, S> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Returns the number of values in the set.
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Removes every value from the set, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over all values in the set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Calls `f` once on every value in the set.
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f)
    }

    /// Returns references to all values, ordered by `compare`.
    pub fn sorted_by<F>(&self, mut compare: F) -> Vec<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut values: Vec<&T> = self.iter().collect();
        values.sort_by(|a, b| compare(*a, *b));
        values
    }
}

impl<T: Clone, S> HashSet<T, S> {
    /// Returns a copy of every value in the set, in iteration order.
    pub fn values(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Ord, S> HashSet<T, S> {
    /// Returns references to all values in ascending order.
    pub fn sorted(&self) -> Vec<&T> {
        self.sorted_by(T::cmp)
    }
}

impl<T: Hash + Eq, S: BuildHasher> HashSet<T, S> {
    /// Adds a value to the set, returning true if it wasn't already present. An existing equal
    /// value is kept and `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use ds_algo::collections::hash::HashSet;
    /// let mut set = HashSet::new();
    /// assert!(set.insert(3));
    /// assert!(!set.insert(3));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[doc(alias = "add")]
    pub fn insert(&mut self, value: T) -> bool {
        if self.inner.contains_key(&value) {
            return false;
        }
        self.inner.insert(value, ());
        true
    }

    /// Removes a value from the set, returning it if it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(value).map(|(value, ())| value)
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(value)
    }

    /// Ensures that at least `extra` more values can be inserted without reallocating.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Keeps only the values for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        self.inner.retain(|value, _| keep(value))
    }

    /// Creates a borrowed iterator over all values that are in `self` but not `other`.
    /// (`self \ other`)
    pub fn difference<'a>(&'a self, other: &'a HashSet<T, S>) -> Difference<'a, T, S> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all values that are in `self` or `other` but not both.
    /// (`self △ other`)
    pub fn symmetric_difference<'a>(
        &'a self,
        other: &'a HashSet<T, S>,
    ) -> SymmetricDifference<'a, T, S> {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Creates a borrowed iterator over all values that are in both `self` and `other`.
    /// (`self ∩ other`)
    pub fn intersection<'a>(&'a self, other: &'a HashSet<T, S>) -> Intersection<'a, T, S> {
        // Probing the larger set from the smaller one does less work.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        Intersection {
            inner: small.iter(),
            other: large,
        }
    }

    /// Creates a borrowed iterator over all values that are in either `self` or `other`.
    /// (`self ∪ other`)
    pub fn union<'a>(&'a self, other: &'a HashSet<T, S>) -> Union<'a, T, S> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// Returns true if `other` contains all values of `self`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &HashSet<T, S>) -> bool {
        self.len() <= other.len() && self.iter().all(|value| other.contains(value))
    }

    /// Returns true if `self` contains all values of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &HashSet<T, S>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` share no values.
    pub fn is_disjoint(&self, other: &HashSet<T, S>) -> bool {
        self.intersection(other).next().is_none()
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> HashSet<T, S> {
    /// Creates a new set from the results of calling `f` on every value. Values which map to the
    /// same result are merged, so the new set may be smaller.
    pub fn map<U, F>(&self, f: F) -> HashSet<U, S>
    where
        U: Hash + Eq,
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Creates a new set containing copies of the values for which `pred` returns true.
    ///
    /// # Examples
    /// ```
    /// # use ds_algo::collections::hash::HashSet;
    /// let set: HashSet<i64> = (1..=6).collect();
    /// let even = set.filter(|value| value % 2 == 0);
    /// assert_eq!(even.sorted(), [&2, &4, &6]);
    /// ```
    pub fn filter<F>(&self, mut pred: F) -> HashSet<T, S>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|value| pred(*value)).cloned().collect()
    }
}

impl<T, S: Default> Default for HashSet<T, S> {
    fn default() -> Self {
        HashSet {
            inner: HashMap::default(),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for HashSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for HashSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = HashSet::with_hasher(S::default());
        set.reserve(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for HashSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for HashSet<T, S> {}

impl<T: Hash + Eq + Clone, S: BuildHasher + Default> BitOr for &HashSet<T, S> {
    type Output = HashSet<T, S>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> BitOrAssign for HashSet<T, S> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs);
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher + Default> BitAnd for &HashSet<T, S> {
    type Output = HashSet<T, S>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> BitAndAssign for HashSet<T, S> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|value| rhs.contains(value));
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher + Default> BitXor for &HashSet<T, S> {
    type Output = HashSet<T, S>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> BitXorAssign for HashSet<T, S> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for value in rhs {
            if self.remove(&value).is_none() {
                self.insert(value);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher + Default> Sub for &HashSet<T, S> {
    type Output = HashSet<T, S>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> SubAssign for HashSet<T, S> {
    fn sub_assign(&mut self, rhs: Self) {
        for value in rhs {
            self.remove(&value);
        }
    }
}

impl<T: Debug, S> Debug for HashSet<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugSet(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display, S> Display for HashSet<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        write_joined(f, self.iter(), ", ")?;
        write!(f, "}}")
    }
}
