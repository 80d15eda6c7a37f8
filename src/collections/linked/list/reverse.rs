//! Link-rewiring reversals for [`LinkedList`].
//!
//! Every method here moves boxed nodes between links, so values stay where they were allocated and
//! the length of the list never changes.

use std::mem;

use log::trace;

use super::{last_link, Link, LinkedList};

impl<T> LinkedList<T> {
    /// Reverses the order of the list in place, iteratively.
    ///
    /// # Examples
    /// ```
    /// # use ds_algo::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = (1..=4).collect();
    /// list.reverse();
    /// assert_eq!(list.to_string(), "(4) -> (3) -> (2) -> (1)");
    /// ```
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut curr = self.head.take();

        while let Some(mut node) = curr {
            curr = mem::replace(&mut node.next, reversed);
            reversed = Some(node);
        }

        self.head = reversed;
    }

    /// Reverses the order of the list in place, recursing once per node.
    ///
    /// The recursion depth is equal to the length of the list, so [`reverse`](Self::reverse)
    /// should be preferred for long lists.
    pub fn reverse_recursive(&mut self) {
        trace!("reversing {} nodes recursively", self.len);
        self.head = reverse_onto(self.head.take(), None);
    }

    /// Reverses the list in contiguous groups of `k` nodes, iteratively. The order within each group
    /// is reversed while the order of the groups themselves is kept. A trailing group with fewer
    /// than `k` nodes is reversed as well.
    ///
    /// A `k` of 0 or 1 leaves the list unchanged.
    ///
    /// # Examples
    /// ```
    /// # use ds_algo::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = (1..=8).collect();
    /// list.reverse_k_group(3);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 2, 1, 6, 5, 4, 8, 7]);
    /// ```
    pub fn reverse_k_group(&mut self, k: usize) {
        if k < 2 {
            return;
        }

        let mut rest = self.head.take();
        let mut tail = &mut self.head;

        while rest.is_some() {
            let (group, remainder) = reverse_prefix(rest, k);
            *tail = group;
            // The first node of the old group is now its last, so continue from there.
            tail = last_link(tail);
            rest = remainder;
        }
    }

    /// Reverses the list in contiguous groups of `k` nodes, recursing once per group. Produces the
    /// same result as [`reverse_k_group`](Self::reverse_k_group).
    ///
    /// A `k` of 0 or 1 leaves the list unchanged.
    pub fn reverse_k_group_recursive(&mut self, k: usize) {
        if k < 2 {
            return;
        }

        trace!("reversing {} nodes in groups of {k} recursively", self.len);
        self.head = reverse_groups(self.head.take(), k);
    }
}

/// Moves each node of `link` onto the front of `reversed`, one call per node.
fn reverse_onto<T>(link: Link<T>, reversed: Link<T>) -> Link<T> {
    match link {
        None => reversed,
        Some(mut node) => {
            let rest = mem::replace(&mut node.next, reversed);
            reverse_onto(rest, Some(node))
        },
    }
}

/// Reverses the first `k` nodes of `link` (or all of them if there are fewer), returning the
/// reversed group and the untouched remainder.
fn reverse_prefix<T>(mut link: Link<T>, k: usize) -> (Link<T>, Link<T>) {
    let mut group: Link<T> = None;

    for _ in 0..k {
        let Some(mut node) = link.take() else { break };
        link = mem::replace(&mut node.next, group);
        group = Some(node);
    }

    (group, link)
}

fn reverse_groups<T>(link: Link<T>, k: usize) -> Link<T> {
    link.as_ref()?;

    let (mut group, rest) = reverse_prefix(link, k);
    *last_link(&mut group) = reverse_groups(rest, k);
    group
}
