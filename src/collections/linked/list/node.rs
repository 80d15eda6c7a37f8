pub(crate) type Link<T> = Option<Box<Node<T>>>;

// NOTE: Nodes are owned through Box, so each node is reachable from exactly one link and moving a
// Box between links rewires the list without touching the value on the heap.

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node { value, next })
    }
}

/// Walks the chain starting at `link` and returns the empty link after its last node.
pub(crate) fn last_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}
