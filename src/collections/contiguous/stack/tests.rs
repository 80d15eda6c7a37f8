#![cfg(test)]

use std::iter;

use log::Level;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::capture::capture_logs;

#[test]
fn test_lifo_order() {
    let mut stack = Stack::new();
    stack.push(1_i64);
    stack.push(2);
    assert_eq!(stack.pop(), Some(2));
    stack.push(3);

    assert_eq!(stack.peek(), Some(&3), "Peek should show the most recent push.");
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(1));
    assert!(stack.is_empty());
    assert_eq!(stack.to_string(), "Stack is empty");
}

#[test]
fn test_default_capacity() {
    let stack: Stack<u8> = Stack::new();
    assert_eq!(stack.cap(), DEFAULT_CAP);
    assert_eq!(stack.cap(), 10);
    assert_eq!(Stack::<u8>::default().cap(), DEFAULT_CAP);
}

#[test]
fn test_overflow_is_a_no_op() {
    let mut stack = Stack::with_cap(3);
    for value in 0..5 {
        stack.push(value);
    }

    assert!(stack.is_full());
    assert_eq!(stack.len(), 3, "Pushes past capacity should be ignored.");
    assert_eq!(stack.peek(), Some(&2), "The top shouldn't change on overflow.");
    assert_eq!(stack.to_string(), "0 1 2");

    let rejected = stack.try_push(9);
    assert_eq!(rejected.map_err(StackFull::into_inner), Err(9), "try_push should hand the value back.");
    assert_eq!(StackFull(()).to_string(), "Stack overflow, no free slots remain!");
}

#[test]
fn test_underflow_is_a_no_op() {
    let mut stack: Stack<String> = Stack::with_cap(2);
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
    assert_eq!(stack.peek_mut(), None);
    assert_eq!(stack.len(), 0, "Popping an empty stack shouldn't change its length.");

    stack.push("a".to_owned());
    assert_eq!(stack.pop().as_deref(), Some("a"));
    assert_eq!(stack.pop(), None);
    assert!(stack.try_push("b".to_owned()).is_ok(), "The stack should still accept values.");
}

#[test]
fn test_overflow_and_underflow_warn() {
    let records = capture_logs(|| {
        let mut stack = Stack::with_cap(1);
        stack.push('a');
        stack.push('b');
        assert!(stack.try_push('c').is_err());
        assert_eq!(stack.pop(), Some('a'));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.peek_mut(), None);
    });

    assert_eq!(
        records,
        [
            (Level::Warn, "stack overflow, all 1 slots are in use".to_owned()),
            (Level::Warn, "stack underflow, nothing to pop".to_owned()),
            (Level::Warn, "stack underflow, nothing to peek".to_owned()),
            (Level::Warn, "stack underflow, nothing to peek".to_owned()),
        ],
        "Only push, pop and peek past the limits should warn, try_push should stay quiet."
    );
}

#[test]
fn test_quiet_within_limits() {
    let records = capture_logs(|| {
        let mut stack = Stack::with_cap(2);
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
    });
    assert!(records.is_empty(), "Unexpected warnings: {records:?}");
}

#[test]
fn test_zero_capacity() {
    let mut stack = Stack::with_cap(0);
    assert!(stack.is_empty());
    assert!(stack.is_full());
    stack.push('x');
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_drops() {
    let counter = CountedDrop::new();
    let mut stack = Stack::with_cap(4);
    for item in iter::repeat_with(|| counter.clone()).take(6) {
        stack.push(item);
    }
    assert_eq!(counter.drops(), 2, "Values pushed onto a full stack should be dropped.");

    drop(stack.pop());
    assert_eq!(counter.drops(), 3);

    stack.clear();
    assert_eq!(counter.drops(), 6, "Clearing should drop every remaining value.");
    assert!(stack.is_empty());
    assert_eq!(stack.cap(), 4, "Clearing shouldn't change the capacity.");
}

#[test]
fn test_iteration_and_format() {
    let mut stack = Stack::with_cap(5);
    for value in [1, 2, 3] {
        stack.push(value);
    }
    if let Some(top) = stack.peek_mut() {
        *top *= 10;
    }

    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [1, 2, 30]);
    assert_eq!(stack.iter().rev().copied().collect::<Vec<_>>(), [30, 2, 1]);
    assert_eq!(format!("{stack:?}"), "Stack { contents: [1, 2, 30], len: 3, cap: 5 }");

    let mut other = Stack::with_cap(5);
    other.push(1);
    other.push(2);
    other.push(30);
    assert_eq!(stack, other);
}
