#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

const fn describe(slice: &Slice<u8>) -> (usize, bool, usize) {
    (slice.len(), slice.is_empty(), slice.cap())
}

#[test]
fn test_const_accessors() {
    assert_eq!(describe(&Slice::new()), (0, true, 0));

    let (len, is_empty, cap) = describe(&Slice::from([1, 2]));
    assert_eq!((len, is_empty), (2, false));
    assert!(cap >= len);
}

#[test]
fn test_build_and_index() {
    let mut slice = Slice::single(1_i64);
    for value in [2, 3, 6, 4, 5] {
        slice.append(value);
    }
    slice.prepend(0);

    assert_eq!(slice.len(), 7);
    assert_eq!(*slice.get(3), 3);
    assert_eq!(*slice.get(4), 6);
    assert_eq!(&*slice, &[0, 1, 2, 3, 6, 4, 5]);

    slice.reverse();
    assert_eq!(&*slice, &[5, 4, 6, 3, 2, 1, 0]);
}

#[test]
fn test_set_and_delete() {
    let mut slice: Slice<_> = (0..5).collect();

    assert_eq!(slice.set(1, 10), 1, "set should hand back the replaced item.");
    *slice.get_mut(2) += 20;
    assert_eq!(&*slice, &[0, 10, 22, 3, 4]);

    assert_eq!(slice.delete(1), 10);
    assert_eq!(&*slice, &[0, 22, 3, 4], "Deleting should close the gap.");

    assert_eq!(slice.delete_first(), Some(0));
    assert_eq!(slice.delete_last(), Some(4));
    assert_eq!(&*slice, &[22, 3]);

    slice.delete_all();
    assert!(slice.is_empty());
    assert_eq!(slice.delete_first(), None);
    assert_eq!(slice.delete_last(), None);
}

#[test]
fn test_checked_indices() {
    let mut slice = Slice::from([1, 2, 3]);

    let err = IndexOutOfBounds { index: 3, len: 3 };
    assert_eq!(slice.try_get(3), Err(err));
    assert_eq!(slice.try_get_mut(3), Err(err));
    assert_eq!(slice.try_set(3, 9), Err(err));
    assert_eq!(slice.try_delete(3), Err(err));
    assert_eq!(&*slice, &[1, 2, 3], "Failed operations shouldn't change the Slice.");

    assert_eq!(
        err.to_string(),
        "Index 3 out of bounds for collection with 3 elements!"
    );

    assert_panics!({ slice.clone().get(5); });
    assert_panics!({ slice.clone().set(5, 0); });
    assert_panics!({ Slice::<u8>::new().delete(0); });
}

#[test]
fn test_conversions_and_iteration() {
    let mut slice = Slice::from(vec!['a', 'b']);
    slice.extend(['c']);

    for item in &mut slice {
        *item = item.to_ascii_uppercase();
    }
    assert_eq!((&slice).into_iter().collect::<String>(), "ABC");
    assert!(slice.contains(&'B'), "Slice methods should be reachable through Deref.");

    let vec: Vec<char> = slice.clone().into();
    assert_eq!(vec, ['A', 'B', 'C']);
    assert_eq!(slice.into_iter().rev().collect::<String>(), "CBA");
}

#[test]
fn test_format() {
    let slice = Slice::from([1, 2, 3]);
    assert_eq!(slice.to_string(), "[1, 2, 3]");
    assert_eq!(Slice::<u8>::new().to_string(), "[]");

    let mut with_cap = Slice::with_cap(4);
    with_cap.append(1);
    assert_eq!(
        format!("{with_cap:?}"),
        format!("Slice {{ contents: [1], len: 1, cap: {} }}", with_cap.cap())
    );
}
