#![cfg(test)]

use pretty_assertions::{assert_eq, assert_ne};

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_prepend_append_pop_front() {
    let mut list = SinglyLinkedList::from_iter([2, 3]);
    list.prepend(1);
    list.append(4);

    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [1, 2, 3, 4],
        "Iteration should run from head to tail."
    );

    assert_eq!(list.pop_front(), 1);
    assert_eq!(list.len(), 3);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [2, 3, 4],
        "Popping the front should leave the rest of the sequence intact."
    );
}

#[test]
fn test_ends() {
    let mut list = SinglyLinkedList::new();
    list.prepend(2);

    assert_eq!(*list.front(), 2);
    assert_eq!(*list.back(), 2, "A single element is both the head and the tail.");

    list.append(3);
    list.prepend(1);
    assert_eq!(*list.front(), 1);
    assert_eq!(*list.back(), 3);
}

#[test]
fn test_tail_survives_draining() {
    let mut list = SinglyLinkedList::new();
    list.append(1);
    assert_eq!(list.pop_front(), 1);
    assert!(list.is_empty());

    // The tail cache must be rebuilt once the list has been fully drained.
    list.append(2);
    list.append(3);
    assert_eq!(*list.back(), 3);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn test_empty_errors() {
    let mut list = SinglyLinkedList::<u32>::new();

    assert_eq!(
        list.try_pop_front(),
        Err(EmptyCollection {
            operation: "pop_front",
            collection: "SinglyLinkedList",
        })
    );
    assert_eq!(
        list.try_front(),
        Err(EmptyCollection {
            operation: "front",
            collection: "SinglyLinkedList",
        })
    );
    assert_eq!(
        list.try_back(),
        Err(EmptyCollection {
            operation: "back",
            collection: "SinglyLinkedList",
        })
    );

    assert_panics!({ SinglyLinkedList::<u32>::new().pop_front() });
}

#[test]
fn test_iterators_restart_from_head() {
    let list = SinglyLinkedList::from_iter([1, 2, 3]);

    let first: Vec<_> = list.iter().copied().collect();
    let second: Vec<_> = list.iter().copied().collect();
    assert_eq!(first, second, "Each fresh iterator should restart from the head.");

    let mut partial = list.iter();
    assert_eq!(partial.next(), Some(&1));
    assert_eq!(partial.len(), 2, "Size hints should track the remaining elements.");
}

#[test]
fn test_iter_mut_and_into_iter() {
    let mut list = SinglyLinkedList::from_iter([1, 2, 3]);
    for value in list.iter_mut() {
        *value *= 10;
    }

    assert_eq!(list.into_iter().collect::<Vec<_>>(), [10, 20, 30]);
}

#[test]
fn test_contains_equality_and_display() {
    let list = SinglyLinkedList::from_iter([1, 2, 3]);

    assert!(list.contains(&2));
    assert!(!list.contains(&4));

    assert_eq!(list, SinglyLinkedList::from_iter([1, 2, 3]));
    assert_ne!(list, SinglyLinkedList::from_iter([1, 2]));

    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
}

#[test]
fn test_long_chain_drop() {
    // A recursive drop would overflow the stack well before a million nodes.
    let list = SinglyLinkedList::from_iter(0..1_000_000);
    drop(list);
}
