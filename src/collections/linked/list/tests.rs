#![cfg(test)]

use std::collections::VecDeque;

use proptest::prelude::*;

use super::*;
use crate::util::drop::DropCounter;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut list = SinglyLinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.pop_back(), None);

    list.push_back(10);
    list.push_back(15);
    list.push_front(5);
    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&5));
    assert_eq!(list.back(), Some(&15));

    assert_eq!(list.pop_back(), Some(15));
    assert_eq!(list.back(), Some(&10), "The tail should move back after popping it.");
    assert_eq!(list.pop_front(), Some(5));
    assert_eq!(list.pop_front(), Some(10));
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    list.push_front(1);
    assert_eq!(list.front(), list.back(), "A single element is both the front and back.");
}

#[test]
fn test_front_and_back_mut() {
    let mut list: SinglyLinkedList<_> = (1..=3).collect();
    if let Some(front) = list.front_mut() {
        *front = 10;
    }
    if let Some(back) = list.back_mut() {
        *back *= 10;
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 2, 30]);
}

#[test]
fn test_remove_at() {
    let mut list: SinglyLinkedList<_> = (0..5).collect();

    assert_eq!(list.remove_at(2), 2);
    assert_eq!(list.remove_at(0), 0);
    assert_eq!(list.remove_at(2), 4);
    assert_eq!(list.back(), Some(&3), "Removing the last index should update the tail.");
    assert_eq!(list.len(), 2);

    assert_eq!(
        list.try_remove_at(2),
        Err(IndexOutOfBounds { index: 2, len: 2 })
    );
    assert_panics!({ list.remove_at(7) });

    list.push_back(9);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3, 9]);

    let mut empty = SinglyLinkedList::<u8>::new();
    assert_eq!(
        empty.try_remove_at(0),
        Err(IndexOutOfBounds { index: 0, len: 0 })
    );
}

#[test]
fn test_remove_value() {
    let mut list: SinglyLinkedList<_> = [5, 10, 15, 10].into_iter().collect();

    assert_eq!(list.remove_value(&10), Some(10));
    assert_eq!(list.to_string(), "5->15->10", "Only the first match should be removed.");
    assert_eq!(list.remove_value(&20), None);
    assert_eq!(list.remove_value(&10), Some(10));
    assert_eq!(list.back(), Some(&15));

    let mut empty = SinglyLinkedList::<i32>::new();
    assert_eq!(empty.remove_value(&1), None);
}

#[test]
fn test_contains() {
    let list: SinglyLinkedList<_> = ["a", "b", "c"].into_iter().collect();
    assert!(list.contains(&"c"));
    assert!(!list.contains(&"d"));
    assert_eq!(list.index_of(&"b"), Some(1));
    assert!(!SinglyLinkedList::<&str>::new().contains(&"a"));
}

#[test]
fn test_iterators() {
    let mut list: SinglyLinkedList<_> = (1..=4).collect();

    let iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.sum::<i32>(), 10);

    for item in &mut list {
        *item *= 2;
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 4, 6, 8]);

    let mut into_iter = list.into_iter();
    assert_eq!(into_iter.next(), Some(2));
    assert_eq!(into_iter.len(), 3);
    assert_eq!(into_iter.collect::<Vec<_>>(), [4, 6, 8]);
}

#[test]
fn test_clone_and_eq() {
    let list: SinglyLinkedList<_> = (0..10).collect();
    let mut copy = list.clone();
    assert_eq!(list, copy);

    copy.push_back(10);
    assert_ne!(list, copy);
    assert_eq!(list.len(), 10, "Changes to a clone shouldn't affect the original.");

    copy.pop_back();
    *copy.front_mut().unwrap() = -1;
    assert_ne!(list, copy);
    assert_eq!(list.front(), Some(&0));
}

#[test]
fn test_format() {
    let list: SinglyLinkedList<_> = [5, 10, 15].into_iter().collect();
    assert_eq!(format!("{list}"), "5->10->15");
    assert_eq!(format!("{list:?}"), "[5, 10, 15]");
    assert_eq!(format!("{}", SinglyLinkedList::<u8>::new()), "");
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut list = SinglyLinkedList::new();
    for _ in 0..10 {
        list.push_back(counter.clone());
    }

    drop(list.pop_front());
    drop(list.remove_at(3));
    assert_eq!(counter.drops(), 2);

    drop(list);
    assert_eq!(counter.drops(), 10);

    let mut list: SinglyLinkedList<_> = (0..10).map(|_| counter.clone()).collect();
    list.clear();
    assert_eq!(counter.drops(), 20);
    assert!(list.is_empty());

    let list: SinglyLinkedList<_> = (0..10).map(|_| counter.clone()).collect();
    let mut iter = list.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.drops(), 30, "Dropping an iterator should drop the remaining elements.");
}

#[test]
fn test_long_list_drop() {
    let list: SinglyLinkedList<_> = (0..1_000_000).collect();
    assert_eq!(list.len(), 1_000_000);
    drop(list);
}

proptest! {
    #[test]
    fn operations_match_a_model(ops in prop::collection::vec((0_u8..5, any::<i16>()), 0..300)) {
        let mut list = SinglyLinkedList::new();
        let mut model = VecDeque::new();

        for (op, value) in ops {
            match op {
                0 => {
                    list.push_back(value);
                    model.push_back(value);
                },
                1 => {
                    list.push_front(value);
                    model.push_front(value);
                },
                2 => prop_assert_eq!(list.pop_front(), model.pop_front()),
                3 => prop_assert_eq!(list.pop_back(), model.pop_back()),
                _ => {
                    let index = value.unsigned_abs() as usize % (model.len() + 1);
                    prop_assert_eq!(list.try_remove_at(index).ok(), model.remove(index));
                },
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.front(), model.front());
            prop_assert_eq!(list.back(), model.back());
        }

        prop_assert!(list.iter().eq(model.iter()));
    }
}
