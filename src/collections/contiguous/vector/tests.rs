#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use proptest::prelude::*;

use super::*;
use crate::util::drop::{DropCounter, Unit};
use crate::util::error::{IndexOutOfBounds, RangeOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_index() {
    let mut vec = Vector::new();
    for i in 0..1000_u32 {
        vec.push(i * 3);
    }

    assert_eq!(vec.len(), 1000);
    for i in 0..1000 {
        // SAFETY: i < len.
        assert_eq!(unsafe { *vec.at_unchecked(i) }, i as u32 * 3);
    }
}

#[test]
fn test_growth_policy() {
    let mut vec = Vector::with_cap(64);
    for i in 0..64 {
        vec.push(i);
    }
    assert_eq!(vec.cap(), 64, "Filling to capacity shouldn't grow.");

    vec.push(64);
    assert_eq!(vec.cap(), 96, "Growing should multiply the capacity by 1.5.");

    let mut vec = Vector::with_cap(7);
    vec.extend(0..8);
    assert_eq!(vec.cap(), 10, "Growth should round down.");
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_zero_capacity() {
    let mut vec = Vector::with_cap(0);
    assert_eq!(vec.cap(), 0);

    vec.push("a");
    assert_eq!(vec.cap(), 2, "An empty Vector should grow to the minimum capacity.");

    let mut vec = Vector::with_cap(1);
    vec.push(1);
    vec.push(2);
    assert_eq!(vec.cap(), 2, "A capacity of one should still grow.");
}

#[test]
fn test_shrink_threshold() {
    assert_eq!(Vector::<u8>::with_cap(0).shrink_threshold(), 0);
    assert_eq!(Vector::<u8>::with_cap(383).shrink_threshold(), 0);
    assert_eq!(Vector::<u8>::with_cap(384).shrink_threshold(), 64);

    let mut vec = Vector::<u8>::with_cap(300);
    vec.reserve(400);
    assert_eq!(vec.cap(), 450);
    assert_eq!(vec.shrink_threshold(), 75, "Threshold should follow capacity changes.");
}

#[test]
fn test_shrink_on_removal() {
    let mut vec = Vector::from_fn(1200, |i| i);
    assert_eq!(vec.cap(), 1200);
    assert_eq!(vec.shrink_threshold(), 200);

    while vec.len() >= 200 {
        vec.remove_at(0);
    }
    assert_eq!(vec.len(), 199);
    assert_eq!(vec.cap(), 1200, "Capacity should be kept until the next removal.");

    vec.remove_at(0);
    assert_eq!(vec.cap(), 600, "Capacity should halve once below the threshold.");
    assert_eq!(vec.shrink_threshold(), 100);
    assert_eq!(vec.len(), 198);
    assert!(
        vec.iter().copied().eq(1002..1200),
        "No live values should change while shrinking."
    );

    vec.remove_value(&1002);
    assert_eq!(vec.cap(), 600, "Shouldn't shrink while above the new threshold.");
}

#[test]
fn test_shrink_on_missing_value() {
    let mut vec = Vector::from_fn(1200, |i| i);
    for _ in 0..1100 {
        vec.pop();
    }
    assert_eq!(vec.len(), 100);
    assert_eq!(vec.cap(), 1200, "Popping should never shrink.");

    assert_eq!(vec.remove_value(&5000), None);
    assert_eq!(
        vec.cap(),
        600,
        "The shrink policy is evaluated even when the value isn't found."
    );
    assert_eq!(vec.len(), 100);
}

#[test]
fn test_remove_all_by_value() {
    let mut vec = Vector::new();
    for i in 0..10_000 {
        vec.push(i);
    }
    for i in 0..10_000 {
        assert_eq!(vec.remove_value(&i), Some(i));
    }

    assert_eq!(vec.len(), 0);
    assert!(vec.cap() < 10_000, "Removing everything should have shrunk the Vector.");
}

#[test]
fn test_remove_at() {
    let mut vec = Vector::from([5, 10, 15]);
    vec.remove_value(&10);
    assert_eq!(vec.len(), 2);
    assert_eq!(vec[1], 15);

    assert_eq!(vec.try_remove_at(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(&*vec, &[5, 15], "A failed removal shouldn't modify the Vector.");

    // SAFETY: 0 < len.
    assert_eq!(unsafe { vec.remove_at_unchecked(0) }, 5);
    assert_eq!(&*vec, &[15]);

    assert_panics!({
        let mut vec = Vector::from([1]);
        vec.remove_at(1);
    });
}

#[test]
fn test_negative_indexing() {
    let mut vec = Vector::from([5, 10, 15]);

    assert_eq!(*vec.at(-1), 15);
    assert_eq!(*vec.at(-2), 10);
    assert_eq!(*vec.at(-3), 5);
    assert_eq!(vec.try_at(-4), Err(IndexOutOfBounds { index: -4, len: 3 }));
    assert_eq!(vec.try_at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(*vec.at(2), 15);

    *vec.at_mut(-1) = 20;
    assert_eq!(&*vec, &[5, 10, 20]);

    assert_panics!({
        Vector::<u8>::with_cap(0).at(0);
    });
    assert_panics!({
        Vector::from([1]).at(isize::MIN);
    });
}

#[test]
fn test_contains_both_directions() {
    let vec = Vector::from([5]);

    assert!(vec.contains_from(&5, ScanFrom::Front));
    assert!(vec.contains_from(&5, ScanFrom::Back));
    assert!(!vec.contains_from(&6, ScanFrom::Front));
    assert!(!vec.contains_from(&6, ScanFrom::Back));
    assert!(vec.contains(&5));

    let empty = Vector::<u8>::new();
    assert!(!empty.contains_from(&0, ScanFrom::Back));
}

#[test]
fn test_clear() {
    let mut vec = Vector::new();
    for i in 0..10_000 {
        vec.push(i);
    }

    vec.clear();
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.cap(), Vector::<i32>::BASELINE_CAP);
    assert_eq!(vec.shrink_threshold(), 0);

    vec.push(1);
    assert_eq!(vec.len(), 1);

    let mut vec = Vector::<u8>::with_cap(0);
    vec.clear();
    assert_eq!(vec.cap(), 32, "Clearing should grow small Vectors to the baseline too.");

    let counter = DropCounter::new();
    let mut vec = Vector::repeat(counter.clone(), 10);
    vec.clear();
    assert_eq!(counter.drops(), 10, "Clearing should drop every element.");
}

#[test]
fn test_append() {
    let mut vec = Vector::from([5, 10]);
    let mut other = Vector::new();
    for i in 0..1_000_000 {
        other.push(i);
    }
    assert_eq!(other.len(), 1_000_000);

    vec.append(&other);
    assert_eq!(vec.len(), 1_000_002);
    assert_eq!(vec[1_000_000], 999_998);
    assert_eq!(vec[2], 0);
    for i in 0..other.len() {
        assert_eq!(vec[2 + i], other[i]);
    }
    assert_eq!(other.len(), 1_000_000, "The source should be left untouched.");

    vec.clear();
    vec.append_range(&other, 1..10);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_append_range_errors() {
    let other = Vector::from_fn(5, |i| i);
    let mut vec = Vector::from([100]);

    assert_eq!(
        vec.try_append_range(&other, 3..3),
        Err(RangeOutOfBounds { start: 3, end: 3, len: 5 })
    );
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = vec.try_append_range(&other, 4..2);
    assert!(reversed.is_err());
    assert!(vec.try_append_range(&other, 0..6).is_err());
    assert_eq!(&*vec, &[100], "Failed appends shouldn't modify the Vector.");

    assert_eq!(vec.try_append_range(&other, 0..5), Ok(()));
    assert_eq!(&*vec, &[100, 0, 1, 2, 3, 4]);

    assert_panics!({
        Vector::from([1]).append_range(&Vector::from([1]), 0..2);
    });
}

#[test]
fn test_constructors() {
    let vec = Vector::repeat(7_u8, 4);
    assert_eq!(&*vec, &[7, 7, 7, 7]);
    assert_eq!((vec.len(), vec.cap()), (4, 4));

    let vec = Vector::from_fn(3, |i| i as f64 * 0.5);
    assert_eq!(&*vec, &[0.0, 0.5, 1.0]);
    assert_eq!(vec.cap(), 3);

    let vec = Vector::from_slice(&[1, 2, 3]);
    assert_eq!(vec.cap(), 4, "Sequence construction should leave 1.5x headroom.");

    let vec = Vector::from([1, 2, 3, 4]);
    assert_eq!(vec.cap(), 6);

    let vec: Vector<u8> = Vector::default();
    assert_eq!(vec.cap(), Vector::<u8>::DEFAULT_CAP);

    let vec: Vector<_> = (0..10).collect();
    assert_eq!(vec.len(), 10);
}

#[test]
fn test_push_with_panic() {
    let mut vec = Vector::from([1, 2]);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        vec.push_with(|| panic!("construction failed"));
    }));
    assert!(result.is_err());
    assert_eq!(vec.len(), 2, "A failed construction shouldn't be counted as live.");

    *vec.push_with(|| 3) += 1;
    assert_eq!(&*vec, &[1, 2, 4]);
}

#[test]
fn test_clone() {
    let mut a = Vector::with_cap(100);
    for i in 0..10 {
        a.push(i);
    }

    let mut b = a.clone();
    assert_eq!(a, b);
    assert_eq!(b.cap(), 10, "Clones should be sized to the live length.");

    b.push(10);
    b[0] = 100;
    assert_eq!(&*a, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], "Mutating a clone shouldn't affect the source.");

    let mut c = Vector::with_cap(1000);
    c.push(1);
    c.clone_from(&a);
    assert_eq!(c, a);
    assert_eq!(c.cap(), 10, "Clone assignment should use the same capacity policy.");
}

#[test]
fn test_take() {
    let mut a = Vector::from_fn(10, |i| i);
    let b = a.take();

    assert_eq!(&*b, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(a.len(), 0);
    assert_eq!(a.cap(), 0);

    a.push(1);
    assert_eq!(&*a, &[1], "A taken Vector should still be usable.");
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let vec = Vector::repeat(counter.clone(), 10);

    drop(vec);
    assert_eq!(counter.drops(), 10, "All 10 elements should have been dropped.");

    let counter = DropCounter::new();
    let mut vec = Vector::repeat(counter.clone(), 1000);
    while vec.len() > 10 {
        vec.pop();
    }
    vec.remove_at(0);
    drop(vec);
    assert_eq!(counter.drops(), 1000, "Shrinking shouldn't drop or duplicate any elements.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::with_cap(0);
    for _ in 0..100 {
        vec.push(Unit);
    }
    assert_eq!(vec.len(), 100);
    assert_eq!(vec[99], Unit);
    assert_eq!(vec.remove_at(50), Unit);
    assert_eq!(vec.iter().count(), 99);
}

#[test]
fn test_iterators() {
    let mut vec = Vector::from([5, 10, 15]);

    let mut expected = 0;
    for item in &vec {
        expected += 5;
        assert_eq!(*item, expected);
    }
    assert_eq!(expected, 15);
    assert_eq!(vec.iter().count(), vec.iter().count(), "Iteration should be restartable.");

    for item in &mut vec {
        *item *= 2;
    }
    assert_eq!(&*vec, &[10, 20, 30]);

    let mut iter = Vector::from([0, 2, 4, 6, 8]).into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = DropCounter::new();
    let mut iter = Vector::repeat(counter.clone(), 10).into_iter();
    iter.next();
    drop(iter);
    assert_eq!(
        counter.drops(),
        10,
        "Dropping a partially consumed owned iterator should drop all elements."
    );

    let counter = DropCounter::new();
    let vec = Vector::from_iter(iter::repeat_with(|| counter.clone()).take(10));
    assert_eq!(vec.into_iter().count(), 10);
    assert_eq!(counter.drops(), 10);
}

#[test]
fn test_equality_hash_and_format() {
    let vec = Vector::from([5, 10, 15]);

    assert_eq!(vec, Vector::from_fn(3, |i| (i as i32 + 1) * 5));
    assert_ne!(vec, Vector::from([5, 10]));

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one([5, 10, 15].as_slice()),
        "Hashes should match the equivalent slice."
    );

    assert_eq!(vec.to_string(), "[5,10,15]");
    assert_eq!(Vector::<u8>::new().to_string(), "[]");
    assert_eq!(
        format!("{:?}", Vector::from([1])),
        "Vector { contents: [1], len: 1, cap: 1 }"
    );
}

proptest! {
    #[test]
    fn pushes_are_preserved(values in prop::collection::vec(any::<i64>(), 0..500)) {
        let mut vec = Vector::with_cap(0);
        for value in &values {
            let cap = vec.cap();
            vec.push(*value);
            prop_assert!(vec.cap() >= vec.len());
            if cap >= 2 && vec.cap() != cap {
                prop_assert_eq!(vec.cap(), cap * 3 / 2);
            }
        }

        prop_assert_eq!(vec.len(), values.len());
        prop_assert_eq!(&*vec, values.as_slice());
    }

    #[test]
    fn removals_match_a_model(
        values in prop::collection::vec(0_u16..50, 0..800),
        removals in prop::collection::vec(0_u16..50, 0..800),
    ) {
        let mut vec = Vector::from_slice(&values);
        let mut model = values.clone();

        for removal in &removals {
            let expected = model.iter().position(|v| v == removal).map(|i| model.remove(i));
            prop_assert_eq!(vec.remove_value(removal), expected);
            prop_assert!(vec.len() <= vec.cap());
        }

        prop_assert_eq!(&*vec, model.as_slice());
    }

    #[test]
    fn clones_are_independent(values in prop::collection::vec(any::<u8>(), 1..100)) {
        let original = Vector::from_slice(&values);
        let mut copy = original.clone();

        prop_assert_eq!(&copy, &original);
        copy[0] = copy[0].wrapping_add(1);
        prop_assert_eq!(&*original, values.as_slice());
    }

    #[test]
    fn negative_indices_mirror_positive(values in prop::collection::vec(any::<u32>(), 1..100)) {
        let vec = Vector::from_slice(&values);
        let len = values.len() as isize;

        for i in 1..=len {
            prop_assert_eq!(vec.try_at(-i), vec.try_at(len - i));
        }
        prop_assert!(vec.try_at(-len - 1).is_err());
    }
}
