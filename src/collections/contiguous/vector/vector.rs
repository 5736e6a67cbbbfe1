use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;
use std::ops::{Deref, DerefMut, Range};
use std::ptr;
use std::slice;

use derive_more::IsVariant;
use tracing::trace;

use crate::collections::contiguous::raw_buf::RawBuf;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, RangeOutOfBounds};
use crate::util::result::ResultExtension;

/// The smallest capacity that the growth policy will produce, allowing Vectors with a capacity of
/// 0 or 1 to grow at all.
const MIN_CAP: usize = 2;

/// The shrink threshold is `cap / SHRINK_DIVISOR`...
const SHRINK_DIVISOR: usize = 6;
/// ...unless that value would be smaller than this, in which case shrinking is disabled.
const SHRINK_FLOOR: usize = 64;

/// The direction in which [`Vector::contains_from`] scans for a value. The direction only affects
/// how quickly a match is found, never the result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum ScanFrom {
    /// Scan from index `0` towards the end.
    #[default]
    Front,
    /// Scan from the last element towards index `0`.
    Back,
}

/// A variable size contiguous collection with a capacity policy that both grows and shrinks.
///
/// # Capacity
/// When a Vector runs out of space, its capacity grows by a factor of 1.5 (`floor(cap * 1.5)`,
/// with a minimum of 2 so that empty allocations can grow). When elements are removed, the Vector
/// checks whether its length has fallen below a shrink threshold of `cap / 6` and halves its
/// capacity if so. For smaller Vectors (where `cap / 6 < 64`) the threshold is 0, so no shrinking
/// occurs and a Vector that oscillates around a small size doesn't reallocate repeatedly.
///
/// The threshold is checked before a removal takes place, which keeps the cost of a single
/// removal at `O(n)` rather than reallocating eagerly.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being appended.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `remove_at` | `O(n-i)`, `O(n)`** |
/// | `remove_value` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `append` | `O(n+m)` |
///
/// \* Amortized. If the Vector doesn't have enough capacity for the new element, `push` will take
/// `O(n)`.
///
/// \** If the length has fallen below the shrink threshold, the Vector is reallocated first.
pub struct Vector<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
    pub(crate) shrink_threshold: usize,
}

impl<T> Vector<T> {
    /// The capacity of a Vector created with [`Vector::new`].
    pub const DEFAULT_CAP: usize = 64;

    /// The capacity that a Vector is reset to by [`Vector::clear`].
    pub const BASELINE_CAP: usize = 32;

    /// Creates a new, empty Vector with a capacity of [`Vector::DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 64);
    /// ```
    pub fn new() -> Vector<T> {
        Vector::with_cap(Self::DEFAULT_CAP)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation. A capacity of 0 is valid and doesn't allocate.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: RawBuf::with_cap(cap),
            len: 0,
            shrink_threshold: threshold_for(cap),
        }
    }

    /// Creates a Vector of `count` elements by calling `f` with the index of each element, in
    /// order. The length and capacity are both equal to `count`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let vec = Vector::from_fn(4, |i| i * i);
    /// assert_eq!(&*vec, &[0, 1, 4, 9]);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub fn from_fn<F: FnMut(usize) -> T>(count: usize, mut f: F) -> Vector<T> {
        let mut vec = Vector::with_cap(count);

        for i in 0..count {
            // SAFETY: vec has been created with a capacity of count.
            unsafe { vec.push_unchecked(f(i)); }
        }

        vec
    }

    /// Returns the number of live elements in the Vector.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let vec = Vector::from([1_u8, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated, live or not.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the length below which the next removal will halve the capacity of the Vector. A
    /// threshold of 0 means that the Vector is too small to shrink.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// assert_eq!(Vector::<u8>::with_cap(64).shrink_threshold(), 0);
    /// assert_eq!(Vector::<u8>::with_cap(600).shrink_threshold(), 100);
    /// ```
    pub const fn shrink_threshold(&self) -> usize {
        self.shrink_threshold
    }

    /// Returns a reference to the element at `index`, where negative indices count backwards from
    /// the end of the Vector (`-1` is the last element).
    ///
    /// # Panics
    /// Panics if `index` doesn't refer to a live element.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let vec = Vector::from([5, 10, 15]);
    /// assert_eq!(*vec.at(0), 5);
    /// assert_eq!(*vec.at(-1), 15);
    /// ```
    pub fn at(&self, index: isize) -> &T {
        self.try_at(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, where negative indices count
    /// backwards from the end of the Vector.
    ///
    /// # Panics
    /// Panics if `index` doesn't refer to a live element.
    pub fn at_mut(&mut self, index: isize) -> &mut T {
        self.try_at_mut(index).throw()
    }

    /// Returns a reference to the element at `index`, where negative indices count backwards from
    /// the end of the Vector, returning an [`Err`] rather than panicking if there is no such
    /// element.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let vec = Vector::from([5, 10, 15]);
    /// assert_eq!(vec.try_at(-3), Ok(&5));
    /// assert!(vec.try_at(-4).is_err());
    /// assert!(vec.try_at(3).is_err());
    /// ```
    pub fn try_at(&self, index: isize) -> Result<&T, IndexOutOfBounds> {
        let resolved = self.resolve_index(index)?;
        // SAFETY: resolve_index only produces indices of live elements.
        Ok(unsafe { self.at_unchecked(resolved) })
    }

    /// Returns a mutable reference to the element at `index`, where negative indices count
    /// backwards from the end of the Vector, returning an [`Err`] rather than panicking if there
    /// is no such element.
    pub fn try_at_mut(&mut self, index: isize) -> Result<&mut T, IndexOutOfBounds> {
        let resolved = self.resolve_index(index)?;
        // SAFETY: resolve_index only produces indices of live elements.
        Ok(unsafe { self.at_unchecked_mut(resolved) })
    }

    /// Returns a reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len). Reading any other slot is undefined
    /// behavior.
    pub unsafe fn at_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that index < len, and all values < len are initialized.
        unsafe { &*self.buf.slot(index) }
    }

    /// Returns a mutable reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len). Accessing any other slot is undefined
    /// behavior.
    pub unsafe fn at_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees that index < len, and all values < len are initialized.
        // The mutable borrow of self prevents aliasing.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Push the provided value onto the end of the Vector, growing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::with_cap(0);
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    #[doc(alias = "add")]
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that `len < cap`, using methods like
    /// [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap). Using this method on a
    /// Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, so the slot at len is allocated and uninitialized.
        unsafe { self.buf.slot(self.len).write(value); }
        self.len += 1;
    }

    /// Constructs a new element in place at the end of the Vector, returning a reference to it.
    ///
    /// Growth happens before `init` is called. If `init` panics, the length of the Vector is left
    /// unchanged and nothing is counted as live.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`], or
    /// if `init` panics.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let mut vec: Vector<(u8, char)> = Vector::new();
    /// *vec.push_with(|| (1, 'a')) = (2, 'b');
    /// assert_eq!(&*vec, &[(2, 'b')]);
    /// ```
    #[doc(alias = "emplace")]
    pub fn push_with<F: FnOnce() -> T>(&mut self, init: F) -> &mut T {
        if self.len == self.cap() {
            self.grow();
        }

        let slot = self.len;
        let value = init();
        // SAFETY: The capacity was adjusted before init was invoked and init can't access self.
        unsafe {
            self.push_unchecked(value);
            self.at_unchecked_mut(slot)
        }
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0. Popping never shrinks the capacity.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// assert_eq!(vec.pop(), Some(2));
    /// assert_eq!(vec.pop(), Some(1));
    /// assert_eq!(vec.pop(), Some(0));
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, the slot is no longer considered live.
            self.len -= 1;

            // SAFETY: The slot at the old last index is initialized and is now outside of len, so
            // it won't be read or dropped again.
            Some(unsafe { self.buf.slot(self.len).read() })
        }
    }

    /// Removes the element at `index`, moving all following values to fill in the gap. The shrink
    /// policy is evaluated before the removal.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove_at(1), 'e');
    /// assert_eq!(vec.remove_at(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    /// Removes the element at `index`, returning an [`Err`] rather than panicking if it is out of
    /// bounds. Nothing is modified when an error is returned.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds::unsigned(index, self.len));
        }

        // SAFETY: index has just been checked to be within bounds.
        Ok(unsafe { self.remove_at_unchecked(index) })
    }

    /// Removes the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len).
    pub unsafe fn remove_at_unchecked(&mut self, index: usize) -> T {
        self.shrink_if_sparse();
        // SAFETY: Shrinking never discards live elements and the caller guarantees index < len.
        unsafe { self.take_at(index) }
    }

    /// Removes the first element which is equal to `value`, scanning from the front, and returns
    /// it. Does nothing and returns [`None`] if there is no such element. The shrink policy is
    /// evaluated before the scan takes place.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let mut vec = Vector::from([5, 10, 15, 10]);
    /// assert_eq!(vec.remove_value(&10), Some(10));
    /// assert_eq!(vec.remove_value(&20), None);
    /// assert_eq!(&*vec, &[5, 15, 10]);
    /// ```
    pub fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.shrink_if_sparse();

        let index = self.iter().position(|item| item == value)?;
        // SAFETY: position only yields indices of live elements.
        Some(unsafe { self.take_at(index) })
    }

    /// Returns true if any live element is equal to `value`, scanning from the front.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains_from(value, ScanFrom::Front)
    }

    /// Returns true if any live element is equal to `value`, scanning in the provided direction.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::{ScanFrom, Vector};
    /// let vec = Vector::from([5]);
    /// assert!(vec.contains_from(&5, ScanFrom::Back));
    /// assert!(!vec.contains_from(&6, ScanFrom::Back));
    /// ```
    pub fn contains_from(&self, value: &T, from: ScanFrom) -> bool
    where
        T: PartialEq,
    {
        match from {
            ScanFrom::Front => self.iter().any(|item| item == value),
            ScanFrom::Back => self.iter().rev().any(|item| item == value),
        }
    }

    /// Drops all elements and resets the Vector to a fresh allocation of
    /// [`Vector::BASELINE_CAP`] slots, regardless of its previous capacity.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let mut vec = Vector::from_fn(1000, |i| i);
    /// vec.clear();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 32);
    /// ```
    pub fn clear(&mut self) {
        self.drop_live();

        trace!(old_cap = self.cap(), new_cap = Self::BASELINE_CAP, "resetting vector");
        // The old allocation is released when the previous RawBuf is dropped.
        self.buf = RawBuf::with_cap(Self::BASELINE_CAP);
        self.shrink_threshold = 0;
    }

    /// Grows the Vector until it has room for at least `extra` more elements. Growth follows the
    /// regular 1.5x policy, so the resulting capacity may exceed `len + extra`.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();
        let mut new_cap = self.cap();

        while new_cap < required {
            new_cap = grown_cap(new_cap);
        }

        if new_cap != self.cap() {
            self.realloc_with_cap(new_cap);
        }
    }

    /// Moves every element out of self into a new Vector, leaving self empty with a capacity of
    /// zero and no allocation.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let mut a = Vector::from([1, 2, 3]);
    /// let b = a.take();
    /// assert_eq!(&*b, &[1, 2, 3]);
    /// assert_eq!(a.len(), 0);
    /// assert_eq!(a.cap(), 0);
    /// ```
    pub fn take(&mut self) -> Vector<T> {
        mem::replace(self, Vector::with_cap(0))
    }

    /// Maps a possibly negative index onto the index of a live element.
    pub(crate) fn resolve_index(&self, index: isize) -> Result<usize, IndexOutOfBounds> {
        let resolved = if index < 0 {
            self.len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs()).filter(|i| *i < self.len)
        };

        resolved.ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Moves the element at `index` out of the Vector and shifts all following elements left.
    ///
    /// # Safety
    /// `index` must be less than len.
    pub(crate) unsafe fn take_at(&mut self, index: usize) -> T {
        // SAFETY: index < len, so the slot is initialized. The shifted range [index + 1, len) is
        // initialized and stays within the allocation. ptr::copy handles the overlap.
        unsafe {
            let slot = self.buf.slot(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Halves the capacity if the length has dropped below the shrink threshold.
    pub(crate) fn shrink_if_sparse(&mut self) {
        if self.len < self.shrink_threshold {
            // len < cap / 6, so all live elements fit in the halved allocation.
            self.realloc_with_cap(self.cap() / 2);
        }
    }

    /// Grows the Vector by the growth policy, so that it can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        self.realloc_with_cap(grown_cap(self.cap()));
    }

    /// Moves the live elements into an allocation of `new_cap` slots and recomputes the shrink
    /// threshold. `new_cap` must be at least len.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        trace!(old_cap = self.cap(), new_cap, len = self.len, "reallocating vector");

        self.buf.realloc(new_cap);
        self.shrink_threshold = threshold_for(new_cap);
    }

    /// Drops all live elements in place, leaving the allocation untouched.
    pub(crate) fn drop_live(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len);
        // Set len first, so that a panicking destructor can't cause a double drop.
        self.len = 0;

        // SAFETY: All values in the slice were initialized and are no longer considered live.
        unsafe { ptr::drop_in_place(live) }
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a Vector with `count` copies of `value`. The length and capacity are both equal to
    /// `count`.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let vec = Vector::repeat("a", 3);
    /// assert_eq!(&*vec, &["a", "a", "a"]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn repeat(value: T, count: usize) -> Vector<T> {
        let mut vec = Vector::with_cap(count);

        for item in iter::repeat_n(value, count) {
            // SAFETY: vec has been created with a capacity of count.
            unsafe { vec.push_unchecked(item); }
        }

        vec
    }

    /// Creates a Vector by cloning every element of `items`, with a capacity of
    /// `floor(1.5 * items.len())` to leave room for further growth.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let vec = Vector::from_slice(&[1, 2, 3, 4]);
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    /// assert_eq!(vec.cap(), 6);
    /// ```
    pub fn from_slice(items: &[T]) -> Vector<T> {
        let mut vec = Vector::with_cap(headroom_cap(items.len()));

        for item in items {
            // SAFETY: The capacity is at least items.len().
            unsafe { vec.push_unchecked(item.clone()); }
        }

        vec
    }

    /// Appends clones of all elements of `other` to the end of self, growing as required.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let mut vec = Vector::from([5, 10]);
    /// vec.append(&Vector::from([15, 20]));
    /// assert_eq!(&*vec, &[5, 10, 15, 20]);
    /// ```
    pub fn append(&mut self, other: &Vector<T>) {
        self.extend_from_slice(other);
    }

    /// Appends clones of the elements of `other` within `range` to the end of self.
    ///
    /// # Panics
    /// Panics if `range` is empty, reversed or ends past the end of `other`.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0_usize]);
    /// vec.append_range(&Vector::from_fn(10, |i| i), 1..4);
    /// assert_eq!(&*vec, &[0, 1, 2, 3]);
    /// ```
    pub fn append_range(&mut self, other: &Vector<T>, range: Range<usize>) {
        self.try_append_range(other, range).throw()
    }

    /// Appends clones of the elements of `other` within `range` to the end of self, returning an
    /// [`Err`] rather than panicking if the range is invalid. Nothing is modified when an error is
    /// returned.
    pub fn try_append_range(
        &mut self,
        other: &Vector<T>,
        range: Range<usize>,
    ) -> Result<(), RangeOutOfBounds> {
        let Range { start, end } = range;

        if start >= end || end > other.len {
            return Err(RangeOutOfBounds {
                start,
                end,
                len: other.len,
            });
        }

        self.extend_from_slice(&other[start..end]);
        Ok(())
    }

    /// Appends clones of all elements of `items` to the end of self.
    pub fn extend_from_slice(&mut self, items: &[T]) {
        self.reserve(items.len());

        for item in items {
            // SAFETY: Enough capacity has been reserved for every element of items.
            unsafe { self.push_unchecked(item.clone()); }
        }
    }
}

/// Calculates the next capacity for the growth policy.
///
/// # Panics
/// Panics if the capacity would overflow a [`usize`].
fn grown_cap(cap: usize) -> usize {
    cmp::max(
        cap.checked_add(cap / 2).ok_or(CapacityOverflow).throw(),
        MIN_CAP,
    )
}

/// Calculates the capacity for a Vector built from an existing sequence of `len` elements.
fn headroom_cap(len: usize) -> usize {
    len.checked_add(len / 2).ok_or(CapacityOverflow).throw()
}

const fn threshold_for(cap: usize) -> usize {
    let threshold = cap / SHRINK_DIVISOR;
    if threshold < SHRINK_FLOOR { 0 } else { threshold }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Creates a Vector from an array literal, with the same `floor(1.5 * N)` capacity as
    /// [`Vector::from_slice`].
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(headroom_cap(N));

        for item in value {
            // SAFETY: The capacity is at least N.
            unsafe { vec.push_unchecked(item); }
        }

        vec
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        Vector::from_slice(value)
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.drop_live();
        // Implicitly drop self.buf, which deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull and properly aligned, even when nothing is allocated. The borrow checker
        // enforces that self isn't mutated while the slice exists.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the mutable borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Vectors uniquely own their allocation, so they are safe to send when T: Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    /// Clones the live elements into a new allocation sized to exactly the length of self.
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap(self.len);

        for item in self.iter() {
            // SAFETY: vec has been created with a capacity of self.len.
            unsafe { vec.push_unchecked(item.clone()); }
        }

        vec
    }

    /// Replaces self with a clone of `source`. Like [`clone`](Clone::clone), the new allocation is
    /// sized to exactly the length of `source`.
    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for Vector<T> {
    /// Formats the Vector as a bracketed, comma separated list with no spaces, e.g. `[5,10,15]`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            Display::fmt(item, f)?;
        }
        write!(f, "]")
    }
}
