use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem::{self, ManuallyDrop};
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::raw_buf::RawBuf;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // The Vector must not drop its elements, they now belong to the iterator.
        let mut vec = ManuallyDrop::new(self);

        IntoIter {
            buf: mem::replace(&mut vec.buf, RawBuf::dangling()),
            start: 0,
            end: vec.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
///
/// Elements in `[start, end)` haven't been yielded yet and are still initialized. The allocation is
/// released once the iterator is dropped, along with any remaining elements.
pub struct IntoIter<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the elements that haven't been yielded yet as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: All values in [start, end) are initialized and within the allocation.
        unsafe { slice::from_raw_parts(self.buf.slot(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end, so the slot is initialized. Incrementing start afterwards means
            // that the value is effectively moved out of the allocation.
            let value = unsafe { self.buf.slot(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end is still >= start, so the slot is initialized.
            Some(unsafe { self.buf.slot(self.end).read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: The remaining values are initialized and will never be read again. The RawBuf
        // releases the memory once this returns.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.slot(self.start),
                self.end - self.start,
            ));
        }
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

// SAFETY: IntoIter uniquely owns its allocation and remaining elements, just like Vector.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: IntoIter only exposes shared access through a shared reference.
unsafe impl<T: Sync> Sync for IntoIter<T> {}
