use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An owned block of `cap` uninitialized slots for values of type `T`, acting as the storage for
/// [`Vector`](super::Vector).
///
/// RawBuf never reads, writes or drops the values stored in it. Tracking which slots are
/// initialized is the responsibility of the owner, RawBuf only handles the allocation itself and
/// releases it exactly once when dropped.
pub(crate) struct RawBuf<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Creates a RawBuf with no capacity and no allocation.
    pub(crate) const fn dangling() -> RawBuf<T> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a new RawBuf with exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn with_cap(cap: usize) -> RawBuf<T> {
        let layout = Self::make_layout(cap);

        RawBuf {
            ptr: Self::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr().cast()
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be no greater than the capacity of the RawBuf. A pointer to the slot at `cap`
    /// is valid to create but not to read from or write to.
    pub(crate) const unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees that the offset stays within (or one past the end of) the
        // allocation, which can't exceed isize::MAX bytes.
        unsafe { self.as_ptr().add(index) }
    }

    /// Moves the contents of the RawBuf into an allocation of `new_cap` slots, releasing the old
    /// one. Slots below `min(cap, new_cap)` keep their bytes, so initialized values are relocated
    /// rather than copied. Slots beyond `new_cap` are discarded without being dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        let old_layout = Self::make_layout(self.cap);
        let new_layout = Self::make_layout(new_cap);

        let new_ptr = match (old_layout.size(), new_layout.size()) {
            // Zero-sized types and zero capacities never hold an allocation, so there is nothing
            // to move.
            (0, 0) => self.ptr,
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with old_layout, which has a
                // non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) };
                NonNull::dangling()
            },
            (old, new) if old == new => return,
            (_, new) => {
                // SAFETY: ptr was allocated in the global allocator with old_layout. The new size
                // is non-zero and Layout::array has already verified that it doesn't exceed
                // isize::MAX once rounded to the alignment.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Creates a [`Layout`] for `cap` values of `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow).throw()
    }

    /// Allocates memory for `layout`, or returns a dangling pointer if it has a size of zero.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] rather
    /// than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator with this layout when its
            // size is non-zero.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}
