//! The exclusively-owned heap buffer behind [`DynamicArray`](crate::DynamicArray).
//!
//! `RawBuf<T>` only knows about slots, never about which of them hold live
//! values. Dropping elements is the owner's job; `RawBuf` releases memory.

use alloc::alloc::{Layout, alloc, dealloc, realloc};
use core::{marker::PhantomData, ptr::NonNull};

use crate::Error;

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuf<T>` uniquely owns its allocation, exactly like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access only ever hands out `&T`.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        let mut buf = Self::new();
        buf.try_reallocate(capacity)?;
        Ok(buf)
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Capacity the doubling policy picks for the next push: `1` from an
    /// empty buffer, twice the current capacity otherwise.
    pub(crate) fn next_capacity(&self) -> Result<usize, Error> {
        if self.cap == 0 {
            Ok(1)
        } else {
            self.cap.checked_mul(2).ok_or(Error::CapacityOverflow)
        }
    }

    pub(crate) fn try_grow_amortized(&mut self) -> Result<(), Error> {
        let new_cap = self.next_capacity()?;
        self.try_reallocate(new_cap)
    }

    /// Moves the buffer to exactly `new_cap` slots, keeping the first
    /// `min(cap, new_cap)` slots' bytes. `new_cap == 0` releases the buffer.
    ///
    /// On error the buffer is left untouched.
    pub(crate) fn try_reallocate(&mut self, new_cap: usize) -> Result<(), Error> {
        if new_cap == self.cap {
            return Ok(());
        }
        if new_cap == 0 {
            self.release();
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_cap).map_err(|_| Error::CapacityOverflow)?;
        if new_layout.size() == 0 {
            // zero-sized elements never touch the allocator
            self.cap = new_cap;
            return Ok(());
        }

        let raw = if self.cap == 0 {
            // SAFETY: `new_layout` has a non-zero size.
            unsafe { alloc(new_layout) }
        } else {
            let old_layout = Layout::array::<T>(self.cap).map_err(|_| Error::CapacityOverflow)?;
            // SAFETY: `ptr` was allocated with `old_layout`, and the new size
            // is non-zero and was validated by `Layout::array`.
            unsafe { realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) }
        };

        let ptr = NonNull::new(raw.cast::<T>()).ok_or(Error::AllocationFailure {
            layout: new_layout,
        })?;
        log_event!(
            trace,
            "dynamic array buffer moved from {} to {} slots ({} bytes)",
            self.cap,
            new_cap,
            new_layout.size()
        );
        self.ptr = ptr;
        self.cap = new_cap;
        Ok(())
    }

    pub(crate) fn release(&mut self) {
        if self.cap == 0 {
            return;
        }
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            if layout.size() != 0 {
                log_event!(trace, "dynamic array buffer of {} slots released", self.cap);
                // SAFETY: `ptr` was allocated with exactly this layout.
                unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };
            }
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}
