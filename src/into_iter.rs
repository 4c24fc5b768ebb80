use core::{fmt, iter::FusedIterator, ptr, slice};

use crate::raw::RawBuf;

/// An iterator that moves out of a [`DynamicArray`](crate::DynamicArray).
///
/// Created by the `into_iter` method on `DynamicArray` (provided by the
/// [`IntoIterator`] trait). Elements that are not consumed are dropped
/// together with the iterator.
///
/// # Examples
///
/// ```
/// use dynamic_array::dynarray;
///
/// let a = dynarray![String::from("a"), String::from("b")];
/// let mut iter = a.into_iter();
/// assert_eq!(iter.next_back().as_deref(), Some("b"));
/// assert_eq!(iter.len(), 1);
/// ```
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// `buf` must hold `len` initialized elements at its front.
    pub(crate) fn new(buf: RawBuf<T>, len: usize) -> Self {
        Self {
            buf,
            start: 0,
            end: len,
        }
    }

    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` is initialized and not yet moved out.
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) }
    }

    /// Returns the remaining elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `self` is borrowed mutably.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start < end`, so the slot is live; bumping `start` marks it moved.
        let value = unsafe { ptr::read(self.buf.ptr().add(self.start)) };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: the slot at the old `end - 1` is live and now outside the range.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = self.as_mut_slice();
        // SAFETY: the remaining elements are live and are never read again;
        // `buf` frees the memory afterwards.
        unsafe { ptr::drop_in_place(remaining) };
    }
}
