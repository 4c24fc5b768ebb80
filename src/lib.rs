//! A contiguous, growable array with explicit capacity control.
//!
//! [`DynamicArray<T>`] owns a single heap buffer, tracks how many of its slots
//! hold live elements (the *length*) and how many are allocated (the
//! *capacity*), and grows that buffer by doubling: an empty array grows to one
//! slot, every later growth doubles the capacity. Appending is therefore
//! amortized `O(1)`.
//!
//! Unlike [`Vec<T>`](alloc::vec::Vec), capacity here is fully predictable:
//! [`reserve`](DynamicArray::reserve) takes the *total* capacity wanted and
//! allocates exactly that, [`shrink_to_fit`](DynamicArray::shrink_to_fit)
//! always leaves `capacity() == len()`, and clones are allocated tight.
//!
//! ## Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use dynamic_array::DynamicArray;
//!
//! let mut a = DynamicArray::new();
//! assert_eq!(a.capacity(), 0);
//!
//! a.push_back(1);
//! a.push_back(2);
//! a.push_back(3);
//!
//! // capacity went 0 -> 1 -> 2 -> 4
//! assert_eq!(a.len(), 3);
//! assert_eq!(a.capacity(), 4);
//! assert_eq!(a.front(), Ok(&1));
//! assert_eq!(a.back(), Ok(&3));
//!
//! // removal is lazy with respect to capacity
//! assert_eq!(a.pop_back(), Some(3));
//! assert_eq!(a.capacity(), 4);
//!
//! a.shrink_to_fit();
//! assert_eq!(a.capacity(), 2);
//! ```
//!
//! ### Checked Access
//!
//! Indexing with `[]` panics on an out-of-range index, just like slices do.
//! The `at`, `front` and `back` accessors report the same condition as an
//! [`Error`] instead:
//!
//! ```rust
//! use dynamic_array::{dynarray, Error};
//!
//! let a = dynarray![7; 3];
//! assert_eq!(a, [7, 7, 7]);
//! assert_eq!(a.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
//! ```
//!
//! ### Cursors
//!
//! [`Cursor`]s walk the array in both directions, starting from
//! [`begin`](DynamicArray::begin) or the one-past-the-end
//! [`end`](DynamicArray::end):
//!
//! ```rust
//! use dynamic_array::dynarray;
//!
//! let a = dynarray!["a", "b", "c"];
//! let mut backwards = Vec::new();
//!
//! let mut it = a.end();
//! while it != a.begin() {
//!     it.decrement().unwrap();
//!     backwards.push(*it.get().unwrap());
//! }
//! assert_eq!(backwards, ["c", "b", "a"]);
//! ```
//!
//! ## Features
//!
//! - `log` (default): emit [`log`](https://docs.rs/log) records when the
//!   buffer is allocated, moved or released.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(feature = "log")]
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        log::$level!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {};
}

mod cursor;
mod error;
mod into_iter;
mod raw;

pub use cursor::{Cursor, CursorMut};
pub use error::Error;
pub use into_iter::IntoIter;

use alloc::alloc::handle_alloc_error;
use core::{
    fmt,
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop},
    ops::{Index, IndexMut},
    ptr, slice,
};

use raw::RawBuf;

/// Creates a [`DynamicArray`] from a literal sequence, like `vec!`.
///
/// - `dynarray![]` creates an empty array.
/// - `dynarray![a, b, c]` moves the listed values in, with capacity equal to
///   their count.
/// - `dynarray![value; count]` holds `count` clones of `value`, with capacity
///   `count`.
///
/// # Examples
///
/// ```
/// use dynamic_array::dynarray;
///
/// let a = dynarray![1, 2, 3];
/// assert_eq!(a.len(), 3);
/// assert_eq!(a.capacity(), 3);
///
/// let b = dynarray![0u8; 4];
/// assert_eq!(b, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::filled($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}

/// Converts the result of a fallible allocation into the behavior of the
/// infallible API: abort through the allocation error handler, or panic.
#[track_caller]
fn handle_reserve<R>(result: Result<R, Error>) -> R {
    match result {
        Ok(value) => value,
        Err(Error::AllocationFailure { layout }) => handle_alloc_error(layout),
        Err(err) => panic!("{err}"),
    }
}

/// An owning, contiguous, resizable sequence of `T`.
///
/// Elements `[0, len)` are live; slots `[len, capacity)` are allocated but
/// hold nothing. A `DynamicArray` with capacity `0` owns no memory.
///
/// # Examples
///
/// ```
/// use dynamic_array::DynamicArray;
///
/// let mut a = DynamicArray::with_capacity(2);
/// a.push_back("left");
/// a.push_back("right");
/// assert_eq!(a.capacity(), 2);
///
/// // growth doubles
/// a.push_back("center");
/// assert_eq!(a.capacity(), 4);
/// assert_eq!(a[2], "center");
/// ```
pub struct DynamicArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Constructs a new, empty `DynamicArray<T>`.
    ///
    /// The array will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let a: DynamicArray<i32> = DynamicArray::new();
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Constructs a new, empty `DynamicArray<T>` with exactly `capacity`
    /// allocated slots.
    ///
    /// # Panics
    ///
    /// Panics if the capacity exceeds `isize::MAX` bytes, and aborts through
    /// [`handle_alloc_error`] if the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let a: DynamicArray<u32> = DynamicArray::with_capacity(10);
    /// assert_eq!(a.len(), 0);
    /// assert_eq!(a.capacity(), 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        handle_reserve(Self::try_with_capacity(capacity))
    }

    /// Fallible version of [`DynamicArray::with_capacity`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailure`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::try_with_capacity(capacity)?,
            len: 0,
        })
    }

    /// Returns the number of live elements in the array.
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array contains no elements.
    #[doc(alias = "empty")]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Extracts a slice containing the live elements.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized and the pointer is non-null and
        // aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// Extracts a mutable slice containing the live elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, with unique access through `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Returns a raw pointer to the buffer. The pointer is dangling when the
    /// capacity is `0`, and is invalidated by any reallocation.
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Returns a raw mutable pointer to the buffer, with the same caveats as
    /// [`as_ptr`](DynamicArray::as_ptr).
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// Returns an iterator over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each live element.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `index`, or `None` if it is out
    /// of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// it is out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{dynarray, Error};
    ///
    /// let a = dynarray![3, 4];
    /// assert_eq!(a.at(1), Ok(&4));
    /// assert_eq!(a.at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.get(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Mutable version of [`DynamicArray::at`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be below [`len`](DynamicArray::len).
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: upheld by the caller.
        unsafe { &*self.buf.ptr().add(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be below [`len`](DynamicArray::len).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: upheld by the caller.
        unsafe { &mut *self.buf.ptr().add(index) }
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the array is empty.
    pub fn front(&self) -> Result<&T, Error> {
        self.at(0)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the array is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.at_mut(0)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the array is empty.
    pub fn back(&self) -> Result<&T, Error> {
        match self.len.checked_sub(1) {
            Some(last) => self.at(last),
            None => Err(Error::OutOfRange { index: 0, len: 0 }),
        }
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the array is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        match self.len.checked_sub(1) {
            Some(last) => self.at_mut(last),
            None => Err(Error::OutOfRange { index: 0, len: 0 }),
        }
    }

    /// Appends `value` to the back of the array.
    ///
    /// When the array is full the capacity grows first: to `1` from an empty
    /// array, otherwise to twice the current capacity.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes, and aborts
    /// through [`handle_alloc_error`] if the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut a = DynamicArray::new();
    /// let mut capacities = Vec::new();
    /// for i in 0..5 {
    ///     a.push_back(i);
    ///     capacities.push(a.capacity());
    /// }
    /// assert_eq!(capacities, [1, 2, 4, 4, 8]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        handle_reserve(self.try_push_back(value));
    }

    /// Fallible version of [`DynamicArray::push_back`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailure`] if
    /// the array had to grow and could not. The array is left unchanged and
    /// `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.buf.capacity() {
            self.buf.try_grow_amortized()?;
        }
        // SAFETY: `len < capacity` after the growth above.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Writes `value` to the first free slot.
    ///
    /// # Safety
    ///
    /// `len` must be below the capacity.
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.buf.capacity());
        // SAFETY: the slot at `len` is allocated and holds nothing.
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Removes the last element and returns it, or `None` if the array is
    /// empty. The capacity is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::dynarray;
    ///
    /// let mut a = dynarray![1, 2];
    /// assert_eq!(a.pop_back(), Some(2));
    /// assert_eq!(a.pop_back(), Some(1));
    /// assert_eq!(a.pop_back(), None);
    /// assert_eq!(a.capacity(), 2);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot was live and is now outside `[0, len)`.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Shortens the array to `len` elements, dropping the rest. Has no effect
    /// if `len` is not below the current length. The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        // SAFETY: `[len, self.len)` is live; shrinking `self.len` first means
        // a panicking destructor cannot cause a double drop.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(len), self.len - len);
            self.len = len;
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element. The capacity and the buffer are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::dynarray;
    ///
    /// let mut a = dynarray![1, 2, 3];
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Grows the buffer to exactly `new_capacity` slots.
    ///
    /// `new_capacity` is the *total* capacity wanted, not an additional
    /// amount. If it does not exceed the current capacity this does nothing.
    /// The length and the elements are never changed.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes, and aborts
    /// through [`handle_alloc_error`] if the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::dynarray;
    ///
    /// let mut a = dynarray![1, 2];
    /// a.reserve(10);
    /// assert_eq!(a.capacity(), 10);
    ///
    /// a.reserve(3);
    /// assert_eq!(a.capacity(), 10);
    /// assert_eq!(a, [1, 2]);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        handle_reserve(self.try_reserve(new_capacity));
    }

    /// Fallible version of [`DynamicArray::reserve`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailure`];
    /// the array is left unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.buf.capacity() {
            return Ok(());
        }
        self.buf.try_reallocate(new_capacity)
    }

    /// Shrinks the capacity to exactly the length. An empty array releases its
    /// buffer entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut a = DynamicArray::with_capacity(10);
    /// a.push_back(1);
    /// a.shrink_to_fit();
    /// assert_eq!(a.capacity(), 1);
    ///
    /// a.clear();
    /// a.shrink_to_fit();
    /// assert_eq!(a.capacity(), 0);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        handle_reserve(self.try_shrink_to_fit());
    }

    /// Fallible version of [`DynamicArray::shrink_to_fit`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the allocator cannot move the
    /// elements into the smaller block; the array is left unchanged.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), Error> {
        if self.len == self.buf.capacity() {
            return Ok(());
        }
        if self.len == 0 {
            log_event!(debug, "releasing empty dynamic array of capacity {}", self.buf.capacity());
        }
        self.buf.try_reallocate(self.len)
    }

    /// Exchanges the contents of `self` and `other` in `O(1)`, without
    /// touching any element.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{dynarray, DynamicArray};
    ///
    /// let mut a = dynarray![1, 2, 3];
    /// let mut b = DynamicArray::with_capacity(8);
    /// a.swap(&mut b);
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), 8);
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the whole contents out into a new array, leaving `self` empty
    /// with capacity `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::dynarray;
    ///
    /// let mut a = dynarray![1, 2, 3];
    /// let b = a.take();
    /// assert_eq!(b, [1, 2, 3]);
    /// assert_eq!((a.len(), a.capacity()), (0, 0));
    /// ```
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Replaces the contents of `self` with those of `rhs`, dropping the old
    /// elements and buffer of `self`. `rhs` is left empty with capacity `0`.
    pub fn take_from(&mut self, rhs: &mut Self) {
        *self = rhs.take();
    }

    /// Returns a cursor at the first element.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len)
    }

    /// Returns a mutable cursor at the first element.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Returns a mutable cursor one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len;
        CursorMut::new(self, len)
    }

    /// Grows the length to `new_len`, filling new slots with values from `f`.
    /// Capacity is ensured through the exact `reserve` rule.
    fn try_extend_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        self.try_reserve(new_len)?;
        while self.len < new_len {
            // SAFETY: capacity is at least `new_len`.
            unsafe { self.push_unchecked(f()) };
        }
        Ok(())
    }
}

impl<T: Default> DynamicArray<T> {
    /// Constructs an array of `count` default values, with capacity `count`.
    ///
    /// # Panics
    ///
    /// Same as [`DynamicArray::with_capacity`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let a: DynamicArray<i32> = DynamicArray::with_len(3);
    /// assert_eq!(a, [0, 0, 0]);
    /// assert_eq!(a.capacity(), 3);
    /// ```
    pub fn with_len(count: usize) -> Self {
        handle_reserve(Self::try_with_len(count))
    }

    /// Fallible version of [`DynamicArray::with_len`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailure`].
    pub fn try_with_len(count: usize) -> Result<Self, Error> {
        let mut array = Self::try_with_capacity(count)?;
        array.try_extend_with(count, T::default)?;
        Ok(array)
    }

    /// Resizes the array to `new_len`, filling new slots with `T::default()`
    /// or dropping the excess.
    ///
    /// If `new_len` exceeds the capacity, the capacity becomes exactly
    /// `new_len`.
    ///
    /// # Panics
    ///
    /// Same as [`DynamicArray::reserve`].
    pub fn resize_default(&mut self, new_len: usize) {
        handle_reserve(self.try_resize_default(new_len));
    }

    /// Fallible version of [`DynamicArray::resize_default`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailure`];
    /// the array is left unchanged.
    pub fn try_resize_default(&mut self, new_len: usize) -> Result<(), Error> {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.try_extend_with(new_len, T::default)
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Constructs an array of `count` clones of `value`, with capacity `count`.
    ///
    /// # Panics
    ///
    /// Same as [`DynamicArray::with_capacity`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let a = DynamicArray::filled(3, 7);
    /// assert_eq!(a, [7, 7, 7]);
    /// assert_eq!(a.capacity(), 3);
    /// ```
    pub fn filled(count: usize, value: T) -> Self {
        handle_reserve(Self::try_filled(count, value))
    }

    /// Fallible version of [`DynamicArray::filled`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailure`].
    pub fn try_filled(count: usize, value: T) -> Result<Self, Error> {
        let mut array = Self::try_with_capacity(count)?;
        array.try_extend_with(count, || value.clone())?;
        Ok(array)
    }

    /// Constructs an array holding clones of `values`, in order, with
    /// capacity `values.len()`.
    pub fn from_slice(values: &[T]) -> Self {
        handle_reserve(Self::try_from_slice(values))
    }

    /// Fallible version of [`DynamicArray::from_slice`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailure`].
    pub fn try_from_slice(values: &[T]) -> Result<Self, Error> {
        let mut array = Self::try_with_capacity(values.len())?;
        for value in values {
            // SAFETY: capacity is exactly `values.len()`.
            unsafe { array.push_unchecked(value.clone()) };
        }
        Ok(array)
    }

    /// Deep-copies the live elements into a new array whose capacity equals
    /// the length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailure`].
    pub fn try_clone(&self) -> Result<Self, Error> {
        Self::try_from_slice(self.as_slice())
    }

    /// Resizes the array to `new_len`, filling new slots with clones of
    /// `value` or dropping the excess.
    ///
    /// If `new_len` exceeds the capacity, the capacity becomes exactly
    /// `new_len`.
    ///
    /// # Panics
    ///
    /// Same as [`DynamicArray::reserve`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::dynarray;
    ///
    /// let mut a = dynarray![1];
    /// a.resize(4, 9);
    /// assert_eq!(a, [1, 9, 9, 9]);
    /// assert_eq!(a.capacity(), 4);
    ///
    /// a.resize(2, 0);
    /// assert_eq!(a, [1, 9]);
    /// assert_eq!(a.capacity(), 4);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) {
        handle_reserve(self.try_resize(new_len, value));
    }

    /// Fallible version of [`DynamicArray::resize`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailure`];
    /// the array is left unchanged.
    pub fn try_resize(&mut self, new_len: usize, value: T) -> Result<(), Error> {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.try_extend_with(new_len, || value.clone())
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // SAFETY: every live element is dropped exactly once; `buf` then
        // releases the memory.
        unsafe { ptr::drop_in_place(live) };
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        handle_reserve(self.try_clone())
    }

    /// Reuses the existing buffer when it is large enough; otherwise grows it
    /// to exactly `source.len()`.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.reserve(source.len());
        for value in source {
            // SAFETY: capacity is at least `source.len()`.
            unsafe { self.push_unchecked(value.clone()) };
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        for value in values {
            // SAFETY: capacity is exactly `N`.
            unsafe { array.push_unchecked(value) };
        }
        array
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        // the elements now belong to the iterator; skip our own `Drop`
        let mut this = ManuallyDrop::new(self);
        let buf = mem::replace(&mut this.buf, RawBuf::new());
        IntoIter::new(buf, this.len)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
