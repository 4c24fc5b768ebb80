//! Bidirectional cursors over the live elements of a [`DynamicArray`].
//!
//! A cursor is a logical position inside an array: an index in `0..=len`,
//! where `len` is the one-past-the-end position returned by
//! [`DynamicArray::end`]. Cursors borrow the array they walk, so any
//! operation that may reallocate the buffer (`push_back`, `reserve`,
//! `resize`, `shrink_to_fit`, ...) cannot be called while a cursor is alive.
//! Re-acquire cursors with [`DynamicArray::begin`] / [`DynamicArray::end`]
//! after such an operation.
//!
//! Unlike raw pointers, dereferencing and stepping before the start are
//! checked and report [`Error::OutOfRange`].

use core::{fmt, ptr};

use crate::{DynamicArray, Error};

/// A shared, copyable cursor into a [`DynamicArray`].
///
/// The default cursor is the *null* position: it belongs to no array and
/// every dereference fails.
///
/// # Examples
///
/// ```
/// use dynamic_array::dynarray;
///
/// let a = dynarray![1, 2, 3];
/// let mut seen = Vec::new();
///
/// let mut it = a.begin();
/// while it != a.end() {
///     seen.push(*it.get().unwrap());
///     it.increment();
/// }
/// assert_eq!(seen, [1, 2, 3]);
/// ```
pub struct Cursor<'a, T> {
    array: Option<&'a DynamicArray<T>>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(array: &'a DynamicArray<T>, index: usize) -> Self {
        Self {
            array: Some(array),
            index,
        }
    }

    /// Returns the logical position of the cursor.
    pub fn index(&self) -> usize {
        self.index
    }

    fn array_len(&self) -> usize {
        self.array.map_or(0, DynamicArray::len)
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the cursor is null or sits at or
    /// beyond the end of the array.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{dynarray, Error};
    ///
    /// let a = dynarray![10, 20];
    /// assert_eq!(a.begin().get(), Ok(&10));
    /// assert_eq!(a.end().get(), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self) -> Result<&'a T, Error> {
        match self.array {
            Some(array) => array.at(self.index),
            None => Err(Error::OutOfRange {
                index: self.index,
                len: 0,
            }),
        }
    }

    /// Returns the element under the cursor without any checks.
    ///
    /// # Safety
    ///
    /// The cursor must not be null and its index must be below the array's
    /// length.
    pub unsafe fn get_unchecked(&self) -> &'a T {
        // SAFETY: upheld by the caller.
        unsafe { self.array.unwrap_unchecked().get_unchecked(self.index) }
    }

    /// Advances the cursor by one slot and returns it (prefix increment).
    ///
    /// Stepping past the end is allowed; the cursor simply stops being
    /// dereferenceable. The index saturates at `usize::MAX`.
    pub fn increment(&mut self) -> &mut Self {
        self.index = self.index.saturating_add(1);
        self
    }

    /// Advances the cursor by one slot and returns its previous value
    /// (postfix increment).
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::dynarray;
    ///
    /// let a = dynarray!['x', 'y'];
    /// let mut it = a.begin();
    /// let before = it.post_increment();
    /// assert_eq!(before.get(), Ok(&'x'));
    /// assert_eq!(it.get(), Ok(&'y'));
    /// ```
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.index = self.index.saturating_add(1);
        previous
    }

    /// Moves the cursor back by one slot and returns it (prefix decrement).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when the cursor is already at index
    /// `0`. The cursor is left where it was.
    pub fn decrement(&mut self) -> Result<&mut Self, Error> {
        self.index = self.index.checked_sub(1).ok_or(Error::OutOfRange {
            index: 0,
            len: self.array_len(),
        })?;
        Ok(self)
    }

    /// Moves the cursor back by one slot and returns its previous value
    /// (postfix decrement).
    ///
    /// # Errors
    ///
    /// Same as [`Cursor::decrement`].
    pub fn post_decrement(&mut self) -> Result<Self, Error> {
        let previous = *self;
        self.decrement()?;
        Ok(previous)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Default for Cursor<'_, T> {
    fn default() -> Self {
        Self {
            array: None,
            index: 0,
        }
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        let same_array = match (self.array, other.array) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_array && self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.array.map(DynamicArray::len))
            .finish()
    }
}

/// A cursor with mutable access to the elements of a [`DynamicArray`].
///
/// Holding a `CursorMut` borrows the array exclusively, so it can neither be
/// copied nor compared with other cursors.
///
/// # Examples
///
/// ```
/// use dynamic_array::dynarray;
///
/// let mut a = dynarray![1, 2, 3];
/// let mut it = a.begin_mut();
/// while let Ok(value) = it.get_mut() {
///     *value *= 10;
///     it.increment();
/// }
/// assert_eq!(a, [10, 20, 30]);
/// ```
pub struct CursorMut<'a, T> {
    array: &'a mut DynamicArray<T>,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(array: &'a mut DynamicArray<T>, index: usize) -> Self {
        Self { array, index }
    }

    /// Returns the logical position of the cursor.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] at or beyond the end of the array.
    pub fn get(&self) -> Result<&T, Error> {
        self.array.at(self.index)
    }

    /// Returns a mutable reference to the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] at or beyond the end of the array.
    pub fn get_mut(&mut self) -> Result<&mut T, Error> {
        self.array.at_mut(self.index)
    }

    /// Converts the cursor into a mutable reference to the element under it,
    /// borrowed for the cursor's whole lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] at or beyond the end of the array.
    pub fn into_mut(self) -> Result<&'a mut T, Error> {
        self.array.at_mut(self.index)
    }

    /// Advances the cursor by one slot and returns it.
    pub fn increment(&mut self) -> &mut Self {
        self.index = self.index.saturating_add(1);
        self
    }

    /// Advances the cursor and returns the index it was at before.
    pub fn post_increment(&mut self) -> usize {
        let previous = self.index;
        self.index = self.index.saturating_add(1);
        previous
    }

    /// Moves the cursor back by one slot and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when the cursor is already at index `0`.
    pub fn decrement(&mut self) -> Result<&mut Self, Error> {
        self.index = self.index.checked_sub(1).ok_or(Error::OutOfRange {
            index: 0,
            len: self.array.len(),
        })?;
        Ok(self)
    }

    /// Moves the cursor back and returns the index it was at before.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when the cursor is already at index `0`.
    pub fn post_decrement(&mut self) -> Result<usize, Error> {
        let previous = self.index;
        self.decrement()?;
        Ok(previous)
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.array.len())
            .finish()
    }
}
