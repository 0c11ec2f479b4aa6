//! Iterators over the rows of a span.
//!
//! Each row is a tuple of references, one per column. Iterating a span is
//! therefore like iterating a [`zip()`] of its columns, but with a single
//! position shared by all of them.
//!
//! [`zip()`]: std::iter::Iterator::zip

use std::fmt::{self, Debug};
use std::iter::{FusedIterator};
use std::marker::{PhantomData};

use super::{Columns, SpanTuple, SpanTupleMut};

/// An iterator over the rows of a [`SpanTuple`].
///
/// Returned by [`SpanTuple::iter()`]. It is double-ended, so `.rev()` gives
/// the rows in reverse order.
///
/// ```
/// use span_tuple::{span};
/// let s = span((&[1, 2, 3], &["one", "two", "three"]));
/// let names: Vec<_> = s.iter().rev().map(|(_, name)| *name).collect();
/// assert_eq!(names, ["three", "two", "one"]);
/// ```
pub struct Iter<'a, C: Columns> {
    base: C::Ptr,
    front: usize,
    back: usize,
    marker: PhantomData<&'a C>,
}

impl<'a, C: Columns> Clone for Iter<'a, C> {
    fn clone(&self) -> Self {
        Self {base: self.base, front: self.front, back: self.back, marker: PhantomData}
    }
}

unsafe impl<'a, C: Columns + Sync> Send for Iter<'a, C> {}
unsafe impl<'a, C: Columns + Sync> Sync for Iter<'a, C> {}

impl<'a, C: Columns> Iter<'a, C> {
    /// Constructs an `Iter` over `len` rows starting at `ptr`.
    ///
    /// # Safety
    ///
    /// Every pointer in `ptr` must be valid for reads of `len` elements for
    /// `'a`.
    #[inline(always)]
    pub unsafe fn from_raw_parts(ptr: C::Ptr, len: usize) -> Self {
        Self::from_range(ptr, 0, len)
    }

    /// Constructs an `Iter` over rows `front..back` of `base`.
    #[inline(always)]
    pub(crate) unsafe fn from_range(base: C::Ptr, front: usize, back: usize) -> Self {
        debug_assert!(front <= back);
        Self {base, front, back, marker: PhantomData}
    }

    /// Returns the tuple of pointers to the next row.
    #[inline(always)]
    pub fn as_ptr(&self) -> C::Ptr { unsafe { C::add(self.base, self.front) } }

    /// Returns the rows that have not yet been yielded.
    ///
    /// ```
    /// use span_tuple::{span};
    /// let s = span((&[1, 2, 3, 4],));
    /// let mut it = s.iter();
    /// it.next();
    /// it.next_back();
    /// assert_eq!(it.as_span().columns(), (&[2, 3][..],));
    /// ```
    pub fn as_span(&self) -> SpanTuple<'a, C> {
        unsafe { SpanTuple::from_raw_parts(self.as_ptr(), self.back - self.front) }
    }
}

impl<'a, C: Columns> Iterator for Iter<'a, C> {
    type Item = C::Ref<'a>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        let row = unsafe { C::get(C::add(self.base, self.front)) };
        self.front += 1;
        Some(row)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    fn last(mut self) -> Option<Self::Item> { self.next_back() }

    fn count(self) -> usize { self.len() }
}

impl<'a, C: Columns> DoubleEndedIterator for Iter<'a, C> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        self.back -= 1;
        Some(unsafe { C::get(C::add(self.base, self.back)) })
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<'a, C: Columns> ExactSizeIterator for Iter<'a, C> {}

impl<'a, C: Columns> FusedIterator for Iter<'a, C> {}

impl<'a, C: Columns> Debug for Iter<'a, C> where C::Ref<'a>: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_span()).finish()
    }
}

// ----------------------------------------------------------------------------

/// An iterator that mutably borrows the rows of a [`SpanTupleMut`].
///
/// Returned by [`SpanTupleMut::iter_mut()`].
pub struct IterMut<'a, C: Columns> {
    base: C::Ptr,
    front: usize,
    back: usize,
    marker: PhantomData<&'a mut C>,
}

unsafe impl<'a, C: Columns + Send> Send for IterMut<'a, C> {}
unsafe impl<'a, C: Columns + Sync> Sync for IterMut<'a, C> {}

impl<'a, C: Columns> IterMut<'a, C> {
    /// Constructs an `IterMut` over `len` rows starting at `ptr`.
    ///
    /// # Safety
    ///
    /// Every pointer in `ptr` must be valid for reads and writes of `len`
    /// elements for `'a`, and nothing else may access them for `'a`.
    #[inline(always)]
    pub unsafe fn from_raw_parts(ptr: C::Ptr, len: usize) -> Self {
        Self {base: ptr, front: 0, back: len, marker: PhantomData}
    }

    /// Borrows the rows that have not yet been yielded.
    pub fn as_span(&self) -> SpanTuple<'_, C> {
        unsafe { SpanTuple::from_raw_parts(C::add(self.base, self.front), self.back - self.front) }
    }

    /// Returns the rows that have not yet been yielded.
    ///
    /// ```
    /// use span_tuple::{span_mut};
    /// let mut a = [1, 2, 3];
    /// let mut it = span_mut((&mut a,)).into_iter();
    /// it.next();
    /// it.into_span().fill((0,));
    /// assert_eq!(a, [1, 0, 0]);
    /// ```
    pub fn into_span(self) -> SpanTupleMut<'a, C> {
        unsafe { SpanTupleMut::from_raw_parts(C::add(self.base, self.front), self.back - self.front) }
    }
}

impl<'a, C: Columns> Iterator for IterMut<'a, C> {
    type Item = C::Mut<'a>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        let row = unsafe { C::get_mut(C::add(self.base, self.front)) };
        self.front += 1;
        Some(row)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    fn last(mut self) -> Option<Self::Item> { self.next_back() }

    fn count(self) -> usize { self.len() }
}

impl<'a, C: Columns> DoubleEndedIterator for IterMut<'a, C> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        self.back -= 1;
        Some(unsafe { C::get_mut(C::add(self.base, self.back)) })
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<'a, C: Columns> ExactSizeIterator for IterMut<'a, C> {}

impl<'a, C: Columns> FusedIterator for IterMut<'a, C> {}

impl<'a, C: Columns> Debug for IterMut<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("IterMut").field("len", &(self.back - self.front)).finish()
    }
}

// ----------------------------------------------------------------------------
