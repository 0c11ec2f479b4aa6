use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use super::{Columns, Column, Fixed, Result, SpanTuple, SpanTupleMut, Iter, IterMut, Cursor};
use super::error::{check_pos};

/// `N` rows of parallel columns of types `C`, stored inline as one array per
/// column.
///
/// This is the owning counterpart of [`SpanTuple`]. An
/// `ArrayTuple<(A, B), N>` contains exactly a `([A; N], [B; N])`.
///
/// ```
/// use span_tuple::{ArrayTuple};
/// let mut a: ArrayTuple<(u32, f32), 3> = ArrayTuple::new();
/// assert_eq!(a.row(0), (&0, &0.0));
/// *a.row_mut(1).0 = 5;
/// a.fill((7, 1.5));
/// assert_eq!(a.column::<0>(), &[7, 7, 7]);
/// assert_eq!(a.at(3).is_err(), true);
/// ```
pub struct ArrayTuple<C: Columns, const N: usize> {
    arrays: C::Arrays<N>,
}

impl<C: Columns, const N: usize> ArrayTuple<C, N> {
    /// Constructs an `ArrayTuple` whose elements all have their default
    /// values.
    pub fn new() -> Self where Self: Default { Self::default() }

    /// Constructs an `ArrayTuple` from its columns.
    ///
    /// ```
    /// use span_tuple::{ArrayTuple};
    /// let a = ArrayTuple::<(i32, char), 2>::from_arrays(([1, 2], ['a', 'b']));
    /// assert_eq!(a.back(), Some((&2, &'b')));
    /// ```
    #[inline(always)]
    pub fn from_arrays(arrays: C::Arrays<N>) -> Self { Self {arrays} }

    /// Constructs an `ArrayTuple` by calling `f` for each row position.
    ///
    /// ```
    /// use span_tuple::{ArrayTuple};
    /// let a: ArrayTuple<(usize, bool), 4> = ArrayTuple::from_fn(|i| (i * i, i % 2 == 0));
    /// assert_eq!(a.column::<0>(), &[0, 1, 4, 9]);
    /// assert_eq!(a.column::<1>(), &[true, false, true, false]);
    /// ```
    pub fn from_fn(f: impl FnMut(usize) -> C) -> Self {
        Self::from_arrays(C::unzip_rows(std::array::from_fn(f)))
    }

    /// Returns the columns.
    #[inline(always)]
    pub fn into_arrays(self) -> C::Arrays<N> { self.arrays }

    /// Borrows the columns.
    #[inline(always)]
    pub fn arrays(&self) -> &C::Arrays<N> { &self.arrays }

    /// Mutably borrows the columns.
    #[inline(always)]
    pub fn arrays_mut(&mut self) -> &mut C::Arrays<N> { &mut self.arrays }

    /// Returns `N`.
    #[inline(always)]
    pub const fn len(&self) -> usize { N }

    /// Returns `N`. An `ArrayTuple` never grows.
    #[inline(always)]
    pub const fn max_size(&self) -> usize { N }

    /// Returns `true` if `N` is zero.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool { N == 0 }

    /// Returns the tuple of pointers to the first row.
    #[inline(always)]
    pub fn as_ptr(&self) -> C::Ptr { C::arrays_ptr(&self.arrays) }

    /// Returns the tuple of pointers to the first row, valid for writes.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> C::Ptr { C::arrays_mut_ptr(&mut self.arrays) }

    /// Borrows every row as a [`SpanTuple`].
    #[inline(always)]
    pub fn as_span(&self) -> SpanTuple<'_, C, Fixed<N>> {
        unsafe { SpanTuple::from_raw_parts(self.as_ptr(), Fixed) }
    }

    /// Mutably borrows every row as a [`SpanTupleMut`].
    #[inline(always)]
    pub fn as_span_mut(&mut self) -> SpanTupleMut<'_, C, Fixed<N>> {
        unsafe { SpanTupleMut::from_raw_parts(self.as_mut_ptr(), Fixed) }
    }

    // ------------------------------------------------------------------------

    /// Borrows row `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= N`.
    #[track_caller]
    pub fn row(&self, pos: usize) -> C::Ref<'_> { self.as_span().at(pos) }

    /// Mutably borrows row `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= N`.
    #[track_caller]
    pub fn row_mut(&mut self, pos: usize) -> C::Mut<'_> {
        if let Err(e) = check_pos(pos, N) { panic!("{}", e); }
        unsafe { C::get_mut(C::add(self.as_mut_ptr(), pos)) }
    }

    /// Borrows row `pos`, or returns `None` if `pos >= N`.
    pub fn get(&self, pos: usize) -> Option<C::Ref<'_>> { self.as_span().get(pos) }

    /// Mutably borrows row `pos`, or returns `None` if `pos >= N`.
    pub fn get_mut(&mut self, pos: usize) -> Option<C::Mut<'_>> {
        if pos < N { Some(unsafe { C::get_mut(C::add(self.as_mut_ptr(), pos)) }) } else { None }
    }

    /// Borrows row `pos`, or reports that it does not exist.
    ///
    /// ```
    /// use span_tuple::{ArrayTuple, Error};
    /// let a = ArrayTuple::<(i8, i16), 2>::from_arrays(([1, 2], [3, 4]));
    /// assert_eq!(a.at(1), Ok((&2, &4)));
    /// assert_eq!(a.at(2), Err(Error::OutOfRange {pos: 2, len: 2}));
    /// ```
    pub fn at(&self, pos: usize) -> Result<C::Ref<'_>> {
        check_pos(pos, N)?;
        Ok(unsafe { self.as_span().get_unchecked(pos) })
    }

    /// Mutably borrows row `pos`, or reports that it does not exist.
    pub fn at_mut(&mut self, pos: usize) -> Result<C::Mut<'_>> {
        check_pos(pos, N)?;
        Ok(unsafe { C::get_mut(C::add(self.as_mut_ptr(), pos)) })
    }

    /// Borrows the first row, if `N > 0`.
    pub fn front(&self) -> Option<C::Ref<'_>> { self.get(0) }

    /// Borrows the last row, if `N > 0`.
    pub fn back(&self) -> Option<C::Ref<'_>> { self.get(N.wrapping_sub(1)) }

    /// Mutably borrows the first row, if `N > 0`.
    pub fn front_mut(&mut self) -> Option<C::Mut<'_>> { self.get_mut(0) }

    /// Mutably borrows the last row, if `N > 0`.
    pub fn back_mut(&mut self) -> Option<C::Mut<'_>> { self.get_mut(N.wrapping_sub(1)) }

    /// Returns column `I`.
    #[inline(always)]
    pub fn column<const I: usize>(&self) -> &[C::Elem; N] where C: Column<I> {
        self.as_span().column::<I>()
    }

    /// Mutably borrows column `I`.
    #[inline(always)]
    pub fn column_mut<const I: usize>(&mut self) -> &mut [C::Elem; N] where C: Column<I> {
        unsafe { &mut *C::column_ptr(self.as_mut_ptr()).as_ptr().cast::<[C::Elem; N]>() }
    }

    // ------------------------------------------------------------------------

    /// Assigns a clone of `value` to every row.
    pub fn fill(&mut self, value: C) where C: Clone { self.as_span_mut().fill(value); }

    /// Exchanges the contents of `self` and `other`.
    ///
    /// ```
    /// use span_tuple::{ArrayTuple};
    /// let mut a = ArrayTuple::<(u8, char), 2>::from_arrays(([1, 2], ['a', 'b']));
    /// let mut b = ArrayTuple::<(u8, char), 2>::from_arrays(([3, 4], ['c', 'd']));
    /// a.swap(&mut b);
    /// assert_eq!(a.into_arrays(), ([3, 4], ['c', 'd']));
    /// assert_eq!(b.into_arrays(), ([1, 2], ['a', 'b']));
    /// ```
    pub fn swap(&mut self, other: &mut Self) { std::mem::swap(&mut self.arrays, &mut other.arrays); }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> Iter<'_, C> { self.as_span().iter() }

    /// Returns an iterator that mutably borrows the rows.
    pub fn iter_mut(&mut self) -> IterMut<'_, C> {
        unsafe { IterMut::from_raw_parts(self.as_mut_ptr(), N) }
    }

    /// Returns a [`Cursor`] at the first row.
    pub fn begin(&self) -> Cursor<'_, C> { self.as_span().begin() }

    /// Returns a [`Cursor`] just after the last row.
    pub fn end(&self) -> Cursor<'_, C> { self.as_span().end() }
}

impl<C: Columns + Default, const N: usize> Default for ArrayTuple<C, N> {
    fn default() -> Self { Self::from_fn(|_| C::default()) }
}

impl<'a, C: Columns, const N: usize> IntoIterator for &'a ArrayTuple<C, N> {
    type Item = C::Ref<'a>;
    type IntoIter = Iter<'a, C>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, C: Columns, const N: usize> IntoIterator for &'a mut ArrayTuple<C, N> {
    type Item = C::Mut<'a>;
    type IntoIter = IterMut<'a, C>;
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<C: Columns, const N: usize> Clone for ArrayTuple<C, N> where C::Arrays<N>: Clone {
    fn clone(&self) -> Self { Self::from_arrays(self.arrays.clone()) }
}

impl<C: Columns, const N: usize> Copy for ArrayTuple<C, N> where C::Arrays<N>: Copy {}

impl<C: Columns, const N: usize> Debug for ArrayTuple<C, N> where C::Arrays<N>: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("ArrayTuple").field(&self.arrays).finish()
    }
}

impl<C: Columns, const N: usize> PartialEq for ArrayTuple<C, N> where C::Arrays<N>: PartialEq {
    fn eq(&self, other: &Self) -> bool { self.arrays == other.arrays }
}

impl<C: Columns, const N: usize> Eq for ArrayTuple<C, N> where C::Arrays<N>: Eq {}

impl<C: Columns, const N: usize> Hash for ArrayTuple<C, N> where C::Arrays<N>: Hash {
    fn hash<H: Hasher>(&self, state: &mut H) { self.arrays.hash(state); }
}

// ----------------------------------------------------------------------------
