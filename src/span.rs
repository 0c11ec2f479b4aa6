//! Non-owning views of parallel columns.
//!
//! A [`SpanTuple<'a, C, E>`] borrows `E::len()` rows of every column of
//! [`Columns`] type `C`. It is the structure-of-arrays counterpart of `&[T]`,
//! and a [`SpanTupleMut`] is the counterpart of `&mut [T]`. The extent `E` is
//! either [`Fixed<N>`] or [`Dynamic`]; see [`Extent`].

use std::fmt::{self, Debug};
use std::marker::{PhantomData};
use std::ops::{Bound, RangeBounds};

use super::{Columns, Column, Select, Extent, Fixed, Dynamic, Error, Result, Cursor, CursorMut, Iter, IterMut, ArrayTuple};
use super::extent::{extent_of};
use super::error::{check_range};

/// Implemented by values from which a [`SpanTuple`] can be made.
///
/// Implementations exist for tuples of slices `(&[A], &[B], ...)`, tuples of
/// arrays `(&[A; N], &[B; N], ...)`, tuples of `Vec`s, and references to
/// [`ArrayTuple`]s.
pub trait Parts<'a> {
    /// The element types.
    type Columns: Columns + 'a;

    /// The natural [`Extent`] of the resulting span.
    type Extent: Extent;

    /// Returns pointers to the columns, and their common length.
    ///
    /// Fails if the lengths differ.
    fn into_raw(self) -> Result<(<Self::Columns as Columns>::Ptr, usize)>;
}

/// Implemented by values from which a [`SpanTupleMut`] can be made.
///
/// This is like [`Parts`] but with `&mut` in place of `&`.
pub trait PartsMut<'a> {
    /// The element types.
    type Columns: Columns + 'a;

    /// The natural [`Extent`] of the resulting span.
    type Extent: Extent;

    /// Returns pointers to the columns, and their common length.
    ///
    /// Fails if the lengths differ.
    fn into_raw(self) -> Result<(<Self::Columns as Columns>::Ptr, usize)>;
}

impl<'a, C: Columns + 'a, const N: usize> Parts<'a> for &'a ArrayTuple<C, N> {
    type Columns = C;
    type Extent = Fixed<N>;
    fn into_raw(self) -> Result<(C::Ptr, usize)> { Ok((C::arrays_ptr(self.arrays()), N)) }
}

impl<'a, C: Columns + 'a, const N: usize> PartsMut<'a> for &'a mut ArrayTuple<C, N> {
    type Columns = C;
    type Extent = Fixed<N>;
    fn into_raw(self) -> Result<(C::Ptr, usize)> { Ok((C::arrays_mut_ptr(self.arrays_mut()), N)) }
}

/// Constructs a [`SpanTuple`] with the natural [`Extent`] of `parts`.
///
/// The extent is [`Fixed<N>`] if `parts` are arrays of length `N`, otherwise
/// [`Dynamic`].
///
/// # Panics
///
/// Panics if the columns have different lengths.
///
/// ```
/// use span_tuple::{span, SpanTuple, Fixed};
/// let ints = [1, 2, 3, 4];
/// let floats = [2.3f32, 34.0, 12.3, 32.0];
/// let s: SpanTuple<(i32, f32), Fixed<4>> = span((&ints, &floats));
/// assert_eq!(s.front(), Some((&1, &2.3)));
/// assert_eq!(s.back(), Some((&4, &32.0)));
/// ```
#[track_caller]
pub fn span<'a, P: Parts<'a>>(parts: P) -> SpanTuple<'a, P::Columns, P::Extent> {
    SpanTuple::new(parts)
}

/// Constructs a [`SpanTupleMut`] with the natural [`Extent`] of `parts`.
///
/// # Panics
///
/// Panics if the columns have different lengths.
///
/// ```
/// use span_tuple::{span_mut};
/// let mut ids = vec![1u32, 2, 3];
/// let mut names = vec!["a", "b", "c"];
/// let mut s = span_mut((&mut ids, &mut names));
/// *s.at_mut(1).1 = "B";
/// assert_eq!(names, ["a", "B", "c"]);
/// ```
#[track_caller]
pub fn span_mut<'a, P: PartsMut<'a>>(parts: P) -> SpanTupleMut<'a, P::Columns, P::Extent> {
    SpanTupleMut::new(parts)
}

/// Returns column `I` of `span`, preserving its [`Extent`].
///
/// Equivalent to [`span.column::<I>()`](SpanTuple::column()).
///
/// ```
/// use span_tuple::{span, get};
/// let a = [1, 2, 3];
/// let b = ['x', 'y', 'z'];
/// let ints: &[i32; 3] = get::<0, _, _>(span((&a, &b)));
/// assert_eq!(ints, &[1, 2, 3]);
/// ```
pub fn get<'a, const I: usize, C, E>(span: SpanTuple<'a, C, E>) -> E::Slice<'a, C::Elem> where
    C: Column<I>,
    E: Extent,
{
    span.column::<I>()
}

// ----------------------------------------------------------------------------

/// Panics unless `start..end` fits in `len`.
#[track_caller]
fn assert_range(start: usize, end: usize, len: usize) {
    if let Err(e) = check_range(start, end, len) { panic!("{}", e); }
}

/// Resolves `range` against a sequence of length `len`.
#[track_caller]
fn resolve(range: impl RangeBounds<usize>, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.checked_add(1).unwrap_or_else(|| panic!("range start overflows usize")),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i.checked_add(1).unwrap_or_else(|| panic!("range end overflows usize")),
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    assert_range(start, end, len);
    (start, end)
}

// ----------------------------------------------------------------------------

/// A shared view of `E::len()` rows of parallel columns of types `C`.
///
/// This is like `&[T]`, except that each row is stored in several columns,
/// each column in its own contiguous buffer. Indexing and iteration produce
/// [`C::Ref`], a tuple of references with one reference per column.
///
/// A `SpanTuple` with [`Fixed<N>`] extent is exactly as large as its tuple of
/// pointers. One with [`Dynamic`] extent also stores a `usize`.
///
/// ```
/// use span_tuple::{span, SpanTuple};
/// let a = [1, 2, 3, 4];
/// let b = [2.5f32, 34.0, 12.5, 32.0];
/// let s = span((&a, &b));
/// let mut total = 0.0;
/// for (&i, &f) in s {
///     total += i as f32 * f;
/// }
/// assert_eq!(total, 236.0);
/// assert_eq!(std::mem::size_of_val(&s), 2 * std::mem::size_of::<usize>());
/// ```
///
/// [`C::Ref`]: Columns::Ref
pub struct SpanTuple<'a, C: Columns, E: Extent = Dynamic> {
    ptr: C::Ptr,
    extent: E,
    marker: PhantomData<&'a C>,
}

impl<'a, C: Columns, E: Extent> Clone for SpanTuple<'a, C, E> {
    fn clone(&self) -> Self { *self }
}

impl<'a, C: Columns, E: Extent> Copy for SpanTuple<'a, C, E> {}

unsafe impl<'a, C: Columns + Sync, E: Extent> Send for SpanTuple<'a, C, E> {}
unsafe impl<'a, C: Columns + Sync, E: Extent> Sync for SpanTuple<'a, C, E> {}

/// An empty span.
///
/// Only [`Dynamic`] and `Fixed<0>` spans can be empty:
///
/// ```compile_fail
/// use span_tuple::{SpanTuple, Fixed};
/// let s: SpanTuple<(i32,), Fixed<1>> = SpanTuple::default();
/// ```
impl<'a, C: Columns> Default for SpanTuple<'a, C, Dynamic> {
    fn default() -> Self { unsafe { Self::from_raw_parts(C::dangling(), 0) } }
}

impl<'a, C: Columns> Default for SpanTuple<'a, C, Fixed<0>> {
    fn default() -> Self { unsafe { Self::from_raw_parts(C::dangling(), Fixed) } }
}

impl<'a, C: Columns, E: Extent> SpanTuple<'a, C, E> {
    /// Constructs a `SpanTuple` from pointers to its columns.
    ///
    /// # Safety
    ///
    /// Every pointer in `ptr` must be valid for reads of `extent.len()`
    /// elements, and nothing may write to them for `'a`.
    #[inline(always)]
    pub const unsafe fn from_raw_parts(ptr: C::Ptr, extent: E) -> Self {
        Self {ptr, extent, marker: PhantomData}
    }

    /// Constructs a `SpanTuple` from a tuple of slices, arrays or `Vec`s, or
    /// from an [`ArrayTuple`].
    ///
    /// # Panics
    ///
    /// Panics if the columns have different lengths, or if `E` is
    /// [`Fixed<N>`] and the length is not `N`.
    ///
    /// ```
    /// use span_tuple::{SpanTuple, Fixed};
    /// let a = vec![1, 2, 3, 4];
    /// let b = vec![false, true, false, true];
    /// let s: SpanTuple<(i32, bool)> = SpanTuple::new((&a[1..], &b[1..]));
    /// assert_eq!(s.len(), 3);
    /// let t: SpanTuple<(i32, bool), Fixed<4>> = SpanTuple::new((&a, &b));
    /// assert_eq!(t.at(3), (&4, &true));
    /// ```
    #[track_caller]
    pub fn new<P: Parts<'a, Columns=C>>(parts: P) -> Self {
        match Self::try_new(parts) {
            Ok(span) => span,
            Err(e) => panic!("{}", e),
        }
    }

    /// Constructs a `SpanTuple`, or reports why it cannot be constructed.
    ///
    /// ```
    /// use span_tuple::{SpanTuple, Error};
    /// let a = [1, 2, 3];
    /// let b = [1.0, 2.0];
    /// let s = SpanTuple::<(i32, f64)>::try_new((&a[..], &b[..]));
    /// assert_eq!(s.err(), Some(Error::LengthMismatch {column: 1, expected: 3, found: 2}));
    /// ```
    pub fn try_new<P: Parts<'a, Columns=C>>(parts: P) -> Result<Self> {
        let (ptr, len) = parts.into_raw()?;
        let extent = E::try_from_len(len)?;
        Ok(unsafe { Self::from_raw_parts(ptr, extent) })
    }

    /// Constructs a `SpanTuple` containing the rows from `first` up to but
    /// excluding `last`.
    ///
    /// # Panics
    ///
    /// Panics if `first` and `last` belong to different spans, if `last` is
    /// before `first`, or if `E` is [`Fixed<N>`] and the number of rows is
    /// not `N`.
    ///
    /// ```
    /// use span_tuple::{span, SpanTuple};
    /// let a = [1, 2, 3, 4];
    /// let b = [5, 6, 7, 8];
    /// let s = span((&a, &b));
    /// let middle: SpanTuple<(i32, i32)> = SpanTuple::from_range(s.begin() + 1, s.end() - 1);
    /// assert_eq!(middle.len(), 2);
    /// assert_eq!(middle.front(), Some((&2, &6)));
    /// ```
    #[track_caller]
    pub fn from_range(first: Cursor<'a, C>, last: Cursor<'a, C>) -> Self {
        let rest = first.until(last);
        unsafe { Self::from_raw_parts(rest.as_ptr(), extent_of(rest.len())) }
    }

    /// Returns the tuple of pointers to the first row.
    #[inline(always)]
    pub fn as_ptr(&self) -> C::Ptr { self.ptr }

    /// Returns a pointer to the first element of column `I`.
    #[inline(always)]
    pub fn column_ptr<const I: usize>(&self) -> *const C::Elem where C: Column<I> {
        C::column_ptr(self.ptr).as_ptr()
    }

    /// Returns a pointer to the first element of the column of type `T`.
    #[inline(always)]
    pub fn ptr_of<T, X>(&self) -> *const T where C: Select<T, X> {
        C::select_ptr(self.ptr).as_ptr()
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn len(&self) -> usize { self.extent.len() }

    /// Returns the [`Extent`].
    #[inline(always)]
    pub fn extent(&self) -> E { self.extent }

    /// Returns `true` if there are no rows.
    #[inline(always)]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the total size in bytes of all the columns.
    ///
    /// ```
    /// use span_tuple::{span};
    /// let s = span((&[1u8, 2, 3], &[1u32, 2, 3]));
    /// assert_eq!(s.size_bytes(), 15);
    /// assert_eq!(s.column_size_bytes::<1>(), 12);
    /// ```
    #[inline(always)]
    pub fn size_bytes(&self) -> usize { C::ROW_BYTES * self.len() }

    /// Returns the size in bytes of column `I`.
    #[inline(always)]
    pub fn column_size_bytes<const I: usize>(&self) -> usize where C: Column<I> {
        std::mem::size_of::<C::Elem>() * self.len()
    }

    /// Borrows row `pos` without checking that it exists.
    ///
    /// # Safety
    ///
    /// `pos` must be less than `self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, pos: usize) -> C::Ref<'a> {
        C::get(C::add(self.ptr, pos))
    }

    /// Borrows row `pos`, or returns `None` if `pos >= self.len()`.
    #[inline(always)]
    pub fn get(&self, pos: usize) -> Option<C::Ref<'a>> {
        if pos < self.len() { Some(unsafe { self.get_unchecked(pos) }) } else { None }
    }

    /// Borrows row `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    #[inline(always)]
    #[track_caller]
    pub fn at(&self, pos: usize) -> C::Ref<'a> {
        match self.get(pos) {
            Some(row) => row,
            None => panic!("{}", Error::OutOfRange {pos, len: self.len()}),
        }
    }

    /// Borrows the first row, if any.
    pub fn front(&self) -> Option<C::Ref<'a>> { self.get(0) }

    /// Borrows the last row, if any.
    pub fn back(&self) -> Option<C::Ref<'a>> { self.len().checked_sub(1).and_then(|pos| self.get(pos)) }

    /// Borrows the first element of column `I`, if any.
    ///
    /// ```
    /// use span_tuple::{span};
    /// let s = span((&[1, 2], &[0.5f32, 1.5]));
    /// assert_eq!(s.front_at::<1>(), Some(&0.5));
    /// assert_eq!(s.back_at::<0>(), Some(&2));
    /// ```
    pub fn front_at<const I: usize>(&self) -> Option<&'a C::Elem> where C: Column<I> {
        self.front().map(|_| unsafe { &*C::column_ptr(self.ptr).as_ptr() })
    }

    /// Borrows the last element of column `I`, if any.
    pub fn back_at<const I: usize>(&self) -> Option<&'a C::Elem> where C: Column<I> {
        let pos = self.len().checked_sub(1)?;
        Some(unsafe { &*C::column_ptr(self.ptr).as_ptr().add(pos) })
    }

    // ------------------------------------------------------------------------

    /// Returns the rows in `start..start + extent.len()`.
    #[inline(always)]
    #[track_caller]
    fn window<F: Extent>(&self, start: usize, extent: F) -> SpanTuple<'a, C, F> {
        assert_range(start, start.saturating_add(extent.len()), self.len());
        unsafe { SpanTuple::from_raw_parts(C::add(self.ptr, start), extent) }
    }

    /// Returns the first `COUNT` rows.
    ///
    /// # Panics
    ///
    /// Panics if `COUNT > self.len()`.
    ///
    /// ```
    /// use span_tuple::{span, SpanTuple, Fixed};
    /// let s = span((&[1, 2, 3, 4], &['a', 'b', 'c', 'd']));
    /// let f: SpanTuple<(i32, char), Fixed<2>> = s.first::<2>();
    /// assert_eq!(f.back(), Some((&2, &'b')));
    /// ```
    #[track_caller]
    pub fn first<const COUNT: usize>(&self) -> SpanTuple<'a, C, Fixed<COUNT>> {
        self.window(0, Fixed)
    }

    /// Returns the last `COUNT` rows.
    ///
    /// # Panics
    ///
    /// Panics if `COUNT > self.len()`.
    #[track_caller]
    pub fn last<const COUNT: usize>(&self) -> SpanTuple<'a, C, Fixed<COUNT>> {
        let start = self.len().checked_sub(COUNT).unwrap_or_else(|| {
            panic!("{}", Error::RangeOutOfBounds {start: 0, end: COUNT, len: self.len()})
        });
        self.window(start, Fixed)
    }

    /// Returns `COUNT` rows starting at `OFFSET`.
    ///
    /// # Panics
    ///
    /// Panics if `OFFSET + COUNT > self.len()`.
    ///
    /// ```
    /// use span_tuple::{span};
    /// let s = span((&[1, 2, 3, 4], &[2.3, 34.0, 12.3, 32.0]));
    /// let middle: Vec<_> = s.subspan::<1, 2>().into_iter().collect();
    /// assert_eq!(middle, [(&2, &34.0), (&3, &12.3)]);
    /// ```
    #[track_caller]
    pub fn subspan<const OFFSET: usize, const COUNT: usize>(&self) -> SpanTuple<'a, C, Fixed<COUNT>> {
        self.window(OFFSET, Fixed)
    }

    /// Returns the first `count` rows.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.len()`.
    #[track_caller]
    pub fn first_n(&self, count: usize) -> SpanTuple<'a, C> {
        self.window(0, count)
    }

    /// Returns the last `count` rows.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.len()`.
    #[track_caller]
    pub fn last_n(&self, count: usize) -> SpanTuple<'a, C> {
        let start = self.len().checked_sub(count).unwrap_or_else(|| {
            panic!("{}", Error::RangeOutOfBounds {start: 0, end: count, len: self.len()})
        });
        self.window(start, count)
    }

    /// Returns the rows from `offset` onwards.
    ///
    /// # Panics
    ///
    /// Panics if `offset > self.len()`.
    ///
    /// ```
    /// use span_tuple::{span};
    /// let s = span((&[1, 2, 3, 4], &[5, 6, 7, 8]));
    /// let t = s.first_n(3).subspan_from(1);
    /// assert_eq!(t.len(), 2);
    /// assert_eq!(t.columns(), (&[2, 3][..], &[6, 7][..]));
    /// ```
    #[track_caller]
    pub fn subspan_from(&self, offset: usize) -> SpanTuple<'a, C> {
        self.window(offset, self.len().saturating_sub(offset))
    }

    /// Returns `count` rows starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + count > self.len()`.
    #[track_caller]
    pub fn subspan_n(&self, offset: usize, count: usize) -> SpanTuple<'a, C> {
        self.window(offset, count)
    }

    /// Returns the rows in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is decreasing or extends beyond `self.len()`.
    ///
    /// ```
    /// use span_tuple::{span};
    /// let s = span((&[1, 2, 3, 4, 5], &[1u8, 2, 3, 4, 5]));
    /// assert_eq!(s.slice(1..=2).columns(), (&[2, 3][..], &[2u8, 3][..]));
    /// assert_eq!(s.slice(3..).len(), 2);
    /// ```
    #[track_caller]
    pub fn slice(&self, range: impl RangeBounds<usize>) -> SpanTuple<'a, C> {
        let (start, end) = resolve(range, self.len());
        self.window(start, end - start)
    }

    /// Divides the rows into `0..mid` and `mid..`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > self.len()`.
    #[track_caller]
    pub fn split_at(&self, mid: usize) -> (SpanTuple<'a, C>, SpanTuple<'a, C>) {
        (self.first_n(mid), self.subspan_from(mid))
    }

    /// Forgets whether the extent is static.
    pub fn to_dynamic(self) -> SpanTuple<'a, C> {
        unsafe { SpanTuple::from_raw_parts(self.ptr, self.len()) }
    }

    // ------------------------------------------------------------------------

    /// Returns column `I` as an ordinary slice, or as an array reference if
    /// the extent is [`Fixed`].
    ///
    /// ```
    /// use span_tuple::{span};
    /// let a = [1, 2, 3, 4];
    /// let b = [2.3f32, 34.0, 12.3, 32.0];
    /// let s = span((&a, &b));
    /// let floats: &[f32; 4] = s.column::<1>();
    /// assert_eq!(floats.as_ptr(), b.as_ptr());
    /// let dynamic: &[f32] = s.to_dynamic().column::<1>();
    /// assert_eq!(dynamic, &b[..]);
    /// ```
    #[inline(always)]
    pub fn column<const I: usize>(&self) -> E::Slice<'a, C::Elem> where C: Column<I> {
        unsafe { E::slice(C::column_ptr(self.ptr), self.extent) }
    }

    /// Returns the column whose element type is `T`.
    #[inline(always)]
    pub fn column_of<T: 'a, X>(&self) -> E::Slice<'a, T> where C: Select<T, X> {
        unsafe { E::slice(C::select_ptr(self.ptr), self.extent) }
    }

    /// Returns every column.
    ///
    /// ```
    /// use span_tuple::{span};
    /// let s = span((&[1, 2], &["one", "two"]));
    /// let (numbers, names) = s.columns();
    /// assert_eq!(numbers, &[1, 2]);
    /// assert_eq!(names, &["one", "two"]);
    /// ```
    #[inline(always)]
    pub fn columns(&self) -> C::Slices<'a, E> {
        unsafe { C::slices(self.ptr, self.extent) }
    }

    // ------------------------------------------------------------------------

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> Iter<'a, C> {
        unsafe { Iter::from_raw_parts(self.ptr, self.len()) }
    }

    /// Returns a [`Cursor`] at the first row.
    pub fn begin(&self) -> Cursor<'a, C> {
        unsafe { Cursor::from_raw_parts(self.ptr, 0, self.len()) }
    }

    /// Returns a [`Cursor`] just after the last row.
    pub fn end(&self) -> Cursor<'a, C> {
        unsafe { Cursor::from_raw_parts(self.ptr, self.len(), self.len()) }
    }
}

impl<'a, C: Columns, E: Extent> IntoIterator for SpanTuple<'a, C, E> {
    type Item = C::Ref<'a>;
    type IntoIter = Iter<'a, C>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, 'b, C: Columns, E: Extent> IntoIterator for &'b SpanTuple<'a, C, E> {
    type Item = C::Ref<'a>;
    type IntoIter = Iter<'a, C>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, C: Columns, E: Extent> Debug for SpanTuple<'a, C, E> where C::Ref<'a>: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, C: Columns, E: Extent, F: Extent> PartialEq<SpanTuple<'a, C, F>> for SpanTuple<'a, C, E> where
    C::Ref<'a>: PartialEq,
{
    /// Compares the rows, not the pointers.
    fn eq(&self, other: &SpanTuple<'a, C, F>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a, C: Columns, const N: usize> From<SpanTuple<'a, C, Fixed<N>>> for SpanTuple<'a, C, Dynamic> {
    fn from(span: SpanTuple<'a, C, Fixed<N>>) -> Self { span.to_dynamic() }
}

impl<'a, C: Columns, const N: usize> TryFrom<SpanTuple<'a, C, Dynamic>> for SpanTuple<'a, C, Fixed<N>> {
    type Error = Error;

    /// Succeeds if `span.len() == N`.
    ///
    /// ```
    /// use span_tuple::{span, SpanTuple, Fixed, Error};
    /// let a = [1, 2, 3];
    /// let s = span((&a[..],));
    /// let t: SpanTuple<(i32,), Fixed<3>> = s.try_into().unwrap();
    /// assert_eq!(t.len(), 3);
    /// let u: Result<SpanTuple<(i32,), Fixed<2>>, _> = s.try_into();
    /// assert_eq!(u.err(), Some(Error::ExtentMismatch {expected: 2, found: 3}));
    /// ```
    fn try_from(span: SpanTuple<'a, C, Dynamic>) -> Result<Self> {
        let extent = Fixed::<N>::try_from_len(span.len())?;
        Ok(unsafe { Self::from_raw_parts(span.ptr, extent) })
    }
}

impl<'a, C: Columns, E: Extent> From<SpanTupleMut<'a, C, E>> for SpanTuple<'a, C, E> {
    fn from(span: SpanTupleMut<'a, C, E>) -> Self {
        unsafe { Self::from_raw_parts(span.ptr, span.extent) }
    }
}

// ----------------------------------------------------------------------------

/// An exclusive view of `E::len()` rows of parallel columns of types `C`.
///
/// This is the structure-of-arrays counterpart of `&mut [T]`. It has all the
/// read-only methods of [`SpanTuple`] via [`as_span()`], and adds methods that
/// borrow rows or columns mutably.
///
/// ```
/// use span_tuple::{span_mut};
/// let mut xs = [1.0, 2.0, 3.0];
/// let mut vs = [0.5, 0.5, -1.0];
/// for (x, v) in span_mut((&mut xs, &mut vs)) {
///     *x += *v;
/// }
/// assert_eq!(xs, [1.5, 2.5, 2.0]);
/// ```
///
/// [`as_span()`]: Self::as_span
pub struct SpanTupleMut<'a, C: Columns, E: Extent = Dynamic> {
    ptr: C::Ptr,
    extent: E,
    marker: PhantomData<&'a mut C>,
}

unsafe impl<'a, C: Columns + Send, E: Extent> Send for SpanTupleMut<'a, C, E> {}
unsafe impl<'a, C: Columns + Sync, E: Extent> Sync for SpanTupleMut<'a, C, E> {}

impl<'a, C: Columns> Default for SpanTupleMut<'a, C, Dynamic> {
    fn default() -> Self { unsafe { Self::from_raw_parts(C::dangling(), 0) } }
}

impl<'a, C: Columns> Default for SpanTupleMut<'a, C, Fixed<0>> {
    fn default() -> Self { unsafe { Self::from_raw_parts(C::dangling(), Fixed) } }
}

impl<'a, C: Columns, E: Extent> SpanTupleMut<'a, C, E> {
    /// Constructs a `SpanTupleMut` from pointers to its columns.
    ///
    /// # Safety
    ///
    /// Every pointer in `ptr` must be valid for reads and writes of
    /// `extent.len()` elements, and nothing else may access them for `'a`.
    #[inline(always)]
    pub unsafe fn from_raw_parts(ptr: C::Ptr, extent: E) -> Self {
        Self {ptr, extent, marker: PhantomData}
    }

    /// Constructs a `SpanTupleMut` from a tuple of mutable slices, arrays or
    /// `Vec`s, or from a mutable [`ArrayTuple`].
    ///
    /// # Panics
    ///
    /// Panics if the columns have different lengths, or if `E` is
    /// [`Fixed<N>`] and the length is not `N`.
    #[track_caller]
    pub fn new<P: PartsMut<'a, Columns=C>>(parts: P) -> Self {
        match Self::try_new(parts) {
            Ok(span) => span,
            Err(e) => panic!("{}", e),
        }
    }

    /// Constructs a `SpanTupleMut`, or reports why it cannot be constructed.
    pub fn try_new<P: PartsMut<'a, Columns=C>>(parts: P) -> Result<Self> {
        let (ptr, len) = parts.into_raw()?;
        let extent = E::try_from_len(len)?;
        Ok(unsafe { Self::from_raw_parts(ptr, extent) })
    }

    /// Borrows `self` as a [`SpanTuple`].
    #[inline(always)]
    pub fn as_span(&self) -> SpanTuple<'_, C, E> {
        unsafe { SpanTuple::from_raw_parts(self.ptr, self.extent) }
    }

    /// Borrows `self` for a shorter lifetime.
    #[inline(always)]
    pub fn reborrow(&mut self) -> SpanTupleMut<'_, C, E> {
        unsafe { SpanTupleMut::from_raw_parts(self.ptr, self.extent) }
    }

    /// Returns the tuple of pointers to the first row.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> C::Ptr { self.ptr }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn len(&self) -> usize { self.extent.len() }

    /// Returns the [`Extent`].
    #[inline(always)]
    pub fn extent(&self) -> E { self.extent }

    /// Returns `true` if there are no rows.
    #[inline(always)]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Borrows row `pos`, or returns `None` if `pos >= self.len()`.
    #[inline(always)]
    pub fn get(&self, pos: usize) -> Option<C::Ref<'_>> { self.as_span().get(pos) }

    /// Borrows row `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    #[inline(always)]
    #[track_caller]
    pub fn at(&self, pos: usize) -> C::Ref<'_> { self.as_span().at(pos) }

    /// Mutably borrows row `pos` without checking that it exists.
    ///
    /// # Safety
    ///
    /// `pos` must be less than `self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, pos: usize) -> C::Mut<'_> {
        C::get_mut(C::add(self.ptr, pos))
    }

    /// Mutably borrows row `pos`, or returns `None` if `pos >= self.len()`.
    #[inline(always)]
    pub fn get_mut(&mut self, pos: usize) -> Option<C::Mut<'_>> {
        if pos < self.len() { Some(unsafe { self.get_unchecked_mut(pos) }) } else { None }
    }

    /// Mutably borrows row `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    #[inline(always)]
    #[track_caller]
    pub fn at_mut(&mut self, pos: usize) -> C::Mut<'_> {
        let len = self.len();
        match self.get_mut(pos) {
            Some(row) => row,
            None => panic!("{}", Error::OutOfRange {pos, len}),
        }
    }

    /// Borrows the first row, if any.
    pub fn front(&self) -> Option<C::Ref<'_>> { self.get(0) }

    /// Borrows the last row, if any.
    pub fn back(&self) -> Option<C::Ref<'_>> { self.as_span().back() }

    /// Mutably borrows the first row, if any.
    pub fn front_mut(&mut self) -> Option<C::Mut<'_>> { self.get_mut(0) }

    /// Mutably borrows the last row, if any.
    pub fn back_mut(&mut self) -> Option<C::Mut<'_>> {
        let pos = self.len().checked_sub(1)?;
        self.get_mut(pos)
    }

    /// Assigns a clone of `value` to every row.
    ///
    /// ```
    /// use span_tuple::{span_mut};
    /// let mut a = [0; 3];
    /// let mut b = [' '; 3];
    /// span_mut((&mut a, &mut b)).fill((7, 'x'));
    /// assert_eq!((a, b), ([7; 3], ['x'; 3]));
    /// ```
    pub fn fill(&mut self, value: C) where C: Clone {
        for row in self.iter_mut() { C::write(row, value.clone()); }
    }

    // ------------------------------------------------------------------------

    /// Mutably borrows the rows in `start..start + extent.len()`.
    #[inline(always)]
    #[track_caller]
    fn window_mut<F: Extent>(&mut self, start: usize, extent: F) -> SpanTupleMut<'_, C, F> {
        assert_range(start, start.saturating_add(extent.len()), self.len());
        unsafe { SpanTupleMut::from_raw_parts(C::add(self.ptr, start), extent) }
    }

    /// Mutably borrows the first `COUNT` rows.
    #[track_caller]
    pub fn first_mut<const COUNT: usize>(&mut self) -> SpanTupleMut<'_, C, Fixed<COUNT>> {
        self.window_mut(0, Fixed)
    }

    /// Mutably borrows the last `COUNT` rows.
    #[track_caller]
    pub fn last_mut<const COUNT: usize>(&mut self) -> SpanTupleMut<'_, C, Fixed<COUNT>> {
        let len = self.len();
        let start = len.checked_sub(COUNT).unwrap_or_else(|| {
            panic!("{}", Error::RangeOutOfBounds {start: 0, end: COUNT, len})
        });
        self.window_mut(start, Fixed)
    }

    /// Mutably borrows `COUNT` rows starting at `OFFSET`.
    #[track_caller]
    pub fn subspan_mut<const OFFSET: usize, const COUNT: usize>(&mut self) -> SpanTupleMut<'_, C, Fixed<COUNT>> {
        self.window_mut(OFFSET, Fixed)
    }

    /// Mutably borrows the first `count` rows.
    #[track_caller]
    pub fn first_n_mut(&mut self, count: usize) -> SpanTupleMut<'_, C> {
        self.window_mut(0, count)
    }

    /// Mutably borrows the last `count` rows.
    #[track_caller]
    pub fn last_n_mut(&mut self, count: usize) -> SpanTupleMut<'_, C> {
        let len = self.len();
        let start = len.checked_sub(count).unwrap_or_else(|| {
            panic!("{}", Error::RangeOutOfBounds {start: 0, end: count, len})
        });
        self.window_mut(start, count)
    }

    /// Mutably borrows `count` rows starting at `offset`.
    #[track_caller]
    pub fn subspan_n_mut(&mut self, offset: usize, count: usize) -> SpanTupleMut<'_, C> {
        self.window_mut(offset, count)
    }

    /// Mutably borrows the rows in `range`.
    #[track_caller]
    pub fn slice_mut(&mut self, range: impl RangeBounds<usize>) -> SpanTupleMut<'_, C> {
        let (start, end) = resolve(range, self.len());
        self.window_mut(start, end - start)
    }

    /// Divides the rows into `0..mid` and `mid..`, both mutable.
    ///
    /// # Panics
    ///
    /// Panics if `mid > self.len()`.
    ///
    /// ```
    /// use span_tuple::{span_mut};
    /// let mut a = [1, 2, 3, 4];
    /// let mut b = [1, 2, 3, 4];
    /// let mut s = span_mut((&mut a, &mut b));
    /// let (mut lo, mut hi) = s.split_at_mut(2);
    /// std::mem::swap(lo.at_mut(0).0, hi.at_mut(1).0);
    /// assert_eq!(a, [4, 2, 3, 1]);
    /// ```
    #[track_caller]
    pub fn split_at_mut(&mut self, mid: usize) -> (SpanTupleMut<'_, C>, SpanTupleMut<'_, C>) {
        let len = self.len();
        assert_range(0, mid, len);
        unsafe {(
            SpanTupleMut::from_raw_parts(self.ptr, mid),
            SpanTupleMut::from_raw_parts(C::add(self.ptr, mid), len - mid),
        )}
    }

    /// Forgets whether the extent is static.
    pub fn into_dynamic(self) -> SpanTupleMut<'a, C> {
        unsafe { SpanTupleMut::from_raw_parts(self.ptr, self.len()) }
    }

    // ------------------------------------------------------------------------

    /// Returns column `I`.
    #[inline(always)]
    pub fn column<const I: usize>(&self) -> E::Slice<'_, C::Elem> where C: Column<I> {
        unsafe { E::slice(C::column_ptr(self.ptr), self.extent) }
    }

    /// Mutably borrows column `I`.
    ///
    /// ```
    /// use span_tuple::{span_mut};
    /// let mut a = [3, 1, 2];
    /// let mut b = ['c', 'a', 'b'];
    /// let mut s = span_mut((&mut a, &mut b));
    /// s.column_mut::<1>().sort();
    /// assert_eq!(b, ['a', 'b', 'c']);
    /// ```
    #[inline(always)]
    pub fn column_mut<const I: usize>(&mut self) -> E::SliceMut<'_, C::Elem> where C: Column<I> {
        unsafe { E::slice_mut(C::column_ptr(self.ptr), self.extent) }
    }

    /// Mutably borrows the column whose element type is `T`.
    #[inline(always)]
    pub fn column_of_mut<T, X>(&mut self) -> E::SliceMut<'_, T> where C: Select<T, X> {
        unsafe { E::slice_mut(C::select_ptr(self.ptr), self.extent) }
    }

    /// Splits `self` into its columns.
    #[inline(always)]
    pub fn into_columns(self) -> C::SlicesMut<'a, E> {
        unsafe { C::slices_mut(self.ptr, self.extent) }
    }

    // ------------------------------------------------------------------------

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> Iter<'_, C> { self.as_span().iter() }

    /// Returns an iterator that mutably borrows the rows.
    pub fn iter_mut(&mut self) -> IterMut<'_, C> {
        unsafe { IterMut::from_raw_parts(self.ptr, self.len()) }
    }

    /// Returns a [`CursorMut`] at the first row.
    pub fn begin_mut(&mut self) -> CursorMut<'_, C> {
        unsafe { CursorMut::from_raw_parts(self.ptr, 0, self.len()) }
    }
}

impl<'a, C: Columns, E: Extent> IntoIterator for SpanTupleMut<'a, C, E> {
    type Item = C::Mut<'a>;
    type IntoIter = IterMut<'a, C>;
    fn into_iter(self) -> Self::IntoIter {
        unsafe { IterMut::from_raw_parts(self.ptr, self.len()) }
    }
}

impl<'a, 'b, C: Columns, E: Extent> IntoIterator for &'b mut SpanTupleMut<'a, C, E> {
    type Item = C::Mut<'b>;
    type IntoIter = IterMut<'b, C>;
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<'a, C: Columns, E: Extent> Debug for SpanTupleMut<'a, C, E> where C::Ref<'a>: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // The rows are only borrowed until `fmt()` returns.
        let span: SpanTuple<'a, C, E> = unsafe { SpanTuple::from_raw_parts(self.ptr, self.extent) };
        span.fmt(f)
    }
}

impl<'a, C: Columns, const N: usize> From<SpanTupleMut<'a, C, Fixed<N>>> for SpanTupleMut<'a, C, Dynamic> {
    fn from(span: SpanTupleMut<'a, C, Fixed<N>>) -> Self { span.into_dynamic() }
}

impl<'a, C: Columns, const N: usize> TryFrom<SpanTupleMut<'a, C, Dynamic>> for SpanTupleMut<'a, C, Fixed<N>> {
    type Error = Error;

    fn try_from(span: SpanTupleMut<'a, C, Dynamic>) -> Result<Self> {
        let extent = Fixed::<N>::try_from_len(span.len())?;
        Ok(unsafe { Self::from_raw_parts(span.ptr, extent) })
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::mem::{size_of};

    use proptest::prelude::*;

    use super::*;

    const PTR: usize = size_of::<*const ()>();

    #[test]
    fn footprint() {
        assert_eq!(size_of::<SpanTuple<(u8,), Fixed<4>>>(), PTR);
        assert_eq!(size_of::<SpanTuple<(u8,), Dynamic>>(), PTR + size_of::<usize>());
        assert_eq!(size_of::<SpanTuple<(i32, f32), Fixed<4>>>(), 2 * PTR);
        assert_eq!(size_of::<SpanTuple<(i32, f32)>>(), 2 * PTR + size_of::<usize>());
        assert_eq!(size_of::<SpanTuple<(u8, String, [f64; 3]), Fixed<9>>>(), 3 * PTR);
        assert_eq!(size_of::<SpanTuple<(u8, String, [f64; 3])>>(), 3 * PTR + size_of::<usize>());
        assert_eq!(size_of::<SpanTuple<(u8, u16, u32, u64, i8, ()), Fixed<1>>>(), 6 * PTR);
        assert_eq!(size_of::<SpanTupleMut<(i32, f32), Fixed<4>>>(), 2 * PTR);
        assert_eq!(size_of::<SpanTupleMut<(i32, f32)>>(), 2 * PTR + size_of::<usize>());
    }

    #[test]
    fn scenario() {
        let a = [1, 2, 3, 4];
        let b = [2.3f32, 34.0, 12.3, 32.0];
        let s: SpanTuple<(i32, f32), Fixed<4>> = span((&a, &b));
        assert_eq!(s.len(), 4);
        assert_eq!(s.front(), Some((&1, &2.3)));
        assert_eq!(s.back(), Some((&4, &32.0)));
        assert_eq!(s.front_at::<1>(), Some(&2.3));
        assert_eq!(s.back_at::<1>(), Some(&32.0));
        assert_eq!(s.at(2), (&3, &12.3));
        let sub = s.subspan::<1, 2>();
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.iter().collect::<Vec<_>>(), [(&2, &34.0), (&3, &12.3)]);
        let first: SpanTuple<(i32, f32), Fixed<2>> = s.first::<2>();
        let last: SpanTuple<(i32, f32), Fixed<2>> = s.last::<2>();
        assert_eq!(first.columns(), (&[1, 2], &[2.3, 34.0]));
        assert_eq!(last.columns(), (&[3, 4], &[12.3, 32.0]));
        let first3 = s.first_n(3);
        assert_eq!(s.last_n(3).front(), Some((&2, &34.0)));
        assert_eq!(first3.subspan_from(1).columns(), (&[2, 3][..], &[34.0, 12.3][..]));
    }

    #[test]
    fn round_trip() {
        let mut a = [1u16, 2, 3];
        let mut b = ['a', 'b', 'c'];
        let mut c = [0.25f64, 0.5, 0.75];
        let (pa, pb, pc) = (a.as_ptr(), b.as_ptr(), c.as_ptr());
        {
            let s = span((&a, &b, &c));
            assert_eq!(s.column_ptr::<0>(), pa);
            assert_eq!(s.column_ptr::<1>(), pb);
            assert_eq!(s.column_ptr::<2>(), pc);
            assert_eq!(s.ptr_of::<char, _>(), pb);
            let (x, y, z) = s.as_ptr();
            assert_eq!((x.as_ptr() as *const u16, y.as_ptr() as *const char, z.as_ptr() as *const f64), (pa, pb, pc));
            for pos in 0..3 {
                let (x, y, z) = s.at(pos);
                assert!(std::ptr::eq(x, &a[pos]));
                assert!(std::ptr::eq(y, &b[pos]));
                assert!(std::ptr::eq(z, &c[pos]));
            }
        }
        let mut s = span_mut((&mut a, &mut b, &mut c));
        let (x, y, z) = s.at_mut(1);
        *x = 20;
        *y = 'B';
        *z = -0.5;
        assert_eq!(a, [1, 20, 3]);
        assert_eq!(b, ['a', 'B', 'c']);
        assert_eq!(c, [0.25, -0.5, 0.75]);
    }

    #[test]
    fn construction_forms() {
        let a = vec![1, 2, 3, 4];
        let b = vec![5, 6, 7, 8];
        let from_vecs = span((&a, &b));
        let from_slices = span((&a[..], &b[..]));
        let from_arrays = span((&[1, 2, 3, 4], &[5, 6, 7, 8]));
        assert_eq!(from_vecs, from_slices);
        assert_eq!(from_vecs, from_arrays);
        let from_ptr: SpanTuple<(i32, i32)> = unsafe { SpanTuple::from_raw_parts(from_vecs.as_ptr(), 2) };
        assert_eq!(from_ptr.columns(), (&[1, 2][..], &[5, 6][..]));
        let from_range = SpanTuple::<(i32, i32), Fixed<2>>::from_range(from_vecs.begin() + 1, from_vecs.begin() + 3);
        assert_eq!(from_range.columns(), (&[2, 3], &[6, 7]));
        let checked = SpanTuple::<(i32, i32), Fixed<3>>::try_new((&a, &b));
        assert_eq!(checked.err(), Some(Error::ExtentMismatch {expected: 3, found: 4}));
    }

    #[test]
    #[should_panic(expected = "column 1 has length 2, but column 0 has length 3")]
    fn mismatched_lengths() {
        let _ = span((&[1, 2, 3][..], &[1, 2][..]));
    }

    #[test]
    fn extent_conversions() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let fixed = span((&a, &b));
        let dynamic: SpanTuple<(i32, i32)> = fixed.into();
        assert_eq!(dynamic.len(), 3);
        let back: SpanTuple<(i32, i32), Fixed<3>> = dynamic.try_into().unwrap();
        assert!(<(i32, i32)>::ptr_eq(back.as_ptr(), fixed.as_ptr()));
        let wrong: Result<SpanTuple<(i32, i32), Fixed<4>>> = dynamic.try_into();
        assert_eq!(wrong.err(), Some(Error::ExtentMismatch {expected: 4, found: 3}));
    }

    #[test]
    fn mutable_extent_conversions() {
        let mut a = [1, 2, 3];
        let mut b = [4, 5, 6];
        let fixed = span_mut((&mut a, &mut b));
        let mut dynamic: SpanTupleMut<(i32, i32)> = fixed.into();
        assert_eq!(dynamic.len(), 3);
        *dynamic.at_mut(0).0 = 10;
        let wrong: Result<SpanTupleMut<(i32, i32), Fixed<2>>> = dynamic.reborrow().try_into();
        assert_eq!(wrong.err(), Some(Error::ExtentMismatch {expected: 2, found: 3}));
        let mut back: SpanTupleMut<(i32, i32), Fixed<3>> = dynamic.try_into().unwrap();
        *back.at_mut(2).1 = 60;
        let (x, y) = back.into_columns();
        assert_eq!(x, &[10, 2, 3]);
        assert_eq!(y, &[4, 5, 60]);
    }

    #[test]
    fn empty_mut() {
        let mut s: SpanTupleMut<(i32, f32)> = SpanTupleMut::default();
        assert!(s.is_empty());
        assert!(s.front_mut().is_none());
        let f: SpanTupleMut<(u8,), Fixed<0>> = SpanTupleMut::default();
        assert_eq!(f.iter().count(), 0);
    }

    #[test]
    fn narrowing_mutability() {
        let mut a = [1, 2];
        let mut b = [3, 4];
        let m = span_mut((&mut a, &mut b));
        let s: SpanTuple<(i32, i32), Fixed<2>> = m.into();
        assert_eq!(s.at(1), (&2, &4));
    }

    #[test]
    fn projection() {
        let a = [1, 2, 3, 4];
        let b = [2.3f32, 34.0, 12.3, 32.0];
        let s = span((&a, &b));
        let ints: &[i32; 4] = get::<0, _, _>(s);
        assert_eq!(ints, &a);
        let floats: &[f32] = get::<1, _, _>(s.to_dynamic());
        assert_eq!(floats, &b[..]);
        let by_type: &[i32; 4] = s.column_of::<i32, _>();
        assert!(std::ptr::eq(by_type, &a));
    }

    #[test]
    fn empty() {
        let s: SpanTuple<(i32, f32)> = SpanTuple::default();
        assert!(s.is_empty());
        assert_eq!(s.front(), None);
        assert_eq!(s.back(), None);
        assert_eq!(s.front_at::<0>(), None);
        assert_eq!(s.back_at::<1>(), None);
        assert_eq!(s.get(0), None);
        assert_eq!(s.iter().count(), 0);
        assert_eq!(s.size_bytes(), 0);
        let (x, y) = s.columns();
        assert!(x.is_empty() && y.is_empty());
        let f: SpanTuple<(i32,), Fixed<0>> = SpanTuple::default();
        assert_eq!(f.first_n(0).len(), 0);
    }

    #[test]
    #[should_panic(expected = "position 4 is out of range for length 4")]
    fn at_out_of_range() {
        let s = span((&[1, 2, 3, 4],));
        let _ = s.at(4);
    }

    #[test]
    #[should_panic(expected = "range 3..5 is out of bounds for length 4")]
    fn subspan_out_of_range() {
        let s = span((&[1, 2, 3, 4], &[1, 2, 3, 4]));
        let _ = s.subspan::<3, 2>();
    }

    #[test]
    #[should_panic(expected = "range 0..5 is out of bounds for length 4")]
    fn last_out_of_range() {
        let s = span((&[1, 2, 3, 4],));
        let _ = s.last_n(5);
    }

    #[test]
    fn mutable_slicing() {
        let mut a = [0; 6];
        let mut b = [0u8; 6];
        let mut s = span_mut((&mut a, &mut b));
        s.first_mut::<2>().fill((1, 1));
        s.last_mut::<2>().fill((3, 3));
        s.subspan_mut::<2, 2>().fill((2, 2));
        *s.back_mut().unwrap().0 += 10;
        *s.front_mut().unwrap().1 += 10;
        assert_eq!(s.as_span().columns(), (&[1, 1, 2, 2, 3, 13], &[11, 1, 2, 2, 3, 3]));
        s.slice_mut(1..5).fill((0, 0));
        s.subspan_n_mut(0, 1).column_mut::<0>()[0] = 7;
        s.last_n_mut(1).column_of_mut::<u8, _>()[0] = 9;
        s.first_n_mut(0).fill((5, 5));
        let (ints, bytes) = s.into_columns();
        assert_eq!(ints, &[7, 0, 0, 0, 0, 13]);
        assert_eq!(bytes, &[11, 0, 0, 0, 0, 9]);
    }

    #[test]
    fn reborrow() {
        let mut a = [1, 2, 3];
        let mut s = span_mut((&mut a,));
        for (x,) in s.reborrow() { *x *= 2; }
        for (x,) in &mut s { *x += 1; }
        assert_eq!(s.iter().map(|(&x,)| x).collect::<Vec<_>>(), [3, 5, 7]);
        assert_eq!(format!("{:?}", s), "[(3,), (5,), (7,)]");
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpanTuple<(i32, String)>>();
        assert_send_sync::<SpanTupleMut<(i32, String), Fixed<2>>>();
    }

    fn columns(len: usize) -> (Vec<u32>, Vec<i64>) {
        ((0..len as u32).collect(), (0..len as i64).map(|x| -x * 3).collect())
    }

    proptest! {
        #[test]
        fn slicing_laws(len in 0usize..64, n in 0usize..64, off in 0usize..64) {
            let n = n.min(len);
            let off = off.min(len);
            let cnt = (len - off).min(n);
            let (a, b) = columns(len);
            let s = span((&a, &b));
            let rows: Vec<_> = s.iter().collect();
            prop_assert_eq!(s.first_n(n).iter().collect::<Vec<_>>(), &rows[..n]);
            prop_assert_eq!(s.last_n(n).iter().collect::<Vec<_>>(), &rows[len - n..]);
            prop_assert_eq!(s.subspan_n(off, cnt).iter().collect::<Vec<_>>(), &rows[off..off + cnt]);
            prop_assert_eq!(s.subspan_from(off).iter().collect::<Vec<_>>(), &rows[off..]);
            let (lo, hi) = s.split_at(off);
            prop_assert_eq!(lo.len() + hi.len(), len);
            prop_assert_eq!(s.slice(off..off + cnt), s.subspan_n(off, cnt));
        }

        #[test]
        fn first_then_subspan(len in 3usize..64) {
            let (a, b) = columns(len);
            let s = span((&a, &b));
            let composed = s.first_n(3).subspan_from(1);
            prop_assert_eq!(composed.columns(), (&a[1..3], &b[1..3]));
        }

        #[test]
        fn iteration_law(len in 0usize..64) {
            let (a, b) = columns(len);
            let s = span((&a, &b));
            let mut count = 0;
            for (pos, (x, y)) in s.iter().enumerate() {
                let (px, py) = unsafe { (s.column_ptr::<0>().add(pos), s.column_ptr::<1>().add(pos)) };
                let same_x = std::ptr::eq(x, px);
                let same_y = std::ptr::eq(y, py);
                prop_assert!(same_x);
                prop_assert!(same_y);
                count += 1;
            }
            prop_assert_eq!(count, len);
        }
    }
}
