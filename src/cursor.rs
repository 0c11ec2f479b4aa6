//! Random-access positions within a span.

use std::cmp::{Ordering};
use std::fmt::{self, Debug};
use std::marker::{PhantomData};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::{Columns, Iter};

/// Returns `pos + off`, which must be in `0..=len`.
#[inline(always)]
#[track_caller]
fn seek(pos: usize, len: usize, off: isize) -> usize {
    match pos.checked_add_signed(off) {
        Some(new) if new <= len => new,
        _ if off < 0 => panic!("cannot seek cursor before begin"),
        _ => panic!("cannot seek cursor after end"),
    }
}

/// Returns `pos + off`, which must be in `0..len`.
#[inline(always)]
#[track_caller]
fn row(pos: usize, len: usize, off: isize) -> usize {
    match pos.checked_add_signed(off) {
        Some(new) if new < len => new,
        _ if pos == len && off == 0 => panic!("cannot dereference end cursor"),
        _ => panic!("cursor offset {} from position {} is out of range for length {}", off, pos, len),
    }
}

// ----------------------------------------------------------------------------

/// A position within a [`SpanTuple`], which can move in either direction.
///
/// All the column pointers move together. A `Cursor` can be anywhere from
/// the first row to just after the last row. It is `Copy`, and two cursors
/// from the same span can be compared and subtracted.
///
/// ```
/// use span_tuple::{span};
/// let s = span((&[1, 2, 3, 4], &['a', 'b', 'c', 'd']));
/// let mut c = s.begin();
/// assert_eq!(c.get(), (&1, &'a'));
/// c += 2;
/// assert_eq!(c.get(), (&3, &'c'));
/// assert_eq!(c.at(-1), (&2, &'b'));
/// assert_eq!(s.end() - c, 2);
/// assert!(c < s.end());
/// assert_eq!(c.until(s.end()).count(), 2);
/// ```
///
/// [`SpanTuple`]: super::SpanTuple
pub struct Cursor<'a, C: Columns> {
    base: C::Ptr,
    pos: usize,
    len: usize,
    marker: PhantomData<&'a C>,
}

impl<'a, C: Columns> Clone for Cursor<'a, C> {
    fn clone(&self) -> Self { *self }
}

impl<'a, C: Columns> Copy for Cursor<'a, C> {}

unsafe impl<'a, C: Columns + Sync> Send for Cursor<'a, C> {}
unsafe impl<'a, C: Columns + Sync> Sync for Cursor<'a, C> {}

impl<'a, C: Columns> Default for Cursor<'a, C> {
    /// An end cursor of an empty span.
    fn default() -> Self { unsafe { Self::from_raw_parts(C::dangling(), 0, 0) } }
}

impl<'a, C: Columns> Cursor<'a, C> {
    /// Constructs a `Cursor` at row `pos` of `len` rows starting at `base`.
    ///
    /// # Safety
    ///
    /// `pos <= len`, and every pointer in `base` must be valid for reads of
    /// `len` elements for `'a`.
    #[inline(always)]
    pub unsafe fn from_raw_parts(base: C::Ptr, pos: usize, len: usize) -> Self {
        debug_assert!(pos <= len);
        Self {base, pos, len, marker: PhantomData}
    }

    /// Returns the number of rows before `self` in its span.
    #[inline(always)]
    pub fn position(&self) -> usize { self.pos }

    /// Returns `true` if `self` is just after the last row.
    #[inline(always)]
    pub fn is_end(&self) -> bool { self.pos == self.len }

    /// Returns the tuple of pointers to the row at `self`.
    #[inline(always)]
    pub fn as_ptr(&self) -> C::Ptr { unsafe { C::add(self.base, self.pos) } }

    /// Borrows the row at `self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is an end cursor.
    #[inline(always)]
    #[track_caller]
    pub fn get(&self) -> C::Ref<'a> { self.at(0) }

    /// Borrows the row `off` rows after `self`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such row.
    #[inline(always)]
    #[track_caller]
    pub fn at(&self, off: isize) -> C::Ref<'a> {
        let pos = row(self.pos, self.len, off);
        unsafe { C::get(C::add(self.base, pos)) }
    }

    /// Moves `self` by `off` rows.
    ///
    /// # Panics
    ///
    /// Panics if `self` would move before the first row or after the end.
    #[inline(always)]
    #[track_caller]
    pub fn seek(&mut self, off: isize) {
        self.pos = seek(self.pos, self.len, off);
    }

    /// Returns `true` if `self` and `other` belong to the same span.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.len == other.len && C::ptr_eq(self.base, other.base)
    }

    /// Returns the number of rows from `origin` to `self`.
    ///
    /// Cursors from different spans are not comparable. Comparing them is
    /// checked only in debug builds.
    #[inline(always)]
    pub fn offset_from(&self, origin: Self) -> isize {
        debug_assert!(self.is_compatible(&origin), "incompatible cursors");
        self.pos as isize - origin.pos as isize
    }

    /// Returns an iterator over the rows from `self` up to but excluding
    /// `last`.
    ///
    /// # Panics
    ///
    /// Panics if `self` and `last` belong to different spans, or if `last`
    /// is before `self`.
    #[track_caller]
    pub fn until(self, last: Self) -> Iter<'a, C> {
        assert!(self.is_compatible(&last), "incompatible cursors");
        assert!(self.pos <= last.pos, "cursor range transposed");
        unsafe { Iter::from_range(self.base, self.pos, last.pos) }
    }
}

impl<'a, C: Columns> AddAssign<isize> for Cursor<'a, C> {
    #[track_caller]
    fn add_assign(&mut self, off: isize) { self.seek(off); }
}

impl<'a, C: Columns> SubAssign<isize> for Cursor<'a, C> {
    #[track_caller]
    fn sub_assign(&mut self, off: isize) { self.seek(off.checked_neg().unwrap_or(isize::MAX)); }
}

impl<'a, C: Columns> Add<isize> for Cursor<'a, C> {
    type Output = Self;

    #[track_caller]
    fn add(mut self, off: isize) -> Self { self += off; self }
}

impl<'a, C: Columns> Sub<isize> for Cursor<'a, C> {
    type Output = Self;

    #[track_caller]
    fn sub(mut self, off: isize) -> Self { self -= off; self }
}

impl<'a, C: Columns> Sub for Cursor<'a, C> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize { self.offset_from(origin) }
}

impl<'a, C: Columns> PartialEq for Cursor<'a, C> {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl<'a, C: Columns> Eq for Cursor<'a, C> {}

impl<'a, C: Columns> PartialOrd for Cursor<'a, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl<'a, C: Columns> Ord for Cursor<'a, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert!(self.is_compatible(other), "incompatible cursors");
        self.pos.cmp(&other.pos)
    }
}

impl<'a, C: Columns> Debug for Cursor<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor").field("pos", &self.pos).field("len", &self.len).finish()
    }
}

// ----------------------------------------------------------------------------

/// A position within a [`SpanTupleMut`], through which rows can be modified.
///
/// Unlike [`Cursor`], a `CursorMut` is not `Copy`, since two of them could
/// be used to borrow the same row mutably.
///
/// ```
/// use span_tuple::{span_mut};
/// let mut a = [1, 2, 3];
/// let mut b = [4, 5, 6];
/// let mut s = span_mut((&mut a, &mut b));
/// let mut c = s.begin_mut();
/// c += 1;
/// let (x, y) = c.get_mut();
/// std::mem::swap(x, y);
/// assert_eq!(c.get(), (&5, &2));
/// ```
///
/// [`SpanTupleMut`]: super::SpanTupleMut
pub struct CursorMut<'a, C: Columns> {
    base: C::Ptr,
    pos: usize,
    len: usize,
    marker: PhantomData<&'a mut C>,
}

unsafe impl<'a, C: Columns + Send> Send for CursorMut<'a, C> {}
unsafe impl<'a, C: Columns + Sync> Sync for CursorMut<'a, C> {}

impl<'a, C: Columns> CursorMut<'a, C> {
    /// Constructs a `CursorMut` at row `pos` of `len` rows starting at `base`.
    ///
    /// # Safety
    ///
    /// `pos <= len`, and every pointer in `base` must be valid for reads and
    /// writes of `len` elements for `'a`, and nothing else may access them
    /// for `'a`.
    #[inline(always)]
    pub unsafe fn from_raw_parts(base: C::Ptr, pos: usize, len: usize) -> Self {
        debug_assert!(pos <= len);
        Self {base, pos, len, marker: PhantomData}
    }

    /// Returns the number of rows before `self` in its span.
    #[inline(always)]
    pub fn position(&self) -> usize { self.pos }

    /// Returns `true` if `self` is just after the last row.
    #[inline(always)]
    pub fn is_end(&self) -> bool { self.pos == self.len }

    /// Borrows `self` as a [`Cursor`].
    pub fn as_cursor(&self) -> Cursor<'_, C> {
        unsafe { Cursor::from_raw_parts(self.base, self.pos, self.len) }
    }

    /// Borrows the row at `self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is an end cursor.
    #[track_caller]
    pub fn get(&self) -> C::Ref<'_> { self.as_cursor().get() }

    /// Mutably borrows the row at `self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is an end cursor.
    #[track_caller]
    pub fn get_mut(&mut self) -> C::Mut<'_> {
        let pos = row(self.pos, self.len, 0);
        unsafe { C::get_mut(C::add(self.base, pos)) }
    }

    /// Moves `self` by `off` rows.
    ///
    /// # Panics
    ///
    /// Panics if `self` would move before the first row or after the end.
    #[track_caller]
    pub fn seek(&mut self, off: isize) {
        self.pos = seek(self.pos, self.len, off);
    }
}

impl<'a, C: Columns> AddAssign<isize> for CursorMut<'a, C> {
    #[track_caller]
    fn add_assign(&mut self, off: isize) { self.seek(off); }
}

impl<'a, C: Columns> SubAssign<isize> for CursorMut<'a, C> {
    #[track_caller]
    fn sub_assign(&mut self, off: isize) { self.seek(off.checked_neg().unwrap_or(isize::MAX)); }
}

impl<'a, C: Columns> Debug for CursorMut<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CursorMut").field("pos", &self.pos).field("len", &self.len).finish()
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{span, span_mut, SpanTuple};

    #[test]
    fn lockstep() {
        let a = [1u8, 2, 3];
        let b = [10u64, 20, 30];
        let s = span((&a, &b));
        let mut c = s.begin();
        for pos in 0..3 {
            let (x, y) = c.as_ptr();
            assert_eq!(x.as_ptr() as *const u8, &a[pos] as *const u8);
            assert_eq!(y.as_ptr() as *const u64, &b[pos] as *const u64);
            assert_eq!(c.position(), pos);
            c += 1;
        }
        assert!(c.is_end());
        assert_eq!(c, s.end());
    }

    #[test]
    fn arithmetic() {
        let s = span((&[1, 2, 3, 4, 5],));
        let begin = s.begin();
        let end = s.end();
        assert_eq!(end - begin, 5);
        assert_eq!(begin - end, -5);
        assert_eq!((begin + 3).get(), (&4,));
        assert_eq!((end - 1).get(), (&5,));
        assert_eq!((begin + 3).at(-3), (&1,));
        assert!(begin < end);
        assert!(begin + 5 == end);
        assert_eq!(std::cmp::max(begin + 2, begin + 1).position(), 2);
    }

    #[test]
    fn ranges() {
        let s = span((&[1, 2, 3, 4], &[5, 6, 7, 8]));
        let rows: Vec<_> = (s.begin() + 1).until(s.end() - 1).collect();
        assert_eq!(rows, [(&2, &6), (&3, &7)]);
        assert_eq!(s.begin().until(s.begin()).count(), 0);
        let back: SpanTuple<(i32, i32)> = SpanTuple::from_range(s.begin(), s.end());
        assert_eq!(back, s);
    }

    #[test]
    #[should_panic(expected = "cursor range transposed")]
    fn transposed() {
        let s = span((&[1, 2, 3],));
        let _ = s.end().until(s.begin());
    }

    #[test]
    #[should_panic(expected = "cannot dereference end cursor")]
    fn dereference_end() {
        let s = span((&[1, 2, 3],));
        let _ = s.end().get();
    }

    #[test]
    #[should_panic(expected = "cannot dereference end cursor")]
    fn dereference_default() {
        let c: Cursor<(i32, f32)> = Cursor::default();
        let _ = c.get();
    }

    #[test]
    #[should_panic(expected = "cannot seek cursor before begin")]
    fn before_begin() {
        let s = span((&[1, 2, 3],));
        let _ = s.begin() - 1;
    }

    #[test]
    #[should_panic(expected = "cannot seek cursor after end")]
    fn after_end() {
        let s = span((&[1, 2, 3],));
        let _ = s.begin() + 4;
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "incompatible cursors")]
    fn incompatible() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        let _ = span((&a,)).end() - span((&b,)).begin();
    }

    #[test]
    #[should_panic(expected = "incompatible cursors")]
    fn range_across_spans() {
        let buf = [1, 2, 3, 4, 5, 6, 7, 8];
        let short = span((&buf[..1],));
        let long = span((&buf[..],));
        let _ = short.begin().until(long.end());
    }

    #[test]
    #[should_panic(expected = "incompatible cursors")]
    fn span_across_spans() {
        let buf = [1, 2, 3, 4, 5, 6, 7, 8];
        let short = span((&buf[..1],));
        let long = span((&buf[..],));
        let _: SpanTuple<(i32,)> = SpanTuple::from_range(short.begin(), long.end());
    }

    #[test]
    fn mutable() {
        let mut a = [1, 2, 3];
        let mut b = ['a', 'b', 'c'];
        let mut s = span_mut((&mut a, &mut b));
        let mut c = s.begin_mut();
        while !c.is_end() {
            let (x, y) = c.get_mut();
            *x *= 10;
            *y = y.to_ascii_uppercase();
            c += 1;
        }
        c -= 3;
        assert_eq!(c.position(), 0);
        assert_eq!(c.as_cursor().at(2), (&30, &'C'));
        assert_eq!(a, [10, 20, 30]);
        assert_eq!(b, ['A', 'B', 'C']);
    }
}
