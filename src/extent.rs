//! Compile-time and run-time element counts.
//!
//! A [`SpanTuple`] is parameterised by an [`Extent`], which is either
//! [`Fixed<N>`] (the length is the compile-time constant `N`) or [`Dynamic`]
//! (the length is stored at run-time). `Fixed<N>` is a zero-sized type, so a
//! static-extent span stores nothing but its pointers.
//!
//! [`SpanTuple`]: super::SpanTuple

use std::fmt::{Debug};
use std::ptr::{NonNull};

use super::{Error, Result};

/// The length of a [`SpanTuple`], known either at compile-time or run-time.
///
/// The extent also determines the type of a single column: `&[T; N]` for
/// [`Fixed<N>`] and `&[T]` for [`Dynamic`].
///
/// [`SpanTuple`]: super::SpanTuple
pub trait Extent: Debug + Copy + Eq {
    /// `Some(N)` for [`Fixed<N>`], otherwise `None`.
    const STATIC: Option<usize>;

    /// A shared column of this extent.
    type Slice<'a, T: 'a>: Copy;

    /// An exclusive column of this extent.
    type SliceMut<'a, T: 'a>;

    /// Returns the number of rows.
    fn len(self) -> usize;

    /// Returns the `Self` whose `len()` is `len`, if any.
    fn try_from_len(len: usize) -> Result<Self>;

    /// Forms a column from its first element.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `extent.len()` elements for `'a`.
    unsafe fn slice<'a, T: 'a>(ptr: NonNull<T>, extent: Self) -> Self::Slice<'a, T>;

    /// Forms an exclusive column from its first element.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `extent.len()` elements
    /// for `'a`, and nothing else may access them for `'a`.
    unsafe fn slice_mut<'a, T: 'a>(ptr: NonNull<T>, extent: Self) -> Self::SliceMut<'a, T>;
}

/// The [`Extent`] of a span whose length is only known at run-time.
pub type Dynamic = usize;

impl Extent for usize {
    const STATIC: Option<usize> = None;
    type Slice<'a, T: 'a> = &'a [T];
    type SliceMut<'a, T: 'a> = &'a mut [T];

    #[inline(always)]
    fn len(self) -> usize { self }

    #[inline(always)]
    fn try_from_len(len: usize) -> Result<Self> { Ok(len) }

    #[inline(always)]
    unsafe fn slice<'a, T: 'a>(ptr: NonNull<T>, extent: Self) -> &'a [T] {
        std::slice::from_raw_parts(ptr.as_ptr(), extent)
    }

    #[inline(always)]
    unsafe fn slice_mut<'a, T: 'a>(ptr: NonNull<T>, extent: Self) -> &'a mut [T] {
        std::slice::from_raw_parts_mut(ptr.as_ptr(), extent)
    }
}

// ----------------------------------------------------------------------------

/// The [`Extent`] of a span whose length is the compile-time constant `N`.
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixed<const N: usize>;

impl<const N: usize> Extent for Fixed<N> {
    const STATIC: Option<usize> = Some(N);
    type Slice<'a, T: 'a> = &'a [T; N];
    type SliceMut<'a, T: 'a> = &'a mut [T; N];

    #[inline(always)] // Want the caller to see this as constant.
    fn len(self) -> usize { N }

    fn try_from_len(len: usize) -> Result<Self> {
        if len == N { return Ok(Fixed); }
        tracing::debug!(expected = N, found = len, "static extent mismatch");
        Err(Error::ExtentMismatch {expected: N, found: len})
    }

    #[inline(always)]
    unsafe fn slice<'a, T: 'a>(ptr: NonNull<T>, _: Self) -> &'a [T; N] {
        &*ptr.as_ptr().cast::<[T; N]>()
    }

    #[inline(always)]
    unsafe fn slice_mut<'a, T: 'a>(ptr: NonNull<T>, _: Self) -> &'a mut [T; N] {
        &mut *ptr.as_ptr().cast::<[T; N]>()
    }
}

/// Returns `E::try_from_len(len)`, panicking on failure.
#[track_caller]
pub(crate) fn extent_of<E: Extent>(len: usize) -> E {
    match E::try_from_len(len) {
        Ok(extent) => extent,
        Err(e) => panic!("{}", e),
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths() {
        assert_eq!(Fixed::<4>.len(), 4);
        assert_eq!(7usize.len(), 7);
        assert_eq!(<Fixed<4> as Extent>::STATIC, Some(4));
        assert_eq!(<Dynamic as Extent>::STATIC, None);
        assert_eq!(std::mem::size_of::<Fixed<1000>>(), 0);
    }

    #[test]
    fn from_len() {
        assert_eq!(Fixed::<3>::try_from_len(3), Ok(Fixed));
        assert_eq!(Fixed::<3>::try_from_len(2), Err(Error::ExtentMismatch {expected: 3, found: 2}));
        assert_eq!(Dynamic::try_from_len(2), Ok(2));
    }

    #[test]
    #[should_panic(expected = "static extent 3")]
    fn extent_of_panics() {
        let _: Fixed<3> = extent_of(5);
    }

    #[test]
    fn slices() {
        let a = [1, 2, 3];
        let p = NonNull::from(&a).cast::<i32>();
        let fixed: &[i32; 3] = unsafe { Fixed::<3>::slice(p, Fixed) };
        let dynamic: &[i32] = unsafe { Dynamic::slice(p, 2) };
        assert_eq!(fixed, &[1, 2, 3]);
        assert_eq!(dynamic, &[1, 2]);
    }
}
