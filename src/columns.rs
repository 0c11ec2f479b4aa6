//! Tuple machinery that lets a tuple of element types describe a set of
//! parallel columns.
//!
//! A tuple such as `(i32, f32)` implements [`Columns`]. Its associated types
//! describe everything a span or array needs to know about the columns: the
//! tuple of pointers `(NonNull<i32>, NonNull<f32>)`, the tuple of references
//! `(&i32, &f32)`, the tuple of arrays `([i32; N], [f32; N])`, and so on.
//! Implementations are provided for tuples of 1 to 6 element types.
//!
//! A single column can be picked out by position using [`Column<I>`], or by
//! element type using [`Select<T, At<I>>`]. In the latter case `I` is
//! normally inferred, which works as long as the element type occurs only
//! once in the tuple:
//!
//! ```
//! use span_tuple::{span};
//! let a = [1, 2, 3];
//! let b = [0.5, 1.5, 2.5];
//! let s = span((&a, &b));
//! let floats: &[f64; 3] = s.column_of::<f64, _>();
//! assert_eq!(floats, &b);
//! ```

use std::mem::{MaybeUninit};
use std::ptr::{NonNull};

use super::{Extent, Fixed, Parts, PartsMut, Result, check_len};

/// Implemented by tuples of element types.
///
/// You probably shouldn't write any more implementations of this trait. The
/// views and containers in this crate use the associated functions as
/// building blocks, and their safety depends on the implementations being
/// correct.
///
/// # Safety
///
/// Implementations must treat the columns uniformly: every function that
/// takes a [`Self::Ptr`] applies the same operation to every pointer in it.
pub unsafe trait Columns: Sized {
    /// A tuple of one non-null pointer per column.
    type Ptr: Copy;

    /// A tuple of shared references, one per column.
    type Ref<'a>: Copy where Self: 'a;

    /// A tuple of exclusive references, one per column.
    type Mut<'a> where Self: 'a;

    /// A tuple of shared columns of extent `E`.
    type Slices<'a, E: Extent> where Self: 'a;

    /// A tuple of exclusive columns of extent `E`.
    type SlicesMut<'a, E: Extent> where Self: 'a;

    /// A tuple of arrays of length `N`, one per column.
    type Arrays<const N: usize>;

    /// The number of columns.
    const COUNT: usize;

    /// The total size in bytes of one element of every column.
    const ROW_BYTES: usize;

    /// Returns well-aligned pointers that are valid for zero elements.
    fn dangling() -> Self::Ptr;

    /// Returns `true` if every pointer in `x` equals the one in `y`.
    fn ptr_eq(x: Self::Ptr, y: Self::Ptr) -> bool;

    /// Advances every pointer by `count` elements of its own type.
    ///
    /// # Safety
    ///
    /// Every resulting pointer must be in bounds of, or one past the end of,
    /// the allocation the original pointer points into.
    unsafe fn add(ptr: Self::Ptr, count: usize) -> Self::Ptr;

    /// Borrows the elements at `ptr`.
    ///
    /// # Safety
    ///
    /// Every pointer must be valid for reads for `'a`.
    unsafe fn get<'a>(ptr: Self::Ptr) -> Self::Ref<'a> where Self: 'a;

    /// Mutably borrows the elements at `ptr`.
    ///
    /// # Safety
    ///
    /// Every pointer must be valid for reads and writes for `'a`, and nothing
    /// else may access the elements for `'a`.
    unsafe fn get_mut<'a>(ptr: Self::Ptr) -> Self::Mut<'a> where Self: 'a;

    /// Borrows `extent.len()` elements of every column.
    ///
    /// # Safety
    ///
    /// As for [`Extent::slice()`], for every pointer.
    unsafe fn slices<'a, E: Extent>(ptr: Self::Ptr, extent: E) -> Self::Slices<'a, E> where Self: 'a;

    /// Mutably borrows `extent.len()` elements of every column.
    ///
    /// # Safety
    ///
    /// As for [`Extent::slice_mut()`], for every pointer.
    unsafe fn slices_mut<'a, E: Extent>(ptr: Self::Ptr, extent: E) -> Self::SlicesMut<'a, E> where Self: 'a;

    /// Stores the components of `value` through `dst`.
    fn write(dst: Self::Mut<'_>, value: Self);

    /// Splits `N` rows into one array per column.
    fn unzip_rows<const N: usize>(rows: [Self; N]) -> Self::Arrays<N>;

    /// Returns pointers to the first element of every array.
    fn arrays_ptr<const N: usize>(arrays: &Self::Arrays<N>) -> Self::Ptr;

    /// Returns pointers to the first element of every array, valid for
    /// writes.
    fn arrays_mut_ptr<const N: usize>(arrays: &mut Self::Arrays<N>) -> Self::Ptr;
}

// ----------------------------------------------------------------------------

/// Implemented by [`Columns`] types that have a column at position `I`.
pub trait Column<const I: usize>: Columns {
    /// The element type of column `I`.
    type Elem;

    /// Picks out the pointer to column `I`.
    fn column_ptr(ptr: Self::Ptr) -> NonNull<Self::Elem>;
}

/// Marks column position `I` in [`Select`].
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq)]
pub struct At<const I: usize>;

/// Implemented by [`Columns`] types that have a column of element type `T`.
///
/// `X` is [`At<I>`] where `I` is the position of the column. It is a type
/// parameter only so that the compiler can infer it.
pub trait Select<T, X>: Columns {
    /// Picks out the pointer to the column of type `T`.
    fn select_ptr(ptr: Self::Ptr) -> NonNull<T>;
}

// ----------------------------------------------------------------------------

macro_rules! impl_column {
    (($($T:ident),+), $Ti:ident, $i:tt) => {
        impl<$($T),+> Column<$i> for ($($T,)+) {
            type Elem = $Ti;
            #[inline(always)]
            fn column_ptr(ptr: Self::Ptr) -> NonNull<$Ti> { ptr.$i }
        }

        impl<$($T),+> Select<$Ti, At<$i>> for ($($T,)+) {
            #[inline(always)]
            fn select_ptr(ptr: Self::Ptr) -> NonNull<$Ti> { ptr.$i }
        }
    };
}

/// Implements [`Columns`] and friends for one tuple size.
///
/// - `$count` - the number of columns.
/// - `$tys` - all the type parameters, in parentheses.
/// - then, for each column, its type parameter and tuple index.
macro_rules! impl_columns {
    ($count:literal, $tys:tt; $($T:ident $i:tt),+) => {
        unsafe impl<$($T),+> Columns for ($($T,)+) {
            type Ptr = ($(NonNull<$T>,)+);
            type Ref<'a> = ($(&'a $T,)+) where Self: 'a;
            type Mut<'a> = ($(&'a mut $T,)+) where Self: 'a;
            type Slices<'a, E: Extent> = ($(E::Slice<'a, $T>,)+) where Self: 'a;
            type SlicesMut<'a, E: Extent> = ($(E::SliceMut<'a, $T>,)+) where Self: 'a;
            type Arrays<const N: usize> = ($([$T; N],)+);

            const COUNT: usize = $count;
            const ROW_BYTES: usize = 0 $(+ std::mem::size_of::<$T>())+;

            #[inline(always)]
            fn dangling() -> Self::Ptr { ($(NonNull::<$T>::dangling(),)+) }

            #[inline(always)]
            fn ptr_eq(x: Self::Ptr, y: Self::Ptr) -> bool { true $(&& x.$i == y.$i)+ }

            #[inline(always)]
            unsafe fn add(ptr: Self::Ptr, count: usize) -> Self::Ptr {
                ($(NonNull::new_unchecked(ptr.$i.as_ptr().add(count)),)+)
            }

            #[inline(always)]
            unsafe fn get<'a>(ptr: Self::Ptr) -> Self::Ref<'a> where Self: 'a {
                ($(&*ptr.$i.as_ptr(),)+)
            }

            #[inline(always)]
            unsafe fn get_mut<'a>(ptr: Self::Ptr) -> Self::Mut<'a> where Self: 'a {
                ($(&mut *ptr.$i.as_ptr(),)+)
            }

            #[inline(always)]
            unsafe fn slices<'a, E: Extent>(ptr: Self::Ptr, extent: E) -> Self::Slices<'a, E> where Self: 'a {
                ($(E::slice(ptr.$i, extent),)+)
            }

            #[inline(always)]
            unsafe fn slices_mut<'a, E: Extent>(ptr: Self::Ptr, extent: E) -> Self::SlicesMut<'a, E> where Self: 'a {
                ($(E::slice_mut(ptr.$i, extent),)+)
            }

            #[inline(always)]
            fn write(dst: Self::Mut<'_>, value: Self) {
                $(*dst.$i = value.$i;)+
            }

            fn unzip_rows<const N: usize>(rows: [Self; N]) -> Self::Arrays<N> {
                let mut arrays = ($(MaybeUninit::<[$T; N]>::uninit(),)+);
                // `rows.into_iter()` yields exactly `N` rows and runs no user code.
                for (pos, row) in rows.into_iter().enumerate() {
                    $(unsafe { arrays.$i.as_mut_ptr().cast::<$T>().add(pos).write(row.$i); })+
                }
                unsafe { ($(arrays.$i.assume_init(),)+) }
            }

            #[inline(always)]
            fn arrays_ptr<const N: usize>(arrays: &Self::Arrays<N>) -> Self::Ptr {
                ($(NonNull::from(&arrays.$i).cast::<$T>(),)+)
            }

            #[inline(always)]
            fn arrays_mut_ptr<const N: usize>(arrays: &mut Self::Arrays<N>) -> Self::Ptr {
                ($(NonNull::from(&mut arrays.$i).cast::<$T>(),)+)
            }
        }

        $(impl_column!($tys, $T, $i);)+

        impl<'a, $($T: 'a),+> Parts<'a> for ($(&'a [$T],)+) {
            type Columns = ($($T,)+);
            type Extent = usize;

            fn into_raw(self) -> Result<(<Self::Columns as Columns>::Ptr, usize)> {
                let len = self.0.len();
                $(check_len($i, len, self.$i.len())?;)+
                Ok((($(NonNull::from(self.$i).cast::<$T>(),)+), len))
            }
        }

        impl<'a, $($T: 'a),+, const N: usize> Parts<'a> for ($(&'a [$T; N],)+) {
            type Columns = ($($T,)+);
            type Extent = Fixed<N>;

            fn into_raw(self) -> Result<(<Self::Columns as Columns>::Ptr, usize)> {
                Ok((($(NonNull::from(self.$i).cast::<$T>(),)+), N))
            }
        }

        impl<'a, $($T: 'a),+> Parts<'a> for ($(&'a Vec<$T>,)+) {
            type Columns = ($($T,)+);
            type Extent = usize;

            fn into_raw(self) -> Result<(<Self::Columns as Columns>::Ptr, usize)> {
                ($(self.$i.as_slice(),)+).into_raw()
            }
        }

        impl<'a, $($T: 'a),+> PartsMut<'a> for ($(&'a mut [$T],)+) {
            type Columns = ($($T,)+);
            type Extent = usize;

            fn into_raw(self) -> Result<(<Self::Columns as Columns>::Ptr, usize)> {
                let len = self.0.len();
                $(check_len($i, len, self.$i.len())?;)+
                Ok((($(NonNull::from(self.$i).cast::<$T>(),)+), len))
            }
        }

        impl<'a, $($T: 'a),+, const N: usize> PartsMut<'a> for ($(&'a mut [$T; N],)+) {
            type Columns = ($($T,)+);
            type Extent = Fixed<N>;

            fn into_raw(self) -> Result<(<Self::Columns as Columns>::Ptr, usize)> {
                Ok((($(NonNull::from(self.$i).cast::<$T>(),)+), N))
            }
        }

        impl<'a, $($T: 'a),+> PartsMut<'a> for ($(&'a mut Vec<$T>,)+) {
            type Columns = ($($T,)+);
            type Extent = usize;

            fn into_raw(self) -> Result<(<Self::Columns as Columns>::Ptr, usize)> {
                ($(self.$i.as_mut_slice(),)+).into_raw()
            }
        }
    };
}

impl_columns!(1, (T0); T0 0);
impl_columns!(2, (T0, T1); T0 0, T1 1);
impl_columns!(3, (T0, T1, T2); T0 0, T1 1, T2 2);
impl_columns!(4, (T0, T1, T2, T3); T0 0, T1 1, T2 2, T3 3);
impl_columns!(5, (T0, T1, T2, T3, T4); T0 0, T1 1, T2 2, T3 3, T4 4);
impl_columns!(6, (T0, T1, T2, T3, T4, T5); T0 0, T1 1, T2 2, T3 3, T4 4, T5 5);

// ----------------------------------------------------------------------------
