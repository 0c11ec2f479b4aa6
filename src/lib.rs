//! A pure-Rust library providing structure-of-arrays views and containers.
//!
//! Data is often stored as several parallel arrays of the same length, one
//! array per field, instead of one array of structs. This crate provides two
//! ways of treating such a set of arrays as a single collection of rows:
//!
//! - [`SpanTuple<'a, C, E>`] is a non-owning view, like `&[T]`. It borrows
//!   the same range of every array. [`SpanTupleMut`] is the exclusive
//!   version, like `&mut [T]`.
//! - [`ArrayTuple<C, N>`] is a container, like `[T; N]`. It owns one array
//!   of length `N` per column.
//!
//! The element types of the columns are given as a tuple `C`, such as
//! `(i32, f32)`. A row is then a tuple of references such as `(&i32, &f32)`.
//! Any tuple of 1 to 6 element types implements [`Columns`].
//!
//! The length of a `SpanTuple` is its [`Extent`] `E`. It is either
//! [`Fixed<N>`], known at compile-time, or [`Dynamic`], stored at run-time.
//! A `SpanTuple` with a `Fixed` extent is no larger than its pointers.
//!
//! ```
//! use span_tuple::{span, SpanTuple, Fixed};
//! let ints = [1, 2, 3, 4];
//! let floats = [2.3f32, 34.0, 12.3, 32.0];
//! let s: SpanTuple<(i32, f32), Fixed<4>> = span((&ints, &floats));
//! assert_eq!(s.front(), Some((&1, &2.3)));
//! assert_eq!(s.back(), Some((&4, &32.0)));
//! let middle: Vec<_> = s.subspan::<1, 2>().iter().collect();
//! assert_eq!(middle, [(&2, &34.0), (&3, &12.3)]);
//! for (i, f) in s {
//!     assert!(*f > *i as f32);
//! }
//! let just_floats: &[f32; 4] = s.column::<1>();
//! assert_eq!(just_floats, &floats);
//! ```
//!
//! Operations that can fail come in two forms. The panicking form (e.g.
//! [`SpanTuple::new()`], [`SpanTuple::at()`]) behaves like slice indexing.
//! The checked form (e.g. [`SpanTuple::try_new()`], [`ArrayTuple::at()`])
//! returns a [`Result`] whose error is an [`Error`].

mod error;
pub use error::{Error, Result};
use error::{check_len};

mod extent;
pub use extent::{Extent, Fixed, Dynamic};

pub mod columns;
pub use columns::{Columns, Column, Select, At};

mod span;
pub use span::{Parts, PartsMut, SpanTuple, SpanTupleMut, span, span_mut, get};

mod cursor;
pub use cursor::{Cursor, CursorMut};

mod iter;
pub use iter::{Iter, IterMut};

mod array;
pub use array::{ArrayTuple};
