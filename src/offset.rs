use std::fmt::Debug;
use std::ops::{Add, Mul};

/// Integer type usable as a coordinate, an extent and an offset.
///
/// Every primitive integer implements it. Coordinates, extents and the result
/// of a flattening always share one `Size` type.
pub trait Size: Copy + Debug + Add<Output = Self> + Mul<Output = Self> {
    const ZERO: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_size {
    ($($t:ty),* $(,)?) => {
        $(
            impl Size for $t {
                const ZERO: Self = 0;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

impl_size!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Flattens a coordinate, outermost dimension first.
///
/// `flatten_index!(x0, e1, x1, e2, x2)` is `(x0 * e1 + x1) * e2 + x2`: start
/// from the outermost coordinate, then for every following dimension multiply
/// by its extent and add its coordinate. The outermost extent is never needed.
/// A single argument is returned unchanged.
///
/// No bounds are checked. All arguments must have the same integer type.
///
/// ```
/// use ndoffset::flatten_index;
///
/// assert_eq!(flatten_index!(3, 4, 2), 14);
/// assert_eq!(flatten_index!(1usize, 3, 2, 4, 3), 23);
/// assert_eq!(flatten_index!(7u8), 7);
/// ```
#[macro_export]
macro_rules! flatten_index {
    ($x0:expr $(,)?) => {
        $x0
    };
    ($x0:expr, $($extent:expr, $coord:expr),+ $(,)?) => {{
        let offset = $x0;
        $(
            let offset = offset * $extent + $coord;
        )+
        offset
    }};
}

/// Flattens a coordinate, fastest-varying dimension first.
///
/// Each coordinate is followed by the extent of its own dimension, and the
/// last (slowest) coordinate carries no extent:
/// `nd_offset!(x0, e0, x1, e1, x2)` is `x0 + e0 * (x1 + e1 * x2)`.
/// It is [`flatten_index!`] with the argument list reversed.
///
/// ```
/// use ndoffset::{flatten_index, nd_offset};
///
/// let (nc, r, c) = (4usize, 2, 3);
/// assert_eq!(nd_offset!(c, nc, r), r * nc + c);
/// assert_eq!(nd_offset!(c, nc, r), flatten_index!(r, nc, c));
/// ```
#[macro_export]
macro_rules! nd_offset {
    ($x:expr $(,)?) => {
        $x
    };
    ($x:expr, $extent:expr, $($rest:expr),+ $(,)?) => {
        $x + $extent * $crate::nd_offset!($($rest),+)
    };
}

/// Slice form of [`flatten_index!`]: `steps` holds `(extent, coord)` for every
/// dimension after the outermost.
#[inline]
pub fn flatten<S: Size>(outer: S, steps: &[(S, S)]) -> S {
    steps
        .iter()
        .fold(outer, |offset, &(extent, coord)| offset * extent + coord)
}

/// Like [`flatten`], but returns `None` instead of overflowing.
#[inline]
pub fn checked_flatten<S: Size>(outer: S, steps: &[(S, S)]) -> Option<S> {
    steps.iter().try_fold(outer, |offset, &(extent, coord)| {
        offset.checked_mul(extent)?.checked_add(coord)
    })
}

/// Flattens `coords` (outermost first) against `extents` of the dimensions
/// after the outermost, so `extents.len() + 1 == coords.len()`.
///
/// An empty coordinate flattens to zero.
#[inline]
pub fn flatten_slices<S: Size>(coords: &[S], extents: &[S]) -> S {
    debug_assert_eq!(coords.len(), extents.len() + 1);
    match coords.split_first() {
        Some((&outer, rest)) => rest
            .iter()
            .zip(extents)
            .fold(outer, |offset, (&coord, &extent)| offset * extent + coord),
        None => S::ZERO,
    }
}
