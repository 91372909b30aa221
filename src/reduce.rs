use std::ops::AddAssign;

use crate::lane::Lane;
use crate::nd_offset;

/// Sums column `c` of a row-major `nr` x `nc` matrix, from row `r0` down.
///
/// The offset is recomputed per row with [`nd_offset!`]; only `r` changes
/// inside the loop, so the optimizer reduces it to a pointer bump by `nc`.
pub fn sum_column<T>(mat: &[T], nr: usize, nc: usize, r0: usize, c: usize) -> T
where
    T: Copy + Default + AddAssign,
{
    let mut val = T::default();
    for r in r0..nr {
        val += mat[nd_offset!(c, nc, r)];
    }
    val
}

/// Sums the elements of `buf` visited by `lane`.
pub fn sum_lane<T>(buf: &[T], lane: &Lane) -> T
where
    T: Copy + Default + AddAssign,
{
    let mut val = T::default();
    for offset in lane {
        val += buf[offset];
    }
    val
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    fn matrix(nr: usize, nc: usize) -> Vec<f64> {
        (0..nr * nc).map(|i| i as f64).collect()
    }

    #[test]
    fn test_sum_column() {
        // 5 x 4, column 3 holds 3, 7, 11, 15, 19
        let mat = matrix(5, 4);
        assert_eq!(sum_column(&mat, 5, 4, 0, 3), 55.0);
        assert_eq!(sum_column(&mat, 5, 4, 2, 3), 45.0);
    }

    #[test]
    fn test_sum_column_empty_range() {
        let mat = matrix(5, 4);
        assert_eq!(sum_column(&mat, 5, 4, 5, 0), 0.0);
        assert_eq!(sum_column(&mat, 5, 4, 7, 0), 0.0);
    }

    #[test]
    fn test_sum_lane_matches_sum_column() {
        let mat: Vec<i64> = (0..30).collect();
        let layout = Layout::new(&[6, 5]).unwrap();
        for r0 in 0..6 {
            for c in 0..5 {
                let lane = layout.lane(&[r0, c], 0).unwrap();
                assert_eq!(sum_lane(&mat, &lane), sum_column(&mat, 6, 5, r0, c));
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_sum_column_panics_past_buffer() {
        let mat = matrix(2, 2);
        sum_column(&mat, 3, 2, 0, 0);
    }
}
