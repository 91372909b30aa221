use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::LayoutError;
use crate::lane::Lane;
use crate::offset::flatten_slices;

pub type Coords = SmallVec<[usize; 4]>;

/// Largest capacity [`Layout::is_bijective`] will walk.
pub const VERIFY_LIMIT: usize = u32::MAX as usize;

/// Shape of a row-major flattened array, outermost extent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout", into = "RawLayout")]
pub struct Layout {
    extents: Coords,
    capacity: usize,
}

#[derive(Serialize, Deserialize)]
struct RawLayout {
    extents: Vec<usize>,
}

impl TryFrom<RawLayout> for Layout {
    type Error = LayoutError;

    fn try_from(raw: RawLayout) -> Result<Self, LayoutError> {
        Layout::new(&raw.extents)
    }
}

impl From<Layout> for RawLayout {
    fn from(layout: Layout) -> Self {
        RawLayout {
            extents: layout.extents.to_vec(),
        }
    }
}

impl Layout {
    pub fn new(extents: &[usize]) -> Result<Self, LayoutError> {
        if extents.is_empty() {
            return Err(LayoutError::Empty);
        }
        if let Some(axis) = extents.iter().position(|&e| e == 0) {
            return Err(LayoutError::ZeroExtent { axis });
        }
        let capacity = extents
            .iter()
            .try_fold(1usize, |acc, &e| acc.checked_mul(e))
            .ok_or(LayoutError::CapacityOverflow)?;

        debug!(?extents, capacity, "layout created");
        Ok(Layout {
            extents: SmallVec::from_slice(extents),
            capacity,
        })
    }

    pub fn rank(&self) -> usize {
        self.extents.len()
    }

    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Number of elements in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Row-major strides; the innermost axis has stride 1.
    pub fn strides(&self) -> Coords {
        let n = self.rank();
        let mut strides: Coords = SmallVec::from_elem(1, n);
        for i in (0..n - 1).rev() {
            strides[i] = strides[i + 1] * self.extents[i + 1];
        }
        strides
    }

    /// Unchecked offset of `coords`. Out-of-range coordinates give an offset
    /// outside the logical range, exactly like [`crate::flatten_index!`].
    #[inline]
    pub fn offset(&self, coords: &[usize]) -> usize {
        debug_assert_eq!(coords.len(), self.rank());
        flatten_slices(coords, &self.extents[1..])
    }

    pub fn checked_offset(&self, coords: &[usize]) -> Result<usize, LayoutError> {
        self.check_coords(coords)?;
        Ok(self.offset(coords))
    }

    /// Inverse of [`Layout::offset`].
    pub fn coords(&self, offset: usize) -> Result<Coords, LayoutError> {
        if offset >= self.capacity {
            return Err(LayoutError::OffsetOutOfRange {
                offset,
                capacity: self.capacity,
            });
        }
        let mut coords: Coords = SmallVec::from_elem(0, self.rank());
        let mut remaining = offset;
        for (slot, &extent) in coords.iter_mut().zip(&self.extents).rev() {
            *slot = remaining % extent;
            remaining /= extent;
        }
        Ok(coords)
    }

    /// Every coordinate tuple in lexicographic order, which is also offset
    /// order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        self.extents
            .iter()
            .map(|&extent| 0..extent)
            .multi_cartesian_product()
    }

    /// True when enumerating all coordinates hits every offset in
    /// `0..capacity` exactly once. Lexicographic order must produce the
    /// offsets `0, 1, 2, ..` in sequence, so each one is compared with a
    /// running counter.
    pub fn is_bijective(&self) -> Result<bool, LayoutError> {
        if self.capacity > VERIFY_LIMIT {
            return Err(LayoutError::TooLarge {
                capacity: self.capacity,
                limit: VERIFY_LIMIT,
            });
        }
        let mut expected = 0usize;
        for coords in self.iter_coords() {
            let offset = self.offset(&coords);
            if offset != expected {
                debug!(?coords, offset, expected, "offset out of sequence");
                return Ok(false);
            }
            expected += 1;
        }
        Ok(expected == self.capacity)
    }

    /// Lane along `axis` starting at `coords`, running to the end of that
    /// axis. The other coordinates stay fixed.
    pub fn lane(&self, coords: &[usize], axis: usize) -> Result<Lane, LayoutError> {
        let rank = self.rank();
        if axis >= rank {
            return Err(LayoutError::AxisOutOfRange { axis, rank });
        }
        let base = self.checked_offset(coords)?;
        let stride: usize = self.extents[axis + 1..].iter().product();
        let len = self.extents[axis] - coords[axis];

        debug!(base, stride, len, axis, "lane created");
        Ok(Lane::new(base, stride, len))
    }

    fn check_coords(&self, coords: &[usize]) -> Result<(), LayoutError> {
        if coords.len() != self.rank() {
            return Err(LayoutError::RankMismatch {
                expected: self.rank(),
                actual: coords.len(),
            });
        }
        for (axis, (&coord, &extent)) in coords.iter().zip(&self.extents).enumerate() {
            if coord >= extent {
                return Err(LayoutError::OutOfBounds {
                    axis,
                    coord,
                    extent,
                });
            }
        }
        Ok(())
    }
}
