/// Offsets visited while one coordinate advances and every other one stays
/// fixed.
///
/// The loop-invariant part of the offset is folded into `base` once, so each
/// step costs one addition of `stride` instead of a full flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    base: usize,
    stride: usize,
    len: usize,
}

impl Lane {
    pub fn new(base: usize, stride: usize, len: usize) -> Self {
        Lane { base, stride, len }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the `i`-th element: `base + stride * i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<usize> {
        (i < self.len).then(|| self.base + self.stride * i)
    }

    pub fn iter(&self) -> LaneIter {
        LaneIter {
            next: self.base,
            stride: self.stride,
            remaining: self.len,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LaneIter {
    next: usize,
    stride: usize,
    remaining: usize,
}

impl Iterator for LaneIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        // the last step is skipped so a lane ending at usize::MAX never wraps
        if self.remaining > 0 {
            self.next += self.stride;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LaneIter {}

impl IntoIterator for Lane {
    type Item = usize;
    type IntoIter = LaneIter;

    fn into_iter(self) -> LaneIter {
        self.iter()
    }
}

impl IntoIterator for &Lane {
    type Item = usize;
    type IntoIter = LaneIter;

    fn into_iter(self) -> LaneIter {
        self.iter()
    }
}
