use smallvec::SmallVec;

/// Shape/stride query surface shared by [`Tensor`](crate::Tensor),
/// [`TensorView`](crate::TensorView) and [`TensorViewMut`](crate::TensorViewMut).
pub trait Layout {
    /// Number of axes.
    fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Extent of each axis, outermost first.
    fn shape(&self) -> &[usize];

    /// Row-major stride of each axis, in elements (not bytes).
    fn strides(&self) -> &[usize];

    /// Extent of a single axis.
    fn size(&self, dim: usize) -> usize {
        self.shape()[dim]
    }

    /// Stride of a single axis, in elements.
    fn stride(&self, dim: usize) -> usize {
        self.strides()[dim]
    }

    /// Total element count (product of `shape()`; `1` for a rank-0 tensor).
    fn len(&self) -> usize {
        self.shape().iter().product()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if the strides are exactly the row-major strides for `shape()`,
    /// i.e. the buffer can be iterated with a flat `0..len()` range.
    fn is_contiguous(&self) -> bool {
        self.strides() == row_major_strides(self.shape()).as_slice()
    }
}

/// Compute row-major ("C order") strides for `shape`: `stride[i] = product
/// of shape[i+1..]`, last axis contiguous.
pub fn row_major_strides(shape: &[usize]) -> SmallVec<[usize; 8]> {
    let mut strides = SmallVec::from_elem(1usize, shape.len());
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

#[cfg(test)]
mod tests {
    use super::row_major_strides;

    #[test]
    fn strides_for_rank_0() {
        let s = row_major_strides(&[]);
        assert_eq!(s.as_slice(), &[] as &[usize]);
    }

    #[test]
    fn strides_for_typical_shape() {
        let s = row_major_strides(&[32, 50, 79]);
        assert_eq!(s.as_slice(), &[50 * 79, 79, 1]);
    }

    #[test]
    fn strides_for_unit_axes() {
        let s = row_major_strides(&[1171, 373, 2, 1, 2, 1, 2, 1]);
        assert_eq!(s.as_slice(), &[373 * 2 * 1 * 2 * 1 * 2 * 1, 2, 1, 2, 1, 2, 1, 1]);
    }
}
