//! The axis plan.
//!
//! Turns a source shape and a caller-ordered reduction axis list into the
//! retained-axis list, the output shape, and the reduction-coordinate
//! flattening rule the arg-operators need.
//!
//! The reduction axis list `R` must **not** be normalised by sorting: it is
//! both a set (which axes are collapsed) and a sequence (the order
//! arg-indices are flattened in). Every field below that derives from `R`
//! preserves the caller's order; only `K` (retained axes) is sorted, because
//! the output axis order is defined to follow the *source's* order among
//! kept axes, not the caller's.

use smallvec::SmallVec;

use crate::error::{ReduceError, Result};
use ndreduce_tensor::{row_major_strides, MAX_RANK};

type AxisVec = SmallVec<[usize; MAX_RANK]>;

/// The derived shape/index-flattening data for one reduction call.
#[derive(Debug, Clone)]
pub struct AxisPlan {
    /// Axes of the source *not* in `R`, ascending, in source order.
    pub retained_axes: AxisVec,
    /// `R` exactly as supplied by the caller — order is semantically
    /// significant (see module docs).
    pub reduction_axes: AxisVec,
    /// `[source_shape[k] for k in retained_axes]`.
    pub output_shape: AxisVec,
    /// `[source_shape[r] for r in reduction_axes]`, in `R`'s order (**not**
    /// ascending).
    pub reduction_shape: AxisVec,
    /// Row-major strides of `reduction_shape`, used to flatten a reduction
    /// coordinate tuple (given in `R`'s order) into a single linear
    /// arg-index.
    reduction_strides: AxisVec,
    /// Row-major strides of the full source shape, used to compute the
    /// linear source offset for a given `(retained coord, reduction coord)`
    /// pair.
    pub source_strides: AxisVec,
}

impl AxisPlan {
    /// Validate `axes` against `source_shape` and build the plan.
    ///
    /// Errors: any `r_i >= n`; any duplicate axis; an empty axis list.
    pub fn new(source_shape: &[usize], axes: &[usize]) -> Result<Self> {
        let n = source_shape.len();

        if axes.is_empty() {
            return Err(ReduceError::InvalidAxis("reduction axis list must not be empty"));
        }
        if axes.len() > n {
            return Err(ReduceError::InvalidAxis(
                "reduction axis list longer than source rank",
            ));
        }

        let mut seen = [false; MAX_RANK];
        for &axis in axes {
            if axis >= n {
                return Err(ReduceError::InvalidAxis("reduction axis out of range"));
            }
            if seen[axis] {
                return Err(ReduceError::InvalidAxis("reduction axis list has duplicates"));
            }
            seen[axis] = true;
        }

        let reduction_axes: AxisVec = axes.iter().copied().collect();
        let retained_axes: AxisVec = (0..n).filter(|d| !seen[*d]).collect();

        let output_shape: AxisVec = retained_axes.iter().map(|&d| source_shape[d]).collect();
        let reduction_shape: AxisVec = reduction_axes.iter().map(|&d| source_shape[d]).collect();
        let reduction_strides = row_major_strides(&reduction_shape);
        let source_strides = row_major_strides(source_shape);

        Ok(AxisPlan {
            retained_axes,
            reduction_axes,
            output_shape,
            reduction_shape,
            reduction_strides,
            source_strides,
        })
    }

    /// Number of output cells (`k = n`, i.e. all axes reduced, yields `1`:
    /// the empty product, matching a rank-0 output).
    pub fn output_len(&self) -> usize {
        self.output_shape.iter().product()
    }

    /// Number of source elements folded into each output cell.
    pub fn reduction_len(&self) -> usize {
        self.reduction_shape.iter().product()
    }

    /// Flatten a reduction coordinate, given in `R`'s order, into a single
    /// linear arg-index: lexicographic in `R`'s order with `r_0`
    /// slowest-varying.
    pub fn flatten_reduction_coord(&self, coord_in_r_order: &[usize]) -> usize {
        debug_assert_eq!(coord_in_r_order.len(), self.reduction_axes.len());
        coord_in_r_order
            .iter()
            .zip(self.reduction_strides.iter())
            .map(|(&c, &s)| c * s)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_axis_list() {
        let err = AxisPlan::new(&[3, 4], &[]).unwrap_err();
        assert_eq!(err, ReduceError::InvalidAxis("reduction axis list must not be empty"));
    }

    #[test]
    fn rejects_out_of_range_axis() {
        let err = AxisPlan::new(&[3, 4], &[2]).unwrap_err();
        assert!(matches!(err, ReduceError::InvalidAxis(_)));
    }

    #[test]
    fn rejects_duplicate_axis() {
        let err = AxisPlan::new(&[3, 4, 5], &[1, 1]).unwrap_err();
        assert!(matches!(err, ReduceError::InvalidAxis(_)));
    }

    #[test]
    fn retained_axes_are_ascending_regardless_of_r_order() {
        let plan = AxisPlan::new(&[32, 50, 79], &[2, 0]).unwrap();
        assert_eq!(plan.retained_axes.as_slice(), &[1]);
        assert_eq!(plan.output_shape.as_slice(), &[50]);
        // Reduction shape follows R's order: axis 2 (size 79) then axis 0 (size 32).
        assert_eq!(plan.reduction_shape.as_slice(), &[79, 32]);
    }

    #[test]
    fn all_dims_reduced_yields_rank_0_output() {
        let plan = AxisPlan::new(&[32, 50, 79], &[0, 1, 2]).unwrap();
        assert!(plan.output_shape.is_empty());
        assert_eq!(plan.output_len(), 1);
    }

    #[test]
    fn flattening_depends_on_r_order() {
        // Scenario 1: R = [0, 2] -> flat = i*79 + k.
        let plan = AxisPlan::new(&[32, 50, 79], &[0, 2]).unwrap();
        assert_eq!(plan.flatten_reduction_coord(&[5, 7]), 5 * 79 + 7);

        // Scenario 2: R = [2, 0] -> flat = k*32 + i (transposed flattening).
        let plan = AxisPlan::new(&[32, 50, 79], &[2, 0]).unwrap();
        assert_eq!(plan.flatten_reduction_coord(&[7, 5]), 7 * 32 + 5);
    }

    #[test]
    fn veryhighrank_flattening_matches_reference() {
        // A very high rank case: dims = [1171,373,2,1,2,1,2,1], R = [2,4,7,5].
        let dims = [1171, 373, 2, 1, 2, 1, 2, 1];
        let plan = AxisPlan::new(&dims, &[2, 4, 7, 5]).unwrap();
        assert_eq!(plan.output_shape.as_slice(), &[1171, 373, 1, 2]);
        // flat = ((k*dims[4] + m)*dims[7] + p)*dims[5] + n
        let (k, m, p, n) = (1, 1, 0, 1);
        let expected = ((k * dims[4] + m) * dims[7] + p) * dims[5] + n;
        assert_eq!(plan.flatten_reduction_coord(&[k, m, p, n]), expected);
    }
}
