//! Validation.
//!
//! Every check here runs before [`crate::plan::AxisPlan`] is built or any
//! destination is touched: validation errors are always returned before any
//! write. Axis-list well-formedness is checked inside
//! [`crate::plan::AxisPlan::new`] itself, since building the plan *is* that
//! check; this module covers what's left: rank bounds and destination shape.
//!
//! Destination element type mismatch is enforced by the Rust type system
//! rather than at runtime: [`crate::reduce::reduce`] is generic over one
//! element type `T` shared by the source and value destination, and the
//! four arg-tracking entry points in `src/ops.rs` fix the index
//! destination's element type to `usize` at the signature level. A caller
//! cannot construct a dtype mismatch that type-checks, so there is no
//! corresponding runtime branch here — see DESIGN.md for the rationale.

use ndreduce_tensor::MAX_RANK;

use crate::error::{ReduceError, Result};
use crate::plan::AxisPlan;

/// Reject a source rank above [`MAX_RANK`] before any plan is built.
pub fn validate_source_rank(source_shape: &[usize]) -> Result<()> {
    if source_shape.len() > MAX_RANK {
        return Err(ReduceError::Unsupported("source rank exceeds MAX_RANK"));
    }
    Ok(())
}

/// Check that a destination's shape matches the plan's derived output
/// shape exactly, element-wise.
pub fn validate_dest_shape(plan: &AxisPlan, dest_shape: &[usize]) -> Result<()> {
    if dest_shape != plan.output_shape.as_slice() {
        return Err(ReduceError::ShapeMismatch(
            "destination shape does not match output shape",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_rank_above_max() {
        let shape = vec![1usize; MAX_RANK + 1];
        assert!(validate_source_rank(&shape).is_err());
    }

    #[test]
    fn accepts_rank_at_max() {
        let shape = vec![1usize; MAX_RANK];
        assert!(validate_source_rank(&shape).is_ok());
    }

    #[test]
    fn dest_shape_must_match_plan_output() {
        let plan = AxisPlan::new(&[2, 3, 4], &[1]).unwrap();
        assert!(validate_dest_shape(&plan, &[2, 4]).is_ok());
        assert!(validate_dest_shape(&plan, &[2, 5]).is_err());
        assert!(validate_dest_shape(&plan, &[2, 4, 1]).is_err());
    }
}
