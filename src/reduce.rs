//! The reducer.
//!
//! Implements a four-step contract: validate, plan, iterate, reduce-and-write.
//! The outer loop over output cells is the only place concurrency enters:
//! behind the `rayon` feature, and only once the output volume clears
//! [`PARALLEL_CELL_THRESHOLD`], cells are computed by a `rayon`
//! work-stealing pool into a plain `Vec` first, then copied into the
//! destination buffer from a single thread — sidestepping any need for
//! `unsafe` aliased-write tricks, since each cell's `T`/`usize` pair is
//! `Send` and the merge step is just a sequential copy.

use std::time::Instant;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use ndreduce_tensor::{Layout, TensorView, TensorViewMut};

use crate::error::Result;
use crate::iter::{OutputCells, ReductionVolume};
use crate::op_table::{ArgOp, ValueOp};
use crate::plan::AxisPlan;
use crate::validate::{validate_dest_shape, validate_source_rank};

/// Per-call options with no effect on results. There is no concurrency or
/// cancellation surface here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReduceOptions {
    /// When set, print wall-clock timing for the call to stderr.
    pub timing: bool,
}

/// Output volumes at or above this size are split across the `rayon` pool
/// when the `rayon` feature is enabled. Below it, fork/join overhead is not
/// worth paying. Not user-configurable.
const PARALLEL_CELL_THRESHOLD: usize = 4096;

fn fold_cell<T: Copy, Op: ValueOp<T>>(op: &Op, src_data: &[T], plan: &AxisPlan, base_offset: usize) -> T {
    let mut vol = ReductionVolume::new(plan, base_offset);
    let (first_offset, _) = vol
        .next()
        .expect("reduction volume is non-empty: axis validation rejects zero-length R");
    let first = src_data[first_offset];
    // `combine(seed, first)` folds the first element a second time for
    // identity-seeded kinds; for max/min it is a no-op (combine(x, x) = x).
    let mut acc = op.combine(op.seed(first), first);
    for (offset, _) in vol {
        acc = op.combine(acc, src_data[offset]);
    }
    acc
}

fn fold_cell_arg<T: Copy, Op: ArgOp<T>>(
    op: &Op,
    src_data: &[T],
    plan: &AxisPlan,
    base_offset: usize,
) -> (T, usize) {
    let mut vol = ReductionVolume::new(plan, base_offset);
    let (first_offset, first_flat) = vol
        .next()
        .expect("reduction volume is non-empty: axis validation rejects zero-length R");
    let mut best_val = src_data[first_offset];
    let mut best_flat = first_flat;
    for (offset, flat) in vol {
        let candidate = src_data[offset];
        if op.better(candidate, best_val) {
            best_val = candidate;
            best_flat = flat;
        }
    }
    (best_val, best_flat)
}

fn log_timing(options: &ReduceOptions, label: &str, cells: usize, start: Instant) {
    if options.timing {
        eprintln!("ndreduce: {label} over {cells} cell(s) took {:?}", start.elapsed());
    }
}

/// Value-only reduction: `max`, `min`, `sum`, `prod`, `prodnz`, `and`, `or`,
/// `xor`, `any`, `all`.
pub fn reduce<T, Op>(
    op: &Op,
    source: &TensorView<T>,
    axes: &[usize],
    dst_value: &mut TensorViewMut<T>,
    options: &ReduceOptions,
) -> Result<()>
where
    T: Copy + Send + Sync,
    Op: ValueOp<T> + Sync,
{
    validate_source_rank(source.shape())?;
    let plan = AxisPlan::new(source.shape(), axes)?;
    validate_dest_shape(&plan, dst_value.shape())?;

    let start = Instant::now();
    let src_data = source.data();

    let cells: Vec<(usize, usize)> = OutputCells::new(&plan).collect();
    let results: Vec<(usize, T)> = run_cells(&cells, |&(base_offset, out_index)| {
        (out_index, fold_cell(op, src_data, &plan, base_offset))
    });

    let dst_data = dst_value.data_mut();
    for (out_index, value) in results {
        dst_data[out_index] = value;
    }

    log_timing(options, "value reduction", plan.output_len(), start);
    Ok(())
}

/// Index-only reduction: `argmax`, `argmin`.
pub fn reduce_arg<T, Op>(
    op: &Op,
    source: &TensorView<T>,
    axes: &[usize],
    dst_index: &mut TensorViewMut<usize>,
    options: &ReduceOptions,
) -> Result<()>
where
    T: Copy + Send + Sync,
    Op: ArgOp<T> + Sync,
{
    validate_source_rank(source.shape())?;
    let plan = AxisPlan::new(source.shape(), axes)?;
    validate_dest_shape(&plan, dst_index.shape())?;

    let start = Instant::now();
    let src_data = source.data();

    let cells: Vec<(usize, usize)> = OutputCells::new(&plan).collect();
    let results: Vec<(usize, usize)> = run_cells(&cells, |&(base_offset, out_index)| {
        let (_, flat) = fold_cell_arg(op, src_data, &plan, base_offset);
        (out_index, flat)
    });

    let dst_data = dst_index.data_mut();
    for (out_index, flat) in results {
        dst_data[out_index] = flat;
    }

    log_timing(options, "arg reduction", plan.output_len(), start);
    Ok(())
}

/// Value-and-index reduction: `maxandargmax`, `minandargmin`.
pub fn reduce_value_and_arg<T, Op>(
    op: &Op,
    source: &TensorView<T>,
    axes: &[usize],
    dst_value: &mut TensorViewMut<T>,
    dst_index: &mut TensorViewMut<usize>,
    options: &ReduceOptions,
) -> Result<()>
where
    T: Copy + Send + Sync,
    Op: ArgOp<T> + Sync,
{
    validate_source_rank(source.shape())?;
    let plan = AxisPlan::new(source.shape(), axes)?;
    validate_dest_shape(&plan, dst_value.shape())?;
    validate_dest_shape(&plan, dst_index.shape())?;

    let start = Instant::now();
    let src_data = source.data();

    let cells: Vec<(usize, usize)> = OutputCells::new(&plan).collect();
    let results: Vec<(usize, T, usize)> = run_cells(&cells, |&(base_offset, out_index)| {
        let (value, flat) = fold_cell_arg(op, src_data, &plan, base_offset);
        (out_index, value, flat)
    });

    let value_data = dst_value.data_mut();
    let index_data = dst_index.data_mut();
    for (out_index, value, flat) in results {
        value_data[out_index] = value;
        index_data[out_index] = flat;
    }

    log_timing(options, "value+arg reduction", plan.output_len(), start);
    Ok(())
}

#[cfg(feature = "rayon")]
fn run_cells<I, F, R>(cells: &[I], f: F) -> Vec<R>
where
    I: Sync,
    F: Fn(&I) -> R + Sync + Send,
    R: Send,
{
    if cells.len() >= PARALLEL_CELL_THRESHOLD {
        cells.par_iter().map(f).collect()
    } else {
        cells.iter().map(f).collect()
    }
}

#[cfg(not(feature = "rayon"))]
fn run_cells<I, F, R>(cells: &[I], f: F) -> Vec<R>
where
    F: Fn(&I) -> R,
{
    cells.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op_table::{MaxOp, SumOp};
    use ndreduce_tensor::Tensor;

    #[test]
    fn sum_over_trailing_axis() {
        let source = Tensor::<f32>::from_data(&[2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let mut dst = Tensor::<f32>::empty(&[2]).unwrap();
        {
            let src_view = source.view();
            let mut dst_view = dst.view_mut();
            reduce(&SumOp, &src_view, &[1], &mut dst_view, &ReduceOptions::default()).unwrap();
        }
        assert_eq!(dst.data(), &[6.0, 15.0]);
    }

    #[test]
    fn reduce_rejects_dest_shape_mismatch() {
        let source = Tensor::<f32>::from_data(&[2, 3], vec![0.0; 6]);
        let mut dst = Tensor::<f32>::empty(&[3]).unwrap();
        let src_view = source.view();
        let mut dst_view = dst.view_mut();
        let err = reduce(&SumOp, &src_view, &[1], &mut dst_view, &ReduceOptions::default()).unwrap_err();
        assert!(matches!(err, crate::error::ReduceError::ShapeMismatch(_)));
    }

    #[test]
    fn maxandargmax_reverses_flattening_when_r_is_reversed() {
        let data: Vec<f32> = (0..6).map(|i| i as f32).collect();
        let source = Tensor::<f32>::from_data(&[2, 3], data);

        let mut value_fwd = Tensor::<f32>::empty(&[]).unwrap();
        let mut index_fwd = Tensor::<usize>::empty(&[]).unwrap();
        {
            let src_view = source.view();
            let mut vv = value_fwd.view_mut();
            let mut iv = index_fwd.view_mut();
            reduce_value_and_arg(&MaxOp, &src_view, &[0, 1], &mut vv, &mut iv, &ReduceOptions::default())
                .unwrap();
        }
        assert_eq!(*value_fwd.item().unwrap(), 5.0);
        assert_eq!(*index_fwd.item().unwrap(), 5);

        let mut value_rev = Tensor::<f32>::empty(&[]).unwrap();
        let mut index_rev = Tensor::<usize>::empty(&[]).unwrap();
        {
            let src_view = source.view();
            let mut vv = value_rev.view_mut();
            let mut iv = index_rev.view_mut();
            reduce_value_and_arg(&MaxOp, &src_view, &[1, 0], &mut vv, &mut iv, &ReduceOptions::default())
                .unwrap();
        }
        assert_eq!(*value_rev.item().unwrap(), 5.0);
        // Same element, but R=[1,0] flattens as row*2 + col-in-row1... for
        // this source the max sits at source coord (1,2): flat over R=[1,0]
        // is c_1 * dim(0) + c_0 = 2*2 + 1 = 5.
        assert_eq!(*index_rev.item().unwrap(), 5);
    }
}
