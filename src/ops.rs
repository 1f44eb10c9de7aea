//! Public entry points.
//!
//! Fourteen thin façades over [`crate::reduce`], one per operator name.
//! Each fixes a `ReduceKind` and destination arity; none carries logic of
//! its own beyond picking the right marker op and reducer function.

use ndreduce_tensor::{TensorView, TensorViewMut};

use crate::error::Result;
use crate::number::Identities;
use crate::op_table::{AllOp, AndOp, AnyOp, MaxOp, MinOp, OrOp, ProdNzOp, ProdOp, SumOp, XorOp};
use crate::reduce::{reduce, reduce_arg, reduce_value_and_arg, ReduceOptions};

/// `v = max(v, x)`, seeded from the first element visited.
pub fn max<T: Copy + Send + Sync + PartialOrd>(
    source: &TensorView<T>,
    axes: &[usize],
    dst: &mut TensorViewMut<T>,
    options: &ReduceOptions,
) -> Result<()> {
    reduce(&MaxOp, source, axes, dst, options)
}

/// `v = min(v, x)`, seeded from the first element visited.
pub fn min<T: Copy + Send + Sync + PartialOrd>(
    source: &TensorView<T>,
    axes: &[usize],
    dst: &mut TensorViewMut<T>,
    options: &ReduceOptions,
) -> Result<()> {
    reduce(&MinOp, source, axes, dst, options)
}

/// `v += x`, seeded from the additive identity.
pub fn sum<T>(
    source: &TensorView<T>,
    axes: &[usize],
    dst: &mut TensorViewMut<T>,
    options: &ReduceOptions,
) -> Result<()>
where
    T: Copy + Send + Sync + Identities + std::ops::Add<Output = T>,
{
    reduce(&SumOp, source, axes, dst, options)
}

/// `v *= x`, seeded from the multiplicative identity.
pub fn prod<T>(
    source: &TensorView<T>,
    axes: &[usize],
    dst: &mut TensorViewMut<T>,
    options: &ReduceOptions,
) -> Result<()>
where
    T: Copy + Send + Sync + Identities + std::ops::Mul<Output = T>,
{
    reduce(&ProdOp, source, axes, dst, options)
}

/// `v *= (x == 0 ? 1 : x)`, seeded from the multiplicative identity.
pub fn prodnz<T>(
    source: &TensorView<T>,
    axes: &[usize],
    dst: &mut TensorViewMut<T>,
    options: &ReduceOptions,
) -> Result<()>
where
    T: Copy + Send + Sync + Identities + std::ops::Mul<Output = T> + PartialEq,
{
    reduce(&ProdNzOp, source, axes, dst, options)
}

/// `v &= x`, seeded from the all-ones identity.
pub fn and<T>(
    source: &TensorView<T>,
    axes: &[usize],
    dst: &mut TensorViewMut<T>,
    options: &ReduceOptions,
) -> Result<()>
where
    T: Copy + Send + Sync + Identities + std::ops::BitAnd<Output = T>,
{
    reduce(&AndOp, source, axes, dst, options)
}

/// `v |= x`, seeded from `0`.
pub fn or<T>(
    source: &TensorView<T>,
    axes: &[usize],
    dst: &mut TensorViewMut<T>,
    options: &ReduceOptions,
) -> Result<()>
where
    T: Copy + Send + Sync + Identities + std::ops::BitOr<Output = T>,
{
    reduce(&OrOp, source, axes, dst, options)
}

/// `v ^= x`, seeded from `0`.
pub fn xor<T>(
    source: &TensorView<T>,
    axes: &[usize],
    dst: &mut TensorViewMut<T>,
    options: &ReduceOptions,
) -> Result<()>
where
    T: Copy + Send + Sync + Identities + std::ops::BitXor<Output = T>,
{
    reduce(&XorOp, source, axes, dst, options)
}

/// Logical OR over non-zeroness: `1` iff any element of the reduction
/// volume is non-zero.
pub fn any<T>(
    source: &TensorView<T>,
    axes: &[usize],
    dst: &mut TensorViewMut<T>,
    options: &ReduceOptions,
) -> Result<()>
where
    T: Copy + Send + Sync + Identities + PartialEq,
{
    reduce(&AnyOp, source, axes, dst, options)
}

/// Logical AND over non-zeroness: `1` iff every element of the reduction
/// volume is non-zero.
pub fn all<T>(
    source: &TensorView<T>,
    axes: &[usize],
    dst: &mut TensorViewMut<T>,
    options: &ReduceOptions,
) -> Result<()>
where
    T: Copy + Send + Sync + Identities + PartialEq,
{
    reduce(&AllOp, source, axes, dst, options)
}

/// Flat arg-index of the maximum; writes only `dst_index`.
pub fn argmax<T: Copy + Send + Sync + PartialOrd>(
    source: &TensorView<T>,
    axes: &[usize],
    dst_index: &mut TensorViewMut<usize>,
    options: &ReduceOptions,
) -> Result<()> {
    reduce_arg(&MaxOp, source, axes, dst_index, options)
}

/// Flat arg-index of the minimum; writes only `dst_index`.
pub fn argmin<T: Copy + Send + Sync + PartialOrd>(
    source: &TensorView<T>,
    axes: &[usize],
    dst_index: &mut TensorViewMut<usize>,
    options: &ReduceOptions,
) -> Result<()> {
    reduce_arg(&MinOp, source, axes, dst_index, options)
}

/// Maximum value and its flat arg-index.
pub fn maxandargmax<T: Copy + Send + Sync + PartialOrd>(
    source: &TensorView<T>,
    axes: &[usize],
    dst_value: &mut TensorViewMut<T>,
    dst_index: &mut TensorViewMut<usize>,
    options: &ReduceOptions,
) -> Result<()> {
    reduce_value_and_arg(&MaxOp, source, axes, dst_value, dst_index, options)
}

/// Minimum value and its flat arg-index.
pub fn minandargmin<T: Copy + Send + Sync + PartialOrd>(
    source: &TensorView<T>,
    axes: &[usize],
    dst_value: &mut TensorViewMut<T>,
    dst_index: &mut TensorViewMut<usize>,
    options: &ReduceOptions,
) -> Result<()> {
    reduce_value_and_arg(&MinOp, source, axes, dst_value, dst_index, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndreduce_tensor::Tensor;

    #[test]
    fn argmax_over_all_axes_finds_flat_index() {
        let data = vec![0.1f32, 0.9, 0.4, 0.2, 0.95, 0.3];
        let source = Tensor::from_data(&[2, 3], data);
        let mut dst_index = Tensor::<usize>::empty(&[]).unwrap();
        {
            let src_view = source.view();
            let mut iv = dst_index.view_mut();
            argmax(&src_view, &[0, 1], &mut iv, &ReduceOptions::default()).unwrap();
        }
        assert_eq!(*dst_index.item().unwrap(), 4);
    }

    #[test]
    fn any_all_over_bernoulli_like_input() {
        let source = Tensor::<u32>::from_data(&[2, 2], vec![0, 0, 1, 0]);
        let mut any_dst = Tensor::<u32>::empty(&[2]).unwrap();
        let mut all_dst = Tensor::<u32>::empty(&[2]).unwrap();
        {
            let src_view = source.view();
            let mut av = any_dst.view_mut();
            any(&src_view, &[1], &mut av, &ReduceOptions::default()).unwrap();
        }
        {
            let src_view = source.view();
            let mut av = all_dst.view_mut();
            all(&src_view, &[1], &mut av, &ReduceOptions::default()).unwrap();
        }
        assert_eq!(any_dst.data(), &[0, 1]);
        assert_eq!(all_dst.data(), &[0, 0]);
    }
}
