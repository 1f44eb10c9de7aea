//! A minimal strided, row-major N-dimensional tensor container.
//!
//! This crate plays the same role for `ndreduce` that `rten-tensor` plays
//! for `rten`: it owns allocation, copy-in/copy-out and element-type
//! bookkeeping so the reduction engine can be written purely in terms of
//! shapes, strides and element iteration.
//!
//! Kept deliberately small: no broadcasting, no views with arbitrary
//! strides beyond what row-major slicing produces, no autograd. Just enough
//! to allocate, fill, read back and iterate a tensor of rank up to
//! [`MAX_RANK`].

mod dtype;
mod layout;
mod tensor;

pub use dtype::DType;
pub use layout::{row_major_strides, Layout};
pub use tensor::{Tensor, TensorError, TensorView, TensorViewMut};

/// Upper bound on tensor rank supported throughout this crate.
///
/// 8 comfortably covers the very-high-rank cases exercised by the test
/// suite (its `veryhighrank` scenarios use 8D tensors).
pub const MAX_RANK: usize = 8;

pub mod prelude {
    pub use crate::layout::Layout;
}
