//! Multi-dimensional tensor reduction engine.
//!
//! Collapses a caller-chosen, ordered subset of axes of a source tensor
//! under one of a closed family of associative-commutative operators,
//! writing the result (and, for the `arg*` family, a flattened reduction
//! index) into caller-owned destination tensor(s).
//!
//! The reduction axis list is both a *set* (which axes disappear) and a
//! *sequence* (the order arg-indices are flattened in) — callers that care
//! about `argmax`/`argmin`/`maxandargmax`/`minandargmin` output must treat
//! axis order as significant. See [`plan`] for the exact flattening rule.
//!
//! ```
//! use ndreduce::ops::sum;
//! use ndreduce::reduce::ReduceOptions;
//! use ndreduce_tensor::Tensor;
//!
//! let source = Tensor::<f32>::from_data(&[2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! let mut dst = Tensor::<f32>::empty(&[2]).unwrap();
//! let src_view = source.view();
//! let mut dst_view = dst.view_mut();
//! sum(&src_view, &[1], &mut dst_view, &ReduceOptions::default()).unwrap();
//! assert_eq!(dst.data(), &[6.0, 15.0]);
//! ```

pub mod error;
pub mod iter;
pub mod number;
pub mod op_table;
pub mod ops;
pub mod plan;
pub mod reduce;
pub mod validate;

pub use error::{ReduceError, Result};
pub use ndreduce_tensor::DType;
pub use op_table::ReduceKind;
pub use plan::AxisPlan;
pub use reduce::ReduceOptions;
