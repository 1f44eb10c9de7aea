use thiserror::Error;

/// The error taxonomy of a reduction call.
///
/// There is no `Ok` variant — success is `Result::Ok(())`.
///
/// Validation errors are always returned before any destination write; on
/// any `Err`, destination contents are undefined.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ReduceError {
    /// A reduction axis was out of range, repeated, or the axis list was empty.
    #[error("invalid reduction axis list: {0}")]
    InvalidAxis(&'static str),

    /// A destination tensor's shape does not match the derived output shape.
    #[error("destination shape mismatch: {0}")]
    ShapeMismatch(&'static str),

    /// A destination tensor's element type does not match the operator's
    /// dtype rule.
    #[error("destination dtype mismatch: {0}")]
    DtypeMismatch(&'static str),

    /// The requested operator/dtype combination is not implemented.
    #[error("unsupported operator/dtype combination: {0}")]
    Unsupported(&'static str),

    /// Allocation of scratch memory failed during execution.
    #[error("resource error: {0}")]
    Resource(&'static str),
}

pub type Result<T> = std::result::Result<T, ReduceError>;
