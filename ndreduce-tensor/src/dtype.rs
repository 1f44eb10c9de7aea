/// Element-type tag, mirroring the abstract `FLOAT` / `UINT` / `SIZE` tags
/// of the container interface this crate implements.
///
/// These tags only matter at the type-erased boundary (validating that a
/// destination tensor was allocated with the dtype an operator requires);
/// the tensor container itself is generic over the Rust type `T` and never
/// inspects this enum internally.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum DType {
    /// 32-bit IEEE float (`f32`).
    Float,
    /// 32-bit unsigned integer (`u32`).
    Uint,
    /// Platform-width unsigned index (`usize`), used for flattened arg-indices.
    Size,
}

impl DType {
    /// Number of bytes occupied by one element of this type.
    pub fn byte_width(self) -> usize {
        match self {
            DType::Float => std::mem::size_of::<f32>(),
            DType::Uint => std::mem::size_of::<u32>(),
            DType::Size => std::mem::size_of::<usize>(),
        }
    }
}

/// Implemented by the concrete Rust types that back each [`DType`].
///
/// Lets tensor-producing code assert at compile time that `Tensor<T>::DTYPE`
/// matches what a caller expects, rather than threading the tag through
/// every generic function by hand.
pub trait HasDType {
    const DTYPE: DType;
}

impl HasDType for f32 {
    const DTYPE: DType = DType::Float;
}

impl HasDType for u32 {
    const DTYPE: DType = DType::Uint;
}

impl HasDType for usize {
    const DTYPE: DType = DType::Size;
}
