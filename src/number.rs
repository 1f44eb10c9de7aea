/// Generic access to the per-kind identity elements of the operator table:
/// `0` for `sum`/`or`/`xor`, `1` for `prod`/`all`, all-ones for `and`.
pub trait Identities: Copy {
    fn zero() -> Self;
    fn one() -> Self;
    /// All bits set — the identity for bitwise AND.
    fn all_ones() -> Self;
}

impl Identities for f32 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn all_ones() -> Self {
        // Never invoked: `and`/`or`/`xor`/`any`/`all` are only exposed for
        // the integer (`u32`) element type, matching the operator table's
        // dtype rule ("same as input (integer)").
        unreachable!("all_ones() has no meaningful value for f32")
    }
}

impl Identities for u32 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn all_ones() -> Self {
        u32::MAX
    }
}

impl Identities for usize {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn all_ones() -> Self {
        usize::MAX
    }
}
