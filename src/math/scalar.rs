use std::fmt::{Debug, Display};

use num_traits::{AsPrimitive, MulAdd, Num, Signed};

/// Element type accepted by [`Vector`](crate::math::Vector) and
/// [`Matrix`](crate::math::Matrix).
///
/// Covers the signed integer and floating-point primitives. Integer containers
/// stay integral through add/sub/scale/dot/determinant; anything that needs a
/// division or a square root is promoted to `f64` via [`to_f64`].
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialOrd
    + Num
    + Signed
    + MulAdd<Output = Self>
    + AsPrimitive<f64>
    + Send
    + Sync
    + 'static
{
}

impl<T> Scalar for T where
    T: Copy
        + Debug
        + Display
        + PartialOrd
        + Num
        + Signed
        + MulAdd<Output = T>
        + AsPrimitive<f64>
        + Send
        + Sync
        + 'static
{
}

/// `a * b + c` with a single rounding step.
///
/// Floats go through the hardware fused multiply-add. Integers have nothing to
/// round, so the two-step product and sum is already exact for them, as long
/// as it fits in `T`; integer overflow is not checked.
#[inline]
pub fn fma<T: Scalar>(a: T, b: T, c: T) -> T {
    MulAdd::mul_add(a, b, c)
}

/// Promote a scalar to `f64`.
#[inline]
pub fn to_f64<T: Scalar>(value: T) -> f64 {
    value.as_()
}
