// src/numerics/types/traits.rs
// Scalar trait shared by every numerics type.

/// FloatingPoint is the scalar bound for [`Matrix`](super::matrix::Matrix).
///
/// Note: We require Copy, PartialOrd and the basic arithmetic ops on Self.
pub trait FloatingPoint:
Copy + PartialOrd
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;

    /// `(-1)^exponent`, the alternating sign of cofactor expansion.
    fn alternating(exponent: usize) -> Self {
        if exponent % 2 == 0 {
            Self::one()
        } else {
            Self::zero() - Self::one()
        }
    }

    /// Absolute value built from the ordering, so NaN maps to itself.
    fn magnitude(self) -> Self {
        if self < Self::zero() {
            Self::zero() - self
        } else {
            self
        }
    }
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
}
