//! Element traits shared by all operations.
//!
//! Vector and matrix arithmetic only needs [`Number`], so it also works on integers. Operations
//! that take square roots or evaluate trigonometric functions need [`Sqrt`] or [`Float`].

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions used by the rotation conversions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Four-quadrant arctangent of `self` (y) and `other` (x), in radians.
    fn atan2(self, other: Self) -> Self;

    /// Computes sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Copy,
    {
        (self.sin(), self.cos())
    }
}

/// A trait for element types that support basic arithmetic.
///
/// This is implemented for all primitive integer and floating-point types. Note that integer
/// division by zero panics, while floating-point division by zero yields an infinity or `NaN`.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point element types, as required by the rotation conversions.
///
/// Implemented for [`f32`] and [`f64`].
pub trait Float: Number + Sqrt + Trig + ops::Neg<Output = Self> + PartialOrd {
    fn abs(self) -> Self;

    /// Converts an `f64` constant to this type, rounding if necessary.
    fn from_f64(value: f64) -> Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal => $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0 => f32, f64);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }
            }

            impl Float for $types {
                fn abs(self) -> Self {
                    self.abs()
                }

                fn from_f64(value: f64) -> Self {
                    value as $types
                }
            }
        )+
    };
}
float_impls!(f32, f64);
