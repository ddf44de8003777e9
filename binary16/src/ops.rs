//! Operator overloads, standard conversions and `num_traits` support.
//!
//! Operators use IEEE arithmetic rounded to nearest even; use
//! [`FloatContext`](crate::FloatContext) for other modes.

use crate::arith::{add_with_flags, div_with_flags, mul_with_flags, sub_with_flags};
use crate::half::Half;
use crate::rounding::RoundingMode;
use num_traits::{Bounded, FromPrimitive, One, ToPrimitive, Zero};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

const RNE: RoundingMode = RoundingMode::NearestEven;

impl Add for Half {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        add_with_flags(self, rhs, RNE).0
    }
}

impl Sub for Half {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        sub_with_flags(self, rhs, RNE).0
    }
}

impl Mul for Half {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        mul_with_flags(self, rhs, RNE).0
    }
}

impl Div for Half {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        div_with_flags(self, rhs, RNE).0
    }
}

impl Neg for Half {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl AddAssign for Half {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Half {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Half {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Half {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Sum for Half {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Half {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Half {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

impl<'a> Product<&'a Self> for Half {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

impl From<Half> for f32 {
    fn from(h: Half) -> Self {
        h.to_f32()
    }
}

impl From<Half> for f64 {
    fn from(h: Half) -> Self {
        h.to_f64()
    }
}

impl From<u8> for Half {
    fn from(value: u8) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<i8> for Half {
    fn from(value: i8) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl Zero for Half {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(*self)
    }
}

impl One for Half {
    fn one() -> Self {
        Self::ONE
    }
}

impl Bounded for Half {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl ToPrimitive for Half {
    fn to_i64(&self) -> Option<i64> {
        self.to_i64_checked()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64_checked().and_then(|v| u64::try_from(v).ok())
    }

    fn to_f32(&self) -> Option<f32> {
        Some(Self::to_f32(*self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Self::to_f64(*self))
    }
}

impl FromPrimitive for Half {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from_i64_with(n, RNE))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from_u64_with(n, RNE))
    }

    fn from_f32(n: f32) -> Option<Self> {
        Some(Self::from_f32_with(n, RNE))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Some(Self::from_f64_with(n, RNE))
    }
}
