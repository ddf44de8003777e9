//! IEEE 754 comparison predicates, `min`/`max` and total ordering.

use crate::half::Half;
use std::cmp::Ordering;

/// `a == b`: false for any NaN, true for `+0 == -0`.
#[must_use]
pub const fn equal(a: Half, b: Half) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if a.is_zero() && b.is_zero() {
        return true;
    }
    a.to_bits() == b.to_bits()
}

/// `a < b`: false for any NaN and for two zeros of either sign.
#[must_use]
pub const fn less(a: Half, b: Half) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if a.is_zero() && b.is_zero() {
        return false;
    }
    match (a.signbit(), b.signbit()) {
        (true, false) => true,
        (false, true) => false,
        // larger magnitude pattern is the smaller negative value
        (true, true) => a.to_bits() > b.to_bits(),
        (false, false) => a.to_bits() < b.to_bits(),
    }
}

/// `a > b`.
#[must_use]
pub const fn greater(a: Half, b: Half) -> bool {
    less(b, a)
}

/// `a <= b`; false for any NaN.
#[must_use]
pub const fn less_equal(a: Half, b: Half) -> bool {
    less(a, b) || equal(a, b)
}

/// `a >= b`; false for any NaN.
#[must_use]
pub const fn greater_equal(a: Half, b: Half) -> bool {
    less(b, a) || equal(a, b)
}

/// Smaller operand. A NaN operand is ignored unless both are NaN.
/// `min(+0, -0)` is `-0`.
#[must_use]
pub const fn min(a: Half, b: Half) -> Half {
    if a.is_nan() {
        return b;
    }
    if b.is_nan() {
        return a;
    }
    if a.is_zero() && b.is_zero() {
        return if a.signbit() { a } else { b };
    }
    if less(b, a) { b } else { a }
}

/// Larger operand. A NaN operand is ignored unless both are NaN.
/// `max(+0, -0)` is `+0`.
#[must_use]
pub const fn max(a: Half, b: Half) -> Half {
    if a.is_nan() {
        return b;
    }
    if b.is_nan() {
        return a;
    }
    if a.is_zero() && b.is_zero() {
        return if a.signbit() { b } else { a };
    }
    if less(a, b) { b } else { a }
}

/// IEEE ordering; `None` when either operand is NaN.
#[must_use]
pub fn partial_cmp(a: Half, b: Half) -> Option<Ordering> {
    if a.is_nan() || b.is_nan() {
        None
    } else if less(a, b) {
        Some(Ordering::Less)
    } else if equal(a, b) {
        Some(Ordering::Equal)
    } else {
        Some(Ordering::Greater)
    }
}

/// IEEE 754 `totalOrder`: `-NaN < -inf < ... < -0 < +0 < ... < +inf < +NaN`.
#[must_use]
pub fn total_cmp(a: Half, b: Half) -> Ordering {
    total_key(a).cmp(&total_key(b))
}

const fn total_key(h: Half) -> u16 {
    let bits = h.to_bits();
    if bits & Half::SIGN_MASK != 0 {
        !bits
    } else {
        bits | Half::SIGN_MASK
    }
}

impl Half {
    /// Restrict `self` to `[lo, hi]`. NaN is returned unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or either bound is NaN.
    #[must_use]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        assert!(less_equal(lo, hi), "clamp bounds out of order: {lo} > {hi}");
        if self.is_nan() {
            self
        } else if less(self, lo) {
            lo
        } else if less(hi, self) {
            hi
        } else {
            self
        }
    }

    /// IEEE `totalOrder` comparison.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        total_cmp(*self, *other)
    }

    /// Smaller of two values, ignoring a single NaN.
    #[must_use]
    pub const fn min(self, other: Self) -> Self {
        min(self, other)
    }

    /// Larger of two values, ignoring a single NaN.
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        max(self, other)
    }
}

impl PartialEq for Half {
    fn eq(&self, other: &Self) -> bool {
        equal(*self, *other)
    }
}

impl PartialOrd for Half {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        partial_cmp(*self, *other)
    }

    fn lt(&self, other: &Self) -> bool {
        less(*self, *other)
    }

    fn le(&self, other: &Self) -> bool {
        less_equal(*self, *other)
    }

    fn gt(&self, other: &Self) -> bool {
        greater(*self, *other)
    }

    fn ge(&self, other: &Self) -> bool {
        greater_equal(*self, *other)
    }
}
