//! Binary interchange format descriptors and the wide formats a half value
//! converts to and from.

/// Layout of a binary IEEE 754 interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFormat {
    /// Width of the exponent field.
    pub exponent_bits: u32,
    /// Significand precision, including the implicit leading bit.
    pub significand_bits: u32,
}

impl FloatFormat {
    /// IEEE 754 binary16.
    pub const BINARY16: Self = Self::new(5, 11);
    /// IEEE 754 binary32.
    pub const BINARY32: Self = Self::new(8, 24);
    /// IEEE 754 binary64.
    pub const BINARY64: Self = Self::new(11, 53);

    /// Describe a format by its field widths.
    #[must_use]
    pub const fn new(exponent_bits: u32, significand_bits: u32) -> Self {
        Self {
            exponent_bits,
            significand_bits,
        }
    }

    /// Stored (explicit) mantissa bits.
    #[must_use]
    pub const fn mantissa_bits(self) -> u32 {
        self.significand_bits - 1
    }

    /// Exponent bias.
    #[must_use]
    pub const fn bias(self) -> i32 {
        (1 << (self.exponent_bits - 1)) - 1
    }

    /// All-ones biased exponent (infinities and NaNs).
    #[must_use]
    pub const fn max_exponent(self) -> u64 {
        (1 << self.exponent_bits) - 1
    }

    /// Total encoding width in bits.
    #[must_use]
    pub const fn width(self) -> u32 {
        1 + self.exponent_bits + self.mantissa_bits()
    }

    /// Mask covering the stored mantissa.
    #[must_use]
    pub const fn mantissa_mask(self) -> u64 {
        (1 << self.mantissa_bits()) - 1
    }

    /// Sign bit mask.
    #[must_use]
    pub const fn sign_mask(self) -> u64 {
        1 << (self.width() - 1)
    }

    /// Split a raw encoding into `(sign, biased exponent, mantissa)`.
    #[must_use]
    pub const fn split(self, raw: u64) -> (bool, u64, u64) {
        let sign = raw & self.sign_mask() != 0;
        let exponent = (raw >> self.mantissa_bits()) & self.max_exponent();
        (sign, exponent, raw & self.mantissa_mask())
    }

    /// Assemble a raw encoding from its fields.
    #[must_use]
    pub const fn join(self, sign: bool, exponent: u64, mantissa: u64) -> u64 {
        let sign = if sign { self.sign_mask() } else { 0 };
        sign | ((exponent & self.max_exponent()) << self.mantissa_bits())
            | (mantissa & self.mantissa_mask())
    }
}

/// A binary floating-point type strictly wider than binary16.
///
/// Widening into a `WideFloat` is always exact; narrowing from one rounds.
pub trait WideFloat: Copy + Send + Sync + 'static {
    /// Layout of the format.
    const FORMAT: FloatFormat;

    /// Raw bit pattern, zero-extended to 64 bits.
    fn to_raw(self) -> u64;

    /// Rebuild from a raw bit pattern produced by [`WideFloat::to_raw`].
    fn from_raw(raw: u64) -> Self;

    /// Hardware demotion to binary32 (round to nearest even).
    fn to_single(self) -> f32;

    /// Native hardware value as binary64.
    fn to_double(self) -> f64;
}

impl WideFloat for f32 {
    const FORMAT: FloatFormat = FloatFormat::BINARY32;

    #[inline]
    fn to_raw(self) -> u64 {
        u64::from(self.to_bits())
    }

    #[inline]
    fn from_raw(raw: u64) -> Self {
        Self::from_bits(raw as u32)
    }

    #[inline]
    fn to_single(self) -> f32 {
        self
    }

    #[inline]
    fn to_double(self) -> f64 {
        f64::from(self)
    }
}

impl WideFloat for f64 {
    const FORMAT: FloatFormat = FloatFormat::BINARY64;

    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn from_raw(raw: u64) -> Self {
        Self::from_bits(raw)
    }

    #[inline]
    fn to_single(self) -> f32 {
        self as f32
    }

    #[inline]
    fn to_double(self) -> f64 {
        self
    }
}
