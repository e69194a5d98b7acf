use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

#[cfg(feature = "rand")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use super::{
    decimal::Buffer,
    macros::{binop_impl, from_impl, shift_impl, unop_impl},
    repr::Unsigned,
    signed::int128,
};

/// An unsigned 128-bit integer.
///
/// Arithmetic wraps modulo 2^128, exactly like the `wrapping_*`
/// methods on [`u128`]. Division by zero panics.
///
/// # Examples
///
/// ```rust
/// use wide128::uint128;
///
/// let x = uint128::from(u64::MAX) + uint128::ONE;
/// assert_eq!(x, uint128::from_parts(1, 0));
/// assert_eq!(x.to_string(), "18446744073709551616");
/// assert_eq!(uint128::ZERO - uint128::ONE, uint128::MAX);
/// ```
#[repr(transparent)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct uint128(Unsigned);

impl uint128 {
    /// The number of bits in the integer.
    pub const BITS: u32 = 128;

    /// The largest value that can be represented by this type.
    pub const MAX: Self = Self(Unsigned::MAX);
    /// The smallest value that can be represented by this type.
    pub const MIN: Self = Self(Unsigned::ZERO);

    /// Zero.
    pub const ZERO: Self = Self(Unsigned::ZERO);
    /// One.
    pub const ONE: Self = Self(Unsigned::ONE);

    pub(crate) const fn from_repr(v: Unsigned) -> Self {
        Self(v)
    }

    pub(crate) const fn to_repr(self) -> Unsigned {
        self.0
    }

    /// Creates `hi * 2^64 + lo`.
    ///
    /// This is the only way to write a value with more than 64
    /// significant bits without going through [`u128`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::uint128;
    ///
    /// assert_eq!(uint128::from_parts(u64::MAX, u64::MAX), uint128::MAX);
    /// ```
    pub const fn from_parts(hi: u64, lo: u64) -> Self {
        Self(Unsigned::from_parts(hi, lo))
    }

    /// Returns the upper 64 bits.
    pub const fn high64(self) -> u64 {
        self.0.hi()
    }

    /// Returns the lower 64 bits.
    pub const fn low64(self) -> u64 {
        self.0.lo()
    }

    /// Creates a `uint128` from a `u64`.
    pub const fn from_u64(v: u64) -> Self {
        Self::from_parts(0, v)
    }

    /// Creates a `uint128` from an `i64`, sign extending it.
    ///
    /// A negative `v` produces `2^128 + v`.
    pub const fn from_i64(v: i64) -> Self {
        Self::from_parts((v >> 63) as u64, v as u64)
    }

    /// Creates a `uint128` from a `u128`.
    pub const fn from_u128(v: u128) -> Self {
        Self::from_parts((v >> 64) as u64, v as u64)
    }

    /// Converts the `uint128` to a `u128`.
    pub const fn to_u128(self) -> u128 {
        ((self.high64() as u128) << 64) | (self.low64() as u128)
    }

    /// Reinterprets the bits of `v` as an unsigned integer.
    ///
    /// Negative values map to `2^128 + v`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::{int128, uint128};
    ///
    /// assert_eq!(uint128::from_signed(int128::from(-1)), uint128::MAX);
    /// ```
    pub const fn from_signed(v: int128) -> Self {
        Self(Unsigned::from_signed(v.to_repr()))
    }

    /// Reinterprets the bits of `self` as a signed integer.
    pub const fn to_signed(self) -> int128 {
        int128::from_unsigned(self)
    }

    /// Reports whether the integer is zero.
    pub const fn is_zero(self) -> bool {
        self.high64() == 0 && self.low64() == 0
    }

    const fn const_cmp(self, rhs: Self) -> Ordering {
        self.0.const_cmp(rhs.0)
    }

    const fn less(self, rhs: Self) -> bool {
        matches!(self.const_cmp(rhs), Ordering::Less)
    }

    /// Computes `self + rhs`, wrapping around at the boundary of
    /// the type.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    /// Computes `self - rhs`, wrapping around at the boundary of
    /// the type.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    /// Computes `self * rhs`, wrapping around at the boundary of
    /// the type.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    /// Computes `2^128 - self`, which is zero for zero.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    /// Computes `self / rhs`.
    ///
    /// Unsigned division never overflows, so this is the same as
    /// `/`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[track_caller]
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn wrapping_div(self, rhs: Self) -> Self {
        self.quorem(rhs).0
    }

    /// Computes `self % rhs`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[track_caller]
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn wrapping_rem(self, rhs: Self) -> Self {
        self.quorem(rhs).1
    }

    /// Returns `(self / rhs, self % rhs)`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[track_caller]
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn quorem(self, rhs: Self) -> (Self, Self) {
        let (q, r) = self.0.quorem(rhs.0);
        (Self(q), Self(r))
    }

    /// Computes `self + rhs`, returning `None` if the sum
    /// overflows.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        let sum = self.wrapping_add(rhs);
        if sum.less(self) {
            None
        } else {
            Some(sum)
        }
    }

    /// Computes `self - rhs`, returning `None` if the difference
    /// would be negative.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        if self.less(rhs) {
            None
        } else {
            Some(self.wrapping_sub(rhs))
        }
    }

    /// Computes `self * rhs`, returning `None` if the product
    /// overflows.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        if self.high64() != 0 && rhs.high64() != 0 {
            return None;
        }
        if rhs.is_zero() {
            return Some(Self::ZERO);
        }
        // A wrapped product is strictly smaller than the exact
        // one, so dividing it back cannot recover `self`.
        let z = self.wrapping_mul(rhs);
        if z.wrapping_div(rhs).0.const_eq(self.0) {
            Some(z)
        } else {
            None
        }
    }

    /// Computes `self / rhs`, returning `None` if `rhs == 0`.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self.wrapping_div(rhs))
        }
    }

    /// Computes `self % rhs`, returning `None` if `rhs == 0`.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn checked_rem(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self.wrapping_rem(rhs))
        }
    }

    /// Computes `self << amount`.
    ///
    /// `amount` must be less than 128. This is checked in debug
    /// builds. In release builds the amount is reduced modulo
    /// 128.
    #[track_caller]
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn shl(self, amount: u32) -> Self {
        Self(self.0.shl(amount))
    }

    /// Computes `self >> amount`, shifting in zeros.
    ///
    /// `amount` must be less than 128. This is checked in debug
    /// builds. In release builds the amount is reduced modulo
    /// 128.
    #[track_caller]
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn shr(self, amount: u32) -> Self {
        Self(self.0.shr(amount))
    }

    /// Computes `self << (amount % 128)`.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn wrapping_shl(self, amount: u32) -> Self {
        self.shl(amount & (Self::BITS - 1))
    }

    /// Computes `self >> (amount % 128)`.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn wrapping_shr(self, amount: u32) -> Self {
        self.shr(amount & (Self::BITS - 1))
    }

    /// Computes `self << amount`, returning zero if `amount` is
    /// at least 128.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::uint128;
    ///
    /// assert_eq!(uint128::MAX.truncating_shl(127), uint128::from_parts(1 << 63, 0));
    /// assert_eq!(uint128::MAX.truncating_shl(128), uint128::ZERO);
    /// ```
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn truncating_shl(self, amount: u32) -> Self {
        if amount < Self::BITS {
            self.shl(amount)
        } else {
            Self::ZERO
        }
    }

    /// Computes `self >> amount`, returning zero if `amount` is
    /// at least 128.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::uint128;
    ///
    /// assert_eq!(uint128::MAX.truncating_shr(127), uint128::ONE);
    /// assert_eq!(uint128::MAX.truncating_shr(128), uint128::ZERO);
    /// ```
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn truncating_shr(self, amount: u32) -> Self {
        if amount < Self::BITS {
            self.shr(amount)
        } else {
            Self::ZERO
        }
    }

    /// Computes `self & rhs`.
    pub const fn bitand(self, rhs: Self) -> Self {
        Self(self.0.bitand(rhs.0))
    }

    /// Computes `self | rhs`.
    pub const fn bitor(self, rhs: Self) -> Self {
        Self(self.0.bitor(rhs.0))
    }

    /// Computes `self ^ rhs`.
    pub const fn bitxor(self, rhs: Self) -> Self {
        Self(self.0.bitxor(rhs.0))
    }

    /// Computes `!self`.
    pub const fn not(self) -> Self {
        Self(self.0.not())
    }

    /// Adds one in place, wrapping at the boundary of the type,
    /// and returns the new value.
    pub fn increment(&mut self) -> Self {
        *self = self.wrapping_add(Self::ONE);
        *self
    }

    /// Subtracts one in place, wrapping at the boundary of the
    /// type, and returns the new value.
    pub fn decrement(&mut self) -> Self {
        *self = self.wrapping_sub(Self::ONE);
        *self
    }

    /// Adds one in place and returns the value from before the
    /// addition.
    pub fn post_increment(&mut self) -> Self {
        let old = *self;
        self.increment();
        old
    }

    /// Subtracts one in place and returns the value from before
    /// the subtraction.
    pub fn post_decrement(&mut self) -> Self {
        let old = *self;
        self.decrement();
        old
    }

    /// Returns the low 8 bits.
    pub const fn as_u8(self) -> u8 {
        self.low64() as u8
    }

    /// Returns the low 16 bits.
    pub const fn as_u16(self) -> u16 {
        self.low64() as u16
    }

    /// Returns the low 32 bits.
    pub const fn as_u32(self) -> u32 {
        self.low64() as u32
    }

    /// Returns the low 64 bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::uint128;
    ///
    /// assert_eq!(uint128::from_parts(u64::MAX, 1).as_u64(), 1);
    /// ```
    pub const fn as_u64(self) -> u64 {
        self.low64()
    }

    /// Returns the low 8 bits as a signed integer.
    pub const fn as_i8(self) -> i8 {
        self.low64() as i8
    }

    /// Returns the low 16 bits as a signed integer.
    pub const fn as_i16(self) -> i16 {
        self.low64() as i16
    }

    /// Returns the low 32 bits as a signed integer.
    pub const fn as_i32(self) -> i32 {
        self.low64() as i32
    }

    /// Returns the low 64 bits as a signed integer.
    pub const fn as_i64(self) -> i64 {
        self.low64() as i64
    }

    /// Converts the integer to an `f32`, computed as
    /// `low + high * 2^64`.
    ///
    /// Each limb is rounded on its own, so the result can be
    /// one step away from the nearest `f32`.
    pub fn to_f32(self) -> f32 {
        self.0.to_f32()
    }

    /// Converts the integer to an `f64`, computed as
    /// `low + high * 2^64`.
    pub fn to_f64(self) -> f64 {
        self.0.to_f64()
    }

    /// Converts `v` to an integer, truncating toward zero.
    ///
    /// Like an `as` cast, negative values and NaN produce zero
    /// and values of at least 2^128 produce [`uint128::MAX`].
    pub fn from_f32(v: f32) -> Self {
        Self(Unsigned::from_f32(v))
    }

    /// Converts `v` to an integer, truncating toward zero.
    ///
    /// Like an `as` cast, negative values and NaN produce zero
    /// and values of at least 2^128 produce [`uint128::MAX`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::uint128;
    ///
    /// assert_eq!(uint128::from_f64(18446744073709551616.0), uint128::from_parts(1, 0));
    /// assert_eq!(uint128::from_f64(-1.0), uint128::ZERO);
    /// ```
    pub fn from_f64(v: f64) -> Self {
        Self(Unsigned::from_f64(v))
    }
}

binop_impl!(uint128 {
    Add, add, AddAssign, add_assign => wrapping_add;
    Sub, sub, SubAssign, sub_assign => wrapping_sub;
    Mul, mul, MulAssign, mul_assign => wrapping_mul;
    Div, div, DivAssign, div_assign => wrapping_div;
    Rem, rem, RemAssign, rem_assign => wrapping_rem;
    BitAnd, bitand, BitAndAssign, bitand_assign => bitand;
    BitOr, bitor, BitOrAssign, bitor_assign => bitor;
    BitXor, bitxor, BitXorAssign, bitxor_assign => bitxor;
});

unop_impl!(uint128 {
    Neg, neg => wrapping_neg;
    Not, not => not;
});

shift_impl!(uint128 { u32, i32 });

from_impl!(uint128 { u8, u16, u32, u64 => from_u64(u64) });
from_impl!(uint128 { i8, i16, i32, i64 => from_i64(i64) });
from_impl!(uint128 { u128 => from_u128(u128) });

impl From<uint128> for u128 {
    fn from(v: uint128) -> Self {
        v.to_u128()
    }
}

impl PartialOrd for uint128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for uint128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.const_cmp(*other)
    }
}

impl PartialEq<u64> for uint128 {
    fn eq(&self, other: &u64) -> bool {
        self.high64() == 0 && self.low64() == *other
    }
}

impl PartialOrd<u64> for uint128 {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        if self.high64() != 0 {
            Some(Ordering::Greater)
        } else {
            PartialOrd::partial_cmp(&self.low64(), other)
        }
    }
}

impl Hash for uint128 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.high64());
        state.write_u64(self.low64());
    }
}

impl fmt::Display for uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Buffer::new();
        f.pad_integral(true, "", buf.format(*self))
    }
}

impl fmt::Debug for uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Binary for uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.to_u128(), f)
    }
}

impl fmt::Octal for uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.to_u128(), f)
    }
}

impl fmt::LowerHex for uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_u128(), f)
    }
}

impl fmt::UpperHex for uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.to_u128(), f)
    }
}

#[cfg(feature = "rand")]
impl Distribution<uint128> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> uint128 {
        uint128::from_parts(rng.gen(), rng.gen())
    }
}
