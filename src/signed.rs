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
    repr::Signed,
    unsigned::uint128,
    util::sign_fill,
};

/// A signed two's complement 128-bit integer.
///
/// Arithmetic wraps modulo 2^128, exactly like the `wrapping_*`
/// methods on [`i128`], in debug and release builds alike.
/// Division by zero panics and `MIN / -1` wraps to `MIN`.
///
/// # Examples
///
/// ```rust
/// use wide128::int128;
///
/// let x = int128::from(1) + int128::from(i64::MAX);
/// assert_eq!(x.to_string(), "9223372036854775808");
/// assert_eq!(int128::MIN >> 127, int128::from(-1));
/// ```
#[repr(transparent)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct int128(Signed);

impl int128 {
    /// The number of bits in the integer.
    pub const BITS: u32 = 128;

    /// The largest value that can be represented by this type.
    pub const MAX: Self = Self(Signed::MAX);
    /// The smallest value that can be represented by this type.
    pub const MIN: Self = Self(Signed::MIN);

    /// Zero.
    pub const ZERO: Self = Self(Signed::ZERO);
    /// One.
    pub const ONE: Self = Self(Signed::ONE);
    /// Negative one.
    pub const NEG_ONE: Self = Self::from_parts(-1, u64::MAX);

    pub(crate) const fn to_repr(self) -> Signed {
        self.0
    }

    /// Creates `hi * 2^64 + lo`.
    ///
    /// `hi` carries the sign.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::int128;
    ///
    /// assert_eq!(int128::from_parts(i64::MIN, 0), int128::MIN);
    /// assert_eq!(int128::from_parts(-1, u64::MAX), int128::from(-1));
    /// ```
    pub const fn from_parts(hi: i64, lo: u64) -> Self {
        Self(Signed::from_parts(hi, lo))
    }

    /// Returns the upper 64 bits, which carry the sign.
    pub const fn high64(self) -> i64 {
        self.0.hi()
    }

    /// Returns the lower 64 bits.
    pub const fn low64(self) -> u64 {
        self.0.lo()
    }

    /// Creates an `int128` from an `i64`, sign extending it.
    pub const fn from_i64(v: i64) -> Self {
        Self::from_parts(v >> 63, v as u64)
    }

    /// Creates an `int128` from a `u64`.
    pub const fn from_u64(v: u64) -> Self {
        Self::from_parts(0, v)
    }

    /// Creates an `int128` from an `i128`.
    pub const fn from_i128(v: i128) -> Self {
        Self::from_parts((v >> 64) as i64, v as u64)
    }

    /// Converts the `int128` to an `i128`.
    pub const fn to_i128(self) -> i128 {
        ((self.high64() as i128) << 64) | (self.low64() as i128)
    }

    /// Reinterprets the bits of `v` as a signed integer.
    ///
    /// Values of at least 2^127 map to `v - 2^128`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::{int128, uint128};
    ///
    /// assert_eq!(int128::from_unsigned(uint128::MAX), int128::from(-1));
    /// assert_eq!(int128::from_unsigned(uint128::from_parts(1 << 63, 0)), int128::MIN);
    /// ```
    pub const fn from_unsigned(v: uint128) -> Self {
        Self(Signed::from_unsigned(v.to_repr()))
    }

    /// Reinterprets the bits of `self` as an unsigned integer.
    pub const fn to_unsigned(self) -> uint128 {
        uint128::from_repr(self.0.to_unsigned())
    }

    /// Reports whether the integer is zero.
    pub const fn is_zero(self) -> bool {
        self.high64() == 0 && self.low64() == 0
    }

    /// Reports whether the integer is less than zero.
    pub const fn is_negative(self) -> bool {
        self.high64() < 0
    }

    /// Reports whether the integer is greater than zero.
    pub const fn is_positive(self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Returns `|self|` as an unsigned integer.
    ///
    /// This never overflows, even for [`int128::MIN`].
    pub const fn unsigned_abs(self) -> uint128 {
        uint128::from_repr(self.0.unsigned_abs())
    }

    /// Returns `|self|`, wrapping [`int128::MIN`] to itself.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn wrapping_abs(self) -> Self {
        Self::from_unsigned(self.unsigned_abs())
    }

    const fn const_cmp(self, rhs: Self) -> Ordering {
        self.0.const_cmp(rhs.0)
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

    /// Computes `-self`, wrapping [`int128::MIN`] to itself.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    /// Computes `self / rhs`, truncating toward zero.
    ///
    /// `MIN / -1` wraps to `MIN`.
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
    /// The result has the sign of `self`. `MIN % -1` is zero.
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

    /// Computes `self + rhs`, returning `None` on overflow.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        let sum = self.wrapping_add(rhs);
        // Overflow iff both operands have the same sign and the
        // sum has the other one.
        if self.is_negative() == rhs.is_negative() && sum.is_negative() != self.is_negative() {
            None
        } else {
            Some(sum)
        }
    }

    /// Computes `self - rhs`, returning `None` on overflow.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        let diff = self.wrapping_sub(rhs);
        if self.is_negative() != rhs.is_negative() && diff.is_negative() != self.is_negative() {
            None
        } else {
            Some(diff)
        }
    }

    /// Computes `self * rhs`, returning `None` on overflow.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        let abs = match self.unsigned_abs().checked_mul(rhs.unsigned_abs()) {
            Some(abs) => abs,
            None => return None,
        };
        // The magnitude of MIN is one more than the magnitude of
        // MAX.
        let limit = uint128::from_parts(1 << 63, 0);
        if self.is_negative() != rhs.is_negative() {
            if abs.high64() > limit.high64() || (abs.high64() == limit.high64() && abs.low64() > 0)
            {
                None
            } else {
                Some(Self::from_unsigned(abs.wrapping_neg()))
            }
        } else if abs.high64() >= limit.high64() {
            None
        } else {
            Some(Self::from_unsigned(abs))
        }
    }

    const fn overflows_div(self, rhs: Self) -> bool {
        rhs.is_zero() || (self.0.const_eq(Signed::MIN) && rhs.0.const_eq(Self::NEG_ONE.0))
    }

    /// Computes `self / rhs`, returning `None` if `rhs == 0` or
    /// the quotient overflows.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        if self.overflows_div(rhs) {
            None
        } else {
            Some(self.wrapping_div(rhs))
        }
    }

    /// Computes `self % rhs`, returning `None` if `rhs == 0` or
    /// the matching quotient overflows.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn checked_rem(self, rhs: Self) -> Option<Self> {
        if self.overflows_div(rhs) {
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

    /// Computes `self >> amount`, shifting in copies of the sign
    /// bit.
    ///
    /// `amount` must be less than 128. This is checked in debug
    /// builds. In release builds the amount is reduced modulo
    /// 128.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::int128;
    ///
    /// assert_eq!(int128::MIN.shr(127), int128::from(-1));
    /// assert_eq!(int128::from(-8).shr(2), int128::from(-2));
    /// ```
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
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn truncating_shl(self, amount: u32) -> Self {
        if amount < Self::BITS {
            self.shl(amount)
        } else {
            Self::ZERO
        }
    }

    /// Computes `self >> amount`, returning the sign fill (`0`
    /// or `-1`) if `amount` is at least 128.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::int128;
    ///
    /// assert_eq!(int128::MIN.truncating_shr(200), int128::from(-1));
    /// assert_eq!(int128::MAX.truncating_shr(200), int128::ZERO);
    /// ```
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn truncating_shr(self, amount: u32) -> Self {
        if amount < Self::BITS {
            self.shr(amount)
        } else {
            let fill = sign_fill(self.high64());
            Self::from_parts(fill, fill as u64)
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

    /// Returns the low 8 bits as an unsigned integer.
    pub const fn as_u8(self) -> u8 {
        self.low64() as u8
    }

    /// Returns the low 16 bits as an unsigned integer.
    pub const fn as_u16(self) -> u16 {
        self.low64() as u16
    }

    /// Returns the low 32 bits as an unsigned integer.
    pub const fn as_u32(self) -> u32 {
        self.low64() as u32
    }

    /// Returns the low 64 bits as an unsigned integer.
    pub const fn as_u64(self) -> u64 {
        self.low64()
    }

    /// Returns the low 8 bits.
    pub const fn as_i8(self) -> i8 {
        self.low64() as i8
    }

    /// Returns the low 16 bits.
    pub const fn as_i16(self) -> i16 {
        self.low64() as i16
    }

    /// Returns the low 32 bits.
    pub const fn as_i32(self) -> i32 {
        self.low64() as i32
    }

    /// Returns the low 64 bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::int128;
    ///
    /// assert_eq!(int128::from_parts(-1, 5).as_i64(), 5);
    /// assert_eq!(int128::from(-5).as_i64(), -5);
    /// ```
    pub const fn as_i64(self) -> i64 {
        self.low64() as i64
    }

    /// Converts the integer to an `f32`.
    ///
    /// The magnitude is converted as `low + high * 2^64` and the
    /// sign applied afterward. Each limb is rounded on its own,
    /// so the result can be one step away from the nearest `f32`.
    pub fn to_f32(self) -> f32 {
        self.0.to_f32()
    }

    /// Converts the integer to an `f64`.
    ///
    /// The magnitude is converted as `low + high * 2^64` and the
    /// sign applied afterward.
    pub fn to_f64(self) -> f64 {
        self.0.to_f64()
    }

    /// Converts `v` to an integer, truncating toward zero.
    ///
    /// Like an `as` cast, NaN produces zero and out of range
    /// values saturate to [`int128::MIN`] or [`int128::MAX`].
    pub fn from_f32(v: f32) -> Self {
        Self(Signed::from_f32(v))
    }

    /// Converts `v` to an integer, truncating toward zero.
    ///
    /// Like an `as` cast, NaN produces zero and out of range
    /// values saturate to [`int128::MIN`] or [`int128::MAX`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::int128;
    ///
    /// assert_eq!(int128::from_f64(-9223372036854775808.0), int128::from(i64::MIN));
    /// assert_eq!(int128::from_f64(-170141183460469231731687303715884105728.0), int128::MIN);
    /// assert_eq!(int128::from_f64(f64::NAN), int128::ZERO);
    /// ```
    pub fn from_f64(v: f64) -> Self {
        Self(Signed::from_f64(v))
    }
}

binop_impl!(int128 {
    Add, add, AddAssign, add_assign => wrapping_add;
    Sub, sub, SubAssign, sub_assign => wrapping_sub;
    Mul, mul, MulAssign, mul_assign => wrapping_mul;
    Div, div, DivAssign, div_assign => wrapping_div;
    Rem, rem, RemAssign, rem_assign => wrapping_rem;
    BitAnd, bitand, BitAndAssign, bitand_assign => bitand;
    BitOr, bitor, BitOrAssign, bitor_assign => bitor;
    BitXor, bitxor, BitXorAssign, bitxor_assign => bitxor;
});

unop_impl!(int128 {
    Neg, neg => wrapping_neg;
    Not, not => not;
});

shift_impl!(int128 { u32, i32 });

from_impl!(int128 { i8, i16, i32, i64 => from_i64(i64) });
from_impl!(int128 { u8, u16, u32, u64 => from_u64(u64) });
from_impl!(int128 { i128 => from_i128(i128) });

impl From<int128> for i128 {
    fn from(v: int128) -> Self {
        v.to_i128()
    }
}

impl PartialOrd for int128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for int128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.const_cmp(*other)
    }
}

impl PartialEq<i64> for int128 {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::from_i64(*other)
    }
}

impl PartialOrd<i64> for int128 {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.const_cmp(Self::from_i64(*other)))
    }
}

impl Hash for int128 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.high64() as u64);
        state.write_u64(self.low64());
    }
}

impl fmt::Display for int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Buffer::new();
        f.pad_integral(!self.is_negative(), "", buf.format(self.unsigned_abs()))
    }
}

impl fmt::Debug for int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Binary for int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.to_i128(), f)
    }
}

impl fmt::Octal for int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.to_i128(), f)
    }
}

impl fmt::LowerHex for int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_i128(), f)
    }
}

impl fmt::UpperHex for int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.to_i128(), f)
    }
}

#[cfg(feature = "rand")]
impl Distribution<int128> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> int128 {
        int128::from_parts(rng.gen(), rng.gen())
    }
}
