use core::cmp::Ordering;

use super::SoftU128;
use crate::{
    arith::{self, TWO_POW_127},
    limbs::ILimbs,
    util::sign_fill,
};

/// A signed two's complement 128-bit integer computed entirely
/// from two 64-bit limbs.
///
/// Every operation whose result does not depend on the sign is
/// delegated to [`SoftU128`], which shares the same bits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct SoftI128(ILimbs);

impl SoftI128 {
    pub const ZERO: Self = Self::from_parts(0, 0);
    pub const ONE: Self = Self::from_parts(0, 1);
    pub const MIN: Self = Self::from_parts(i64::MIN, 0);
    pub const MAX: Self = Self::from_parts(i64::MAX, u64::MAX);

    /// Creates `hi * 2^64 + lo`.
    pub const fn from_parts(hi: i64, lo: u64) -> Self {
        Self(ILimbs::new(hi, lo))
    }

    pub const fn hi(self) -> i64 {
        self.0.hi()
    }

    pub const fn lo(self) -> u64 {
        self.0.lo()
    }

    /// Reinterprets the bits of `v`.
    pub const fn from_unsigned(v: SoftU128) -> Self {
        Self::from_parts(v.hi() as i64, v.lo())
    }

    /// Reinterprets the bits of `self`.
    pub const fn to_unsigned(self) -> SoftU128 {
        SoftU128::from_signed(self)
    }

    pub const fn is_negative(self) -> bool {
        self.hi() < 0
    }

    /// Returns `|self|`, which always fits in the unsigned type.
    pub const fn unsigned_abs(self) -> SoftU128 {
        if self.is_negative() {
            self.to_unsigned().wrapping_neg()
        } else {
            self.to_unsigned()
        }
    }

    pub const fn const_eq(self, rhs: Self) -> bool {
        self.hi() == rhs.hi() && self.lo() == rhs.lo()
    }

    /// Orders by the signed high limb, then by the unsigned low
    /// limb.
    pub const fn const_cmp(self, rhs: Self) -> Ordering {
        if self.hi() < rhs.hi() || (self.hi() == rhs.hi() && self.lo() < rhs.lo()) {
            Ordering::Less
        } else if self.const_eq(rhs) {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }

    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self::from_unsigned(self.to_unsigned().wrapping_add(rhs.to_unsigned()))
    }

    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self::from_unsigned(self.to_unsigned().wrapping_sub(rhs.to_unsigned()))
    }

    /// The low 128 bits of the product do not depend on the
    /// operands' signs.
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self::from_unsigned(self.to_unsigned().wrapping_mul(rhs.to_unsigned()))
    }

    pub const fn wrapping_neg(self) -> Self {
        Self::from_unsigned(self.to_unsigned().wrapping_neg())
    }

    /// Computes the quotient and remainder of `self / rhs`.
    ///
    /// The quotient is truncated toward zero and the remainder
    /// has the sign of `self`. `MIN / -1` wraps to `MIN`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[track_caller]
    pub const fn quorem(self, rhs: Self) -> (Self, Self) {
        let (q, r) = self.unsigned_abs().quorem(rhs.unsigned_abs());
        let q = if self.is_negative() != rhs.is_negative() {
            q.wrapping_neg()
        } else {
            q
        };
        let r = if self.is_negative() {
            r.wrapping_neg()
        } else {
            r
        };
        (Self::from_unsigned(q), Self::from_unsigned(r))
    }

    /// Computes `self << amount`.
    ///
    /// A left shift moves the same bits regardless of sign.
    pub const fn shl(self, amount: u32) -> Self {
        Self::from_unsigned(self.to_unsigned().shl(amount))
    }

    /// Computes `self >> amount`, shifting in copies of the sign
    /// bit.
    ///
    /// `amount` must be less than 128. Larger amounts are
    /// reduced modulo 128.
    pub const fn shr(self, amount: u32) -> Self {
        debug_assert!(amount < 128);

        let hi = self.hi();
        let lo = self.lo();
        match amount & 127 {
            0 => self,
            n @ 1..=62 => Self::from_parts(hi >> n, (lo >> n) | ((hi as u64) << (64 - n))),
            63 => Self::from_parts(sign_fill(hi), ((hi as u64) << 1) | (lo >> 63)),
            n @ 64..=126 => Self::from_parts(sign_fill(hi), (hi >> (n - 64)) as u64),
            _ => Self::from_parts(sign_fill(hi), sign_fill(hi) as u64),
        }
    }

    pub const fn bitand(self, rhs: Self) -> Self {
        Self::from_parts(self.hi() & rhs.hi(), self.lo() & rhs.lo())
    }

    pub const fn bitor(self, rhs: Self) -> Self {
        Self::from_parts(self.hi() | rhs.hi(), self.lo() | rhs.lo())
    }

    pub const fn bitxor(self, rhs: Self) -> Self {
        Self::from_parts(self.hi() ^ rhs.hi(), self.lo() ^ rhs.lo())
    }

    pub const fn not(self) -> Self {
        Self::from_parts(!self.hi(), !self.lo())
    }

    pub fn to_f32(self) -> f32 {
        arith::i128_to_f32(self.hi(), self.lo())
    }

    pub fn to_f64(self) -> f64 {
        arith::i128_to_f64(self.hi(), self.lo())
    }

    pub fn from_f32(v: f32) -> Self {
        Self::from_f64(v as f64)
    }

    /// Converts `v` to an integer, truncating toward zero.
    ///
    /// Out of range values saturate and NaN is zero, the same as
    /// a native `as` cast.
    pub fn from_f64(v: f64) -> Self {
        if v >= TWO_POW_127 {
            Self::MAX
        } else if v <= -TWO_POW_127 {
            Self::MIN
        } else if v < 0.0 {
            Self::from_unsigned(SoftU128::from_f64(-v)).wrapping_neg()
        } else {
            Self::from_unsigned(SoftU128::from_f64(v))
        }
    }
}
