use core::cmp::Ordering;

use super::SoftI128;
use crate::{
    arith::{self, div64, split32, TWO_NEG_64, TWO_POW_128, TWO_POW_64},
    limbs::ULimbs,
};

/// An unsigned 128-bit integer computed entirely from two
/// 64-bit limbs.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct SoftU128(ULimbs);

impl SoftU128 {
    pub const ZERO: Self = Self::from_parts(0, 0);
    pub const ONE: Self = Self::from_parts(0, 1);
    pub const MAX: Self = Self::from_parts(u64::MAX, u64::MAX);

    /// Creates `hi * 2^64 + lo`.
    pub const fn from_parts(hi: u64, lo: u64) -> Self {
        Self(ULimbs::new(hi, lo))
    }

    pub const fn hi(self) -> u64 {
        self.0.hi()
    }

    pub const fn lo(self) -> u64 {
        self.0.lo()
    }

    /// Reinterprets the bits of `v`.
    pub const fn from_signed(v: SoftI128) -> Self {
        Self::from_parts(v.hi() as u64, v.lo())
    }

    /// Reinterprets the bits of `self`.
    pub const fn to_signed(self) -> SoftI128 {
        SoftI128::from_unsigned(self)
    }

    pub const fn const_eq(self, rhs: Self) -> bool {
        self.hi() == rhs.hi() && self.lo() == rhs.lo()
    }

    pub const fn const_cmp(self, rhs: Self) -> Ordering {
        if self.hi() < rhs.hi() || (self.hi() == rhs.hi() && self.lo() < rhs.lo()) {
            Ordering::Less
        } else if self.const_eq(rhs) {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }

    const fn less(self, rhs: Self) -> bool {
        matches!(self.const_cmp(rhs), Ordering::Less)
    }

    /// Computes `self + rhs` modulo 2^128.
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let lo = self.lo().wrapping_add(rhs.lo());
        let hi = self.hi().wrapping_add(rhs.hi());
        // The low limb carried iff the sum wrapped below an
        // addend.
        let carry = (lo < self.lo()) as u64;
        Self::from_parts(hi.wrapping_add(carry), lo)
    }

    /// Computes `self - rhs` modulo 2^128.
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let lo = self.lo().wrapping_sub(rhs.lo());
        let hi = self.hi().wrapping_sub(rhs.hi());
        let borrow = (self.lo() < rhs.lo()) as u64;
        Self::from_parts(hi.wrapping_sub(borrow), lo)
    }

    /// Computes `self * rhs` modulo 2^128.
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        // Schoolbook multiplication of the low limbs in 32-bit
        // halves. The cross products with the high limbs only
        // reach the high limb, and everything at or above 2^128
        // is dropped.
        let (a32, a00) = split32(self.lo());
        let (b32, b00) = split32(rhs.lo());
        let hi = self
            .hi()
            .wrapping_mul(rhs.lo())
            .wrapping_add(self.lo().wrapping_mul(rhs.hi()))
            .wrapping_add(a32 * b32);
        let z = Self::from_parts(hi, a00 * b00);
        let z = z.wrapping_add(Self::from_parts(0, a32 * b00).shl(32));
        z.wrapping_add(Self::from_parts(0, a00 * b32).shl(32))
    }

    /// Computes `-self` modulo 2^128.
    pub const fn wrapping_neg(self) -> Self {
        // ~x + 1, where the +1 only carries into the high limb
        // when the low limb is zero.
        let hi = (!self.hi()).wrapping_add((self.lo() == 0) as u64);
        let lo = (!self.lo()).wrapping_add(1);
        Self::from_parts(hi, lo)
    }

    /// Computes the quotient and remainder of `self / rhs`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[track_caller]
    pub const fn quorem(self, rhs: Self) -> (Self, Self) {
        let x = self;
        let y = rhs;

        if x.less(y) {
            return (Self::ZERO, x);
        }

        if y.hi() == 0 {
            let (q, r) = x.quorem64(y.lo());
            return (q, Self::from_parts(0, r));
        }

        // `y` is at least 2^64, so the quotient fits in 64 bits.
        // Estimate it from the normalized top limb of `y`, then
        // correct by at most one.
        let n = y.hi().leading_zeros();
        let y1 = y.shl(n);
        let x1 = x.shr(1);
        let (tq, _) = div64(x1.hi(), x1.lo(), y1.hi());
        let mut q = (tq >> (63 - n)).saturating_sub(1);
        let mut r = x.wrapping_sub(y.wrapping_mul(Self::from_parts(0, q)));
        if !r.less(y) {
            q = q.wrapping_add(1);
            r = r.wrapping_sub(y);
        }
        (Self::from_parts(0, q), r)
    }

    /// Computes the quotient and remainder of `self / d`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    #[track_caller]
    pub const fn quorem64(self, d: u64) -> (Self, u64) {
        if self.hi() < d {
            let (lo, r) = div64(self.hi(), self.lo(), d);
            return (Self::from_parts(0, lo), r);
        }
        let (hi, r) = div64(0, self.hi(), d);
        let (lo, r) = div64(r, self.lo(), d);
        (Self::from_parts(hi, lo), r)
    }

    /// Computes `self << amount`.
    ///
    /// `amount` must be less than 128. Larger amounts are
    /// reduced modulo 128.
    pub const fn shl(self, amount: u32) -> Self {
        debug_assert!(amount < 128);

        let amount = amount & 127;
        if amount >= 64 {
            Self::from_parts(self.lo() << (amount - 64), 0)
        } else if amount == 0 {
            self
        } else {
            Self::from_parts(
                (self.hi() << amount) | (self.lo() >> (64 - amount)),
                self.lo() << amount,
            )
        }
    }

    /// Computes `self >> amount`, shifting in zeros.
    ///
    /// `amount` must be less than 128. Larger amounts are
    /// reduced modulo 128.
    pub const fn shr(self, amount: u32) -> Self {
        debug_assert!(amount < 128);

        let amount = amount & 127;
        if amount >= 64 {
            Self::from_parts(0, self.hi() >> (amount - 64))
        } else if amount == 0 {
            self
        } else {
            Self::from_parts(
                self.hi() >> amount,
                (self.lo() >> amount) | (self.hi() << (64 - amount)),
            )
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
        arith::u128_to_f32(self.hi(), self.lo())
    }

    pub fn to_f64(self) -> f64 {
        arith::u128_to_f64(self.hi(), self.lo())
    }

    pub fn from_f32(v: f32) -> Self {
        Self::from_f64(v as f64)
    }

    /// Converts `v` to an integer, truncating toward zero.
    ///
    /// Out of range values saturate and NaN is zero, the same as
    /// a native `as` cast.
    pub fn from_f64(v: f64) -> Self {
        if v >= TWO_POW_128 {
            Self::MAX
        } else if v >= TWO_POW_64 {
            // Scaling by a power of two is exact, so both limbs
            // are truncations of exact values.
            let hi = (v * TWO_NEG_64) as u64;
            let lo = (v - hi as f64 * TWO_POW_64) as u64;
            Self::from_parts(hi, lo)
        } else {
            Self::from_parts(0, v as u64)
        }
    }
}
