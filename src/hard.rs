//! The native representation.
//!
//! Forwards every operation to `u128`/`i128`. Conversions to
//! floating point use the same limb formula as the two-limb
//! engine so that both representations round identically.

use core::cmp::Ordering;

use super::arith;

/// An unsigned 128-bit integer backed by `u128`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct HardU128(u128);

/// A signed 128-bit integer backed by `i128`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct HardI128(i128);

impl HardU128 {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const MAX: Self = Self(u128::MAX);

    pub const fn from_parts(hi: u64, lo: u64) -> Self {
        Self(((hi as u128) << 64) | (lo as u128))
    }

    pub const fn hi(self) -> u64 {
        (self.0 >> 64) as u64
    }

    pub const fn lo(self) -> u64 {
        self.0 as u64
    }

    pub const fn from_signed(v: HardI128) -> Self {
        Self(v.0 as u128)
    }

    pub const fn to_signed(self) -> HardI128 {
        HardI128::from_unsigned(self)
    }

    pub const fn const_eq(self, rhs: Self) -> bool {
        self.0 == rhs.0
    }

    pub const fn const_cmp(self, rhs: Self) -> Ordering {
        if self.0 < rhs.0 {
            Ordering::Less
        } else if self.0 == rhs.0 {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }

    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[track_caller]
    pub const fn quorem(self, rhs: Self) -> (Self, Self) {
        (Self(self.0 / rhs.0), Self(self.0 % rhs.0))
    }

    pub const fn shl(self, amount: u32) -> Self {
        debug_assert!(amount < 128);

        Self(self.0 << (amount & 127))
    }

    pub const fn shr(self, amount: u32) -> Self {
        debug_assert!(amount < 128);

        Self(self.0 >> (amount & 127))
    }

    pub const fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }

    pub const fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    pub const fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }

    pub const fn not(self) -> Self {
        Self(!self.0)
    }

    pub fn to_f32(self) -> f32 {
        arith::u128_to_f32(self.hi(), self.lo())
    }

    pub fn to_f64(self) -> f64 {
        arith::u128_to_f64(self.hi(), self.lo())
    }

    pub fn from_f32(v: f32) -> Self {
        Self(v as u128)
    }

    pub fn from_f64(v: f64) -> Self {
        Self(v as u128)
    }
}

impl HardI128 {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const MIN: Self = Self(i128::MIN);
    pub const MAX: Self = Self(i128::MAX);

    pub const fn from_parts(hi: i64, lo: u64) -> Self {
        Self(((hi as i128) << 64) | (lo as i128))
    }

    pub const fn hi(self) -> i64 {
        (self.0 >> 64) as i64
    }

    pub const fn lo(self) -> u64 {
        self.0 as u64
    }

    pub const fn from_unsigned(v: HardU128) -> Self {
        Self(v.0 as i128)
    }

    pub const fn to_unsigned(self) -> HardU128 {
        HardU128::from_signed(self)
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn unsigned_abs(self) -> HardU128 {
        HardU128(self.0.unsigned_abs())
    }

    pub const fn const_eq(self, rhs: Self) -> bool {
        self.0 == rhs.0
    }

    pub const fn const_cmp(self, rhs: Self) -> Ordering {
        if self.0 < rhs.0 {
            Ordering::Less
        } else if self.0 == rhs.0 {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }

    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[track_caller]
    pub const fn quorem(self, rhs: Self) -> (Self, Self) {
        (
            Self(self.0.wrapping_div(rhs.0)),
            Self(self.0.wrapping_rem(rhs.0)),
        )
    }

    pub const fn shl(self, amount: u32) -> Self {
        debug_assert!(amount < 128);

        Self(self.0 << (amount & 127))
    }

    pub const fn shr(self, amount: u32) -> Self {
        debug_assert!(amount < 128);

        Self(self.0 >> (amount & 127))
    }

    pub const fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }

    pub const fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    pub const fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }

    pub const fn not(self) -> Self {
        Self(!self.0)
    }

    pub fn to_f32(self) -> f32 {
        arith::i128_to_f32(self.hi(), self.lo())
    }

    pub fn to_f64(self) -> f64 {
        arith::i128_to_f64(self.hi(), self.lo())
    }

    pub fn from_f32(v: f32) -> Self {
        Self(v as i128)
    }

    pub fn from_f64(v: f64) -> Self {
        Self(v as i128)
    }
}
