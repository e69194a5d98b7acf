//! The operation set shared by both representations, and the
//! build-time choice between them.
//!
//! [`crate::uint128`] and [`crate::int128`] wrap [`Unsigned`]
//! and [`Signed`] and call their inherent `const fn`s directly.
//! The traits below pin the shared contract. They are also what
//! the equivalence tests are generic over.

use core::{cmp::Ordering, fmt::Debug};

use super::{
    hard::{HardI128, HardU128},
    soft::{SoftI128, SoftU128},
};

/// The representation behind [`crate::uint128`].
#[cfg(feature = "intrinsic")]
pub(crate) type Unsigned = HardU128;
/// The representation behind [`crate::int128`].
#[cfg(feature = "intrinsic")]
pub(crate) type Signed = HardI128;

/// The representation behind [`crate::uint128`].
#[cfg(not(feature = "intrinsic"))]
pub(crate) type Unsigned = SoftU128;
/// The representation behind [`crate::int128`].
#[cfg(not(feature = "intrinsic"))]
pub(crate) type Signed = SoftI128;

/// The operations of an unsigned 128-bit representation.
#[cfg_attr(not(test), allow(dead_code))]
pub(crate) trait UnsignedRepr: Copy + Eq + Debug {
    /// The signed representation with the same bits.
    type Signed: SignedRepr<Unsigned = Self>;

    fn from_parts(hi: u64, lo: u64) -> Self;
    fn hi(self) -> u64;
    fn lo(self) -> u64;
    fn to_signed(self) -> Self::Signed;
    fn const_cmp(self, rhs: Self) -> Ordering;
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;
    fn quorem(self, rhs: Self) -> (Self, Self);
    fn shl(self, amount: u32) -> Self;
    fn shr(self, amount: u32) -> Self;
    fn bitand(self, rhs: Self) -> Self;
    fn bitor(self, rhs: Self) -> Self;
    fn bitxor(self, rhs: Self) -> Self;
    fn not(self) -> Self;
    fn to_f32(self) -> f32;
    fn to_f64(self) -> f64;
    fn from_f32(v: f32) -> Self;
    fn from_f64(v: f64) -> Self;
}

/// The operations of a signed 128-bit representation.
#[cfg_attr(not(test), allow(dead_code))]
pub(crate) trait SignedRepr: Copy + Eq + Debug {
    /// The unsigned representation with the same bits.
    type Unsigned: UnsignedRepr<Signed = Self>;

    fn from_parts(hi: i64, lo: u64) -> Self;
    fn hi(self) -> i64;
    fn lo(self) -> u64;
    fn to_unsigned(self) -> Self::Unsigned;
    fn const_cmp(self, rhs: Self) -> Ordering;
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;
    fn quorem(self, rhs: Self) -> (Self, Self);
    fn shl(self, amount: u32) -> Self;
    fn shr(self, amount: u32) -> Self;
    fn bitand(self, rhs: Self) -> Self;
    fn bitor(self, rhs: Self) -> Self;
    fn bitxor(self, rhs: Self) -> Self;
    fn not(self) -> Self;
    fn to_f32(self) -> f32;
    fn to_f64(self) -> f64;
    fn from_f32(v: f32) -> Self;
    fn from_f64(v: f64) -> Self;
}

// Forwards the trait to the inherent `const fn`s of the same
// name.
macro_rules! impl_repr {
    ($trait:ident for $t:ty { $assoc:ident = $partner:ty, $hi:ty, $partner_fn:ident }) => {
        impl $trait for $t {
            type $assoc = $partner;

            fn from_parts(hi: $hi, lo: u64) -> Self {
                <$t>::from_parts(hi, lo)
            }
            fn hi(self) -> $hi {
                <$t>::hi(self)
            }
            fn lo(self) -> u64 {
                <$t>::lo(self)
            }
            fn $partner_fn(self) -> $partner {
                <$t>::$partner_fn(self)
            }
            fn const_cmp(self, rhs: Self) -> Ordering {
                <$t>::const_cmp(self, rhs)
            }
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }
            fn wrapping_neg(self) -> Self {
                <$t>::wrapping_neg(self)
            }
            #[track_caller]
            fn quorem(self, rhs: Self) -> (Self, Self) {
                <$t>::quorem(self, rhs)
            }
            fn shl(self, amount: u32) -> Self {
                <$t>::shl(self, amount)
            }
            fn shr(self, amount: u32) -> Self {
                <$t>::shr(self, amount)
            }
            fn bitand(self, rhs: Self) -> Self {
                <$t>::bitand(self, rhs)
            }
            fn bitor(self, rhs: Self) -> Self {
                <$t>::bitor(self, rhs)
            }
            fn bitxor(self, rhs: Self) -> Self {
                <$t>::bitxor(self, rhs)
            }
            fn not(self) -> Self {
                <$t>::not(self)
            }
            fn to_f32(self) -> f32 {
                <$t>::to_f32(self)
            }
            fn to_f64(self) -> f64 {
                <$t>::to_f64(self)
            }
            fn from_f32(v: f32) -> Self {
                <$t>::from_f32(v)
            }
            fn from_f64(v: f64) -> Self {
                <$t>::from_f64(v)
            }
        }
    };
}
impl_repr!(UnsignedRepr for SoftU128 { Signed = SoftI128, u64, to_signed });
impl_repr!(SignedRepr for SoftI128 { Unsigned = SoftU128, i64, to_unsigned });
impl_repr!(UnsignedRepr for HardU128 { Signed = HardI128, u64, to_signed });
impl_repr!(SignedRepr for HardI128 { Unsigned = HardU128, i64, to_unsigned });
