//! Single-word primitives shared by the limb engine and the
//! decimal formatter.

/// Computes
///
/// ```text
/// q = (hi, lo) / d
/// r = (hi, lo) % d
/// ```
///
/// This is the one division primitive the limb engine relies
/// on. Every target Rust supports provides it.
///
/// `hi` must be less than `d`, otherwise the quotient does not
/// fit in a `u64`.
///
/// # Panics
///
/// Panics if `d` is zero.
#[track_caller]
pub(crate) const fn div64(hi: u64, lo: u64, d: u64) -> (u64, u64) {
    debug_assert!(d == 0 || hi < d);

    let x = ((hi as u128) << 64) | (lo as u128);
    let q = (x / (d as u128)) as u64;
    let r = (x % (d as u128)) as u64;
    (q, r)
}

const MASK32: u64 = 0xffff_ffff;

/// Splits `x` into `(x >> 32, x & 0xffffffff)`.
pub(crate) const fn split32(x: u64) -> (u64, u64) {
    (x >> 32, x & MASK32)
}

/// 2^64.
pub(crate) const TWO_POW_64: f64 = 18446744073709551616.0;
/// 2^-64.
pub(crate) const TWO_NEG_64: f64 = 1.0 / TWO_POW_64;
/// 2^127.
pub(crate) const TWO_POW_127: f64 = 170141183460469231731687303715884105728.0;
/// 2^128.
pub(crate) const TWO_POW_128: f64 = 340282366920938463463374607431768211456.0;

macro_rules! limbs_to_float {
    ($($float:ident => $unsigned:ident, $signed:ident);+ $(;)?) => {$(
        /// Converts the unsigned value `hi * 2^64 + lo` to a
        /// float. Each limb is rounded separately.
        pub(crate) fn $unsigned(hi: u64, lo: u64) -> $float {
            const POW_2_64: $float = 18446744073709551616.0;
            lo as $float + hi as $float * POW_2_64
        }

        /// Converts the signed value `hi * 2^64 + lo` to a
        /// float, rounding the magnitude like the unsigned form.
        pub(crate) fn $signed(hi: i64, lo: u64) -> $float {
            const POW_2_64: $float = 18446744073709551616.0;

            // Floats are sign-magnitude, so convert the absolute
            // value. Adding the two's complement limbs directly
            // loses the low bits to cancellation. The minimum
            // has no positive counterpart and converts exactly
            // as is.
            if hi < 0 && !(hi == i64::MIN && lo == 0) {
                let abs_hi = (!(hi as u64)).wrapping_add((lo == 0) as u64);
                let abs_lo = (!lo).wrapping_add(1);
                -$unsigned(abs_hi, abs_lo)
            } else {
                lo as $float + hi as $float * POW_2_64
            }
        }
    )+};
}
limbs_to_float! {
    f32 => u128_to_f32, i128_to_f32;
    f64 => u128_to_f64, i128_to_f64;
}
