//! Base-10 rendering.
//!
//! [`Buffer`] renders either integer type using nothing but its
//! 64-bit limbs, peeling off nineteen digits at a time with a
//! 128-by-64 division.

use core::str;

use super::{arith::div64, int128, uint128};

mod private {
    use super::Buffer;
    use crate::{int128, uint128};

    pub trait Sealed: Copy {
        fn write(self, buf: &mut Buffer) -> &str;
    }

    impl Sealed for uint128 {
        fn write(self, buf: &mut Buffer) -> &str {
            buf.write(false, self.high64(), self.low64())
        }
    }

    impl Sealed for int128 {
        fn write(self, buf: &mut Buffer) -> &str {
            let abs = self.unsigned_abs();
            buf.write(self.is_negative(), abs.high64(), abs.low64())
        }
    }
}
use private::Sealed;

/// An integer that can be written to a [`Buffer`].
///
/// This trait is sealed.
pub trait Integer: Sealed {}

impl Integer for uint128 {}
impl Integer for int128 {}

/// A stack buffer for converting integers to decimal text.
///
/// # Examples
///
/// ```rust
/// use wide128::{decimal::Buffer, int128};
///
/// let mut buf = Buffer::new();
/// assert_eq!(buf.format(int128::MIN), "-170141183460469231731687303715884105728");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Buffer {
    buf: [u8; Self::MAX_STR_LEN],
}

impl Buffer {
    const MAX_STR_LEN: usize = "-170141183460469231731687303715884105728".len();

    /// 10^19, the largest power of ten that fits in a `u64`.
    const CHUNK: u64 = 10_000_000_000_000_000_000;
    const CHUNK_DIGITS: usize = 19;

    /// Creates a `Buffer`.
    pub const fn new() -> Self {
        Self {
            buf: [b'0'; Self::MAX_STR_LEN],
        }
    }

    /// Prints the integer to the buffer.
    ///
    /// The output has no leading zeros, no separators and a
    /// leading `-` only for negative values.
    pub fn format<I: Integer>(&mut self, v: I) -> &str {
        v.write(self)
    }

    fn write(&mut self, neg: bool, mut hi: u64, mut lo: u64) -> &str {
        let mut out = self.buf.iter_mut().rev();
        let mut n = 0;
        loop {
            // (hi, lo) = (hi, lo) / 10^19
            let (q1, r) = div64(0, hi, Self::CHUNK);
            let (q0, mut r) = div64(r, lo, Self::CHUNK);
            (hi, lo) = (q1, q0);

            let last = hi == 0 && lo == 0;
            let mut i = 0;
            // Inner chunks are zero padded to nineteen digits.
            // The leading chunk stops at its last nonzero digit,
            // but always prints at least one.
            while i < Self::CHUNK_DIGITS && (!last || r != 0 || i == 0) {
                if let Some(b) = out.next() {
                    *b = b'0' + (r % 10) as u8;
                    n += 1;
                }
                r /= 10;
                i += 1;
            }
            if last {
                break;
            }
        }
        if neg {
            if let Some(b) = out.next() {
                *b = b'-';
                n += 1;
            }
        }

        let (_, s) = self.buf.split_at(Self::MAX_STR_LEN - n);
        // SAFETY: `s` only contains ASCII digits and `-`.
        unsafe { str::from_utf8_unchecked(s) }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::random;

    use super::*;

    #[test]
    fn test_boundary() {
        let tests: [(u128, &str); 8] = [
            (0, "0"),
            (1, "1"),
            (9_999_999_999_999_999_999, "9999999999999999999"),
            (10_000_000_000_000_000_000, "10000000000000000000"),
            (100_000_000_000_000_000_000_000_000_000_000_000_000, "100000000000000000000000000000000000000"),
            (1 << 64, "18446744073709551616"),
            (u64::MAX as u128, "18446744073709551615"),
            (u128::MAX, "340282366920938463463374607431768211455"),
        ];
        let mut buf = Buffer::new();
        for (i, (v, want)) in tests.into_iter().enumerate() {
            assert_eq!(buf.format(uint128::from(v)), want, "#{i}");
        }
    }

    #[test]
    fn test_signed_boundary() {
        let tests: [(i128, &str); 5] = [
            (0, "0"),
            (-1, "-1"),
            (-10_000_000_000_000_000_000, "-10000000000000000000"),
            (i128::MIN, "-170141183460469231731687303715884105728"),
            (i128::MAX, "170141183460469231731687303715884105727"),
        ];
        let mut buf = Buffer::new();
        for (i, (v, want)) in tests.into_iter().enumerate() {
            assert_eq!(buf.format(int128::from(v)), want, "#{i}");
        }
    }

    #[test]
    fn test_vs_itoa() {
        let mut buf = Buffer::new();
        let mut want = ::itoa::Buffer::new();
        for i in 0..100_000 {
            // Vary the magnitude so every chunk count is covered.
            let v = random::<u128>() >> (i % 128);
            assert_eq!(buf.format(uint128::from(v)), want.format(v), "#{i}");

            let v = random::<i128>() >> (i % 128);
            assert_eq!(buf.format(int128::from(v)), want.format(v), "#{i}");
        }
    }

    #[test]
    fn test_reuse() {
        // A shorter value must not pick up digits left over from
        // a longer one.
        let mut buf = Buffer::new();
        assert_eq!(buf.format(uint128::MAX), u128::MAX.to_string());
        assert_eq!(buf.format(uint128::from(7u64)), "7");
        assert_eq!(buf.format(int128::from(-7)), "-7");
    }
}
