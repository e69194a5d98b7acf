use core::{fmt, num::TryFromIntError, str::FromStr};

use super::{int128, uint128};

/// An error returned when parsing an integer from a string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    kind: ErrorKind,
}

impl ParseError {
    const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ErrorKind {
    Empty,
    InvalidDigit,
    PosOverflow,
    NegOverflow,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse integer from empty string"),
            Self::InvalidDigit => write!(f, "invalid digit found in string"),
            Self::PosOverflow => write!(f, "number too large to fit in target type"),
            Self::NegOverflow => write!(f, "number too small to fit in target type"),
        }
    }
}

/// Splits an optional sign off of `s`.
///
/// Returns `(neg, digits)`.
fn split_sign(s: &str) -> Result<(bool, &[u8]), ParseError> {
    let (neg, digits) = match s.as_bytes() {
        [] => return Err(ParseError::new(ErrorKind::Empty)),
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        all => (false, all),
    };
    if digits.is_empty() {
        return Err(ParseError::new(ErrorKind::InvalidDigit));
    }
    Ok((neg, digits))
}

/// Accumulates ASCII decimal digits into a magnitude.
///
/// `overflow` is reported when the magnitude does not fit in
/// 128 bits.
fn parse_magnitude(digits: &[u8], overflow: ErrorKind) -> Result<uint128, ParseError> {
    const TEN: uint128 = uint128::from_u64(10);

    let mut acc = uint128::ZERO;
    for &c in digits {
        let d = c.wrapping_sub(b'0');
        if d > 9 {
            return Err(ParseError::new(ErrorKind::InvalidDigit));
        }
        acc = acc
            .checked_mul(TEN)
            .and_then(|acc| acc.checked_add(uint128::from(d)))
            .ok_or(ParseError::new(overflow))?;
    }
    Ok(acc)
}

impl FromStr for uint128 {
    type Err = ParseError;

    /// Parses an optional `+` followed by decimal digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::uint128;
    ///
    /// let x: uint128 = "340282366920938463463374607431768211455".parse().unwrap();
    /// assert_eq!(x, uint128::MAX);
    /// assert!("-1".parse::<uint128>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_sign(s)? {
            (true, _) => Err(ParseError::new(ErrorKind::InvalidDigit)),
            (false, digits) => parse_magnitude(digits, ErrorKind::PosOverflow),
        }
    }
}

impl FromStr for int128 {
    type Err = ParseError;

    /// Parses an optional sign followed by decimal digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wide128::int128;
    ///
    /// let x: int128 = "-170141183460469231731687303715884105728".parse().unwrap();
    /// assert_eq!(x, int128::MIN);
    /// assert!("170141183460469231731687303715884105728".parse::<int128>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The magnitude of MIN.
        const LIMIT: uint128 = uint128::from_parts(1 << 63, 0);

        let (neg, digits) = split_sign(s)?;
        if neg {
            let abs = parse_magnitude(digits, ErrorKind::NegOverflow)?;
            if abs > LIMIT {
                return Err(ParseError::new(ErrorKind::NegOverflow));
            }
            Ok(int128::from_unsigned(abs.wrapping_neg()))
        } else {
            let abs = parse_magnitude(digits, ErrorKind::PosOverflow)?;
            if abs >= LIMIT {
                return Err(ParseError::new(ErrorKind::PosOverflow));
            }
            Ok(int128::from_unsigned(abs))
        }
    }
}

// Checked narrowing goes through the native 128-bit types so
// that the error is the standard `TryFromIntError`.
macro_rules! try_from_impl {
    ($src:ty => $native:ident { $($dst:ty),+ $(,)? }) => {$(
        impl TryFrom<$src> for $dst {
            type Error = TryFromIntError;

            fn try_from(v: $src) -> Result<Self, Self::Error> {
                <$dst>::try_from(v.$native())
            }
        }
    )+};
}
try_from_impl!(uint128 => to_u128 { u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128 });
try_from_impl!(int128 => to_i128 { u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, u128 });

impl TryFrom<uint128> for int128 {
    type Error = TryFromIntError;

    /// Converts `v` if it is at most [`int128::MAX`].
    ///
    /// Use [`int128::from_unsigned`] to reinterpret the bits
    /// instead.
    fn try_from(v: uint128) -> Result<Self, Self::Error> {
        i128::try_from(v.to_u128()).map(int128::from_i128)
    }
}

impl TryFrom<int128> for uint128 {
    type Error = TryFromIntError;

    /// Converts `v` if it is not negative.
    ///
    /// Use [`uint128::from_signed`] to reinterpret the bits
    /// instead.
    fn try_from(v: int128) -> Result<Self, Self::Error> {
        u128::try_from(v.to_i128()).map(uint128::from_u128)
    }
}

impl TryFrom<i128> for uint128 {
    type Error = TryFromIntError;

    fn try_from(v: i128) -> Result<Self, Self::Error> {
        u128::try_from(v).map(uint128::from_u128)
    }
}

impl TryFrom<u128> for int128 {
    type Error = TryFromIntError;

    fn try_from(v: u128) -> Result<Self, Self::Error> {
        i128::try_from(v).map(int128::from_i128)
    }
}

#[cfg(test)]
mod tests {
    use rand::random;

    use super::*;

    #[test]
    fn test_parse_unsigned() {
        let tests: [(&str, Result<u128, ErrorKind>); 12] = [
            ("0", Ok(0)),
            ("+0", Ok(0)),
            ("0000000000000000000000000000000000000000000000001", Ok(1)),
            ("18446744073709551616", Ok(1 << 64)),
            ("340282366920938463463374607431768211455", Ok(u128::MAX)),
            ("340282366920938463463374607431768211456", Err(ErrorKind::PosOverflow)),
            ("3402823669209384634633746074317682114550", Err(ErrorKind::PosOverflow)),
            ("", Err(ErrorKind::Empty)),
            ("+", Err(ErrorKind::InvalidDigit)),
            ("-1", Err(ErrorKind::InvalidDigit)),
            ("12a", Err(ErrorKind::InvalidDigit)),
            (" 1", Err(ErrorKind::InvalidDigit)),
        ];
        for (i, (s, want)) in tests.into_iter().enumerate() {
            let got = s
                .parse::<uint128>()
                .map(uint128::to_u128)
                .map_err(|err| err.kind);
            assert_eq!(got, want, "#{i}: {s:?}");
        }
    }

    #[test]
    fn test_parse_signed() {
        let tests: [(&str, Result<i128, ErrorKind>); 11] = [
            ("0", Ok(0)),
            ("-0", Ok(0)),
            ("-1", Ok(-1)),
            ("+9223372036854775808", Ok(1 << 63)),
            ("-170141183460469231731687303715884105728", Ok(i128::MIN)),
            ("170141183460469231731687303715884105727", Ok(i128::MAX)),
            ("170141183460469231731687303715884105728", Err(ErrorKind::PosOverflow)),
            ("-170141183460469231731687303715884105729", Err(ErrorKind::NegOverflow)),
            ("-999999999999999999999999999999999999999999", Err(ErrorKind::NegOverflow)),
            ("-", Err(ErrorKind::InvalidDigit)),
            ("--1", Err(ErrorKind::InvalidDigit)),
        ];
        for (i, (s, want)) in tests.into_iter().enumerate() {
            let got = s
                .parse::<int128>()
                .map(int128::to_i128)
                .map_err(|err| err.kind);
            assert_eq!(got, want, "#{i}: {s:?}");
        }
    }

    #[test]
    fn test_parse_matches_native() {
        for i in 0..10_000 {
            let v = random::<i128>() >> (i % 128);
            let got = v.to_string().parse::<int128>().map(int128::to_i128);
            assert_eq!(got, Ok(v), "#{i}");

            let v = random::<u128>() >> (i % 128);
            let got = v.to_string().parse::<uint128>().map(uint128::to_u128);
            assert_eq!(got, Ok(v), "#{i}");
        }
    }

    #[test]
    fn test_error_display() {
        let err = "".parse::<uint128>().unwrap_err();
        assert_eq!(err.to_string(), "cannot parse integer from empty string");
        let err = "x".parse::<int128>().unwrap_err();
        assert_eq!(err.to_string(), "invalid digit found in string");
    }

    #[test]
    fn test_try_from() {
        assert_eq!(u64::try_from(uint128::from(u64::MAX)), Ok(u64::MAX));
        assert!(u64::try_from(uint128::from_parts(1, 0)).is_err());
        assert_eq!(i8::try_from(uint128::from(127u64)), Ok(127));
        assert!(i8::try_from(uint128::from(128u64)).is_err());

        assert_eq!(i64::try_from(int128::from(i64::MIN)), Ok(i64::MIN));
        assert!(i64::try_from(int128::from_parts(-2, 0)).is_err());
        assert!(u8::try_from(int128::from(-1)).is_err());
        assert_eq!(u128::try_from(int128::MAX), Ok(i128::MAX as u128));

        assert!(int128::try_from(uint128::MAX).is_err());
        assert_eq!(int128::try_from(uint128::from(5u64)), Ok(int128::from(5)));
        assert!(uint128::try_from(int128::from(-1)).is_err());
        assert_eq!(uint128::try_from(int128::MAX), Ok(uint128::MAX >> 1u32));
        assert!(uint128::try_from(-1i128).is_err());
        assert!(int128::try_from(u128::MAX).is_err());
    }

    #[test]
    fn test_from_native() {
        assert_eq!(uint128::from(u8::MAX), uint128::from_parts(0, 255));
        assert_eq!(uint128::from(-1i8), uint128::MAX);
        assert_eq!(uint128::from(u128::MAX), uint128::MAX);
        assert_eq!(u128::from(uint128::MAX), u128::MAX);
        assert_eq!(int128::from(i128::MIN), int128::MIN);
        assert_eq!(i128::from(int128::MIN), i128::MIN);
        assert_eq!(int128::from(u32::MAX), int128::from_parts(0, u32::MAX as u64));
    }
}
