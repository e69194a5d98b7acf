macro_rules! const_assert {
    ($($tt:tt)*) => {
        const _: () = ::core::assert!($($tt)*);
    }
}
pub(crate) use const_assert;

/// Copies the sign bit of `hi` into every bit.
///
/// Written as two shifts so that no single step shifts an `i64`
/// by more than 32.
pub(crate) const fn sign_fill(hi: i64) -> i64 {
    (hi >> 32) >> 31
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_fill() {
        let tests = [
            (0, 0),
            (1, 0),
            (i64::MAX, 0),
            (-1, -1),
            (i64::MIN, -1),
            (i64::MIN + 1, -1),
        ];
        for (i, (x, want)) in tests.into_iter().enumerate() {
            assert_eq!(sign_fill(x), want, "#{i}");
        }
    }
}
