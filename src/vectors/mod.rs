//! Checked-in test vectors.
//!
//! Each line of a `.vec` file names one operation, its operands
//! and the expected result, written in decimal:
//!
//! ```text
//! -- a comment
//! type: unsigned
//! add1 add 1 18446744073709551615 -> 18446744073709551616
//! type: signed
//! shr1 shr -170141183460469231731687303715884105728 127 -> -1
//! ```
//!
//! The same vectors run against the public types and against
//! the native `u128`/`i128`, which keeps the vectors honest.

use std::{error, fmt, str::FromStr};

use anyhow::{anyhow, Context, Result};

mod parse;

pub use parse::parse;

use crate::{int128, uint128};

/// A single test vector.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Case<'a> {
    pub line: usize,
    pub signed: bool,
    pub name: &'a str,
    pub op: Op<'a>,
}

impl Case<'_> {
    pub fn run<B: Backend>(&self) -> Result<(), Failure<'_>> {
        self.try_run::<B>()
            .map_err(|err| Failure { case: self, err })
    }

    fn try_run<B: Backend>(&self) -> Result<()> {
        match self.op {
            Op::Binary {
                kind,
                lhs,
                rhs,
                result,
            } => {
                let got = B::binary(kind, B::parse(lhs)?, B::parse(rhs)?);
                check(got, result)
            }
            Op::Shift {
                kind,
                lhs,
                amount,
                result,
            } => {
                let amount = amount
                    .parse()
                    .with_context(|| format!("invalid shift amount: `{amount}`"))?;
                let got = B::shift(kind, B::parse(lhs)?, amount);
                check(got, result)
            }
            Op::Unary {
                kind,
                input,
                result,
            } => check(B::unary(kind, B::parse(input)?), result),
            Op::Cmp { lhs, rhs, result } => {
                let got = match B::parse(lhs)?.cmp(&B::parse(rhs)?) {
                    std::cmp::Ordering::Less => -1,
                    std::cmp::Ordering::Equal => 0,
                    std::cmp::Ordering::Greater => 1,
                };
                check(got, result)
            }
            Op::FromF64 { input, result } => {
                let v: f64 = input
                    .parse()
                    .with_context(|| format!("invalid float: `{input}`"))?;
                check(B::from_f64(v), result)
            }
            Op::ToF64 { input, result } => {
                let want: f64 = result
                    .parse()
                    .with_context(|| format!("invalid float: `{result}`"))?;
                let got = B::to_f64(B::parse(input)?);
                if got.to_bits() != want.to_bits() {
                    return Err(anyhow!("got {got:e}, expected {want:e}"));
                }
                Ok(())
            }
            Op::Reinterpret { input, result } => {
                check(B::reinterpret(B::parse(input)?), result)
            }
        }
    }
}

fn check<G>(got: G, want: &str) -> Result<()>
where
    G: fmt::Display,
{
    let got = got.to_string();
    if got != want {
        Err(anyhow!("got {got}, expected {want}"))
    } else {
        Ok(())
    }
}

impl fmt::Display for Case<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = if self.signed { "signed" } else { "unsigned" };
        write!(f, "line {}: {} ({ty}) {}", self.line, self.name, self.op)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ShiftOp {
    Shl,
    Shr,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UnOp {
    Neg,
    Not,
    High64,
    Low64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Op<'a> {
    Binary {
        kind: BinOp,
        lhs: &'a str,
        rhs: &'a str,
        result: &'a str,
    },
    Shift {
        kind: ShiftOp,
        lhs: &'a str,
        amount: &'a str,
        result: &'a str,
    },
    Unary {
        kind: UnOp,
        input: &'a str,
        result: &'a str,
    },
    Cmp {
        lhs: &'a str,
        rhs: &'a str,
        result: &'a str,
    },
    FromF64 {
        input: &'a str,
        result: &'a str,
    },
    ToF64 {
        input: &'a str,
        result: &'a str,
    },
    Reinterpret {
        input: &'a str,
        result: &'a str,
    },
}

impl fmt::Display for Op<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary {
                kind,
                lhs,
                rhs,
                result,
            } => write!(f, "{kind:?} {lhs} {rhs} -> {result}"),
            Self::Shift {
                kind,
                lhs,
                amount,
                result,
            } => write!(f, "{kind:?} {lhs} {amount} -> {result}"),
            Self::Unary {
                kind,
                input,
                result,
            } => write!(f, "{kind:?} {input} -> {result}"),
            Self::Cmp { lhs, rhs, result } => write!(f, "cmp {lhs} {rhs} -> {result}"),
            Self::FromF64 { input, result } => write!(f, "fromf64 {input} -> {result}"),
            Self::ToF64 { input, result } => write!(f, "tof64 {input} -> {result}"),
            Self::Reinterpret { input, result } => {
                write!(f, "reinterpret {input} -> {result}")
            }
        }
    }
}

/// A test vector failure.
pub struct Failure<'a> {
    case: &'a Case<'a>,
    err: anyhow::Error,
}

impl error::Error for Failure<'_> {}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test failure for `{}`: {}", self.case, self.err)
    }
}

impl fmt::Debug for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// An integer type the vectors can run against.
pub trait Backend {
    type Int: Copy + Ord + fmt::Display;
    type Sibling: fmt::Display;

    fn parse(s: &str) -> Result<Self::Int>;
    fn binary(op: BinOp, lhs: Self::Int, rhs: Self::Int) -> Self::Int;
    fn shift(op: ShiftOp, lhs: Self::Int, amount: u32) -> Self::Int;
    fn unary(op: UnOp, x: Self::Int) -> String;
    fn from_f64(v: f64) -> Self::Int;
    fn to_f64(x: Self::Int) -> f64;
    fn reinterpret(x: Self::Int) -> Self::Sibling;
}

macro_rules! impl_backend {
    ($name:ty, $sibling:ty, $hi:ty, {
        high64 => $high:expr,
        low64 => $low:expr,
        from_f64 => $from_f64:expr,
        to_f64 => $to_f64:expr,
        reinterpret => $reinterpret:expr,
    }) => {
        impl Backend for $name {
            type Int = $name;
            type Sibling = $sibling;

            fn parse(s: &str) -> Result<$name> {
                <$name as FromStr>::from_str(s)
                    .map_err(|err| anyhow!("unable to parse `{s}`: {err}"))
            }

            fn binary(op: BinOp, lhs: $name, rhs: $name) -> $name {
                match op {
                    BinOp::Add => lhs.wrapping_add(rhs),
                    BinOp::Sub => lhs.wrapping_sub(rhs),
                    BinOp::Mul => lhs.wrapping_mul(rhs),
                    BinOp::Div => lhs.wrapping_div(rhs),
                    BinOp::Rem => lhs.wrapping_rem(rhs),
                    BinOp::And => lhs & rhs,
                    BinOp::Or => lhs | rhs,
                    BinOp::Xor => lhs ^ rhs,
                }
            }

            fn shift(op: ShiftOp, lhs: $name, amount: u32) -> $name {
                match op {
                    ShiftOp::Shl => lhs << amount,
                    ShiftOp::Shr => lhs >> amount,
                }
            }

            fn unary(op: UnOp, x: $name) -> String {
                let high: fn($name) -> $hi = $high;
                let low: fn($name) -> u64 = $low;
                match op {
                    UnOp::Neg => x.wrapping_neg().to_string(),
                    UnOp::Not => (!x).to_string(),
                    UnOp::High64 => high(x).to_string(),
                    UnOp::Low64 => low(x).to_string(),
                }
            }

            fn from_f64(v: f64) -> $name {
                let f: fn(f64) -> $name = $from_f64;
                f(v)
            }

            fn to_f64(x: $name) -> f64 {
                let f: fn($name) -> f64 = $to_f64;
                f(x)
            }

            fn reinterpret(x: $name) -> $sibling {
                let f: fn($name) -> $sibling = $reinterpret;
                f(x)
            }
        }
    };
}
impl_backend!(uint128, int128, u64, {
    high64 => uint128::high64,
    low64 => uint128::low64,
    from_f64 => uint128::from_f64,
    to_f64 => uint128::to_f64,
    reinterpret => uint128::to_signed,
});
impl_backend!(int128, uint128, i64, {
    high64 => int128::high64,
    low64 => int128::low64,
    from_f64 => int128::from_f64,
    to_f64 => int128::to_f64,
    reinterpret => int128::to_unsigned,
});
impl_backend!(u128, i128, u64, {
    high64 => |x| (x >> 64) as u64,
    low64 => |x| x as u64,
    from_f64 => |v| v as u128,
    to_f64 => |x| crate::arith::u128_to_f64((x >> 64) as u64, x as u64),
    reinterpret => |x| x as i128,
});
impl_backend!(i128, u128, i64, {
    high64 => |x| (x >> 64) as i64,
    low64 => |x| x as u64,
    from_f64 => |v| v as i128,
    to_f64 => |x| crate::arith::i128_to_f64((x >> 64) as i64, x as u64),
    reinterpret => |x| x as u128,
});

/// Runs every case in `s`, with unsigned cases against `U` and
/// signed cases against `S`.
fn run<U: Backend, S: Backend>(s: &str) -> Result<usize> {
    let cases = parse(s)?;
    let mut failures = Vec::new();
    for case in &cases {
        let res = if case.signed {
            case.run::<S>()
        } else {
            case.run::<U>()
        };
        if let Err(err) = res {
            failures.push(err);
        }
    }
    for err in &failures {
        println!("{err}");
    }
    if failures.is_empty() {
        Ok(cases.len())
    } else {
        Err(anyhow!("{} of {} cases failed", failures.len(), cases.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPS: &str = include_str!("../../testdata/ops.vec");

    #[test]
    fn test_vectors() {
        let n = run::<uint128, int128>(OPS).unwrap();
        assert!(n > 0);
    }

    #[test]
    fn test_vectors_native() {
        run::<u128, i128>(OPS).unwrap();
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("add1 add 1 2").is_err());
        assert!(parse("x frob 1 -> 2").is_err());
        assert!(parse("type: octal").is_err());
        assert!(parse("-- only a comment").is_err());
    }
}
