use anyhow::{bail, Context, Result};

use super::{BinOp, Case, Op, ShiftOp, UnOp};

/// Parses test vectors.
pub fn parse(s: &str) -> Result<Vec<Case<'_>>> {
    let mut signed = false;
    let mut cases = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("--") {
            // A comment.
            continue;
        }

        if let Some((_, v)) = line.split_once("type: ") {
            signed = match v.trim() {
                "unsigned" => false,
                "signed" => true,
                _ => bail!("#{i}: unknown type: `{v}`"),
            };
            continue;
        }

        let (name, rest) = line
            .split_once(' ')
            .with_context(|| format!("#{i}: test case missing name: `{line}`"))?;
        let op = parse_op(rest.trim()).with_context(|| format!("#{i}: unable to parse op: `{rest}`"))?;
        cases.push(Case {
            line: i + 1,
            signed,
            name,
            op,
        });
    }
    if cases.is_empty() {
        bail!("no test cases");
    }
    Ok(cases)
}

fn parse_op(s: &str) -> Result<Op<'_>> {
    let (args, result) = s
        .split_once("->")
        .with_context(|| "missing `->`")?;
    let result = result.trim();
    let mut args = args.split_whitespace();
    let name = args.next().with_context(|| "missing op name")?;
    let mut arg = |what: &str| {
        args.next()
            .with_context(|| format!("`{name}`: missing {what}"))
    };

    let binary = match name {
        "add" => Some(BinOp::Add),
        "sub" => Some(BinOp::Sub),
        "mul" => Some(BinOp::Mul),
        "div" => Some(BinOp::Div),
        "rem" => Some(BinOp::Rem),
        "and" => Some(BinOp::And),
        "or" => Some(BinOp::Or),
        "xor" => Some(BinOp::Xor),
        _ => None,
    };
    if let Some(kind) = binary {
        return Ok(Op::Binary {
            kind,
            lhs: arg("lhs")?,
            rhs: arg("rhs")?,
            result,
        });
    }

    let op = match name {
        "shl" | "shr" => Op::Shift {
            kind: if name == "shl" {
                ShiftOp::Shl
            } else {
                ShiftOp::Shr
            },
            lhs: arg("lhs")?,
            amount: arg("amount")?,
            result,
        },
        "neg" | "not" | "high64" | "low64" => Op::Unary {
            kind: match name {
                "neg" => UnOp::Neg,
                "not" => UnOp::Not,
                "high64" => UnOp::High64,
                _ => UnOp::Low64,
            },
            input: arg("input")?,
            result,
        },
        "cmp" => Op::Cmp {
            lhs: arg("lhs")?,
            rhs: arg("rhs")?,
            result,
        },
        "fromf64" => Op::FromF64 {
            input: arg("input")?,
            result,
        },
        "tof64" => Op::ToF64 {
            input: arg("input")?,
            result,
        },
        "reinterpret" => Op::Reinterpret {
            input: arg("input")?,
            result,
        },
        _ => bail!("unknown op: `{name}`"),
    };
    Ok(op)
}
