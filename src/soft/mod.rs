//! The two-limb engine.
//!
//! Every operation is synthesized from 64-bit limb arithmetic
//! with explicit carries and borrows. The only wider primitive
//! used is the 128-by-64 division in [`crate::arith::div64`].

mod int;
mod uint;

pub(crate) use int::SoftI128;
pub(crate) use uint::SoftU128;
