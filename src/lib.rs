//! `wide128` is a pure Rust, no-std implementation of unsigned
//! and signed 128-bit integers built from two 64-bit limbs.
//!
//! The types behave like hardware integers of the same width:
//! arithmetic wraps modulo 2^128, shifts are logical for
//! [`uint128`] and arithmetic for [`int128`], and converting
//! between the two preserves the bit pattern.
//!
//! ```rust
//! use wide128::{int128, uint128};
//!
//! let x = uint128::from(1u64) + uint128::from(u64::MAX);
//! assert_eq!(x, uint128::from_parts(1, 0));
//! assert_eq!(x.to_string(), "18446744073709551616");
//!
//! assert_eq!(int128::MIN >> 127, int128::from(-1));
//! ```
//!
//! # Cargo Features
//!
//! - `intrinsic`: Back the types with the native `u128` and
//! `i128` instead of the two-limb engine. Results are identical
//! either way.
//!
//! - `rand`: Enable [`rand`] support.
//!
//! - `std`: Include [`std`] support. Implements
//! [`std::error::Error`] for [`ParseError`].
//!
//! - `slow-tests`: Run larger randomized test corpora.
//!
//! [`rand`]: https://crates.io/crates/rand
//! [`std`]: https://doc.rust-lang.org/std/

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::ptr_as_ptr)]
#![deny(clippy::string_slice)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

mod arith;
mod conv;
pub mod decimal;
#[cfg_attr(not(feature = "intrinsic"), allow(dead_code))]
mod hard;
mod limbs;
mod macros;
mod repr;
mod signed;
#[cfg_attr(feature = "intrinsic", allow(dead_code))]
mod soft;
mod unsigned;
mod util;
#[cfg(test)]
mod vectors;

pub use conv::ParseError;
pub use signed::int128;
pub use unsigned::uint128;

/// Simplifies importing common items.
pub mod prelude {
    pub use super::{int128, uint128};
}
