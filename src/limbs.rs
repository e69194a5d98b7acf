//! Physical storage for the limb engine.
//!
//! The limbs are laid out in the target's byte order so that a
//! value has the same bytes as the native 128-bit integer it
//! stands for.

use core::mem::size_of;

use super::util::const_assert;

macro_rules! limbs {
    ($(#[$meta:meta])* $name:ident, $hi:ty) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
        pub(crate) struct $name {
            #[cfg(target_endian = "little")]
            lo: u64,
            hi: $hi,
            #[cfg(target_endian = "big")]
            lo: u64,
        }

        impl $name {
            /// Creates the limb pair `hi * 2^64 + lo`.
            ///
            /// Every bit pattern is accepted.
            pub const fn new(hi: $hi, lo: u64) -> Self {
                Self { hi, lo }
            }

            /// Returns the high limb.
            pub const fn hi(self) -> $hi {
                self.hi
            }

            /// Returns the low limb.
            pub const fn lo(self) -> u64 {
                self.lo
            }
        }

        const_assert!(size_of::<$name>() == 16);
    };
}

limbs! {
    /// The limbs of an unsigned 128-bit integer.
    ULimbs, u64
}

limbs! {
    /// The limbs of a signed 128-bit integer.
    ///
    /// The sign lives in `hi`.
    ILimbs, i64
}
