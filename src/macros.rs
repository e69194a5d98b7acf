// Implements "op &T" based on "op T", where T is `Copy`.
macro_rules! forward_ref_unop {
    (impl $imp:ident, $method:ident for $t:ty) => {
        impl ::core::ops::$imp for &$t {
            type Output = <$t as ::core::ops::$imp>::Output;

            #[inline]
            fn $method(self) -> <$t as ::core::ops::$imp>::Output {
                ::core::ops::$imp::$method(*self)
            }
        }
    };
}
pub(crate) use forward_ref_unop;

// Implements "&T op U", "T op &U" and "&T op &U" based on
// "T op U", where T and U are `Copy`.
macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl<'a> ::core::ops::$imp<$u> for &'a $t {
            type Output = <$t as ::core::ops::$imp<$u>>::Output;

            #[inline]
            #[track_caller]
            fn $method(self, other: $u) -> <$t as ::core::ops::$imp<$u>>::Output {
                ::core::ops::$imp::$method(*self, other)
            }
        }

        impl ::core::ops::$imp<&$u> for $t {
            type Output = <$t as ::core::ops::$imp<$u>>::Output;

            #[inline]
            #[track_caller]
            fn $method(self, other: &$u) -> <$t as ::core::ops::$imp<$u>>::Output {
                ::core::ops::$imp::$method(self, *other)
            }
        }

        impl ::core::ops::$imp<&$u> for &$t {
            type Output = <$t as ::core::ops::$imp<$u>>::Output;

            #[inline]
            #[track_caller]
            fn $method(self, other: &$u) -> <$t as ::core::ops::$imp<$u>>::Output {
                ::core::ops::$imp::$method(*self, *other)
            }
        }
    };
}
pub(crate) use forward_ref_binop;

// Implements "T op= &U" based on "T op= U", where U is `Copy`.
macro_rules! forward_ref_op_assign {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl ::core::ops::$imp<&$u> for $t {
            #[inline]
            #[track_caller]
            fn $method(&mut self, other: &$u) {
                ::core::ops::$imp::$method(self, *other);
            }
        }
    };
}
pub(crate) use forward_ref_op_assign;

// Implements a binary operator and its compound assignment
// operator for `$t` by calling the inherent `const fn` named on
// the right of each `=>`.
//
// The operators inherit the semantics of that method, so `+`
// wraps whenever `wrapping_add` does.
macro_rules! binop_impl {
    ($t:ty {
        $($imp:ident, $method:ident, $assign:ident, $assign_method:ident => $f:ident;)+
    }) => {$(
        impl ::core::ops::$imp for $t {
            type Output = $t;

            #[inline]
            #[track_caller]
            fn $method(self, other: $t) -> $t {
                <$t>::$f(self, other)
            }
        }

        impl ::core::ops::$assign for $t {
            #[inline]
            #[track_caller]
            fn $assign_method(&mut self, other: $t) {
                *self = <$t>::$f(*self, other);
            }
        }

        $crate::macros::forward_ref_binop! { impl $imp, $method for $t, $t }
        $crate::macros::forward_ref_op_assign! { impl $assign, $assign_method for $t, $t }
    )+};
}
pub(crate) use binop_impl;

// Implements a unary operator for `$t` by calling an inherent
// `const fn`.
macro_rules! unop_impl {
    ($t:ty { $($imp:ident, $method:ident => $f:ident;)+ }) => {$(
        impl ::core::ops::$imp for $t {
            type Output = $t;

            #[inline]
            fn $method(self) -> $t {
                <$t>::$f(self)
            }
        }

        $crate::macros::forward_ref_unop! { impl $imp, $method for $t }
    )+};
}
pub(crate) use unop_impl;

// Implements `<<`, `>>`, `<<=` and `>>=` for `$t` with each of
// the listed amount types.
//
// Amounts are converted to `u32` with `as`, so a negative amount
// becomes a huge one and trips the same debug assertion as any
// other out of range amount.
macro_rules! shift_impl {
    ($t:ty { $($u:ty),+ }) => {$(
        impl ::core::ops::Shl<$u> for $t {
            type Output = $t;

            #[inline]
            #[track_caller]
            #[allow(clippy::unnecessary_cast)]
            fn shl(self, amount: $u) -> $t {
                <$t>::shl(self, amount as u32)
            }
        }

        impl ::core::ops::Shr<$u> for $t {
            type Output = $t;

            #[inline]
            #[track_caller]
            #[allow(clippy::unnecessary_cast)]
            fn shr(self, amount: $u) -> $t {
                <$t>::shr(self, amount as u32)
            }
        }

        impl ::core::ops::ShlAssign<$u> for $t {
            #[inline]
            #[track_caller]
            #[allow(clippy::unnecessary_cast)]
            fn shl_assign(&mut self, amount: $u) {
                *self = <$t>::shl(*self, amount as u32);
            }
        }

        impl ::core::ops::ShrAssign<$u> for $t {
            #[inline]
            #[track_caller]
            #[allow(clippy::unnecessary_cast)]
            fn shr_assign(&mut self, amount: $u) {
                *self = <$t>::shr(*self, amount as u32);
            }
        }

        $crate::macros::forward_ref_binop! { impl Shl, shl for $t, $u }
        $crate::macros::forward_ref_binop! { impl Shr, shr for $t, $u }
        $crate::macros::forward_ref_op_assign! { impl ShlAssign, shl_assign for $t, $u }
        $crate::macros::forward_ref_op_assign! { impl ShrAssign, shr_assign for $t, $u }
    )+};
}
pub(crate) use shift_impl;

// Implements `From<$from>` for `$t` through an inherent
// constructor that accepts the widened source type.
macro_rules! from_impl {
    ($t:ty { $($from:ty),+ => $f:ident($wide:ty) }) => {$(
        impl From<$from> for $t {
            #[inline]
            fn from(v: $from) -> Self {
                <$t>::$f(<$wide>::from(v))
            }
        }
    )+};
}
pub(crate) use from_impl;
