// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Assertion macros.
//!
//! Every macro takes the [`Reporter`](crate::Reporter) (or a reference to
//! it) as its first argument, records the call site with `file!()` /
//! `line!()` and evaluates to the assertion outcome.

/// Asserts `expr`, using its source text as the message.
#[macro_export]
macro_rules! ut_assert_simple {
    ($r:expr, $e:expr $(,)?) => {
        $r.assert($e, stringify!($e), file!(), line!())
    };
}

/// Asserts `expr` under the current context with a formatted message.
#[macro_export]
macro_rules! ut_assert_true {
    ($r:expr, $e:expr, $($arg:tt)+) => {{
        let r = &$r;
        r.assert_ex($e, r.context(), file!(), line!(), format_args!($($arg)+))
    }};
}

/// Same as [`ut_assert_true!`].
#[macro_export]
macro_rules! ut_assert_bool {
    ($r:expr, $e:expr, $($arg:tt)+) => {
        $crate::ut_assert_true!($r, $e, $($arg)+)
    };
}

/// Records an unconditional failure under the current context.
#[macro_export]
macro_rules! ut_assert_failed {
    ($r:expr, $($arg:tt)+) => {
        $crate::ut_assert_true!($r, false, $($arg)+)
    };
}

/// Asserts `expr`, recording a failure as the given case type.
///
/// ```ignore
/// ut_assert_type!(reporter, Tsf, setup_ok, "setup {}", step);
/// ```
#[macro_export]
macro_rules! ut_assert_type {
    ($r:expr, $ty:ident, $e:expr, $($arg:tt)+) => {
        $r.assert_ex($e, $crate::CaseType::$ty, file!(), line!(), format_args!($($arg)+))
    };
}

/// Records a not-applicable case.
#[macro_export]
macro_rules! ut_assert_na {
    ($r:expr, $($arg:tt)+) => {
        $crate::ut_assert_type!($r, Na, false, $($arg)+)
    };
}

/// Records a manual-inspection-required case.
#[macro_export]
macro_rules! ut_assert_mir {
    ($r:expr, $($arg:tt)+) => {
        $crate::ut_assert_type!($r, Mir, false, $($arg)+)
    };
}

/// Records a could-not-run case.
#[macro_export]
macro_rules! ut_assert_warn {
    ($r:expr, $($arg:tt)+) => {
        $crate::ut_assert_type!($r, Warn, false, $($arg)+)
    };
}

/// `|x - y| <= tolerance` on integers.
#[macro_export]
macro_rules! ut_assert_integer_cmp_abs {
    ($r:expr, $x:expr, $y:expr, $tol:expr, $($arg:tt)+) => {{
        let tol = ($tol) as i64;
        let within = tol >= 0 && (($x) as i64).abs_diff(($y) as i64) <= tol as u64;
        $crate::ut_assert_true!($r, within, $($arg)+)
    }};
}

/// `|x - y| <= tolerance` on floating point values.
#[macro_export]
macro_rules! ut_assert_double_cmp_abs {
    ($r:expr, $x:expr, $y:expr, $tol:expr, $($arg:tt)+) => {{
        let diff = ($x) as f64 - ($y) as f64;
        let diff = if diff < 0.0 { -diff } else { diff };
        $crate::ut_assert_true!($r, diff <= ($tol) as f64, $($arg)+)
    }};
}

/// `|x - y| / x <= ratio` on floating point values.
#[macro_export]
macro_rules! ut_assert_double_cmp_rel {
    ($r:expr, $x:expr, $y:expr, $ratio:expr, $($arg:tt)+) => {{
        let x = ($x) as f64;
        let diff = x - ($y) as f64;
        let diff = if diff < 0.0 { -diff } else { diff };
        $crate::ut_assert_true!($r, diff / x <= ($ratio) as f64, $($arg)+)
    }};
}

/// String equality with a caller message.
#[macro_export]
macro_rules! ut_assert_str_cmp {
    ($r:expr, $s1:expr, $s2:expr, $($arg:tt)+) => {{
        let equal = ::core::convert::AsRef::<str>::as_ref(&$s1)
            == ::core::convert::AsRef::<str>::as_ref(&$s2);
        $crate::ut_assert_true!($r, equal, $($arg)+)
    }};
}

/// `strncmp`-style equality: at most `len` bytes, stopping at a NUL.
#[macro_export]
macro_rules! ut_assert_strn_cmp {
    ($r:expr, $s1:expr, $s2:expr, $len:expr, $($arg:tt)+) => {{
        let equal = $crate::tools::strn_eq(
            ::core::convert::AsRef::<[u8]>::as_ref(&$s1),
            ::core::convert::AsRef::<[u8]>::as_ref(&$s2),
            $len,
        );
        $crate::ut_assert_true!($r, equal, $($arg)+)
    }};
}

/// Equality of the first `len` bytes of two buffers.
#[macro_export]
macro_rules! ut_assert_mem_cmp {
    ($r:expr, $m1:expr, $m2:expr, $len:expr, $($arg:tt)+) => {
        $crate::ut_assert_true!($r, $crate::tools::mem_eq(&$m1[..], &$m2[..], $len), $($arg)+)
    };
}

/// Every byte of `mem` equals `value`.
#[macro_export]
macro_rules! ut_assert_mem_cmp_value {
    ($r:expr, $mem:expr, $value:expr, $($arg:tt)+) => {
        $crate::ut_assert_true!($r, $crate::tools::mem_cmp_value(&$mem[..], $value), $($arg)+)
    };
}

/// `mem` holds the counting pattern `0, 1, 2, ...`.
#[macro_export]
macro_rules! ut_assert_mem_cmp_count {
    ($r:expr, $mem:expr, $($arg:tt)+) => {
        $crate::ut_assert_true!($r, $crate::tools::mem_cmp_count(&$mem[..]), $($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ut_signed {
    ($r:expr, $actual:expr, $op:ident, $reference:expr, $radix:ident, $tag:expr, $atext:expr, $rtext:expr) => {
        $r.generic_signed_compare(
            $actual,
            $crate::CompareOp::$op,
            $reference,
            $crate::Radix::$radix,
            file!(),
            line!(),
            $tag,
            $atext,
            $rtext,
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ut_unsigned {
    ($r:expr, $actual:expr, $op:ident, $reference:expr, $radix:ident, $tag:expr, $atext:expr, $rtext:expr) => {
        $r.generic_unsigned_compare(
            $actual,
            $crate::CompareOp::$op,
            $reference,
            $crate::Radix::$radix,
            file!(),
            line!(),
            $tag,
            $atext,
            $rtext,
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ut_int32 {
    ($r:expr, $actual:expr, $op:ident, $reference:expr) => {
        $crate::__ut_signed!(
            $r,
            ($actual) as i32 as i64,
            $op,
            ($reference) as i32 as i64,
            Decimal,
            "",
            stringify!($actual),
            stringify!($reference)
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ut_uint32 {
    ($r:expr, $actual:expr, $op:ident, $reference:expr) => {
        $crate::__ut_unsigned!(
            $r,
            ($actual) as u32 as u64,
            $op,
            ($reference) as u32 as u64,
            Decimal,
            "",
            stringify!($actual),
            stringify!($reference)
        )
    };
}

#[macro_export]
macro_rules! ut_assert_int32_eq {
    ($r:expr, $actual:expr, $reference:expr $(,)?) => {
        $crate::__ut_int32!($r, $actual, Eq, $reference)
    };
}

#[macro_export]
macro_rules! ut_assert_int32_neq {
    ($r:expr, $actual:expr, $reference:expr $(,)?) => {
        $crate::__ut_int32!($r, $actual, Neq, $reference)
    };
}

#[macro_export]
macro_rules! ut_assert_int32_lt {
    ($r:expr, $actual:expr, $reference:expr $(,)?) => {
        $crate::__ut_int32!($r, $actual, Lt, $reference)
    };
}

#[macro_export]
macro_rules! ut_assert_int32_gt {
    ($r:expr, $actual:expr, $reference:expr $(,)?) => {
        $crate::__ut_int32!($r, $actual, Gt, $reference)
    };
}

#[macro_export]
macro_rules! ut_assert_int32_lteq {
    ($r:expr, $actual:expr, $reference:expr $(,)?) => {
        $crate::__ut_int32!($r, $actual, LtEq, $reference)
    };
}

#[macro_export]
macro_rules! ut_assert_int32_gteq {
    ($r:expr, $actual:expr, $reference:expr $(,)?) => {
        $crate::__ut_int32!($r, $actual, GtEq, $reference)
    };
}

#[macro_export]
macro_rules! ut_assert_uint32_eq {
    ($r:expr, $actual:expr, $reference:expr $(,)?) => {
        $crate::__ut_uint32!($r, $actual, Eq, $reference)
    };
}

#[macro_export]
macro_rules! ut_assert_uint32_neq {
    ($r:expr, $actual:expr, $reference:expr $(,)?) => {
        $crate::__ut_uint32!($r, $actual, Neq, $reference)
    };
}

#[macro_export]
macro_rules! ut_assert_uint32_lt {
    ($r:expr, $actual:expr, $reference:expr $(,)?) => {
        $crate::__ut_uint32!($r, $actual, Lt, $reference)
    };
}

#[macro_export]
macro_rules! ut_assert_uint32_gt {
    ($r:expr, $actual:expr, $reference:expr $(,)?) => {
        $crate::__ut_uint32!($r, $actual, Gt, $reference)
    };
}

#[macro_export]
macro_rules! ut_assert_uint32_lteq {
    ($r:expr, $actual:expr, $reference:expr $(,)?) => {
        $crate::__ut_uint32!($r, $actual, LtEq, $reference)
    };
}

#[macro_export]
macro_rules! ut_assert_uint32_gteq {
    ($r:expr, $actual:expr, $reference:expr $(,)?) => {
        $crate::__ut_uint32!($r, $actual, GtEq, $reference)
    };
}

#[macro_export]
macro_rules! ut_assert_bool_true {
    ($r:expr, $e:expr $(,)?) => {
        $crate::__ut_unsigned!($r, ($e) as u64, Eq, 1, Decimal, "", stringify!($e), "true")
    };
}

#[macro_export]
macro_rules! ut_assert_bool_false {
    ($r:expr, $e:expr $(,)?) => {
        $crate::__ut_unsigned!($r, ($e) as u64, Eq, 0, Decimal, "", stringify!($e), "false")
    };
}

/// All bits of `mask` are set in `actual`.
#[macro_export]
macro_rules! ut_assert_bitmask_set {
    ($r:expr, $actual:expr, $mask:expr $(,)?) => {
        $crate::__ut_unsigned!(
            $r,
            ($actual) as u64,
            BitmaskSet,
            ($mask) as u64,
            Hex,
            "",
            stringify!($actual),
            stringify!($mask)
        )
    };
}

/// No bit of `mask` is set in `actual`.
#[macro_export]
macro_rules! ut_assert_bitmask_unset {
    ($r:expr, $actual:expr, $mask:expr $(,)?) => {
        $crate::__ut_unsigned!(
            $r,
            ($actual) as u64,
            BitmaskUnset,
            ($mask) as u64,
            Hex,
            "",
            stringify!($actual),
            stringify!($mask)
        )
    };
}

#[macro_export]
macro_rules! ut_assert_address_eq {
    ($r:expr, $actual:expr, $expect:expr $(,)?) => {
        $crate::__ut_unsigned!(
            $r,
            $crate::tools::address_of($actual),
            Eq,
            $crate::tools::address_of($expect),
            Hex,
            "",
            stringify!($actual),
            stringify!($expect)
        )
    };
}

#[macro_export]
macro_rules! ut_assert_null {
    ($r:expr, $actual:expr $(,)?) => {
        $crate::__ut_unsigned!(
            $r,
            $crate::tools::address_of($actual),
            Eq,
            0,
            Hex,
            "",
            stringify!($actual),
            "NULL"
        )
    };
}

#[macro_export]
macro_rules! ut_assert_not_null {
    ($r:expr, $actual:expr $(,)?) => {
        $crate::__ut_unsigned!(
            $r,
            $crate::tools::address_of($actual),
            Neq,
            0,
            Hex,
            "",
            stringify!($actual),
            "NULL"
        )
    };
}

#[macro_export]
macro_rules! ut_assert_zero {
    ($r:expr, $actual:expr $(,)?) => {
        $crate::__ut_signed!($r, ($actual) as i64, Eq, 0, Decimal, "", stringify!($actual), "ZERO")
    };
}

#[macro_export]
macro_rules! ut_assert_nonzero {
    ($r:expr, $actual:expr $(,)?) => {
        $crate::__ut_signed!($r, ($actual) as i64, Neq, 0, Decimal, "", stringify!($actual), "ZERO")
    };
}

/// Runs a call that has no result and records it as a pass.
#[macro_export]
macro_rules! ut_assert_voidcall {
    ($r:expr, $call:expr $(,)?) => {{
        $call;
        $r.assert(true, stringify!($call), file!(), line!())
    }};
}

/// Compares two bounded string buffers for equality.
#[macro_export]
macro_rules! ut_assert_stringbuf_eq {
    ($r:expr, $s1:expr, $max1:expr, $s2:expr, $max2:expr $(,)?) => {
        $r.string_buf_compare(
            &$s1[..],
            $max1,
            &$s2[..],
            $max2,
            $crate::CompareOp::Eq,
            file!(),
            line!(),
        )
    };
}

/// Checks how many times a stub was invoked.
#[macro_export]
macro_rules! ut_assert_stub_count {
    ($r:expr, $stub:ident, $count:expr, $expected:expr $(,)?) => {
        $crate::__ut_signed!(
            $r,
            ($count) as i64,
            Eq,
            ($expected) as i64,
            Decimal,
            "CallCount",
            concat!(stringify!($stub), "()"),
            stringify!($expected)
        )
    };
}
