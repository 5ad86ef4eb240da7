//! Integer and string-buffer comparisons as reported through the engine.

#![cfg(test)]


use test_helpers::*;
use utassert::{
    CaseType, CompareOp, Operands, Radix,
    StrBufLen::{Bounded, NulTerminated},
};

// ========== Integer Comparisons ==========

#[test]
fn test_signed_message_layout() {
    let r = new_reporter();
    assert!(r.generic_signed_compare(
        -1,
        CompareOp::Lt,
        1,
        Radix::Default,
        "x/t.c",
        3,
        "",
        "value",
        "limit"
    ));
    assert_eq!(
        r.bsp().last_line(),
        (CaseType::Pass, "01.001 t.c:3 - value (-1) < limit (1)".to_string())
    );
}

#[test]
fn test_unsigned_reinterpretation_flips_ordering() {
    let r = new_reporter();
    assert!(!r.generic_unsigned_compare(
        u64::MAX,
        CompareOp::Lt,
        1,
        Radix::Decimal,
        "t.c",
        4,
        "",
        "a",
        "b"
    ));
    let (ty, line) = r.bsp().last_line();
    assert_eq!(ty, CaseType::Failure);
    assert_eq!(line, "01.001 t.c:4 - a (18446744073709551615) < b (1)");
}

#[test]
fn test_failure_type_ignores_context() {
    let r = new_reporter();
    r.set_context(CaseType::Tsf);
    r.generic_signed_compare(1, CompareOp::Eq, 2, Radix::Default, "t.c", 1, "", "a", "b");
    assert_eq!(r.bsp().last_line().0, CaseType::Failure);
}

#[test]
fn test_pointer_type_defaults_to_hex() {
    let r = new_reporter();
    r.generic_unsigned_compare(
        0x1000,
        CompareOp::Neq,
        0,
        Radix::Default,
        "t.c",
        1,
        "void *",
        "ptr",
        "NULL",
    );
    assert_eq!(
        r.bsp().last_line().1,
        "01.001 t.c:1 - void *: ptr (0x1000) != NULL (0x0)"
    );

    // an explicit radix wins over the pointer heuristic
    r.generic_unsigned_compare(8, CompareOp::Eq, 8, Radix::Octal, "t.c", 2, "int *", "p", "q");
    assert_eq!(r.bsp().last_line().1, "01.002 t.c:2 - int *: p (010) == q (010)");
}

#[test]
fn test_prefix_stripped_and_tag_added() {
    let r = new_reporter();
    r.generic_signed_compare(
        2,
        CompareOp::Eq,
        2,
        Radix::Decimal,
        "t.c",
        9,
        "CallCount: ",
        "UTASSERT_Stub()",
        "UTASSERT_EXPECTED",
    );
    assert_eq!(
        r.bsp().last_line().1,
        "01.001 t.c:9 - CallCount: Stub() (2) == EXPECTED (2)"
    );
}

#[test]
fn test_bitmask_and_boolean_rendering() {
    let r = new_reporter();
    assert!(r.generic_integer_compare(
        Operands::unsigned(0b110, 0b100),
        CompareOp::BitmaskSet,
        Radix::Hex,
        "t.c",
        1,
        "",
        "flags",
        "MASK"
    ));
    assert_eq!(r.bsp().last_line().1, "01.001 t.c:1 - flags (0x6) & MASK (0x4)");

    assert!(r.generic_integer_compare(
        Operands::unsigned(0b010, 0b100),
        CompareOp::BitmaskUnset,
        Radix::Hex,
        "t.c",
        2,
        "",
        "flags",
        "MASK"
    ));
    assert_eq!(r.bsp().last_line().1, "01.002 t.c:2 - flags (0x2) &~ MASK (0x4)");

    r.generic_unsigned_compare(1, CompareOp::Eq, 0, Radix::Boolean, "t.c", 3, "", "b", "false");
    assert_eq!(r.bsp().last_line().1, "01.003 t.c:3 - b (true) == false (false)");
}

#[test]
fn test_invalid_operator_is_false() {
    let r = new_reporter();
    assert!(!r.generic_signed_compare(0, CompareOp::None, 0, Radix::Default, "t.c", 1, "", "a", "b"));
    assert_eq!(r.bsp().last_line().1, "01.001 t.c:1 - a (0) ?? b (0)");
}

// ========== String Buffer Comparisons ==========

#[test]
fn test_empty_strings_are_equal() {
    let r = new_reporter();
    assert!(r.string_buf_compare(b"", Bounded(10), b"\0\0\0", Bounded(3), CompareOp::Eq, "s.c", 1));
    assert!(r.string_buf_compare(b"", NulTerminated, b"", Bounded(0), CompareOp::LtEq, "s.c", 2));
    assert_eq!(r.bsp().last_line().1, "01.002 s.c:2 - String: '' == ''");
}

#[test]
fn test_newline_affects_ordering_not_display() {
    let r = new_reporter();
    assert!(!r.string_buf_compare(b"ab\ncd", Bounded(5), b"ab", Bounded(2), CompareOp::Eq, "s.c", 7));
    assert_eq!(
        r.bsp().last_line(),
        (CaseType::Failure, "01.001 s.c:7 - String: 'ab' == 'ab'".to_string())
    );
    assert!(r.string_buf_compare(b"ab\ncd", Bounded(5), b"ab", Bounded(2), CompareOp::Gt, "s.c", 8));
}

#[test]
fn test_fixed_buffers_without_terminator() {
    let r = new_reporter();
    let name: [u8; 4] = *b"TASK";
    assert!(r.string_buf_compare(&name, Bounded(4), b"TASK\0", NulTerminated, CompareOp::Eq, "s.c", 1));
    // only the declared extent takes part
    assert!(r.string_buf_compare(b"TASKS", Bounded(4), b"TASK", Bounded(4), CompareOp::Eq, "s.c", 2));
    assert!(r.string_buf_compare(b"TASK\0junk", Bounded(16), b"TASK", NulTerminated, CompareOp::Eq, "s.c", 3));
}

#[test]
fn test_string_ordering_operators() {
    let r = new_reporter();
    assert!(r.string_compare("abc", "abd", CompareOp::Lt, "s.c", 1));
    assert!(r.string_compare("abc", "ab", CompareOp::GtEq, "s.c", 2));
    assert!(r.string_compare("abc", "abc", CompareOp::LtEq, "s.c", 3));
    assert!(r.string_compare("x", "y", CompareOp::Neq, "s.c", 4));
    assert!(!r.string_compare("x", "x", CompareOp::BitmaskSet, "s.c", 5));
    assert_eq!(r.segment_counters().count(CaseType::Pass), 4);
    assert_eq!(r.segment_counters().count(CaseType::Failure), 1);
}
