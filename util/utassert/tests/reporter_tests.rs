//! Segment lifecycle and counter bookkeeping.

#![cfg(test)]


use strum::IntoEnumIterator;
use test_helpers::*;
use utassert::{CaseType, TestCounter};

// ========== Assertion Recording ==========

#[test]
fn test_demo_segment_end_to_end() {
    let r = new_reporter();
    r.begin_test("Demo");
    assert!(!r.assert_ex(false, CaseType::Failure, "demo.c", 10, format_args!("first")));
    assert!(r.assert_ex(true, CaseType::Failure, "demo.c", 11, format_args!("second")));
    r.end_test();

    let totals = r.counters();
    assert_eq!(totals.total_test_cases, 2);
    assert_eq!(totals.count(CaseType::Failure), 1);
    assert_eq!(totals.count(CaseType::Pass), 1);
    assert_eq!(totals.test_segment_count, 1);
    assert_eq!(r.pass_count(), 1);
    assert_eq!(r.fail_count(), 1);

    let lines = r.bsp().lines();
    assert_eq!(lines[0], (CaseType::Failure, "01.001 demo.c:10 - first".to_string()));
    assert_eq!(lines[1], (CaseType::Pass, "01.002 demo.c:11 - second".to_string()));
    assert_eq!(lines[2].0, CaseType::Info);
    assert_eq!(
        lines[3],
        (
            CaseType::End,
            "01 Demo                 TOTAL::2     PASS::1     FAIL::1     MIR::0     TSF::0     TTF::0   "
                .to_string()
        )
    );
    assert_eq!(r.bsp().segments(), vec![(1, "Demo".to_string())]);
}

#[test]
fn test_pass_always_wins_classification() {
    let r = new_reporter();
    r.begin_test("force");
    for ty in CaseType::iter() {
        r.assert_ex(true, ty, "f.c", 1, format_args!("t"));
        assert_eq!(r.bsp().last_line().0, CaseType::Pass);
        r.assert_ex(false, ty, "f.c", 1, format_args!("f"));
        assert_eq!(r.bsp().last_line().0, ty);
    }
    let seg = r.segment_counters();
    assert_eq!(seg.count(CaseType::Pass), CaseType::iter().count() as u32 + 1);
}

#[test]
fn test_simple_assert_uses_context() {
    let r = new_reporter();
    assert_eq!(r.context(), CaseType::Failure);
    r.set_context(CaseType::Tsf);
    assert!(!r.assert(false, "setup step", "dir/setup.c", 5));
    assert_eq!(
        r.bsp().last_line(),
        (CaseType::Tsf, "01.001 setup.c:5 - setup step".to_string())
    );
    r.set_context(CaseType::Ttf);
    r.assert(false, "teardown", "t.c", 6);
    assert_eq!(r.bsp().last_line().0, CaseType::Ttf);
    assert_eq!(r.segment_counters().count(CaseType::Tsf), 1);
    assert_eq!(r.segment_counters().count(CaseType::Ttf), 1);
}

#[test]
fn test_segment_total_matches_per_type_sum() {
    let r = new_reporter();
    r.begin_test("sum");
    let outcomes = [
        (false, CaseType::Warn),
        (true, CaseType::Failure),
        (false, CaseType::Mir),
        (false, CaseType::Na),
        (false, CaseType::Flow),
        (false, CaseType::Debug),
        (false, CaseType::Abort),
    ];
    for (expr, ty) in outcomes {
        r.assert_ex(expr, ty, "s.c", 1, format_args!("case"));
    }
    let seg = r.segment_counters();
    assert_eq!(seg.total_test_cases, outcomes.len() as u32);
    assert_eq!(seg.case_count.iter().sum::<u32>(), seg.total_test_cases);

    r.end_test();
    let lines = r.bsp().lines();
    let minor = &lines[lines.len() - 2];
    assert_eq!(
        minor.1,
        "                       ABORT::1     WARN::1     FLOW::1     DEBUG::1     N/A::1   "
    );
}

// ========== Segment Lifecycle ==========

#[test]
fn test_empty_segment_leaves_totals_alone() {
    let r = new_reporter();
    r.begin_test("one");
    r.assert_ex(true, CaseType::Failure, "a.c", 1, format_args!("ok"));
    r.end_test();
    let before = r.counters();

    r.begin_test("empty");
    r.end_test();
    r.end_test();

    assert_eq!(r.counters(), before);
    assert_eq!(
        r.bsp().last_line(),
        (CaseType::End, "No test cases\n".to_string())
    );
}

#[test]
fn test_segment_numbers_advance_only_on_folded_segments() {
    let r = new_reporter();
    r.begin_test("first");
    r.assert_ex(true, CaseType::Failure, "a.c", 1, format_args!("x"));
    r.end_test();

    r.begin_test("skipped");
    r.end_test();

    r.begin_test("second");
    r.assert_ex(true, CaseType::Failure, "a.c", 2, format_args!("y"));
    assert!(r.bsp().last_line().1.starts_with("02.001 "));
    r.end_test();

    let segs: Vec<u32> = r.bsp().segments().iter().map(|s| s.0).collect();
    assert_eq!(segs, vec![1, 2, 2]);
    assert_eq!(r.counters().test_segment_count, 2);
}

#[test]
fn test_cumulative_equals_sum_of_segments() {
    let r = new_reporter();
    let mut expected = TestCounter::new();
    for (seg, cases) in [3u32, 0, 5, 1].into_iter().enumerate() {
        r.begin_test(&format!("seg{seg}"));
        for i in 0..cases {
            let ok = i % 2 == 0;
            r.assert_ex(ok, CaseType::Failure, "c.c", i, format_args!("{i}"));
        }
        expected.absorb(&r.segment_counters());
        r.end_test();
    }
    let totals = r.counters();
    assert_eq!(totals.case_count, expected.case_count);
    assert_eq!(totals.total_test_cases, 9);
    assert_eq!(totals.test_segment_count, 3);
}

#[test]
fn test_begin_test_discards_unfinished_segment() {
    let r = new_reporter();
    r.begin_test("abandoned");
    r.assert_ex(false, CaseType::Failure, "a.c", 1, format_args!("lost"));
    r.begin_test("fresh");
    assert_eq!(r.segment_counters(), TestCounter::new());
    r.end_test();
    assert_eq!(r.counters().total_test_cases, 0);
}

#[test]
fn test_segment_name_is_truncated() {
    let r = new_reporter();
    let long = "n".repeat(100);
    r.begin_test(&long);
    assert_eq!(r.segment_name().len(), utassert::SEGMENT_NAME_CAPACITY);
    // the sink is told the full name
    assert_eq!(r.bsp().segments()[0].1, long);
    r.begin_test("short");
    assert_eq!(r.segment_name().as_str(), "short");

    // two-byte characters: 31 of them fill 62 of the 63 bytes
    let wide = "\u{00e9}".repeat(40);
    r.begin_test(&wide);
    assert_eq!(r.segment_name().as_str(), "\u{00e9}".repeat(31));
    assert_eq!(r.bsp().segments()[2].1, wide);
}

// ========== Direct Output ==========

#[test]
fn test_abort_bypasses_counters() {
    let r = new_reporter();
    r.begin_test("abort");
    r.abort("cannot continue");
    assert_eq!(
        r.bsp().last_line(),
        (CaseType::Abort, "cannot continue".to_string())
    );
    assert_eq!(r.segment_counters().total_test_cases, 0);
}

#[test]
fn test_message_prefix() {
    let r = new_reporter();
    r.message(CaseType::Info, Some("src/x/file.c"), 12, format_args!("value={}", 3));
    assert_eq!(
        r.bsp().last_line(),
        (CaseType::Info, "file.c:12:value=3".to_string())
    );
    r.message(CaseType::Debug, None, 12, format_args!("bare"));
    assert_eq!(r.bsp().last_line(), (CaseType::Debug, "bare".to_string()));
    assert_eq!(r.segment_counters().total_test_cases, 0);
}

#[test]
fn test_long_message_is_truncated_not_rejected() {
    let r = new_reporter();
    let long = "m".repeat(1000);
    assert!(r.assert_ex(true, CaseType::Failure, "f.c", 1, format_args!("{long}")));
    let (_, line) = r.bsp().last_line();
    assert_eq!(line.len(), "01.001 f.c:1 - ".len() + 255);
}
