// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Report line layout.
//!
//! The layouts here are consumed by log post-processing tools and must not
//! change, including padding.

use core::fmt;

use heapless::String;

use crate::{CaseType, TestCounter, UtBsp, bounded::format_bounded};

/// Capacity of a formatted assertion message.
pub const MESSAGE_CAPACITY: usize = 255;
/// Capacity of one report line.
pub const REPORT_CAPACITY: usize = 319;
/// Capacity of one segment summary line.
pub const SUMMARY_CAPACITY: usize = 143;

pub type Message = String<MESSAGE_CAPACITY>;

/// Strips directories (either separator) from a source path.
pub fn basename(file: &str) -> &str {
    match file.rfind(['/', '\\']) {
        Some(pos) => &file[pos + 1..],
        None => file,
    }
}

/// `SS.CCC file:line - message`
pub fn format_report(
    file: &str,
    line: u32,
    segment_num: u32,
    test_seq: u32,
    message: &str,
) -> String<REPORT_CAPACITY> {
    format_bounded(format_args!(
        "{:02}.{:03} {}:{} - {}",
        segment_num,
        test_seq,
        basename(file),
        line,
        message
    ))
}

/// Formats and emits one assertion report line.
pub fn do_report<B: UtBsp + ?Sized>(
    bsp: &B,
    file: &str,
    line: u32,
    segment_num: u32,
    test_seq: u32,
    case_type: CaseType,
    message: &str,
) {
    let text = format_report(file, line, segment_num, test_seq, message);
    bsp.do_text(case_type, &text);
}

/// The two summary lines of a completed segment.
pub fn format_segment_report(
    segment_name: &str,
    counters: &TestCounter,
) -> (String<SUMMARY_CAPACITY>, String<SUMMARY_CAPACITY>) {
    let minor = format_bounded(format_args!(
        "{:<22} ABORT::{:<4}  WARN::{:<4}  FLOW::{:<4}  DEBUG::{:<4}  N/A::{:<4}",
        "",
        counters.count(CaseType::Abort),
        counters.count(CaseType::Warn),
        counters.count(CaseType::Flow),
        counters.count(CaseType::Debug),
        counters.count(CaseType::Na),
    ));
    let totals = format_bounded(format_args!(
        "{:02} {:<20} TOTAL::{:<4}  PASS::{:<4}  FAIL::{:<4}  MIR::{:<4}  TSF::{:<4}  TTF::{:<4}",
        counters.test_segment_count,
        segment_name,
        counters.total_test_cases,
        counters.count(CaseType::Pass),
        counters.count(CaseType::Failure),
        counters.count(CaseType::Mir),
        counters.count(CaseType::Tsf),
        counters.count(CaseType::Ttf),
    ));
    (minor, totals)
}

/// Emits the segment summary: minor tallies as INFO, totals as END.
pub fn do_test_segment_report<B: UtBsp + ?Sized>(
    bsp: &B,
    segment_name: &str,
    counters: &TestCounter,
) {
    let (minor, totals) = format_segment_report(segment_name, counters);
    bsp.do_text(CaseType::Info, &minor);
    bsp.do_text(CaseType::End, &totals);
}

/// `file:line:message`, or just the message when there is no file.
pub fn format_message(file: Option<&str>, line: u32, args: fmt::Arguments<'_>) -> Message {
    match file {
        Some(file) => format_bounded(format_args!("{}:{}:{}", basename(file), line, args)),
        None => format_bounded(args),
    }
}
