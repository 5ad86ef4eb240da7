// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Assertion recording and segment bookkeeping.

use core::{
    fmt,
    sync::atomic::{AtomicU8, Ordering},
};

use heapless::String;
use lock_api::{Mutex, RawMutex};

use crate::{
    CaseType, TestCounter, UtBsp,
    bounded::{format_bounded, prefix, push_truncated},
    compare::{CompareOp, Operands, Radix},
    report::{self, Message, format_message},
    strbuf::{StrBufLen, compare_bufs, logical_len, scrub},
};

/// Capacity of the current segment name.
pub const SEGMENT_NAME_CAPACITY: usize = 63;
/// Capacity of the `type: ` tag in comparison messages.
const TYPE_TAG_CAPACITY: usize = 31;
/// Longest type name kept before the `": "` suffix is added.
const TYPE_NAME_MAX: usize = TYPE_TAG_CAPACITY - 2;
/// Prefix stripped from operand texts generated by stub helpers.
const UTASSERT_PREFIX: &str = "UTASSERT_";

pub type SegmentName = String<SEGMENT_NAME_CAPACITY>;

/// Counter state shared by all workers, only touched under the lock.
struct Ledger {
    segment: TestCounter,
    total: TestCounter,
    segment_name: SegmentName,
}

impl Ledger {
    const fn new() -> Self {
        Self {
            segment: TestCounter::new(),
            total: TestCounter::new(),
            segment_name: String::new(),
        }
    }

    /// Folds the live segment into the totals and returns a snapshot of it.
    fn fold(&mut self) -> (TestCounter, SegmentName) {
        self.total.test_segment_count = self.total.test_segment_count.wrapping_add(1);
        self.segment.test_segment_count = self.total.test_segment_count;
        self.total.absorb(&self.segment);
        (self.segment, self.segment_name.clone())
    }
}

/// The assertion engine.
///
/// Holds the segment and cumulative counters behind a raw mutex `R` and
/// reports through the board support hooks `B`. Counter updates are the only
/// work done while the lock is held; message formatting and output happen
/// after it is released.
///
/// The default context ([`Reporter::set_context`]) is not guarded by the
/// lock. The test driver owns it and must not switch phases from several
/// threads at once.
pub struct Reporter<B, R: RawMutex = spin::Mutex<()>> {
    bsp: B,
    ledger: Mutex<R, Ledger>,
    context: AtomicU8,
}

impl<B: UtBsp, R: RawMutex> Reporter<B, R> {
    /// Creates a reporter with all counters zeroed and a FAILURE context.
    pub const fn new(bsp: B) -> Self {
        Self {
            bsp,
            ledger: Mutex::const_new(R::INIT, Ledger::new()),
            context: AtomicU8::new(CaseType::Failure as u8),
        }
    }

    pub fn bsp(&self) -> &B {
        &self.bsp
    }

    /// Sets the case type used by assertions that do not name one.
    pub fn set_context(&self, context: CaseType) {
        self.context.store(context as u8, Ordering::Relaxed);
    }

    pub fn context(&self) -> CaseType {
        CaseType::from_repr(self.context.load(Ordering::Relaxed)).unwrap_or(CaseType::Failure)
    }

    /// Starts a new test segment, discarding any unfinished segment tallies.
    pub fn begin_test(&self, segment_name: &str) {
        let segment_num = {
            let mut ledger = self.ledger.lock();
            ledger.segment.reset();
            ledger.segment_name.clear();
            push_truncated(&mut ledger.segment_name, segment_name);
            ledger.total.test_segment_count.wrapping_add(1)
        };

        trace!("begin segment {segment_num:02}: {segment_name}");
        self.bsp.start_test_segment(segment_num, segment_name);
    }

    /// Closes the current segment.
    ///
    /// A segment with at least one case is added to the cumulative counters
    /// and summarized; an empty one only produces a notice.
    pub fn end_test(&self) {
        let folded = {
            let mut ledger = self.ledger.lock();
            let folded = if ledger.segment.total_test_cases > 0 {
                Some(ledger.fold())
            } else {
                None
            };
            ledger.segment.reset();
            folded
        };

        match folded {
            Some((counters, name)) => {
                trace!(
                    "end segment {:02}: {} cases",
                    counters.test_segment_count, counters.total_test_cases
                );
                report::do_test_segment_report(&self.bsp, &name, &counters);
            }
            None => {
                trace!("end segment: empty");
                self.bsp.do_text(CaseType::End, "No test cases\n");
            }
        }
    }

    /// Name given to the most recent [`begin_test`](Self::begin_test).
    pub fn segment_name(&self) -> SegmentName {
        self.ledger.lock().segment_name.clone()
    }

    /// Cumulative PASS count.
    pub fn pass_count(&self) -> u32 {
        self.ledger.lock().total.count(CaseType::Pass)
    }

    /// Cumulative FAILURE count.
    pub fn fail_count(&self) -> u32 {
        self.ledger.lock().total.count(CaseType::Failure)
    }

    /// Snapshot of the cumulative counters.
    pub fn counters(&self) -> TestCounter {
        self.ledger.lock().total
    }

    /// Snapshot of the live segment counters.
    pub fn segment_counters(&self) -> TestCounter {
        self.ledger.lock().segment
    }

    /// Records `expression` under the current context.
    pub fn assert(&self, expression: bool, description: &str, file: &str, line: u32) -> bool {
        self.assert_ex(
            expression,
            self.context(),
            file,
            line,
            format_args!("{description}"),
        )
    }

    /// Records one assertion and emits its report line.
    ///
    /// A true `expression` is always recorded as PASS; a false one as
    /// `case_type`. Returns `expression` unchanged.
    pub fn assert_ex(
        &self,
        expression: bool,
        case_type: CaseType,
        file: &str,
        line: u32,
        message: fmt::Arguments<'_>,
    ) -> bool {
        let case_type = if expression {
            CaseType::Pass
        } else {
            case_type
        };

        let (segment_num, test_seq) = {
            let mut ledger = self.ledger.lock();
            ledger.segment.record(case_type);
            (
                ledger.total.test_segment_count.wrapping_add(1),
                ledger.segment.total_test_cases,
            )
        };

        let message: Message = format_bounded(message);
        report::do_report(
            &self.bsp, file, line, segment_num, test_seq, case_type, &message,
        );

        expression
    }

    /// Reports a fatal condition. Not counted as a case.
    pub fn abort(&self, message: &str) {
        self.bsp.do_text(CaseType::Abort, message);
    }

    /// Emits a free-form message, prefixed with `file:line:` when a file is
    /// given. Not counted as a case.
    pub fn message(
        &self,
        case_type: CaseType,
        file: Option<&str>,
        line: u32,
        message: fmt::Arguments<'_>,
    ) {
        let text = format_message(file, line, message);
        self.bsp.do_text(case_type, &text);
    }

    /// Compares two integers and records the outcome as a FAILURE-type case.
    ///
    /// `type_name` becomes a `type: ` tag in front of the message; a pointer
    /// looking type name (containing `*`) switches the default radix to hex.
    #[allow(clippy::too_many_arguments)]
    pub fn generic_integer_compare(
        &self,
        operands: Operands,
        op: CompareOp,
        radix: Radix,
        file: &str,
        line: u32,
        type_name: &str,
        actual_text: &str,
        ref_text: &str,
    ) -> bool {
        let radix = if radix == Radix::Default && type_name.contains('*') {
            Radix::Hex
        } else {
            radix
        };
        let tag = type_tag(type_name);
        let actual_text = actual_text
            .strip_prefix(UTASSERT_PREFIX)
            .unwrap_or(actual_text);
        let ref_text = ref_text.strip_prefix(UTASSERT_PREFIX).unwrap_or(ref_text);
        let (actual, reference) = operands.render(radix);

        self.assert_ex(
            operands.evaluate(op),
            CaseType::Failure,
            file,
            line,
            format_args!(
                "{tag}{actual_text} ({actual}) {} {ref_text} ({reference})",
                op.text()
            ),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn generic_signed_compare(
        &self,
        actual: i64,
        op: CompareOp,
        reference: i64,
        radix: Radix,
        file: &str,
        line: u32,
        type_name: &str,
        actual_text: &str,
        ref_text: &str,
    ) -> bool {
        self.generic_integer_compare(
            Operands::signed(actual, reference),
            op,
            radix,
            file,
            line,
            type_name,
            actual_text,
            ref_text,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn generic_unsigned_compare(
        &self,
        actual: u64,
        op: CompareOp,
        reference: u64,
        radix: Radix,
        file: &str,
        line: u32,
        type_name: &str,
        actual_text: &str,
        ref_text: &str,
    ) -> bool {
        self.generic_integer_compare(
            Operands::unsigned(actual, reference),
            op,
            radix,
            file,
            line,
            type_name,
            actual_text,
            ref_text,
        )
    }

    /// Compares two string buffers, each bounded by its declared extent.
    ///
    /// The whole logical content takes part in the comparison; the report
    /// shows each string only up to its first newline.
    pub fn string_buf_compare(
        &self,
        string1: &[u8],
        string1_max: StrBufLen,
        string2: &[u8],
        string2_max: StrBufLen,
        op: CompareOp,
        file: &str,
        line: u32,
    ) -> bool {
        let s1 = &string1[..logical_len(string1, string1_max)];
        let s2 = &string2[..logical_len(string2, string2_max)];
        let result = op.holds(compare_bufs(s1, s2));

        let (scrubbed1, scrubbed2) = (scrub(s1), scrub(s2));
        self.assert_ex(
            result,
            CaseType::Failure,
            file,
            line,
            format_args!("String: '{scrubbed1}' == '{scrubbed2}'"),
        )
    }

    /// [`string_buf_compare`](Self::string_buf_compare) on two unbounded strings.
    pub fn string_compare(
        &self,
        string1: &str,
        string2: &str,
        op: CompareOp,
        file: &str,
        line: u32,
    ) -> bool {
        self.string_buf_compare(
            string1.as_bytes(),
            StrBufLen::NulTerminated,
            string2.as_bytes(),
            StrBufLen::NulTerminated,
            op,
            file,
            line,
        )
    }
}

fn type_tag(type_name: &str) -> String<TYPE_TAG_CAPACITY> {
    let mut tag = String::new();
    let name = prefix(type_name, TYPE_NAME_MAX)
        .trim_end_matches(|c: char| c.is_ascii_whitespace() || c == ':');
    if !name.is_empty() {
        push_truncated(&mut tag, name);
        push_truncated(&mut tag, ": ");
    }
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tag_trims_and_suffixes() {
        assert_eq!(type_tag("").as_str(), "");
        assert_eq!(type_tag("CallCount").as_str(), "CallCount: ");
        assert_eq!(type_tag("uint32 : ").as_str(), "uint32: ");
        assert_eq!(type_tag(" :: ").as_str(), "");
        let long = type_tag("abcdefghijklmnopqrstuvwxyz0123456789");
        assert_eq!(long.as_str(), "abcdefghijklmnopqrstuvwxyz012: ");
    }
}
