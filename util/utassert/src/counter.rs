// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use strum::EnumCount;

use crate::CaseType;

/// Outcome tallies for one segment or for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestCounter {
    /// Number of completed segments (for a segment snapshot: its sequence
    /// number).
    pub test_segment_count: u32,
    /// Number of recorded cases, including any outside the per-type table.
    pub total_test_cases: u32,
    /// Per-type tallies, indexed by [`CaseType::index`].
    pub case_count: [u32; CaseType::COUNT],
}

impl TestCounter {
    pub const fn new() -> Self {
        Self {
            test_segment_count: 0,
            total_test_cases: 0,
            case_count: [0; CaseType::COUNT],
        }
    }

    /// Counts one case of type index `idx`.
    ///
    /// An index outside the table still counts toward the total.
    pub fn record_index(&mut self, idx: usize) {
        self.total_test_cases = self.total_test_cases.wrapping_add(1);
        if let Some(slot) = self.case_count.get_mut(idx) {
            *slot = slot.wrapping_add(1);
        }
    }

    pub fn record(&mut self, ty: CaseType) {
        self.record_index(ty.index());
    }

    pub fn count(&self, ty: CaseType) -> u32 {
        self.case_count[ty.index()]
    }

    /// Adds the totals and per-type tallies of `segment` into `self`.
    ///
    /// Segment counts are not touched.
    pub fn absorb(&mut self, segment: &TestCounter) {
        self.total_test_cases = self.total_test_cases.wrapping_add(segment.total_test_cases);
        for (total, seg) in self.case_count.iter_mut().zip(segment.case_count.iter()) {
            *total = total.wrapping_add(*seg);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
