// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Output device interface.

use crate::CaseType;

/// Board support hooks the engine reports through.
///
/// Implementations decide where text goes (console, log, memory) and which
/// case types are shown. Mutual exclusion of the counters is not part of this
/// trait; it is the raw mutex parameter of [`Reporter`](crate::Reporter).
pub trait UtBsp: Send + Sync {
    /// Writes one classified line of text.
    fn do_text(&self, case_type: CaseType, text: &str);

    /// Called when segment number `segment_num` named `name` begins.
    fn start_test_segment(&self, segment_num: u32, name: &str);
}

impl<T: UtBsp + ?Sized> UtBsp for &T {
    fn do_text(&self, case_type: CaseType, text: &str) {
        (**self).do_text(case_type, text)
    }

    fn start_test_segment(&self, segment_num: u32, name: &str) {
        (**self).start_test_segment(segment_num, name)
    }
}
