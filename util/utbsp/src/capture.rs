// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use alloc::{string::String, vec::Vec};

use spin::Mutex;
use utassert::{CaseType, UtBsp};

use crate::{BspConfig, line_text, segment_banner};

/// Sink that records every shown line in memory.
#[derive(Default)]
pub struct CaptureBsp {
    config: BspConfig,
    lines: Mutex<Vec<(CaseType, String)>>,
}

impl CaptureBsp {
    pub const fn new(config: BspConfig) -> Self {
        Self {
            config,
            lines: Mutex::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &BspConfig {
        &self.config
    }

    /// Copy of the recorded lines, oldest first.
    pub fn lines(&self) -> Vec<(CaseType, String)> {
        self.lines.lock().clone()
    }

    /// Removes and returns the recorded lines.
    pub fn take(&self) -> Vec<(CaseType, String)> {
        core::mem::take(&mut *self.lines.lock())
    }

    /// Number of recorded lines of `case_type`.
    pub fn count(&self, case_type: CaseType) -> usize {
        self.lines
            .lock()
            .iter()
            .filter(|(ty, _)| *ty == case_type)
            .count()
    }
}

impl UtBsp for CaptureBsp {
    fn do_text(&self, case_type: CaseType, text: &str) {
        if self.config.shows(case_type) {
            self.lines.lock().push((case_type, line_text(text).into()));
        }
    }

    fn start_test_segment(&self, segment_num: u32, name: &str) {
        self.do_text(CaseType::Begin, &segment_banner(segment_num, name));
    }
}
