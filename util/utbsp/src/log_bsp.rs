// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use log::Level;
use utassert::{CaseType, UtBsp};

use crate::{BspConfig, line_text, segment_banner};

/// Log target of every record emitted by [`LogBsp`].
pub const LOG_TARGET: &str = "utassert";

/// Sink that forwards report lines to the [`log`] facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogBsp {
    config: BspConfig,
}

impl LogBsp {
    pub const fn new(config: BspConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BspConfig {
        &self.config
    }

    /// Log level a line of `case_type` is emitted at.
    pub fn level(case_type: CaseType) -> Level {
        match case_type {
            CaseType::Abort | CaseType::Failure | CaseType::Tsf | CaseType::Ttf => Level::Error,
            CaseType::Mir | CaseType::Warn | CaseType::Na => Level::Warn,
            CaseType::Begin | CaseType::End | CaseType::Info | CaseType::Pass => Level::Info,
            CaseType::Flow => Level::Debug,
            CaseType::Debug | CaseType::None => Level::Trace,
        }
    }
}

impl UtBsp for LogBsp {
    fn do_text(&self, case_type: CaseType, text: &str) {
        if !self.config.shows(case_type) {
            return;
        }
        log!(
            target: LOG_TARGET,
            Self::level(case_type),
            "[{:>5}] {}",
            case_type.abbrev(),
            line_text(text)
        );
    }

    fn start_test_segment(&self, segment_num: u32, name: &str) {
        self.do_text(CaseType::Begin, &segment_banner(segment_num, name));
    }
}
