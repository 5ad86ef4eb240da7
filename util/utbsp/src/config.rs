// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use alloc::string::String;

use utassert::{CaseType, UtError};

/// Errors from sink configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BspError {
    #[error("unknown verbosity level `{level}`")]
    UnknownVerbosity {
        level: String,
        #[source]
        source: UtError,
    },
}

/// Output settings shared by all sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BspConfig {
    /// Least severe case type still shown.
    pub verbosity: CaseType,
    /// Colorize console output.
    pub color: bool,
}

impl Default for BspConfig {
    fn default() -> Self {
        Self {
            verbosity: CaseType::Pass,
            color: true,
        }
    }
}

impl BspConfig {
    /// Sets the verbosity from a case type name or abbreviation, e.g. `"debug"`
    /// or `"N/A"`.
    pub fn set_verbosity(&mut self, level: &str) -> Result<(), BspError> {
        self.verbosity = level
            .trim()
            .parse::<CaseType>()
            .map_err(|e| BspError::UnknownVerbosity {
                level: level.into(),
                source: e.into(),
            })?;
        Ok(())
    }

    pub fn with_verbosity(mut self, verbosity: CaseType) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Whether a line of `case_type` passes the verbosity filter.
    ///
    /// Aborts are always shown.
    pub fn shows(&self, case_type: CaseType) -> bool {
        case_type == CaseType::Abort || case_type <= self.verbosity
    }
}
