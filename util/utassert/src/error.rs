// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

/// Errors from setup paths. Assertions themselves never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UtError {
    #[error("a process-wide reporter is already installed")]
    AlreadyInstalled,
    #[error("unknown case type name")]
    UnknownCaseType,
}

impl From<strum::ParseError> for UtError {
    fn from(_: strum::ParseError) -> Self {
        Self::UnknownCaseType
    }
}

pub type UtResult<T = ()> = Result<T, UtError>;
