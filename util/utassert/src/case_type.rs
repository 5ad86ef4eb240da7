// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Severity taxonomy for assertion outcomes and report lines.

use strum::{EnumCount, EnumIter, EnumString, FromRepr};

/// Classification of a single report line or assertion outcome.
///
/// Variants are declared from most to least severe, so the derived ordering
/// can be used directly as a verbosity filter (`ty <= threshold`).
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCount, EnumIter, EnumString, FromRepr,
)]
#[strum(ascii_case_insensitive)]
pub enum CaseType {
    /// Reserved, never recorded as an outcome.
    #[strum(serialize = "NONE")]
    None    = 0,
    /// Test sequence abort, the run cannot continue.
    #[strum(serialize = "ABORT")]
    Abort   = 1,
    /// Test case failure.
    #[strum(serialize = "FAILURE", serialize = "FAIL")]
    Failure = 2,
    /// Test setup failure.
    #[strum(serialize = "TSF")]
    Tsf     = 3,
    /// Test teardown failure.
    #[strum(serialize = "TTF")]
    Ttf     = 4,
    /// Manual inspection required.
    #[strum(serialize = "MIR")]
    Mir     = 5,
    /// Test was unable to run, e.g. initial condition wrong.
    #[strum(serialize = "WARN")]
    Warn    = 6,
    /// Test not applicable.
    #[strum(serialize = "NA", serialize = "N/A")]
    Na      = 7,
    /// Start of a test segment.
    #[strum(serialize = "BEGIN")]
    Begin   = 8,
    /// End of a test segment.
    #[strum(serialize = "END")]
    End     = 9,
    /// Other informational messages.
    #[strum(serialize = "INFO")]
    Info    = 10,
    /// Test case passed.
    #[strum(serialize = "PASS")]
    Pass    = 11,
    /// Records test flow, not an assertion.
    #[strum(serialize = "FLOW")]
    Flow    = 12,
    /// Debugging messages.
    #[strum(serialize = "DEBUG")]
    Debug   = 13,
}

/// Label used for values outside the taxonomy, and for [`CaseType::None`].
pub const OTHER_ABBREV: &str = "OTHER";

impl CaseType {
    /// Short (at most five characters) label used in console output.
    ///
    /// Never empty; [`CaseType::None`] maps to [`OTHER_ABBREV`].
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Abort => "ABORT",
            Self::Failure => "FAIL",
            Self::Mir => "MIR",
            Self::Tsf => "TSF",
            Self::Ttf => "TTF",
            Self::Warn => "WARN",
            Self::Na => "N/A",
            Self::Begin => "BEGIN",
            Self::End => "END",
            Self::Pass => "PASS",
            Self::Info => "INFO",
            Self::Flow => "FLOW",
            Self::Debug => "DEBUG",
            Self::None => OTHER_ABBREV,
        }
    }

    /// Index into [`TestCounter::case_count`](crate::TestCounter::case_count).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Abbreviation lookup for a raw case type value, total over `u8`.
pub fn abbrev_raw(raw: u8) -> &'static str {
    CaseType::from_repr(raw).map_or(OTHER_ABBREV, CaseType::abbrev)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn abbreviations_are_short_and_non_empty() {
        for ty in CaseType::iter() {
            let abbrev = ty.abbrev();
            assert!(!abbrev.is_empty());
            assert!(abbrev.len() <= 5, "{abbrev} too long");
        }
    }

    #[test]
    fn out_of_range_maps_to_fallback() {
        assert_eq!(abbrev_raw(CaseType::COUNT as u8), "OTHER");
        assert_eq!(abbrev_raw(u8::MAX), "OTHER");
        assert_eq!(abbrev_raw(0), "OTHER");
        assert_eq!(abbrev_raw(2), "FAIL");
    }

    #[test]
    fn severity_order_matches_declaration() {
        assert!(CaseType::Abort < CaseType::Failure);
        assert!(CaseType::Pass < CaseType::Flow);
        assert!(CaseType::Flow < CaseType::Debug);
        assert_eq!(CaseType::COUNT, 14);
    }

    #[test]
    fn parses_names_and_abbreviations() {
        assert_eq!("fail".parse::<CaseType>(), Ok(CaseType::Failure));
        assert_eq!("Failure".parse::<CaseType>(), Ok(CaseType::Failure));
        assert_eq!("n/a".parse::<CaseType>(), Ok(CaseType::Na));
        assert_eq!("debug".parse::<CaseType>(), Ok(CaseType::Debug));
        assert!("bogus".parse::<CaseType>().is_err());
    }
}
