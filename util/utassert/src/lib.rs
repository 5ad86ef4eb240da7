// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Unit-test assertion and reporting engine.
//!
//! Assertions are classified into [`CaseType`]s, counted per test segment and
//! in total, and reported as single text lines through a [`UtBsp`]
//! implementation. All buffers are fixed-capacity; overlong text is
//! truncated, never an error.
//!
//! ```ignore
//! let reporter: Reporter<_> = Reporter::new(bsp);
//! reporter.begin_test("Demo");
//! ut_assert_int32_eq!(reporter, compute(), 42);
//! reporter.end_test();
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

mod bsp;
mod case_type;
mod counter;
mod error;
mod macros;
mod reporter;

pub mod bounded;
pub mod compare;
pub mod global;
pub mod report;
pub mod strbuf;
pub mod tools;

pub use bsp::UtBsp;
pub use case_type::{CaseType, OTHER_ABBREV, abbrev_raw};
pub use compare::{CompareOp, Operands, Radix, value_text};
pub use counter::TestCounter;
pub use error::{UtError, UtResult};
pub use reporter::{Reporter, SEGMENT_NAME_CAPACITY, SegmentName};
pub use strbuf::StrBufLen;
