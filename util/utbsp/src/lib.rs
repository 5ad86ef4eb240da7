// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Output devices for the [`utassert`] engine.
//!
//! Every sink applies the same verbosity filter from [`BspConfig`] and renders
//! the start of a test segment as a BEGIN line of the form `"01 Name"`.
//!
//! - [`LogBsp`] forwards lines to the [`log`] facade.
//! - [`ConsoleBsp`] writes colored lines to a text writer.
//! - [`CaptureBsp`] keeps lines in memory for inspection.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
extern crate log;

extern crate alloc;

mod capture;
mod config;
mod console;
mod log_bsp;

pub use capture::CaptureBsp;
pub use config::{BspConfig, BspError};
pub use console::{ConsoleBsp, LinePrefixed};
pub use log_bsp::{LOG_TARGET, LogBsp};
use utassert::{bounded::format_bounded, report::Message};

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        pub use console::{Stdout, StdoutDevice, local_time};
    }
}

/// Text of the BEGIN line announcing a test segment.
pub fn segment_banner(segment_num: u32, name: &str) -> Message {
    format_bounded(format_args!("{segment_num:02} {name}"))
}

/// Drops the trailing line break some engine messages carry.
fn line_text(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}
