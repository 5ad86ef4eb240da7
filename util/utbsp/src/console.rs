// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use core::fmt::{self, Write};

use spin::Mutex;
use utassert::{CaseType, UtBsp};

use crate::{BspConfig, line_text, segment_banner};

macro_rules! color_fmt {
    ($color_code:expr, $($arg:tt)*) => {
        format_args!("\u{1B}[{}m{}\u{1B}[m", $color_code as u8, format_args!($($arg)*))
    };
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnsiColor {
    Red         = 31,
    Green       = 32,
    Yellow      = 33,
    Magenta     = 35,
    Cyan        = 36,
    White       = 37,
    BrightBlack = 90,
}

impl AnsiColor {
    fn of(case_type: CaseType) -> Self {
        match case_type {
            CaseType::Abort | CaseType::Failure => AnsiColor::Red,
            CaseType::Tsf | CaseType::Ttf => AnsiColor::Magenta,
            CaseType::Mir | CaseType::Warn | CaseType::Na => AnsiColor::Yellow,
            CaseType::Begin | CaseType::End => AnsiColor::Cyan,
            CaseType::Pass => AnsiColor::Green,
            CaseType::Info | CaseType::None => AnsiColor::White,
            CaseType::Flow | CaseType::Debug => AnsiColor::BrightBlack,
        }
    }
}

/// Sink that writes one text line per report to a character device.
///
/// Lines look like `[ PASS] 01.001 file.c:12 - message`, colored by case type
/// when [`BspConfig::color`] is set.
pub struct ConsoleBsp<W> {
    config: BspConfig,
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleBsp<W> {
    pub const fn new(config: BspConfig, out: W) -> Self {
        Self {
            config,
            out: Mutex::new(out),
        }
    }

    pub fn config(&self) -> &BspConfig {
        &self.config
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_line(&self, case_type: CaseType, text: &str) -> fmt::Result {
        let abbrev = case_type.abbrev();
        let text = line_text(text);
        let mut out = self.out.lock();
        if self.config.color {
            out.write_fmt(color_fmt!(
                AnsiColor::of(case_type),
                "[{abbrev:>5}] {text}"
            ))?;
            out.write_char('\n')
        } else {
            writeln!(out, "[{abbrev:>5}] {text}")
        }
    }
}

impl<W: Write + Send> UtBsp for ConsoleBsp<W> {
    fn do_text(&self, case_type: CaseType, text: &str) {
        if self.config.shows(case_type) {
            let _ = self.write_line(case_type, text);
        }
    }

    fn start_test_segment(&self, segment_num: u32, name: &str) {
        self.do_text(CaseType::Begin, &segment_banner(segment_num, name));
    }
}

/// Writer that emits a stamp in front of every line written through it.
pub struct LinePrefixed<W, F> {
    inner: W,
    stamp: F,
    line_start: bool,
}

impl<W: Write, F: FnMut(&mut W) -> fmt::Result> LinePrefixed<W, F> {
    pub const fn new(inner: W, stamp: F) -> Self {
        Self {
            inner,
            stamp,
            line_start: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write, F: FnMut(&mut W) -> fmt::Result> Write for LinePrefixed<W, F> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for line in s.split_inclusive('\n') {
            if self.line_start {
                (self.stamp)(&mut self.inner)?;
            }
            self.line_start = line.ends_with('\n');
            self.inner.write_str(line)?;
        }
        Ok(())
    }
}

/// The process's standard output as a [`fmt::Write`] device.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutDevice;

#[cfg(feature = "std")]
impl Write for StdoutDevice {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        use std::io::Write as _;

        std::io::stdout()
            .lock()
            .write_all(s.as_bytes())
            .map_err(|_| fmt::Error)
    }
}

/// Standard output with a per-line stamp.
#[cfg(feature = "std")]
pub type Stdout = LinePrefixed<StdoutDevice, fn(&mut StdoutDevice) -> fmt::Result>;

/// Writes the local time followed by a space.
#[cfg(feature = "std")]
pub fn local_time<W: Write>(out: &mut W) -> fmt::Result {
    write!(out, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f"))
}

#[cfg(feature = "std")]
fn no_stamp(_: &mut StdoutDevice) -> fmt::Result {
    Ok(())
}

#[cfg(feature = "std")]
impl ConsoleBsp<Stdout> {
    /// Console on the process's standard output.
    pub fn stdout(config: BspConfig) -> Self {
        let stamp: fn(&mut StdoutDevice) -> fmt::Result = no_stamp;
        Self::new(config, LinePrefixed::new(StdoutDevice, stamp))
    }

    /// Console on standard output with the local time in front of each line.
    pub fn stdout_timestamped(config: BspConfig) -> Self {
        let stamp: fn(&mut StdoutDevice) -> fmt::Result = local_time::<StdoutDevice>;
        Self::new(config, LinePrefixed::new(StdoutDevice, stamp))
    }
}
