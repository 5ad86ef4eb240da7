// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Fixed-capacity text buffers that truncate instead of failing.
//!
//! Every report produced by the engine goes through these helpers, so a long
//! message can never overflow a buffer or abort an assertion; the tail of the
//! text is dropped instead.

use core::fmt::{self, Write};

use heapless::String;

/// Appends as much of `s` as fits into `buf`, cutting on a character boundary.
///
/// Returns `false` if anything was dropped.
pub fn push_truncated<const N: usize>(buf: &mut String<N>, s: &str) -> bool {
    let head = prefix(s, N - buf.len());
    let _ = buf.push_str(head);
    head.len() == s.len()
}

/// Longest prefix of `s` that is at most `max` bytes and ends on a character
/// boundary.
pub fn prefix(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Appends raw bytes, substituting U+FFFD for invalid UTF-8 sequences.
pub fn push_lossy<const N: usize>(buf: &mut String<N>, bytes: &[u8]) -> bool {
    for chunk in bytes.utf8_chunks() {
        if !push_truncated(buf, chunk.valid()) {
            return false;
        }
        if !chunk.invalid().is_empty() && !push_truncated(buf, "\u{FFFD}") {
            return false;
        }
    }
    true
}

/// [`fmt::Write`] adapter over a [`heapless::String`] that never reports an
/// error; overflow is recorded in `truncated` and the rest is discarded.
pub struct Truncating<'a, const N: usize> {
    buf: &'a mut String<N>,
    truncated: bool,
}

impl<'a, const N: usize> Truncating<'a, N> {
    pub fn new(buf: &'a mut String<N>) -> Self {
        Self {
            buf,
            truncated: false,
        }
    }

    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if !self.truncated && !push_truncated(self.buf, s) {
            self.truncated = true;
        }
        Ok(())
    }
}

/// Formats `args` into a fresh buffer of capacity `N`, truncating silently.
pub fn format_bounded<const N: usize>(args: fmt::Arguments<'_>) -> String<N> {
    let mut buf = String::new();
    let mut w = Truncating::new(&mut buf);
    let _ = w.write_fmt(args);
    buf
}
