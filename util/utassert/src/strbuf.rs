// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Comparison of possibly unterminated string buffers.

use core::cmp::Ordering;

use heapless::String;

use crate::bounded::push_lossy;

/// Capacity of the display copy of each compared string.
pub const SCRUB_CAPACITY: usize = 255;

/// Declared extent of a string buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrBufLen {
    /// Length unknown, ends at the first NUL byte (or at the end of the slice).
    NulTerminated,
    /// Fixed-size buffer of at most this many bytes, which may or may not
    /// contain a NUL terminator.
    Bounded(usize),
}

/// Logical length of `buf` under the declared extent.
///
/// Never inspects bytes past `max` for [`StrBufLen::Bounded`].
pub fn logical_len(buf: &[u8], len: StrBufLen) -> usize {
    let window = match len {
        StrBufLen::NulTerminated => buf,
        StrBufLen::Bounded(max) => &buf[..max.min(buf.len())],
    };
    memchr::memchr(0, window).unwrap_or(window.len())
}

/// Three-way comparison of two logical strings.
///
/// The shorter prefix is compared bytewise; if it matches, the longer string
/// orders after the shorter one.
pub fn compare_bufs(s1: &[u8], s2: &[u8]) -> Ordering {
    if s1.is_empty() && s2.is_empty() {
        return Ordering::Equal;
    }
    let common = s1.len().min(s2.len());
    s1[..common]
        .cmp(&s2[..common])
        .then(s1.len().cmp(&s2.len()))
}

/// Display copy of `s`, cut at the first newline so reports stay on one line.
pub fn scrub(s: &[u8]) -> String<SCRUB_CAPACITY> {
    let end = memchr::memchr(b'\n', s).unwrap_or(s.len());
    let mut out = String::new();
    push_lossy(&mut out, &s[..end]);
    out
}
