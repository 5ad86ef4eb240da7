// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Memory content checks used with the assertion macros.

/// True if every byte of `mem` equals `value`.
pub fn mem_cmp_value(mem: &[u8], value: u8) -> bool {
    mem.iter().all(|&b| b == value)
}

/// True if `mem` holds the counting pattern `0, 1, 2, ...` (wrapping at 256).
pub fn mem_cmp_count(mem: &[u8]) -> bool {
    mem.iter().enumerate().all(|(i, &b)| b == i as u8)
}

/// True if the first `len` bytes of both buffers exist and match.
pub fn mem_eq(mem1: &[u8], mem2: &[u8], len: usize) -> bool {
    match (mem1.get(..len), mem2.get(..len)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// `strncmp(s1, s2, len) == 0`: compares at most `len` bytes and stops after
/// a NUL. The end of a slice reads as a NUL.
pub fn strn_eq(s1: &[u8], s2: &[u8], len: usize) -> bool {
    for i in 0..len {
        let a = s1.get(i).copied().unwrap_or(0);
        let b = s2.get(i).copied().unwrap_or(0);
        if a != b {
            return false;
        }
        if a == 0 {
            break;
        }
    }
    true
}

/// Address of `ptr` as an integer, for pointer comparisons.
pub fn address_of<T: ?Sized>(ptr: *const T) -> u64 {
    ptr.cast::<()>() as usize as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_pattern() {
        assert!(mem_cmp_value(&[0xa5; 16], 0xa5));
        assert!(!mem_cmp_value(&[0xa5, 0xa5, 0], 0xa5));
        assert!(mem_cmp_value(&[], 0));
    }

    #[test]
    fn mem_eq_needs_both_lengths() {
        assert!(mem_eq(b"abcd", b"abcx", 3));
        assert!(!mem_eq(b"abcd", b"abcx", 4));
        assert!(!mem_eq(b"ab", b"abcd", 3));
    }

    #[test]
    fn strn_eq_stops_at_len_and_nul() {
        assert!(strn_eq(b"abcX", b"abcY", 3));
        assert!(!strn_eq(b"abcX", b"abcY", 4));
        assert!(strn_eq(b"ab\0X", b"ab\0Y", 8));
        assert!(strn_eq(b"ab", b"ab\0junk", 16));
        assert!(!strn_eq(b"ab", b"abc", 3));
        assert!(strn_eq(b"x", b"y", 0));
        assert!(strn_eq(b"", b"", usize::MAX));
    }

    #[test]
    fn count_pattern_wraps() {
        let buf: [u8; 300] = core::array::from_fn(|i| i as u8);
        assert!(mem_cmp_count(&buf));
        let mut bad = buf;
        bad[257] = 0;
        assert!(!mem_cmp_count(&bad));
    }
}
