// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::stuff::stuff_utf8;

#[test]
fn test_ascii_passes_through() {
    assert_eq!(stuff_utf8("abc"), b"abc");
    assert_eq!(stuff_utf8(""), b"");
}

#[test]
fn test_two_byte_unit() {
    // U+0416, 0x80..0x800 range
    assert_eq!(stuff_utf8("\u{0416}"), [0xd0, 0x96]);
}

#[test]
fn test_three_byte_unit() {
    // U+20AC, at or above 0x800
    assert_eq!(stuff_utf8("\u{20ac}"), [0xe2, 0x82, 0xac]);
}

#[test]
fn test_surrogate_pair_expands_to_six_bytes() {
    // U+1F600 is the UTF-16 pair d83d de00; each half stuffs to 3 bytes
    assert_eq!(
        stuff_utf8("\u{1f600}"),
        [0xed, 0xa0, 0xbd, 0xed, 0xb8, 0x80]
    );
}

#[test]
fn test_crlf_normalized_before_stuffing() {
    assert_eq!(stuff_utf8("a\r\nb"), b"a\nb");
}

#[test]
fn test_lone_carriage_return_kept() {
    assert_eq!(stuff_utf8("a\rb"), b"a\rb");
}
