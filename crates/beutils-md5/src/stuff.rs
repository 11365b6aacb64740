// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text-to-byte stuffing for the digest input

use alloc::vec::Vec;

/// Stuffs text into the byte sequence the digest consumes.
///
/// CRLF pairs normalize to LF first. Each UTF-16 code unit of the result
/// then expands to 1-3 bytes: ASCII passes through, units below 0x800 take
/// two bytes, everything else takes three. Walking code units rather than
/// scalar values means the surrogate halves of a supplementary-plane
/// character each expand to three bytes (CESU-8). That is deliberate:
/// emitting true four-byte UTF-8 would change digests for any input beyond
/// the Basic Multilingual Plane relative to the legacy stuffing.
pub(crate) fn stuff_utf8(text: &str) -> Vec<u8> {
    let normalized = text.replace("\r\n", "\n");
    let mut stuffed = Vec::with_capacity(normalized.len());

    for unit in normalized.encode_utf16() {
        if unit < 0x80 {
            stuffed.push(unit as u8);
        } else if unit < 0x800 {
            stuffed.push(0xc0 | (unit >> 6) as u8);
            stuffed.push(0x80 | (unit & 0x3f) as u8);
        } else {
            stuffed.push(0xe0 | (unit >> 12) as u8);
            stuffed.push(0x80 | ((unit >> 6) & 0x3f) as u8);
            stuffed.push(0x80 | (unit & 0x3f) as u8);
        }
    }

    stuffed
}
