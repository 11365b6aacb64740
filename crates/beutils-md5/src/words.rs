// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message packing into 32-bit words per RFC 1321 Sections 3.1 and 3.2

use alloc::vec;
use alloc::vec::Vec;

/// Words per 512-bit block
pub(crate) const BLOCK_WORDS: usize = 16;

/// Packs stuffed bytes into the padded little-endian word array.
///
/// The array is the smallest whole number of 16-word blocks holding the
/// message, one 0x80 padding byte, and the trailing 64-bit bit length.
/// Bytes land little-endian within each word; the bit length occupies the
/// final two words, low half first. Empty input still produces one block
/// carrying only the padding bit and a zero length.
pub(crate) fn pack_words(bytes: &[u8]) -> Vec<u32> {
    let len = bytes.len();
    let num_words = ((len + 8) / 64 + 1) * BLOCK_WORDS;
    let mut words = vec![0u32; num_words];

    for (i, &byte) in bytes.iter().enumerate() {
        words[i / 4] |= (byte as u32) << ((i % 4) * 8);
    }

    // One bit, then zeros, in the byte slot right after the message
    words[len / 4] |= 0x80u32 << ((len % 4) * 8);

    let bit_len = (len as u64) * 8;
    words[num_words - 2] = bit_len as u32;
    words[num_words - 1] = (bit_len >> 32) as u32;

    words
}
