// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MD5 compression and the public one-shot digest

use alloc::string::String;

use beutils_util::bytes_to_hex;

use crate::consts::{INIT, SHIFTS, SINE};
use crate::stuff::stuff_utf8;
use crate::words::{BLOCK_WORDS, pack_words};

/// F(x,y,z) = (x & y) | (!x & z) per RFC 1321 Section 3.4
#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// G(x,y,z) = (x & z) | (y & !z) per RFC 1321 Section 3.4
#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

/// H(x,y,z) = x ^ y ^ z per RFC 1321 Section 3.4
#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// I(x,y,z) = y ^ (x | !z) per RFC 1321 Section 3.4
#[inline(always)]
fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Mixes one 16-word block into the register state.
///
/// 64 steps, 16 per round. Each step folds one message word, one additive
/// constant, and one rotation into the cycling A,D,C,B register order;
/// rounds 2-4 revisit the block through their fixed index schedules. All
/// additions wrap modulo 2^32.
fn compress(state: &mut [u32; 4], block: &[u32]) {
    let [mut a, mut b, mut c, mut d] = *state;

    for step in 0..64 {
        let (mixed, idx) = match step / 16 {
            0 => (f(b, c, d), step),
            1 => (g(b, c, d), (5 * step + 1) % 16),
            2 => (h(b, c, d), (3 * step + 5) % 16),
            _ => (i(b, c, d), (7 * step) % 16),
        };

        let rotated = a
            .wrapping_add(mixed)
            .wrapping_add(block[idx])
            .wrapping_add(SINE[step])
            .rotate_left(SHIFTS[step]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

/// Digests text into a 32-character lowercase hexadecimal MD5 digest.
///
/// Deterministic and total: every input, including the empty string,
/// produces a digest, and nothing can fail. Text is stuffed to bytes as
/// described at the crate level before hashing, so supplementary-plane
/// characters digest as CESU-8.
///
/// # Example
///
/// ```
/// use beutils_md5::md5;
///
/// assert_eq!(md5(""), "d41d8cd98f00b204e9800998ecf8427e");
/// assert_eq!(md5("abc"), "900150983cd24fb0d6963f7d28e17f72");
/// ```
pub fn md5(text: &str) -> String {
    let stuffed = stuff_utf8(text);
    let words = pack_words(&stuffed);

    let mut state = INIT;
    for block in words.chunks_exact(BLOCK_WORDS) {
        compress(&mut state, block);
    }

    // Registers fold out A,B,C,D, least-significant byte first
    let mut folded = [0u8; 16];
    for (slot, register) in folded.chunks_exact_mut(4).zip(state) {
        slot.copy_from_slice(&register.to_le_bytes());
    }

    bytes_to_hex(&folded)
}
