// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte and slice helpers shared across the be-utils crates.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

/// Error returned by [`chunks_of`] for an unusable chunk size.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkSizeError {
    /// Chunk size must be at least 1
    #[error("chunk size must be at least 1")]
    ZeroSize,
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders a byte slice as lowercase hexadecimal.
///
/// Two digits per byte, most significant nibble first.
///
/// # Example
///
/// ```
/// use beutils_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
/// assert_eq!(bytes_to_hex(&[]), "");
/// ```
#[inline]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);

    for &byte in bytes {
        hex.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        hex.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }

    hex
}

/// Splits a slice into owned chunks of at most `size` elements.
///
/// Every chunk except possibly the last holds exactly `size` elements; the
/// last holds the remainder. An empty slice yields no chunks.
///
/// # Example
///
/// ```
/// use beutils_util::chunks_of;
///
/// let fib = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34];
/// let chunks = chunks_of(&fib, 3).unwrap();
///
/// assert_eq!(chunks, vec![vec![0, 1, 1], vec![2, 3, 5], vec![8, 13, 21], vec![34]]);
/// ```
#[inline]
pub fn chunks_of<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, ChunkSizeError> {
    if size == 0 {
        return Err(ChunkSizeError::ZeroSize);
    }

    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}
