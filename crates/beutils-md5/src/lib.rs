// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MD5 digest per RFC 1321, one-shot, text in / lowercase hex out.
//!
//! Input text is stuffed to bytes the way legacy browser hashers do it:
//! CRLF pairs normalize to LF and UTF-16 code units expand individually,
//! so supplementary-plane characters hash as CESU-8 rather than four-byte
//! UTF-8. See [`md5`] and the `stuff` module for the exact rules.
//!
//! MD5 is cryptographically broken. This crate exists for legacy digest
//! and checksum compatibility, nothing else.
//!
//! References:
//! - RFC 1321: The MD5 Message-Digest Algorithm
//!   <https://datatracker.ietf.org/doc/html/rfc1321>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod digest;
mod stuff;
mod words;

pub use digest::md5;
