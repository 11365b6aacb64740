// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Small utility belt, assembled from independent member crates:
//!
//! - [`md5`] — one-shot MD5 digest of text to lowercase hex (RFC 1321),
//!   with legacy browser-compatible byte stuffing. The digest is a
//!   checksum, not security; MD5 is cryptographically broken.
//! - [`events`] — caller-owned event emitter and observed value cell.
//! - [`util`] — hex rendering and slice chunking helpers.
//!
//! # Quick start
//!
//! ```
//! use beutils::md5::md5;
//! use beutils::util::chunks_of;
//!
//! assert_eq!(md5("message digest"), "f96b697d7cb7938d525a2f31aaf161d0");
//!
//! let pairs = chunks_of(&[1, 2, 3, 4, 5], 2)?;
//! assert_eq!(pairs, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! # Ok::<(), beutils::util::ChunkSizeError>(())
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use beutils_events as events;
pub use beutils_md5 as md5;
pub use beutils_util as util;
