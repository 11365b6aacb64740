// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Caller-owned event plumbing.
//!
//! [`EventEmitter`] fans a payload out to handlers registered under event
//! names; [`Observed`] is a value cell that notifies its handlers on every
//! store. Neither type touches global state: instances are constructed
//! explicitly and mutated only through `&mut self`, so ownership and
//! lifetime of every handler list is visible at the call site.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod emitter;
mod error;
mod observed;

pub use emitter::EventEmitter;
pub use error::EventError;
pub use observed::Observed;
