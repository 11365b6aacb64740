// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;

type Handler<T> = Box<dyn FnMut(&T)>;

/// Value cell that notifies its handlers on every store.
///
/// Replaces proxy-style mutation observation with explicit ownership: the
/// cell holds the value, mutation happens only through [`Observed::set`],
/// and every registered handler sees the freshly stored value.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use beutils_events::Observed;
///
/// let mut name = Observed::new(String::from("nobody"));
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&log);
///
/// name.observe(move |value: &String| sink.borrow_mut().push(value.clone()));
///
/// name.set(String::from("Tom"));
/// assert_eq!(name.get(), "Tom");
/// assert_eq!(*log.borrow(), ["Tom"]);
/// ```
pub struct Observed<T> {
    value: T,
    handlers: Vec<Handler<T>>,
}

impl<T> Observed<T> {
    /// Wraps an initial value; the handler list starts empty.
    pub fn new(value: T) -> Self {
        Self {
            value,
            handlers: Vec::new(),
        }
    }

    /// Registers a handler called with each newly stored value.
    pub fn observe<F>(&mut self, handler: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Stores a new value, then notifies every handler with it.
    pub fn set(&mut self, value: T) {
        self.value = value;

        for handler in self.handlers.iter_mut() {
            handler(&self.value);
        }
    }

    /// Borrows the current value.
    pub fn get(&self) -> &T {
        &self.value
    }
}
