// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::EventError;

type Handler<T> = Box<dyn FnMut(&T)>;

/// Named-event fan-out with caller-owned handler storage.
///
/// Handlers are `FnMut(&T)` closures grouped under event names. There is
/// no global registry: each emitter owns its handler lists outright.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use beutils_events::EventEmitter;
///
/// let mut emitter = EventEmitter::new();
/// let seen = Rc::new(Cell::new(0u32));
/// let sink = Rc::clone(&seen);
///
/// emitter.on("tick", move |n: &u32| sink.set(sink.get() + n)).unwrap();
///
/// assert_eq!(emitter.emit("tick", &3), 1);
/// assert_eq!(emitter.emit("tock", &3), 0);
/// assert_eq!(seen.get(), 3);
/// ```
pub struct EventEmitter<T> {
    events: BTreeMap<String, Vec<Handler<T>>>,
}

impl<T> EventEmitter<T> {
    /// Creates an emitter with no registered events.
    pub fn new() -> Self {
        Self {
            events: BTreeMap::new(),
        }
    }

    /// Registers a handler under an event name.
    ///
    /// Handlers for the same event run in registration order. An empty
    /// event name is rejected.
    pub fn on<F>(&mut self, event: &str, handler: F) -> Result<(), EventError>
    where
        F: FnMut(&T) + 'static,
    {
        if event.is_empty() {
            return Err(EventError::EmptyName);
        }

        self.events
            .entry(String::from(event))
            .or_default()
            .push(Box::new(handler));

        Ok(())
    }

    /// Invokes every handler registered for the event with the payload.
    ///
    /// Returns the number of handlers invoked; emitting an event nobody
    /// listens to is a no-op returning 0.
    pub fn emit(&mut self, event: &str, payload: &T) -> usize {
        let Some(handlers) = self.events.get_mut(event) else {
            return 0;
        };

        for handler in handlers.iter_mut() {
            handler(payload);
        }

        handlers.len()
    }

    /// Drops every handler registered for the event.
    pub fn clear(&mut self, event: &str) {
        self.events.remove(event);
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}
