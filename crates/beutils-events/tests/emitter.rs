// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use beutils_events::{EventEmitter, EventError};

    #[test]
    fn test_handler_receives_payload() {
        let mut emitter = EventEmitter::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        emitter
            .on("change", move |v: &i32| sink.borrow_mut().push(*v))
            .unwrap();

        emitter.emit("change", &7);
        emitter.emit("change", &8);

        assert_eq!(*seen.borrow(), [7, 8]);
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let mut emitter = EventEmitter::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            emitter.on("go", move |_: &()| sink.borrow_mut().push(tag)).unwrap();
        }

        assert_eq!(emitter.emit("go", &()), 3);
        assert_eq!(*order.borrow(), ["first", "second", "third"]);
    }

    #[test]
    fn test_unknown_event_is_a_noop() {
        let mut emitter: EventEmitter<u8> = EventEmitter::new();

        assert_eq!(emitter.emit("missing", &0), 0);
    }

    #[test]
    fn test_empty_event_name_rejected() {
        let mut emitter: EventEmitter<u8> = EventEmitter::new();

        assert_eq!(emitter.on("", |_| {}), Err(EventError::EmptyName));
    }

    #[test]
    fn test_clear_drops_handlers() {
        let mut emitter = EventEmitter::new();

        emitter.on("tick", |_: &u8| {}).unwrap();
        emitter.on("tick", |_: &u8| {}).unwrap();
        assert_eq!(emitter.emit("tick", &0), 2);

        emitter.clear("tick");
        assert_eq!(emitter.emit("tick", &0), 0);
    }

    #[test]
    fn test_events_are_independent() {
        let mut emitter = EventEmitter::new();
        let hits = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&hits);

        emitter.on("a", move |_: &()| *sink.borrow_mut() += 1).unwrap();
        emitter.on("b", |_: &()| {}).unwrap();

        emitter.emit("b", &());
        assert_eq!(*hits.borrow(), 0);

        emitter.emit("a", &());
        assert_eq!(*hits.borrow(), 1);
    }
}
