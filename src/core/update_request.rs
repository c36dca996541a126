//=========================================================================
// Update Request
//=========================================================================
//
// Per-frame mailbox through which the active context requests a stack
// mutation without touching the stack itself.
//
// Flow:
//   Context::handle_event / elapse ──request_push/request_pop──►
//     UpdateRequest ──take_*──► Engine (end of frame, after display)
//
// Two independent fields: at most one pending push (first write wins)
// and an idempotent pop flag. The engine consumes both fields exactly
// once per frame, resetting the mailbox for the next one.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::context::Context;
use crate::core::event::Event;

//=== UpdateRequest =======================================================

/// Single-frame mailbox for deferred context stack mutations.
///
/// Contexts receive a mutable reference to the mailbox during their
/// event and time phases; the engine drains it at the frame boundary.
/// When both a pop and a push are requested in the same frame, the pop
/// takes strict priority and the push is discarded.
pub struct UpdateRequest<E: Event> {
    pending_push: Option<Box<dyn Context<E>>>,
    pop_requested: bool,
}

impl<E: Event> UpdateRequest<E> {
    /// Creates an empty mailbox.
    pub fn new() -> Self {
        Self {
            pending_push: None,
            pop_requested: false,
        }
    }

    //--- Context-facing API ------------------------------------------------

    /// Requests that `context` be pushed at the end of the frame.
    ///
    /// First write wins: if a push is already pending this frame, the
    /// new context is dropped with a warning.
    pub fn request_push(&mut self, context: Box<dyn Context<E>>) {
        if self.pending_push.is_some() {
            warn!("A context push is already pending this frame, ignoring request");
            return;
        }
        self.pending_push = Some(context);
    }

    /// Requests that the active context be popped at the end of the
    /// frame. Idempotent.
    pub fn request_pop(&mut self) {
        self.pop_requested = true;
    }

    //--- Engine-facing API ---------------------------------------------------

    /// Returns and clears the pending push, if any.
    pub fn take_pending_push(&mut self) -> Option<Box<dyn Context<E>>> {
        self.pending_push.take()
    }

    /// Returns and clears the pop flag.
    pub fn take_pop_requested(&mut self) -> bool {
        std::mem::take(&mut self.pop_requested)
    }

    /// True when neither mutation is pending.
    pub fn is_empty(&self) -> bool {
        self.pending_push.is_none() && !self.pop_requested
    }
}

impl<E: Event> Default for UpdateRequest<E> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::ContextError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug)]
    enum TestEvent {}
    impl Event for TestEvent {}

    /// Context that reports its tag through display(), so tests can
    /// identify which pending push came out of the mailbox.
    struct Tagged {
        tag: &'static str,
        seen: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Tagged {
        fn new(tag: &'static str, seen: &Rc<RefCell<Vec<&'static str>>>) -> Box<Self> {
            Box::new(Self { tag, seen: Rc::clone(seen) })
        }
    }

    impl Context<TestEvent> for Tagged {
        fn handle_event(
            &mut self,
            _event: &TestEvent,
            _update: &mut UpdateRequest<TestEvent>,
        ) -> Result<(), ContextError> {
            Ok(())
        }

        fn elapse(
            &mut self,
            _ticks: u32,
            _update: &mut UpdateRequest<TestEvent>,
        ) -> Result<(), ContextError> {
            Ok(())
        }

        fn display(&mut self) -> Result<(), ContextError> {
            self.seen.borrow_mut().push(self.tag);
            Ok(())
        }
    }

    fn tag(
        update: &mut UpdateRequest<TestEvent>,
        seen: &Rc<RefCell<Vec<&'static str>>>,
    ) -> Option<&'static str> {
        let mut taken = update.take_pending_push()?;
        taken.display().unwrap();
        seen.borrow_mut().pop()
    }

    #[test]
    fn new_mailbox_is_empty() {
        let mut update = UpdateRequest::<TestEvent>::new();

        assert!(update.is_empty());
        assert!(update.take_pending_push().is_none());
        assert!(!update.take_pop_requested());
    }

    #[test]
    fn first_push_wins() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut update = UpdateRequest::<TestEvent>::new();

        update.request_push(Tagged::new("first", &seen));
        update.request_push(Tagged::new("second", &seen));

        assert_eq!(tag(&mut update, &seen), Some("first"));
        assert!(update.take_pending_push().is_none());
    }

    #[test]
    fn take_pending_push_clears_the_slot() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut update = UpdateRequest::<TestEvent>::new();

        update.request_push(Tagged::new("only", &seen));

        assert!(update.take_pending_push().is_some());
        assert!(update.is_empty());

        // The slot is reusable next frame.
        update.request_push(Tagged::new("next", &seen));
        assert_eq!(tag(&mut update, &seen), Some("next"));
    }

    #[test]
    fn request_pop_is_idempotent() {
        let mut update = UpdateRequest::<TestEvent>::new();

        update.request_pop();
        update.request_pop();
        update.request_pop();

        assert!(update.take_pop_requested());
        assert!(!update.take_pop_requested());
    }

    #[test]
    fn push_and_pop_fields_are_independent() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut update = UpdateRequest::<TestEvent>::new();

        update.request_push(Tagged::new("pushed", &seen));
        update.request_pop();

        assert!(update.take_pop_requested());
        assert!(update.take_pending_push().is_some());
        assert!(update.is_empty());
    }
}
