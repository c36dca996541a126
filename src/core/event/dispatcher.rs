//=========================================================================
// Event Dispatcher
//=========================================================================
//
// Routes events to per-device sub-handlers.
//
// Architecture:
//   Context::handle_event ──► EventDispatcher
//                               ├─ (matches?, keyboard handler)
//                               ├─ (matches?, mouse handler)
//                               └─ (matches?, window handler)
//
// A context with several input domains registers one handler per domain
// instead of growing a monolithic match. The first route whose predicate
// accepts the event handles it; unmatched events are dropped.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Event;
use crate::core::context::ContextError;
use crate::core::update_request::UpdateRequest;

//=== EventHandler Trait ==================================================

/// Handles events on behalf of a context.
///
/// The same mailbox rules apply as for [`crate::core::context::Context`]:
/// handlers request stack mutations through the [`UpdateRequest`], never
/// directly.
pub trait EventHandler<E: Event> {
    fn handle_event(
        &mut self,
        event: &E,
        update: &mut UpdateRequest<E>,
    ) -> Result<(), ContextError>;
}

//=== EventDispatcher =====================================================

type Predicate<E> = Box<dyn Fn(&E) -> bool>;

/// Predicate-routed fan-out of events to registered sub-handlers.
///
/// Routes are consulted in registration order; the first match wins.
pub struct EventDispatcher<E: Event> {
    routes: Vec<(Predicate<E>, Box<dyn EventHandler<E>>)>,
}

impl<E: Event> EventDispatcher<E> {
    /// Creates a dispatcher with no routes; every event is dropped until
    /// a route is registered.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers `handler` for every event accepted by `matches`.
    pub fn register<F>(&mut self, matches: F, handler: Box<dyn EventHandler<E>>)
    where
        F: Fn(&E) -> bool + 'static,
    {
        self.routes.push((Box::new(matches), handler));
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True when no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<E: Event> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> EventHandler<E> for EventDispatcher<E> {
    fn handle_event(
        &mut self,
        event: &E,
        update: &mut UpdateRequest<E>,
    ) -> Result<(), ContextError> {
        for (matches, handler) in &mut self.routes {
            if matches(event) {
                return handler.handle_event(event, update);
            }
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestEvent {
        Key(char),
        Mouse { x: i32, y: i32 },
    }
    impl Event for TestEvent {}

    /// Records every event it receives into a shared log.
    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<(&'static str, TestEvent)>>>,
    }

    impl EventHandler<TestEvent> for Recorder {
        fn handle_event(
            &mut self,
            event: &TestEvent,
            _update: &mut UpdateRequest<TestEvent>,
        ) -> Result<(), ContextError> {
            self.log.borrow_mut().push((self.name, *event));
            Ok(())
        }
    }

    fn recorder(
        name: &'static str,
        log: &Rc<RefCell<Vec<(&'static str, TestEvent)>>>,
    ) -> Box<Recorder> {
        Box::new(Recorder { name, log: Rc::clone(log) })
    }

    #[test]
    fn events_route_to_the_matching_handler() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();
        let mut update = UpdateRequest::new();

        dispatcher.register(
            |e| matches!(e, TestEvent::Key(_)),
            recorder("keyboard", &log),
        );
        dispatcher.register(
            |e| matches!(e, TestEvent::Mouse { .. }),
            recorder("mouse", &log),
        );

        dispatcher
            .handle_event(&TestEvent::Key('a'), &mut update)
            .unwrap();
        dispatcher
            .handle_event(&TestEvent::Mouse { x: 3, y: 4 }, &mut update)
            .unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                ("keyboard", TestEvent::Key('a')),
                ("mouse", TestEvent::Mouse { x: 3, y: 4 }),
            ]
        );
    }

    #[test]
    fn first_matching_route_wins() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();
        let mut update = UpdateRequest::new();

        dispatcher.register(|_| true, recorder("catch-all", &log));
        dispatcher.register(
            |e| matches!(e, TestEvent::Key(_)),
            recorder("keyboard", &log),
        );

        dispatcher
            .handle_event(&TestEvent::Key('z'), &mut update)
            .unwrap();

        assert_eq!(*log.borrow(), vec![("catch-all", TestEvent::Key('z'))]);
    }

    #[test]
    fn unmatched_events_are_dropped() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();
        let mut update = UpdateRequest::new();

        dispatcher.register(
            |e| matches!(e, TestEvent::Key(_)),
            recorder("keyboard", &log),
        );

        dispatcher
            .handle_event(&TestEvent::Mouse { x: 0, y: 0 }, &mut update)
            .unwrap();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn empty_dispatcher_accepts_and_drops_everything() {
        let mut dispatcher = EventDispatcher::<TestEvent>::new();
        let mut update = UpdateRequest::new();

        assert!(dispatcher.is_empty());
        dispatcher
            .handle_event(&TestEvent::Key('q'), &mut update)
            .unwrap();
    }
}
