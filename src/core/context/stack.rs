//=========================================================================
// Context Stack
//=========================================================================
//
// Ordered collection of contexts with stack discipline.
//
// The last element is the active context: it alone receives events,
// time advancement, and the display call. The stack is only ever
// mutated by the engine, once per frame, after rendering.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::Context;
use crate::core::event::Event;

//=== ContextStack ========================================================

/// Stack of owned contexts; insertion order is activation order.
///
/// Each context is exclusively owned by its stack slot and dropped when
/// popped. Calling [`ContextStack::pop`] or [`ContextStack::top_mut`] on
/// an empty stack is a programming error and panics: the engine's loop
/// condition guarantees a non-empty stack for the duration of a frame.
pub struct ContextStack<E: Event> {
    stack: Vec<Box<dyn Context<E>>>,
}

impl<E: Event> ContextStack<E> {
    /// Creates a single-element stack from the initial context.
    ///
    /// The stack is born non-empty; it can only become empty through
    /// [`ContextStack::pop`], which is the engine's shutdown path.
    pub fn new(initial: Box<dyn Context<E>>) -> Self {
        Self { stack: vec![initial] }
    }

    /// Pushes a context; it becomes the active one next frame.
    pub fn push(&mut self, context: Box<dyn Context<E>>) {
        self.stack.push(context);
        debug!("Context pushed, stack depth now {}", self.stack.len());
    }

    /// Removes and drops the active context.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn pop(&mut self) {
        assert!(!self.stack.is_empty(), "pop() called on an empty context stack");
        self.stack.pop();
        debug!("Context popped, stack depth now {}", self.stack.len());
    }

    /// Mutable access to the active context.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn top_mut(&mut self) -> &mut dyn Context<E> {
        self.stack
            .last_mut()
            .expect("top_mut() called on an empty context stack")
            .as_mut()
    }

    /// True once every context has been popped (loop termination test).
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Current stack depth.
    pub fn len(&self) -> usize {
        self.stack.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
