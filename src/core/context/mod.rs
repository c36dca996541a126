//=========================================================================
// Context System
//=========================================================================
//
// Stack-based application state switching.
//
// Architecture:
//   Context (trait) ─ handle_event() / elapse() / display()
//   ContextStack    ─ Vec<Box<dyn Context>>, last element is active
//
// Flow:
//   Engine frame → top context callbacks → UpdateRequest → deferred
//   push/pop applied by the engine at the end of the frame
//
//=========================================================================

//=== External Dependencies ===============================================

use std::error::Error;

//=== Internal Dependencies ===============================================

use crate::core::event::Event;
use crate::core::update_request::UpdateRequest;

//=== Module Declarations =================================================

mod stack;

//=== Public API ==========================================================

pub use stack::ContextStack;

//=== Errors ==============================================================

/// Error raised by a context callback.
///
/// Concrete contexts own their failure domain (rendering, resource
/// loading, audio); the engine has no way to recover meaningfully, so it
/// wraps the error with frame diagnostics and lets it surface out of
/// [`crate::Engine::run`].
pub type ContextError = Box<dyn Error + Send + Sync + 'static>;

//=== Context Trait =======================================================

/// A unit of application state: a menu, a gameplay session, a pause
/// screen.
///
/// Exactly one context is *active* per frame (the top of the
/// [`ContextStack`]). The engine drives it through three phases, in
/// order: event handling, time advancement, rendering.
///
/// Contexts never touch the stack directly. Stack mutations are requested
/// through the [`UpdateRequest`] mailbox and applied by the engine at the
/// end of the frame, so the stack is stable for the whole frame.
///
/// # Minimal Implementation
///
/// ```rust
/// # use cadence_engine::prelude::*;
/// # #[derive(Debug)]
/// # enum MyEvent { Quit }
/// # impl Event for MyEvent {}
/// struct Splash;
///
/// impl Context<MyEvent> for Splash {
///     fn handle_event(
///         &mut self,
///         event: &MyEvent,
///         update: &mut UpdateRequest<MyEvent>,
///     ) -> Result<(), ContextError> {
///         if matches!(event, MyEvent::Quit) {
///             update.request_pop();
///         }
///         Ok(())
///     }
///
///     fn elapse(
///         &mut self,
///         _ticks: u32,
///         _update: &mut UpdateRequest<MyEvent>,
///     ) -> Result<(), ContextError> {
///         Ok(())
///     }
///
///     fn display(&mut self) -> Result<(), ContextError> {
///         Ok(())
///     }
/// }
/// ```
pub trait Context<E: Event> {
    /// Handles one platform event polled during the input phase.
    ///
    /// May request a stack mutation through `update`; the mailbox applies
    /// first-push-wins and idempotent-pop rules.
    fn handle_event(
        &mut self,
        event: &E,
        update: &mut UpdateRequest<E>,
    ) -> Result<(), ContextError>;

    /// Advances simulation time by `ticks` game ticks.
    ///
    /// Called once per frame with the nominal frame budget, and possibly
    /// a second time with a correction when the frame overran.
    fn elapse(
        &mut self,
        ticks: u32,
        update: &mut UpdateRequest<E>,
    ) -> Result<(), ContextError>;

    /// Renders the context. Must complete synchronously; any resources it
    /// draws with are assumed valid for the duration of the call.
    fn display(&mut self) -> Result<(), ContextError>;
}
