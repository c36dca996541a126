//=========================================================================
// Event System
//=========================================================================
//
// Platform event intake for the frame loop.
//
// Architecture:
//   EventSource (trait) ─ poll() → Option<E>
//     └─ ChannelEventSource ─ crossbeam Receiver backed
//   EventDispatcher ─ routes events to per-device sub-handlers
//
// The engine treats events as opaque records: it polls the source once
// per frame until exhaustion and forwards each event to the active
// context. What an event carries is entirely the application's business.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;

//=== Module Declarations =================================================

mod channel_source;
mod dispatcher;

//=== Public API ==========================================================

pub use channel_source::ChannelEventSource;
pub use dispatcher::{EventDispatcher, EventHandler};

//=== Event Trait =========================================================

/// Marker trait for the opaque platform event record.
///
/// Typically implemented by an application-specific enum wrapping
/// whatever the platform layer produces (key presses, controller input,
/// window events).
pub trait Event: Debug + 'static {}

//=== EventSource Trait ===================================================

/// Per-frame pollable source of platform events.
///
/// `poll` must never block: it returns `Some(event)` while events are
/// pending this frame and `None` once the queue is drained. The engine
/// polls until `None` at the start of every frame.
pub trait EventSource<E: Event> {
    fn poll(&mut self) -> Option<E>;
}

/// A plain iterator works as a one-shot event source; handy for replays
/// and tests.
impl<E: Event, I: Iterator<Item = E>> EventSource<E> for I {
    fn poll(&mut self) -> Option<E> {
        self.next()
    }
}
