//=========================================================================
// Core Systems
//=========================================================================
//
// Passive data structures manipulated by the engine's frame loop.
//
// Responsibilities:
// - Context capability interface and the context stack (context)
// - Deferred stack mutation mailbox (update_request)
// - Event intake abstractions (event)
// - Frame pacing clock and statistics (timing)
//
// None of these components owns a thread or mutates another component:
// the engine is the single writer, once per frame, at fixed points.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod context;
pub mod event;
pub mod timing;
pub mod update_request;

//=== Public API ==========================================================

pub use context::{Context, ContextError, ContextStack};
pub use event::{ChannelEventSource, Event, EventDispatcher, EventHandler, EventSource};
pub use timing::{Clock, FrameWindow, MonotonicClock, FRAME_WINDOW_SIZE};
pub use update_request::UpdateRequest;
