//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use cadence_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder, EngineError, FramePhase, NOMINAL_FRAME_MS};

// Context system
pub use crate::core::context::{Context, ContextError, ContextStack};

// Update-request mailbox
pub use crate::core::update_request::UpdateRequest;

// Event intake
pub use crate::core::event::{
    ChannelEventSource, Event, EventDispatcher, EventHandler, EventSource,
};

// Timing
pub use crate::core::timing::{Clock, FrameWindow, MonotonicClock, FRAME_WINDOW_SIZE};
