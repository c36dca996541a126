//=========================================================================
// Cadence Engine — Library Root
//
// This crate defines the public API surface of the Cadence Engine: a
// fixed-cadence frame loop driving a stack of interchangeable contexts.
//
// Responsibilities:
// - Expose the loop driver (`Engine`) and its builder
// - Expose the context capability interface and the passive core
//   structures it manipulates (stack, mailbox, frame window)
// - Keep the frame-loop internals behind a small, explicit surface
//
// Typical usage:
// ```no_run
// use cadence_engine::prelude::*;
// # #[derive(Debug)]
// # enum E {}
// # impl Event for E {}
// # struct Menu;
// # impl Context<E> for Menu {
// #     fn handle_event(&mut self, _: &E, _: &mut UpdateRequest<E>) -> Result<(), ContextError> { Ok(()) }
// #     fn elapse(&mut self, _: u32, u: &mut UpdateRequest<E>) -> Result<(), ContextError> { u.request_pop(); Ok(()) }
// #     fn display(&mut self) -> Result<(), ContextError> { Ok(()) }
// # }
//
// fn main() -> Result<(), EngineError> {
//     let (_tx, rx) = crossbeam_channel::unbounded();
//     let mut events = ChannelEventSource::new(rx);
//
//     EngineBuilder::<E>::new(Box::new(Menu))
//         .build()
//         .run(&mut events)
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the passive structures the frame loop manipulates:
// the context stack, the update-request mailbox, event intake, and
// timing. It is exposed publicly for engine-level extensibility, but
// application code will mostly use the top-level `Engine` facade.
//
pub mod core;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the loop driver and its builder.
//
mod engine;

//--- Public Exports ------------------------------------------------------

pub mod prelude;

pub use engine::{Engine, EngineBuilder, EngineError, FramePhase, NOMINAL_FRAME_MS};
