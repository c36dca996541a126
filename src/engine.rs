//=========================================================================
// Cadence Engine
//
// Fixed-cadence frame loop driving a stack of contexts.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [frame loop]
//         │                          │
//         ├─ with_ticks_per_ms()     ├─ ContextStack (active = top)
//         └─ with_clock()            ├─ UpdateRequest (deferred push/pop)
//                                    └─ FrameWindow (pacing statistics)
// ```
//
// One loop iteration equals one frame:
//   drain events → advance time → display → pace → record → mutate stack
//
//=========================================================================

//=== External Dependencies ===============================================

use std::error::Error;
use std::fmt;

use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::context::{Context, ContextError, ContextStack};
use crate::core::event::{Event, EventSource};
use crate::core::timing::{Clock, FrameWindow, MonotonicClock};
use crate::core::update_request::UpdateRequest;

//=== Constants ===========================================================

/// Target time budget per frame: 1000 / 60, in whole milliseconds.
pub const NOMINAL_FRAME_MS: u32 = 1000 / 60;

/// Upper bound on events handled per frame. A source that keeps
/// producing past this is left for the next frame so the simulation
/// never starves behind input.
const MAX_EVENTS_PER_FRAME: usize = 100;

//=== FramePhase ==========================================================

/// Phase of the frame in which a context error surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    /// `handle_event` during the input drain.
    Events,
    /// The nominal `elapse` call.
    Elapse,
    /// The `display` call.
    Display,
    /// The corrective `elapse` call after an overrun.
    Correction,
}

impl fmt::Display for FramePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            Self::Events => "event handling",
            Self::Elapse => "time advancement",
            Self::Display => "rendering",
            Self::Correction => "pacing correction",
        };
        write!(f, "{}", phase)
    }
}

//=== EngineError =========================================================

/// Error propagated out of [`Engine::run`] when a context callback
/// fails.
///
/// The engine has no domain knowledge to recover with, so it annotates
/// the failure with the frame index and phase and lets it surface.
#[derive(Debug)]
pub struct EngineError {
    phase: FramePhase,
    frame: u64,
    source: ContextError,
}

impl EngineError {
    fn new(phase: FramePhase, frame: u64, source: ContextError) -> Self {
        Self { phase, frame, source }
    }

    /// Frame phase in which the context failed.
    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    /// Index of the frame that failed.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "context failed during {} (frame {}): {}",
            self.phase, self.frame, self.source
        )
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref() as &(dyn Error + 'static))
    }
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// Construction requires the initial context, so the engine can never
/// start with an empty stack.
///
/// # Default Values
///
/// - **Ticks per millisecond**: 1.0 (one game tick per wall-clock ms)
/// - **Clock**: [`MonotonicClock`]
///
/// # Examples
///
/// ```no_run
/// use cadence_engine::prelude::*;
///
/// #[derive(Debug)]
/// enum GameEvent { Quit }
/// impl Event for GameEvent {}
///
/// struct Menu;
///
/// impl Context<GameEvent> for Menu {
///     fn handle_event(
///         &mut self,
///         event: &GameEvent,
///         update: &mut UpdateRequest<GameEvent>,
///     ) -> Result<(), ContextError> {
///         if matches!(event, GameEvent::Quit) {
///             update.request_pop();
///         }
///         Ok(())
///     }
///
///     fn elapse(
///         &mut self,
///         _ticks: u32,
///         _update: &mut UpdateRequest<GameEvent>,
///     ) -> Result<(), ContextError> {
///         Ok(())
///     }
///
///     fn display(&mut self) -> Result<(), ContextError> {
///         Ok(())
///     }
/// }
///
/// let (tx, rx) = crossbeam_channel::unbounded();
/// tx.send(GameEvent::Quit).unwrap();
///
/// let mut events = ChannelEventSource::new(rx);
/// EngineBuilder::<GameEvent>::new(Box::new(Menu))
///     .with_ticks_per_ms(2.0)
///     .build()
///     .run(&mut events)
///     .unwrap();
/// ```
pub struct EngineBuilder<E: Event> {
    initial: Box<dyn Context<E>>,
    ticks_per_ms: f32,
    clock: Box<dyn Clock>,
}

impl<E: Event> EngineBuilder<E> {
    /// Creates a builder seeded with the initial context.
    pub fn new(initial: Box<dyn Context<E>>) -> Self {
        Self {
            initial,
            ticks_per_ms: 1.0,
            clock: Box::new(MonotonicClock::new()),
        }
    }

    /// Sets the scale converting wall-clock milliseconds to game ticks.
    ///
    /// The nominal and corrective `elapse` calls both use this ratio.
    ///
    /// Default: 1.0
    ///
    /// # Panics
    ///
    /// Panics if `ticks_per_ms` is not a positive finite number.
    pub fn with_ticks_per_ms(mut self, ticks_per_ms: f32) -> Self {
        assert!(
            ticks_per_ms > 0.0 && ticks_per_ms.is_finite(),
            "Ticks per millisecond must be positive and finite, got {}",
            ticks_per_ms
        );
        self.ticks_per_ms = ticks_per_ms;
        self
    }

    /// Substitutes the wall clock used for pacing.
    ///
    /// Useful for deterministic replays and tests.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Builds the engine with a single-element context stack.
    pub fn build(self) -> Engine<E> {
        info!("Building engine (ticks/ms: {})", self.ticks_per_ms);

        Engine {
            stack: ContextStack::new(self.initial),
            frame_window: FrameWindow::new(),
            ticks_per_ms: self.ticks_per_ms,
            clock: self.clock,
            frame_index: 0,
        }
    }
}

//=== Engine ==============================================================

/// Fixed-cadence frame loop driver.
///
/// Owns the context stack, the update-request mailbox, and the frame
/// statistics window. Everything runs on the caller's thread; the only
/// suspension point is the pacing sleep.
///
/// # Frame Anatomy
///
/// 1. Drain the event source, dispatching to the active context
/// 2. Advance simulation time by the nominal frame budget
/// 3. Display the active context
/// 4. Pace: sleep off unused budget, or compensate an overrun with a
///    corrective time advance
/// 5. Record the frame duration
/// 6. Apply at most one deferred stack mutation (pop beats push)
///
/// The loop ends when the stack is empty — the intended shutdown path —
/// or when a context error propagates out.
pub struct Engine<E: Event> {
    stack: ContextStack<E>,
    frame_window: FrameWindow,
    ticks_per_ms: f32,
    clock: Box<dyn Clock>,
    frame_index: u64,
}

impl<E: Event> Engine<E> {
    //--- Execution --------------------------------------------------------

    /// Runs the frame loop until the context stack empties.
    ///
    /// Returns `Ok(())` on clean shutdown (every context popped). A
    /// context callback error aborts the loop and surfaces as an
    /// [`EngineError`]; frame overruns are only logged, never escalated.
    pub fn run(&mut self, events: &mut dyn EventSource<E>) -> Result<(), EngineError> {
        info!("Nominal frame duration: {} ms", NOMINAL_FRAME_MS);

        let mut update = UpdateRequest::new();

        // One loop equals one frame.
        while !self.stack.is_empty() {
            self.run_frame(events, &mut update)?;
        }

        info!(
            "Context stack empty, engine exiting after {} frames",
            self.frame_index
        );
        Ok(())
    }

    //--- Statistics -------------------------------------------------------

    /// Average duration of recent frames, in milliseconds.
    pub fn average_frame_ms(&self) -> u32 {
        self.frame_window.average()
    }

    /// Duration of the most recent frame, in milliseconds.
    pub fn instant_frame_ms(&self) -> u32 {
        self.frame_window.instant()
    }

    //--- Frame Loop -------------------------------------------------------

    /// Executes exactly one frame.
    ///
    /// The stack must be non-empty on entry; it is not mutated until the
    /// final step, so the active context stays active for the whole
    /// frame.
    fn run_frame(
        &mut self,
        events: &mut dyn EventSource<E>,
        update: &mut UpdateRequest<E>,
    ) -> Result<(), EngineError> {
        let frame = self.frame_index;
        let frame_start = self.clock.ticks_ms();

        //--- Input --------------------------------------------------------
        let mut drained = 0;
        while drained < MAX_EVENTS_PER_FRAME {
            let Some(event) = events.poll() else { break };
            self.stack
                .top_mut()
                .handle_event(&event, update)
                .map_err(|source| EngineError::new(FramePhase::Events, frame, source))?;
            drained += 1;
        }
        if drained >= MAX_EVENTS_PER_FRAME {
            warn!(
                "Event backlog: {} events handled in frame {}, deferring the rest",
                drained, frame
            );
        }

        //--- Time ---------------------------------------------------------
        let nominal_ticks = self.to_ticks(NOMINAL_FRAME_MS);
        self.stack
            .top_mut()
            .elapse(nominal_ticks, update)
            .map_err(|source| EngineError::new(FramePhase::Elapse, frame, source))?;

        //--- Output -------------------------------------------------------
        self.stack
            .top_mut()
            .display()
            .map_err(|source| EngineError::new(FramePhase::Display, frame, source))?;

        let duration = self.clock.ticks_ms().saturating_sub(frame_start) as u32;

        //--- Pacing -------------------------------------------------------
        //
        // Underrun: sleep off the unused budget. Overrun: advance the
        // simulation by the overrun, scaled by the same ticks ratio as
        // the nominal advance, so game time keeps up with wall time. The
        // correction happens before statistics and before the stack
        // mutation.
        //
        if duration < NOMINAL_FRAME_MS {
            self.clock.sleep_ms((NOMINAL_FRAME_MS - duration) as u64);
        } else if duration > NOMINAL_FRAME_MS {
            warn!(
                "Frame {} was too long to prepare: {} ms against a {} ms budget",
                frame, duration, NOMINAL_FRAME_MS
            );
            let correction_ticks = self.to_ticks(duration - NOMINAL_FRAME_MS);
            self.stack
                .top_mut()
                .elapse(correction_ticks, update)
                .map_err(|source| EngineError::new(FramePhase::Correction, frame, source))?;
        }

        //--- Statistics ---------------------------------------------------
        //
        // Re-measured so the recorded duration includes the pacing sleep
        // or correction.
        //
        let total = self.clock.ticks_ms().saturating_sub(frame_start) as u32;
        self.frame_window.record_frame(total);

        //--- Deferred Stack Mutation ---------------------------------------
        //
        // At most one mutation per frame; pop beats push. Both mailbox
        // fields are consumed so nothing leaks into the next frame.
        //
        let pop_requested = update.take_pop_requested();
        let pending_push = update.take_pending_push();
        if pop_requested {
            if pending_push.is_some() {
                warn!(
                    "Pop and push both requested in frame {}, discarding the push",
                    frame
                );
            }
            self.stack.pop();
        } else if let Some(context) = pending_push {
            self.stack.push(context);
        }

        self.frame_index = self.frame_index.wrapping_add(1);
        Ok(())
    }

    //--- Helpers ----------------------------------------------------------

    /// Converts wall-clock milliseconds into game ticks.
    fn to_ticks(&self, ms: u32) -> u32 {
        (ms as f32 * self.ticks_per_ms) as u32
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
