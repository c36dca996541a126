//=========================================================================
// Timing
//=========================================================================
//
// Frame pacing primitives: wall-clock access and frame statistics.
//
// Architecture:
//   Clock (trait) ─ ticks_ms() / sleep_ms()
//     └─ MonotonicClock (std::time::Instant backed)
//   FrameWindow ─ rolling buffer of recent frame durations
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

//=== Module Declarations =================================================

mod frame_window;

//=== Public API ==========================================================

pub use frame_window::{FrameWindow, FRAME_WINDOW_SIZE};

//=== Clock Trait =========================================================

/// Wall-clock seam used by the frame loop for pacing.
///
/// Production code uses [`MonotonicClock`]. Tests substitute a scripted
/// implementation so frame durations and sleeps are deterministic.
pub trait Clock {
    /// Monotonic milliseconds elapsed since an arbitrary fixed epoch.
    fn ticks_ms(&self) -> u64;

    /// Blocks the calling thread for `ms` milliseconds.
    fn sleep_ms(&self, ms: u64);
}

//=== MonotonicClock ======================================================

/// [`Clock`] backed by `std::time::Instant` and `thread::sleep`.
#[derive(Debug)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn ticks_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
