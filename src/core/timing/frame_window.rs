//=========================================================================
// Frame Window
//=========================================================================
//
// Rolling window of recent frame durations.
//
// Architecture:
//   record_frame() → push_front → [newest, ..., oldest] → evict back
//
// The window is seeded with a single sentinel entry so that average()
// and instant() are defined before the first real frame completes.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;

//=== Constants ===========================================================

/// Maximum number of frame duration samples retained.
pub const FRAME_WINDOW_SIZE: usize = 40;

/// Sentinel duration (ms) seeding the window before the first frame.
const SEED_FRAME_MS: u32 = 1000;

//=== FrameWindow =========================================================

/// Bounded FIFO of the most recent frame durations, in whole milliseconds.
///
/// The newest sample sits at the front. Once the window holds
/// [`FRAME_WINDOW_SIZE`] samples, recording a new one evicts the oldest.
/// The window is never empty, so [`FrameWindow::average`] and
/// [`FrameWindow::instant`] are total functions.
#[derive(Debug, Clone)]
pub struct FrameWindow {
    samples: VecDeque<u32>,
}

impl FrameWindow {
    /// Creates a window holding only the sentinel entry.
    pub fn new() -> Self {
        let mut samples = VecDeque::with_capacity(FRAME_WINDOW_SIZE + 1);
        samples.push_front(SEED_FRAME_MS);
        Self { samples }
    }

    /// Records the duration of a completed frame.
    ///
    /// Evicts the oldest samples until the window is back within bounds.
    pub fn record_frame(&mut self, duration_ms: u32) {
        self.samples.push_front(duration_ms);
        while self.samples.len() > FRAME_WINDOW_SIZE {
            self.samples.pop_back();
        }
    }

    /// Average duration over the window, floor-divided.
    pub fn average(&self) -> u32 {
        let sum: u32 = self.samples.iter().sum();
        sum / self.samples.len() as u32
    }

    /// Duration of the most recent frame.
    pub fn instant(&self) -> u32 {
        // The window always holds at least the seed entry.
        *self.samples.front().unwrap_or(&SEED_FRAME_MS)
    }

    /// Number of samples currently held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: the window retains its seed until real samples
    /// displace it.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for FrameWindow {
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

    #[test]
    fn new_window_holds_only_the_seed() {
        let window = FrameWindow::new();

        assert_eq!(window.len(), 1);
        assert_eq!(window.instant(), 1000);
        assert_eq!(window.average(), 1000);
    }

    #[test]
    fn queries_are_defined_before_any_frame() {
        let window = FrameWindow::new();

        // Both must return the seed value, never divide by zero.
        assert_eq!(window.average(), window.instant());
    }

    #[test]
    fn instant_returns_most_recent_sample() {
        let mut window = FrameWindow::new();

        window.record_frame(16);
        assert_eq!(window.instant(), 16);

        window.record_frame(25);
        assert_eq!(window.instant(), 25);
    }

    #[test]
    fn average_uses_floor_division() {
        let mut window = FrameWindow::new();

        window.record_frame(15);
        // (1000 + 15) / 2 = 507.5, floored.
        assert_eq!(window.average(), 507);
    }

    #[test]
    fn window_is_bounded_to_forty_samples() {
        let mut window = FrameWindow::new();

        for _ in 0..41 {
            window.record_frame(16);
        }

        assert_eq!(window.len(), FRAME_WINDOW_SIZE);
    }

    #[test]
    fn oldest_sample_is_evicted_first() {
        let mut window = FrameWindow::new();

        // Fill the window; the seed (oldest) must be the first evicted.
        for _ in 0..FRAME_WINDOW_SIZE {
            window.record_frame(16);
        }

        assert_eq!(window.len(), FRAME_WINDOW_SIZE);
        assert_eq!(window.average(), 16);
    }

    #[test]
    fn eviction_is_fifo() {
        let mut window = FrameWindow::new();

        for ms in 0..FRAME_WINDOW_SIZE as u32 {
            window.record_frame(ms);
        }
        // Seed evicted; samples are 0..=39. Sum = 780, avg = 19.
        assert_eq!(window.average(), 19);

        window.record_frame(40);
        // 0 evicted; samples are 1..=40. Sum = 820, avg = 20.
        assert_eq!(window.average(), 20);
        assert_eq!(window.instant(), 40);
    }
}
