//! Playback session state.
//!
//! Pure bookkeeping for one playback run: which frame is current, how many
//! full loops have completed, and when the loop limit is reached. Timing and
//! terminal output live in the play loop, which makes this state directly
//! unit-testable.

use std::time::Duration;

/// Transient state for a single playback run.
#[derive(Debug)]
pub struct PlaybackSession {
    /// Number of frames in the sequence being played
    frame_count: usize,
    /// Current frame position (0 <= current < frame_count)
    current: usize,
    /// Completed full traversals of the sequence
    completed_loops: u32,
    /// Loop limit; 0 means unbounded
    loop_limit: u32,
    /// Target delay between frame renders
    interval: Duration,
}

impl PlaybackSession {
    /// Create a session positioned on the first frame.
    ///
    /// # Arguments
    /// * `frame_count` - Length of the frame sequence (must be > 0)
    /// * `interval` - Target delay between renders
    /// * `loop_limit` - Full traversals to play; 0 plays until cancelled
    pub fn new(frame_count: usize, interval: Duration, loop_limit: u32) -> Self {
        debug_assert!(frame_count > 0);
        Self {
            frame_count,
            current: 0,
            completed_loops: 0,
            loop_limit,
            interval,
        }
    }

    /// Position of the frame to render next.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Completed full traversals so far.
    pub fn completed_loops(&self) -> u32 {
        self.completed_loops
    }

    /// Target delay between renders.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advance to the next frame, wrapping at the end of the sequence.
    ///
    /// Returns true when the advance wrapped, i.e. one more full loop just
    /// completed.
    pub fn advance(&mut self) -> bool {
        self.current += 1;
        if self.current == self.frame_count {
            self.current = 0;
            self.completed_loops += 1;
            return true;
        }
        false
    }

    /// True once the configured number of loops has completed. Never true
    /// for an unbounded (0) limit.
    pub fn loop_limit_reached(&self) -> bool {
        self.loop_limit > 0 && self.completed_loops >= self.loop_limit
    }
}
