//! Playback engine.
//!
//! Renders a [`FrameSequence`] to a terminal-like sink on a fixed tick
//! derived from the frame rate. The loop is cooperative: it sleeps in short
//! slices between renders and polls a shared cancellation flag, so a Ctrl-C
//! handler only ever has to store `true` into an `AtomicBool`. All terminal
//! cleanup happens here, on the playback thread, exactly once.
//!
//! Submodules:
//! - `session`: per-run frame cursor and loop accounting
//! - `screen`: RAII guard over the drawing area

mod screen;
mod session;

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::extract::FrameSequence;
use screen::Screen;
use session::PlaybackSession;

/// Granularity of cancellation polling during the inter-tick sleep.
const POLL_SLICE: Duration = Duration::from_millis(20);

/// Playback parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayOptions {
    /// Frames per second; must be finite and positive
    pub fps: f64,
    /// Full traversals to play; 0 plays until cancelled
    pub loops: u32,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            fps: 10.0,
            loops: 1,
        }
    }
}

impl PlayOptions {
    /// Tick interval derived from the frame rate.
    ///
    /// Rejects non-finite, zero and negative rates, and rates so small the
    /// interval will not fit in a `Duration` or cannot be scheduled against
    /// the monotonic clock.
    pub fn tick_interval(&self) -> Result<Duration, PlayerError> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(PlayerError::InvalidFrameRate(self.fps));
        }
        let interval = Duration::try_from_secs_f64(1.0 / self.fps)
            .map_err(|_| PlayerError::InvalidFrameRate(self.fps))?;
        // A Duration can hold spans that overflow Instant arithmetic; the
        // play loop adds the interval to Instant::now() every tick.
        if Instant::now().checked_add(interval).is_none() {
            return Err(PlayerError::InvalidFrameRate(self.fps));
        }
        Ok(interval)
    }
}

/// How a playback run ended. Cancellation is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The configured loop limit was reached
    Completed { loops: u32 },
    /// The cancellation flag was raised
    Cancelled,
}

/// Errors from the playback engine.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("invalid frame rate: {0} (must be a positive number)")]
    InvalidFrameRate(f64),

    #[error("terminal write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Play a frame sequence to `sink` until the loop limit is reached or
/// `cancel` is raised.
///
/// The options are validated before the first byte is written, so an invalid
/// frame rate never disturbs the terminal. On every exit path, normal or not,
/// the screen is cleared and the cursor restored exactly once.
pub fn play<W: Write>(
    frames: &FrameSequence,
    opts: &PlayOptions,
    sink: &mut W,
    cancel: &AtomicBool,
) -> Result<PlaybackOutcome, PlayerError> {
    let interval = opts.tick_interval()?;
    debug!(
        frames = frames.len(),
        interval_ms = interval.as_millis() as u64,
        loops = opts.loops,
        "starting playback"
    );

    let mut session = PlaybackSession::new(frames.len(), interval, opts.loops);
    let mut screen = Screen::new(&mut *sink)?;
    screen.draw(&frames[0].content)?;

    let outcome = loop {
        if session.advance() && session.loop_limit_reached() {
            break PlaybackOutcome::Completed {
                loops: session.completed_loops(),
            };
        }
        if !wait_for_tick(session.interval(), cancel) {
            break PlaybackOutcome::Cancelled;
        }
        screen.draw(&frames[session.current()].content)?;
    };

    screen.restore()?;
    debug!(?outcome, "playback finished");
    Ok(outcome)
}

/// Sleep for one tick, polling the cancellation flag in short slices.
///
/// Returns false as soon as the flag is observed set; the caller must not
/// render another frame after that.
fn wait_for_tick(interval: Duration, cancel: &AtomicBool) -> bool {
    let deadline = Instant::now() + interval;
    loop {
        if cancel.load(Ordering::SeqCst) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep((deadline - now).min(POLL_SLICE));
    }
}
