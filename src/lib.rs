//! flick library
//!
//! A Rust library for fetching, caching, extracting and playing frame-based
//! ASCII animations in a terminal.

pub mod config;
pub mod extract;
pub mod player;
pub mod store;

pub use config::Config;
pub use extract::{ExtractError, Frame, FrameHeuristic, FrameSequence};
pub use player::{play, PlayOptions, PlaybackOutcome, PlayerError};
pub use store::{CacheEntry, CacheStore};
