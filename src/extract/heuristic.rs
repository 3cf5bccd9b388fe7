//! Frame-worthiness heuristic.
//!
//! Gallery scripts assign plenty of short strings (titles, colors, URL
//! fragments) with the same indexed-assignment shape as frames. This
//! predicate separates frames from that noise. The thresholds are
//! reverse-engineered from real pages rather than guaranteed by any format,
//! so both are tunable through the `[extract]` config section.

use crate::extract::decode;

/// Decides whether a decoded candidate payload looks like an animation frame.
///
/// Runs after escape decoding and before markup conversion, so a line break
/// may appear either as a literal newline or as a still-unconverted `<br>`
/// tag.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameHeuristic {
    /// Minimum payload length in characters
    pub min_chars: usize,
    /// Require at least one line break (newline or `<br>`-style tag)
    pub require_line_break: bool,
}

impl Default for FrameHeuristic {
    fn default() -> Self {
        Self {
            min_chars: 50,
            require_line_break: true,
        }
    }
}

impl FrameHeuristic {
    /// Apply the predicate to a decoded payload.
    pub fn is_frame(&self, payload: &str) -> bool {
        if payload.chars().count() < self.min_chars {
            return false;
        }
        if self.require_line_break && !payload.contains('\n') && !decode::contains_br_tag(payload) {
            return false;
        }
        true
    }
}
