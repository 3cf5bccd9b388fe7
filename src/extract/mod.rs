//! Frame extraction pipeline.
//!
//! Turns the loosely-structured script text of a gallery page into an
//! ordered, validated sequence of displayable text frames. The pipeline is
//! deliberately two-stage: [`scan`] finds everything shaped like an indexed
//! string assignment, then [`FrameHeuristic`] decides which candidates are
//! actual frames. Accepted payloads get their markup converted, duplicate
//! indices collapse to the last occurrence, and the result is ordered by
//! assignment index.

mod decode;
mod heuristic;
mod scan;

pub use heuristic::FrameHeuristic;

use std::collections::BTreeMap;
use std::ops::Index;

use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

/// An animation needs at least this many frames; anything less is a parse
/// failure, not a one-frame animation.
const MIN_FRAMES: usize = 2;

/// One complete screen of animation text.
///
/// Immutable once extracted. Lines are newline-separated with trailing
/// horizontal whitespace already tidied away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Assignment index from the source script; defines playback order
    pub index: u32,
    /// Frame text
    pub content: String,
}

impl Frame {
    /// Widest line of the frame in terminal display columns.
    pub fn width(&self) -> usize {
        self.content
            .lines()
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0)
    }

    /// Number of lines in the frame.
    pub fn height(&self) -> usize {
        self.content.lines().count()
    }
}

/// Ordered, validated sequence of animation frames.
///
/// Invariants: at least [`MIN_FRAMES`] frames, strictly ascending by
/// assignment index. Only the extractor constructs one.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    pub(crate) fn from_frames(frames: Vec<Frame>) -> Self {
        debug_assert!(frames.len() >= MIN_FRAMES);
        Self { frames }
    }

    /// Number of frames in the sequence (always >= 2).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; present to keep clippy and callers honest.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate frames in playback order.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Bounding box over all frames as (columns, rows).
    pub fn dimensions(&self) -> (usize, usize) {
        let cols = self.iter().map(Frame::width).max().unwrap_or(0);
        let rows = self.iter().map(Frame::height).max().unwrap_or(0);
        (cols, rows)
    }
}

impl Index<usize> for FrameSequence {
    type Output = Frame;

    fn index(&self, pos: usize) -> &Frame {
        &self.frames[pos]
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Errors from frame extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The pipeline finished with fewer than two frames. Carries how many
    /// candidates were scanned and how many survived, for diagnostics.
    #[error(
        "no animation frames found ({candidates} candidate assignment(s), {kept} looked like frames)"
    )]
    NoFrames { candidates: usize, kept: usize },
}

/// Extract an animation from raw script text using default thresholds.
pub fn frames(source: &str) -> Result<FrameSequence, ExtractError> {
    frames_with(source, &FrameHeuristic::default())
}

/// Extract an animation with explicit heuristic thresholds.
///
/// Pure function of its input: scans for candidates, decodes escapes, applies
/// the heuristic, converts markup, dedupes by assignment index (last write
/// wins) and orders ascending. Fails rather than returning a partial result.
pub fn frames_with(
    source: &str,
    heuristic: &FrameHeuristic,
) -> Result<FrameSequence, ExtractError> {
    let candidates = scan::assignments(source);
    let scanned = candidates.len();

    let mut kept: BTreeMap<u32, String> = BTreeMap::new();
    for candidate in candidates {
        let decoded = decode::decode_escapes(candidate.literal);
        if !heuristic.is_frame(&decoded) {
            trace!(index = candidate.index, "rejected candidate");
            continue;
        }
        // Later assignment to the same index replaces the earlier one,
        // matching script execution order.
        kept.insert(candidate.index, decode::markup_to_text(&decoded));
    }

    if kept.len() < MIN_FRAMES {
        return Err(ExtractError::NoFrames {
            candidates: scanned,
            kept: kept.len(),
        });
    }

    let frames: Vec<Frame> = kept
        .into_iter()
        .map(|(index, content)| Frame {
            index,
            content: tidy_frame(&content),
        })
        .collect();

    debug!(
        candidates = scanned,
        frames = frames.len(),
        "extracted animation"
    );
    Ok(FrameSequence::from_frames(frames))
}

/// Strip trailing spaces and tabs from each line and collapse a run of
/// trailing blank lines into exactly one trailing newline.
fn tidy_frame(content: &str) -> String {
    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.trim_end_matches(|c| c == ' ' || c == '\t'))
        .collect();

    let tail_blanks = lines.iter().rev().take_while(|line| line.is_empty()).count();
    let mut tidy = lines[..lines.len() - tail_blanks].join("\n");
    if tail_blanks > 0 {
        tidy.push('\n');
    }
    tidy
}
