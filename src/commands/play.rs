//! Play subcommand handler

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use flick::player::{self, PlayOptions, PlaybackOutcome};
use flick::{Config, FrameSequence};

use crate::commands::open_store;

/// Resolve, extract and play one animation.
///
/// The source comes from `--file` when given, otherwise from the cache (or
/// the gallery on a miss). Command-line playback flags override the config
/// file defaults.
#[cfg(not(tarpaulin_include))]
#[allow(clippy::too_many_arguments)]
pub fn handle(
    config: &Config,
    cache_dir: Option<PathBuf>,
    id: Option<u32>,
    file: Option<PathBuf>,
    fps: Option<f64>,
    loops: Option<u32>,
    refresh: bool,
) -> Result<()> {
    let source_label;
    let source = match &file {
        Some(path) => {
            source_label = path.display().to_string();
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read animation file: {:?}", path))?
        }
        None => {
            let id = id.context("An animation id is required unless --file is given")?;
            source_label = format!("gallery entry {id}");
            let store = open_store(config, cache_dir)?;
            flick::store::resolve(&store, &config.remote, id, refresh)?
        }
    };

    let frames = flick::extract::frames_with(&source, &config.extract.heuristic())
        .with_context(|| format!("No playable animation in {source_label}"))?;
    warn_if_oversized(&frames);

    let opts = PlayOptions {
        fps: fps.unwrap_or(config.playback.fps),
        loops: loops.unwrap_or(config.playback.loops),
    };

    // The handler only raises the flag; every terminal write, including
    // cleanup, stays on this thread.
    let cancel = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&cancel);
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))
        .context("Failed to install Ctrl-C handler")?;

    let mut stdout = io::stdout();
    let outcome = player::play(&frames, &opts, &mut stdout, &cancel)?;

    match outcome {
        PlaybackOutcome::Completed { loops } => println!("Finished after {} loop(s).", loops),
        PlaybackOutcome::Cancelled => println!("Stopped."),
    }
    Ok(())
}

/// Warn when the animation will not fit the current terminal.
fn warn_if_oversized(frames: &FrameSequence) {
    if let Some((terminal_size::Width(cols), terminal_size::Height(rows))) =
        terminal_size::terminal_size()
    {
        let (frame_cols, frame_rows) = frames.dimensions();
        if frame_cols > cols as usize || frame_rows > rows as usize {
            warn!(
                frame_cols,
                frame_rows,
                term_cols = cols,
                term_rows = rows,
                "animation is larger than the terminal; frames may wrap or scroll"
            );
        }
    }
}
