//! flick binary entry point.
//!
//! Argument parsing, logging setup and dispatch to the handlers in
//! `commands/`. Diagnostics go to stderr so they never mix with animation
//! frames on stdout.

mod commands;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

/// Version string for `--version`: crate version, plus git commit and build
/// date on dev builds.
fn build_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = env!("FLICK_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => format!("{version} ({sha} {date})"),
        _ => format!("{version} ({date})"),
    }
}

/// flick - fetch, cache and play ASCII animations in your terminal.
#[derive(Parser)]
#[command(name = "flick", version = build_version(), about = "Terminal ASCII animation player")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    verbose: bool,

    /// Override the cache directory
    #[arg(long, global = true, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an animation in the terminal
    Play {
        /// Animation id in the gallery
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        id: Option<u32>,

        /// Play from a local file instead of the gallery
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Frames per second
        #[arg(long)]
        fps: Option<f64>,

        /// Times to repeat the animation; 0 loops until Ctrl-C
        #[arg(long)]
        loops: Option<u32>,

        /// Re-download even if the animation is cached
        #[arg(long)]
        refresh: bool,
    },

    /// Download an animation into the cache without playing it
    Fetch {
        /// Animation id in the gallery
        id: u32,

        /// Re-download even if the animation is cached
        #[arg(long)]
        refresh: bool,
    },

    /// List cached animations
    List {
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove cached animations
    Clean {
        /// Animation ids to remove; clears the whole cache when omitted
        ids: Vec<u32>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Inspect or edit the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Open the config file in $EDITOR
    Edit,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

/// Route diagnostics to stderr. `--verbose` forces debug level; otherwise
/// RUST_LOG is honored with warnings as the fallback.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("flick=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flick=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = flick::Config::load()?;

    match cli.command {
        Commands::Play {
            id,
            file,
            fps,
            loops,
            refresh,
        } => commands::play::handle(&config, cli.cache_dir, id, file, fps, loops, refresh),
        Commands::Fetch { id, refresh } => {
            commands::fetch::handle(&config, cli.cache_dir, id, refresh)
        }
        Commands::List { json } => commands::list::handle(&config, cli.cache_dir, json),
        Commands::Clean { ids, yes } => commands::clean::handle(&config, cli.cache_dir, ids, yes),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}
