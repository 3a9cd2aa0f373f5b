//! CLI frontend for Folio, the interactive portfolio page engine.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    about = "Folio: the portfolio page's chatbot, section router, and particle backdrop",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Talk to the portfolio chatbot
    Chat {
        /// Scripted choice: an option number, a label, or something close to one.
        /// Repeat to walk several steps; without it the chat reads stdin.
        #[arg(short, long)]
        pick: Vec<String>,

        /// Wait out the greeting and typing delays in real time
        #[arg(long)]
        realtime: bool,

        /// Write the transcript here (.json for JSON, anything else for Markdown)
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// Validate the built-in dialogue graph and default configuration
    Check,

    /// Show the dialogue graph
    Graph {
        /// Show a single node and where its options lead
        #[arg(short, long)]
        focus: Option<String>,

        /// Print the nodes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Navigate between page sections and print the timed event trace
    Navigate {
        /// Sections to visit in order; `section#anchor` follows a deep link
        #[arg(required = true)]
        sections: Vec<String>,

        /// Exit transition length in milliseconds
        #[arg(long, default_value = "400")]
        exit_ms: u64,

        /// Enter transition length in milliseconds
        #[arg(long, default_value = "500")]
        enter_ms: u64,
    },

    /// Simulate the particle backdrop and print link statistics
    Backdrop {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "600")]
        frames: u64,

        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: f64,

        /// Viewport height in pixels
        #[arg(long, default_value = "720")]
        height: f64,

        /// RNG seed for a reproducible field
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Number of particles
        #[arg(short, long, default_value = "80")]
        particles: usize,
    },

    /// Launch the interactive terminal rendition of the page
    Tui {
        /// RNG seed for the particle backdrop
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    // Log lines on stderr would tear the alternate screen.
    if !matches!(cli.command, Commands::Tui { .. }) {
        init_logging(cli.verbose);
    }
    tracing::debug!(?cli, "parsed arguments");

    let result = match cli.command {
        Commands::Chat {
            pick,
            realtime,
            transcript,
        } => commands::chat::run(&pick, realtime, transcript.as_deref()),
        Commands::Check => commands::check::run(),
        Commands::Graph { focus, json } => commands::graph::run(focus.as_deref(), json),
        Commands::Navigate {
            sections,
            exit_ms,
            enter_ms,
        } => commands::navigate::run(&sections, exit_ms, enter_ms),
        Commands::Backdrop {
            frames,
            width,
            height,
            seed,
            particles,
        } => commands::backdrop::run(frames, width, height, seed, particles),
        Commands::Tui { seed } => tui::run(seed),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so command output stays pipeable. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
