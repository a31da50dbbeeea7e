//! curvesound CLI - Render drawn curves to WAV audio
//!
//! This binary provides commands for validating and rendering synthesis
//! requests and for inspecting the WAV files they produce.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use curvesound_cli::commands;

/// curvesound - Curve-driven tone synthesis
#[derive(Parser)]
#[command(name = "curvesound")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a request file to a mono 16-bit WAV
    Render {
        /// Path to the request file (JSON)
        #[arg(short, long)]
        request: String,

        /// Output WAV path (default: request path with .wav extension)
        #[arg(short, long)]
        output: Option<String>,

        /// Play the result with the system's default player
        #[arg(long)]
        play: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a request file without rendering it
    Validate {
        /// Path to the request file (JSON)
        #[arg(short, long)]
        request: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the header fields of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write the reference request (circle waveform, ramp envelope)
    Template {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            request,
            output,
            play,
            json,
        } => commands::render::run(&request, output.as_deref(), play, json),
        Commands::Validate { request, json } => commands::validate::run(&request, json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::Template { output } => commands::template::run(output.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
