//! pinflags CLI tool.

use clap::{Parser, Subcommand};
use pinflags_core::DeviceKind;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pinflags", version)]
#[command(about = "Generate device pin macros from device_config.ini", long_about = None)]
struct Cli {
    /// Path to the device configuration
    #[arg(
        long,
        global = true,
        env = "PINFLAGS_CONFIG",
        default_value = "device_config.ini"
    )]
    config: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print compiler flags for every configured device
    Generate {
        /// Output format: "cmake" (space-separated) or "pio" (one per line)
        #[arg(default_value = "cmake")]
        format: String,
        /// Write flags to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check the configuration and report skipped content
    Validate,
    /// Print parsed device records as JSON
    List {
        /// Only list devices of this kind
        #[arg(long)]
        kind: Option<DeviceKind>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only flags.
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();

    match cli.command {
        None => {
            commands::generate(&cli.config, "cmake", None)?;
        }
        Some(Commands::Generate { format, output }) => {
            commands::generate(&cli.config, &format, output.as_deref())?;
        }
        Some(Commands::Validate) => {
            commands::validate(&cli.config)?;
        }
        Some(Commands::List { kind }) => {
            commands::list(&cli.config, kind)?;
        }
    }

    Ok(())
}
