//! Custard command-line tool.
//!
//! Validates, reformats, inspects and creates Custard keyboard-layout
//! documents.
//!
//! # Usage
//!
//! ```bash
//! custard sample --output my_keyboard.json --identifier my_keyboard
//! custard validate --file my_keyboard.json
//! custard format --file my_keyboard.json --check
//! ```

use clap::{Parser, Subcommand};
use custard::cli::{
    CliResult, ConfigArgs, FormatArgs, InspectArgs, SampleArgs, ValidateArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Custard - keyboard-layout document tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that a document decodes cleanly
    Validate(ValidateArgs),
    /// Rewrite a document in canonical form
    Format(FormatArgs),
    /// Show a document's metadata and key list
    Inspect(InspectArgs),
    /// Create a sample document
    Sample(SampleArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Validate(args) => args.execute(),
            Self::Format(args) => args.execute(),
            Self::Inspect(args) => args.execute(),
            Self::Sample(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
