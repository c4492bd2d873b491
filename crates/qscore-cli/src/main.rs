//! qscore CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "qscore", version, about = "Interview answer score analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print per-category counts and average answer time
    Summarize {
        /// Path to a .json/.toml result file or directory
        #[arg(long)]
        input: PathBuf,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List questions, optionally filtered by category
    List {
        /// Path to a .json/.toml result file or directory
        #[arg(long)]
        input: PathBuf,

        /// Category filter: all, excellent, good, fair, needs-improvement
        #[arg(long)]
        filter: Option<String>,

        /// Show answer and feedback for the n-th listed row (the row number
        /// within the filtered listing, not the #position in the full set)
        #[arg(long)]
        expand: Option<usize>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write analysis reports to disk
    Report {
        /// Path to a .json/.toml result file or directory
        #[arg(long)]
        input: PathBuf,

        /// Category filter for the question listing
        #[arg(long)]
        filter: Option<String>,

        /// Output format: json, markdown, all
        #[arg(long, default_value = "json")]
        format: String,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate result files
    Validate {
        /// Path to a .json/.toml result file or directory
        #[arg(long)]
        input: PathBuf,
    },

    /// Create starter config and an example result file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("qscore=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summarize {
            input,
            format,
            config,
        } => commands::summarize::execute(input, format, config),
        Commands::List {
            input,
            filter,
            expand,
            config,
        } => commands::list::execute(input, filter, expand, config),
        Commands::Report {
            input,
            filter,
            format,
            output,
            config,
        } => commands::report::execute(input, filter, format, output, config),
        Commands::Validate { input } => commands::validate::execute(input),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
