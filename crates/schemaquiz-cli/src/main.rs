//! schemaquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

#[derive(Parser)]
#[command(
    name = "schemaquiz",
    version,
    about = "Embed or reference? A schema design quiz"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the quiz
    Take {
        /// Path to a custom .toml question set (default: built-in)
        #[arg(long)]
        question_set: Option<PathBuf>,

        /// Answer non-interactively (e.g. "simplicity=yes,cardinality=no,...")
        #[arg(long)]
        answers: Option<String>,

        /// Output directory for saved reports
        #[arg(long)]
        output: Option<PathBuf>,

        /// Report format: none, json, html, markdown, all
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the questions in a question set
    Questions {
        /// Path to a custom .toml question set (default: built-in)
        #[arg(long)]
        question_set: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question set TOML files
    Validate {
        /// Path to question set file or directory
        #[arg(long)]
        question_set: PathBuf,
    },

    /// Display a saved quiz report
    Show {
        /// Report JSON written by `take --format json`
        #[arg(long)]
        report: PathBuf,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create starter config and example question set
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            question_set,
            answers,
            output,
            format,
            config,
        } => commands::take::execute(question_set, answers, output, format, config),
        Commands::Questions {
            question_set,
            config,
        } => commands::questions::execute(question_set, config),
        Commands::Validate { question_set } => commands::validate::execute(question_set),
        Commands::Show { report, format } => commands::show::execute(report, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
