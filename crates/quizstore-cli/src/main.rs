//! quizstore CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "quizstore",
    version,
    about = "Step through quizzes from the terminal"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and sample catalog
    Init,

    /// Load the quiz catalog from the configured source
    Fetch,

    /// List quizzes in the catalog
    List,

    /// Start a quiz by 1-based number or title
    Select {
        /// Quiz number (see `list`) or title
        quiz: String,
    },

    /// Answer a question
    Answer {
        /// Question id
        question_id: i64,

        /// Option text, or its 1-based number
        option: String,
    },

    /// Go to the next question
    Next,

    /// Go to the previous question
    Prev,

    /// Finish the quiz and compute the score
    Complete,

    /// Leave the current quiz
    Reset,

    /// Show where the session is
    Status,

    /// Show the result of the completed quiz
    Result {
        /// Output format: text, json, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quizstore=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Fetch => commands::fetch::execute(config).await,
        Commands::List => commands::list::execute(config),
        Commands::Select { quiz } => commands::play::select(config, quiz),
        Commands::Answer {
            question_id,
            option,
        } => commands::play::answer(config, question_id, option),
        Commands::Next => commands::play::next(config),
        Commands::Prev => commands::play::previous(config),
        Commands::Complete => commands::play::complete(config),
        Commands::Reset => commands::play::reset(config),
        Commands::Status => commands::status::execute(config),
        Commands::Result { format, output } => commands::result::execute(config, format, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
