//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific
//! modules.

mod analyze;
mod claims;
mod documents;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use docsense::config::Settings;
use docsense::repository::SqliteDocumentStore;

#[derive(Parser)]
#[command(name = "docsense")]
#[command(about = "Insurance document analysis and classification")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Database file (overrides config and DOCSENSE_DATABASE)
    #[arg(short, long, global = true, env = "DOCSENSE_DATABASE")]
    database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the document database
    Init,

    /// Analyze a document and print the result
    Analyze {
        /// Path to the PDF or text file
        file: PathBuf,
        /// Tenant the document belongs to
        #[arg(short, long)]
        tenant: String,
        /// Declared content type (defaults to a filename-based guess)
        #[arg(long)]
        content_type: Option<String>,
        /// Print the raw JSON payload instead of the summary view
        #[arg(long)]
        json: bool,
    },

    /// List analyzed documents
    Documents {
        /// Tenant to list documents for
        #[arg(short, long)]
        tenant: String,
    },

    /// Summarize a policy document
    Summarize {
        /// Path to the PDF or text file
        file: PathBuf,
        /// Maximum summary length in words
        #[arg(long, default_value_t = docsense::services::summary::DEFAULT_MAX_WORDS)]
        max_words: usize,
    },

    /// Score a structured claim for fraud risk
    ScoreClaim {
        /// Claim identifier
        #[arg(long)]
        claim_id: String,
        /// Claimed amount
        #[arg(long)]
        amount: f64,
        /// Free-text claim description
        #[arg(long)]
        description: String,
        /// Claim filed by a third party
        #[arg(long)]
        third_party: bool,
        /// Number of previous claims by this customer
        #[arg(long, default_value_t = 0)]
        previous_claims: u32,
    },
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(database) = cli.database {
        settings.database = database;
    }

    match cli.command {
        Commands::Init => {
            SqliteDocumentStore::open(&settings.database)?;
            println!("Initialized database at {}", settings.database.display());
            Ok(())
        }
        Commands::Analyze {
            file,
            tenant,
            content_type,
            json,
        } => analyze::cmd_analyze(&settings, &file, &tenant, content_type, json).await,
        Commands::Documents { tenant } => documents::cmd_documents(&settings, &tenant).await,
        Commands::Summarize { file, max_words } => {
            analyze::cmd_summarize(&file, max_words).await
        }
        Commands::ScoreClaim {
            claim_id,
            amount,
            description,
            third_party,
            previous_claims,
        } => claims::cmd_score_claim(claim_id, amount, description, third_party, previous_claims),
    }
}
