use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use zengin_core::{Catalog, DirSource};

mod commands;
mod config;

use commands::Output;
use config::Config;

#[derive(Debug, Parser)]
#[command(name = "zengin", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Root of a zengin-code source-data checkout (default: ./source-data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    #[command(flatten)]
    Query(QueryCommand),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Commands that read the catalog.
#[derive(Debug, clap::Subcommand)]
enum QueryCommand {
    /// Show one bank by its four-digit code
    Bank {
        /// Bank code, e.g. 0001
        code: String,
    },
    /// Show one branch by bank code and branch code
    Branch {
        /// Bank code, e.g. 0001
        bank_code: String,
        /// Branch code, e.g. 001
        branch_code: String,
    },
    /// List every bank
    Banks,
    /// List every branch of a bank
    Branches {
        /// Bank code, e.g. 0001
        bank_code: String,
    },
    /// Find banks whose name matches a regular expression
    ///
    /// The pattern is matched anywhere in the name, so `みずほ` and
    /// `.*みずほ.*` are equivalent. Use `^` and `$` to anchor.
    SearchBanks {
        /// Regular expression matched against bank names
        pattern: String,
    },
    /// Find branches of a bank whose name matches a regular expression
    SearchBranches {
        /// Bank code, e.g. 0001
        bank_code: String,
        /// Regular expression matched against branch names
        pattern: String,
    },
    /// Show catalog statistics
    Stats,
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Show the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_with_data_dir(cli.data_dir)?;

    twyg::setup(config.logging.clone())
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {e}"))?;

    let output = if cli.json { Output::Json } else { Output::Text };

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Show => commands::config::show_config(&config),
        },
        Commands::Query(query) => {
            let catalog = load_catalog(&config)?;
            run_query(&catalog, query, output)
        }
    }
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    log::debug!("Loading catalog from {}", config.data_dir.display());
    Catalog::from_source(&DirSource::new(&config.data_dir))
        .with_context(|| format!("Failed to load catalog from {}", config.data_dir.display()))
}

fn run_query(catalog: &Catalog, query: QueryCommand, output: Output) -> Result<()> {
    match query {
        QueryCommand::Bank { code } => commands::lookup::show_bank(catalog, &code, output),
        QueryCommand::Branch {
            bank_code,
            branch_code,
        } => commands::lookup::show_branch(catalog, &bank_code, &branch_code, output),
        QueryCommand::Banks => commands::lookup::list_banks(catalog, output),
        QueryCommand::Branches { bank_code } => {
            commands::lookup::list_branches(catalog, &bank_code, output)
        }
        QueryCommand::SearchBanks { pattern } => {
            commands::search::search_banks(catalog, &pattern, output)
        }
        QueryCommand::SearchBranches { bank_code, pattern } => {
            commands::search::search_branches(catalog, &bank_code, &pattern, output)
        }
        QueryCommand::Stats => commands::stats::show_stats(catalog, output),
    }
}
