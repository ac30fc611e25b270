//! walletd CLI - multi-tenant wallet management in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{add, balances, demo, list, logs, remove, show, update};

/// walletd - wallet management in your terminal
#[derive(Parser)]
#[command(name = "wd", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a wallet for a user
    Add {
        /// Owning user id
        #[arg(long)]
        user: String,
        /// Stellar address to link
        #[arg(long)]
        stellar_address: Option<String>,
        /// EVM address to link
        #[arg(long)]
        evm_address: Option<String>,
        /// Mark the wallet as primary
        #[arg(long)]
        primary: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List a user's wallets
    List {
        /// Owning user id
        #[arg(long)]
        user: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single wallet
    Show {
        /// Wallet id
        id: String,
        /// Owning user id
        #[arg(long)]
        user: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update wallet fields or toggle the primary flag
    Update {
        /// Wallet id
        id: String,
        /// Owning user id
        #[arg(long)]
        user: String,
        /// New Stellar address
        #[arg(long)]
        stellar_address: Option<String>,
        /// New EVM address
        #[arg(long)]
        evm_address: Option<String>,
        /// Set or clear the primary flag
        #[arg(long)]
        primary: Option<bool>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a wallet
    Remove {
        /// Wallet id
        id: String,
        /// Owning user id
        #[arg(long)]
        user: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Show aggregated on-chain balances for a user
    Balances {
        /// Owning user id
        #[arg(long)]
        user: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// View and manage application logs
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Add {
            user,
            stellar_address,
            evm_address,
            primary,
            json,
        } => add::run(&user, stellar_address, evm_address, primary, json).await,
        Commands::List { user, json } => list::run(&user, json).await,
        Commands::Show { id, user, json } => show::run(&id, &user, json).await,
        Commands::Update {
            id,
            user,
            stellar_address,
            evm_address,
            primary,
            json,
        } => update::run(&id, &user, stellar_address, evm_address, primary, json).await,
        Commands::Remove { id, user, force } => remove::run(&id, &user, force).await,
        Commands::Balances { user, json } => balances::run(&user, json).await,
        Commands::Demo { command } => demo::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
