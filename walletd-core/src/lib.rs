//! Walletd Core - Business logic for multi-tenant wallet management
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Wallet, AssetBalance)
//! - **ports**: Trait definitions for external dependencies (WalletRepository, LedgerProvider)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (DuckDB, Horizon, demo)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod log_migrations;
pub mod migrations;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::demo::DemoLedgerProvider;
use adapters::duckdb::DuckDbWalletRepository;
use adapters::horizon::HorizonClient;
use config::Config;
use ports::{LedgerProvider, WalletRepository};

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{AssetBalance, NewWallet, Wallet, WalletUpdate};
pub use services::{
    BalanceService, EntryPoint, LogEntry, LogEvent, LoggingService, WalletService,
};

/// Main context for walletd operations
///
/// This is the primary entry point for embedding applications. It holds the
/// database connection, configuration, and all services.
pub struct WalletdContext {
    pub config: Config,
    pub repository: Arc<DuckDbWalletRepository>,
    pub wallet_service: WalletService,
    pub balance_service: BalanceService,
}

impl WalletdContext {
    /// Create a new walletd context
    pub fn new(walletd_dir: &Path) -> Result<Self> {
        let config = Config::load(walletd_dir)?;

        // Demo mode keeps its own database file
        let db_filename = if config.demo_mode {
            "demo.duckdb"
        } else {
            "walletd.duckdb"
        };

        let db_path = walletd_dir.join(db_filename);
        let repository = Arc::new(DuckDbWalletRepository::new(&db_path)?);

        // Initialize schema
        repository.ensure_schema()?;

        let ledger: Arc<dyn LedgerProvider> = if config.demo_mode {
            Arc::new(DemoLedgerProvider::new())
        } else {
            Arc::new(HorizonClient::new(&config.horizon_url)?)
        };

        let repo: Arc<dyn WalletRepository> = repository.clone();
        let wallet_service = WalletService::new(Arc::clone(&repo));
        let balance_service = BalanceService::new(repo, ledger);

        Ok(Self {
            config,
            repository,
            wallet_service,
            balance_service,
        })
    }
}
