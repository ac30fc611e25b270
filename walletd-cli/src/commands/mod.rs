//! CLI command implementations

pub mod add;
pub mod balances;
pub mod demo;
pub mod list;
pub mod logs;
pub mod remove;
pub mod show;
pub mod update;

use std::path::PathBuf;

use anyhow::{Context, Result};
use uuid::Uuid;
use walletd_core::{EntryPoint, LogEvent, LoggingService, WalletdContext};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let walletd_dir = get_walletd_dir();
    std::fs::create_dir_all(&walletd_dir).ok()?;
    LoggingService::new(&walletd_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the walletd directory from environment or default
pub fn get_walletd_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WALLETD_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".walletd")
    }
}

/// Get or create walletd context
pub fn get_context() -> Result<WalletdContext> {
    let walletd_dir = get_walletd_dir();

    std::fs::create_dir_all(&walletd_dir)
        .with_context(|| format!("Failed to create walletd directory: {:?}", walletd_dir))?;

    WalletdContext::new(&walletd_dir).context("Failed to initialize walletd context")
}

/// Parse a wallet id argument
pub fn parse_wallet_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).with_context(|| format!("Invalid wallet id: {}", id))
}
