//! DuckDB repository implementation

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use duckdb::{params, Connection};
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::Wallet;
use crate::ports::WalletRepository;
use crate::services::MigrationService;

/// Maximum number of retries when database file is locked
const MAX_RETRIES: u32 = 5;

/// Initial retry delay in milliseconds (doubles each retry: 50, 100, 200, 400, 800ms)
const INITIAL_RETRY_DELAY_MS: u64 = 50;

/// Check if an error message indicates a file locking issue that should be retried
fn is_retryable_error(err_msg: &str) -> bool {
    let lower = err_msg.to_lowercase();
    // Windows error messages
    lower.contains("being used by another process")
        || lower.contains("cannot access the file")
        // Unix/macOS error messages
        || lower.contains("resource temporarily unavailable")
        || lower.contains("database is locked")
        || lower.contains("file is already open")
}

/// Parse an RFC 3339 timestamp column, falling back to now on bad data
fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

const WALLET_COLUMNS: &str =
    "wallet_id, user_id, stellar_address, evm_address, is_primary, created_at, updated_at";

/// DuckDB-backed wallet repository
pub struct DuckDbWalletRepository {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl DuckDbWalletRepository {
    /// Create a new DuckDB repository
    ///
    /// Includes retry logic with exponential backoff for file locking errors,
    /// which can occur when multiple processes try to access the database
    /// simultaneously.
    pub fn new(db_path: &Path) -> anyhow::Result<Self> {
        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            match Self::try_open_connection(db_path) {
                Ok(conn) => {
                    return Ok(Self {
                        conn: Mutex::new(conn),
                        db_path: db_path.to_path_buf(),
                    });
                }
                Err(e) => {
                    let err_msg = e.to_string();
                    if is_retryable_error(&err_msg) && attempt < MAX_RETRIES - 1 {
                        let delay =
                            Duration::from_millis(INITIAL_RETRY_DELAY_MS * 2u64.pow(attempt));
                        eprintln!(
                            "[walletd] Database busy, retrying in {}ms (attempt {}/{}): {}",
                            delay.as_millis(),
                            attempt + 1,
                            MAX_RETRIES,
                            err_msg
                        );
                        thread::sleep(delay);
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            anyhow::anyhow!("Failed to open database after {} retries", MAX_RETRIES)
        }))
    }

    /// Attempt to open a database connection (called by new() with retry logic)
    fn try_open_connection(db_path: &Path) -> anyhow::Result<Connection> {
        // Disable extension autoloading; cached extensions can fail code
        // signing checks on macOS
        let config = duckdb::Config::default().enable_autoload_extension(false)?;
        let conn = Connection::open_with_flags(db_path, config)?;
        Ok(conn)
    }

    /// Run database migrations using the MigrationService
    pub fn run_migrations(&self) -> anyhow::Result<crate::services::MigrationResult> {
        let conn = self.conn.lock().unwrap();
        let migration_service = MigrationService::new(&conn);
        migration_service.run_pending()
    }

    /// Ensure database schema exists (runs pending migrations)
    pub fn ensure_schema(&self) -> anyhow::Result<()> {
        self.run_migrations()?;
        Ok(())
    }

    /// Path of the underlying database file
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn row_to_wallet(row: &duckdb::Row) -> Wallet {
        // Column order matches WALLET_COLUMNS
        let id_str: String = row.get(0).unwrap_or_default();
        let created_str: String = row.get(5).unwrap_or_default();
        let updated_str: String = row.get(6).unwrap_or_default();

        Wallet {
            id: Uuid::parse_str(&id_str).unwrap_or_else(|_| Uuid::nil()),
            user_id: row.get(1).unwrap_or_default(),
            stellar_address: row.get(2).ok(),
            evm_address: row.get(3).ok(),
            is_primary: row.get(4).unwrap_or(false),
            created_at: parse_timestamp(&created_str),
            updated_at: parse_timestamp(&updated_str),
        }
    }
}

#[async_trait]
impl WalletRepository for DuckDbWalletRepository {
    async fn add_wallet(&self, wallet: &Wallet) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            &format!("INSERT INTO sys_wallets ({WALLET_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?)"),
            params![
                wallet.id.to_string(),
                wallet.user_id,
                wallet.stellar_address,
                wallet.evm_address,
                wallet.is_primary,
                wallet.created_at.to_rfc3339(),
                wallet.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    async fn get_wallet(&self, id: Uuid, user_id: &str) -> Result<Option<Wallet>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {WALLET_COLUMNS} FROM sys_wallets WHERE wallet_id = ? AND user_id = ?"
        ))?;

        let wallet = stmt
            .query_row(params![id.to_string(), user_id], |row| {
                Ok(Self::row_to_wallet(row))
            })
            .ok();

        Ok(wallet)
    }

    async fn get_wallet_for_user(&self, user_id: &str) -> Result<Option<Wallet>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {WALLET_COLUMNS} FROM sys_wallets WHERE user_id = ? ORDER BY rowid LIMIT 1"
        ))?;

        let wallet = stmt
            .query_row([user_id], |row| Ok(Self::row_to_wallet(row)))
            .ok();

        Ok(wallet)
    }

    async fn get_wallets_by_user(&self, user_id: &str) -> Result<Vec<Wallet>> {
        let conn = self.conn.lock().unwrap();
        // rowid preserves insertion order for per-user listings
        let mut stmt = conn.prepare(&format!(
            "SELECT {WALLET_COLUMNS} FROM sys_wallets WHERE user_id = ? ORDER BY rowid"
        ))?;

        let wallets = stmt
            .query_map([user_id], |row| Ok(Self::row_to_wallet(row)))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(wallets)
    }

    async fn update_wallet(&self, wallet: &Wallet) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "UPDATE sys_wallets
             SET user_id = ?, stellar_address = ?, evm_address = ?, is_primary = ?, updated_at = ?
             WHERE wallet_id = ?",
            params![
                wallet.user_id,
                wallet.stellar_address,
                wallet.evm_address,
                wallet.is_primary,
                wallet.updated_at.to_rfc3339(),
                wallet.id.to_string(),
            ],
        )?;
        Ok(())
    }

    async fn clear_primary_flags(&self, user_id: &str) -> Result<u64> {
        let conn = self.conn.lock().unwrap();
        let affected = conn.execute(
            "UPDATE sys_wallets SET is_primary = FALSE WHERE user_id = ? AND is_primary",
            [user_id],
        )?;
        Ok(affected as u64)
    }

    async fn delete_wallet(&self, id: Uuid) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "DELETE FROM sys_wallets WHERE wallet_id = ?",
            [id.to_string()],
        )?;
        Ok(())
    }
}
