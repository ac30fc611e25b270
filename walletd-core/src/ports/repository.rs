//! Repository port - persistence abstraction

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::Wallet;

/// Wallet persistence abstraction
///
/// This trait defines all storage operations over wallet records.
/// Implementations (adapters) provide the actual database access logic.
/// Lookups are exact-match conjunctions over fields (id + owner, owner only).
#[async_trait]
pub trait WalletRepository: Send + Sync {
    /// Persist a new wallet record
    async fn add_wallet(&self, wallet: &Wallet) -> Result<()>;

    /// Get the wallet matching both id and owner
    async fn get_wallet(&self, id: Uuid, user_id: &str) -> Result<Option<Wallet>>;

    /// Get any wallet owned by the user (creation-conflict probe)
    async fn get_wallet_for_user(&self, user_id: &str) -> Result<Option<Wallet>>;

    /// Get all wallets owned by the user, in insertion order
    async fn get_wallets_by_user(&self, user_id: &str) -> Result<Vec<Wallet>>;

    /// Persist changes to an existing wallet record
    async fn update_wallet(&self, wallet: &Wallet) -> Result<()>;

    /// Clear the primary flag on every wallet owned by the user
    ///
    /// Returns the number of records affected.
    async fn clear_primary_flags(&self, user_id: &str) -> Result<u64>;

    /// Delete a wallet record
    async fn delete_wallet(&self, id: Uuid) -> Result<()>;
}
