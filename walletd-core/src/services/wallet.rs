//! Wallet registry service - wallet record invariants

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{NewWallet, Wallet, WalletUpdate};
use crate::ports::WalletRepository;

/// Wallet registry service
///
/// Enforces the registry invariants (one wallet per user at creation, at
/// most one primary wallet per user at update) and delegates storage to the
/// repository port.
pub struct WalletService {
    repository: Arc<dyn WalletRepository>,
}

impl WalletService {
    pub fn new(repository: Arc<dyn WalletRepository>) -> Self {
        Self { repository }
    }

    /// Register a wallet for a user
    ///
    /// Fails with Conflict if the user already owns a wallet.
    pub async fn create(&self, user_id: &str, fields: NewWallet) -> Result<Wallet> {
        if self
            .repository
            .get_wallet_for_user(user_id)
            .await?
            .is_some()
        {
            return Err(Error::conflict(format!(
                "user {} already has a wallet",
                user_id
            )));
        }

        let wallet = Wallet::new(user_id, fields);
        wallet.validate().map_err(Error::validation)?;
        self.repository.add_wallet(&wallet).await?;
        Ok(wallet)
    }

    /// All wallets owned by the user (possibly empty)
    pub async fn find_all(&self, user_id: &str) -> Result<Vec<Wallet>> {
        self.repository.get_wallets_by_user(user_id).await
    }

    /// The wallet matching both id and owner
    pub async fn find_one(&self, id: Uuid, user_id: &str) -> Result<Wallet> {
        self.repository
            .get_wallet(id, user_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("wallet {} for user {}", id, user_id)))
    }

    /// Apply a partial update to a wallet
    ///
    /// Setting the primary flag true first clears it on every wallet of the
    /// user, so at most one record carries it once the target is saved.
    pub async fn update(&self, id: Uuid, user_id: &str, update: WalletUpdate) -> Result<Wallet> {
        let mut wallet = self.find_one(id, user_id).await?;

        if update.is_primary == Some(true) {
            self.repository.clear_primary_flags(user_id).await?;
        }

        wallet.apply(update);
        wallet.validate().map_err(Error::validation)?;
        self.repository.update_wallet(&wallet).await?;
        Ok(wallet)
    }

    /// Delete a wallet
    pub async fn remove(&self, id: Uuid, user_id: &str) -> Result<()> {
        let wallet = self.find_one(id, user_id).await?;
        self.repository.delete_wallet(wallet.id).await
    }
}
