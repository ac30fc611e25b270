//! Wallet domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blockchain wallet owned by a user
///
/// A wallet may carry a Stellar address, an EVM-style address, or both.
/// At most one wallet per user carries the primary flag; the registry
/// enforces this at the point of mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub id: Uuid,
    pub user_id: String,
    /// Stellar public key ("G…", 56-char base32) when linked
    pub stellar_address: Option<String>,
    /// EVM-style address ("0x" + 40 hex digits) when linked
    pub evm_address: Option<String>,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when registering a wallet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWallet {
    #[serde(default)]
    pub stellar_address: Option<String>,
    #[serde(default)]
    pub evm_address: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// Partial update; absent fields leave the stored values unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletUpdate {
    #[serde(default)]
    pub stellar_address: Option<String>,
    #[serde(default)]
    pub evm_address: Option<String>,
    #[serde(default)]
    pub is_primary: Option<bool>,
}

impl Wallet {
    /// Create a wallet for a user from registration fields
    pub fn new(user_id: impl Into<String>, fields: NewWallet) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            stellar_address: fields.stellar_address,
            evm_address: fields.evm_address,
            is_primary: fields.is_primary,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place and bump `updated_at`
    pub fn apply(&mut self, update: WalletUpdate) {
        if let Some(addr) = update.stellar_address {
            self.stellar_address = Some(addr);
        }
        if let Some(addr) = update.evm_address {
            self.evm_address = Some(addr);
        }
        if let Some(primary) = update.is_primary {
            self.is_primary = primary;
        }
        self.updated_at = Utc::now();
    }

    /// Validate wallet data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.user_id.trim().is_empty() {
            return Err("user id cannot be empty");
        }
        if let Some(addr) = &self.stellar_address {
            if !is_valid_stellar_address(addr) {
                return Err("invalid Stellar address");
            }
        }
        if let Some(addr) = &self.evm_address {
            if !is_valid_evm_address(addr) {
                return Err("invalid EVM address");
            }
        }
        Ok(())
    }
}

/// Stellar account IDs are 56-character base32 strings starting with 'G'
pub fn is_valid_stellar_address(addr: &str) -> bool {
    addr.len() == 56
        && addr.starts_with('G')
        && addr.chars().all(|c| matches!(c, 'A'..='Z' | '2'..='7'))
}

/// EVM addresses are "0x" followed by 40 hex digits
pub fn is_valid_evm_address(addr: &str) -> bool {
    addr.len() == 42
        && addr.starts_with("0x")
        && addr[2..].chars().all(|c| c.is_ascii_hexdigit())
}
