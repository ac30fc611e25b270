//! Ledger query port
//!
//! Defines the interface for fetching on-chain balance entries for a given
//! chain address from an external ledger-query service (Horizon, demo data).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::result::Result;

/// Raw balance entry as returned by a ledger-query service
///
/// `asset_code` is absent for native-asset entries; `asset_type` then carries
/// the native marker. `locked` is absent when the ledger reports no locked
/// amount for the entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerBalance {
    #[serde(default)]
    pub asset_code: Option<String>,
    #[serde(default)]
    pub asset_type: Option<String>,
    pub balance: String,
    #[serde(default)]
    pub locked: Option<String>,
}

/// Ledger query provider trait
///
/// Implementations fetch balance entries for a chain address. The
/// BalanceService uses this trait to aggregate balances without knowing the
/// specifics of each ledger (Horizon, demo, etc.)
#[async_trait]
pub trait LedgerProvider: Send + Sync {
    /// Provider name (e.g., "horizon", "demo")
    fn name(&self) -> &str;

    /// Chain family tag stamped onto normalized entries (e.g., "stellar")
    fn chain(&self) -> &str;

    /// Fetch balance entries for an address
    async fn get_account_balances(&self, address: &str) -> Result<Vec<LedgerBalance>>;
}
