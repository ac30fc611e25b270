//! Balance service - on-chain balance aggregation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::AssetBalance;
use crate::ports::{LedgerBalance, LedgerProvider, WalletRepository};

/// Balance service for on-chain balance aggregation
pub struct BalanceService {
    repository: Arc<dyn WalletRepository>,
    ledger: Arc<dyn LedgerProvider>,
}

impl BalanceService {
    pub fn new(repository: Arc<dyn WalletRepository>, ledger: Arc<dyn LedgerProvider>) -> Self {
        Self { repository, ledger }
    }

    /// Aggregate on-chain balances across all of a user's wallets
    ///
    /// Wallets without a chain address contribute nothing; the rest are
    /// queried sequentially and their entries concatenated in wallet order,
    /// preserving within-wallet entry order. A ledger failure for any wallet
    /// aborts the whole call.
    pub async fn get_user_balances(&self, user_id: &str) -> Result<Vec<AssetBalance>> {
        let wallets = self.repository.get_wallets_by_user(user_id).await?;
        if wallets.is_empty() {
            return Ok(Vec::new());
        }

        let mut balances = Vec::new();
        for wallet in &wallets {
            let address = match wallet.stellar_address.as_deref() {
                Some(a) => a,
                None => continue,
            };

            for entry in self.ledger.get_account_balances(address).await? {
                balances.push(normalize(entry, self.ledger.chain(), wallet.id));
            }
        }

        Ok(balances)
    }
}

/// Normalize a raw ledger entry into an AssetBalance
///
/// Currency falls back from the asset code to the entry's native-asset
/// marker; entries carrying neither are tagged "unknown". Amounts are copied
/// verbatim; a missing locked amount becomes the literal "0".
fn normalize(entry: LedgerBalance, chain: &str, wallet_id: Uuid) -> AssetBalance {
    AssetBalance {
        currency: entry
            .asset_code
            .or(entry.asset_type)
            .unwrap_or_else(|| "unknown".to_string()),
        balance: entry.balance,
        locked: entry.locked.unwrap_or_else(|| "0".to_string()),
        chain: chain.to_string(),
        wallet_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_issued_asset() {
        let wallet_id = Uuid::new_v4();
        let entry = LedgerBalance {
            asset_code: Some("USD".to_string()),
            asset_type: Some("credit_alphanum4".to_string()),
            balance: "100.5000000".to_string(),
            locked: Some("10".to_string()),
        };

        let balance = normalize(entry, "stellar", wallet_id);

        assert_eq!(balance.currency, "USD");
        assert_eq!(balance.balance, "100.5000000");
        assert_eq!(balance.locked, "10");
        assert_eq!(balance.chain, "stellar");
        assert_eq!(balance.wallet_id, wallet_id);
    }

    #[test]
    fn test_normalize_native_entry_defaults_locked() {
        let entry = LedgerBalance {
            asset_code: None,
            asset_type: Some("native".to_string()),
            balance: "50".to_string(),
            locked: None,
        };

        let balance = normalize(entry, "stellar", Uuid::new_v4());

        assert_eq!(balance.currency, "native");
        assert_eq!(balance.locked, "0");
    }

    #[test]
    fn test_normalize_entry_without_markers() {
        let entry = LedgerBalance {
            balance: "1".to_string(),
            ..Default::default()
        };

        let balance = normalize(entry, "stellar", Uuid::new_v4());
        assert_eq!(balance.currency, "unknown");
    }
}
