//! Demo ledger provider
//!
//! Serves deterministic canned balances so demo mode works offline. Every
//! address gets a native-asset entry (no asset code, no locked amount) plus
//! an issued-asset entry, so both normalization paths stay exercised.

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::ports::{LedgerBalance, LedgerProvider};

/// Demo ledger provider with deterministic per-address balances
pub struct DemoLedgerProvider;

impl DemoLedgerProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DemoLedgerProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerProvider for DemoLedgerProvider {
    fn name(&self) -> &str {
        "demo"
    }

    fn chain(&self) -> &str {
        "stellar"
    }

    async fn get_account_balances(&self, address: &str) -> Result<Vec<LedgerBalance>> {
        // Amounts derived from the address bytes, stable across calls
        let seed: u64 = address.bytes().map(u64::from).sum();
        let native = 100 + seed % 900;
        let issued = 10 + seed % 90;

        Ok(vec![
            LedgerBalance {
                asset_code: None,
                asset_type: Some("native".to_string()),
                balance: format!("{}.0000000", native),
                locked: None,
            },
            LedgerBalance {
                asset_code: Some("USDC".to_string()),
                asset_type: Some("credit_alphanum4".to_string()),
                balance: format!("{}.2500000", issued),
                locked: Some("5.0000000".to_string()),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_balances_are_deterministic() {
        let provider = DemoLedgerProvider::new();
        let first = provider.get_account_balances("GABC").await.unwrap();
        let second = provider.get_account_balances("GABC").await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(first[0].balance, second[0].balance);
        assert_eq!(first[1].balance, second[1].balance);
    }

    #[tokio::test]
    async fn test_native_entry_has_no_code_or_locked() {
        let provider = DemoLedgerProvider::new();
        let balances = provider.get_account_balances("GDEF").await.unwrap();

        assert!(balances[0].asset_code.is_none());
        assert_eq!(balances[0].asset_type.as_deref(), Some("native"));
        assert!(balances[0].locked.is_none());
    }
}
