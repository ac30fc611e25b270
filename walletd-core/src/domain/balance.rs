//! Aggregated balance entry domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A normalized on-chain balance entry produced by aggregation
///
/// Produced fresh on every aggregation call and never persisted. Amounts are
/// the verbatim strings returned by the ledger; no numeric reinterpretation
/// happens anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBalance {
    /// Asset code, or the ledger's native-asset marker when no code exists
    pub currency: String,
    /// Available amount, copied verbatim
    pub balance: String,
    /// Locked amount; "0" when the ledger entry omits it
    pub locked: String,
    /// Chain family the entry came from (e.g. "stellar")
    pub chain: String,
    /// Originating wallet
    pub wallet_id: Uuid,
}
