//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod ledger;
mod repository;

pub use ledger::{LedgerBalance, LedgerProvider};
pub use repository::WalletRepository;
