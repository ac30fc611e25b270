//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod balance;
pub mod result;
mod wallet;

pub use balance::AssetBalance;
pub use wallet::{is_valid_evm_address, is_valid_stellar_address, NewWallet, Wallet, WalletUpdate};
