//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - DuckDB for the WalletRepository port
//! - Horizon HTTP client for the LedgerProvider port
//! - Demo ledger provider for demo mode and offline use

pub mod demo;
pub mod duckdb;
pub mod horizon;
