//! DuckDB repository integration tests
//!
//! These verify wallet persistence against a real DuckDB database file in a
//! temp directory. Service behavior is covered by the mock-driven service
//! tests; here only the adapter is under test.

use tempfile::TempDir;
use uuid::Uuid;

use walletd_core::adapters::duckdb::DuckDbWalletRepository;
use walletd_core::domain::{NewWallet, Wallet};
use walletd_core::ports::WalletRepository;

const STELLAR: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";
const EVM: &str = "0x1234567890123456789012345678901234567890";

/// Create a test repository with schema initialized
fn create_test_repo(temp_dir: &TempDir) -> DuckDbWalletRepository {
    let db_path = temp_dir.path().join("test.duckdb");
    let repo = DuckDbWalletRepository::new(&db_path).expect("Failed to create repository");
    repo.ensure_schema().expect("Failed to initialize schema");
    repo
}

fn test_wallet(user_id: &str) -> Wallet {
    Wallet::new(user_id, NewWallet::default())
}

#[tokio::test]
async fn test_wallet_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);

    let wallet = Wallet::new(
        "user1",
        NewWallet {
            stellar_address: Some(STELLAR.to_string()),
            evm_address: Some(EVM.to_string()),
            is_primary: true,
        },
    );
    repo.add_wallet(&wallet).await.unwrap();

    let loaded = repo
        .get_wallet(wallet.id, "user1")
        .await
        .unwrap()
        .expect("wallet should exist");

    assert_eq!(loaded.id, wallet.id);
    assert_eq!(loaded.user_id, "user1");
    assert_eq!(loaded.stellar_address.as_deref(), Some(STELLAR));
    assert_eq!(loaded.evm_address.as_deref(), Some(EVM));
    assert!(loaded.is_primary);
    assert_eq!(loaded.created_at, wallet.created_at);
}

#[tokio::test]
async fn test_get_wallet_requires_owner_match() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);

    let wallet = test_wallet("user1");
    repo.add_wallet(&wallet).await.unwrap();

    assert!(repo.get_wallet(wallet.id, "user2").await.unwrap().is_none());
    assert!(repo.get_wallet(Uuid::new_v4(), "user1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_wallets_by_user_preserves_insertion_order() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);

    let wallets: Vec<Wallet> = (0..3).map(|_| test_wallet("user1")).collect();
    for wallet in &wallets {
        repo.add_wallet(wallet).await.unwrap();
    }
    repo.add_wallet(&test_wallet("user2")).await.unwrap();

    let loaded = repo.get_wallets_by_user("user1").await.unwrap();
    let loaded_ids: Vec<Uuid> = loaded.iter().map(|w| w.id).collect();
    let expected_ids: Vec<Uuid> = wallets.iter().map(|w| w.id).collect();

    assert_eq!(loaded_ids, expected_ids);
}

#[tokio::test]
async fn test_get_wallet_for_user() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);

    assert!(repo.get_wallet_for_user("user1").await.unwrap().is_none());

    let wallet = test_wallet("user1");
    repo.add_wallet(&wallet).await.unwrap();

    let found = repo.get_wallet_for_user("user1").await.unwrap().unwrap();
    assert_eq!(found.id, wallet.id);
}

#[tokio::test]
async fn test_update_wallet_persists_changes() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);

    let mut wallet = test_wallet("user1");
    repo.add_wallet(&wallet).await.unwrap();

    wallet.stellar_address = Some(STELLAR.to_string());
    wallet.is_primary = true;
    repo.update_wallet(&wallet).await.unwrap();

    let loaded = repo.get_wallet(wallet.id, "user1").await.unwrap().unwrap();
    assert_eq!(loaded.stellar_address.as_deref(), Some(STELLAR));
    assert!(loaded.is_primary);
}

#[tokio::test]
async fn test_clear_primary_flags_scoped_to_user() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);

    let mut w1 = test_wallet("user1");
    w1.is_primary = true;
    let mut w2 = test_wallet("user1");
    w2.is_primary = true;
    let mut other = test_wallet("user2");
    other.is_primary = true;

    for wallet in [&w1, &w2, &other] {
        repo.add_wallet(wallet).await.unwrap();
    }

    let affected = repo.clear_primary_flags("user1").await.unwrap();
    assert_eq!(affected, 2);

    let user1_wallets = repo.get_wallets_by_user("user1").await.unwrap();
    assert!(user1_wallets.iter().all(|w| !w.is_primary));

    let other_loaded = repo.get_wallet(other.id, "user2").await.unwrap().unwrap();
    assert!(other_loaded.is_primary, "other user's primary must survive");
}

#[tokio::test]
async fn test_delete_wallet_removes_single_row() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);

    let keep = test_wallet("user1");
    let gone = test_wallet("user1");
    repo.add_wallet(&keep).await.unwrap();
    repo.add_wallet(&gone).await.unwrap();

    repo.delete_wallet(gone.id).await.unwrap();

    let remaining = repo.get_wallets_by_user("user1").await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);

    // Second run must apply nothing and leave data intact
    let wallet = test_wallet("user1");
    repo.add_wallet(&wallet).await.unwrap();

    let result = repo.run_migrations().unwrap();
    assert!(result.applied.is_empty());

    assert!(repo.get_wallet(wallet.id, "user1").await.unwrap().is_some());
}
