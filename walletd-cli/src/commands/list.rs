//! List command - list a user's wallets

use anyhow::Result;
use walletd_core::Wallet;

use super::get_context;
use crate::output;

pub async fn run(user: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let wallets = ctx.wallet_service.find_all(user).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&wallets)?);
        return Ok(());
    }

    if wallets.is_empty() {
        println!("No wallets registered for user {}.", user);
        return Ok(());
    }

    print_wallet_table(&wallets);
    Ok(())
}

fn print_wallet_table(wallets: &[Wallet]) {
    let mut table = output::create_table();
    table.set_header(vec!["ID", "Stellar", "EVM", "Primary", "Created"]);

    for wallet in wallets {
        table.add_row(vec![
            wallet.id.to_string(),
            wallet
                .stellar_address
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            wallet.evm_address.clone().unwrap_or_else(|| "-".to_string()),
            if wallet.is_primary { "yes" } else { "" }.to_string(),
            wallet.created_at.format("%Y-%m-%d").to_string(),
        ]);
    }

    println!("{}", table);
}
