//! Show command - display a single wallet

use anyhow::Result;

use super::{get_context, parse_wallet_id};
use crate::output;

pub async fn run(id: &str, user: &str, json: bool) -> Result<()> {
    let wallet_id = parse_wallet_id(id)?;
    let ctx = get_context()?;
    let wallet = ctx.wallet_service.find_one(wallet_id, user).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&wallet)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.add_row(vec!["ID", &wallet.id.to_string()]);
    table.add_row(vec!["User", &wallet.user_id]);
    table.add_row(vec![
        "Stellar",
        wallet.stellar_address.as_deref().unwrap_or("-"),
    ]);
    table.add_row(vec!["EVM", wallet.evm_address.as_deref().unwrap_or("-")]);
    table.add_row(vec!["Primary", if wallet.is_primary { "yes" } else { "no" }]);
    table.add_row(vec![
        "Created",
        &wallet.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]);
    table.add_row(vec![
        "Updated",
        &wallet.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]);

    println!("{}", table);
    Ok(())
}
