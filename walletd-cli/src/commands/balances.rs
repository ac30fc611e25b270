//! Balances command - aggregated on-chain balances for a user

use anyhow::Result;
use walletd_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub async fn run(user: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let provider = if ctx.config.demo_mode { "demo" } else { "horizon" };

    let balances = match ctx.balance_service.get_user_balances(user).await {
        Ok(balances) => balances,
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("balances_failed")
                    .with_command("balances")
                    .with_provider(provider)
                    .with_error(e.to_string()),
            );
            return Err(e.into());
        }
    };

    log_event(
        &logger,
        LogEvent::new("balances_fetched")
            .with_command("balances")
            .with_provider(provider),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&balances)?);
        return Ok(());
    }

    if balances.is_empty() {
        println!("No on-chain balances for user {}.", user);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Currency", "Available", "Locked", "Chain", "Wallet"]);

    for balance in &balances {
        table.add_row(vec![
            balance.currency.clone(),
            balance.balance.clone(),
            balance.locked.clone(),
            balance.chain.clone(),
            balance.wallet_id.to_string(),
        ]);
    }

    println!("{}", table);
    Ok(())
}
