//! Update command - patch wallet fields or toggle the primary flag

use anyhow::Result;
use walletd_core::{LogEvent, WalletUpdate};

use super::{get_context, get_logger, log_event, parse_wallet_id};
use crate::output;

pub async fn run(
    id: &str,
    user: &str,
    stellar_address: Option<String>,
    evm_address: Option<String>,
    primary: Option<bool>,
    json: bool,
) -> Result<()> {
    let wallet_id = parse_wallet_id(id)?;
    let ctx = get_context()?;
    let logger = get_logger();

    let result = ctx
        .wallet_service
        .update(
            wallet_id,
            user,
            WalletUpdate {
                stellar_address,
                evm_address,
                is_primary: primary,
            },
        )
        .await;

    let wallet = match result {
        Ok(wallet) => wallet,
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("wallet_update_failed")
                    .with_command("update")
                    .with_error(e.to_string()),
            );
            return Err(e.into());
        }
    };

    log_event(&logger, LogEvent::new("wallet_updated").with_command("update"));

    if json {
        println!("{}", serde_json::to_string_pretty(&wallet)?);
        return Ok(());
    }

    output::success(&format!("Updated wallet {}", wallet.id));
    if wallet.is_primary {
        println!("This wallet is now the primary wallet.");
    }
    Ok(())
}
