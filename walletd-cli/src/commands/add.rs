//! Add command - register a wallet for a user

use anyhow::Result;
use walletd_core::{LogEvent, NewWallet};

use super::{get_context, get_logger, log_event};
use crate::output;

pub async fn run(
    user: &str,
    stellar_address: Option<String>,
    evm_address: Option<String>,
    primary: bool,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let result = ctx
        .wallet_service
        .create(
            user,
            NewWallet {
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
                LogEvent::new("wallet_create_failed")
                    .with_command("add")
                    .with_error(e.to_string()),
            );
            return Err(e.into());
        }
    };

    log_event(&logger, LogEvent::new("wallet_created").with_command("add"));

    if json {
        println!("{}", serde_json::to_string_pretty(&wallet)?);
        return Ok(());
    }

    output::success(&format!("Registered wallet {}", wallet.id));
    if wallet.is_primary {
        println!("Marked as primary wallet.");
    }
    Ok(())
}
