//! Remove command - delete a wallet

use anyhow::Result;
use dialoguer::Confirm;
use walletd_core::LogEvent;

use super::{get_context, get_logger, log_event, parse_wallet_id};
use crate::output;

pub async fn run(id: &str, user: &str, force: bool) -> Result<()> {
    let wallet_id = parse_wallet_id(id)?;
    let ctx = get_context()?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove wallet {}?", wallet_id))
            .default(false)
            .interact()?;
        if !confirmed {
            output::warning("Cancelled.");
            return Ok(());
        }
    }

    let logger = get_logger();
    match ctx.wallet_service.remove(wallet_id, user).await {
        Ok(()) => {
            log_event(&logger, LogEvent::new("wallet_removed").with_command("remove"));
            output::success(&format!("Removed wallet {}", wallet_id));
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("wallet_remove_failed")
                    .with_command("remove")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
