//! Demo command - manage demo mode

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use walletd_core::config::Config;

use super::get_walletd_dir;

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode
    #[command(name = "on")]
    On,
    /// Disable demo mode
    #[command(name = "off")]
    Off,
    /// Show demo mode status
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let walletd_dir = get_walletd_dir();
    std::fs::create_dir_all(&walletd_dir)?;
    let mut config = Config::load(&walletd_dir)?;

    match command {
        Some(DemoCommands::On) => {
            config.demo_mode = true;
            config.save(&walletd_dir)?;
            println!("{}", "Demo mode enabled".green());
            println!("Balances now come from the built-in demo ledger. Run 'wd balances' to try it.");
            Ok(())
        }
        Some(DemoCommands::Off) => {
            config.demo_mode = false;
            config.save(&walletd_dir)?;
            println!("{}", "Demo mode disabled".yellow());
            Ok(())
        }
        Some(DemoCommands::Status) | None => {
            if config.demo_mode {
                println!("Demo mode is {}", "ON".green());
            } else {
                println!("Demo mode is {}", "OFF".yellow());
            }
            Ok(())
        }
    }
}
