//! PriceLens CLI
//!
//! Converts, formats and inspects currencies from a terminal.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// PriceLens currency engine CLI
#[derive(Parser, Debug)]
#[command(name = "pricelens")]
#[command(about = "Convert and format prices across currencies")]
struct Args {
    /// Directory holding persisted preferences
    #[arg(long, global = true, default_value = ".pricelens")]
    state_dir: PathBuf,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an amount between two currencies
    Convert {
        amount: f64,
        from: String,
        to: String,
    },

    /// Format an amount in a currency
    Format {
        amount: f64,
        code: String,

        /// Locale for the locale-aware formatter (e.g. de-DE)
        #[arg(long)]
        locale: Option<String>,
    },

    /// List currencies, optionally for one region
    Currencies {
        /// Region key (americas, europe, africa, asia, middleEast, oceania, crypto)
        #[arg(long)]
        region: Option<String>,
    },

    /// Detect the user's country and currency
    Detect,

    /// Show or change stored preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand, Debug)]
enum PrefsAction {
    /// Print current preferences
    Show,
    /// Set the primary currency
    SetPrimary { code: String },
    /// Set the secondary currency ("none" clears it)
    SetSecondary { code: String },
    /// Turn first-run detection on or off
    AutoDetect { mode: Toggle },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Toggle {
    On,
    Off,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so command output stays clean on stdout.
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
    );
    if args.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    match args.command {
        Command::Convert { amount, from, to } => {
            commands::convert(&args.state_dir, amount, &from, &to).await
        }
        Command::Format { amount, code, locale } => {
            commands::format(amount, &code, locale.as_deref());
            Ok(())
        }
        Command::Currencies { region } => commands::currencies(region.as_deref()),
        Command::Detect => {
            commands::detect().await;
            Ok(())
        }
        Command::Prefs { action } => match action {
            PrefsAction::Show => commands::prefs_show(&args.state_dir).await,
            PrefsAction::SetPrimary { code } => commands::set_primary(&args.state_dir, &code).await,
            PrefsAction::SetSecondary { code } => commands::set_secondary(&args.state_dir, &code).await,
            PrefsAction::AutoDetect { mode } => {
                commands::set_auto_detect(&args.state_dir, matches!(mode, Toggle::On)).await
            }
        },
    }
}
