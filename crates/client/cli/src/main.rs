//! Command-line front end for the reward engine.
//!
//! Generates one batch for a player from the bundled content, shows the
//! preview, and then confirms or declines it on the approver's behalf.
mod bootstrap;
mod config;
mod notifier;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use reward_core::{BatchKind, ChannelRef, LuckLevel, PlayerId};
use serde_json::json;

use config::CliConfig;

/// Generate and resolve a reward batch
#[derive(Parser)]
#[command(name = "rewards")]
#[command(about = "Luck-driven reward batches with approval", long_about = None)]
#[command(version)]
struct Cli {
    /// Player to reward
    #[arg(short, long)]
    player: String,

    /// Batch to build: care-package, item-rain, or power-drop
    #[arg(short, long, default_value = "care-package")]
    kind: BatchKind,

    /// Roll tiers at this luck level instead of the stored one
    #[arg(long, value_name = "LEVEL")]
    luck_override: Option<u32>,

    /// Decline the batch instead of confirming it
    #[arg(long)]
    decline: bool,

    /// Print the preview and outcome as JSON
    #[arg(long)]
    json: bool,

    /// Content directory (overrides REWARD_DATA_DIR)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.resolve_data_dir());

    let session = bootstrap::build_session(&config, &data_dir, cli.json)?;
    let engine = &session.engine;
    let player = PlayerId::new(&cli.player);

    let batch = engine
        .generate_batch(cli.kind, &player, cli.luck_override.map(LuckLevel::new))
        .await
        .with_context(|| format!("Failed to generate {} for {}", cli.kind.label(), player))?;

    let pending = engine.stage(
        batch,
        ChannelRef::new("approvals"),
        ChannelRef::new(format!("{player}-inbox")),
    );
    if !cli.json {
        render::print_preview(pending.preview());
    }
    let preview = pending.preview().clone();

    let result = if cli.decline {
        engine.on_decline(pending).await
    } else {
        engine.on_confirm(pending).await
    };

    let inventory = session.inventory.get(&player)?;
    if cli.json {
        let output = json!({
            "preview": preview,
            "status": result.status.as_ref(),
            "applied": result.applied,
            "failure_reason": result.failure_reason(),
            "overflow": result.overflow,
            "inventory": inventory,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        render::print_result(&result);
        if let Some(inventory) = &inventory {
            render::print_inventory(inventory);
        }
    }

    if result.applied || cli.decline {
        Ok(())
    } else {
        anyhow::bail!(
            "batch was not applied: {}",
            result.failure_reason().unwrap_or_default()
        )
    }
}
