//! THavalon Player - line-protocol harness binary.
//!
//! Reads server messages and UI actions from stdin, applies them to a
//! PhaseView over the standard game page, and writes outbound client
//! messages to stdout as JSON lines. Logs go to stderr.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use thavalon_player::harness;
use thavalon_player::infrastructure::{CommandBus, MemoryDocument};
use thavalon_player::{PhaseView, PlayerConfig, SessionContext};

const OUTBOUND_CAPACITY: usize = 64;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "thavalon_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = PlayerConfig::from_env().context("Invalid player configuration")?;
    let local_player = config
        .local_player
        .clone()
        .context("THAVALON_LOCAL_PLAYER must be set")?;

    tracing::info!(local_player = %local_player, game_id = %config.game_id, "Starting THavalon Player");

    let session = Arc::new(SessionContext::new(local_player, config.game_id.clone()));
    let (command_bus, mut outbound) = CommandBus::channel(OUTBOUND_CAPACITY);
    let document = MemoryDocument::game_page(&config.layout, config.presentation.mission_count);
    let mut view = PhaseView::new(
        document,
        session,
        Arc::new(command_bus),
        &config.layout,
        &config.presentation,
    )
    .context("Host document does not match the configured layout")?;

    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(message) = outbound.recv().await {
            let mut line = serde_json::to_string(&message)?;
            line.push('\n');
            stdout.write_all(line.as_bytes()).await?;
            stdout.flush().await?;
        }
        anyhow::Ok(())
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let input = match harness::parse_line(&line) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed input line");
                continue;
            }
        };
        if let Err(e) = harness::apply_input(&mut view, input) {
            tracing::warn!(error = %e, "UI action rejected");
        }
        for (region, text) in harness::region_snapshot(&view) {
            tracing::debug!(region, text = %text, state = %view.phase(), "Region");
        }
        tokio::task::yield_now().await;
    }

    // Dropping the view drops the last sender, which ends the writer
    drop(view);
    writer.await.context("Writer task panicked")??;
    tracing::info!("Input closed, shutting down");
    Ok(())
}

fn load_dotenv() {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        if std::path::Path::new(filename).exists() {
            let _ = dotenvy::from_filename(filename);
        }
    }
}
