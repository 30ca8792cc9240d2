//! Memory Match demo runner (default binary).
//!
//! Plays one autoplay round with the configured difficulty and emoji set, then
//! prints the session summary as JSON followed by the performance rating.
//! Rounds run on the virtual clock unless `MEMORY_MATCH_REALTIME=1`.

mod autoplay;

use std::time::Duration;

use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use memory_match::core::{format_clock, PerformanceRating, SessionSummary};
use memory_match::engine::{self, EngineConfig, SessionController, TracingNotifier};
use memory_match::types::{Phase, PlayerInput};

use autoplay::Autoplayer;

/// Simulated pause between two flips
const THINK_MS: u64 = 350;

/// Upper bound on flips before the runner gives up
const MAX_PICKS: usize = 400;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = EngineConfig::from_env();
    info!(
        difficulty = config.difficulty.as_str(),
        emoji_set = config.preferences.emoji_set.as_str(),
        realtime = config.realtime,
        "starting round"
    );

    let summary = if config.realtime {
        run_realtime(&config)?
    } else {
        run_virtual(&config)?
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    let rating = PerformanceRating::for_result(summary.moves, summary.time_seconds);
    println!(
        "{} {} moves in {}",
        rating.label(),
        summary.moves,
        format_clock(summary.time_seconds)
    );
    Ok(())
}

fn run_virtual(config: &EngineConfig) -> Result<SessionSummary> {
    let mut controller = SessionController::new(config, TracingNotifier);
    let mut bot = Autoplayer::new();

    controller.start()?;
    // Memorize window: the whole deck is face-up.
    bot.observe(&controller.snapshot());
    controller.advance(u64::from(config.timings.reveal_ms))?;

    for _ in 0..MAX_PICKS {
        if controller.phase() == Phase::Won {
            break;
        }

        let snapshot = controller.snapshot();
        bot.observe(&snapshot);
        match bot.next_pick(&snapshot) {
            Some(id) => {
                controller.select_tile(id)?;
                bot.observe(&controller.snapshot());
                controller.advance(THINK_MS)?;
            }
            // Waiting on the verdict.
            None => {
                controller.advance(u64::from(config.timings.resolve_ms))?;
            }
        }
    }

    // Let the fanfare play out.
    while controller.next_deadline_ms().is_some() && controller.phase() == Phase::Won {
        controller.advance(100)?;
    }

    if controller.phase() != Phase::Won {
        bail!("autoplay did not finish within {} picks", MAX_PICKS);
    }
    Ok(controller.summary())
}

fn run_realtime(config: &EngineConfig) -> Result<SessionSummary> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let controller = SessionController::new(config, TracingNotifier);
        let mut handle = engine::spawn(controller);
        let mut bot = Autoplayer::new();

        handle.send(PlayerInput::Start).await?;
        bot.observe(&handle.wait_for(|s| s.phase == Phase::Initializing).await?);
        handle.wait_for(|s| s.phase == Phase::Playing).await?;

        for _ in 0..MAX_PICKS {
            let snapshot = handle.snapshot();
            if snapshot.phase == Phase::Won {
                break;
            }

            bot.observe(&snapshot);
            let Some(id) = bot.next_pick(&snapshot) else {
                handle.changed().await?;
                continue;
            };

            let moves = snapshot.moves;
            let second_pick = !snapshot.selection.is_empty();
            handle.send(PlayerInput::SelectTile(id)).await?;

            if second_pick {
                let revealed = handle.wait_for(|s| s.moves > moves).await?;
                bot.observe(&revealed);
                handle
                    .wait_for(|s| s.selection.is_empty() || s.phase == Phase::Won)
                    .await?;
            } else {
                bot.observe(&handle.wait_for(|s| !s.selection.is_empty()).await?);
            }
            tokio::time::sleep(Duration::from_millis(THINK_MS)).await;
        }

        tokio::time::sleep(Duration::from_millis(500)).await;
        let summary = handle.shutdown().await?;
        if !summary.completed {
            bail!("autoplay did not finish within {} picks", MAX_PICKS);
        }
        Ok(summary)
    })
}
