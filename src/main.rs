use std::io::Read;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use prize_wheel::config::WheelConfig;
use prize_wheel::session::runtime::run_spin;
use prize_wheel::session::SessionController;
use prize_wheel::surface::audio::TracingSoundPlayer;
use prize_wheel::surface::prompt::{HeadlessPrompter, PromptResponse};
use prize_wheel::surface::render::CommandRecorder;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Prize Wheel v{}", env!("CARGO_PKG_VERSION"));

    let config = WheelConfig::load_or_default();
    config.validate().context("invalid wheel configuration")?;
    info!(
        "Configuration loaded: decay={}, epsilon={}, {} fps",
        config.decay_factor, config.epsilon, config.frame_rate
    );

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read entries from stdin")?;

    let mut session = SessionController::new(
        &config,
        CommandRecorder::new(),
        TracingSoundPlayer::new(),
        HeadlessPrompter::new(),
    );
    session.set_text(raw);
    session.redraw();
    info!("{} entries loaded", session.entries().len());

    let Some(result) = run_spin(&mut session, config.frame_duration()).await else {
        warn!("Nothing to spin: enter at least two names");
        return Ok(());
    };

    println!("{}", serde_json::to_string_pretty(&result)?);

    session.resolve_prompt(PromptResponse::confirm(config.remove_winner));
    if config.remove_winner {
        info!("Removed {} from the list", result.winner);
        println!("{}", session.text());
    }

    info!(
        "Drew {} frames, last frame had {} commands",
        session.renderer().frames(),
        session.renderer().commands().len()
    );

    Ok(())
}
