//! Frame runtime - drives a session's spin from a fixed-rate ticker
//!
//! Stands in for a browser's animation-frame callback: each tick runs one
//! bounded `on_frame` and the loop ends when the wheel settles.

use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::session::controller::{FrameOutcome, SessionController};
use crate::surface::audio::SoundPlayer;
use crate::surface::prompt::WinnerPrompter;
use crate::surface::render::Renderer;
use crate::wheel::winner::SpinResult;

/// Request a spin and run frames until it stops.
///
/// Returns `None` if the spin request was ignored or the wheel stopped with
/// no entries left.
pub async fn run_spin<R, S, P>(
    session: &mut SessionController<R, S, P>,
    frame_duration: Duration,
) -> Option<SpinResult>
where
    R: Renderer,
    S: SoundPlayer,
    P: WinnerPrompter,
{
    if !session.request_spin() {
        return None;
    }
    run_frames(session, frame_duration).await
}

/// Run frames for a spin that is already in progress
pub async fn run_frames<R, S, P>(
    session: &mut SessionController<R, S, P>,
    frame_duration: Duration,
) -> Option<SpinResult>
where
    R: Renderer,
    S: SoundPlayer,
    P: WinnerPrompter,
{
    let mut ticker = interval(frame_duration);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let start = tokio::time::Instant::now();
    let mut frames: u64 = 0;

    loop {
        ticker.tick().await;
        frames += 1;

        match session.on_frame() {
            FrameOutcome::Spinning => {}
            FrameOutcome::Completed(result) => {
                info!(
                    "Spin settled after {} frames ({:.2}s)",
                    frames,
                    start.elapsed().as_secs_f64()
                );
                return Some(result);
            }
            FrameOutcome::NoWinner => return None,
            FrameOutcome::Idle => {
                debug!("Frame loop stopped: wheel idle");
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WheelConfig;
    use crate::surface::audio::SilentSoundPlayer;
    use crate::surface::prompt::{HeadlessPrompter, PromptResponse};
    use crate::surface::render::CommandRecorder;
    use crate::wheel::spin::SpinParams;

    type TestSession = SessionController<CommandRecorder, SilentSoundPlayer, HeadlessPrompter>;

    fn session(text: &str, seed: u64) -> TestSession {
        let mut session = SessionController::with_seed(
            &WheelConfig::default(),
            CommandRecorder::new(),
            SilentSoundPlayer,
            HeadlessPrompter::new(),
            seed,
        );
        session.set_text(text);
        session.redraw();
        session
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_spin_completes() {
        let mut session = session("A\nB\nC\nD", 21);
        let frame = WheelConfig::default().frame_duration();

        let result = run_spin(&mut session, frame).await.expect("winner");

        assert!(session.entries().contains(&result.winner));
        assert!(session.state().is_idle());
        assert_eq!(session.pending_result(), Some(&result));
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_frame_per_tick() {
        let mut session = session("A\nB\nC", 8);
        let frame = Duration::from_millis(16);

        let before = session.renderer().frames();
        assert!(session.request_spin());
        let velocity = session.state().spin_velocity;
        let expected_ticks = SpinParams::default().ticks_to_stop(velocity);

        let started = tokio::time::Instant::now();
        run_frames(&mut session, frame).await.expect("winner");

        assert_eq!(session.renderer().frames() - before, expected_ticks);
        // First interval tick fires immediately
        assert!(started.elapsed() >= frame * (expected_ticks as u32 - 1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_spin_ignored_with_one_entry() {
        let mut session = session("Only", 1);
        let result = run_spin(&mut session, Duration::from_millis(16)).await;
        assert!(result.is_none());
        assert_eq!(session.spins_completed(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_to_back_spins() {
        let mut session = session("A\nB\nC\nD\nE", 3);
        let frame = Duration::from_millis(16);

        let first = run_spin(&mut session, frame).await.expect("first winner");
        assert!(run_spin(&mut session, frame).await.is_none(), "prompt still open");

        session.resolve_prompt(PromptResponse::confirm(true));
        assert_eq!(session.entries().len(), 4);

        let second = run_spin(&mut session, frame).await.expect("second winner");
        assert!(second.final_angle > first.final_angle);
        assert_eq!(second.entry_count, 4);
        assert_eq!(session.spins_completed(), 2);
    }

    #[test]
    fn test_run_spin_with_block_on() {
        let mut session = session("X\nY", 4);
        let result = tokio_test::block_on(async {
            tokio::time::pause();
            run_spin(&mut session, Duration::from_millis(1)).await
        });
        assert!(result.is_some());
    }
}
