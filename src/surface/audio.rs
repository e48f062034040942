//! Audio boundary
//!
//! Sound is cosmetic: every call is best-effort and a failing backend never
//! affects the spin or the winner.

use tracing::{debug, info, warn};

use crate::wheel::constants::audio::{SUSPENSE_NOTE, SUSPENSE_STEP, WIN_FLOURISH};

/// Audio backend errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SoundError {
    #[error("audio context is locked")]
    Locked,
    #[error("audio backend unavailable: {0}")]
    Unavailable(String),
    #[error("playback rejected: {0}")]
    Rejected(String),
}

/// Fire-and-forget audio triggers
pub trait SoundPlayer {
    /// Unlock the output (browsers require a user gesture first)
    fn unlock(&mut self) -> Result<(), SoundError> {
        Ok(())
    }
    /// Start the looping suspense track, replacing any previous loop
    fn start_suspense_loop(&mut self) -> Result<(), SoundError>;
    fn stop_suspense_loop(&mut self) -> Result<(), SoundError>;
    fn play_win_flourish(&mut self) -> Result<(), SoundError>;
}

/// Sound cue, used for best-effort logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Unlock,
    SuspenseStart,
    SuspenseStop,
    WinFlourish,
}

/// Run a cue against `player`, logging and swallowing failures.
///
/// Returns whether the cue played.
pub fn play<S: SoundPlayer>(player: &mut S, cue: Cue) -> bool {
    let result = match cue {
        Cue::Unlock => player.unlock(),
        Cue::SuspenseStart => player.start_suspense_loop(),
        Cue::SuspenseStop => player.stop_suspense_loop(),
        Cue::WinFlourish => player.play_win_flourish(),
    };
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Sound cue {:?} failed (ignored): {}", cue, e);
            false
        }
    }
}

/// Plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSoundPlayer;

impl SoundPlayer for SilentSoundPlayer {
    fn start_suspense_loop(&mut self) -> Result<(), SoundError> {
        Ok(())
    }

    fn stop_suspense_loop(&mut self) -> Result<(), SoundError> {
        Ok(())
    }

    fn play_win_flourish(&mut self) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Logs the notes a synth backend would play
#[derive(Debug, Default, Clone)]
pub struct TracingSoundPlayer {
    looping: bool,
    flourishes: u32,
}

impl TracingSoundPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn flourishes(&self) -> u32 {
        self.flourishes
    }
}

impl SoundPlayer for TracingSoundPlayer {
    fn unlock(&mut self) -> Result<(), SoundError> {
        debug!("Audio unlocked");
        Ok(())
    }

    fn start_suspense_loop(&mut self) -> Result<(), SoundError> {
        if self.looping {
            debug!("Replacing running suspense loop");
        }
        self.looping = true;
        info!("Suspense loop: {} every {}", SUSPENSE_NOTE, SUSPENSE_STEP);
        Ok(())
    }

    fn stop_suspense_loop(&mut self) -> Result<(), SoundError> {
        if self.looping {
            self.looping = false;
            info!("Suspense loop stopped");
        }
        Ok(())
    }

    fn play_win_flourish(&mut self) -> Result<(), SoundError> {
        self.flourishes += 1;
        for (notes, offset, length) in WIN_FLOURISH {
            info!("Flourish: {:?} {} at +{:.1}s", notes, length, offset);
        }
        Ok(())
    }
}
