//! Session controller - one wheel, its entry text and its collaborators
//!
//! All mutation happens through discrete events: text edits, button presses
//! (spin, shuffle, sort), animation frames and the prompt answer.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::WheelConfig;
use crate::session::edit;
use crate::surface::audio::{self, Cue, SoundPlayer};
use crate::surface::prompt::{PromptResponse, WinnerPrompt, WinnerPrompter};
use crate::surface::render::{self, Renderer, WheelLayout};
use crate::wheel::constants::SPINNING_BANNER;
use crate::wheel::entries;
use crate::wheel::spin::{SpinAnimator, SpinTick};
use crate::wheel::state::WheelState;
use crate::wheel::winner::{self, SpinResult};

/// Result of one animation frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// No spin running; nothing drawn
    Idle,
    /// Wheel advanced and redrawn; another frame is needed
    Spinning,
    /// Wheel stopped on a winner
    Completed(SpinResult),
    /// Wheel stopped but the entry list was emptied mid-spin
    NoWinner,
}

/// Session state for a single wheel
pub struct SessionController<R: Renderer, S: SoundPlayer, P: WinnerPrompter> {
    id: Uuid,
    raw_text: String,
    /// Entries parsed at the last redraw
    entries: Vec<String>,
    animator: SpinAnimator,
    layout: WheelLayout,
    renderer: R,
    sound: S,
    prompter: P,
    rng: StdRng,
    /// Winner awaiting the prompt answer
    pending: Option<SpinResult>,
    status: String,
    spins_completed: u64,
}

impl<R: Renderer, S: SoundPlayer, P: WinnerPrompter> SessionController<R, S, P> {
    pub fn new(config: &WheelConfig, renderer: R, sound: S, prompter: P) -> Self {
        Self::with_rng(config, renderer, sound, prompter, StdRng::from_entropy())
    }

    /// Session with a seeded RNG, for reproducible spins and shuffles
    pub fn with_seed(config: &WheelConfig, renderer: R, sound: S, prompter: P, seed: u64) -> Self {
        Self::with_rng(config, renderer, sound, prompter, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &WheelConfig, renderer: R, sound: S, prompter: P, rng: StdRng) -> Self {
        let id = Uuid::new_v4();
        debug!("Wheel session {} created", id);
        Self {
            id,
            raw_text: String::new(),
            entries: Vec::new(),
            animator: SpinAnimator::new(config.spin_params()),
            layout: config.layout(),
            renderer,
            sound,
            prompter,
            rng,
            pending: None,
            status: String::new(),
            spins_completed: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Raw entry text
    pub fn text(&self) -> &str {
        &self.raw_text
    }

    /// Replace the raw entry text. Takes effect on the next redraw.
    pub fn set_text(&mut self, raw: impl Into<String>) {
        self.raw_text = raw.into();
    }

    /// Entries as of the last redraw
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn state(&self) -> &WheelState {
        self.animator.state()
    }

    pub fn is_spinning(&self) -> bool {
        self.animator.is_spinning()
    }

    /// Banner text: empty, "..." while spinning, or the last winner
    pub fn status_text(&self) -> &str {
        &self.status
    }

    /// Winner shown in the prompt, if the prompt is open
    pub fn pending_result(&self) -> Option<&SpinResult> {
        self.pending.as_ref()
    }

    pub fn spins_completed(&self) -> u64 {
        self.spins_completed
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Reparse the entries and repaint the wheel
    pub fn redraw(&mut self) {
        self.entries = entries::parse(&self.raw_text);
        render::paint(
            &mut self.renderer,
            &self.layout,
            &self.entries,
            self.animator.state().current_angle,
        );
    }

    /// Start a spin. Ignored while spinning, while the prompt is open, or with
    /// fewer than two entries.
    pub fn request_spin(&mut self) -> bool {
        if self.pending.is_some() {
            debug!("Spin request ignored: winner prompt still open");
            return false;
        }

        self.entries = entries::parse(&self.raw_text);
        if !self.animator.start(self.entries.len(), &mut self.rng) {
            return false;
        }

        audio::play(&mut self.sound, Cue::Unlock);
        self.status = SPINNING_BANNER.to_string();
        audio::play(&mut self.sound, Cue::SuspenseStart);

        info!(
            "Wheel {} spinning with {} entries at {:.4} rad/tick",
            self.id,
            self.entries.len(),
            self.animator.state().spin_velocity
        );
        true
    }

    /// Advance the spin by one animation frame
    pub fn on_frame(&mut self) -> FrameOutcome {
        match self.animator.tick() {
            SpinTick::Idle => FrameOutcome::Idle,
            SpinTick::Continue => {
                self.redraw();
                FrameOutcome::Spinning
            }
            SpinTick::Completed { .. } => {
                let outcome = self.complete_spin();
                self.animator.settle();
                self.redraw();
                outcome
            }
        }
    }

    fn complete_spin(&mut self) -> FrameOutcome {
        audio::play(&mut self.sound, Cue::SuspenseStop);

        // Resolve against the text as it is now; it may have been edited mid-spin
        let current = entries::parse(&self.raw_text);
        let result = match winner::try_resolve(self.animator.state(), &current) {
            Ok(result) => result,
            Err(e) => {
                warn!("Wheel {} stopped without a winner: {}", self.id, e);
                self.status.clear();
                return FrameOutcome::NoWinner;
            }
        };

        self.spins_completed += 1;
        info!(
            "Wheel {} winner: {} (segment {}/{}, angle {:.3}, {} ticks)",
            self.id,
            result.winner,
            result.index,
            result.entry_count,
            result.final_angle,
            self.animator.ticks()
        );

        self.status = result.winner.clone();
        audio::play(&mut self.sound, Cue::WinFlourish);
        self.prompter.show(&WinnerPrompt::new(result.winner.clone()));
        self.pending = Some(result.clone());

        FrameOutcome::Completed(result)
    }

    /// Close the winner prompt. Removes one instance of the winner from the
    /// text when the user ticked the remove option.
    pub fn resolve_prompt(&mut self, response: PromptResponse) -> Option<SpinResult> {
        let Some(result) = self.pending.take() else {
            debug!("Prompt answer ignored: no winner pending");
            return None;
        };

        debug!(
            "Wheel {} prompt closed: {:?}, remove={}",
            self.id, response.outcome, response.remove_winner
        );

        if response.remove_winner {
            match edit::remove_one(&self.raw_text, &result.winner, Some(result.index)) {
                Some(updated) => {
                    self.raw_text = updated;
                    self.redraw();
                }
                None => debug!("Winner {} no longer in the list", result.winner),
            }
        }

        self.prompter.hide();
        Some(result)
    }

    /// Shuffle the raw lines (blank lines included) and redraw
    pub fn shuffle(&mut self) {
        self.raw_text = edit::shuffle(&self.raw_text, &mut self.rng);
        self.redraw();
    }

    /// Sort the entries (blank lines dropped) and redraw
    pub fn sort(&mut self) {
        self.raw_text = edit::sort(&self.raw_text);
        self.redraw();
    }

    #[cfg(test)]
    pub(crate) fn set_wheel_state(&mut self, state: WheelState) {
        self.animator = SpinAnimator::with_state(*self.animator.params(), state);
    }
}
