//! Winner confirmation boundary

use serde::{Deserialize, Serialize};

/// What the confirmation surface shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerPrompt {
    pub winner: String,
    /// Initial state of the "remove winner" option; always off when shown
    pub remove_on_confirm: bool,
}

impl WinnerPrompt {
    pub fn new(winner: impl Into<String>) -> Self {
        Self {
            winner: winner.into(),
            remove_on_confirm: false,
        }
    }
}

/// How the prompt was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptOutcome {
    /// OK button
    Confirmed,
    /// Close button or backdrop click
    Dismissed,
}

/// Answer from the confirmation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponse {
    pub outcome: PromptOutcome,
    /// Final state of the "remove winner" option
    pub remove_winner: bool,
}

impl PromptResponse {
    pub fn confirm(remove_winner: bool) -> Self {
        Self {
            outcome: PromptOutcome::Confirmed,
            remove_winner,
        }
    }

    pub fn dismiss(remove_winner: bool) -> Self {
        Self {
            outcome: PromptOutcome::Dismissed,
            remove_winner,
        }
    }
}

/// Modal surface that shows the winner
pub trait WinnerPrompter {
    fn show(&mut self, prompt: &WinnerPrompt);
    fn hide(&mut self);
}

/// Prompter that only remembers what is on screen
#[derive(Debug, Default, Clone)]
pub struct HeadlessPrompter {
    visible: Option<WinnerPrompt>,
    shown: u32,
}

impl HeadlessPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> Option<&WinnerPrompt> {
        self.visible.as_ref()
    }

    /// Times a prompt has been shown
    pub fn shown(&self) -> u32 {
        self.shown
    }
}

impl WinnerPrompter for HeadlessPrompter {
    fn show(&mut self, prompt: &WinnerPrompt) {
        self.shown += 1;
        self.visible = Some(prompt.clone());
    }

    fn hide(&mut self) {
        self.visible = None;
    }
}
