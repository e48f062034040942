//! Prize Wheel
//!
//! Headless core of a name-picking prize wheel: entry parsing, wheel
//! geometry, a decaying spin animation and winner resolution, wired together
//! by a per-wheel session controller.
//!
//! Drawing, sound and the winner dialog are reached through the
//! [`surface::render::Renderer`], [`surface::audio::SoundPlayer`] and
//! [`surface::prompt::WinnerPrompter`] traits, so everything runs without a
//! live display.

pub mod config;
pub mod session;
pub mod surface;
pub mod util;
pub mod wheel;
