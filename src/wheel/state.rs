//! Rotation state of a single wheel

use serde::{Deserialize, Serialize};

/// Spin lifecycle phase
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SpinPhase {
    /// Wheel at rest, a spin may start
    #[default]
    Idle,
    /// Velocity is being decayed every tick
    Spinning,
    /// Velocity just crossed the stop threshold; the winner is being resolved
    /// within the same tick
    Completing,
}

/// Wheel rotation state
///
/// Created once per session and only ever mutated by
/// [`crate::wheel::spin::SpinAnimator`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct WheelState {
    /// Accumulated rotation (radians). Grows while spinning, never wrapped.
    pub current_angle: f64,
    /// Radians per tick. Zero unless spinning.
    pub spin_velocity: f64,
    pub phase: SpinPhase,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle state resting at `angle`
    pub fn at_rest(angle: f64) -> Self {
        Self {
            current_angle: angle,
            spin_velocity: 0.0,
            phase: SpinPhase::Idle,
        }
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase == SpinPhase::Idle
    }
}
