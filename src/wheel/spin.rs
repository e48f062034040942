//! Spin animator
//!
//! Drives [`WheelState`] through `Idle -> Spinning -> Completing -> Idle`.
//! CRITICAL: decay is exponential (velocity *= decay every tick), so the
//! number of ticks and the final angle depend on the random initial velocity.
//! Only the angle -> segment mapping is deterministic.

use rand::Rng;
use tracing::debug;

use crate::wheel::constants::spin;
use crate::wheel::state::{SpinPhase, WheelState};

/// Spin tuning parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinParams {
    /// Lower bound of the initial velocity (radians per tick)
    pub min_velocity: f64,
    /// Upper bound (exclusive) of the initial velocity
    pub max_velocity: f64,
    /// Per-tick velocity multiplier, in (0, 1)
    pub decay_factor: f64,
    /// Stop threshold
    pub epsilon: f64,
}

impl Default for SpinParams {
    fn default() -> Self {
        Self {
            min_velocity: spin::MIN_INITIAL_VELOCITY,
            max_velocity: spin::MAX_INITIAL_VELOCITY,
            decay_factor: spin::DECAY_FACTOR,
            epsilon: spin::STOP_EPSILON,
        }
    }
}

impl SpinParams {
    /// Draw an initial velocity uniformly from `[min_velocity, max_velocity)`
    pub fn sample_velocity<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.max_velocity > self.min_velocity {
            rng.gen_range(self.min_velocity..self.max_velocity)
        } else {
            self.min_velocity
        }
    }

    /// Number of ticks a spin launched at `velocity` runs before stopping
    pub fn ticks_to_stop(&self, velocity: f64) -> u64 {
        if velocity < self.epsilon {
            return 1;
        }
        // velocity * decay^k < epsilon
        let k = (self.epsilon / velocity).ln() / self.decay_factor.ln();
        k.floor() as u64 + 1
    }
}

/// Outcome of a single animation tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinTick {
    /// No spin in progress; nothing changed
    Idle,
    /// Still spinning, schedule another tick
    Continue,
    /// Velocity dropped below epsilon on this tick
    Completed { final_angle: f64 },
}

/// Owns the wheel's rotation state and the spin lifecycle
#[derive(Debug, Clone)]
pub struct SpinAnimator {
    params: SpinParams,
    state: WheelState,
    ticks: u64,
}

impl SpinAnimator {
    pub fn new(params: SpinParams) -> Self {
        Self::with_state(params, WheelState::new())
    }

    /// Resume from an existing state
    pub fn with_state(params: SpinParams, state: WheelState) -> Self {
        Self {
            params,
            state,
            ticks: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> &WheelState {
        &self.state
    }

    #[inline]
    pub fn params(&self) -> &SpinParams {
        &self.params
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    /// Ticks elapsed in the current (or last) spin
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Start a spin with a random initial velocity.
    ///
    /// Silent no-op returning `false` unless idle with at least two entries.
    pub fn start<R: Rng>(&mut self, entry_count: usize, rng: &mut R) -> bool {
        if !self.can_start(entry_count) {
            return false;
        }
        let velocity = self.params.sample_velocity(rng);
        self.launch(velocity)
    }

    /// Start a spin with a fixed initial velocity (same guards as [`Self::start`])
    pub fn start_with_velocity(&mut self, entry_count: usize, velocity: f64) -> bool {
        if !self.can_start(entry_count) {
            return false;
        }
        self.launch(velocity)
    }

    fn can_start(&self, entry_count: usize) -> bool {
        if !self.state.is_idle() {
            debug!("Spin request ignored: wheel is {:?}", self.state.phase);
            return false;
        }
        if entry_count < spin::MIN_ENTRIES {
            debug!(
                "Spin request ignored: {} entries, need at least {}",
                entry_count,
                spin::MIN_ENTRIES
            );
            return false;
        }
        true
    }

    fn launch(&mut self, velocity: f64) -> bool {
        if !velocity.is_finite() || velocity <= 0.0 {
            debug!("Spin request ignored: invalid velocity {}", velocity);
            return false;
        }
        self.state.spin_velocity = velocity;
        self.state.phase = SpinPhase::Spinning;
        self.ticks = 0;
        debug!(
            "Spin started at {:.4} rad/tick (~{} ticks)",
            velocity,
            self.params.ticks_to_stop(velocity)
        );
        true
    }

    /// Advance one animation frame
    pub fn tick(&mut self) -> SpinTick {
        if !self.state.is_spinning() {
            return SpinTick::Idle;
        }

        self.ticks += 1;
        self.state.current_angle += self.state.spin_velocity;
        self.state.spin_velocity *= self.params.decay_factor;

        if self.state.spin_velocity < self.params.epsilon {
            self.state.spin_velocity = 0.0;
            self.state.phase = SpinPhase::Completing;
            return SpinTick::Completed {
                final_angle: self.state.current_angle,
            };
        }

        SpinTick::Continue
    }

    /// Finish a completed spin (`Completing -> Idle`). No-op otherwise.
    pub fn settle(&mut self) {
        if self.state.phase == SpinPhase::Completing {
            self.state.phase = SpinPhase::Idle;
        }
    }
}

impl Default for SpinAnimator {
    fn default() -> Self {
        Self::new(SpinParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run_to_completion(animator: &mut SpinAnimator) -> (u64, f64) {
        let mut completions = 0;
        let mut final_angle = 0.0;
        for _ in 0..100_000 {
            match animator.tick() {
                SpinTick::Continue => {}
                SpinTick::Completed { final_angle: angle } => {
                    completions += 1;
                    final_angle = angle;
                    animator.settle();
                }
                SpinTick::Idle => break,
            }
        }
        assert_eq!(completions, 1, "completion must fire exactly once");
        (animator.ticks(), final_angle)
    }

    #[test]
    fn test_start_requires_two_entries() {
        let mut animator = SpinAnimator::default();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(!animator.start(0, &mut rng));
        assert!(!animator.start(1, &mut rng));
        assert!(animator.state().is_idle());
        assert_eq!(animator.state().spin_velocity, 0.0);

        assert!(animator.start(2, &mut rng));
        assert!(animator.is_spinning());
    }

    #[test]
    fn test_double_start_is_single_spin() {
        let mut animator = SpinAnimator::default();
        let mut rng = StdRng::seed_from_u64(7);

        assert!(animator.start(4, &mut rng));
        let velocity = animator.state().spin_velocity;

        assert!(!animator.start(4, &mut rng));
        assert_eq!(animator.state().spin_velocity, velocity);

        let (ticks, _) = run_to_completion(&mut animator);
        assert_eq!(ticks, SpinParams::default().ticks_to_stop(velocity));
    }

    #[test]
    fn test_initial_velocity_within_range() {
        let params = SpinParams::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = params.sample_velocity(&mut rng);
            assert!(v >= params.min_velocity && v < params.max_velocity);
        }
    }

    #[test]
    fn test_tick_applies_exponential_decay() {
        let mut animator = SpinAnimator::default();
        assert!(animator.start_with_velocity(3, 0.12));

        assert_eq!(animator.tick(), SpinTick::Continue);
        let state = animator.state();
        assert!((state.current_angle - 0.12).abs() < 1e-12);
        assert!((state.spin_velocity - 0.12 * spin::DECAY_FACTOR).abs() < 1e-12);
    }

    #[test]
    fn test_tick_when_idle_does_nothing() {
        let mut animator = SpinAnimator::with_state(SpinParams::default(), WheelState::at_rest(2.0));
        assert_eq!(animator.tick(), SpinTick::Idle);
        assert_eq!(animator.state().current_angle, 2.0);
        assert_eq!(animator.state().spin_velocity, 0.0);
        assert_eq!(animator.ticks(), 0);
    }

    #[test]
    fn test_spin_runs_to_completion() {
        let mut animator = SpinAnimator::default();
        assert!(animator.start_with_velocity(4, 0.1));

        let (ticks, final_angle) = run_to_completion(&mut animator);

        // 0.1 * 0.995^k < 0.001  =>  k = 919
        assert_eq!(ticks, 919);
        // Geometric sum: 0.1 * (1 - 0.995^919) / 0.005 ~= 19.8
        assert!((final_angle - 19.8).abs() < 0.05);
        assert!(animator.state().is_idle());
        assert_eq!(animator.state().spin_velocity, 0.0);
        assert_eq!(animator.state().current_angle, final_angle);
    }

    #[test]
    fn test_completing_blocks_restart_until_settled() {
        let mut animator = SpinAnimator::default();
        assert!(animator.start_with_velocity(2, 0.001));

        assert!(matches!(animator.tick(), SpinTick::Completed { .. }));
        assert_eq!(animator.state().phase, SpinPhase::Completing);
        assert!(!animator.start_with_velocity(2, 0.1));

        animator.settle();
        assert!(animator.start_with_velocity(2, 0.1));
    }

    #[test]
    fn test_angle_accumulates_across_spins() {
        let mut animator = SpinAnimator::default();
        animator.start_with_velocity(2, 0.1);
        let (_, first) = run_to_completion(&mut animator);

        animator.start_with_velocity(2, 0.1);
        let (_, second) = run_to_completion(&mut animator);

        assert!((second - 2.0 * first).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_velocity_rejected() {
        let mut animator = SpinAnimator::default();
        assert!(!animator.start_with_velocity(3, 0.0));
        assert!(!animator.start_with_velocity(3, -0.1));
        assert!(!animator.start_with_velocity(3, f64::NAN));
        assert!(animator.state().is_idle());
    }

    #[test]
    fn test_ticks_to_stop() {
        let params = SpinParams::default();
        assert_eq!(params.ticks_to_stop(0.1), 919);
        assert_eq!(params.ticks_to_stop(0.0005), 1);
    }
}
