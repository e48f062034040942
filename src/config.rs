use crate::surface::render::WheelLayout;
use crate::wheel::constants::{render, spin};
use crate::wheel::spin::SpinParams;

/// Wheel configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    /// Edge length of the square canvas (pixels)
    pub canvas_size: f64,
    /// Lower bound of the initial spin velocity (radians per tick)
    pub min_velocity: f64,
    /// Upper bound (exclusive) of the initial spin velocity
    pub max_velocity: f64,
    /// Per-tick velocity multiplier
    pub decay_factor: f64,
    /// Velocity below which the wheel stops
    pub epsilon: f64,
    /// Animation frames per second
    pub frame_rate: u32,
    /// Answer given to the winner prompt by headless drivers
    pub remove_winner: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            canvas_size: render::CANVAS_SIZE,
            min_velocity: spin::MIN_INITIAL_VELOCITY,
            max_velocity: spin::MAX_INITIAL_VELOCITY,
            decay_factor: spin::DECAY_FACTOR,
            epsilon: spin::STOP_EPSILON,
            frame_rate: spin::FRAME_RATE,
            remove_winner: false,
        }
    }
}

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("canvas_size must be greater than {min}, got {got}")]
    CanvasTooSmall { min: f64, got: f64 },
    #[error("velocity range must satisfy 0 < min <= max, got [{min}, {max})")]
    InvalidVelocityRange { min: f64, max: f64 },
    #[error("decay_factor must be in (0, 1), got {0}")]
    InvalidDecay(f64),
    #[error("epsilon must be in (0, min_velocity), got {0}")]
    InvalidEpsilon(f64),
    #[error("frame_rate must be 1-240, got {0}")]
    InvalidFrameRate(u32),
}

const MIN_CANVAS_SIZE: f64 = 2.0 * render::RIM_MARGIN;
const MAX_FRAME_RATE: u32 = 240;

impl WheelConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        let mut config = Self::default();

        if let Some(size) = env_parse::<f64>("WHEEL_CANVAS_SIZE") {
            if size > MIN_CANVAS_SIZE {
                config.canvas_size = size;
            } else {
                tracing::warn!("WHEEL_CANVAS_SIZE must be > {}, using default", MIN_CANVAS_SIZE);
            }
        }

        if let Some(v) = env_parse::<f64>("WHEEL_MIN_VELOCITY") {
            config.min_velocity = v;
        }
        if let Some(v) = env_parse::<f64>("WHEEL_MAX_VELOCITY") {
            config.max_velocity = v;
        }
        if !(config.min_velocity > 0.0 && config.min_velocity <= config.max_velocity) {
            tracing::warn!(
                "Velocity range [{}, {}) is invalid, using default",
                config.min_velocity,
                config.max_velocity
            );
            config.min_velocity = spin::MIN_INITIAL_VELOCITY;
            config.max_velocity = spin::MAX_INITIAL_VELOCITY;
        }

        if let Some(decay) = env_parse::<f64>("WHEEL_DECAY") {
            if decay > 0.0 && decay < 1.0 {
                config.decay_factor = decay;
            } else {
                tracing::warn!("WHEEL_DECAY must be in (0, 1), using default");
            }
        }

        if let Some(epsilon) = env_parse::<f64>("WHEEL_EPSILON") {
            if epsilon > 0.0 && epsilon < config.min_velocity {
                config.epsilon = epsilon;
            } else {
                tracing::warn!("WHEEL_EPSILON must be in (0, min velocity), using default");
            }
        }

        if let Some(rate) = env_parse::<u32>("WHEEL_FRAME_RATE") {
            if (1..=MAX_FRAME_RATE).contains(&rate) {
                config.frame_rate = rate;
            } else {
                tracing::warn!("WHEEL_FRAME_RATE must be 1-{}, using default", MAX_FRAME_RATE);
            }
        }

        if let Some(remove) = env_parse::<bool>("WHEEL_REMOVE_WINNER") {
            config.remove_winner = remove;
        }

        config
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_size > MIN_CANVAS_SIZE) {
            return Err(ConfigError::CanvasTooSmall {
                min: MIN_CANVAS_SIZE,
                got: self.canvas_size,
            });
        }
        if !(self.min_velocity > 0.0 && self.min_velocity <= self.max_velocity) {
            return Err(ConfigError::InvalidVelocityRange {
                min: self.min_velocity,
                max: self.max_velocity,
            });
        }
        if !(self.decay_factor > 0.0 && self.decay_factor < 1.0) {
            return Err(ConfigError::InvalidDecay(self.decay_factor));
        }
        if !(self.epsilon > 0.0 && self.epsilon < self.min_velocity) {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        if !(1..=MAX_FRAME_RATE).contains(&self.frame_rate) {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate));
        }
        Ok(())
    }

    pub fn spin_params(&self) -> SpinParams {
        SpinParams {
            min_velocity: self.min_velocity,
            max_velocity: self.max_velocity,
            decay_factor: self.decay_factor,
            epsilon: self.epsilon,
        }
    }

    pub fn layout(&self) -> WheelLayout {
        WheelLayout::for_canvas(self.canvas_size)
    }

    /// Duration of one animation frame
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Invalid {} '{}', using default", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WheelConfig::default();
        assert_eq!(config.canvas_size, 500.0);
        assert_eq!(config.decay_factor, 0.995);
        assert_eq!(config.epsilon, 0.001);
        assert_eq!(config.frame_rate, 60);
        assert!(!config.remove_winner);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default() {
        let config = WheelConfig::load_or_default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_decay = WheelConfig {
            decay_factor: 1.0,
            ..WheelConfig::default()
        };
        assert_eq!(bad_decay.validate(), Err(ConfigError::InvalidDecay(1.0)));

        let bad_range = WheelConfig {
            min_velocity: 0.2,
            max_velocity: 0.1,
            ..WheelConfig::default()
        };
        assert!(matches!(
            bad_range.validate(),
            Err(ConfigError::InvalidVelocityRange { .. })
        ));

        let bad_epsilon = WheelConfig {
            epsilon: 0.5,
            ..WheelConfig::default()
        };
        assert_eq!(bad_epsilon.validate(), Err(ConfigError::InvalidEpsilon(0.5)));

        let bad_rate = WheelConfig {
            frame_rate: 0,
            ..WheelConfig::default()
        };
        assert_eq!(bad_rate.validate(), Err(ConfigError::InvalidFrameRate(0)));

        let tiny = WheelConfig {
            canvas_size: 5.0,
            ..WheelConfig::default()
        };
        assert!(matches!(tiny.validate(), Err(ConfigError::CanvasTooSmall { .. })));
    }

    #[test]
    fn test_spin_params_match_config() {
        let params = WheelConfig::default().spin_params();
        assert_eq!(params, SpinParams::default());
    }

    #[test]
    fn test_frame_duration() {
        let config = WheelConfig {
            frame_rate: 50,
            ..WheelConfig::default()
        };
        assert!((config.frame_duration().as_secs_f64() - 0.02).abs() < 1e-6);
    }
}
