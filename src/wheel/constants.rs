//! Tunable constants for the wheel.
//!
//! Spin values are defaults for [`crate::config::WheelConfig`]; render and
//! audio values are fixed.

use crate::util::color::Color;

/// Spin physics defaults - decay is multiplicative per tick, NOT per second
pub mod spin {
    /// Lower bound of the randomized initial velocity (radians per tick)
    pub const MIN_INITIAL_VELOCITY: f64 = 0.10;
    /// Upper bound (exclusive) of the randomized initial velocity
    pub const MAX_INITIAL_VELOCITY: f64 = 0.15;
    /// Velocity multiplier applied every tick
    /// Applied as: velocity *= DECAY_FACTOR
    pub const DECAY_FACTOR: f64 = 0.995;
    /// Velocity below which the wheel is considered stopped
    pub const STOP_EPSILON: f64 = 0.001;
    /// Animation frames per second for the headless runtime
    pub const FRAME_RATE: u32 = 60;
    /// Fewest entries a spin is allowed with
    pub const MIN_ENTRIES: usize = 2;
}

/// Drawing constants
pub mod render {
    use super::Color;

    /// Default canvas edge length (the canvas is square)
    pub const CANVAS_SIZE: f64 = 500.0;
    /// Gap between the wheel rim and the canvas edge
    pub const RIM_MARGIN: f64 = 10.0;
    /// Hub radius
    pub const HUB_RADIUS: f64 = 50.0;
    /// Label distance from centre as a fraction of the wheel radius
    pub const LABEL_RADIUS_FRACTION: f64 = 0.6;

    pub const LABEL_FONT: &str = "bold 16px Poppins";
    pub const HUB_FONT: &str = "bold 18px Poppins";
    pub const HUB_LABEL: &str = "SPIN";
    pub const PLACEHOLDER_LABEL: &str = "Add names";

    pub const LABEL_COLOR: Color = Color::WHITE;
    pub const HUB_COLOR: Color = Color::WHITE;
    pub const HUB_LABEL_COLOR: Color = Color::from_hex(0x333333);
    pub const PLACEHOLDER_COLOR: Color = Color::from_hex(0xcccccc);

    /// Segment colours, cycled by `index % PALETTE.len()`
    pub const PALETTE: [Color; 7] = [
        Color::from_hex(0x3498db),
        Color::from_hex(0xe74c3c),
        Color::from_hex(0x2ecc71),
        Color::from_hex(0xf1c40f),
        Color::from_hex(0x9b59b6),
        Color::from_hex(0x1abc9c),
        Color::from_hex(0xe67e22),
    ];

    /// Palette colour for a segment index
    #[inline]
    pub fn segment_color(index: usize) -> Color {
        PALETTE[index % PALETTE.len()]
    }
}

/// Cue data for synth-backed sound players
pub mod audio {
    /// Note repeated by the suspense loop
    pub const SUSPENSE_NOTE: &str = "C2";
    /// Suspense loop step, in musical notation (eighth note)
    pub const SUSPENSE_STEP: &str = "8n";
    /// Win flourish: (notes, offset in seconds, duration)
    pub const WIN_FLOURISH: [(&[&str], f64, &str); 2] = [
        (&["C4", "E4", "G4"], 0.0, "8n"),
        (&["C5"], 0.2, "8n"),
    ];
}

/// Status banner shown while the wheel is turning
pub const SPINNING_BANNER: &str = "...";
