//! Winner resolution
//!
//! Maps the final wheel angle onto the entry list once a spin completes.

use serde::{Deserialize, Serialize};

use crate::wheel::geometry::{self, GeometryError};
use crate::wheel::state::WheelState;

/// Winner of a completed spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    /// Winning entry text
    pub winner: String,
    /// Segment index of the winner
    pub index: usize,
    /// Entry count the spin was resolved against
    pub entry_count: usize,
    /// Accumulated angle that produced the winner (radians)
    pub final_angle: f64,
}

/// Resolve the winner for `state` against `entries`, or report why it can't be.
pub fn try_resolve(state: &WheelState, entries: &[String]) -> Result<SpinResult, GeometryError> {
    let index = geometry::segment_index(state.current_angle, entries.len())?;
    Ok(SpinResult {
        winner: entries[index].clone(),
        index,
        entry_count: entries.len(),
        final_angle: state.current_angle,
    })
}

/// Resolve the winner for `state` against `entries`.
///
/// Callers guarantee at least one entry; the spin precondition enforces it.
pub fn resolve(state: &WheelState, entries: &[String]) -> Option<SpinResult> {
    debug_assert!(!entries.is_empty(), "winner resolved against an empty wheel");
    try_resolve(state, entries).ok()
}
