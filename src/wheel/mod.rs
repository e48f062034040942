pub mod constants;
pub mod entries;
pub mod geometry;
pub mod spin;
pub mod state;
pub mod winner;
