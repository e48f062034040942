pub mod controller;
pub mod edit;
pub mod runtime;

pub use controller::{FrameOutcome, SessionController};
