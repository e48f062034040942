pub mod audio;
pub mod prompt;
pub mod render;
