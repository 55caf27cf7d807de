pub mod analysis;
pub mod common;
pub mod computing;
pub mod game;
