//! Simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep (previous frame's wall-clock duration)
//! - No errors: off-screen entities are tolerated, never rejected
//! - No platform dependencies; rendering only through `renderer` primitives

pub mod collision;
pub mod state;
pub mod tick;

pub use state::{Ball, GameState, Paddle};
pub use tick::{Simulation, TickInput};
