//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use spawn::maybe_spawn;
pub use state::{Enemy, GameMode, GameState, Player};
pub use tick::{TickInput, TickOutcome, tick};
