//! Square Dash - drag a square around, dodge everything else
//!
//! Core modules:
//! - `sim`: Deterministic simulation (easing, spawning, collisions, scoring)
//! - `input`: Pointer tracking and surface-local coordinate conversion
//! - `customization`: Player-chosen colors and icon
//! - `renderer`: Display list construction and the WebGPU pipeline
//! - `game`: Frame driver tying input, simulation and rendering together

pub mod customization;
pub mod game;
pub mod input;
pub mod renderer;
pub mod sim;

pub use customization::{Customization, CustomizationStore, IconKind, Rgb};
pub use game::Game;
pub use input::{InputTracker, SurfaceRect};

/// Game configuration constants
pub mod consts {
    /// Edge length of the player's square
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Fraction of the remaining distance to the target covered each tick
    pub const EASING: f32 = 0.2;

    /// Edge length of an enemy's square
    pub const ENEMY_SIZE: f32 = 15.0;
    /// Enemy speed in pixels per tick
    pub const ENEMY_SPEED: f32 = 4.0;
    /// Chance of spawning one enemy on any PLAYING tick
    pub const SPAWN_CHANCE: f64 = 0.05;
    /// Enemies appear this far outside the left/right edge
    pub const SPAWN_MARGIN: f32 = 20.0;
    /// Enemies further than this outside the left/right edge are retired
    pub const RETIRE_MARGIN: f32 = 50.0;
}
