//! Per-frame simulation tick
//!
//! One call advances the game by exactly one rendered frame. Motion is
//! expressed per tick, so the game runs at the display's refresh rate.

use glam::Vec2;
use rand::Rng;

use super::spawn::maybe_spawn;
use super::state::{GameMode, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Where the player's top-left corner is heading
    pub target: Vec2,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// ID of the enemy spawned this tick
    pub spawned: Option<u32>,
    /// Enemies retired (and scored) this tick
    pub retired: u32,
    /// The player was hit and the run ended
    pub collided: bool,
}

/// Advance the game state by one tick
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, input: &TickInput, rng: &mut R) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    // Title screen idles; enemies left over from the last run stay frozen
    if state.mode != GameMode::Playing {
        return outcome;
    }

    state.time_ticks += 1;

    // 1. Ease toward target
    state.player.ease_toward(input.target);

    // 2. Maybe spawn, aimed at where the player is now
    outcome.spawned = maybe_spawn(state, rng);

    // 3. Advance every enemy
    for enemy in &mut state.enemies {
        enemy.advance();
    }

    // 4. First overlap ends the run. Colliding enemies are left in place.
    let player_box = state.player.bounds();
    if state.enemies.iter().any(|e| e.bounds().overlaps(&player_box)) {
        state.mode = GameMode::Title;
        outcome.collided = true;
        log::info!("Game over, score {}", state.score);
    }

    // 5. Retire enemies past either side, one point each
    let width = state.playfield.x;
    let before = state.enemies.len();
    state.enemies.retain(|e| !e.has_left(width));
    outcome.retired = (before - state.enemies.len()) as u32;
    state.score += outcome.retired as u64;

    if outcome.retired > 0 {
        log::debug!("Retired {} enemies, score {}", outcome.retired, state.score);
    }

    outcome
}
