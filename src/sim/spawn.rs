//! Enemy spawning
//!
//! Randomness comes from the caller so a seeded generator reproduces a run.

use glam::Vec2;
use rand::Rng;

use super::state::GameState;
use crate::consts::*;

/// Roll the per-tick spawn chance and, on success, add one enemy.
///
/// The enemy enters just outside the left or right edge at a uniform height
/// and flies toward the player's current position. It never re-aims.
/// Returns the new enemy's ID.
pub fn maybe_spawn<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Option<u32> {
    if !rng.random_bool(SPAWN_CHANCE) {
        return None;
    }

    let x = if rng.random_bool(0.5) {
        -SPAWN_MARGIN
    } else {
        state.playfield.x + SPAWN_MARGIN
    };
    let y = rng.random::<f32>() * state.playfield.y;
    let pos = Vec2::new(x, y);

    let aim = (state.player.pos - pos).try_normalize().unwrap_or(Vec2::X);
    let id = state.push_enemy(pos, aim * ENEMY_SPEED);
    log::trace!("Spawned enemy {} at ({:.1}, {:.1})", id, pos.x, pos.y);
    Some(id)
}
