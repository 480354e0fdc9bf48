//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Which update/render path runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Title card, waiting for the first pointer-down
    #[default]
    Title,
    /// Active gameplay
    Playing,
}

/// The player's square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in surface coordinates
    pub pos: Vec2,
    /// Edge length
    pub size: f32,
}

impl Player {
    /// A player centered in a playfield of the given size
    pub fn centered_in(playfield: Vec2) -> Self {
        Self {
            pos: playfield / 2.0 - Vec2::splat(PLAYER_SIZE / 2.0),
            size: PLAYER_SIZE,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    /// Cover `EASING` of the remaining distance to `target` on each axis
    pub fn ease_toward(&mut self, target: Vec2) {
        self.pos += (target - self.pos) * EASING;
    }
}

/// An enemy square flying in a straight line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
}

impl Enemy {
    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, ENEMY_SIZE)
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// True once the enemy is past either horizontal retirement bound
    pub fn has_left(&self, playfield_width: f32) -> bool {
        self.pos.x < -RETIRE_MARGIN || self.pos.x > playfield_width + RETIRE_MARGIN
    }
}

/// Complete game state (deterministic given the injected RNG)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current mode
    pub mode: GameMode,
    /// Player square
    pub player: Player,
    /// Live enemies, in spawn order
    pub enemies: Vec<Enemy>,
    /// Enemies retired this run
    pub score: u64,
    /// Playfield size in surface pixels
    pub playfield: Vec2,
    /// Simulation tick counter (PLAYING ticks only)
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh state on the title screen
    pub fn new(width: f32, height: f32) -> Self {
        let playfield = sanitize_playfield(width, height);
        Self {
            mode: GameMode::Title,
            player: Player::centered_in(playfield),
            enemies: Vec::new(),
            score: 0,
            playfield,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Reset for a new run: recentre the player, drop enemies, zero the score.
    ///
    /// Does not change the mode; the caller decides when play starts.
    pub fn initialize(&mut self) {
        self.player = Player::centered_in(self.playfield);
        self.enemies.clear();
        self.score = 0;
        self.time_ticks = 0;
    }

    /// Adopt a new playfield size. Entities keep their positions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.playfield = sanitize_playfield(width, height);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an enemy at `pos` moving by `vel` each tick
    pub fn push_enemy(&mut self, pos: Vec2, vel: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy { id, pos, vel });
        id
    }
}

/// Surfaces report zero or garbage sizes before the first layout pass
fn sanitize_playfield(width: f32, height: f32) -> Vec2 {
    let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Vec2::new(clean(width), clean(height))
}
