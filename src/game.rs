//! Frame driver
//!
//! Owns everything the per-frame loop touches. The host forwards pointer
//! events and calls `advance` then `frame` once per display refresh; the
//! loop itself is just repeated calls, so tests can step it by hand.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::customization::CustomizationStore;
use crate::input::{InputTracker, SurfaceRect};
use crate::renderer::{Frame, ScoreDisplay, build_frame};
use crate::sim::{GameMode, GameState, TickOutcome, tick};

pub struct Game {
    pub state: GameState,
    pub input: InputTracker,
    pub customization: CustomizationStore,
    pub score_display: ScoreDisplay,
    rng: Pcg32,
}

impl Game {
    /// New game on the title screen with a `width`×`height` playfield
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self {
            state: GameState::new(width, height),
            input: InputTracker::new(),
            customization: CustomizationStore::default(),
            score_display: ScoreDisplay::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
        log::info!("Playfield resized to {}x{}", self.state.playfield.x, self.state.playfield.y);
    }

    /// Open or close the editor. While open, the play surface ignores the pointer.
    pub fn set_editor_open(&mut self, open: bool) {
        self.customization.set_editor_open(open);
        self.input.set_suppressed(open);
        log::info!("Editor {}", if open { "opened" } else { "closed" });
    }

    pub fn toggle_editor(&mut self) -> bool {
        let open = !self.customization.is_editor_open();
        self.set_editor_open(open);
        open
    }

    /// Pointer pressed on the play surface. Starts a run from the title screen.
    pub fn pointer_down(&mut self, client: Vec2, rect: SurfaceRect) {
        if self.input.is_suppressed() {
            return;
        }
        if self.state.mode == GameMode::Title {
            self.state.initialize();
            self.state.mode = GameMode::Playing;
            self.input.reset_target(self.state.player.pos);
            log::info!("Run started");
        }
        self.input.pointer_down(client, rect, self.state.player.size);
    }

    pub fn pointer_move(&mut self, client: Vec2, rect: SurfaceRect) {
        self.input.pointer_move(client, rect, self.state.player.size);
    }

    pub fn pointer_up(&mut self) {
        self.input.pointer_up();
    }

    /// Advance the simulation by one tick using the latest pointer target
    pub fn advance(&mut self) -> TickOutcome {
        let input = self.input.tick_input();
        tick(&mut self.state, &input, &mut self.rng)
    }

    /// Display list for the current state
    pub fn frame(&self) -> Frame {
        build_frame(&self.state, self.customization.get())
    }

    /// Bring the score display up to date. Returns true if it needs redrawing.
    pub fn sync_score_display(&mut self) -> bool {
        self.score_display.sync(&self.state)
    }
}
