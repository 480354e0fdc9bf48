//! Score display above the playfield

use crate::sim::{GameMode, GameState};

/// Mirror of the score element. Visible while playing; text rewritten only
/// when the score actually changes.
#[derive(Debug, Clone, Default)]
pub struct ScoreDisplay {
    visible: bool,
    text: String,
    shown_score: Option<u64>,
}

impl ScoreDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Catch up with `state`. Returns true if anything visible changed.
    pub fn sync(&mut self, state: &GameState) -> bool {
        let visible = state.mode == GameMode::Playing;
        let mut changed = visible != self.visible;
        self.visible = visible;

        if visible && self.shown_score != Some(state.score) {
            self.text = format!("Score: {}", state.score);
            self.shown_score = Some(state.score);
            changed = true;
        }
        changed
    }
}
