//! Per-frame display list
//!
//! Turns the current game state plus the player's customization into
//! everything the GPU and the text overlay need. Nothing is interpolated;
//! the frame shows the simulation exactly as it stands.

use glam::Vec2;

use super::cutout::cutout;
use super::shapes;
use super::vertex::Vertex;
use crate::consts::ENEMY_SIZE;
use crate::customization::{Customization, Rgb};
use crate::sim::{GameMode, GameState};

pub const TITLE_HEADING: &str = "SQUARE DASH";
pub const TITLE_PROMPT: &str = "TAP SCREEN TO START";

/// Centered title text, drawn by the text overlay
#[derive(Debug, Clone, PartialEq)]
pub struct TitleCard {
    pub heading: &'static str,
    pub heading_color: Rgb,
    pub prompt: &'static str,
    pub prompt_color: Rgb,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Fills the whole surface before anything else
    pub clear: Rgb,
    /// Triangle list in surface pixels, back to front
    pub vertices: Vec<Vertex>,
    /// Present only on the title screen
    pub title: Option<TitleCard>,
}

/// Build the frame for `state` styled by `look`
pub fn build_frame(state: &GameState, look: &Customization) -> Frame {
    match state.mode {
        GameMode::Title => Frame {
            clear: look.background_color,
            vertices: Vec::new(),
            title: Some(TitleCard {
                heading: TITLE_HEADING,
                heading_color: look.player_color,
                prompt: TITLE_PROMPT,
                prompt_color: Rgb::WHITE,
            }),
        },
        GameMode::Playing => Frame {
            clear: look.background_color,
            vertices: playfield_vertices(state, look),
            title: None,
        },
    }
}

fn playfield_vertices(state: &GameState, look: &Customization) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(6 + state.enemies.len() * 6);
    let player = &state.player;

    shapes::rect(
        &mut out,
        player.pos,
        Vec2::splat(player.size),
        look.player_color.to_linear(),
    );

    // Stencil the icon by painting it in the background color
    if let Some(c) = cutout(look.icon, player.pos, player.size) {
        shapes::fan(&mut out, c.pivot, &c.outline, look.background_color.to_linear());
    }

    let enemy_color = look.enemy_color.to_linear();
    for enemy in &state.enemies {
        shapes::rect(&mut out, enemy.pos, Vec2::splat(ENEMY_SIZE), enemy_color);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customization::IconKind;

    fn playing_state() -> GameState {
        let mut state = GameState::new(400.0, 600.0);
        state.initialize();
        state.mode = GameMode::Playing;
        state
    }

    #[test]
    fn test_title_frame() {
        let state = GameState::new(400.0, 600.0);
        let look = Customization::default();
        let frame = build_frame(&state, &look);

        assert_eq!(frame.clear, look.background_color);
        assert!(frame.vertices.is_empty());
        let title = frame.title.unwrap();
        assert_eq!(title.heading, "SQUARE DASH");
        assert_eq!(title.heading_color, look.player_color);
        assert_eq!(title.prompt, "TAP SCREEN TO START");
    }

    #[test]
    fn test_title_hides_frozen_enemies() {
        let mut state = GameState::new(400.0, 600.0);
        state.push_enemy(Vec2::new(10.0, 10.0), Vec2::X);
        let frame = build_frame(&state, &Customization::default());
        assert!(frame.vertices.is_empty());
    }

    #[test]
    fn test_playing_frame_square_icon() {
        let mut state = playing_state();
        state.push_enemy(Vec2::new(10.0, 10.0), Vec2::X);
        state.push_enemy(Vec2::new(50.0, 10.0), Vec2::X);
        let look = Customization::default();
        let frame = build_frame(&state, &look);

        assert!(frame.title.is_none());
        // Player square plus two enemy squares
        assert_eq!(frame.vertices.len(), 18);
        let player_color = look.player_color.to_linear();
        assert!(frame.vertices[..6].iter().all(|v| v.color == player_color));
        let enemy_color = look.enemy_color.to_linear();
        assert!(frame.vertices[6..].iter().all(|v| v.color == enemy_color));
        assert_eq!(frame.vertices[6].position, [10.0, 10.0]);
    }

    #[test]
    fn test_cutout_drawn_in_background_color() {
        let state = playing_state();
        let look = Customization {
            icon: IconKind::Star,
            background_color: Rgb::new(0x12, 0x34, 0x56),
            ..Customization::default()
        };
        let frame = build_frame(&state, &look);

        // Square, then a 10-point fan, no enemies
        assert_eq!(frame.vertices.len(), 6 + 30);
        let bg = look.background_color.to_linear();
        assert!(frame.vertices[6..].iter().all(|v| v.color == bg));
        assert_eq!(frame.clear, look.background_color);
    }

    #[test]
    fn test_enemies_draw_over_player() {
        let mut state = playing_state();
        state.push_enemy(state.player.pos, Vec2::X);
        let look = Customization {
            icon: IconKind::Cat,
            ..Customization::default()
        };
        let frame = build_frame(&state, &look);
        let last = frame.vertices.last().unwrap();
        assert_eq!(last.color, look.enemy_color.to_linear());
    }
}
