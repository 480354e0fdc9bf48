//! Pointer input tracking
//!
//! Turns raw pointer events into the point the player chases. Positions
//! arrive in client (window) coordinates and are converted against the
//! surface rectangle supplied with each event, so resizes and scrolling
//! never leave a stale offset behind.

use glam::Vec2;

use crate::sim::TickInput;

/// The drawing surface's bounding rectangle in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a client point to surface-local coordinates.
    ///
    /// Returns `None` for non-finite input or a surface that has not been laid
    /// out yet. Points outside the surface are clamped to its edges.
    pub fn to_local(&self, client: Vec2) -> Option<Vec2> {
        let origin = Vec2::new(self.left, self.top);
        let extent = Vec2::new(self.width, self.height);
        if !client.is_finite() || !origin.is_finite() || !extent.is_finite() {
            return None;
        }
        if extent.x <= 0.0 || extent.y <= 0.0 {
            return None;
        }
        Some((client - origin).clamp(Vec2::ZERO, extent))
    }
}

/// Pointer state shared between the event handlers and the frame loop
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    /// Top-left position the player eases toward
    target: Vec2,
    /// Pointer is down on the play surface
    dragging: bool,
    /// Another surface (the editor) owns the pointer
    suppressed: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Route pointer events away from (or back to) the play surface.
    /// Suppressing ends any drag in progress.
    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
        if suppressed {
            self.dragging = false;
        }
    }

    /// Park the target on a position, e.g. the player's spawn point
    pub fn reset_target(&mut self, pos: Vec2) {
        self.target = pos;
    }

    /// Pointer pressed. Returns false if the event was suppressed.
    pub fn pointer_down(&mut self, client: Vec2, rect: SurfaceRect, player_size: f32) -> bool {
        if self.suppressed {
            return false;
        }
        self.dragging = true;
        self.aim(client, rect, player_size);
        true
    }

    /// Pointer moved; only steers while dragging
    pub fn pointer_move(&mut self, client: Vec2, rect: SurfaceRect, player_size: f32) {
        if self.suppressed || !self.dragging {
            return;
        }
        self.aim(client, rect, player_size);
    }

    /// Pointer released. The target stays where it was, so the player
    /// finishes easing toward the last point.
    pub fn pointer_up(&mut self) {
        if self.suppressed {
            return;
        }
        self.dragging = false;
    }

    /// Snapshot for the next simulation tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            target: self.target,
        }
    }

    fn aim(&mut self, client: Vec2, rect: SurfaceRect, player_size: f32) {
        match rect.to_local(client) {
            Some(local) => self.target = local - Vec2::splat(player_size / 2.0),
            None => log::debug!("Ignoring pointer at {:?} on surface {:?}", client, rect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: SurfaceRect = SurfaceRect {
        left: 0.0,
        top: 60.0,
        width: 400.0,
        height: 600.0,
    };

    #[test]
    fn test_down_sets_offset_target() {
        let mut input = InputTracker::new();
        assert!(input.pointer_down(Vec2::new(100.0, 160.0), RECT, 40.0));
        assert!(input.is_dragging());
        assert_eq!(input.target(), Vec2::new(80.0, 80.0));
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut input = InputTracker::new();
        input.reset_target(Vec2::new(5.0, 5.0));
        input.pointer_move(Vec2::new(300.0, 300.0), RECT, 40.0);
        assert_eq!(input.target(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_up_keeps_target() {
        let mut input = InputTracker::new();
        input.pointer_down(Vec2::new(100.0, 160.0), RECT, 40.0);
        input.pointer_move(Vec2::new(200.0, 260.0), RECT, 40.0);
        input.pointer_up();
        assert!(!input.is_dragging());
        assert_eq!(input.target(), Vec2::new(180.0, 180.0));

        input.pointer_move(Vec2::new(10.0, 70.0), RECT, 40.0);
        assert_eq!(input.target(), Vec2::new(180.0, 180.0));
    }

    #[test]
    fn test_rect_is_read_per_event() {
        let mut input = InputTracker::new();
        input.pointer_down(Vec2::new(100.0, 160.0), RECT, 40.0);
        // Page scrolled by 50px
        let scrolled = SurfaceRect { top: 10.0, ..RECT };
        input.pointer_move(Vec2::new(100.0, 160.0), scrolled, 40.0);
        assert_eq!(input.target(), Vec2::new(80.0, 130.0));
    }

    #[test]
    fn test_suppressed_events_are_noops() {
        let mut input = InputTracker::new();
        input.pointer_down(Vec2::new(100.0, 160.0), RECT, 40.0);
        input.set_suppressed(true);
        assert!(!input.is_dragging());

        assert!(!input.pointer_down(Vec2::new(300.0, 300.0), RECT, 40.0));
        input.pointer_move(Vec2::new(300.0, 300.0), RECT, 40.0);
        assert!(!input.is_dragging());
        assert_eq!(input.target(), Vec2::new(80.0, 80.0));

        input.set_suppressed(false);
        assert!(input.pointer_down(Vec2::new(300.0, 300.0), RECT, 40.0));
        assert_eq!(input.target(), Vec2::new(280.0, 220.0));
    }

    #[test]
    fn test_invalid_points_are_dropped() {
        let mut input = InputTracker::new();
        input.reset_target(Vec2::new(1.0, 2.0));
        input.pointer_down(Vec2::new(f32::NAN, 10.0), RECT, 40.0);
        assert_eq!(input.target(), Vec2::new(1.0, 2.0));
        // Still counts as a press
        assert!(input.is_dragging());

        let unlaid = SurfaceRect::default();
        input.pointer_move(Vec2::new(10.0, 10.0), unlaid, 40.0);
        assert_eq!(input.target(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_points_outside_surface_are_clamped() {
        let rect = SurfaceRect::new(0.0, 0.0, 400.0, 600.0);
        assert_eq!(rect.to_local(Vec2::new(-30.0, 900.0)), Some(Vec2::new(0.0, 600.0)));
        assert_eq!(rect.to_local(Vec2::new(20.0, 30.0)), Some(Vec2::new(20.0, 30.0)));
    }
}
