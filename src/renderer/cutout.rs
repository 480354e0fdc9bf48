//! Icon cutouts stamped onto the player's square
//!
//! Outlines are laid out for a 40px square relative to its top-left corner
//! and scaled to the actual player size. Both are star-shaped around their
//! pivot, so `shapes::fan` fills them.

use glam::Vec2;

use super::shapes::quadratic;
use crate::consts::PLAYER_SIZE;
use crate::customization::IconKind;

/// Segments used to flatten each curve of the cat's head
const CURVE_SEGMENTS: u32 = 8;

/// A closed outline with the point to fan it from
#[derive(Debug, Clone, PartialEq)]
pub struct Cutout {
    pub pivot: Vec2,
    pub outline: Vec<Vec2>,
}

/// Cutout for `icon` on a square at `origin` with edge `size`.
/// The plain square has none.
pub fn cutout(icon: IconKind, origin: Vec2, size: f32) -> Option<Cutout> {
    let (pivot, outline) = match icon {
        IconKind::Square => return None,
        IconKind::Cat => (Vec2::new(20.0, 22.0), cat_outline()),
        IconKind::Star => (Vec2::new(20.0, 20.0), star_outline()),
    };

    let scale = size / PLAYER_SIZE;
    let place = |p: Vec2| origin + p * scale;
    Some(Cutout {
        pivot: place(pivot),
        outline: outline.into_iter().map(place).collect(),
    })
}

/// Cat head: two ears on top, rounded chin below
fn cat_outline() -> Vec<Vec2> {
    let mut points = vec![
        Vec2::new(8.0, 16.0),
        Vec2::new(8.0, 4.0),
        Vec2::new(16.0, 12.0),
        Vec2::new(24.0, 12.0),
        Vec2::new(32.0, 4.0),
        Vec2::new(32.0, 16.0),
    ];
    let chin = Vec2::new(20.0, 36.0);
    points.extend(quadratic(Vec2::new(32.0, 16.0), Vec2::new(36.0, 32.0), chin, CURVE_SEGMENTS));
    // Drop the final point; it duplicates the start of the outline
    points.extend(
        quadratic(chin, Vec2::new(4.0, 32.0), Vec2::new(8.0, 16.0), CURVE_SEGMENTS)
            .take(CURVE_SEGMENTS as usize - 1),
    );
    points
}

/// Five-pointed star, outer radius 16, inner radius 8, first tip at 18°
fn star_outline() -> Vec<Vec2> {
    let center = Vec2::new(20.0, 20.0);
    // Screen y points down, so the sine is subtracted
    let polar = |deg: f32, r: f32| {
        let a = deg.to_radians();
        center + Vec2::new(a.cos() * r, -a.sin() * r)
    };
    (0..5)
        .flat_map(|i| {
            let base = i as f32 * 72.0;
            [polar(18.0 + base, 16.0), polar(54.0 + base, 8.0)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_has_no_cutout() {
        assert!(cutout(IconKind::Square, Vec2::ZERO, 40.0).is_none());
    }

    #[test]
    fn test_star_shape() {
        let star = cutout(IconKind::Star, Vec2::new(100.0, 200.0), 40.0).unwrap();
        assert_eq!(star.outline.len(), 10);
        assert_eq!(star.pivot, Vec2::new(120.0, 220.0));
        for (i, p) in star.outline.iter().enumerate() {
            let r = (*p - star.pivot).length();
            let expected = if i % 2 == 0 { 16.0 } else { 8.0 };
            assert!((r - expected).abs() < 1e-3, "point {} at radius {}", i, r);
        }
        // 90° tip points straight up
        let top = star.outline[2];
        assert!((top - Vec2::new(120.0, 204.0)).length() < 1e-3);
    }

    #[test]
    fn test_cat_stays_inside_square() {
        let origin = Vec2::new(50.0, 60.0);
        let cat = cutout(IconKind::Cat, origin, 40.0).unwrap();
        assert_eq!(cat.outline[0], origin + Vec2::new(8.0, 16.0));
        assert!(cat.outline.contains(&(origin + Vec2::new(20.0, 36.0))));
        for p in &cat.outline {
            let local = *p - origin;
            assert!((0.0..=40.0).contains(&local.x) && (0.0..=40.0).contains(&local.y));
        }
        // Closing point is not duplicated
        assert_ne!(cat.outline.last(), cat.outline.first());
    }

    #[test]
    fn test_outlines_wind_around_pivot() {
        // Angles around the pivot must keep turning the same way for a fan fill
        for icon in [IconKind::Cat, IconKind::Star] {
            let c = cutout(icon, Vec2::ZERO, 40.0).unwrap();
            let n = c.outline.len();
            let mut sign = 0.0_f32;
            for i in 0..n {
                let a = c.outline[i] - c.pivot;
                let b = c.outline[(i + 1) % n] - c.pivot;
                let cross = a.perp_dot(b);
                assert!(cross.abs() > 1e-6, "{:?} edge {} passes through pivot", icon, i);
                if sign == 0.0 {
                    sign = cross.signum();
                }
                assert_eq!(cross.signum(), sign, "{:?} folds back at {}", icon, i);
            }
        }
    }

    #[test]
    fn test_cutout_scales_with_size() {
        let small = cutout(IconKind::Star, Vec2::ZERO, 20.0).unwrap();
        assert_eq!(small.pivot, Vec2::new(10.0, 10.0));
    }
}
