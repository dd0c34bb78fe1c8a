//! Exact integer predicates for segments and axis-aligned rectangles

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangular obstacle in world units.
///
/// Zero or negative dimensions are accepted: every predicate works on the
/// normalized min/max corners, so a zero-width barrier behaves like a wall
/// segment and a negative width extends towards smaller `x`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Barrier {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Barrier {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Barrier of the given size centered on a point
    pub fn centered(center: IVec2, width: i32, height: i32) -> Self {
        Self::new(center.x - width / 2, center.y - height / 2, width, height)
    }

    /// Lower-left and upper-right corners after normalization
    pub fn bounds(&self) -> (IVec2, IVec2) {
        let a = IVec2::new(self.x, self.y);
        let b = IVec2::new(
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        );
        (a.min(b), a.max(b))
    }

    pub fn center(&self) -> Vec2 {
        let (min, max) = self.bounds();
        (min.as_vec2() + max.as_vec2()) * 0.5
    }

    pub fn size(&self) -> IVec2 {
        let (min, max) = self.bounds();
        max - min
    }

    /// Inclusive containment on all four sides
    pub fn contains(&self, p: IVec2) -> bool {
        let (min, max) = self.bounds();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// The four boundary edges, counter-clockwise from the lower-left corner
    pub fn edges(&self) -> [(IVec2, IVec2); 4] {
        let (min, max) = self.bounds();
        let lower_right = IVec2::new(max.x, min.y);
        let upper_left = IVec2::new(min.x, max.y);
        [
            (min, lower_right),
            (lower_right, max),
            (max, upper_left),
            (upper_left, min),
        ]
    }
}

/// Euclidean distance between two integer points
pub fn distance(a: IVec2, b: IVec2) -> f32 {
    let dx = (a.x as f64) - (b.x as f64);
    let dy = (a.y as f64) - (b.y as f64);
    (dx * dx + dy * dy).sqrt() as f32
}

/// Sign of the cross product (b - a) x (c - a); positive for a left turn.
///
/// Computed in i128 so products of i32 coordinate differences cannot overflow.
fn orientation(a: IVec2, b: IVec2, c: IVec2) -> i8 {
    let (ax, ay) = (a.x as i128, a.y as i128);
    let (bx, by) = (b.x as i128, b.y as i128);
    let (cx, cy) = (c.x as i128, c.y as i128);
    ((bx - ax) * (cy - ay) - (by - ay) * (cx - ax)).signum() as i8
}

/// Whether `c` lies in the bounding box of segment `a`-`b`.
/// Only meaningful when `c` is already known to be collinear with `a`-`b`.
fn on_segment(a: IVec2, b: IVec2, c: IVec2) -> bool {
    a.x.min(b.x) <= c.x && c.x <= a.x.max(b.x) && a.y.min(b.y) <= c.y && c.y <= a.y.max(b.y)
}

/// Check whether segments `p1`-`p2` and `p3`-`p4` share at least one point.
///
/// Proper crossings are detected by opposite orientations on both sides;
/// touching endpoints and collinear overlaps fall through to the
/// on-segment checks for zero orientations.
pub fn segments_intersect(p1: IVec2, p2: IVec2, p3: IVec2, p4: IVec2) -> bool {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }

    (d1 == 0 && on_segment(p3, p4, p1))
        || (d2 == 0 && on_segment(p3, p4, p2))
        || (d3 == 0 && on_segment(p1, p2, p3))
        || (d4 == 0 && on_segment(p1, p2, p4))
}

/// Check whether a segment touches a rectangle.
///
/// True when the segment crosses any boundary edge or either endpoint lies
/// inside or on the rectangle, which covers segments fully inside it.
pub fn segment_intersects_rectangle(p1: IVec2, p2: IVec2, rect: &Barrier) -> bool {
    rect.edges()
        .iter()
        .any(|&(a, b)| segments_intersect(p1, p2, a, b))
        || rect.contains(p1)
        || rect.contains(p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> IVec2 {
        IVec2::new(x, y)
    }

    #[test]
    fn test_proper_crossing() {
        assert!(segments_intersect(p(0, 0), p(10, 10), p(0, 10), p(10, 0)));
        assert!(!segments_intersect(p(0, 0), p(10, 0), p(0, 5), p(10, 5)));
    }

    #[test]
    fn test_touching_endpoint() {
        // T-junction: endpoint of the second segment lies on the first
        assert!(segments_intersect(p(0, 0), p(10, 0), p(5, 0), p(5, 8)));
        // Shared endpoint
        assert!(segments_intersect(p(0, 0), p(10, 0), p(10, 0), p(20, 5)));
    }

    #[test]
    fn test_collinear_overlap_and_gap() {
        assert!(segments_intersect(p(0, 0), p(10, 0), p(5, 0), p(15, 0)));
        assert!(!segments_intersect(p(0, 0), p(10, 0), p(11, 0), p(15, 0)));
    }

    #[test]
    fn test_degenerate_point_segment() {
        assert!(segments_intersect(p(3, 3), p(3, 3), p(0, 0), p(6, 6)));
        assert!(!segments_intersect(p(3, 4), p(3, 4), p(0, 0), p(6, 6)));
    }

    #[test]
    fn test_large_coordinates_do_not_overflow() {
        let far = 2_000_000_000;
        assert!(segments_intersect(
            p(-far, -far),
            p(far, far),
            p(-far, far),
            p(far, -far)
        ));
    }

    #[test]
    fn test_rectangle_contains_inclusive() {
        let rect = Barrier::new(0, 0, 10, 5);
        assert!(rect.contains(p(0, 0)));
        assert!(rect.contains(p(10, 5)));
        assert!(rect.contains(p(4, 2)));
        assert!(!rect.contains(p(11, 2)));
        assert!(!rect.contains(p(4, -1)));
    }

    #[test]
    fn test_negative_dimensions_are_normalized() {
        let rect = Barrier::new(10, 10, -10, -4);
        assert_eq!(rect.bounds(), (p(0, 6), p(10, 10)));
        assert!(rect.contains(p(5, 8)));
        assert_eq!(rect.size(), p(10, 4));
    }

    #[test]
    fn test_centered_barrier() {
        let rect = Barrier::centered(p(100, 50), 50, 10);
        assert_eq!(rect, Barrier::new(75, 45, 50, 10));
        assert_eq!(rect.center(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_segment_crossing_rectangle() {
        let rect = Barrier::new(90, -50, 20, 100);
        assert!(segment_intersects_rectangle(p(0, 0), p(200, 0), &rect));
        assert!(!segment_intersects_rectangle(p(0, 60), p(200, 60), &rect));
    }

    #[test]
    fn test_segment_inside_rectangle() {
        // Neither endpoint crosses an edge but both lie inside
        let rect = Barrier::new(0, 0, 100, 100);
        assert!(segment_intersects_rectangle(p(10, 10), p(20, 20), &rect));
    }

    #[test]
    fn test_segment_grazing_corner() {
        let rect = Barrier::new(0, 0, 10, 10);
        assert!(segment_intersects_rectangle(p(-5, 15), p(15, -5), &rect));
        assert!(segment_intersects_rectangle(p(10, 20), p(20, 10), &Barrier::new(0, 0, 15, 15)));
        assert!(!segment_intersects_rectangle(p(11, 20), p(20, 11), &rect));
    }

    #[test]
    fn test_zero_width_barrier_is_a_wall() {
        let wall = Barrier::new(50, -10, 0, 20);
        assert!(segment_intersects_rectangle(p(0, 0), p(100, 0), &wall));
        assert!(!segment_intersects_rectangle(p(0, 0), p(40, 0), &wall));
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(p(0, 0), p(3, 4)), 5.0);
        assert_eq!(distance(p(0, 0), p(100, 0)), 100.0);
        assert_eq!(distance(p(7, 7), p(7, 7)), 0.0);
    }
}
