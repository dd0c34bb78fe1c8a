//! Line-of-sight queries against the current barrier set

use crate::routing::geometry::{Barrier, distance, segment_intersects_rectangle};
use bevy::prelude::*;

/// Check whether the straight segment between two points hits any barrier
pub fn is_blocked(p1: IVec2, p2: IVec2, barriers: &[Barrier]) -> bool {
    barriers
        .iter()
        .any(|barrier| segment_intersects_rectangle(p1, p2, barrier))
}

/// Check whether two points can be linked: within range and unobstructed.
///
/// This is the single link test shared by graph construction, the solver's
/// target check and session revalidation.
pub fn has_line_of_sight(p1: IVec2, p2: IVec2, max_edge_length: f32, barriers: &[Barrier]) -> bool {
    distance(p1, p2) <= max_edge_length && !is_blocked(p1, p2, barriers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> IVec2 {
        IVec2::new(x, y)
    }

    #[test]
    fn test_no_barriers_never_blocks() {
        assert!(!is_blocked(p(0, 0), p(500, 500), &[]));
    }

    #[test]
    fn test_first_hit_blocks() {
        let barriers = [Barrier::new(300, 300, 10, 10), Barrier::new(90, -50, 20, 100)];
        assert!(is_blocked(p(0, 0), p(200, 0), &barriers));
        assert!(!is_blocked(p(0, 100), p(200, 100), &barriers));
    }

    #[test]
    fn test_is_blocked_symmetry() {
        let barriers = [
            Barrier::new(90, -50, 20, 100),
            Barrier::new(-40, 30, 15, 15),
            Barrier::new(0, 200, 0, 40),
        ];
        let points = [
            p(0, 0),
            p(200, 0),
            p(100, 0),
            p(-50, 50),
            p(-25, 45),
            p(0, 220),
            p(10, 250),
            p(120, -80),
        ];

        for &a in &points {
            for &b in &points {
                assert_eq!(
                    is_blocked(a, b, &barriers),
                    is_blocked(b, a, &barriers),
                    "asymmetric result for {a} -> {b}"
                );
            }
        }
    }

    #[test]
    fn test_line_of_sight_range_is_inclusive() {
        assert!(has_line_of_sight(p(0, 0), p(170, 0), 170.0, &[]));
        assert!(!has_line_of_sight(p(0, 0), p(171, 0), 170.0, &[]));
    }

    #[test]
    fn test_line_of_sight_respects_barriers() {
        let barriers = [Barrier::new(90, -50, 20, 100)];
        assert!(!has_line_of_sight(p(0, 0), p(100, 0), 170.0, &barriers));
        assert!(has_line_of_sight(p(0, 60), p(100, 60), 170.0, &barriers));
    }

    #[test]
    fn test_endpoint_inside_barrier_is_blocked() {
        // A target sitting inside a barrier cannot be seen from anywhere
        let barriers = [Barrier::new(190, -10, 20, 20)];
        assert!(is_blocked(p(150, 0), p(200, 0), &barriers));
    }
}
