use bevy::prelude::*;

/// Centers of the four corner target squares for a window of the given size.
///
/// Coordinates are world units with the origin at the window center, so the
/// squares sit `margin` away from each edge. Order: top-left, top-right,
/// bottom-left, bottom-right.
pub fn corner_square_centers(window_size: Vec2, square_size: i32, margin: i32) -> Vec<IVec2> {
    let inset = margin + square_size / 2;
    let half_width = (window_size.x / 2.0).floor() as i32 - inset;
    let half_height = (window_size.y / 2.0).floor() as i32 - inset;

    vec![
        IVec2::new(-half_width, half_height),
        IVec2::new(half_width, half_height),
        IVec2::new(-half_width, -half_height),
        IVec2::new(half_width, -half_height),
    ]
}

/// Bounds balls may move in for a window of the given size
pub fn play_area(window_size: Vec2) -> IRect {
    let half = (window_size / 2.0).floor().as_ivec2();
    IRect::from_corners(-half, half)
}
