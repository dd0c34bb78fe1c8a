use bevy::prelude::*;
use rand::Rng;

/// Pure bounce step that can be tested without Bevy runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallStep {
    pub position: IVec2,
    pub velocity: IVec2,
}

/// Advance a ball by one tick inside `bounds`, reflecting off the walls.
///
/// A ball touching a wall has that velocity component flipped and is pushed
/// back so its edge sits inside the bounds. Stationary balls never move.
pub fn step_ball(position: IVec2, velocity: IVec2, radius: i32, bounds: IRect) -> BallStep {
    if velocity == IVec2::ZERO {
        return BallStep { position, velocity };
    }

    let mut next = position + velocity;
    let mut velocity = velocity;

    if next.x - radius <= bounds.min.x || next.x + radius >= bounds.max.x {
        velocity.x = -velocity.x;
        next.x = next.x.min(bounds.max.x - radius).max(bounds.min.x + radius);
    }
    if next.y - radius <= bounds.min.y || next.y + radius >= bounds.max.y {
        velocity.y = -velocity.y;
        next.y = next.y.min(bounds.max.y - radius).max(bounds.min.y + radius);
    }

    BallStep {
        position: next,
        velocity,
    }
}

/// Random per-axis velocity with magnitude in `1..=speed` and random sign.
/// A speed of zero yields a stationary ball.
pub fn random_velocity(rng: &mut impl Rng, speed: u32) -> IVec2 {
    if speed == 0 {
        return IVec2::ZERO;
    }
    let speed = speed as i32;
    let mut axis = || {
        let magnitude = rng.gen_range(1..=speed);
        if rng.gen_bool(0.5) { -magnitude } else { magnitude }
    };
    let x = axis();
    let y = axis();
    IVec2::new(x, y)
}
