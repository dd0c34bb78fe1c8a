use crate::routing::Agent;
use bevy::prelude::*;

/// A moving agent that can relay discharges
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub position: IVec2,
    pub velocity: IVec2,
    pub radius: i32,
}

impl Ball {
    pub fn new(position: IVec2, velocity: IVec2, radius: i32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    pub fn stationary(position: IVec2, radius: i32) -> Self {
        Self::new(position, IVec2::ZERO, radius)
    }

    pub fn as_agent(&self, entity: Entity) -> Agent {
        Agent::new(entity, self.position)
    }
}

#[derive(Component)]
pub struct MainCamera;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_as_agent() {
        let ball = Ball::new(IVec2::new(10, 20), IVec2::new(1, -1), 15);
        let entity = Entity::from_raw(3);
        let agent = ball.as_agent(entity);
        assert_eq!(agent.id, entity);
        assert_eq!(agent.position, IVec2::new(10, 20));
    }

    #[test]
    fn test_stationary_ball() {
        let ball = Ball::stationary(IVec2::new(1, 2), 15);
        assert_eq!(ball.velocity, IVec2::ZERO);
    }
}
