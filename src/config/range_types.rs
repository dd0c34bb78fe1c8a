use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Maximum straight-line link length in world units, constrained to [1.0, 10000.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct MaxEdgeLength(f32);

impl MaxEdgeLength {
    const MIN: f32 = 1.0;
    const MAX: f32 = 10000.0;
    const DEFAULT: f32 = 170.0;

    /// Non-finite input falls back to the default
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(Self::MIN, Self::MAX))
        } else {
            Self(Self::DEFAULT)
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for MaxEdgeLength {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// How long a path session stays alive, in seconds, constrained to [0.01, 60.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct SessionLifetime(f32);

impl SessionLifetime {
    const MIN: f32 = 0.01;
    const MAX: f32 = 60.0;
    const DEFAULT: f32 = 0.5;

    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(Self::MIN, Self::MAX))
        } else {
            Self(Self::DEFAULT)
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f32(self.0)
    }
}

impl Default for SessionLifetime {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Per-axis ball speed in world units per tick, constrained to [0, 50]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct BallSpeed(u32);

impl BallSpeed {
    const MAX: u32 = 50;

    pub fn new(value: u32) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for BallSpeed {
    fn default() -> Self {
        Self::new(2)
    }
}

/// A ball radius constrained to [1, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct BallRadius(i32);

impl BallRadius {
    const MIN: i32 = 1;
    const MAX: i32 = 100;

    pub fn new(value: i32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl Default for BallRadius {
    fn default() -> Self {
        Self::new(15)
    }
}

/// Side length of a target square marker, constrained to [2, 200]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct SquareSize(i32);

impl SquareSize {
    const MIN: i32 = 2;
    const MAX: i32 = 200;

    pub fn new(value: i32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl Default for SquareSize {
    fn default() -> Self {
        Self::new(20)
    }
}

/// Gap between a target square and the window edge, constrained to [0, 200]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct SquareMargin(i32);

impl SquareMargin {
    const MIN: i32 = 0;
    const MAX: i32 = 200;

    pub fn new(value: i32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl Default for SquareMargin {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_edge_length_clamping() {
        assert_eq!(MaxEdgeLength::new(-5.0).get(), 1.0);
        assert_eq!(MaxEdgeLength::new(170.0).get(), 170.0);
        assert_eq!(MaxEdgeLength::new(1.0e6).get(), 10000.0);
    }

    #[test]
    fn test_session_lifetime_duration() {
        assert_eq!(
            SessionLifetime::new(0.5).as_duration(),
            Duration::from_millis(500)
        );
        assert_eq!(SessionLifetime::new(0.0).get(), 0.01);
        assert_eq!(SessionLifetime::new(120.0).get(), 60.0);
    }

    #[test]
    fn test_non_finite_floats_fall_back_to_defaults() {
        assert_eq!(MaxEdgeLength::new(f32::NAN).get(), 170.0);
        assert_eq!(MaxEdgeLength::new(f32::INFINITY).get(), 170.0);
        assert_eq!(SessionLifetime::new(f32::NAN).get(), 0.5);
        assert_eq!(
            SessionLifetime::new(f32::NEG_INFINITY).as_duration(),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn test_integer_clamping() {
        assert_eq!(BallSpeed::new(80).get(), 50);
        assert_eq!(BallSpeed::new(0).get(), 0);
        assert_eq!(BallRadius::new(0).get(), 1);
        assert_eq!(SquareSize::new(500).get(), 200);
        assert_eq!(SquareMargin::new(-3).get(), 0);
    }

    #[test]
    fn test_display() {
        let length = MaxEdgeLength::new(170.5);
        assert_eq!(format!("{length}"), "170.5");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(MaxEdgeLength::default().get(), 170.0);
        assert_eq!(SessionLifetime::default().get(), 0.5);
        assert_eq!(BallSpeed::default().get(), 2);
        assert_eq!(BallRadius::default().get(), 15);
        assert_eq!(SquareSize::default().get(), 20);
        assert_eq!(SquareMargin::default().get(), 10);
    }
}
