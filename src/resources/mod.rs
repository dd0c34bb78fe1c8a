use crate::config::range_types::*;
use crate::routing::{RoutingParams, SearchMode};
use bevy::prelude::*;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Target points for discharges, recomputed whenever the window is resized
#[derive(Resource, Debug, Clone, Default)]
pub struct Targets(pub Vec<IVec2>);

/// Seeded generator for ball velocities
#[derive(Resource)]
pub struct BallRng(pub Pcg64);

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default)]
pub struct DischargeConfig {
    #[serde(default)]
    pub settings: DischargeSettings,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate)]
#[serde(default)]
// NOTE: When adding new fields, update the default config.toml example in the project root
pub struct DischargeSettings {
    // Routing settings
    pub max_edge_length: MaxEdgeLength,
    pub session_lifetime: SessionLifetime,
    pub search_mode: SearchMode,
    #[validate(range(min = 1.0, max = 240.0))]
    pub tick_rate_hz: f64,

    // Ball settings
    pub ball_speed: BallSpeed,
    pub ball_radius: BallRadius,

    // Barrier settings
    #[validate(range(min = 1, max = 1000))]
    pub barrier_width: i32,
    #[validate(range(min = 1, max = 1000))]
    pub barrier_height: i32,

    // Target layout
    pub square_size: SquareSize,
    pub square_margin: SquareMargin,

    // Visual settings
    #[validate(range(min = 1.0, max = 100.0))]
    pub origin_marker_radius: f32,
    pub ball_color: [f32; 3],
    pub square_color: [f32; 3],
    pub barrier_color: [f32; 3],
    pub path_color: [f32; 4],
    pub origin_marker_color: [f32; 4],

    // Window settings
    #[validate(range(min = 100.0, max = 7680.0))]
    pub window_width: f32,
    #[validate(range(min = 100.0, max = 4320.0))]
    pub window_height: f32,
}

impl Default for DischargeSettings {
    fn default() -> Self {
        Self {
            // Routing settings
            max_edge_length: MaxEdgeLength::new(170.0),
            session_lifetime: SessionLifetime::new(0.5),
            search_mode: SearchMode::FirstVisible,
            tick_rate_hz: 60.0,

            // Ball settings
            ball_speed: BallSpeed::new(2),
            ball_radius: BallRadius::new(15),

            // Barrier settings
            barrier_width: 50,
            barrier_height: 10,

            // Target layout
            square_size: SquareSize::new(20),
            square_margin: SquareMargin::new(10),

            // Visual settings
            origin_marker_radius: 8.0,
            ball_color: [0.53, 0.81, 0.98],
            square_color: [0.0, 1.0, 0.0],
            barrier_color: [0.0, 0.0, 0.0],
            path_color: [0.0, 0.0, 1.0, 0.78],
            origin_marker_color: [1.0, 0.0, 0.0, 0.78],

            // Window settings
            window_width: 800.0,
            window_height: 600.0,
        }
    }
}

impl DischargeSettings {
    pub fn routing_params(&self) -> RoutingParams {
        RoutingParams {
            max_edge_length: self.max_edge_length,
            session_lifetime: self.session_lifetime,
            search: self.search_mode,
        }
    }

    /// Re-apply newtype bounds, which deserialization bypasses.
    /// Non-finite floats are reset to their defaults, since range
    /// validation never rejects NaN.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.tick_rate_hz.is_finite() {
            self.tick_rate_hz = defaults.tick_rate_hz;
        }
        if !self.origin_marker_radius.is_finite() {
            self.origin_marker_radius = defaults.origin_marker_radius;
        }
        if !self.window_width.is_finite() {
            self.window_width = defaults.window_width;
        }
        if !self.window_height.is_finite() {
            self.window_height = defaults.window_height;
        }

        self.max_edge_length = MaxEdgeLength::new(self.max_edge_length.get());
        self.session_lifetime = SessionLifetime::new(self.session_lifetime.get());
        self.ball_speed = BallSpeed::new(self.ball_speed.get());
        self.ball_radius = BallRadius::new(self.ball_radius.get());
        self.square_size = SquareSize::new(self.square_size.get());
        self.square_margin = SquareMargin::new(self.square_margin.get());
        self
    }
}

pub fn rgb(color: [f32; 3]) -> Color {
    Color::srgb(color[0], color[1], color[2])
}

pub fn rgba(color: [f32; 4]) -> Color {
    Color::srgba(color[0], color[1], color[2], color[3])
}
