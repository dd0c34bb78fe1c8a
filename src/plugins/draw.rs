use crate::{
    components::Ball,
    resources::*,
    routing::{AgentSnapshot, Barrier, SessionManager},
};
use bevy::prelude::*;

/// Immediate-mode drawing of targets, barriers, balls and live paths
pub struct DrawPlugin;

impl Plugin for DrawPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (draw_static_scene, draw_sessions, draw_balls).chain());
    }
}

fn draw_static_scene(
    mut gizmos: Gizmos,
    targets: Res<Targets>,
    barriers: Query<&Barrier>,
    config: Res<DischargeConfig>,
) {
    let settings = &config.settings;
    let square = Vec2::splat(settings.square_size.get() as f32);

    for center in &targets.0 {
        gizmos.rect_2d(center.as_vec2(), square, rgb(settings.square_color));
    }
    for barrier in barriers.iter() {
        gizmos.rect_2d(
            barrier.center(),
            barrier.size().as_vec2(),
            rgb(settings.barrier_color),
        );
    }
}

// Only valid sessions are drawn; invalid ones wait silently for expiry
fn draw_sessions(
    mut gizmos: Gizmos,
    balls: Query<(Entity, &Ball)>,
    sessions: Res<SessionManager>,
    config: Res<DischargeConfig>,
) {
    if sessions.is_empty() {
        return;
    }
    let settings = &config.settings;
    let agents: AgentSnapshot = balls
        .iter()
        .map(|(entity, ball)| ball.as_agent(entity))
        .collect();

    for (_, session) in sessions.iter().filter(|(_, session)| session.is_valid()) {
        let Some(points) = session.polyline(&agents) else {
            continue;
        };
        gizmos.linestrip_2d(
            points.iter().map(|point| point.as_vec2()),
            rgba(settings.path_color),
        );
        gizmos.circle_2d(
            points[0].as_vec2(),
            settings.origin_marker_radius,
            rgba(settings.origin_marker_color),
        );
    }
}

fn draw_balls(mut gizmos: Gizmos, balls: Query<&Ball>, config: Res<DischargeConfig>) {
    let color = rgb(config.settings.ball_color);
    for ball in balls.iter() {
        gizmos.circle_2d(ball.position.as_vec2(), ball.radius as f32, color);
    }
}
