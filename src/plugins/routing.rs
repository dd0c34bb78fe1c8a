use crate::{
    components::Ball,
    game_logic::{play_area, step_ball},
    routing::{AgentSnapshot, Barrier, RoutingParams, SessionManager},
};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Fixed-rate tick: ball motion, then session revalidation and expiry
pub struct RoutingPlugin {
    pub params: RoutingParams,
    pub tick_rate_hz: f64,
}

impl Default for RoutingPlugin {
    fn default() -> Self {
        Self {
            params: RoutingParams::default(),
            tick_rate_hz: 60.0,
        }
    }
}

impl Plugin for RoutingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(self.tick_rate_hz))
            .insert_resource(SessionManager::new(self.params))
            .add_systems(FixedUpdate, (move_balls, tick_sessions).chain());
    }
}

fn move_balls(mut balls: Query<&mut Ball>, windows: Query<&Window, With<PrimaryWindow>>) {
    let Ok(window) = windows.single() else {
        return;
    };
    let area = play_area(window.size());

    for mut ball in balls.iter_mut() {
        if ball.velocity == IVec2::ZERO {
            continue;
        }
        let step = step_ball(ball.position, ball.velocity, ball.radius, area);
        ball.position = step.position;
        ball.velocity = step.velocity;
    }
}

fn tick_sessions(
    time: Res<Time>,
    balls: Query<(Entity, &Ball)>,
    barriers: Query<&Barrier>,
    mut sessions: ResMut<SessionManager>,
) {
    if sessions.is_empty() {
        return;
    }

    let agents: AgentSnapshot = balls
        .iter()
        .map(|(entity, ball)| ball.as_agent(entity))
        .collect();
    let barriers: Vec<Barrier> = barriers.iter().copied().collect();

    let report = sessions.tick(time.elapsed(), &agents, &barriers);
    for (id, err) in &report.violations {
        error!("Session {id} references a missing agent: {err}");
    }
    for id in &report.invalidated {
        debug!("Session {id} lost its path");
    }
}
