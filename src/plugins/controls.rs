use crate::{
    components::{Ball, MainCamera},
    game_logic::random_velocity,
    resources::*,
    routing::{AgentSnapshot, Barrier, SessionManager},
};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Mouse and keyboard mapping onto routing operations
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (spawn_ball, discharge_nearest_ball, drop_barrier));
    }
}

/// Cursor position in world units, rounded to the integer grid
fn cursor_world_position(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) -> Option<IVec2> {
    let window = windows.single().ok()?;
    let cursor = window.cursor_position()?;
    let (camera, camera_transform) = cameras.single().ok()?;
    let world = camera.viewport_to_world_2d(camera_transform, cursor).ok()?;
    Some(world.round().as_ivec2())
}

// Left click: new ball at the cursor
fn spawn_ball(
    mut commands: Commands,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    config: Res<DischargeConfig>,
    mut rng: ResMut<BallRng>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(position) = cursor_world_position(&windows, &cameras) else {
        return;
    };

    let settings = &config.settings;
    let velocity = random_velocity(&mut rng.0, settings.ball_speed.get());
    let entity = commands
        .spawn(Ball::new(position, velocity, settings.ball_radius.get()))
        .id();
    info!("Spawned ball {entity} at {position} moving {velocity}");
}

// Right click: route the nearest ball to every target
fn discharge_nearest_ball(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    balls: Query<(Entity, &Ball)>,
    barriers: Query<&Barrier>,
    targets: Res<Targets>,
    time: Res<Time<Fixed>>,
    mut sessions: ResMut<SessionManager>,
) {
    if !mouse_button.just_pressed(MouseButton::Right) {
        return;
    }
    let Some(cursor) = cursor_world_position(&windows, &cameras) else {
        return;
    };

    let agents: AgentSnapshot = balls
        .iter()
        .map(|(entity, ball)| ball.as_agent(entity))
        .collect();
    let Some(nearest) = agents.nearest(cursor) else {
        return;
    };
    let barriers: Vec<Barrier> = barriers.iter().copied().collect();

    match sessions.create_sessions(nearest.id, &targets.0, &agents, &barriers, time.elapsed()) {
        Ok(created) => info!(
            "Discharge from {}: {}/{} targets reached",
            nearest.id,
            created.iter().flatten().count(),
            created.len()
        ),
        Err(err) => error!("Discharge from {} failed: {err}", nearest.id),
    }
}

// K: drop a barrier centered on the cursor
fn drop_barrier(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    config: Res<DischargeConfig>,
) {
    if !keyboard.just_pressed(KeyCode::KeyK) {
        return;
    }
    let Some(center) = cursor_world_position(&windows, &cameras) else {
        return;
    };

    let settings = &config.settings;
    let barrier = Barrier::centered(center, settings.barrier_width, settings.barrier_height);
    commands.spawn(barrier);
    info!("Placed barrier {barrier:?}");
}
