use crate::{components::MainCamera, game_logic::corner_square_centers, resources::*};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::WHITE))
            .init_resource::<Targets>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, update_targets);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Keep the corner squares glued to the window corners
fn update_targets(
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    config: Res<DischargeConfig>,
    mut targets: ResMut<Targets>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let settings = &config.settings;
    targets.0 = corner_square_centers(
        window.size(),
        settings.square_size.get(),
        settings.square_margin.get(),
    );
    debug!("Targets moved to {:?}", targets.0);
}
