use bevy::prelude::*;
use clap::Parser;
use discharge::config::range_types::{BallSpeed, MaxEdgeLength};
use discharge::config::{load_config, load_config_from};
use discharge::resources::BallRng;
use discharge::*;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(name = "discharge")]
#[command(about = "Route discharges between moving balls and corner squares")]
struct Args {
    /// Config file to use instead of the one in the user config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducible ball velocities
    #[arg(long)]
    seed: Option<u64>,

    /// Override the maximum link length between two points
    #[arg(long)]
    max_edge_length: Option<f32>,

    /// Override the per-axis ball speed (0 keeps balls still)
    #[arg(long)]
    ball_speed: Option<u32>,

    /// Weigh the final hop to the target when choosing a route
    #[arg(long)]
    shortest_total: bool,
}

fn main() {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config_from(path).unwrap_or_else(|err| {
            eprintln!("Failed to load {}: {err}", path.display());
            std::process::exit(1);
        }),
        None => load_config(),
    };
    if let Some(length) = args.max_edge_length {
        config.settings.max_edge_length = MaxEdgeLength::new(length);
    }
    if let Some(speed) = args.ball_speed {
        config.settings.ball_speed = BallSpeed::new(speed);
    }
    if args.shortest_total {
        config.settings.search_mode = SearchMode::ShortestTotal;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let settings = config.settings.clone();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Discharge".into(),
                resolution: (settings.window_width, settings.window_height).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .insert_resource(BallRng(Pcg64::seed_from_u64(seed)))
        .add_plugins((
            ScenePlugin,
            ControlsPlugin,
            RoutingPlugin {
                params: settings.routing_params(),
                tick_rate_hz: settings.tick_rate_hz,
            },
            DrawPlugin,
        ))
        .run();
}
