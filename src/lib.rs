pub mod components;
pub mod config;
pub mod game_logic;
pub mod plugins;
pub mod resources;
pub mod routing;

// Selective re-exports for external consumers

// Plugins - main.rs needs all plugins
pub use plugins::{ControlsPlugin, DrawPlugin, RoutingPlugin, ScenePlugin};

// Game logic - callers need errors
pub use game_logic::errors::{DischargeError, DischargeResult};

// Routing core - pure queries and the session manager
pub use routing::{
    Agent, AgentSnapshot, Barrier, PathSession, RoutedPath, RoutingParams, SearchMode,
    SessionId, SessionManager, SessionState, TickReport, VisibilityGraph, build_graph,
    find_path_to_target, has_line_of_sight, is_blocked, segment_intersects_rectangle,
    segments_intersect,
};
