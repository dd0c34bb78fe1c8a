use crate::config::range_types::{MaxEdgeLength, SessionLifetime};
use serde::{Deserialize, Serialize};

pub mod agents;
pub mod geometry;
pub mod obstacles;
pub mod session;
pub mod solver;
pub mod visibility_graph;

pub use agents::*;
pub use geometry::*;
pub use obstacles::*;
pub use session::*;
pub use solver::*;
pub use visibility_graph::*;

/// Parameters shared by every routing query
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoutingParams {
    /// Longest link allowed between two points, inclusive
    pub max_edge_length: MaxEdgeLength,
    /// How long a session lives after creation
    pub session_lifetime: SessionLifetime,
    /// Termination rule for the path search
    pub search: SearchMode,
}
