//! Dijkstra search from an origin agent towards a fixed target point

use crate::game_logic::errors::{DischargeError, DischargeResult};
use crate::routing::RoutingParams;
use crate::routing::agents::AgentSnapshot;
use crate::routing::geometry::{Barrier, distance};
use crate::routing::obstacles::has_line_of_sight;
use crate::routing::visibility_graph::{VisibilityGraph, build_graph};
use bevy::prelude::*;
use ordered_float::OrderedFloat;
use pathfinding::prelude::dijkstra;
use serde::{Deserialize, Serialize};

type Cost = OrderedFloat<f32>;

/// When the search is allowed to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchMode {
    /// Stop at the first popped agent that sees the target. The result has
    /// the cheapest origin-to-exit cost, but the final hop is not weighed.
    #[default]
    FirstVisible,
    /// Treat the target as a sink node so the final hop is part of the
    /// search; the result has the cheapest total cost.
    ShortestTotal,
}

/// Agents to route through and the full cost including the final hop
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedPath {
    /// Origin excluded, agent adjacent to the target included
    pub waypoints: Vec<Entity>,
    pub cost: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum RouteNode {
    Agent(Entity),
    Target,
}

/// Find a path of agents from `origin` to a point that sees `target`.
///
/// Returns `Ok(None)` when no agent reachable from the origin has an
/// in-range, unobstructed link to the target. An origin that is not part of
/// the snapshot is a caller bug and is reported as an error.
pub fn find_path_to_target(
    origin: Entity,
    agents: &AgentSnapshot,
    target: IVec2,
    params: &RoutingParams,
    barriers: &[Barrier],
) -> DischargeResult<Option<RoutedPath>> {
    if !agents.contains(origin) {
        return Err(DischargeError::UnknownAgent { agent: origin });
    }

    let max_edge_length = params.max_edge_length.get();
    let graph = build_graph(agents, max_edge_length, barriers);
    let sees_target = |id: Entity| {
        agents
            .position(id)
            .is_some_and(|position| has_line_of_sight(position, target, max_edge_length, barriers))
    };

    let route = match params.search {
        SearchMode::FirstVisible => first_visible(origin, &graph, sees_target),
        SearchMode::ShortestTotal => shortest_total(origin, &graph, agents, target, sees_target),
    };

    let Some((path, cost_to_exit)) = route else {
        debug!("No route from {origin} to target {target}");
        return Ok(None);
    };

    let hop = path
        .last()
        .and_then(|&exit| agents.position(exit))
        .map(|exit| distance(exit, target))
        .unwrap_or_default();
    let waypoints: Vec<Entity> = path.into_iter().skip(1).collect();

    debug!(
        "Routed {origin} to {target} through {} waypoints, cost {:.1}",
        waypoints.len(),
        cost_to_exit + hop
    );

    Ok(Some(RoutedPath {
        waypoints,
        cost: cost_to_exit + hop,
    }))
}

/// Agent path including the origin, with the cost up to the exit agent
fn first_visible(
    origin: Entity,
    graph: &VisibilityGraph,
    sees_target: impl Fn(Entity) -> bool,
) -> Option<(Vec<Entity>, f32)> {
    dijkstra(
        &origin,
        |&id| {
            graph
                .neighbors(id)
                .iter()
                .map(|edge| (edge.to, OrderedFloat(edge.weight)))
                .collect::<Vec<(Entity, Cost)>>()
        },
        |&id| sees_target(id),
    )
    .map(|(path, cost)| (path, cost.0))
}

fn shortest_total(
    origin: Entity,
    graph: &VisibilityGraph,
    agents: &AgentSnapshot,
    target: IVec2,
    sees_target: impl Fn(Entity) -> bool,
) -> Option<(Vec<Entity>, f32)> {
    let (path, _) = dijkstra(
        &RouteNode::Agent(origin),
        |node| {
            let RouteNode::Agent(id) = *node else {
                return Vec::new();
            };
            let mut successors: Vec<(RouteNode, Cost)> = graph
                .neighbors(id)
                .iter()
                .map(|edge| (RouteNode::Agent(edge.to), OrderedFloat(edge.weight)))
                .collect();
            if sees_target(id) {
                if let Some(position) = agents.position(id) {
                    successors.push((RouteNode::Target, OrderedFloat(distance(position, target))));
                }
            }
            successors
        },
        |node| *node == RouteNode::Target,
    )?;

    let agents_on_path: Vec<Entity> = path
        .into_iter()
        .filter_map(|node| match node {
            RouteNode::Agent(id) => Some(id),
            RouteNode::Target => None,
        })
        .collect();
    let cost_to_exit: f32 = agents_on_path
        .windows(2)
        .filter_map(|pair| graph.edge_weight(pair[0], pair[1]))
        .sum();
    Some((agents_on_path, cost_to_exit))
}
