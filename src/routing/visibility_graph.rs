//! Undirected visibility graph over a single agent snapshot

use crate::routing::agents::AgentSnapshot;
use crate::routing::geometry::{Barrier, distance};
use crate::routing::obstacles::is_blocked;
use bevy::prelude::*;
use std::collections::HashMap;

/// A weighted link to a neighbouring agent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: Entity,
    pub weight: f32,
}

/// Adjacency lists keyed by agent identity.
///
/// Built from one snapshot and never updated afterwards; positions change
/// every tick, so callers rebuild it for each path request.
#[derive(Debug, Clone, Default)]
pub struct VisibilityGraph {
    adjacency: HashMap<Entity, Vec<Edge>>,
}

impl VisibilityGraph {
    pub fn neighbors(&self, id: Entity) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_weight(&self, from: Entity, to: Entity) -> Option<f32> {
        self.neighbors(from)
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    pub fn contains(&self, id: Entity) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

/// Build the visibility graph for a snapshot.
///
/// Every unordered pair of agents is linked in both directions when the
/// pair is within `max_edge_length` and no barrier crosses the segment.
/// Cost is O(n^2) pair checks, each O(m) in the barrier count.
pub fn build_graph(
    agents: &AgentSnapshot,
    max_edge_length: f32,
    barriers: &[Barrier],
) -> VisibilityGraph {
    let all = agents.agents();
    let mut adjacency: HashMap<Entity, Vec<Edge>> =
        all.iter().map(|agent| (agent.id, Vec::new())).collect();

    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            let weight = distance(a.position, b.position);
            if weight > max_edge_length || is_blocked(a.position, b.position, barriers) {
                continue;
            }
            if let Some(edges) = adjacency.get_mut(&a.id) {
                edges.push(Edge { to: b.id, weight });
            }
            if let Some(edges) = adjacency.get_mut(&b.id) {
                edges.push(Edge { to: a.id, weight });
            }
        }
    }

    let graph = VisibilityGraph { adjacency };
    trace!(
        "Visibility graph: {} nodes, {} edges, {} barriers",
        graph.node_count(),
        graph.edge_count(),
        barriers.len()
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::agents::Agent;

    fn snapshot(points: &[(i32, i32)]) -> (AgentSnapshot, Vec<Entity>) {
        let ids: Vec<Entity> = (0..points.len() as u32).map(Entity::from_raw).collect();
        let snapshot = ids
            .iter()
            .zip(points)
            .map(|(&id, &(x, y))| Agent::new(id, IVec2::new(x, y)))
            .collect();
        (snapshot, ids)
    }

    #[test]
    fn test_empty_snapshot_builds_empty_graph() {
        let graph = build_graph(&AgentSnapshot::default(), 170.0, &[]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_edge_within_range() {
        let (agents, ids) = snapshot(&[(0, 0), (100, 0)]);
        let graph = build_graph(&agents, 170.0, &[]);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(ids[0], ids[1]), Some(100.0));
        assert_eq!(graph.edge_weight(ids[1], ids[0]), Some(100.0));
    }

    #[test]
    fn test_out_of_range_agents_stay_isolated() {
        let (agents, ids) = snapshot(&[(0, 0), (500, 0)]);
        let graph = build_graph(&agents, 170.0, &[]);

        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains(ids[1]));
        assert!(graph.neighbors(ids[0]).is_empty());
        assert!(graph.neighbors(ids[1]).is_empty());
    }

    #[test]
    fn test_barrier_removes_edge() {
        let (agents, ids) = snapshot(&[(0, 0), (100, 0)]);
        let graph = build_graph(&agents, 170.0, &[Barrier::new(90, -50, 20, 100)]);

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edge_weight(ids[0], ids[1]), None);
    }

    #[test]
    fn test_graph_symmetry() {
        let (agents, ids) = snapshot(&[
            (0, 0),
            (120, 10),
            (60, 90),
            (200, 150),
            (-80, 40),
            (30, -100),
            (150, -60),
        ]);
        let barriers = [Barrier::new(40, 20, 10, 60), Barrier::new(100, -90, 30, 20)];
        let graph = build_graph(&agents, 170.0, &barriers);

        assert!(graph.edge_count() > 0);
        for &a in &ids {
            for &b in &ids {
                assert_eq!(
                    graph.edge_weight(a, b),
                    graph.edge_weight(b, a),
                    "edge {a} <-> {b} is not symmetric"
                );
            }
            assert_eq!(graph.edge_weight(a, a), None);
        }
    }

    #[test]
    fn test_coincident_agents_are_linked() {
        let (agents, ids) = snapshot(&[(10, 10), (10, 10)]);
        let graph = build_graph(&agents, 170.0, &[]);
        assert_eq!(graph.edge_weight(ids[0], ids[1]), Some(0.0));
    }
}
