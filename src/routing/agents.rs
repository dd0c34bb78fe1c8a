//! Per-tick read-only view of agent identities and positions

use bevy::prelude::*;
use std::collections::HashMap;

/// A moving point eligible to be a path waypoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Agent {
    pub id: Entity,
    pub position: IVec2,
}

impl Agent {
    pub fn new(id: Entity, position: IVec2) -> Self {
        Self { id, position }
    }
}

/// Snapshot of every agent position for a single tick.
///
/// Iteration order is the insertion order, which keeps graph construction
/// deterministic for a given input.
#[derive(Debug, Clone, Default)]
pub struct AgentSnapshot {
    agents: Vec<Agent>,
    index: HashMap<Entity, usize>,
}

impl AgentSnapshot {
    pub fn new(agents: impl IntoIterator<Item = Agent>) -> Self {
        let mut snapshot = Self::default();
        for agent in agents {
            snapshot.insert(agent);
        }
        snapshot
    }

    /// Add an agent; a repeated id keeps the first position seen
    fn insert(&mut self, agent: Agent) {
        if self.index.contains_key(&agent.id) {
            warn!(
                "Duplicate agent {} in snapshot, keeping first position",
                agent.id
            );
            return;
        }
        self.index.insert(agent.id, self.agents.len());
        self.agents.push(agent);
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn position(&self, id: Entity) -> Option<IVec2> {
        self.index.get(&id).map(|&i| self.agents[i].position)
    }

    pub fn contains(&self, id: Entity) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agent closest to a point, first inserted wins on ties
    pub fn nearest(&self, point: IVec2) -> Option<Agent> {
        self.agents
            .iter()
            .map(|agent| {
                let offset = agent.position.as_i64vec2() - point.as_i64vec2();
                (agent, offset.length_squared())
            })
            .fold(None, |best: Option<(&Agent, i64)>, (agent, d2)| match best {
                Some((_, best_d2)) if best_d2 <= d2 => best,
                _ => Some((agent, d2)),
            })
            .map(|(agent, _)| *agent)
    }
}

impl FromIterator<Agent> for AgentSnapshot {
    fn from_iter<T: IntoIterator<Item = Agent>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_lookup() {
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        let snapshot = AgentSnapshot::new([
            Agent::new(a, IVec2::new(0, 0)),
            Agent::new(b, IVec2::new(100, 0)),
        ]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.position(b), Some(IVec2::new(100, 0)));
        assert!(snapshot.contains(a));
        assert!(!snapshot.contains(Entity::from_raw(3)));
        assert_eq!(snapshot.position(Entity::from_raw(3)), None);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let a = Entity::from_raw(1);
        let snapshot: AgentSnapshot = [
            Agent::new(a, IVec2::new(5, 5)),
            Agent::new(a, IVec2::new(50, 50)),
        ]
        .into_iter()
        .collect();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.position(a), Some(IVec2::new(5, 5)));
    }

    #[test]
    fn test_nearest_agent() {
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        let snapshot = AgentSnapshot::new([
            Agent::new(a, IVec2::new(0, 0)),
            Agent::new(b, IVec2::new(100, 0)),
        ]);

        assert_eq!(snapshot.nearest(IVec2::new(70, 10)).map(|ag| ag.id), Some(b));
        assert_eq!(snapshot.nearest(IVec2::new(50, 0)).map(|ag| ag.id), Some(a));
        assert!(AgentSnapshot::default().nearest(IVec2::ZERO).is_none());
    }
}
