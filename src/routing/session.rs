//! Path sessions: routes computed once, then revalidated every tick until they expire

use crate::game_logic::errors::{DischargeError, DischargeResult};
use crate::routing::RoutingParams;
use crate::routing::agents::AgentSnapshot;
use crate::routing::geometry::Barrier;
use crate::routing::obstacles::has_line_of_sight;
use crate::routing::solver::find_path_to_target;
use bevy::prelude::*;
use derive_more::{Display, From};
use std::collections::BTreeMap;
use std::time::Duration;

/// Identifier handed out by [`SessionManager`], increasing in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
pub struct SessionId(u64);

/// Observable lifecycle of a session.
///
/// Creation is synchronous, so a session is `Valid` from the moment its id is
/// returned. `Invalid` is terminal until expiry; an invalid session is never
/// repaired or re-routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Valid,
    Invalid,
    Expired,
}

/// One routed path from an origin agent to a target point
#[derive(Debug, Clone, PartialEq)]
pub struct PathSession {
    origin: Entity,
    waypoints: Vec<Entity>,
    target: IVec2,
    valid: bool,
    created_at: Duration,
}

impl PathSession {
    pub fn new(origin: Entity, waypoints: Vec<Entity>, target: IVec2, created_at: Duration) -> Self {
        Self {
            origin,
            waypoints,
            target,
            valid: true,
            created_at,
        }
    }

    pub fn origin(&self) -> Entity {
        self.origin
    }

    pub fn waypoints(&self) -> &[Entity] {
        &self.waypoints
    }

    pub fn target(&self) -> IVec2 {
        self.target
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn created_at(&self) -> Duration {
        self.created_at
    }

    pub fn state(&self) -> SessionState {
        if self.valid {
            SessionState::Valid
        } else {
            SessionState::Invalid
        }
    }

    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Live position of the origin agent
    pub fn anchor(&self, agents: &AgentSnapshot) -> Option<IVec2> {
        agents.position(self.origin)
    }

    /// Live waypoint positions, in path order
    pub fn waypoint_positions(&self, agents: &AgentSnapshot) -> Option<Vec<IVec2>> {
        self.waypoints
            .iter()
            .map(|&id| agents.position(id))
            .collect()
    }

    /// Anchor, waypoints and target as one polyline for drawing
    pub fn polyline(&self, agents: &AgentSnapshot) -> Option<Vec<IVec2>> {
        let mut points = Vec::with_capacity(self.waypoints.len() + 2);
        points.push(self.anchor(agents)?);
        points.extend(self.waypoint_positions(agents)?);
        points.push(self.target);
        Some(points)
    }

    fn resolve(&self, agents: &AgentSnapshot, id: Entity) -> DischargeResult<IVec2> {
        agents
            .position(id)
            .ok_or(DischargeError::UnknownAgent { agent: id })
    }

    /// Re-check every segment against current positions.
    ///
    /// Segments are origin to first waypoint, waypoint to waypoint, and last
    /// waypoint (or the origin when there are none) to the target. The first
    /// broken segment marks the session invalid; an invalid session stays
    /// invalid and its waypoints are never touched.
    pub fn revalidate(
        &mut self,
        agents: &AgentSnapshot,
        max_edge_length: f32,
        barriers: &[Barrier],
    ) -> DischargeResult<bool> {
        if !self.valid {
            return Ok(false);
        }

        let mut from = self.resolve(agents, self.origin)?;
        for &id in &self.waypoints {
            let to = self.resolve(agents, id)?;
            if !has_line_of_sight(from, to, max_edge_length, barriers) {
                trace!("Segment {from} -> {to} broke, invalidating session");
                self.valid = false;
                return Ok(false);
            }
            from = to;
        }

        if !has_line_of_sight(from, self.target, max_edge_length, barriers) {
            trace!("Final hop {from} -> {} broke, invalidating session", self.target);
            self.valid = false;
        }
        Ok(self.valid)
    }
}

/// What a single tick changed
#[derive(Debug, Default)]
pub struct TickReport {
    /// Sessions that went from valid to invalid during this tick
    pub invalidated: Vec<SessionId>,
    /// Sessions retired by the expiry sweep, handed back to the caller
    pub expired: Vec<(SessionId, PathSession)>,
    /// Sessions referencing agents missing from the snapshot; they are
    /// marked invalid and left for the expiry sweep
    pub violations: Vec<(SessionId, DischargeError)>,
}

/// Owns every live session and drives revalidation and expiry
#[derive(Resource, Debug, Default)]
pub struct SessionManager {
    params: RoutingParams,
    sessions: BTreeMap<SessionId, PathSession>,
    next_id: u64,
}

impl SessionManager {
    pub fn new(params: RoutingParams) -> Self {
        Self {
            params,
            sessions: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Route `origin` to every target independently.
    ///
    /// Returns one entry per target, in order: the id of the created session,
    /// or `None` when neither a routed nor a direct link exists.
    pub fn create_sessions(
        &mut self,
        origin: Entity,
        targets: &[IVec2],
        agents: &AgentSnapshot,
        barriers: &[Barrier],
        now: Duration,
    ) -> DischargeResult<Vec<Option<SessionId>>> {
        let max_edge_length = self.params.max_edge_length.get();
        let mut created = Vec::with_capacity(targets.len());

        for &target in targets {
            let waypoints = match find_path_to_target(origin, agents, target, &self.params, barriers)? {
                Some(path) => Some(path.waypoints),
                None => agents
                    .position(origin)
                    .filter(|&position| {
                        has_line_of_sight(position, target, max_edge_length, barriers)
                    })
                    .map(|_| Vec::new()),
            };

            created.push(waypoints.map(|waypoints| {
                self.insert(PathSession::new(origin, waypoints, target, now))
            }));
        }

        debug!(
            "Created {}/{} sessions from {origin}",
            created.iter().flatten().count(),
            targets.len()
        );
        Ok(created)
    }

    fn insert(&mut self, session: PathSession) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions.insert(id, session);
        id
    }

    /// Revalidate every live session, then retire the ones past their lifetime.
    ///
    /// A session created at `t0` survives every tick with `now <= t0 + lifetime`
    /// and is removed on the first tick after that, valid or not.
    pub fn tick(&mut self, now: Duration, agents: &AgentSnapshot, barriers: &[Barrier]) -> TickReport {
        let mut report = TickReport::default();
        let max_edge_length = self.params.max_edge_length.get();

        for (&id, session) in self.sessions.iter_mut() {
            let was_valid = session.is_valid();
            match session.revalidate(agents, max_edge_length, barriers) {
                Ok(true) => {}
                Ok(false) => {
                    if was_valid {
                        report.invalidated.push(id);
                    }
                }
                Err(err) => {
                    session.invalidate();
                    if was_valid {
                        report.invalidated.push(id);
                    }
                    report.violations.push((id, err));
                }
            }
        }

        let lifetime = self.params.session_lifetime.as_duration();
        let expired_ids: Vec<SessionId> = self
            .sessions
            .iter()
            .filter(|(_, session)| now.saturating_sub(session.created_at()) > lifetime)
            .map(|(&id, _)| id)
            .collect();
        for id in expired_ids {
            if let Some(session) = self.sessions.remove(&id) {
                report.expired.push((id, session));
            }
        }

        if !report.invalidated.is_empty() || !report.expired.is_empty() {
            debug!(
                "Tick: {} invalidated, {} expired, {} live",
                report.invalidated.len(),
                report.expired.len(),
                self.sessions.len()
            );
        }
        report
    }

    pub fn get(&self, id: SessionId) -> Option<&PathSession> {
        self.sessions.get(&id)
    }

    /// Lifecycle state of any id this manager has issued
    pub fn state(&self, id: SessionId) -> Option<SessionState> {
        match self.sessions.get(&id) {
            Some(session) => Some(session.state()),
            None if id.0 < self.next_id => Some(SessionState::Expired),
            None => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SessionId, &PathSession)> {
        self.sessions.iter().map(|(&id, session)| (id, session))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every live session; their ids report as expired afterwards
    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}
