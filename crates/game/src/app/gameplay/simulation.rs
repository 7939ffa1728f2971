use engine::DrawTarget;
use tracing::trace;

use super::entity::Entity;
use super::session::{Session, SessionState};

pub(crate) const DEFAULT_COLLISION_REACH_PX: f32 = 75.0;

/// Drives one tick of the board: movement, pickups, collisions, then drawing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SimulationLoop {
    collision_reach_px: f32,
}

impl Default for SimulationLoop {
    fn default() -> Self {
        Self::new(DEFAULT_COLLISION_REACH_PX)
    }
}

impl SimulationLoop {
    pub(crate) fn new(collision_reach_px: f32) -> Self {
        Self { collision_reach_px }
    }

    /// Hazards move by `dt`, collectibles compare against the actor, and a
    /// hazard touching the actor during play sends it back to the start.
    pub(crate) fn update(&self, session: &mut Session, dt_seconds: f32) {
        let playing = session.state() == SessionState::Playing;
        let mut collected = Vec::new();
        let mut actor_event = None;
        {
            let mut live = session.live_entities_mut();
            for hazard in live.hazards.iter_mut() {
                if hazard.update(dt_seconds, &mut *live.rng) {
                    trace!(kind = ?hazard.kind(), "hazard_respawned");
                }
            }

            if let Some(actor) = live.actor {
                for collectible in live.collectibles.iter_mut() {
                    if let Some(pickup) = collectible.update(actor) {
                        collected.push(pickup);
                    }
                }
                live.collectibles.retain(|collectible| !collectible.is_collected());

                let reach = self.collision_reach_px;
                if playing
                    && live
                        .hazards
                        .iter()
                        .any(|hazard| hazard.overlaps(actor.position(), reach))
                {
                    actor_event = actor.setback();
                }
            }
        }

        for pickup in collected {
            trace!(kind = ?pickup.kind, points = pickup.points, "collected");
            session.record_collected(pickup);
        }
        if let Some(event) = actor_event {
            session.apply_actor_event(event);
        }
    }

    /// Draws back to front: hazards, then collectibles, then the actor.
    pub(crate) fn render(&self, session: &Session, target: &mut dyn DrawTarget) {
        for hazard in session.hazards() {
            hazard.render(target);
        }
        for collectible in session.collectibles() {
            collectible.render(target);
        }
        if session.state() == SessionState::SelectingPlayer {
            return;
        }
        if let Some(actor) = session.actor() {
            actor.render(target);
        }
    }
}
