use std::mem;

use rand::rngs::StdRng;
use tracing::{debug, info};

use super::actor::{Actor, ActorEvent, ActorKind};
use super::catalog::LevelCatalog;
use super::collectible::{Collectible, Collected};
use super::error::ConfigError;
use super::events::SessionEvent;
use super::geometry::Direction;
use super::hazard::Hazard;
use super::level_builder::build_level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    SelectingPlayer,
    Playing,
    LevelCleared,
    GameWon,
    GameLost,
}

/// Borrowed view of everything the simulation mutates during one tick.
pub(crate) struct LiveEntities<'a> {
    pub(crate) hazards: &'a mut Vec<Hazard>,
    pub(crate) collectibles: &'a mut Vec<Collectible>,
    pub(crate) actor: Option<&'a mut Actor>,
    pub(crate) rng: &'a mut StdRng,
}

/// Owns one game from player selection to win or loss.
///
/// Commands that do not apply to the current state are ignored. Every
/// transition is recorded as a [`SessionEvent`] for the presentation and
/// audio layers to pick up through [`Session::drain_events`].
#[derive(Debug)]
pub(crate) struct Session {
    catalog: LevelCatalog,
    state: SessionState,
    level: usize,
    highlighted: ActorKind,
    actor: Option<Actor>,
    best_score: u32,
    max_score: u32,
    hazards: Vec<Hazard>,
    collectibles: Vec<Collectible>,
    rng: StdRng,
    events: Vec<SessionEvent>,
}

impl Session {
    pub(crate) fn new(catalog: LevelCatalog, rng: StdRng) -> Result<Self, ConfigError> {
        catalog.validate()?;
        info!(levels = catalog.total_levels(), "session_created");
        Ok(Self {
            catalog,
            state: SessionState::SelectingPlayer,
            level: 1,
            highlighted: ActorKind::ALL[0],
            actor: None,
            best_score: 0,
            max_score: 0,
            hazards: Vec::new(),
            collectibles: Vec::new(),
            rng,
            events: vec![SessionEvent::NewGame],
        })
    }

    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    pub(crate) fn level(&self) -> usize {
        self.level
    }

    pub(crate) fn total_levels(&self) -> usize {
        self.catalog.total_levels()
    }

    pub(crate) fn highlighted(&self) -> ActorKind {
        self.highlighted
    }

    pub(crate) fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn actor_mut(&mut self) -> Option<&mut Actor> {
        self.actor.as_mut()
    }

    pub(crate) fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Points available across every level built since the last new game.
    pub(crate) fn max_score(&self) -> u32 {
        self.max_score
    }

    pub(crate) fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    pub(crate) fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    pub(crate) fn entity_count(&self) -> usize {
        self.hazards.len() + self.collectibles.len() + usize::from(self.actor.is_some())
    }

    pub(crate) fn live_entities_mut(&mut self) -> LiveEntities<'_> {
        LiveEntities {
            hazards: &mut self.hazards,
            collectibles: &mut self.collectibles,
            actor: self.actor.as_mut(),
            rng: &mut self.rng,
        }
    }

    pub(crate) fn drain_events(&mut self) -> Vec<SessionEvent> {
        mem::take(&mut self.events)
    }

    /// Moves the selection cursor while choosing a player, or the actor while playing.
    pub(crate) fn handle_direction(&mut self, direction: Direction) {
        match self.state {
            SessionState::SelectingPlayer => self.move_highlight(direction),
            SessionState::Playing => {
                let Some(actor) = self.actor.as_mut() else {
                    return;
                };
                if let Some(event) = actor.handle_input(direction) {
                    self.apply_actor_event(event);
                }
            }
            state => debug!(?state, ?direction, "direction_ignored"),
        }
    }

    pub(crate) fn select(&mut self, kind: ActorKind) {
        if self.state != SessionState::SelectingPlayer {
            debug!(state = ?self.state, ?kind, "select_ignored");
            return;
        }
        self.highlighted = kind;
        self.events.push(SessionEvent::PlayerHighlighted { kind });
    }

    /// Confirm key: start or continue from a prompt, or begin a new game after the end.
    pub(crate) fn confirm(&mut self) -> Result<(), ConfigError> {
        match self.state {
            SessionState::SelectingPlayer | SessionState::LevelCleared => self.start(),
            SessionState::GameWon | SessionState::GameLost => {
                self.new_game();
                Ok(())
            }
            SessionState::Playing => {
                debug!("confirm_ignored_while_playing");
                Ok(())
            }
        }
    }

    pub(crate) fn start(&mut self) -> Result<(), ConfigError> {
        let first_level = match self.state {
            SessionState::SelectingPlayer => true,
            SessionState::LevelCleared => false,
            state => {
                debug!(?state, "start_ignored");
                return Ok(());
            }
        };
        let level = if first_level { 1 } else { self.level };
        let spec = self
            .catalog
            .level(level)
            .ok_or(ConfigError::MissingLevel { level })?;
        let built = build_level(level, spec, &mut self.rng)?;

        if first_level {
            match self.actor.as_mut() {
                Some(actor) if actor.kind() == self.highlighted => actor.reset_all(),
                _ => self.actor = Some(Actor::new(self.highlighted)),
            }
            self.max_score = 0;
        } else if let Some(actor) = self.actor.as_mut() {
            actor.reset_position();
        }
        self.level = level;
        self.hazards = built.hazards;
        self.collectibles = built.collectibles;
        self.max_score = self.max_score.saturating_add(built.max_score);
        self.state = SessionState::Playing;
        self.events.push(SessionEvent::LevelStarted { level });
        info!(
            level,
            player = ?self.highlighted,
            max_score = self.max_score,
            "level_started"
        );
        Ok(())
    }

    pub(crate) fn new_game(&mut self) {
        if !matches!(self.state, SessionState::GameWon | SessionState::GameLost) {
            debug!(state = ?self.state, "new_game_ignored");
            return;
        }
        if let Some(actor) = self.actor.as_mut() {
            actor.reset_all();
        }
        self.hazards.clear();
        self.collectibles.clear();
        self.level = 1;
        self.max_score = 0;
        self.state = SessionState::SelectingPlayer;
        self.events.push(SessionEvent::NewGame);
        info!(best_score = self.best_score, "new_game");
    }

    pub(crate) fn record_collected(&mut self, collected: Collected) {
        self.events.push(SessionEvent::Collected {
            kind: collected.kind,
            points: collected.points,
        });
    }

    pub(crate) fn apply_actor_event(&mut self, event: ActorEvent) {
        if self.state != SessionState::Playing {
            debug!(state = ?self.state, ?event, "actor_event_ignored");
            return;
        }
        match event {
            ActorEvent::LevelWon => self.level_won(),
            ActorEvent::LowLife => {
                let lives = self.actor.as_ref().map_or(0, Actor::lives);
                self.events.push(SessionEvent::LowLife { lives });
                info!(lives, "life_lost");
            }
            ActorEvent::GameLost => {
                self.hazards.clear();
                self.level = 1;
                if let Some(actor) = self.actor.as_mut() {
                    actor.move_off_screen();
                }
                self.state = SessionState::GameLost;
                self.events.push(SessionEvent::GameLost);
                info!(best_score = self.best_score, "game_lost");
            }
        }
    }

    fn level_won(&mut self) {
        if self.level < self.catalog.total_levels() {
            self.level += 1;
            self.state = SessionState::LevelCleared;
            self.events.push(SessionEvent::LevelCleared {
                next_level: self.level,
            });
            info!(next_level = self.level, "level_cleared");
            return;
        }

        let score = self.actor.as_ref().map_or(0, Actor::score);
        self.best_score = self.best_score.max(score);
        let perfect = score == self.max_score;
        self.level = 1;
        self.state = SessionState::GameWon;
        self.events.push(SessionEvent::GameWon { perfect });
        info!(
            score,
            max_score = self.max_score,
            best_score = self.best_score,
            perfect,
            "game_won"
        );
    }

    fn move_highlight(&mut self, direction: Direction) {
        let current = self.highlighted.index();
        let next = match direction {
            Direction::Left | Direction::Up => current.checked_sub(1),
            Direction::Right | Direction::Down => {
                Some(current + 1).filter(|index| *index < ActorKind::ALL.len())
            }
        };
        if let Some(kind) = next.map(|index| ActorKind::ALL[index]) {
            self.select(kind);
        }
    }
}
