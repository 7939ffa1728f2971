use engine::Vec2;

use super::actor::Actor;
use super::entity::Entity;
use super::geometry::{GridCell, OFF_SCREEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum CollectibleKind {
    RebelSymbol,
    JediOrder,
    Phoenix,
}

impl CollectibleKind {
    pub(crate) const ALL: [CollectibleKind; 3] =
        [Self::RebelSymbol, Self::JediOrder, Self::Phoenix];

    /// Sound cue played on pickup.
    pub(crate) fn cue_id(self) -> &'static str {
        match self {
            Self::RebelSymbol => "token",
            Self::JediOrder => "jediOrder",
            Self::Phoenix => "phoenix",
        }
    }

    pub(crate) fn sprite(self) -> &'static str {
        match self {
            Self::RebelSymbol => "rebelSymbol",
            Self::JediOrder => "jediOrder-color",
            Self::Phoenix => "phoenix-color",
        }
    }

    pub(crate) fn points(self) -> u32 {
        match self {
            Self::RebelSymbol => 1000,
            Self::JediOrder => 1500,
            Self::Phoenix => 2000,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::RebelSymbol => "rebelSymbol",
            Self::JediOrder => "jediOrder",
            Self::Phoenix => "phoenix",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Collected {
    pub(crate) kind: CollectibleKind,
    pub(crate) points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Collectible {
    kind: CollectibleKind,
    /// `None` once collected; the pickup is then off the board for good.
    cell: Option<GridCell>,
}

impl Collectible {
    pub(crate) fn new(kind: CollectibleKind, cell: GridCell) -> Self {
        Self {
            kind,
            cell: Some(cell),
        }
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> CollectibleKind {
        self.kind
    }

    #[cfg(test)]
    pub(crate) fn cell(&self) -> Option<GridCell> {
        self.cell
    }

    pub(crate) fn is_collected(&self) -> bool {
        self.cell.is_none()
    }

    /// Awards the actor when it stands on this cell. Fires at most once.
    pub(crate) fn update(&mut self, actor: &mut Actor) -> Option<Collected> {
        let cell = self.cell?;
        if actor.cell() != Some(cell) {
            return None;
        }
        self.cell = None;
        let points = self.kind.points();
        actor.award(points);
        Some(Collected {
            kind: self.kind,
            points,
        })
    }
}

impl Entity for Collectible {
    fn position(&self) -> Vec2 {
        self.cell.map_or(OFF_SCREEN, GridCell::position)
    }

    fn sprite(&self) -> &'static str {
        self.kind.sprite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gameplay::actor::{ActorKind, ActorSpot};

    #[test]
    fn presets_carry_points_and_cues() {
        assert_eq!(CollectibleKind::RebelSymbol.points(), 1000);
        assert_eq!(CollectibleKind::JediOrder.points(), 1500);
        assert_eq!(CollectibleKind::Phoenix.points(), 2000);
        assert_eq!(CollectibleKind::RebelSymbol.cue_id(), "token");
    }

    #[test]
    fn collection_is_exactly_once() {
        let cell = GridCell::new(2, 4).expect("cell");
        let mut collectible = Collectible::new(CollectibleKind::Phoenix, cell);
        let mut actor = Actor::new(ActorKind::Bb8);
        actor.place(ActorSpot::Lane(cell));

        let first = collectible.update(&mut actor);
        for _ in 0..30 {
            assert_eq!(collectible.update(&mut actor), None);
        }

        assert_eq!(
            first,
            Some(Collected {
                kind: CollectibleKind::Phoenix,
                points: 2000
            })
        );
        assert_eq!(actor.score(), 2000);
        assert!(collectible.is_collected());
        assert_eq!(collectible.position(), OFF_SCREEN);
    }

    #[test]
    fn other_cells_do_not_collect() {
        let mut collectible =
            Collectible::new(CollectibleKind::RebelSymbol, GridCell::new(0, 0).expect("cell"));
        let mut actor = Actor::new(ActorKind::Bb8);
        actor.place(ActorSpot::Lane(GridCell::new(1, 0).expect("cell")));

        assert_eq!(collectible.update(&mut actor), None);
        actor.reset_position();
        assert_eq!(collectible.update(&mut actor), None);
        assert_eq!(actor.score(), 0);
    }
}
