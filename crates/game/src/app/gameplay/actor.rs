use engine::Vec2;

use super::entity::Entity;
use super::geometry::{
    Direction, GridCell, GRID_COLUMNS, HOME_ROW_Y, LANE_ROWS, PARKED_Y, START_COLUMN,
};

pub(crate) const STARTING_LIVES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ActorKind {
    Bb8,
    R2d2,
    Chewie,
}

impl ActorKind {
    pub(crate) const ALL: [ActorKind; 3] = [Self::Bb8, Self::R2d2, Self::Chewie];

    pub(crate) fn sprite(self) -> &'static str {
        match self {
            Self::Bb8 => "bb8-color",
            Self::R2d2 => "r2d2-color",
            Self::Chewie => "chewie-color",
        }
    }

    pub(crate) fn sound_id(self) -> &'static str {
        match self {
            Self::Bb8 => "bb8",
            Self::R2d2 => "r2d2",
            Self::Chewie => "chewie",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Bb8 => "BB-8",
            Self::R2d2 => "R2-D2",
            Self::Chewie => "Chewie",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Bb8 => 0,
            Self::R2d2 => 1,
            Self::Chewie => 2,
        }
    }
}

/// Where the actor stands. Lateral moves are allowed on the home row too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActorSpot {
    Home { column: usize },
    Lane(GridCell),
    /// Crossed the top lane; waits here until the next level starts.
    Won { column: usize },
    /// Parked after the game was lost.
    OffScreen { column: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActorEvent {
    LevelWon,
    LowLife,
    GameLost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Actor {
    kind: ActorKind,
    spot: ActorSpot,
    lives: u32,
    score: u32,
}

impl Actor {
    pub(crate) fn new(kind: ActorKind) -> Self {
        Self {
            kind,
            spot: ActorSpot::Home {
                column: START_COLUMN,
            },
            lives: STARTING_LIVES,
            score: 0,
        }
    }

    pub(crate) fn kind(&self) -> ActorKind {
        self.kind
    }

    #[cfg(test)]
    pub(crate) fn spot(&self) -> ActorSpot {
        self.spot
    }

    pub(crate) fn lives(&self) -> u32 {
        self.lives
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    /// The lane cell the actor occupies, if it is on the lane grid.
    pub(crate) fn cell(&self) -> Option<GridCell> {
        match self.spot {
            ActorSpot::Lane(cell) => Some(cell),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, spot: ActorSpot) {
        self.spot = spot;
    }

    /// Moves one grid step. Crossing above the top lane wins the level and
    /// parks the actor, so repeated input cannot raise a second win.
    pub(crate) fn handle_input(&mut self, direction: Direction) -> Option<ActorEvent> {
        let last_column = GRID_COLUMNS.len() - 1;
        let bottom_lane = LANE_ROWS.len() - 1;
        let (next, event) = match (self.spot, direction) {
            (ActorSpot::Won { .. } | ActorSpot::OffScreen { .. }, _) => return None,

            (ActorSpot::Home { column }, Direction::Left) if column > 0 => (
                ActorSpot::Home {
                    column: column - 1,
                },
                None,
            ),
            (ActorSpot::Home { column }, Direction::Right) if column < last_column => (
                ActorSpot::Home {
                    column: column + 1,
                },
                None,
            ),
            (ActorSpot::Home { column }, Direction::Up) => {
                (ActorSpot::Lane(GridCell::new(column, bottom_lane)?), None)
            }
            (ActorSpot::Home { .. }, _) => return None,

            (ActorSpot::Lane(cell), Direction::Left) => {
                let column = cell.column().checked_sub(1)?;
                (ActorSpot::Lane(GridCell::new(column, cell.row())?), None)
            }
            (ActorSpot::Lane(cell), Direction::Right) => {
                (ActorSpot::Lane(GridCell::new(cell.column() + 1, cell.row())?), None)
            }
            (ActorSpot::Lane(cell), Direction::Up) => match cell.row().checked_sub(1) {
                Some(row) => (ActorSpot::Lane(GridCell::new(cell.column(), row)?), None),
                None => (
                    ActorSpot::Won {
                        column: cell.column(),
                    },
                    Some(ActorEvent::LevelWon),
                ),
            },
            (ActorSpot::Lane(cell), Direction::Down) if cell.row() == bottom_lane => (
                ActorSpot::Home {
                    column: cell.column(),
                },
                None,
            ),
            (ActorSpot::Lane(cell), Direction::Down) => {
                (ActorSpot::Lane(GridCell::new(cell.column(), cell.row() + 1)?), None)
            }
        };
        self.spot = next;
        event
    }

    pub(crate) fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn lose_life(&mut self) -> Option<ActorEvent> {
        match self.lives {
            0 => None,
            1 => {
                self.lives = 0;
                Some(ActorEvent::GameLost)
            }
            _ => {
                self.lives -= 1;
                Some(ActorEvent::LowLife)
            }
        }
    }

    /// Hit by a hazard: back to the start and one life fewer.
    pub(crate) fn setback(&mut self) -> Option<ActorEvent> {
        self.reset_position();
        self.lose_life()
    }

    pub(crate) fn reset_position(&mut self) {
        self.spot = ActorSpot::Home {
            column: START_COLUMN,
        };
    }

    pub(crate) fn reset_lives(&mut self) {
        self.lives = STARTING_LIVES;
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Start of a new game: home, full lives, no score.
    pub(crate) fn reset_all(&mut self) {
        self.reset_position();
        self.reset_lives();
        self.reset_score();
    }

    pub(crate) fn move_off_screen(&mut self) {
        self.spot = ActorSpot::OffScreen {
            column: self.column(),
        };
    }

    fn column(&self) -> usize {
        match self.spot {
            ActorSpot::Home { column }
            | ActorSpot::Won { column }
            | ActorSpot::OffScreen { column } => column,
            ActorSpot::Lane(cell) => cell.column(),
        }
    }
}

impl Entity for Actor {
    fn position(&self) -> Vec2 {
        let x = GRID_COLUMNS[self.column()];
        match self.spot {
            ActorSpot::Home { .. } => Vec2::new(x, HOME_ROW_Y),
            ActorSpot::Lane(cell) => cell.position(),
            ActorSpot::Won { .. } | ActorSpot::OffScreen { .. } => Vec2::new(x, PARKED_Y),
        }
    }

    fn sprite(&self) -> &'static str {
        self.kind.sprite()
    }
}
