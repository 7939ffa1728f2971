//! Board layout in canvas pixels.
//!
//! The playfield is a 4-column by 6-row grid of lanes. Below the lanes is the
//! home row where the actor starts each level; above the top lane is the goal.

use engine::Vec2;

pub(crate) const CANVAS_WIDTH: f32 = 505.0;
pub(crate) const CANVAS_HEIGHT: f32 = 750.0;

pub(crate) const GRID_COLUMNS: [f32; 4] = [100.0, 200.0, 300.0, 400.0];
pub(crate) const LANE_ROWS: [f32; 6] = [154.0, 237.0, 320.0, 403.0, 486.0, 569.0];
pub(crate) const GRID_CELL_COUNT: usize = GRID_COLUMNS.len() * LANE_ROWS.len();

pub(crate) const HOME_ROW_Y: f32 = 652.0;
pub(crate) const START_COLUMN: usize = 1;
/// Where the actor is parked after crossing the top lane or losing the game.
pub(crate) const PARKED_Y: f32 = -100.0;
pub(crate) const OFF_SCREEN: Vec2 = Vec2::new(-200.0, -200.0);

pub(crate) const HAZARD_SPAWN_COLUMNS: [f32; 3] = [-100.0, -300.0, -500.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct GridCell {
    column: usize,
    row: usize,
}

impl GridCell {
    pub(crate) fn new(column: usize, row: usize) -> Option<Self> {
        (column < GRID_COLUMNS.len() && row < LANE_ROWS.len()).then_some(Self { column, row })
    }

    pub(crate) fn column(self) -> usize {
        self.column
    }

    pub(crate) fn row(self) -> usize {
        self.row
    }

    pub(crate) fn position(self) -> Vec2 {
        Vec2::new(GRID_COLUMNS[self.column], LANE_ROWS[self.row])
    }

    /// Every cell, row-major from the top lane.
    pub(crate) fn all() -> impl Iterator<Item = GridCell> {
        (0..LANE_ROWS.len()).flat_map(|row| {
            (0..GRID_COLUMNS.len()).map(move |column| GridCell { column, row })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Direction {
    Left,
    Right,
    Up,
    Down,
}
