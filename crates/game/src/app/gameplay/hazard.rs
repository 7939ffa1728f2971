use engine::Vec2;
use rand::Rng;

use super::entity::Entity;
use super::geometry::{CANVAS_WIDTH, HAZARD_SPAWN_COLUMNS, LANE_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum HazardKind {
    Stormtrooper,
    Vader,
    KyloRen,
}

impl HazardKind {
    pub(crate) const ALL: [HazardKind; 3] = [Self::Stormtrooper, Self::Vader, Self::KyloRen];

    pub(crate) fn sprite(self) -> &'static str {
        match self {
            Self::Stormtrooper => "stormtrooper-color",
            Self::Vader => "vader-color",
            Self::KyloRen => "kyloren-color",
        }
    }

    /// Pixels per second.
    pub(crate) fn speed(self) -> f32 {
        match self {
            Self::Stormtrooper => 400.0,
            Self::Vader => 500.0,
            Self::KyloRen => 600.0,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Stormtrooper => "stormtrooper",
            Self::Vader => "vader",
            Self::KyloRen => "kyloRen",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Moves right along one lane and respawns off the left edge once it leaves the canvas.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Hazard {
    kind: HazardKind,
    position: Vec2,
    speed: f32,
}

impl Hazard {
    pub(crate) fn spawn<R: Rng + ?Sized>(kind: HazardKind, rng: &mut R) -> Self {
        Self {
            kind,
            position: random_spawn_position(rng),
            speed: kind.speed(),
        }
    }

    #[cfg(test)]
    pub(crate) fn at(kind: HazardKind, position: Vec2) -> Self {
        Self {
            kind,
            position,
            speed: kind.speed(),
        }
    }

    pub(crate) fn kind(&self) -> HazardKind {
        self.kind
    }

    /// Advances by `speed * dt`. Returns true when the hazard respawned this tick.
    pub(crate) fn update<R: Rng + ?Sized>(&mut self, dt_seconds: f32, rng: &mut R) -> bool {
        self.position.x += self.speed * dt_seconds.max(0.0);
        if self.position.x < CANVAS_WIDTH {
            return false;
        }
        self.position = random_spawn_position(rng);
        true
    }

    /// True when the hazard shares `other`'s lane and is within `reach` pixels horizontally.
    pub(crate) fn overlaps(&self, other: Vec2, reach: f32) -> bool {
        (self.position.y - other.y).abs() < f32::EPSILON
            && (self.position.x - other.x).abs() < reach
    }
}

impl Entity for Hazard {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn sprite(&self) -> &'static str {
        self.kind.sprite()
    }
}

fn random_spawn_position<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let row = LANE_ROWS[rng.gen_range(0..LANE_ROWS.len())];
    let column = HAZARD_SPAWN_COLUMNS[rng.gen_range(0..HAZARD_SPAWN_COLUMNS.len())];
    Vec2::new(column, row)
}
