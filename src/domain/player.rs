// Domain-level player aggregate and its read-only view.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
    // Metres; carried through untouched by travel.
    pub alt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    // Degrees clockwise from true north.
    pub bearing: f64,
    pub kph: f64,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub position: Position,
    pub velocity: Velocity,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Position, velocity: Velocity) -> Self {
        Self {
            name: name.into(),
            position,
            velocity,
        }
    }
}

/// Immutable copy of the player taken under the state lock.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub name: String,
    pub position: Position,
    pub velocity: Velocity,
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name.clone(),
            position: p.position,
            velocity: p.velocity,
        }
    }
}

impl fmt::Display for PlayerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player Name: \"{}\", Coords:({:.5}, {:.5}, {:.1}), Velocity: ({:.2}, {:.2})",
            self.name,
            self.position.lat,
            self.position.lon,
            self.position.alt,
            self.velocity.bearing,
            self.velocity.kph
        )
    }
}
