/// Planet table — fixed star fields for the static map.
///
/// Coordinates are canvas pixels (origin top-left, 500×500 surface).

use std::fmt;
use std::str::FromStr;

use starmap_engine::SelectionError;

/// One star as drawn on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPoint {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

const fn star(x: f32, y: f32, radius: f32) -> StarPoint {
    StarPoint { x, y, radius }
}

pub const STARS_PER_PLANET: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetId {
    Planet1,
    Planet2,
    Planet3,
}

impl PlanetId {
    pub const ALL: [PlanetId; 3] = [PlanetId::Planet1, PlanetId::Planet2, PlanetId::Planet3];

    /// Control id used by the host page (`"planet1"` ...).
    pub fn key(self) -> &'static str {
        match self {
            PlanetId::Planet1 => "planet1",
            PlanetId::Planet2 => "planet2",
            PlanetId::Planet3 => "planet3",
        }
    }

    /// Zero-based position in `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The planet's star field.
    pub fn stars(self) -> &'static [StarPoint; STARS_PER_PLANET] {
        match self {
            PlanetId::Planet1 => &PLANET1_STARS,
            PlanetId::Planet2 => &PLANET2_STARS,
            PlanetId::Planet3 => &PLANET3_STARS,
        }
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl TryFrom<i64> for PlanetId {
    type Error = SelectionError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(SelectionError::UnknownPlanet(index))
    }
}

impl FromStr for PlanetId {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| SelectionError::UnknownPlanetName(s.to_string()))
    }
}

const PLANET1_STARS: [StarPoint; STARS_PER_PLANET] = [
    star(100.0, 150.0, 3.0),
    star(200.0, 300.0, 4.0),
    star(350.0, 400.0, 5.0),
];

const PLANET2_STARS: [StarPoint; STARS_PER_PLANET] = [
    star(50.0, 100.0, 2.0),
    star(250.0, 350.0, 6.0),
    star(400.0, 450.0, 3.0),
];

const PLANET3_STARS: [StarPoint; STARS_PER_PLANET] = [
    star(150.0, 200.0, 4.0),
    star(300.0, 350.0, 5.0),
    star(450.0, 50.0, 6.0),
];
