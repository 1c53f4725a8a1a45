use std::f32::consts::FRAC_PI_2;
use std::fmt::{self, Display, Formatter};

/// Opaque reference to a tile's artwork. Every tile on a board has its own id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u8);

/// Orientation in clockwise quarter turns, always `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rotation(u8);

impl Rotation {
    pub const fn new(quarter_turns: u8) -> Self {
        Self(quarter_turns % 4)
    }

    pub const fn quarter_turns(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn turned(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// Angle for a z-axis rotation in world space, where positive angles
    /// turn counter-clockwise.
    pub fn radians(self) -> f32 {
        -(self.0 as f32) * FRAC_PI_2
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", u16::from(self.0) * 90)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub rotation: Rotation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_quarter_turns_return_to_start() {
        let mut rotation = Rotation::new(0);
        for expected in [1, 2, 3, 0] {
            rotation = rotation.turned();
            assert_eq!(rotation.quarter_turns(), expected, "after turning to {rotation}");
        }
    }

    #[test]
    fn construction_wraps_modulo_four() {
        assert_eq!(Rotation::new(6), Rotation::new(2), "6 quarter turns is a half turn");
    }
}
