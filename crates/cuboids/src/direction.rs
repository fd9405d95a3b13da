//! Compass directions and quarter-turn rotations.
//!
//! Both are ordinals in `0..4`. Directions are listed counter-clockwise
//! starting at `Up`, so adding a rotation ordinal turns a direction
//! counter-clockwise by that many quarter turns. Rotations form the cyclic
//! group Z/4 under `compound`.

use std::ops::Add;

/// One of the four grid directions, as seen from a cell's own face frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

/// A quarter-turn rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rotation {
    #[default]
    Zero = 0,
    Quarter = 1,
    Half = 2,
    ThreeQuarter = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Direction for an ordinal, reduced mod 4.
    #[inline]
    pub fn from_ordinal(n: u8) -> Self {
        Self::ALL[(n % 4) as usize]
    }

    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// `(direction + rotation) mod 4`.
    #[inline]
    pub fn rotate(self, rotation: Rotation) -> Direction {
        Self::from_ordinal(self.ordinal() + rotation.ordinal())
    }

    /// Rotation to apply to a cell whose link back to its anchor points
    /// `incoming`, given that the anchor reaches it through `self`:
    /// `(self - incoming + 6) mod 4`.
    ///
    /// Rotating `incoming` by the result yields `self.opposite()`, i.e. the
    /// new cell's shared edge ends up facing its anchor.
    #[inline]
    pub fn rotation_to(self, incoming: Direction) -> Rotation {
        Rotation::from_ordinal(self.ordinal() + 6 - incoming.ordinal())
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        self.rotate(Rotation::Half)
    }

    /// Grid step `(d_row, d_col)` with rows growing downward.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
        }
    }
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Zero,
        Rotation::Quarter,
        Rotation::Half,
        Rotation::ThreeQuarter,
    ];

    #[inline]
    pub fn from_ordinal(n: u8) -> Self {
        Self::ALL[(n % 4) as usize]
    }

    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// `(self + other) mod 4`.
    #[inline]
    pub fn compound(self, other: Rotation) -> Rotation {
        Self::from_ordinal(self.ordinal() + other.ordinal())
    }

    pub fn degrees(self) -> u16 {
        u16::from(self.ordinal()) * 90
    }
}

impl Add for Rotation {
    type Output = Rotation;
    #[inline]
    fn add(self, rhs: Rotation) -> Self::Output {
        self.compound(rhs)
    }
}
