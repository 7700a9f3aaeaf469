use super::{Error, Hex};
use std::convert::TryFrom;

/// Unit offsets to the six adjacent hexes, indexed by [`Direction::index`].
pub const DIRECTIONS: [Hex; 6] = [
    Hex::from_axial(1, 0),
    Hex::from_axial(1, -1),
    Hex::from_axial(0, -1),
    Hex::from_axial(-1, 0),
    Hex::from_axial(-1, 1),
    Hex::from_axial(0, 1),
];

/// Offsets to the six hexes which share a single corner with the origin.
///
/// `DIAGONALS[i]` lies between `DIRECTIONS[i]` and `DIRECTIONS[(i + 1) % 6]`.
pub const DIAGONALS: [Hex; 6] = [
    Hex::from_axial(2, -1),
    Hex::from_axial(1, -2),
    Hex::from_axial(-1, -1),
    Hex::from_axial(-2, 1),
    Hex::from_axial(-1, 2),
    Hex::from_axial(1, 1),
];

/// Look up the unit hex for a direction index.
pub fn direction(index: usize) -> Result<Hex, Error> {
    DIRECTIONS
        .get(index)
        .copied()
        .ok_or(Error::InvalidDirection(index))
}

/// Look up the diagonal offset for a direction index.
pub fn diagonal(index: usize) -> Result<Hex, Error> {
    DIAGONALS
        .get(index)
        .copied()
        .ok_or(Error::InvalidDirection(index))
}

/// Direction in a hexagonal coordinate system
///
/// Names assume pointy-top hexes drawn with `y` increasing downward, so that
/// decreasing `r` moves up the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    Northeast,
    Northwest,
    West,
    Southwest,
    Southeast,
}

impl Direction {
    /// Iterate through all `Direction`s in index order, starting from `East`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::East), |direction| {
            use Direction::*;

            match direction {
                East => Some(Northeast),
                Northeast => Some(Northwest),
                Northwest => Some(West),
                West => Some(Southwest),
                Southwest => Some(Southeast),
                Southeast => None,
            }
        })
    }

    /// Position of this direction within [`DIRECTIONS`] and [`DIAGONALS`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Direction {
        use Direction::*;

        match self {
            East => West,
            Northeast => Southwest,
            Northwest => Southeast,
            West => East,
            Southwest => Northeast,
            Southeast => Northwest,
        }
    }

    /// The unit hex one step in this direction.
    pub fn unit(self) -> Hex {
        DIRECTIONS[self.index()]
    }

    /// The diagonal offset between this direction and the next one.
    pub fn diagonal(self) -> Hex {
        DIAGONALS[self.index()]
    }
}

impl TryFrom<usize> for Direction {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Direction::iter()
            .nth(index)
            .ok_or(Error::InvalidDirection(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_matches_table_order() {
        for (index, direction) in Direction::iter().enumerate() {
            assert_eq!(direction.index(), index);
            assert_eq!(Direction::try_from(index).unwrap(), direction);
        }
        assert_eq!(Direction::iter().count(), 6);
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(direction(6), Err(Error::InvalidDirection(6)));
        assert_eq!(diagonal(17), Err(Error::InvalidDirection(17)));
        assert!(Direction::try_from(6).is_err());
    }

    #[test]
    fn test_opposite_cancels() {
        for direction in Direction::iter() {
            assert_eq!(direction.unit() + direction.opposite().unit(), Hex::ORIGIN);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_diagonals_are_sums_of_adjacent_directions() {
        for i in 0..6 {
            assert_eq!(DIAGONALS[i], DIRECTIONS[i] + DIRECTIONS[(i + 1) % 6]);
        }
    }
}
