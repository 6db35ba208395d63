//! The eight compass directions plus the no-movement direction.

/// A screen-space compass direction.
///
/// Directions are expressed relative to the rendered map, not to storage
/// axes; navigators translate them into storage offsets for their grid
/// topology. [`Direction::None`] moves nowhere and is used to normalize a
/// coordinate against the active border policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// No movement.
    None,
    /// Up.
    North,
    /// Up-right.
    NorthEast,
    /// Right.
    East,
    /// Down-right.
    SouthEast,
    /// Down.
    South,
    /// Down-left.
    SouthWest,
    /// Left.
    West,
    /// Up-left.
    NorthWest,
}

impl Direction {
    /// The eight moving directions, clockwise from north.
    pub const COMPASS: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four cardinal directions in N, E, S, W order.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The four diagonal directions in NW, NE, SE, SW order.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Position on the compass rose (north = 0, clockwise), `None` for no movement.
    pub fn compass_index(self) -> Option<usize> {
        Self::COMPASS.iter().position(|&d| d == self)
    }

    /// Rotate clockwise by `eighths` eighth-turns. `None` stays `None`.
    pub fn rotate_eighths(self, eighths: i32) -> Self {
        match self.compass_index() {
            Some(i) => Self::COMPASS[(i as i32 + eighths).rem_euclid(8) as usize],
            None => Direction::None,
        }
    }

    /// Rotate clockwise by `steps` quarter turns. `None` stays `None`.
    pub fn rotate_quarters(self, steps: i32) -> Self {
        self.rotate_eighths(steps * 2)
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        self.rotate_eighths(4)
    }

    /// Whether this is one of N, E, S, W.
    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::South | Direction::West
        )
    }

    /// Lower-case short token (`"n"`, `"ne"`, ...); empty for `None`.
    pub fn short_name(self) -> &'static str {
        match self {
            Direction::None => "",
            Direction::North => "n",
            Direction::NorthEast => "ne",
            Direction::East => "e",
            Direction::SouthEast => "se",
            Direction::South => "s",
            Direction::SouthWest => "sw",
            Direction::West => "w",
            Direction::NorthWest => "nw",
        }
    }
}
