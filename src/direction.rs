use crate::coordinate::Coordinate;

/// One of the eight compass directions on the board.
///
/// Variants are listed clockwise starting from `Up`, so each direction's
/// opposite sits four places further along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    UpperRight,
    Right,
    LowerRight,
    Down,
    LowerLeft,
    Left,
    UpperLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpperRight,
        Direction::Right,
        Direction::LowerRight,
        Direction::Down,
        Direction::LowerLeft,
        Direction::Left,
        Direction::UpperLeft,
    ];

    fn index(&self) -> usize {
        *self as usize
    }

    /// The direction lying on the same line, pointing the other way.
    pub fn opposite(&self) -> Direction {
        let half = Self::ALL.len() / 2;
        Self::ALL[(self.index() + half) % Self::ALL.len()]
    }

    pub fn unit_vector(&self) -> Coordinate {
        match self {
            Direction::Up => Coordinate::new(0, 1),
            Direction::UpperRight => Coordinate::new(1, 1),
            Direction::Right => Coordinate::new(1, 0),
            Direction::LowerRight => Coordinate::new(1, -1),
            Direction::Down => Coordinate::new(0, -1),
            Direction::LowerLeft => Coordinate::new(-1, -1),
            Direction::Left => Coordinate::new(-1, 0),
            Direction::UpperLeft => Coordinate::new(-1, 1),
        }
    }

    /// One direction per line through a point: the first-enumerated member
    /// of each opposite pair.
    pub fn unique_line_directions() -> [Direction; 4] {
        let mut unique = [Direction::Up; 4];
        let mut found = 0;
        for direction in Self::ALL {
            if !unique[..found].contains(&direction.opposite()) {
                unique[found] = direction;
                found += 1;
            }
        }
        unique
    }
}
