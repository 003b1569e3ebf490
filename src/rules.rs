use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::error::{BoardError, Result};

/// Discs in a row needed to win.
pub const WIN_LENGTH: i32 = 4;

pub const STANDARD_WIDTH: i32 = 7;
pub const STANDARD_HEIGHT: i32 = 6;

/// Geometry and win condition of a board.
///
/// The win length is independent of the dimensions: a board narrower than the
/// win length is legal, it just cannot be won horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardRules {
    width: i32,
    height: i32,
    win_length: i32,
}

impl BoardRules {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_win_length(width, height, WIN_LENGTH)
    }

    pub fn with_win_length(width: i32, height: i32, win_length: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimension { width, height });
        }
        if win_length <= 0 {
            return Err(BoardError::InvalidArgument(format!(
                "win length must be positive, got {}",
                win_length
            )));
        }
        Ok(BoardRules {
            width,
            height,
            win_length,
        })
    }

    pub fn standard() -> Self {
        BoardRules {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            win_length: WIN_LENGTH,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn win_length(&self) -> i32 {
        self.win_length
    }

    pub fn line_directions(&self) -> [Direction; 4] {
        Direction::unique_line_directions()
    }

    pub fn is_valid_column(&self, column: i32) -> bool {
        (0..self.width).contains(&column)
    }

    /// Whether `pos` lies inside the width x height rectangle, occupied or not.
    pub fn contains(&self, pos: Coordinate) -> bool {
        self.is_valid_column(pos.x()) && (0..self.height).contains(&pos.y())
    }
}

impl Default for BoardRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_dimensions() {
        for (w, h) in [(0, 6), (7, 0), (-1, 6), (7, -3), (0, 0)] {
            assert_eq!(
                BoardRules::new(w, h),
                Err(BoardError::InvalidDimension { width: w, height: h })
            );
        }
    }

    #[test]
    fn test_no_upper_bound_tied_to_win_length() {
        let rules = BoardRules::new(12, 9).unwrap();
        assert_eq!(rules.width(), 12);
        assert_eq!(rules.height(), 9);
        assert_eq!(rules.win_length(), WIN_LENGTH);

        assert!(BoardRules::new(1, 1).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_win_length() {
        assert!(matches!(
            BoardRules::with_win_length(7, 6, 0),
            Err(BoardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_contains() {
        let rules = BoardRules::standard();
        assert!(rules.contains(Coordinate::new(0, 0)));
        assert!(rules.contains(Coordinate::new(6, 5)));
        assert!(!rules.contains(Coordinate::new(7, 0)));
        assert!(!rules.contains(Coordinate::new(0, 6)));
        assert!(!rules.contains(Coordinate::new(-1, 2)));
        assert!(!rules.contains(Coordinate::new(3, -1)));
    }
}
