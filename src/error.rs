/// Why a move was refused by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("column out of range")]
    ColumnOutOfRange,

    #[error("column is full")]
    ColumnFull,
}

/// Errors reported by the board and the game driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: i32, height: i32 },

    #[error("invalid move in column {column}: {reason}")]
    InvalidMove { column: i32, reason: MoveRejection },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_display() {
        let err = BoardError::InvalidDimension {
            width: 0,
            height: 6,
        };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 0x6: both must be positive"
        );
    }

    #[test]
    fn test_invalid_move_display() {
        let err = BoardError::InvalidMove {
            column: 7,
            reason: MoveRejection::ColumnOutOfRange,
        };
        assert_eq!(err.to_string(), "invalid move in column 7: column out of range");

        let err = BoardError::InvalidMove {
            column: 2,
            reason: MoveRejection::ColumnFull,
        };
        assert_eq!(err.to_string(), "invalid move in column 2: column is full");
    }

    #[test]
    fn test_move_rejection_display() {
        assert_eq!(MoveRejection::ColumnOutOfRange.to_string(), "column out of range");
        assert_eq!(MoveRejection::ColumnFull.to_string(), "column is full");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = BoardError::InvalidArgument("win length must be positive".to_string());
        assert_eq!(err.to_string(), "invalid argument: win length must be positive");
    }
}
