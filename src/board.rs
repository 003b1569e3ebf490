use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::error::{BoardError, MoveRejection, Result};
use crate::player::Player;
use crate::r#move::Move;
use crate::rules::BoardRules;

pub use crate::rules::{STANDARD_HEIGHT, STANDARD_WIDTH, WIN_LENGTH};

/// Upper bounds on up-front allocation; larger boards grow as discs are dropped.
const PREALLOCATED_PER_COLUMN: usize = 16;
const PREALLOCATED_HISTORY: usize = 1024;

/// Column-drop game board.
///
/// Each column is a stack of moves, bottom first. The full move history is
/// kept separately so cross-column order survives.
///
/// Equality and hashing only look at the column stacks; history is ignored.
#[derive(Clone, Debug)]
pub struct GameBoard {
    columns: Vec<Vec<Move>>,
    rules: BoardRules,
    move_history: Vec<Move>,
}

impl PartialEq for GameBoard {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl Eq for GameBoard {}

impl Hash for GameBoard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.columns.hash(state);
    }
}

impl GameBoard {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Ok(Self::with_rules(BoardRules::new(width, height)?))
    }

    pub fn with_rules(rules: BoardRules) -> Self {
        let width = rules.width() as usize;
        let height = rules.height() as usize;
        let columns = (0..width)
            .map(|_| Vec::with_capacity(height.min(PREALLOCATED_PER_COLUMN)))
            .collect();
        GameBoard {
            columns,
            rules,
            move_history: Vec::with_capacity(
                width.saturating_mul(height).min(PREALLOCATED_HISTORY),
            ),
        }
    }

    pub fn standard() -> Self {
        Self::with_rules(BoardRules::standard())
    }

    /// Independent deep copy of `other`.
    pub fn copy_from(other: &GameBoard) -> Self {
        other.clone()
    }

    pub fn width(&self) -> i32 {
        self.rules.width()
    }

    pub fn height(&self) -> i32 {
        self.rules.height()
    }

    pub fn win_length(&self) -> i32 {
        self.rules.win_length()
    }

    pub fn rules(&self) -> &BoardRules {
        &self.rules
    }

    /// Number of discs in `column`, or `None` if there is no such column.
    pub fn column_height(&self, column: i32) -> Option<i32> {
        if self.rules.is_valid_column(column) {
            Some(self.columns[column as usize].len() as i32)
        } else {
            None
        }
    }

    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// Returns the column index the move lands in, or why it can't be played.
    fn validate_move(&self, move_: &Move) -> Result<usize> {
        let column = move_.column();
        if !self.rules.is_valid_column(column) {
            return Err(BoardError::InvalidMove {
                column,
                reason: MoveRejection::ColumnOutOfRange,
            });
        }

        let index = column as usize;
        if self.columns[index].len() >= self.rules.height() as usize {
            return Err(BoardError::InvalidMove {
                column,
                reason: MoveRejection::ColumnFull,
            });
        }

        Ok(index)
    }

    pub fn add_move(&mut self, move_: Move) -> Result<()> {
        let index = match self.validate_move(&move_) {
            Ok(index) => index,
            Err(err) => {
                debug!(%err, player = %move_.player(), "move rejected");
                return Err(err);
            }
        };

        self.columns[index].push(move_);
        self.move_history.push(move_);
        debug!(
            column = move_.column(),
            player = %move_.player(),
            moves = self.move_history.len(),
            "move applied"
        );
        Ok(())
    }

    /// Checks for a win before applying the move, so the landing cell is
    /// computed against the pre-move column height.
    pub fn checked_add_move(&mut self, move_: Move) -> Result<bool> {
        let won = self.check_if_winning_move(move_)?;
        self.add_move(move_)?;
        Ok(won)
    }

    /// Would playing `move_` now complete a line of `win_length` discs?
    ///
    /// Does not modify the board.
    pub fn check_if_winning_move(&self, move_: Move) -> Result<bool> {
        let index = self.validate_move(&move_)?;
        let landing = Coordinate::new(move_.column(), self.columns[index].len() as i32);
        let player = move_.player();

        let won = self
            .rules
            .line_directions()
            .into_iter()
            .any(|direction| self.completes_line(landing, direction, player));
        Ok(won)
    }

    fn completes_line(&self, landing: Coordinate, direction: Direction, player: Player) -> bool {
        let toward = self.consecutive_from(landing, direction, player);
        let away = self.consecutive_from(landing, direction.opposite(), player);
        trace!(%landing, ?direction, toward, away, "line scan");
        toward + away + 1 >= self.rules.win_length()
    }

    /// Counts `player`'s discs in a run starting at the neighbour of `start`.
    /// Stops at the board edge, an empty cell or an opponent's disc.
    fn consecutive_from(&self, start: Coordinate, direction: Direction, player: Player) -> i32 {
        let step = direction.unit_vector();
        let mut pos = start + step;
        let mut count = 0;
        while self.player_at(pos) == Some(player) {
            count += 1;
            pos = pos + step;
        }
        count
    }

    pub fn player_at(&self, pos: Coordinate) -> Option<Player> {
        if !self.rules.contains(pos) {
            return None;
        }
        self.columns[pos.x() as usize]
            .get(pos.y() as usize)
            .map(|m| m.player())
    }

    /// Columns that still have room, in index order.
    pub fn open_columns(&self) -> impl Iterator<Item = i32> + '_ {
        let height = self.rules.height() as usize;
        self.columns
            .iter()
            .enumerate()
            .filter(move |(_, column)| column.len() < height)
            .map(|(i, _)| i as i32)
    }

    pub fn available_moves_for(&self, player: Player) -> Vec<Move> {
        self.open_columns()
            .map(|column| Move::new(column, player))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.open_columns().next().is_none()
    }

    /// Snapshot indexed `[column][row]` where row 0 is the top of the board.
    pub fn board_representation(&self) -> Vec<Vec<Option<Player>>> {
        let height = self.rules.height() as usize;
        self.columns
            .iter()
            .map(|column| {
                let mut cells = vec![None; height];
                for (row, move_) in column.iter().enumerate() {
                    cells[height - 1 - row] = Some(move_.player());
                }
                cells
            })
            .collect()
    }

    pub fn move_history(&self) -> Vec<Move> {
        self.move_history.clone()
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rules.height() as usize).rev() {
            for column in &self.columns {
                match column.get(row) {
                    Some(move_) => write!(f, " {}", move_)?,
                    None => write!(f, "  ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
