use tracing::debug;

use crate::board::GameBoard;
use crate::error::{BoardError, Result};
use crate::outcome::GameOutcome;
use crate::player::Player;
use crate::r#move::Move;

/// Turn-taking driver around a [`GameBoard`].
///
/// The board itself never decides that a game is over; this type asks it
/// whether each move wins and stops accepting moves once the game is decided.
#[derive(Clone, Debug)]
pub struct Game {
    board: GameBoard,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl Game {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Ok(Self::from_board(GameBoard::new(width, height)?, Player::Player1))
    }

    pub fn standard() -> Self {
        Self::from_board(GameBoard::standard(), Player::Player1)
    }

    /// Continue play on an existing board with `to_move` to play next.
    ///
    /// A board that is already full starts out drawn.
    pub fn from_board(board: GameBoard, to_move: Player) -> Self {
        let outcome = board.is_full().then_some(GameOutcome::Draw);
        Game {
            board,
            current_player: to_move,
            outcome,
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.available_moves_for(self.current_player)
    }

    pub fn move_history(&self) -> Vec<Move> {
        self.board.move_history()
    }

    /// Drop a disc for the side to move. Returns the outcome if this move
    /// decided the game.
    pub fn play(&mut self, column: i32) -> Result<Option<GameOutcome>> {
        if self.is_over() {
            return Err(BoardError::GameOver);
        }

        let move_ = Move::new(column, self.current_player);
        let won = self.board.checked_add_move(move_)?;

        if won {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = self.current_player.opponent();
        }

        if let Some(outcome) = self.outcome {
            debug!(%outcome, moves = self.board.move_count(), "game decided");
        }
        Ok(self.outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self.outcome {
            Some(outcome) => outcome.to_string(),
            None => "in progress".to_string(),
        };
        write!(
            f,
            "Game(turn: {}, status: {})\n{}",
            self.current_player, status, self.board
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveRejection;

    #[test]
    fn test_new_game() {
        let game = Game::standard();
        assert_eq!(game.turn(), Player::Player1);
        assert!(!game.is_over());
        assert!(game.outcome().is_none());
        assert_eq!(game.legal_moves().len(), 7);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::standard();
        assert_eq!(game.play(3).unwrap(), None);
        assert_eq!(game.turn(), Player::Player2);
        assert_eq!(game.play(3).unwrap(), None);
        assert_eq!(game.turn(), Player::Player1);
        assert_eq!(
            game.move_history(),
            vec![Move::new(3, Player::Player1), Move::new(3, Player::Player2)]
        );
    }

    #[test]
    fn test_failed_move_keeps_turn() {
        let mut game = Game::standard();
        let err = game.play(9).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidMove {
                column: 9,
                reason: MoveRejection::ColumnOutOfRange
            }
        );
        assert_eq!(game.turn(), Player::Player1);
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_vertical_win_ends_game() {
        let mut game = Game::standard();
        for _ in 0..3 {
            game.play(0).unwrap();
            game.play(1).unwrap();
        }

        assert_eq!(
            game.play(0).unwrap(),
            Some(GameOutcome::Winner(Player::Player1))
        );
        assert!(game.is_over());
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.play(2), Err(BoardError::GameOver));
        assert_eq!(game.move_history().len(), 7);
    }

    #[test]
    fn test_second_player_can_win() {
        let mut game = Game::standard();
        // Player 1 scatters, player 2 builds a row along the bottom
        for (p1, p2) in [(0, 3), (0, 4), (0, 5)] {
            game.play(p1).unwrap();
            game.play(p2).unwrap();
        }
        game.play(1).unwrap();

        assert_eq!(
            game.play(6).unwrap(),
            Some(GameOutcome::Winner(Player::Player2))
        );
    }

    #[test]
    fn test_draw_when_board_fills() {
        // 2x2 cannot hold a line of four
        let mut game = Game::new(2, 2).unwrap();
        assert_eq!(game.play(0).unwrap(), None);
        assert_eq!(game.play(0).unwrap(), None);
        assert_eq!(game.play(1).unwrap(), None);
        assert_eq!(game.play(1).unwrap(), Some(GameOutcome::Draw));
        assert!(game.is_over());
    }

    #[test]
    fn test_from_full_board_is_drawn() {
        let mut board = GameBoard::new(1, 1).unwrap();
        board.add_move(Move::new(0, Player::Player1)).unwrap();

        let game = Game::from_board(board, Player::Player2);
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_display_header() {
        let game = Game::new(1, 1).unwrap();
        assert_eq!(
            game.to_string(),
            "Game(turn: 1, status: in progress)\n  \n"
        );
    }
}
