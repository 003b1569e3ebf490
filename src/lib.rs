pub mod agent;
pub mod board;
pub mod coordinate;
pub mod direction;
pub mod error;
pub mod game;
pub mod r#move;
pub mod outcome;
pub mod player;
pub mod rules;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn connect_four(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use player::Player;
    use python_bindings::*;
    m.add_class::<PyBoard>()?;
    m.add_class::<PyMove>()?;
    m.add("PLAYER_1", Player::Player1.number())?;
    m.add("PLAYER_2", Player::Player2.number())?;
    m.add("WIN_LENGTH", rules::WIN_LENGTH)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::board::GameBoard;
    use crate::coordinate::Coordinate;
    use crate::error::BoardError;
    use crate::player::Player;
    use crate::r#move::Move;

    fn value_error(err: BoardError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    fn player_from_number(number: u8) -> PyResult<Player> {
        Player::from_number(number).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>("player must be 1 or 2")
        })
    }

    #[pyclass(name = "Board")]
    #[derive(Clone)]
    pub struct PyBoard {
        board: GameBoard,
    }

    #[pymethods]
    impl PyBoard {
        #[new]
        pub fn new(width: i32, height: i32) -> PyResult<Self> {
            Ok(PyBoard {
                board: GameBoard::new(width, height).map_err(value_error)?,
            })
        }

        #[staticmethod]
        pub fn standard() -> Self {
            PyBoard {
                board: GameBoard::standard(),
            }
        }

        pub fn width(&self) -> i32 {
            self.board.width()
        }

        pub fn height(&self) -> i32 {
            self.board.height()
        }

        pub fn add_move(&mut self, move_: &PyMove) -> PyResult<()> {
            self.board.add_move(move_.move_).map_err(value_error)
        }

        pub fn checked_add_move(&mut self, move_: &PyMove) -> PyResult<bool> {
            self.board.checked_add_move(move_.move_).map_err(value_error)
        }

        pub fn check_if_winning_move(&self, move_: &PyMove) -> PyResult<bool> {
            self.board
                .check_if_winning_move(move_.move_)
                .map_err(value_error)
        }

        pub fn player_at(&self, x: i32, y: i32) -> Option<u8> {
            self.board
                .player_at(Coordinate::new(x, y))
                .map(|p| p.number())
        }

        pub fn available_moves_for(&self, player: u8) -> PyResult<Vec<PyMove>> {
            let player = player_from_number(player)?;
            Ok(self
                .board
                .available_moves_for(player)
                .into_iter()
                .map(|m| PyMove { move_: m })
                .collect())
        }

        pub fn is_full(&self) -> bool {
            self.board.is_full()
        }

        pub fn board_representation(&self) -> Vec<Vec<Option<u8>>> {
            self.board
                .board_representation()
                .into_iter()
                .map(|column| column.into_iter().map(|c| c.map(|p| p.number())).collect())
                .collect()
        }

        pub fn move_history(&self) -> Vec<PyMove> {
            self.board
                .move_history()
                .into_iter()
                .map(|m| PyMove { move_: m })
                .collect()
        }

        pub fn copy(&self) -> PyBoard {
            PyBoard {
                board: GameBoard::copy_from(&self.board),
            }
        }

        pub fn __eq__(&self, other: &PyBoard) -> bool {
            self.board == other.board
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.board.hash(&mut hasher);
            hasher.finish()
        }

        pub fn __str__(&self) -> String {
            self.board.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Board(width={}, height={}, moves={})",
                self.board.width(),
                self.board.height(),
                self.board.move_count()
            )
        }
    }

    #[pyclass(name = "Move")]
    #[derive(Clone, Debug)]
    pub struct PyMove {
        move_: Move,
    }

    #[pymethods]
    impl PyMove {
        #[new]
        pub fn new(column: i32, player: u8) -> PyResult<Self> {
            Ok(PyMove {
                move_: Move::new(column, player_from_number(player)?),
            })
        }

        pub fn column(&self) -> i32 {
            self.move_.column()
        }

        pub fn player(&self) -> u8 {
            self.move_.player().number()
        }

        pub fn __str__(&self) -> String {
            self.move_.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Move({}, {})",
                self.move_.column(),
                self.move_.player().number()
            )
        }

        pub fn __eq__(&self, other: &PyMove) -> bool {
            self.move_ == other.move_
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.move_.hash(&mut hasher);
            hasher.finish()
        }
    }
}
