use crate::player::Player;

/// A disc dropped into `column` by `player`.
///
/// The column is not checked here; whether it fits is a question for the
/// board the move is played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    column: i32,
    player: Player,
}

impl Move {
    pub fn new(column: i32, player: Player) -> Self {
        Move { column, player }
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn player(&self) -> Player {
        self.player
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.player)
    }
}
