//! Plays seeded random games so `hotpath` can report where the time goes.
//!
//! Run with `cargo run --release --bin profile --features hotpath`.

use connect_four::agent::{Agent, AgentRegistry};
use connect_four::board::GameBoard;
use connect_four::game::Game;
use connect_four::outcome::GameOutcome;
use connect_four::player::Player;

const GAMES: u64 = 20_000;

/// Returns the outcome and how many immediately winning moves were on offer
/// across all positions of the game.
#[hotpath::measure]
fn play_one(registry: &AgentRegistry, seed: u64) -> Option<(GameOutcome, usize)> {
    let mut agents = [
        registry.create("random", Player::Player1, seed)?,
        registry.create("random", Player::Player2, seed.wrapping_add(1))?,
    ];
    let mut game = Game::standard();
    let mut threats = 0;

    while !game.is_over() {
        threats += count_winning_moves(game.board());
        let move_ = agents[game.turn().index()].select_move(game.board())?;
        game.play(move_.column()).ok()?;
    }

    game.outcome().map(|outcome| (outcome, threats))
}

#[hotpath::measure]
fn count_winning_moves(board: &GameBoard) -> usize {
    [Player::Player1, Player::Player2]
        .into_iter()
        .flat_map(|player| board.available_moves_for(player))
        .filter(|m| board.check_if_winning_move(*m).unwrap_or(false))
        .count()
}

#[hotpath::main]
fn main() {
    let registry = AgentRegistry::with_builtin();
    let mut wins = [0u64; 2];
    let mut draws = 0u64;
    let mut threats = 0usize;

    for seed in 0..GAMES {
        if let Some((outcome, game_threats)) = play_one(&registry, seed * 2) {
            match outcome {
                GameOutcome::Winner(player) => wins[player.index()] += 1,
                GameOutcome::Draw => draws += 1,
            }
            threats += game_threats;
        }
    }

    println!(
        "{} games: player 1 won {}, player 2 won {}, {} draws ({} winning moves on offer)",
        GAMES, wins[0], wins[1], draws, threats
    );
}
