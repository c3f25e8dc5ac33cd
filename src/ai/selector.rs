use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::game::GameEngine;
use crate::types::{Cell, Player};

/// Picks one move for `player`.
///
/// Caller contract: `player` must have at least one legal move. Implementations
/// return `None` otherwise and must never return a cell outside
/// [`GameEngine::legal_moves`].
pub trait MoveSelector {
    fn select_move(&mut self, game: &GameEngine, player: Player) -> Option<Cell>;
}

/// Always plays the first settable cell in row-major order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&mut self, game: &GameEngine, player: Player) -> Option<Cell> {
        game.legal_moves(player).first().copied()
    }
}

/// Plays a uniformly random settable cell.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: ChaCha8Rng,
}

impl RandomSelector {
    /// Reproducible selector: the same seed plays the same moves.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, game: &GameEngine, player: Player) -> Option<Cell> {
        game.legal_moves(player).choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_legal_picks_the_row_major_head() {
        let game = GameEngine::new(8);

        assert_eq!(
            FirstLegalMoveSelector.select_move(&game, Player::Black),
            Some(Cell::new(3, 2))
        );
        assert_eq!(
            FirstLegalMoveSelector.select_move(&game, Player::White),
            Some(Cell::new(4, 2))
        );
    }

    #[test]
    fn random_selector_only_returns_legal_moves() {
        let game = GameEngine::new(8);
        let legal = game.legal_moves(Player::Black);
        let mut selector = RandomSelector::new(7);

        for _ in 0..32 {
            let mv = selector.select_move(&game, Player::Black).unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn random_selector_is_reproducible_from_a_seed() {
        let game = GameEngine::new(8);
        let mut a = RandomSelector::new(42);
        let mut b = RandomSelector::new(42);

        let picks_a: Vec<_> = (0..16).map(|_| a.select_move(&game, Player::White)).collect();
        let picks_b: Vec<_> = (0..16).map(|_| b.select_move(&game, Player::White)).collect();

        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn random_game_plays_to_completion() {
        let mut game = GameEngine::new(6);
        let mut selector = RandomSelector::new(3);

        while !game.is_finished() {
            assert!(game.move_count() <= 32, "game did not terminate");
            let player = game.active_player();
            let mv = selector.select_move(&game, player).unwrap();
            assert!(game.apply_move(player, mv.x, mv.y));
        }

        assert!(game.result().is_some());
    }

    #[test]
    fn selectors_return_none_without_legal_moves() {
        let game = GameEngine::from_position(
            "XXXX\nXXXX\nXXXX\nXXX.".parse().unwrap(),
            Player::White,
        );

        assert_eq!(FirstLegalMoveSelector.select_move(&game, Player::White), None);
        assert_eq!(RandomSelector::new(1).select_move(&game, Player::White), None);
    }
}
