use std::fmt;

use tracing::{debug, warn};
use web_time::{Duration, Instant};

use crate::ai::{MoveSelector, RandomSelector};
use crate::config::GameConfig;
use crate::game::{GameEngine, Placement};
use crate::types::{Cell, Player};

/// Computer player for one color that answers after a fixed think delay.
///
/// The delay is purely cosmetic: the opponent only reads the game while
/// waiting and the rules never see it.
pub struct Opponent {
    player: Player,
    selector: Box<dyn MoveSelector>,
    delay: Duration,
    ready_at: Option<Instant>,
}

impl Opponent {
    pub fn new(player: Player, selector: Box<dyn MoveSelector>, delay: Duration) -> Self {
        Self {
            player,
            selector,
            delay,
            ready_at: None,
        }
    }

    /// Random opponent described by `config`, or `None` when both sides are human.
    pub fn from_config(config: &GameConfig) -> Option<Self> {
        let player = config.cpu?;
        let selector = match config.seed {
            Some(seed) => RandomSelector::new(seed),
            None => RandomSelector::from_entropy(),
        };
        Some(Self::new(player, Box::new(selector), config.cpu_delay()))
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the move to play once it is this opponent's turn and the
    /// delay since the turn was first observed has elapsed.
    pub fn poll(&mut self, game: &GameEngine, now: Instant) -> Option<Cell> {
        if game.is_finished() || game.active_player() != self.player {
            self.ready_at = None;
            return None;
        }

        let ready_at = *self.ready_at.get_or_insert(now + self.delay);
        if now < ready_at {
            return None;
        }

        self.ready_at = None;
        self.selector.select_move(game, self.player)
    }

    /// Polls and, when a move is due, plays it.
    pub fn take_turn(&mut self, game: &mut GameEngine, now: Instant) -> Option<Placement> {
        let cell = self.poll(game, now)?;
        match game.try_move(self.player, cell) {
            Ok(placement) => {
                debug!(player = %self.player, %cell, "opponent moved");
                Some(placement)
            }
            Err(err) => {
                warn!(error = %err, "opponent selected a move the game rejected");
                None
            }
        }
    }
}

impl fmt::Debug for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opponent")
            .field("player", &self.player)
            .field("delay", &self.delay)
            .field("ready_at", &self.ready_at)
            .finish_non_exhaustive()
    }
}
