use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_SIDE, is_valid_side};
use crate::error::ReversiError;
use crate::types::Player;

const DEFAULT_CPU_DELAY_MS: u64 = 1000;

/// Settings for a new game.
///
/// Every field has a default, so hosts may pass a partial object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length, even and at least 4.
    pub side: usize,
    /// Color played by the computer, `None` for two human players.
    pub cpu: Option<Player>,
    /// Pause before the computer answers.
    pub cpu_delay_ms: u64,
    /// Fixed RNG seed for reproducible computer play.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            cpu: Some(Player::White),
            cpu_delay_ms: DEFAULT_CPU_DELAY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ReversiError> {
        if !is_valid_side(self.side) {
            return Err(ReversiError::InvalidSide { side: self.side });
        }
        Ok(())
    }

    pub fn cpu_delay(&self) -> web_time::Duration {
        web_time::Duration::from_millis(self.cpu_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a_standard_game_against_white_cpu() {
        let config = GameConfig::default();

        assert_eq!(config.side, 8);
        assert_eq!(config.cpu, Some(Player::White));
        assert_eq!(config.cpu_delay().as_millis(), 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_side() {
        let config = GameConfig {
            side: 9,
            ..GameConfig::default()
        };

        assert_eq!(config.validate(), Err(ReversiError::InvalidSide { side: 9 }));
    }
}
