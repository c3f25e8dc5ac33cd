//! Browser binding: a game plus its optional computer opponent.

use tracing::warn;
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::ai::Opponent;
use crate::config::GameConfig;
use crate::error::ReversiError;
use crate::game::GameEngine;

#[wasm_bindgen]
pub struct WasmGame {
    game: GameEngine,
    opponent: Option<Opponent>,
}

#[wasm_bindgen]
impl WasmGame {
    /// Accepts a partial [`GameConfig`] object, or nothing for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmGame, JsError> {
        let config = decode_config(config)?;
        let game = GameEngine::with_config(&config)?;
        Ok(Self {
            game,
            opponent: Opponent::from_config(&config),
        })
    }

    /// Current [`GameState`](crate::types::GameState).
    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_state())?)
    }

    #[wasm_bindgen(js_name = activePlayer)]
    pub fn active_player(&self) -> String {
        self.game.active_player().to_string()
    }

    #[wasm_bindgen(js_name = isCpuTurn)]
    pub fn is_cpu_turn(&self) -> bool {
        self.opponent
            .as_ref()
            .is_some_and(|cpu| cpu.player() == self.game.active_player())
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_finished()
    }

    /// Settable cells for the active player.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        let moves = self.game.legal_moves(self.game.active_player());
        Ok(serde_wasm_bindgen::to_value(&moves)?)
    }

    /// Plays `(x, y)` for the human whose turn it is.
    ///
    /// Returns `false` during the computer's turn or for an illegal cell.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, x: usize, y: usize) -> bool {
        if self.is_cpu_turn() {
            return false;
        }
        let player = self.game.active_player();
        self.game.apply_move(player, x, y)
    }

    /// Lets the computer play if its think delay has passed.
    ///
    /// Hosts call this on a timer; it returns `true` when a move was made.
    #[wasm_bindgen(js_name = cpuMove)]
    pub fn cpu_move(&mut self) -> bool {
        let Some(opponent) = self.opponent.as_mut() else {
            return false;
        };
        opponent.take_turn(&mut self.game, Instant::now()).is_some()
    }

    /// Registers a JavaScript callback fired once when the game ends.
    #[wasm_bindgen(js_name = onTerminate)]
    pub fn on_terminate(&mut self, callback: js_sys::Function) {
        self.game.on_terminate(move || {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                warn!(?err, "termination callback threw");
            }
        });
    }

    /// Final [`GameResult`](crate::types::GameResult), or `undefined` while playing.
    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.result())?)
    }
}

fn decode_config(value: JsValue) -> Result<GameConfig, ReversiError> {
    if value.is_undefined() || value.is_null() {
        return Ok(GameConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| ReversiError::Decode {
        what: "config",
        message: err.to_string(),
    })
}
