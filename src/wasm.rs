use wasm_bindgen::prelude::*;

use crate::game::GameSession;
use crate::types::{Difficulty, GameMode};

/// JS-facing handle around a [`GameSession`].
///
/// Move rejections never surface as exceptions: input methods return
/// `false` (or `None`) and leave the game untouched, and the host reads
/// the current snapshot through `state` / `result` / `pending_ai`.
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameSession,
}

#[wasm_bindgen]
impl WasmGame {
    /// Creates a game. `mode`: 0 = single-player, 1 = two-player.
    /// `difficulty`: 0 = easy, 1 = medium, 2 = hard.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: u8, difficulty: u8) -> Result<WasmGame, JsValue> {
        let mode = GameMode::from_code(mode)
            .ok_or_else(|| JsValue::from_str("unknown game mode code"))?;
        let difficulty = Difficulty::from_code(difficulty)
            .ok_or_else(|| JsValue::from_str("unknown difficulty code"))?;
        Ok(Self {
            inner: GameSession::new(mode, difficulty),
        })
    }

    /// A cell was activated in the UI. Returns `false` when the move
    /// was ignored.
    pub fn activate_cell(&mut self, index: u8) -> bool {
        self.inner.place(index as usize).is_ok()
    }

    /// The scheduled AI response, or `null` when none is outstanding.
    /// The host waits `delay_ms` and then calls [`Self::complete_ai_move`]
    /// with the ticket's token.
    pub fn pending_ai(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.pending_ai())
    }

    /// Applies the scheduled AI move. Returns the cell it took, or
    /// `None` when the ticket is stale (e.g. a reset happened during
    /// the delay).
    pub fn complete_ai_move(&mut self, token: u32) -> Option<u8> {
        self.inner.complete_ai_move(token).ok().map(|index| index as u8)
    }

    /// Returns `false` for an unknown mode code. A recognized mode
    /// starts a fresh game.
    pub fn set_mode(&mut self, mode: u8) -> bool {
        match GameMode::from_code(mode) {
            Some(mode) => {
                self.inner.set_mode(mode);
                true
            }
            None => false,
        }
    }

    /// Returns `false` for an unknown difficulty code. The game in
    /// progress continues under the new policy.
    pub fn set_difficulty(&mut self, difficulty: u8) -> bool {
        match Difficulty::from_code(difficulty) {
            Some(difficulty) => {
                self.inner.set_difficulty(difficulty);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Current snapshot as a plain JS object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.to_game_state())
    }

    /// Final result, or `null` while the game is in progress.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.result())
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
