use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod game;
pub mod rules;
pub mod types;
pub mod wasm;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
