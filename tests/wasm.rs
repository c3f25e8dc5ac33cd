#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use reversi_engine::wasm::WasmGame;
use reversi_engine::wasm_ready;
use reversi_engine::{GameConfig, Player};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

fn config(cpu: Option<Player>) -> JsValue {
    let config = GameConfig {
        cpu,
        cpu_delay_ms: 0,
        seed: Some(5),
        ..GameConfig::default()
    };
    serde_wasm_bindgen::to_value(&config).unwrap()
}

#[wasm_bindgen_test]
fn module_reports_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn default_config_starts_a_standard_game() {
    let game = WasmGame::new(JsValue::UNDEFINED).unwrap();

    assert_eq!(game.active_player(), "black");
    assert!(!game.is_cpu_turn());
    assert!(!game.is_game_over());
    assert!(game.result().unwrap().is_undefined());
}

#[wasm_bindgen_test]
fn invalid_side_is_an_error() {
    let bad = serde_wasm_bindgen::to_value(&GameConfig {
        side: 5,
        ..GameConfig::default()
    })
    .unwrap();

    assert!(WasmGame::new(bad).is_err());
}

#[wasm_bindgen_test]
fn human_then_cpu_move() {
    let mut game = WasmGame::new(config(Some(Player::White))).unwrap();

    assert!(!game.cpu_move());
    assert!(game.apply_move(2, 3));
    assert!(game.is_cpu_turn());
    assert!(!game.apply_move(2, 2));
    assert!(game.cpu_move());
    assert_eq!(game.active_player(), "black");
}

#[wasm_bindgen_test]
fn human_vs_human_has_no_cpu() {
    let mut game = WasmGame::new(config(None)).unwrap();

    assert!(game.apply_move(2, 3));
    assert!(!game.cpu_move());
    assert!(game.apply_move(2, 2));
    assert!(!game.apply_move(0, 0));
}

#[wasm_bindgen_test]
fn state_and_legal_moves_serialize() {
    let game = WasmGame::new(JsValue::UNDEFINED).unwrap();

    let moves = js_sys::Array::from(&game.legal_moves().unwrap());
    assert_eq!(moves.length(), 4);

    let state = game.state().unwrap();
    let side = js_sys::Reflect::get(&state, &JsValue::from_str("side")).unwrap();
    assert_eq!(side.as_f64(), Some(8.0));
}

#[wasm_bindgen_test]
fn game_against_cpu_ends_and_calls_back_once() {
    let mut game = WasmGame::new(config(Some(Player::White))).unwrap();
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    let callback = Closure::<dyn Fn()>::new(move || counter.set(counter.get() + 1));
    game.on_terminate(callback.as_ref().unchecked_ref::<js_sys::Function>().clone());
    callback.forget();

    let mut turns = 0;
    while !game.is_game_over() && turns < 200 {
        if !game.is_cpu_turn() {
            let moves = js_sys::Array::from(&game.legal_moves().unwrap());
            let first = moves.get(0);
            let x = js_sys::Reflect::get(&first, &JsValue::from_str("x")).unwrap();
            let y = js_sys::Reflect::get(&first, &JsValue::from_str("y")).unwrap();
            assert!(game.apply_move(x.as_f64().unwrap() as usize, y.as_f64().unwrap() as usize));
        } else {
            game.cpu_move();
        }
        turns += 1;
    }

    assert!(game.is_game_over());
    assert_eq!(fired.get(), 1);
    assert!(!game.result().unwrap().is_undefined());
}
