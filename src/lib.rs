// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod protocol;

pub use app::card_batch::render_cards;
pub use app::grid_renderer::{create_cartela_grid, render_cartela};
pub use app::navigator::update_limit;
pub use app::page_initializer::current_limit;
pub use components::{DrawnNumbers, Limit};
pub use error::PageError;

// Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init();
    log::info!("cartela_view loaded");
    app::page_initializer::install()
}
