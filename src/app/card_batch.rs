// src/app/card_batch.rs
//! ページに埋め込まれたカード一覧 (JSON) をまとめて描画する。

use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::app::{dom, grid_renderer};
use crate::protocol::{self, CardEntry};

/// Renders every entry into its own container and returns how many
/// containers were actually found.
pub fn render_card_entries(document: &Document, cards: &[CardEntry], id_prefix: &str) -> Result<u32, JsValue> {
    let mut rendered = 0;
    for (index, card) in cards.iter().enumerate() {
        let container_id = card.container_id(id_prefix, index);
        if grid_renderer::render_by_id(document, &container_id, &card.numbers)? {
            debug!(
                "CardBatch: #{} rendered ({} drawn, date {:?}, cycle {:?}, pip {:?})",
                container_id,
                card.numbers.len(),
                card.date,
                card.cycle,
                card.pip_config
            );
            rendered += 1;
        }
    }
    Ok(rendered)
}

/// `renderCards('[{"concurso": 3100, "numeros": [...]}, ...]', "cartela-")`
#[wasm_bindgen(js_name = renderCards)]
pub fn render_cards(cards_json: &str, id_prefix: &str) -> Result<u32, JsValue> {
    let cards = protocol::parse_cards(cards_json)?;
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let rendered = render_card_entries(&document, &cards, id_prefix)?;
    info!("CardBatch: rendered {} of {} cards with prefix {:?}", rendered, cards.len(), id_prefix);
    Ok(rendered)
}
