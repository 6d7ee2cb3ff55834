// src/app/grid_renderer.rs
//! カルテラ (5x5 のカード) を DOM に描画するロジック。

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::app::dom;
use crate::components::drawn_numbers::DrawnNumbers;
use crate::config::page::{CELL_CLASS, CELL_TAG, GRID_CELLS, SELECTED_CLASS};

/// What one cell of the grid should look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpec {
    pub number: u8,
    pub selected: bool,
}

impl CellSpec {
    pub fn label(&self) -> String {
        self.number.to_string()
    }
}

/// Cells 1..=25 in ascending order, built lazily.
pub fn cell_specs(drawn: &DrawnNumbers) -> impl Iterator<Item = CellSpec> + '_ {
    (1..=GRID_CELLS).map(move |number| CellSpec {
        number,
        selected: drawn.contains(i64::from(number)),
    })
}

/// Replaces everything inside `container` with a fresh grid.
pub fn render_cartela(document: &Document, container: &Element, drawn: &DrawnNumbers) -> Result<(), JsValue> {
    clear_children(container)?;
    for spec in cell_specs(drawn) {
        let cell = build_cell(document, spec)?;
        container.append_child(&cell)?;
    }
    Ok(())
}

/// Renders into the element with `container_id`. Returns `false` (and touches
/// nothing) when there is no such element.
pub fn render_by_id(document: &Document, container_id: &str, drawn: &DrawnNumbers) -> Result<bool, JsValue> {
    match document.get_element_by_id(container_id) {
        Some(container) => {
            render_cartela(document, &container, drawn)?;
            Ok(true)
        }
        None => {
            debug!("GridRenderer: no container #{}, skipping", container_id);
            Ok(false)
        }
    }
}

#[wasm_bindgen(js_name = createCartelaGrid)]
pub fn create_cartela_grid(drawn_numbers: &JsValue, container_id: &str) -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    // コンテナが無ければ、データを読む前に何もせず帰る
    let Some(container) = document.get_element_by_id(container_id) else {
        debug!("GridRenderer: no container #{}, skipping", container_id);
        return Ok(());
    };
    let drawn = DrawnNumbers::from_js(drawn_numbers)?;
    render_cartela(&document, &container, &drawn)
}

fn build_cell(document: &Document, spec: CellSpec) -> Result<Element, JsValue> {
    let cell = document.create_element(CELL_TAG)?;
    cell.set_class_name(CELL_CLASS);
    cell.set_text_content(Some(&spec.label()));
    if spec.selected {
        cell.class_list().add_1(SELECTED_CLASS)?;
    }
    Ok(cell)
}

fn clear_children(container: &Element) -> Result<(), JsValue> {
    while let Some(child) = container.first_child() {
        container.remove_child(&child)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_cells_in_order() {
        let numbers: Vec<u8> = cell_specs(&DrawnNumbers::default()).map(|spec| spec.number).collect();
        assert_eq!(numbers, (1..=25).collect::<Vec<u8>>());
    }

    #[test]
    fn only_drawn_numbers_are_selected() {
        let drawn = DrawnNumbers::new(vec![5, 12, 24]);
        let selected: Vec<u8> = cell_specs(&drawn)
            .filter(|spec| spec.selected)
            .map(|spec| spec.number)
            .collect();
        assert_eq!(selected, vec![5, 12, 24]);
    }

    #[test]
    fn out_of_range_numbers_select_nothing() {
        let drawn = DrawnNumbers::new(vec![0, 26, 100, -1]);
        assert!(cell_specs(&drawn).all(|spec| !spec.selected));
        assert_eq!(cell_specs(&drawn).count(), 25);
    }

    #[test]
    fn sequence_is_lazy_and_resumable() {
        let drawn = DrawnNumbers::new(vec![2]);
        let mut specs = cell_specs(&drawn);
        assert_eq!(specs.next(), Some(CellSpec { number: 1, selected: false }));
        assert_eq!(specs.next(), Some(CellSpec { number: 2, selected: true }));
        assert_eq!(specs.next().map(|spec| spec.label()), Some("3".to_string()));
    }
}
