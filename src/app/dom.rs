// src/app/dom.rs
//! window / document / 要素の取得をまとめたヘルパー。

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlSelectElement, Window};

use crate::error::PageError;

pub(crate) fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub(crate) fn document(window: &Window) -> Result<Document, PageError> {
    window.document().ok_or(PageError::NoDocument)
}

/// `Ok(None)` when nothing has this id; an error when something does but it
/// is not a `<select>`.
pub(crate) fn find_select(document: &Document, id: &str) -> Result<Option<HtmlSelectElement>, PageError> {
    match document.get_element_by_id(id) {
        None => Ok(None),
        Some(element) => element
            .dyn_into::<HtmlSelectElement>()
            .map(Some)
            .map_err(|_| PageError::WrongElementType { id: id.to_string(), expected: "select" }),
    }
}

pub(crate) fn require_select(document: &Document, id: &str) -> Result<HtmlSelectElement, PageError> {
    find_select(document, id)?.ok_or_else(|| PageError::MissingElement { id: id.to_string() })
}
