// src/app/mod.rs
//! ページに公開する処理を役割ごとに分割して置くモジュールだよ！

pub(crate) mod dom;
pub mod navigator;
pub mod grid_renderer;
pub mod page_initializer;
pub mod card_batch;
