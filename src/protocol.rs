// src/protocol.rs

// バックエンドがページに埋め込むカードデータ (JSON) の形を定義するよ。
// キー名はバックエンド側に合わせてポルトガル語のまま受け取る。
use serde::Deserialize;

use crate::components::drawn_numbers::DrawnNumbers;
use crate::error::PageError;

/// One card as the backend embeds it: a contest result (`concursos`) or a
/// suggested game (`sugestoes`). Only `numeros` is required; keys the renderer
/// has no use for (`estrategia`, `descricao`, ...) are ignored.
///
/// `numeros` は `DrawnNumbers` と同じルールで読むので、整数じゃない要素は
/// 黙って捨てられる (バッチ全体は失敗しない)。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardEntry {
    /// Contest number. When present it names the card's container.
    #[serde(rename = "concurso", default)]
    pub contest: Option<u32>,
    #[serde(rename = "numeros")]
    pub numbers: DrawnNumbers,
    /// Draw date, already formatted by the backend (`dd/mm/yyyy`).
    #[serde(rename = "data", default)]
    pub date: Option<String>,
    #[serde(rename = "ciclo", default)]
    pub cycle: Option<u32>,
    /// Prime/odd/even split, e.g. `"5P-8I-7NP"`.
    #[serde(rename = "config_pip", default)]
    pub pip_config: Option<String>,
}

impl CardEntry {
    /// `prefix + contest` when the entry has a contest number, otherwise
    /// `prefix + (index + 1)`.
    pub fn container_id(&self, prefix: &str, index: usize) -> String {
        match self.contest {
            Some(contest) => format!("{}{}", prefix, contest),
            None => format!("{}{}", prefix, index + 1),
        }
    }
}

/// ページに埋め込まれた JSON 配列をまるごとパースする。途中で壊れていたら全体をエラーにする。
pub fn parse_cards(json: &str) -> Result<Vec<CardEntry>, PageError> {
    Ok(serde_json::from_str(json)?)
}
