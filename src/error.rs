// src/error.rs
//! ページとのやり取りで起きるエラーたち。
//!
//! ブラウザ API 自体の失敗は `JsValue` のまま `?` で返す (renderer と同じやり方)。
//! この enum は「こっちが変だと判断した」ケース用。wasm の境界で JS の `Error`
//! に変換されるので、ページ側からは普通の例外に見えるよ。

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    /// `window` が無い (Worker の中で呼ばれた、など)
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// ID で探した要素が見つからない
    #[error("element #{id} not found")]
    MissingElement { id: String },

    /// 見つかったけど期待した種類の要素じゃない (select のはずが div、とか)
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("drawn numbers must be an iterable of numbers")]
    NotIterable,

    /// 埋め込み JSON のパース失敗。`?` で serde_json のエラーから変換される。
    #[error("invalid card data: {0}")]
    InvalidCards(#[from] serde_json::Error),
}

// `?` だけで JS の例外にできるように！
impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_element() {
        let missing = PageError::MissingElement { id: "limit-selector".to_string() };
        assert_eq!(missing.to_string(), "element #limit-selector not found");

        let wrong = PageError::WrongElementType { id: "card1".to_string(), expected: "select" };
        assert_eq!(wrong.to_string(), "element #card1 is not a select");
    }

    #[test]
    fn json_errors_convert_with_question_mark() {
        fn parse(json: &str) -> Result<Vec<u8>, PageError> {
            Ok(serde_json::from_str(json)?)
        }
        let err = parse("[1,").unwrap_err();
        assert!(matches!(err, PageError::InvalidCards(_)));
        assert!(err.to_string().starts_with("invalid card data: "));
    }
}
