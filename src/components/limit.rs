// src/components/limit.rs

use std::fmt;

use crate::config::page::DEFAULT_LIMIT;

/// `limit` クエリパラメータの値。
///
/// 何件の抽選結果を表示するかはバックエンドが決めるので、こちらでは数値として
/// 解釈せず、文字列のまま持ち回るだけ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit(String);

impl Limit {
    /// パラメータが無い、または空文字なら `DEFAULT_LIMIT`。
    pub fn from_param(param: Option<String>) -> Self {
        match param {
            Some(value) if !value.is_empty() => Self(value),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT.to_string())
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Limit> for String {
    fn from(limit: Limit) -> Self {
        limit.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_param_defaults_to_fifteen() {
        assert_eq!(Limit::from_param(None).as_str(), "15");
    }

    #[test]
    fn empty_param_defaults_to_fifteen() {
        assert_eq!(Limit::from_param(Some(String::new())).as_str(), "15");
    }

    #[test]
    fn value_is_kept_verbatim() {
        assert_eq!(Limit::from_param(Some("30".to_string())).as_str(), "30");
        // 数値チェックはしない
        assert_eq!(Limit::from_param(Some("todos".to_string())).to_string(), "todos");
        assert_eq!(String::from(Limit::from_param(Some(" 7".to_string()))), " 7");
    }
}
