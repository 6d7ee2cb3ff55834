// src/components/drawn_numbers.rs

// serde を使う宣言！バックエンドが埋め込む JSON からも作れるようにするため。
use serde::Deserialize;
use serde_json::Value;
// JS から渡される配列 (や Set) を受け取るのに JsValue を使うよ。
use wasm_bindgen::JsValue;

use crate::error::PageError;

/// 1枚のカルテラで「当たった」番号の集まりだよ！🎯
///
/// ページ (またはバックエンドが埋め込む JSON) から来たものをそのまま持つだけで、
/// 範囲チェックも重複除去もしない。範囲外の番号はどのセルにも当たらないだけ。
/// 順番も関係なし！
///
/// JS の配列から作っても JSON から作っても同じルールで読むよ:
/// 整数と等しい数値だけ残して、`"5"` や `5.5` みたいなのは黙って捨てる。
/// (ページ側は `includes` の厳密等価で比べるので、どうせ当たらないからね)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Value>")]
pub struct DrawnNumbers(Vec<i64>);

impl DrawnNumbers {
    pub fn new(numbers: Vec<i64>) -> Self {
        Self(numbers)
    }

    /// 数値として読めたものだけを集める。`None` は数値じゃなかった要素。
    pub fn from_f64s<I: IntoIterator<Item = Option<f64>>>(values: I) -> Self {
        values
            .into_iter()
            .flatten()
            .filter_map(integral)
            .collect()
    }

    /// JS のイテラブル (配列、型付き配列、`Set` など) から読む。
    /// イテラブルじゃなければエラー (JS 側の例外になる)。
    pub fn from_js(value: &JsValue) -> Result<Self, JsValue> {
        let iter = js_sys::try_iter(value)?.ok_or(PageError::NotIterable)?;
        let mut numbers = Vec::new();
        for item in iter {
            numbers.push(item?.as_f64());
        }
        Ok(Self::from_f64s(numbers))
    }

    pub fn contains(&self, number: i64) -> bool {
        self.0.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &i64> {
        self.0.iter()
    }
}

impl From<Vec<i64>> for DrawnNumbers {
    fn from(numbers: Vec<i64>) -> Self {
        Self(numbers)
    }
}

// JSON 配列の要素を JS の配列と同じルールでふるいにかける
impl From<Vec<Value>> for DrawnNumbers {
    fn from(values: Vec<Value>) -> Self {
        Self::from_f64s(values.iter().map(Value::as_f64))
    }
}

impl FromIterator<i64> for DrawnNumbers {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn integral(value: f64) -> Option<i64> {
    // i64 の範囲外はどうせどのセルにも当たらないので捨てる
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
