// src/config/page.rs
//! ページ側 (バックエンドが描画する HTML) と取り決めている定数たち。
//! ID やクラス名を変えるときはテンプレートと CSS も一緒に直すこと！

/// ドロップダウンが読み書きするクエリパラメータ名。
pub const LIMIT_PARAM: &str = "limit";
/// `limit` が無い (または空) ときに使う値。数値ではなく文字列のまま扱う。
pub const DEFAULT_LIMIT: &str = "15";
/// 表示件数を選ぶ `<select>` の ID。
pub const LIMIT_SELECTOR_ID: &str = "limit-selector";
/// `limit` を変えたときの遷移先パス。
pub const LIMIT_PATH: &str = "/";

/// セル要素のタグ。
pub const CELL_TAG: &str = "div";
/// すべてのセルに付くクラス。
pub const CELL_CLASS: &str = "cartela-cell";
/// 当選番号のセルに追加されるクラス。
pub const SELECTED_CLASS: &str = "selected";

pub const GRID_SIDE: u8 = 5; // 5x5
pub const GRID_CELLS: u8 = GRID_SIDE * GRID_SIDE;
